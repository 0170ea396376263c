//! Status lines on stderr, cargo-style: `      Copied  12 prompts`

/// ANSI color codes for terminal styling
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const BRIGHT_GREEN: &str = "\x1b[92m";
    pub const BRIGHT_YELLOW: &str = "\x1b[93m";
}

/// Check if colors should be enabled
pub fn colors_enabled() -> bool {
    // Respect NO_COLOR and TERM conventions
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
        return false;
    }
    atty::is(atty::Stream::Stderr)
}

pub struct StatusPrinter {
    use_colors: bool,
}

impl StatusPrinter {
    pub fn new() -> Self {
        Self {
            use_colors: colors_enabled(),
        }
    }

    pub fn plain() -> Self {
        Self { use_colors: false }
    }

    fn styled(&self, color: &str, bold: bool, text: &str) -> String {
        if self.use_colors {
            let bold_code = if bold { colors::BOLD } else { "" };
            format!("{}{}{}{}", bold_code, color, text, colors::RESET)
        } else {
            text.to_string()
        }
    }

    /// `   keyword message` with the keyword right-aligned to 12 columns
    pub fn line(&self, color: &str, keyword: &str, message: &str) -> String {
        let keyword_styled = self.styled(color, true, &format!("{:>12}", keyword));
        if message.is_empty() {
            keyword_styled
        } else {
            format!("{} {}", keyword_styled, message)
        }
    }

    pub fn status(&self, keyword: &str, message: &str) {
        eprintln!("{}", self.line(colors::BRIGHT_GREEN, keyword, message));
    }

    pub fn warning(&self, keyword: &str, message: &str) {
        eprintln!("{}", self.line(colors::BRIGHT_YELLOW, keyword, message));
    }

    pub fn success(&self, keyword: &str, message: &str) {
        eprintln!("{}", self.line(colors::GREEN, keyword, message));
    }
}

impl Default for StatusPrinter {
    fn default() -> Self {
        Self::new()
    }
}
