//! Clipboard copy with an OSC 52 fallback for terminals without a system clipboard.
//!
//! On Linux and the BSDs an X11 or Wayland selection is served by the process
//! that owns it, so a one-shot CLI hands the text to a resident helper
//! (`wl-copy`, `xclip`, `xsel`) instead of owning the selection itself.

use anyhow::{anyhow, Result};
use base64::Engine;
use cli_clipboard::{ClipboardContext, ClipboardProvider};
use std::io::Write;
use std::process::{Command, Stdio};

pub trait ClipboardBackend {
    fn name(&self) -> &'static str;
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// Native clipboard. Only used where the OS keeps the contents after exit
/// (macOS pasteboard, Windows clipboard).
pub struct SystemClipboard;

impl ClipboardBackend for SystemClipboard {
    fn name(&self) -> &'static str {
        "system"
    }

    fn copy(&mut self, text: &str) -> Result<()> {
        let mut ctx = ClipboardContext::new().map_err(|e| anyhow!("{e}"))?;
        ctx.set_contents(text.to_owned())
            .map_err(|e| anyhow!("{e}"))?;
        Ok(())
    }
}

/// Pipe the text into an external clipboard program.
pub struct CommandClipboard {
    program: &'static str,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: &'static str, args: &[&str]) -> Self {
        Self {
            program,
            args: args.iter().map(|arg| arg.to_string()).collect(),
        }
    }

    /// Helpers to try for the given display servers, Wayland first.
    pub fn helpers(wayland: bool, x11: bool) -> Vec<CommandClipboard> {
        let mut helpers = Vec::new();
        if wayland {
            helpers.push(Self::new("wl-copy", &[]));
        }
        if x11 {
            helpers.push(Self::new("xclip", &["-selection", "clipboard"]));
            helpers.push(Self::new("xsel", &["--clipboard", "--input"]));
        }
        helpers
    }

    pub fn detected_helpers() -> Vec<CommandClipboard> {
        Self::helpers(
            std::env::var_os("WAYLAND_DISPLAY").is_some(),
            std::env::var_os("DISPLAY").is_some(),
        )
    }
}

impl ClipboardBackend for CommandClipboard {
    fn name(&self) -> &'static str {
        self.program
    }

    fn copy(&mut self, text: &str) -> Result<()> {
        // stdout/stderr closed so a forked helper does not keep us waiting
        let mut child = Command::new(self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| anyhow!("{} not available: {}", self.program, e))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }

        let status = child.wait()?;
        if !status.success() {
            return Err(anyhow!("{} exited with {}", self.program, status));
        }
        Ok(())
    }
}

/// Terminal clipboard via the OSC 52 escape sequence.
pub struct Osc52Clipboard<W: Write> {
    writer: W,
    is_terminal: bool,
}

impl Osc52Clipboard<std::io::Stderr> {
    pub fn stderr() -> Self {
        Self {
            writer: std::io::stderr(),
            is_terminal: atty::is(atty::Stream::Stderr),
        }
    }
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(writer: W, is_terminal: bool) -> Self {
        Self {
            writer,
            is_terminal,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

pub fn osc52_sequence(text: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{}\x07", encoded)
}

impl<W: Write> ClipboardBackend for Osc52Clipboard<W> {
    fn name(&self) -> &'static str {
        "osc52"
    }

    fn copy(&mut self, text: &str) -> Result<()> {
        if !self.is_terminal {
            return Err(anyhow!("stderr is not a terminal"));
        }
        self.writer.write_all(osc52_sequence(text).as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied { backend: &'static str },
    Failed,
}

/// Try each backend in order; the first success wins.
pub fn copy_with_fallback(backends: &mut [&mut dyn ClipboardBackend], text: &str) -> CopyOutcome {
    for backend in backends.iter_mut() {
        match backend.copy(text) {
            Ok(()) => {
                tracing::debug!("Copied {} bytes via {}", text.len(), backend.name());
                return CopyOutcome::Copied {
                    backend: backend.name(),
                };
            }
            Err(e) => {
                tracing::debug!("Clipboard backend {} failed: {}", backend.name(), e);
            }
        }
    }
    CopyOutcome::Failed
}

/// Resident helper programs first, then OSC 52 on stderr.
#[cfg(all(unix, not(target_os = "macos")))]
pub fn copy_to_clipboard(text: &str) -> CopyOutcome {
    let mut helpers = CommandClipboard::detected_helpers();
    let mut osc52 = Osc52Clipboard::stderr();

    let mut backends: Vec<&mut dyn ClipboardBackend> = helpers
        .iter_mut()
        .map(|helper| helper as &mut dyn ClipboardBackend)
        .collect();
    backends.push(&mut osc52);
    copy_with_fallback(&mut backends, text)
}

/// System clipboard first, then OSC 52 on stderr.
#[cfg(not(all(unix, not(target_os = "macos"))))]
pub fn copy_to_clipboard(text: &str) -> CopyOutcome {
    let mut system = SystemClipboard;
    let mut osc52 = Osc52Clipboard::stderr();
    copy_with_fallback(&mut [&mut system, &mut osc52], text)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recording {
        fail: bool,
        copied: Vec<String>,
    }

    impl ClipboardBackend for Recording {
        fn name(&self) -> &'static str {
            if self.fail { "broken" } else { "recording" }
        }

        fn copy(&mut self, text: &str) -> Result<()> {
            if self.fail {
                return Err(anyhow!("unavailable"));
            }
            self.copied.push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_first_working_backend_wins() {
        let mut broken = Recording { fail: true, copied: vec![] };
        let mut working = Recording { fail: false, copied: vec![] };

        let outcome = copy_with_fallback(&mut [&mut broken, &mut working], "Aries:\nprompt");

        assert_eq!(outcome, CopyOutcome::Copied { backend: "recording" });
        assert_eq!(working.copied, vec!["Aries:\nprompt".to_string()]);
    }

    #[test]
    fn test_all_backends_failing() {
        let mut broken = Recording { fail: true, copied: vec![] };
        assert_eq!(copy_with_fallback(&mut [&mut broken], "x"), CopyOutcome::Failed);
        assert_eq!(copy_with_fallback(&mut [], "x"), CopyOutcome::Failed);
    }

    #[test]
    fn test_osc52_sequence() {
        assert_eq!(osc52_sequence("hi"), "\x1b]52;c;aGk=\x07");
    }

    #[test]
    fn test_osc52_writes_only_to_terminal() {
        let mut tty = Osc52Clipboard::new(Vec::new(), true);
        tty.copy("hi").unwrap();
        assert_eq!(tty.into_inner(), b"\x1b]52;c;aGk=\x07".to_vec());

        let mut pipe = Osc52Clipboard::new(Vec::new(), false);
        assert!(pipe.copy("hi").is_err());
        assert!(pipe.into_inner().is_empty());
    }

    #[test]
    fn test_helpers_per_display_server() {
        let names = |helpers: Vec<CommandClipboard>| {
            helpers.iter().map(|h| h.name()).collect::<Vec<_>>()
        };
        assert_eq!(names(CommandClipboard::helpers(true, true)), vec!["wl-copy", "xclip", "xsel"]);
        assert_eq!(names(CommandClipboard::helpers(false, true)), vec!["xclip", "xsel"]);
        assert!(CommandClipboard::helpers(false, false).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_command_clipboard_pipes_text_and_exits() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("clip.txt");
        let script = format!("cat > '{}'", target.display());
        let mut helper = CommandClipboard::new("sh", &["-c", script.as_str()]);

        helper.copy("Leo:\nmane").unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "Leo:\nmane");
    }

    #[test]
    fn test_command_clipboard_missing_program_falls_through() {
        let mut missing = CommandClipboard::new("zodiac-prompt-no-such-helper", &[]);
        let mut tty = Osc52Clipboard::new(Vec::new(), true);

        let outcome = copy_with_fallback(&mut [&mut missing, &mut tty], "hi");

        assert_eq!(outcome, CopyOutcome::Copied { backend: "osc52" });
    }

    #[cfg(unix)]
    #[test]
    fn test_command_clipboard_failing_exit_status() {
        let mut failing = CommandClipboard::new("sh", &["-c", "cat > /dev/null; exit 3"]);
        assert!(failing.copy("x").is_err());
    }
}
