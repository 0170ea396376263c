/// Name of the combined file written in batch mode.
pub const ALL_SIGNS_FILENAME: &str = "all-signs.txt";

/// Generate a filesystem-safe output filename for a sign's prompt
///
/// This function:
/// - Lowercases the sign name
/// - Replaces path separators and characters that are unsafe on Windows with hyphens
/// - Collapses runs of hyphens and trims them from both ends
/// - Appends ".txt"
///
/// Built-in sign names come out as e.g. `sagittarius.txt`; names from a
/// custom catalog are sanitized the same way.
pub fn generate_output_filename(sign: &str) -> String {
    let cleaned = sign
        .to_lowercase()
        .replace("..", "-")
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '<' | '>' | '|' | '"' | ' ' | '.' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<&str>>()
        .join("-");

    let stem = if cleaned.is_empty() {
        "sign".to_string()
    } else {
        cleaned
    };

    format!("{}.txt", stem)
}
