//! Placeholder templates.
//!
//! A token is `[` followed by one or more characters other than `[` and `]`,
//! closed by `]`. Anything else, including `[]` and an unterminated `[`, is
//! literal text.

use std::collections::BTreeSet;

use crate::bundle::TokenBundle;

/// One piece of a scanned template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Token(String),
}

/// A template scanned once into literal and token segments.
///
/// Rendering walks the segments and writes bundle values verbatim. Values
/// are never re-scanned, so bracket text inside a fragment cannot trigger a
/// second substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(source: impl Into<String>) -> Self {
        let source = source.into();
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = source.as_str();

        while let Some(open) = rest.find('[') {
            literal.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find(|c: char| c == '[' || c == ']') {
                Some(end) if end > 0 && after[end..].starts_with(']') => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Token(after[..end].to_string()));
                    rest = &after[end + 1..];
                }
                _ => {
                    literal.push('[');
                    rest = after;
                }
            }
        }
        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { source, segments }
    }

    /// The original template text.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Distinct token names referenced by the template.
    pub fn token_names(&self) -> BTreeSet<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Token(name) => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// Tokens the bundle does not cover; these stay literal in the output.
    pub fn missing_tokens<'t>(&'t self, bundle: &TokenBundle) -> Vec<&'t str> {
        self.token_names()
            .into_iter()
            .filter(|name| !bundle.contains(name))
            .collect()
    }

    /// Substitute every token occurrence with its bundle value.
    ///
    /// Tokens without a value are written back as `[name]`.
    pub fn render(&self, bundle: &TokenBundle) -> String {
        let mut out = String::with_capacity(self.source.len() * 4);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Token(name) => match bundle.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        log::debug!("No value for token [{}], leaving it in place", name);
                        out.push('[');
                        out.push_str(name);
                        out.push(']');
                    }
                },
            }
        }
        out
    }
}

impl From<&str> for Template {
    fn from(source: &str) -> Self {
        Self::parse(source)
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

/// Scan `template` and render it with `bundle` in one call.
pub fn render(template: &str, bundle: &TokenBundle) -> String {
    Template::parse(template).render(bundle)
}
