// src/antispam/sanitize.rs
use aho_corasick::{AhoCorasick, BuildError};

pub const MAX_NOTE_CHARS: usize = 280;

const BANNED: [&str; 3] = ["fuck", "kanker", "idioot"];
const MASK: &str = "***";

/// Cleans free text from visitors: trims, bounds the length and masks a small
/// word blacklist (ASCII case-insensitive).
#[derive(Debug, Clone)]
pub struct NoteSanitizer {
    matcher: AhoCorasick,
}

impl NoteSanitizer {
    pub fn new() -> Result<Self, BuildError> {
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(BANNED)?;
        Ok(Self { matcher })
    }

    pub fn sanitize(&self, note: &str) -> String {
        let trimmed = note.trim();
        let bounded: String = trimmed.chars().take(MAX_NOTE_CHARS).collect();
        let masks = [MASK; BANNED.len()];
        self.matcher.replace_all(&bounded, &masks)
    }

    /// `None` for notes that are empty after cleaning.
    pub fn sanitize_optional(&self, note: Option<&str>) -> Option<String> {
        note.map(|n| self.sanitize(n)).filter(|n| !n.is_empty())
    }
}
