// ============================================================
// Layer 4 — Line Preprocessor
// ============================================================
// Normalises one raw input line before it reaches the tokenizer.
//
// Plain-text documents copied out of editors and web pages carry:
//   - Non-breaking spaces (U+00A0)
//   - Zero-width spaces (U+200B) and byte order marks (U+FEFF)
//   - Tabs and stray control characters
//   - Runs of spaces from alignment
//
// Cleaning steps (applied in order):
//   1. Map Unicode whitespace variants and control chars to a space
//   2. Collapse runs of spaces into one
//   3. Trim both ends

pub struct Preprocessor;

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Clean a single line. Never introduces or removes newlines
    /// because the caller has already split on them.
    pub fn clean_line(&self, line: &str) -> String {
        let mut out        = String::with_capacity(line.len());
        let mut last_space = false;

        for c in line.chars() {
            let c = match c {
                '\t' | '\u{00A0}' | '\u{200B}' | '\u{FEFF}' => ' ',
                c if c.is_control() => ' ',
                c => c,
            };

            if c == ' ' {
                if !last_space {
                    out.push(' ');
                }
                last_space = true;
            } else {
                out.push(c);
                last_space = false;
            }
        }

        out.trim().to_string()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}
