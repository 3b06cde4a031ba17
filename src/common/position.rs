use std::fmt;

/// A location in a source file
///
/// Line and column numbers are 1-based. The column counts runes, not bytes,
/// and carriage returns do not advance it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// The position of the very first rune of a file
    pub fn start(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line: 1,
            column: 1,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(file: {:?}, line: {}, char: {})",
            self.file, self.line, self.column
        )
    }
}
