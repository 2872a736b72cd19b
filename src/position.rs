//! Line/column location of a point in source text

use std::fmt;

use logos::Logos;

/// Line separators recognised when counting lines, the same set `splitlines`
/// uses for `\r\n`, `\r`, `\n`, `\v` and `\f`
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Piece {
    // `\r\n` is one separator: logos takes the longest match
    #[regex(r"\r\n|\r|\n|\x0B|\x0C")]
    LineBreak,

    #[regex(r"[^\r\n\x0B\x0C]+")]
    Text,
}

/// 1-based line and column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Locate the point right after `consumed`
    ///
    /// `consumed` must be the text preceding the point of interest, not the
    /// whole input. Columns count chars, not bytes.
    pub fn locate(consumed: &str) -> Self {
        let mut separators = 0;
        let mut line_start = 0;
        let mut lexer = Piece::lexer(consumed);
        while let Some(piece) = lexer.next() {
            if let Ok(Piece::LineBreak) = piece {
                separators += 1;
                line_start = lexer.span().end;
            }
        }
        let column = consumed[line_start..].chars().count();
        Self::new(separators + 1, column + 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, col {}", self.line, self.column)
    }
}
