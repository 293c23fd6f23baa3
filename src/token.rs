#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub(crate) line: usize,
    pub(crate) column: usize,
    pub(crate) kind: Kind,
    pub(crate) value: String,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Kind {
    // Brackets and delimiters
    LBrace,      // {
    RBrace,      // }
    LParen,      // (
    RParen,      // )
    LBracket,    // [
    RBracket,    // ]
    Comma,       // ,

    // Operators
    Assign,      // =
    PlusAssign,  // +=
    MinusAssign, // -=
    StarAssign,  // *=
    SlashAssign, // /=
    Increment,   // ++
    Decrement,   // --
    Operator,    // + - * / == != < <= > >=

    // Keywords
    If,
    Then,
    Else,
    ElseIf,      // collapsed `else` + `if`
    Print,
    For,
    Random,

    // Identifiers and literals
    Identifier,
    Number,
    String,

    Eol,         // statements are line-delimited, so newlines are tokens
    Eof,         // end of input marker
    Unknown,     // unrecognized character, reported by the lexer
}

impl Token {
    pub(crate) fn eof(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            kind: Kind::Eof,
            value: String::new(),
        }
    }

    /// The payload of a string literal, quotes stripped. An unterminated
    /// literal only carries the opening quote.
    pub(crate) fn string_content(&self) -> &str {
        let text = self.value.strip_prefix('"').unwrap_or(&self.value);
        text.strip_suffix('"').unwrap_or(text)
    }

    pub(crate) fn is_comparison(&self) -> bool {
        self.kind == Kind::Operator
            && matches!(self.value.as_str(), "==" | "!=" | "<" | "<=" | ">" | ">=")
    }

    /// Human-readable spelling for diagnostics.
    pub(crate) fn describe(&self) -> String {
        match self.kind {
            Kind::Eol => "end of line".to_string(),
            Kind::Eof => "end of input".to_string(),
            _ => format!("`{}`", self.value),
        }
    }
}
