use crate::token::{Kind, Token};

/// Pull-based tokenizer. `next_token` hands out one classified token per
/// call and returns end-of-input tokens forever once the buffer is
/// exhausted. It never fails: unrecognized characters are reported to
/// stderr and come back as `Kind::Unknown` for the parser to reject.
pub struct Lexer {
    chars: Vec<char>,
    current: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            current: 0,
            line: 1,
            column: 1,
        }
    }

    fn at(&self) -> char {
        if self.current >= self.chars.len() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    fn is_eof(&self) -> bool {
        self.current >= self.chars.len()
    }

    fn advance(&mut self) {
        if self.is_eof() {
            return;
        }
        if self.at() == '\n' {
            self.line += 1;
            self.column = 0;
        }
        self.current += 1;
        self.column += 1;
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();
            let line = self.line;
            let column = self.column;

            let (kind, value) = match self.at() {
                '\0' => (Kind::Eof, String::new()),
                '\n' => {
                    self.advance();
                    (Kind::Eol, "\n".to_string())
                }
                '"' => self.read_string(),
                '{' => {
                    self.advance();
                    (Kind::LBrace, "{".to_string())
                }
                '}' => {
                    self.advance();
                    (Kind::RBrace, "}".to_string())
                }
                '(' => {
                    self.advance();
                    (Kind::LParen, "(".to_string())
                }
                ')' => {
                    self.advance();
                    (Kind::RParen, ")".to_string())
                }
                '[' => {
                    self.advance();
                    (Kind::LBracket, "[".to_string())
                }
                ']' => {
                    self.advance();
                    (Kind::RBracket, "]".to_string())
                }
                ',' => {
                    self.advance();
                    (Kind::Comma, ",".to_string())
                }
                '=' => {
                    self.advance();
                    if self.at() == '=' {
                        self.advance();
                        (Kind::Operator, "==".to_string())
                    } else {
                        (Kind::Assign, "=".to_string())
                    }
                }
                '>' => {
                    self.advance();
                    if self.at() == '=' {
                        self.advance();
                        (Kind::Operator, ">=".to_string())
                    } else {
                        (Kind::Operator, ">".to_string())
                    }
                }
                '<' => {
                    self.advance();
                    if self.at() == '=' {
                        self.advance();
                        (Kind::Operator, "<=".to_string())
                    } else {
                        (Kind::Operator, "<".to_string())
                    }
                }
                '!' => {
                    self.advance();
                    if self.at() == '=' {
                        self.advance();
                        (Kind::Operator, "!=".to_string())
                    } else {
                        eprintln!(
                            "warning: unexpected character `!` at line {}, column {}",
                            line, column
                        );
                        (Kind::Unknown, "!".to_string())
                    }
                }
                '+' => {
                    self.advance();
                    match self.at() {
                        '=' => {
                            self.advance();
                            (Kind::PlusAssign, "+=".to_string())
                        }
                        '+' => {
                            self.advance();
                            (Kind::Increment, "++".to_string())
                        }
                        _ => (Kind::Operator, "+".to_string()),
                    }
                }
                '-' => {
                    self.advance();
                    match self.at() {
                        '=' => {
                            self.advance();
                            (Kind::MinusAssign, "-=".to_string())
                        }
                        '-' => {
                            self.advance();
                            (Kind::Decrement, "--".to_string())
                        }
                        _ => (Kind::Operator, "-".to_string()),
                    }
                }
                '*' => {
                    self.advance();
                    if self.at() == '=' {
                        self.advance();
                        (Kind::StarAssign, "*=".to_string())
                    } else {
                        (Kind::Operator, "*".to_string())
                    }
                }
                '/' => {
                    self.advance();
                    match self.at() {
                        '/' => {
                            self.skip_line_comment();
                            continue;
                        }
                        '*' => {
                            self.skip_block_comment();
                            continue;
                        }
                        '=' => {
                            self.advance();
                            (Kind::SlashAssign, "/=".to_string())
                        }
                        _ => (Kind::Operator, "/".to_string()),
                    }
                }
                c if c.is_ascii_digit() => (Kind::Number, self.read_number()),
                c if c.is_ascii_alphabetic() || c == '_' => self.read_word(),
                c => {
                    eprintln!(
                        "warning: unexpected character `{}` at line {}, column {}",
                        c, line, column
                    );
                    self.advance();
                    (Kind::Unknown, c.to_string())
                }
            };

            return Token {
                line,
                column,
                kind,
                value,
            };
        }
    }

    fn skip_whitespace(&mut self) {
        while self.at() != '\n' && self.at().is_whitespace() {
            self.advance();
        }
    }

    /// Stops short of the line break so a statement the comment trails
    /// still ends on its own line.
    fn skip_line_comment(&mut self) {
        while self.at() != '\n' && !self.is_eof() {
            self.advance();
        }
    }

    /// Runs greedily to the first `*/`, or silently to end of input.
    fn skip_block_comment(&mut self) {
        self.advance();
        while !self.is_eof() {
            if self.at() == '*' {
                self.advance();
                if self.at() == '/' {
                    self.advance();
                    return;
                }
            } else {
                self.advance();
            }
        }
    }

    fn read_number(&mut self) -> String {
        let mut number = String::new();
        while self.at().is_ascii_digit() || self.at() == '.' {
            number.push(self.at());
            self.advance();
        }
        number
    }

    /// No escape handling; an unterminated literal runs to end of input.
    fn read_string(&mut self) -> (Kind, String) {
        let mut text = '"'.to_string();
        self.advance();
        while self.at() != '"' && !self.is_eof() {
            text.push(self.at());
            self.advance();
        }
        if self.at() == '"' {
            text.push('"');
            self.advance();
        }
        (Kind::String, text)
    }

    fn read_word(&mut self) -> (Kind, String) {
        let mut word = String::new();
        while self.at().is_ascii_alphanumeric() || self.at() == '_' {
            word.push(self.at());
            self.advance();
        }
        if word == "else" && self.collapse_else_if() {
            return (Kind::ElseIf, "else if".to_string());
        }
        match Self::keyword(&word) {
            Some(kind) => (kind, word),
            None => (Kind::Identifier, word),
        }
    }

    fn keyword(word: &str) -> Option<Kind> {
        match word {
            "if" => Some(Kind::If),
            "then" => Some(Kind::Then),
            "else" => Some(Kind::Else),
            "print" => Some(Kind::Print),
            "for" => Some(Kind::For),
            "random" => Some(Kind::Random),
            _ => None,
        }
    }

    /// `else` followed by `if` on the same line collapses into a single
    /// lookahead unit. The cursor is restored when the next word turns
    /// out to be something else.
    fn collapse_else_if(&mut self) -> bool {
        let (current, line, column) = (self.current, self.line, self.column);
        while self.at() == ' ' || self.at() == '\t' {
            self.advance();
        }
        let mut word = String::new();
        while self.at().is_ascii_alphanumeric() || self.at() == '_' {
            word.push(self.at());
            self.advance();
        }
        if word == "if" {
            return true;
        }
        self.current = current;
        self.line = line;
        self.column = column;
        false
    }
}
