//! Tokenizer for JavaScript object literals.

use std::iter::Peekable;
use std::str::Chars;

use crate::error::{Error, Result};

/// Token kinds produced by [`Lexer`].
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Colon,
    Comma,
    Semicolon,
    Equals,
    Str(String),
    Num(serde_json::Number),
    Ident(String),
    Eof,
}

impl TokenKind {
    /// Short description used in error messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::LBrace => "'{'".to_string(),
            TokenKind::RBrace => "'}'".to_string(),
            TokenKind::LBracket => "'['".to_string(),
            TokenKind::RBracket => "']'".to_string(),
            TokenKind::Colon => "':'".to_string(),
            TokenKind::Comma => "','".to_string(),
            TokenKind::Semicolon => "';'".to_string(),
            TokenKind::Equals => "'='".to_string(),
            TokenKind::Str(_) => "string".to_string(),
            TokenKind::Num(n) => format!("number {n}"),
            TokenKind::Ident(name) => format!("'{name}'"),
            TokenKind::Eof => "end of input".to_string(),
        }
    }
}

/// A token and the 1-based position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
}

/// Streaming tokenizer over a source string.
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn error<S: Into<String>>(&self, message: S) -> Error {
        Error::parse(self.line, self.column, message)
    }

    /// Produces the next token, skipping whitespace and comments.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_trivia()?;
        let (line, column) = (self.line, self.column);
        let Some(c) = self.peek() else {
            return Ok(Token {
                kind: TokenKind::Eof,
                line,
                column,
            });
        };

        let kind = match c {
            '{' | '}' | '[' | ']' | ':' | ',' | ';' | '=' => {
                self.bump();
                match c {
                    '{' => TokenKind::LBrace,
                    '}' => TokenKind::RBrace,
                    '[' => TokenKind::LBracket,
                    ']' => TokenKind::RBracket,
                    ':' => TokenKind::Colon,
                    ',' => TokenKind::Comma,
                    ';' => TokenKind::Semicolon,
                    _ => TokenKind::Equals,
                }
            }
            '"' | '\'' | '`' => TokenKind::Str(self.string()?),
            '0'..='9' | '-' | '+' | '.' => TokenKind::Num(self.number()?),
            c if is_ident_start(c) => TokenKind::Ident(self.ident()),
            other => return Err(self.error(format!("unexpected character '{other}'"))),
        };
        Ok(Token { kind, line, column })
    }

    fn skip_trivia(&mut self) -> Result<()> {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() || c == '\u{feff}' => {
                    self.bump();
                }
                Some('/') => {
                    let mut ahead = self.chars.clone();
                    ahead.next();
                    match ahead.next() {
                        Some('/') => {
                            while let Some(c) = self.peek() {
                                if c == '\n' {
                                    break;
                                }
                                self.bump();
                            }
                        }
                        Some('*') => {
                            let (line, column) = (self.line, self.column);
                            self.bump();
                            self.bump();
                            let mut closed = false;
                            while let Some(c) = self.bump() {
                                if c == '*' && self.peek() == Some('/') {
                                    self.bump();
                                    closed = true;
                                    break;
                                }
                            }
                            if !closed {
                                return Err(Error::parse(
                                    line,
                                    column,
                                    "unterminated block comment",
                                ));
                            }
                        }
                        _ => return Err(self.error("unexpected character '/'")),
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn ident(&mut self) -> String {
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if is_ident_start(c) || c.is_ascii_digit() {
                name.push(c);
                self.bump();
            } else {
                break;
            }
        }
        name
    }

    fn string(&mut self) -> Result<String> {
        let (line, column) = (self.line, self.column);
        let Some(quote) = self.bump() else {
            return Err(self.error("expected string"));
        };
        let mut out = String::new();
        loop {
            let Some(c) = self.bump() else {
                return Err(Error::parse(line, column, "unterminated string"));
            };
            let next = self.peek();
            match c {
                c if c == quote => return Ok(out),
                '\n' if quote != '`' => {
                    return Err(Error::parse(line, column, "unterminated string"));
                }
                '$' if quote == '`' && next == Some('{') => {
                    return Err(self.error("template interpolation is not supported"));
                }
                '\\' => {
                    if let Some(escaped) = self.escape()? {
                        out.push(escaped);
                    }
                }
                c => out.push(c),
            }
        }
    }

    /// Decodes one escape sequence after a backslash. `None` means a line
    /// continuation that contributes nothing.
    fn escape(&mut self) -> Result<Option<char>> {
        let Some(c) = self.bump() else {
            return Err(self.error("unterminated escape sequence"));
        };
        let next = self.peek();
        let decoded = match c {
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'b' => '\u{08}',
            'f' => '\u{0c}',
            'v' => '\u{0b}',
            '0' if !next.is_some_and(|c| c.is_ascii_digit()) => '\0',
            'x' => {
                let code = self.hex_digits(2)?;
                char::from_u32(code).ok_or_else(|| self.error("invalid \\x escape"))?
            }
            'u' => self.unicode_escape()?,
            '\r' => {
                if self.peek() == Some('\n') {
                    self.bump();
                }
                return Ok(None);
            }
            '\n' | '\u{2028}' | '\u{2029}' => return Ok(None),
            other => other,
        };
        Ok(Some(decoded))
    }

    fn unicode_escape(&mut self) -> Result<char> {
        if self.peek() == Some('{') {
            self.bump();
            let mut code: u32 = 0;
            let mut digits = 0;
            loop {
                match self.bump() {
                    Some('}') if digits > 0 => break,
                    Some(c) if c.is_ascii_hexdigit() && digits < 6 => {
                        code = code * 16 + c.to_digit(16).unwrap_or(0);
                        digits += 1;
                    }
                    _ => return Err(self.error("invalid \\u{...} escape")),
                }
            }
            return char::from_u32(code).ok_or_else(|| self.error("invalid code point"));
        }

        let high = self.hex_digits(4)?;
        if (0xD800..0xDC00).contains(&high) {
            let mut ahead = self.chars.clone();
            if ahead.next() == Some('\\') && ahead.next() == Some('u') {
                self.bump();
                self.bump();
                let low = self.hex_digits(4)?;
                if (0xDC00..0xE000).contains(&low) {
                    let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
                    return char::from_u32(code).ok_or_else(|| self.error("invalid surrogate pair"));
                }
            }
            return Err(self.error("unpaired surrogate in \\u escape"));
        }
        char::from_u32(high).ok_or_else(|| self.error("unpaired surrogate in \\u escape"))
    }

    fn hex_digits(&mut self, count: usize) -> Result<u32> {
        let mut code = 0;
        for _ in 0..count {
            match self.bump().and_then(|c| c.to_digit(16)) {
                Some(d) => code = code * 16 + d,
                None => return Err(self.error("invalid hexadecimal escape")),
            }
        }
        Ok(code)
    }

    fn number(&mut self) -> Result<serde_json::Number> {
        let (line, column) = (self.line, self.column);
        let mut text = String::new();
        if let Some(sign @ ('-' | '+')) = self.peek() {
            self.bump();
            if sign == '-' {
                text.push('-');
            }
        }

        if self.peek() == Some('0') {
            let mut ahead = self.chars.clone();
            ahead.next();
            if matches!(ahead.next(), Some('x' | 'X')) {
                self.bump();
                self.bump();
                let mut digits = String::new();
                while let Some(c) = self.peek().filter(char::is_ascii_hexdigit) {
                    digits.push(c);
                    self.bump();
                }
                let value = i64::from_str_radix(&digits, 16)
                    .map_err(|_| Error::parse(line, column, "invalid hexadecimal number"))?;
                let value = if text.starts_with('-') { -value } else { value };
                return Ok(value.into());
            }
        }

        let mut is_float = false;
        while let Some(c) = self.peek() {
            match c {
                '0'..='9' => text.push(c),
                '.' | 'e' | 'E' => {
                    is_float = true;
                    text.push(c);
                }
                '+' | '-' if text.ends_with(['e', 'E']) => text.push(c),
                _ => break,
            }
            self.bump();
        }

        if is_ident_start(self.peek().unwrap_or(' ')) {
            return Err(Error::parse(line, column, "invalid number"));
        }
        let invalid = || Error::parse(line, column, format!("invalid number '{text}'"));
        if !is_float {
            if let Ok(i) = text.parse::<i64>() {
                return Ok(i.into());
            }
            if let Ok(u) = text.parse::<u64>() {
                return Ok(u.into());
            }
        }
        // A leading '.' is valid in JavaScript but not for Rust's parser.
        let normalized = match text.strip_prefix('-') {
            Some(rest) if rest.starts_with('.') => format!("-0{rest}"),
            _ if text.starts_with('.') => format!("0{text}"),
            _ => text.clone(),
        };
        let float: f64 = normalized.parse().map_err(|_| invalid())?;
        serde_json::Number::from_f64(float).ok_or_else(invalid)
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(source);
        let mut out = Vec::new();
        loop {
            let token = lexer.next_token().unwrap();
            if token.kind == TokenKind::Eof {
                return out;
            }
            out.push(token.kind);
        }
    }

    fn single_string(source: &str) -> String {
        match kinds(source).pop() {
            Some(TokenKind::Str(s)) => s,
            other => unreachable!("expected string, got {other:?}"),
        }
    }

    #[test]
    fn test_punctuation_and_idents() {
        assert_eq!(
            kinds("var x = { a: [1], };"),
            vec![
                TokenKind::Ident("var".into()),
                TokenKind::Ident("x".into()),
                TokenKind::Equals,
                TokenKind::LBrace,
                TokenKind::Ident("a".into()),
                TokenKind::Colon,
                TokenKind::LBracket,
                TokenKind::Num(1.into()),
                TokenKind::RBracket,
                TokenKind::Comma,
                TokenKind::RBrace,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_single_quoted_escape() {
        assert_eq!(single_string(r"'CSS 2 Editor\'s Draft'"), "CSS 2 Editor's Draft");
    }

    #[test]
    fn test_escapes() {
        assert_eq!(single_string(r#""a\tb\nc\\d\/e""#), "a\tb\nc\\d/e");
        assert_eq!(single_string(r#""\x41B\u{43}""#), "ABC");
        assert_eq!(single_string(r#""\uD83D\uDE00""#), "\u{1F600}");
    }

    #[test]
    fn test_line_continuation() {
        assert_eq!(single_string("'ab\\\ncd'"), "abcd");
    }

    #[test]
    fn test_backtick_string() {
        assert_eq!(single_string("`multi\nline`"), "multi\nline");
    }

    #[test]
    fn test_template_interpolation_rejected() {
        let err = Lexer::new("`${x}`").next_token().unwrap_err();
        assert!(err.to_string().contains("interpolation"));
    }

    #[test]
    fn test_unterminated_string_position() {
        let err = Lexer::new("\n  'abc").next_token().unwrap_err();
        assert_eq!(err.to_string(), "Parse error at 2:3: unterminated string");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(kinds("118124"), vec![TokenKind::Num(118124.into())]);
        assert_eq!(kinds("-7"), vec![TokenKind::Num((-7).into())]);
        assert_eq!(kinds("0x1F"), vec![TokenKind::Num(31.into())]);
        assert_eq!(
            kinds(".5"),
            vec![TokenKind::Num(serde_json::Number::from_f64(0.5).unwrap())]
        );
        assert_eq!(
            kinds("1e3"),
            vec![TokenKind::Num(serde_json::Number::from_f64(1000.0).unwrap())]
        );
    }

    #[test]
    fn test_comments_skipped() {
        assert_eq!(
            kinds("// lead\n/* block\n */ a"),
            vec![TokenKind::Ident("a".into())]
        );
    }

    #[test]
    fn test_unterminated_block_comment() {
        let err = Lexer::new("/* open").next_token().unwrap_err();
        assert!(err.to_string().contains("unterminated block comment"));
    }

    #[test]
    fn test_token_positions() {
        let mut lexer = Lexer::new("{\n  key");
        lexer.next_token().unwrap();
        let token = lexer.next_token().unwrap();
        assert_eq!((token.line, token.column), (2, 3));
    }
}
