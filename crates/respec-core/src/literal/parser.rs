//! Recursive-descent parser from tokens to `serde_json::Value`.

use serde_json::{Map, Number, Value};

use super::lexer::{Lexer, Token, TokenKind};
use super::LiteralDocument;
use crate::error::{Error, Result};

/// Objects and arrays nested deeper than this are rejected.
const MAX_DEPTH: usize = 128;

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Result<Self> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            depth: 0,
        })
    }

    fn advance(&mut self) -> Result<Token> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn unexpected(&self, expected: &str) -> Error {
        Error::parse(
            self.current.line,
            self.current.column,
            format!("expected {expected}, found {}", self.current.kind.describe()),
        )
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<()> {
        if self.current.kind == kind {
            self.advance()?;
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn at_ident(&self, name: &str) -> bool {
        matches!(&self.current.kind, TokenKind::Ident(n) if n == name)
    }

    /// Parses a whole file: an optional binding prefix, one value, optional
    /// semicolons, then end of input.
    pub fn document(mut self) -> Result<LiteralDocument> {
        let binding = self.binding()?;
        let value = self.value("")?.unwrap_or(Value::Null);
        while self.current.kind == TokenKind::Semicolon {
            self.advance()?;
        }
        if self.current.kind != TokenKind::Eof {
            return Err(self.unexpected("end of input"));
        }
        Ok(LiteralDocument { binding, value })
    }

    /// `var|let|const NAME =` or `export default`.
    fn binding(&mut self) -> Result<Option<String>> {
        if self.at_ident("var") || self.at_ident("let") || self.at_ident("const") {
            self.advance()?;
            let name = match self.advance()?.kind {
                TokenKind::Ident(name) => name,
                _ => {
                    return Err(Error::parse(
                        self.current.line,
                        self.current.column,
                        "expected variable name",
                    ));
                }
            };
            self.expect(TokenKind::Equals, "'='")?;
            return Ok(Some(name));
        }
        if self.at_ident("export") {
            self.advance()?;
            if !self.at_ident("default") {
                return Err(self.unexpected("'default'"));
            }
            self.advance()?;
        }
        Ok(None)
    }

    /// Parses one value. `None` stands for `undefined`.
    fn value(&mut self, path: &str) -> Result<Option<Value>> {
        let value = match &self.current.kind {
            TokenKind::LBrace => Value::Object(self.nested(|p| p.object(path))?),
            TokenKind::LBracket => Value::Array(self.nested(|p| p.array(path))?),
            TokenKind::Str(_) | TokenKind::Num(_) => match self.advance()?.kind {
                TokenKind::Str(s) => Value::String(s),
                TokenKind::Num(n) => Value::Number(n),
                _ => unreachable!("token kind checked above"),
            },
            TokenKind::Ident(name) => {
                let value = match name.as_str() {
                    "true" => Some(Value::Bool(true)),
                    "false" => Some(Value::Bool(false)),
                    "null" => Some(Value::Null),
                    "undefined" => None,
                    other => {
                        return Err(Error::parse(
                            self.current.line,
                            self.current.column,
                            format!("unsupported expression '{other}'"),
                        ));
                    }
                };
                self.advance()?;
                return Ok(value);
            }
            _ => return Err(self.unexpected("a value")),
        };
        Ok(Some(value))
    }

    fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= MAX_DEPTH {
            return Err(Error::parse(
                self.current.line,
                self.current.column,
                "nesting too deep",
            ));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn object(&mut self, path: &str) -> Result<Map<String, Value>> {
        self.expect(TokenKind::LBrace, "'{'")?;
        let mut map = Map::new();

        while self.current.kind != TokenKind::RBrace {
            let key_token = self.advance()?;
            let key = match key_token.kind {
                TokenKind::Ident(name) | TokenKind::Str(name) => name,
                TokenKind::Num(n) => numeric_key(&n),
                other => {
                    return Err(Error::parse(
                        key_token.line,
                        key_token.column,
                        format!("expected property name, found {}", other.describe()),
                    ));
                }
            };
            self.expect(TokenKind::Colon, "':'")?;

            let child = join(path, &key);
            // An `undefined` member is absent, so it cannot collide.
            if let Some(value) = self.value(&child)? {
                if map.contains_key(&key) {
                    return Err(Error::DuplicateKey {
                        key,
                        path: if path.is_empty() { "$".to_string() } else { path.to_string() },
                        line: key_token.line,
                        column: key_token.column,
                    });
                }
                map.insert(key, value);
            }

            match self.current.kind {
                TokenKind::Comma => {
                    self.advance()?;
                }
                TokenKind::RBrace => {}
                _ => return Err(self.unexpected("',' or '}'")),
            }
        }
        self.advance()?;
        Ok(map)
    }

    fn array(&mut self, path: &str) -> Result<Vec<Value>> {
        self.expect(TokenKind::LBracket, "'['")?;
        let mut items = Vec::new();

        while self.current.kind != TokenKind::RBracket {
            let child = format!("{path}[{}]", items.len());
            items.push(self.value(&child)?.unwrap_or(Value::Null));

            match self.current.kind {
                TokenKind::Comma => {
                    self.advance()?;
                }
                TokenKind::RBracket => {}
                _ => return Err(self.unexpected("',' or ']'")),
            }
        }
        self.advance()?;
        Ok(items)
    }
}

/// Spells a numeric property name the way JavaScript does, so `1`, `1.0`
/// and `0x1` all name the same member.
fn numeric_key(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f == 0.0 => "0".to_string(),
        Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}
