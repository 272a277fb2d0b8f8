use std::fmt;

use log::trace;

use crate::{
    ast::{Operator, Slice},
    error::LexError,
};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// Represents a lexical token in the source input.
///
/// Every token carries the character span it was read from.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    Number(f64, Slice),
    /// Identifier tokens; variable or function names such as `x` or `log10`.
    Ident(String, Slice),
    /// Operator tokens, such as `**` or `&&`.
    Operator(Operator, Slice),
    /// `(`
    Open(Slice),
    /// `)`
    Close(Slice),
    /// `,`
    Comma(Slice),
}

impl Token {
    /// The source span of the token.
    #[must_use]
    pub const fn slice(&self) -> Slice {
        match self {
            Self::Number(_, slice)
            | Self::Ident(_, slice)
            | Self::Operator(_, slice)
            | Self::Open(slice)
            | Self::Close(slice)
            | Self::Comma(slice) => *slice,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value, _) => write!(f, "`{value}`"),
            Self::Ident(name, _) => write!(f, "`{name}`"),
            Self::Operator(op, _) => write!(f, "{op}"),
            Self::Open(_) => write!(f, "`(`"),
            Self::Close(_) => write!(f, "`)`"),
            Self::Comma(_) => write!(f, "`,`"),
        }
    }
}

/// What the scanner is currently accumulating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Init,
    Integer,
    Double,
    Ident,
    Operator,
}

/// Scans source text into [`Token`]s.
///
/// The lexer is a finite-state scanner that reads one character at a time and
/// emits a token whenever the pending run ends. It is forward-only and cannot
/// be restarted; after the first error it yields nothing more.
///
/// # Example
/// ```
/// use exprcalc::{
///     ast::{Operator, Slice},
///     interpreter::lexer::{Lexer, Token},
/// };
///
/// let tokens: Vec<Token> = Lexer::new("a**2").collect::<Result<_, _>>().unwrap();
///
/// assert_eq!(tokens,
///            vec![Token::Ident("a".to_string(), Slice::point(0)),
///                 Token::Operator(Operator::Pow, Slice::new(1, 2)),
///                 Token::Number(2.0, Slice::point(3))]);
/// ```
pub struct Lexer {
    chars: Vec<char>,
    pos:   usize,
    state: ScanState,
    start: usize,
    done:  bool,
}

impl Lexer {
    /// Creates a lexer over `source`.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self { chars: source.chars().collect(),
               pos:   0,
               state: ScanState::Init,
               start: 0,
               done:  false, }
    }

    /// Reads characters until a token is complete or the input is exhausted.
    ///
    /// Past the last character the scanner sees one synthetic space, which
    /// flushes whatever run is still pending.
    fn scan(&mut self) -> LexResult<Option<Token>> {
        while self.pos <= self.chars.len() {
            let pos = self.pos;
            let c = self.chars.get(pos).copied().unwrap_or(' ');

            let token = if c.is_whitespace() {
                self.pos += 1;
                self.transition(ScanState::Init, pos)?
            } else if c.is_ascii_digit() {
                let next = match self.state {
                    ScanState::Double | ScanState::Ident => self.state,
                    _ => ScanState::Integer,
                };
                self.pos += 1;
                self.transition(next, pos)?
            } else if c == '.' {
                if self.state != ScanState::Integer {
                    return Err(LexError::MisplacedDecimalPoint { pos });
                }
                self.pos += 1;
                self.transition(ScanState::Double, pos)?
            } else if c.is_alphabetic() {
                self.pos += 1;
                self.transition(ScanState::Ident, pos)?
            } else if Operator::is_symbol_char(c) {
                self.pos += 1;
                self.transition(ScanState::Operator, pos)?
            } else if matches!(c, '(' | ')' | ',') {
                // Flush first; the delimiter itself is read again on the next call.
                match self.transition(ScanState::Init, pos)? {
                    Some(token) => Some(token),
                    None => {
                        self.pos += 1;
                        Some(delimiter(c, pos))
                    },
                }
            } else {
                return Err(LexError::InvalidCharacter { ch: c, pos });
            };

            if token.is_some() {
                return Ok(token);
            }
        }
        Ok(None)
    }

    /// Moves the scanner into `next` at offset `pos`.
    ///
    /// Returns the token ended by the move, if any. Staying in the same state
    /// and going from an integer to a double both extend the pending run.
    fn transition(&mut self, next: ScanState, pos: usize) -> LexResult<Option<Token>> {
        let (current, start) = (self.state, self.start);
        if current == next {
            return Ok(None);
        }
        if current == ScanState::Integer && next == ScanState::Double {
            self.state = ScanState::Double;
            return Ok(None);
        }

        self.state = next;
        self.start = pos;
        if current == ScanState::Init {
            return Ok(None);
        }
        self.materialize(current, Slice::new(start, pos - 1))
    }

    fn materialize(&self, state: ScanState, slice: Slice) -> LexResult<Option<Token>> {
        let text: String = self.chars[slice.start()..=slice.end()].iter().collect();
        let token = match state {
            ScanState::Init => return Ok(None),
            ScanState::Integer | ScanState::Double => {
                // Runs of ASCII digits with at most one `.` always parse.
                let value = text.parse::<f64>()
                                .map_err(|_| LexError::InvalidNumber { literal: text.clone(),
                                                                       slice })?;
                Token::Number(value, slice)
            },
            ScanState::Ident => Token::Ident(text, slice),
            ScanState::Operator => {
                let op = Operator::from_symbol(&text).ok_or_else(|| {
                                                         LexError::UnknownOperator { symbol: text.clone(),
                                                                                     slice }
                                                     })?;
                Token::Operator(op, slice)
            },
        };
        trace!("token {token} at {slice}");
        Ok(Some(token))
    }
}

const fn delimiter(c: char, pos: usize) -> Token {
    let slice = Slice::point(pos);
    match c {
        '(' => Token::Open(slice),
        ')' => Token::Close(slice),
        _ => Token::Comma(slice),
    }
}

impl Iterator for Lexer {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.scan() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.done = true;
                None
            },
            Err(e) => {
                self.done = true;
                Some(Err(e))
            },
        }
    }
}

impl std::iter::FusedIterator for Lexer {}
