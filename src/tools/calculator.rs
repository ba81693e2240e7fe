//! Arithmetic expression evaluator
//!
//! A character allow-list followed by a dedicated tokenizer and
//! recursive-descent parser over f64. There is no general-purpose evaluation
//! path: only `+ - * / ( )`, decimals, and unary sign exist. Failures are
//! returned as `"Error: ..."` text, never raised.

use thiserror::Error;

const ALLOWED_CHARS: &str = "0123456789+-*/(). ";

/// Evaluate a restricted arithmetic expression.
///
/// Any character outside `0-9 + - * / ( ) . space` short-circuits to
/// `"Error: Invalid characters in expression"` without evaluation.
pub fn evaluate(expression: &str) -> String {
    if !expression.chars().all(|c| ALLOWED_CHARS.contains(c)) {
        return "Error: Invalid characters in expression".to_string();
    }

    match eval_expression(expression) {
        Ok(value) => format_number(value),
        Err(e) => format!("Error: {e}"),
    }
}

#[derive(Debug, Error, PartialEq)]
enum CalcError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("invalid number literal")]
    InvalidNumber,
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("unexpected token '{0}'")]
    UnexpectedToken(String),
    #[error("unbalanced parentheses")]
    UnbalancedParens,
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

fn tokenize(expression: &str) -> Result<Vec<Token>, CalcError> {
    let mut tokens = Vec::new();
    let mut chars = expression.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            ' ' => {
                chars.next();
            }
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            }
            '-' => {
                chars.next();
                tokens.push(Token::Minus);
            }
            '*' => {
                chars.next();
                tokens.push(Token::Star);
            }
            '/' => {
                chars.next();
                tokens.push(Token::Slash);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            '0'..='9' | '.' => {
                let mut literal = String::new();
                while let Some(&d) = chars.peek() {
                    if d.is_ascii_digit() || d == '.' {
                        literal.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let value: f64 = literal.parse().map_err(|_| CalcError::InvalidNumber)?;
                tokens.push(Token::Number(value));
            }
            // The allow-list check runs first; anything else cannot appear.
            other => return Err(CalcError::UnexpectedToken(other.to_string())),
        }
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// expression := term (('+' | '-') term)*
    fn expression(&mut self) -> Result<f64, CalcError> {
        let mut value = self.term()?;
        while let Some(op) = self.peek().cloned() {
            match op {
                Token::Plus => {
                    self.advance();
                    value += self.term()?;
                }
                Token::Minus => {
                    self.advance();
                    value -= self.term()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    /// term := factor (('*' | '/') factor)*
    fn term(&mut self) -> Result<f64, CalcError> {
        let mut value = self.factor()?;
        while let Some(op) = self.peek().cloned() {
            match op {
                Token::Star => {
                    self.advance();
                    value *= self.factor()?;
                }
                Token::Slash => {
                    self.advance();
                    let divisor = self.factor()?;
                    if divisor == 0.0 {
                        return Err(CalcError::DivisionByZero);
                    }
                    value /= divisor;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    /// factor := ('+' | '-') factor | '(' expression ')' | number
    fn factor(&mut self) -> Result<f64, CalcError> {
        match self.advance() {
            Some(Token::Plus) => self.factor(),
            Some(Token::Minus) => Ok(-self.factor()?),
            Some(Token::LParen) => {
                let value = self.expression()?;
                match self.advance() {
                    Some(Token::RParen) => Ok(value),
                    _ => Err(CalcError::UnbalancedParens),
                }
            }
            Some(Token::Number(value)) => Ok(value),
            Some(token) => Err(CalcError::UnexpectedToken(format!("{token:?}"))),
            None => Err(CalcError::UnexpectedEnd),
        }
    }
}

fn eval_expression(expression: &str) -> Result<f64, CalcError> {
    let tokens = tokenize(expression)?;
    let mut parser = Parser { tokens, pos: 0 };
    let value = parser.expression()?;

    if let Some(trailing) = parser.peek() {
        return Err(CalcError::UnexpectedToken(format!("{trailing:?}")));
    }

    Ok(value)
}

/// Integral results print without a fractional part, everything else in the
/// shortest f64 display form.
fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
