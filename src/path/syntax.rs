use crate::constants::PATH_COMMANDS;
use crate::errors::{Error, Result};

/// Character cursor over SVG path data.
pub struct SvgPathSyntax {
    data: Vec<char>,
    index: usize,
}

impl SvgPathSyntax {
    pub fn new(data: &str) -> Self {
        Self {
            data: data.chars().collect(),
            index: 0,
        }
    }

    /// True if any path command letter appears anywhere in the data
    pub fn has_command(&self) -> bool {
        self.data.iter().any(|c| PATH_COMMANDS.contains(*c))
    }
}

impl PathSyntax for SvgPathSyntax {
    fn at_command(&self) -> bool {
        matches!(self.current(), Some(c) if PATH_COMMANDS.contains(c))
    }

    fn current(&self) -> Option<char> {
        self.data.get(self.index).copied()
    }

    fn peek(&self) -> Option<char> {
        self.data.get(self.index + 1).copied()
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    fn at_end(&self) -> bool {
        self.index >= self.data.len()
    }
}

pub trait PathSyntax {
    fn at_command(&self) -> bool;
    fn current(&self) -> Option<char>;
    fn peek(&self) -> Option<char>;
    fn advance(&mut self);
    fn at_end(&self) -> bool;

    fn check_not_end(&self) -> Result<()> {
        if self.at_end() {
            Err(Error::Parse("ran out of data!".to_string()))
        } else {
            Ok(())
        }
    }

    fn skip_whitespace(&mut self) {
        // SVG definition of whitespace is 0x20, 0x9, 0xA, 0xD. Rust's is_ascii_whitespace()
        // also includes 0xC, but is close enough and convenient.
        while matches!(self.current(), Some(c) if c.is_ascii_whitespace()) {
            self.advance();
        }
    }

    fn skip_wsp_comma(&mut self) {
        self.skip_whitespace();
        if self.current() == Some(',') {
            self.advance();
            self.skip_whitespace();
        }
    }

    /// True if the current character can begin a number
    fn at_number(&self) -> bool {
        matches!(self.current(), Some('0'..='9' | '.' | '-' | '+'))
    }

    /// True if the current character is a lone `0` or `1` flag, i.e. not
    /// the start of a decimal or exponent literal such as `1.0` or `1e0`
    fn at_flag(&self) -> bool {
        matches!(self.current(), Some('0' | '1'))
            && !matches!(self.peek(), Some('.' | 'e' | 'E'))
    }

    fn read_flag(&mut self) -> Result<bool> {
        self.check_not_end()?;
        // per the grammar for `a`/`A`, could have '00' etc for
        // the two adjacent flags...
        let res = match self.current() {
            Some('0') => false,
            Some('1') => true,
            other => {
                return Err(Error::InvalidValue(
                    "flag".to_string(),
                    other.map(|c| c.to_string()).unwrap_or_default(),
                ))
            }
        };
        self.advance();
        self.skip_wsp_comma();
        Ok(res)
    }

    fn read_number(&mut self) -> Result<f64> {
        self.check_not_end()?;
        let mut mult = 1.;
        match self.current() {
            Some('-') => {
                mult = -1.;
                self.advance();
            }
            Some('+') => {
                self.advance();
            }
            _ => {}
        };
        Ok(mult * self.read_non_negative()?)
    }

    fn read_non_negative(&mut self) -> Result<f64> {
        self.check_not_end()?;
        let mut s = String::new();
        let mut dot_valid = true;
        let mut exp_valid = true;
        while let Some(ch) = self.current() {
            match ch {
                '0'..='9' => {
                    s.push(ch);
                    self.advance();
                }
                '.' if dot_valid => {
                    s.push(ch);
                    self.advance();
                    dot_valid = false;
                }
                'e' | 'E' if exp_valid && s.ends_with(|c: char| c.is_ascii_digit()) => {
                    s.push(ch);
                    self.advance();
                    // include sign character if present
                    if let Some(sign @ ('-' | '+')) = self.current() {
                        s.push(sign);
                        self.advance();
                    }
                    exp_valid = false;
                    dot_valid = false;
                }
                _ => break,
            }
        }
        self.skip_wsp_comma();
        let value: f64 = s.parse()?;
        if !value.is_finite() {
            return Err(Error::Parse(format!("number out of range: {s}")));
        }
        Ok(value)
    }

    fn read_command(&mut self) -> Result<char> {
        match self.current() {
            Some(command) if self.at_command() => {
                self.advance();
                self.skip_wsp_comma();
                Ok(command)
            }
            Some(other) => Err(Error::UnknownCommand(other)),
            None => Err(Error::Parse("ran out of data!".to_string())),
        }
    }
}
