use std::str::{from_utf8, FromStr};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unexpected end of input, expected {0}")]
    Eof(&'static str),
    #[error("token {token:?} is not a valid {what}")]
    Parse { token: String, what: &'static str },
}

pub trait InputStream {
    fn token(&mut self) -> Option<&[u8]>;

    fn value<T: FromStr>(&mut self, what: &'static str) -> Result<T, InputError> {
        let token = self.token().ok_or(InputError::Eof(what))?;
        from_utf8(token)
            .ok()
            .and_then(|s| s.parse::<T>().ok())
            .ok_or_else(|| InputError::Parse {
                token: String::from_utf8_lossy(token).into_owned(),
                what,
            })
    }
}

// cheap whitespace check, treats every control byte as a separator
fn is_whitespace(c: u8) -> bool {
    c <= b' '
}

impl InputStream for &[u8] {
    fn token(&mut self) -> Option<&[u8]> {
        let idx = self.iter().position(|&c| !is_whitespace(c))?;
        *self = &self[idx..];
        let idx = self
            .iter()
            .position(|&c| is_whitespace(c))
            .unwrap_or(self.len());
        let (token, rest) = self.split_at(idx);
        *self = rest;
        Some(token)
    }
}
