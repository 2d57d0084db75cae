use std::{error::Error, fmt};

use crate::charset::StandardCharset;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCharsetError {
    name: String,
}

impl ParseCharsetError {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ParseCharsetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "`{}` is not a standard charset, these charsets are supported:",
            self.name
        )?;
        for (i, charset) in StandardCharset::iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{charset}")?;
        }
        Ok(())
    }
}

impl Error for ParseCharsetError {}
