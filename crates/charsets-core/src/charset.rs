use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::error::ParseCharsetError;

#[cfg(test)]
mod charset_tests;

/// Canonical names of the standard charsets, for callers that only need the literal.
pub mod names {
    /// Seven-bit ASCII, a.k.a. ISO646-US, a.k.a. the Basic Latin block of the Unicode character set.
    pub const US_ASCII: &str = "US-ASCII";
    /// ISO Latin Alphabet No. 1, a.k.a. ISO-LATIN-1.
    pub const ISO_8859_1: &str = "ISO-8859-1";
    /// Eight-bit Unicode Transformation Format.
    pub const UTF_8: &str = "UTF-8";
    /// Sixteen-bit Unicode Transformation Format, byte order given by an initial byte-order mark.
    pub const UTF_16: &str = "UTF-16";
    /// Sixteen-bit Unicode Transformation Format, big-endian byte order.
    pub const UTF_16BE: &str = "UTF-16BE";
    /// Sixteen-bit Unicode Transformation Format, little-endian byte order.
    pub const UTF_16LE: &str = "UTF-16LE";
}

/// A character encoding that every conforming runtime is required to support.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StandardCharset {
    UsAscii,
    Iso8859_1,
    Utf8,
    Utf16,
    Utf16Be,
    Utf16Le,
}

impl StandardCharset {
    pub const ALL: [StandardCharset; 6] = [
        Self::UsAscii,
        Self::Iso8859_1,
        Self::Utf8,
        Self::Utf16,
        Self::Utf16Be,
        Self::Utf16Le,
    ];

    #[inline]
    pub const fn canonical_name(self) -> &'static str {
        match self {
            Self::UsAscii => names::US_ASCII,
            Self::Iso8859_1 => names::ISO_8859_1,
            Self::Utf8 => names::UTF_8,
            Self::Utf16 => names::UTF_16,
            Self::Utf16Be => names::UTF_16BE,
            Self::Utf16Le => names::UTF_16LE,
        }
    }

    #[inline]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::UsAscii => "US_ASCII",
            Self::Iso8859_1 => "ISO_8859_1",
            Self::Utf8 => "UTF_8",
            Self::Utf16 => "UTF_16",
            Self::Utf16Be => "UTF_16BE",
            Self::Utf16Le => "UTF_16LE",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::UsAscii => {
                "Seven-bit ASCII, a.k.a. ISO646-US, a.k.a. the Basic Latin block of the Unicode character set"
            }
            Self::Iso8859_1 => "ISO Latin Alphabet No. 1, a.k.a. ISO-LATIN-1",
            Self::Utf8 => "Eight-bit Unicode Transformation Format",
            Self::Utf16 => {
                "Sixteen-bit Unicode Transformation Format, byte order identified by an initial byte-order mark, big-endian when absent"
            }
            Self::Utf16Be => "Sixteen-bit Unicode Transformation Format, big-endian byte order",
            Self::Utf16Le => "Sixteen-bit Unicode Transformation Format, little-endian byte order",
        }
    }

    /// Alternative names the charset is registered under.
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::UsAscii => &[
                "iso-ir-6",
                "ANSI_X3.4-1986",
                "ISO_646.irv:1991",
                "ASCII",
                "ISO646-US",
                "us",
                "IBM367",
                "cp367",
                "csASCII",
                "default",
                "646",
                "iso_646.irv:1983",
                "ANSI_X3.4-1968",
                "ascii7",
            ],
            Self::Iso8859_1 => &[
                "iso-ir-100",
                "ISO_8859-1",
                "latin1",
                "l1",
                "IBM819",
                "cp819",
                "csISOLatin1",
                "819",
                "IBM-819",
                "ISO8859_1",
                "ISO_8859-1:1987",
                "ISO_8859_1",
                "8859_1",
                "ISO8859-1",
            ],
            Self::Utf8 => &["UTF8", "unicode-1-1-utf-8"],
            Self::Utf16 => &["UTF_16", "utf16", "unicode", "UnicodeBig"],
            Self::Utf16Be => &[
                "UTF_16BE",
                "ISO-10646-UCS-2",
                "X-UTF-16BE",
                "UnicodeBigUnmarked",
            ],
            Self::Utf16Le => &["UTF_16LE", "X-UTF-16LE", "UnicodeLittleUnmarked"],
        }
    }

    pub fn iter() -> impl Iterator<Item = StandardCharset> {
        Self::ALL.into_iter()
    }

    /// Resolves a canonical name, symbol or alias, ignoring ASCII case.
    ///
    /// Surrounding whitespace is trimmed first, although no registered name contains any.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        Self::iter().find(|charset| {
            charset.canonical_name().eq_ignore_ascii_case(name)
                || charset.symbol().eq_ignore_ascii_case(name)
                || charset
                    .aliases()
                    .iter()
                    .any(|alias| alias.eq_ignore_ascii_case(name))
        })
    }
}

impl fmt::Display for StandardCharset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

impl FromStr for StandardCharset {
    type Err = ParseCharsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseCharsetError::new(s))
    }
}

impl Serialize for StandardCharset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.canonical_name())
    }
}

impl<'de> Deserialize<'de> for StandardCharset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}
