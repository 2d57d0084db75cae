//! Bridges the standard charsets to `encoding_rs` for code that decodes text.
//!
//! `encoding_rs` follows the WHATWG Encoding Standard, where the `US-ASCII` and
//! `ISO-8859-1` labels both select windows-1252 and `UTF-16` selects UTF-16LE.

use encoding_rs::Encoding;

use crate::charset::StandardCharset;

impl StandardCharset {
    /// The encoding `Encoding::for_label` selects for the canonical name.
    pub fn encoding(self) -> &'static Encoding {
        match self {
            Self::UsAscii | Self::Iso8859_1 => encoding_rs::WINDOWS_1252,
            Self::Utf8 => encoding_rs::UTF_8,
            Self::Utf16 | Self::Utf16Le => encoding_rs::UTF_16LE,
            Self::Utf16Be => encoding_rs::UTF_16BE,
        }
    }

    pub const fn is_unicode(self) -> bool {
        !matches!(self, Self::UsAscii | Self::Iso8859_1)
    }

    pub const fn code_unit_bytes(self) -> usize {
        match self {
            Self::Utf16 | Self::Utf16Be | Self::Utf16Le => 2,
            _ => 1,
        }
    }

    /// The standard charset named like `encoding`, if any.
    ///
    /// Not the inverse of [`StandardCharset::encoding`]: windows-1252 has no standard
    /// charset of that name, so `US-ASCII` and `ISO-8859-1` do not map back.
    pub fn from_encoding(encoding: &'static Encoding) -> Option<StandardCharset> {
        StandardCharset::from_name(encoding.name())
    }
}
