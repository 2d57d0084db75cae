pub mod charset;
pub mod config;
pub mod encoding;
pub mod error;

pub use charset::{StandardCharset, names};
pub use error::ParseCharsetError;
