mod byte_replacer;

// Exported objects
pub use crate::byte_replacer::config::Config;
pub use crate::byte_replacer::error::ByteReplacerError;
pub use crate::byte_replacer::helper::parse_hex_string;
pub use crate::byte_replacer::replacement::Replacements;
pub use crate::byte_replacer::result::Result;
pub use crate::byte_replacer::{replace_bytes, ByteReplacer};

extern crate log;
extern crate serde;
extern crate serde_json;
