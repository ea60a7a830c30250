mod find;
mod parse_hex_string;
mod read_bytes;
mod write_bytes;

pub(crate) use find::find;
pub(crate) use parse_hex_string::parse_hex_field;
pub use parse_hex_string::parse_hex_string;
pub(crate) use read_bytes::read_bytes;
pub(crate) use write_bytes::write_bytes;
