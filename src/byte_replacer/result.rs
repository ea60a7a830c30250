use crate::byte_replacer::error::ByteReplacerError;

pub type Result<T> = std::result::Result<T, ByteReplacerError>;
