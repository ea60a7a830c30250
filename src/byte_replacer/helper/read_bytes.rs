use crate::byte_replacer::error::ByteReplacerError;
use crate::byte_replacer::result::Result;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(ByteReplacerError::IoReadError)?;
    let mut buf = vec![];
    file.read_to_end(&mut buf)
        .map_err(ByteReplacerError::IoReadError)?;
    log::debug!("read {} bytes from {}", buf.len(), path.display());
    Ok(buf)
}
