use crate::byte_replacer::error::ByteReplacerError;
use crate::byte_replacer::result::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// rw-r--r--, applied when the file is created
#[cfg_attr(not(unix), allow(dead_code))]
const OUTPUT_FILE_MODE: u32 = 0o644;

pub fn write_bytes(path: &Path, buf: &[u8]) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(OUTPUT_FILE_MODE);
    }

    let mut file = options.open(path).map_err(ByteReplacerError::IoWriteError)?;
    file.write_all(buf).map_err(ByteReplacerError::IoWriteError)?;
    file.flush().map_err(ByteReplacerError::IoWriteError)?;
    log::debug!("wrote {} bytes to {}", buf.len(), path.display());
    Ok(())
}
