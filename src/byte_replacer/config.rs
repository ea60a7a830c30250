use crate::byte_replacer::error::ByteReplacerError;
use crate::byte_replacer::result::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// A patch job as read from a JSON config file.
///
/// ```json
/// { "input": "a.bin", "output": "b.bin", "src": "AA BB", "dst": "CC DD", "count": 0 }
/// ```
#[derive(Debug, Clone, Deserialize, Eq, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub src: String,
    pub dst: String,
    /// Maximum number of replacements. 0 means unlimited.
    #[serde(default)]
    pub count: usize,
}

impl Config {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(ByteReplacerError::ConfigReadError)?;
        log::debug!("loaded config file {}", path.display());
        data.parse()
    }
}

impl FromStr for Config {
    type Err = ByteReplacerError;

    fn from_str(data: &str) -> Result<Self> {
        serde_json::from_str(data).map_err(ByteReplacerError::ConfigParseError)
    }
}
