use crate::byte_replacer::config::Config;
use crate::byte_replacer::error::ByteReplacerError;
use crate::byte_replacer::helper::{find, parse_hex_field, read_bytes, write_bytes};
use crate::byte_replacer::replacement::Replacements;
use result::Result;
use std::path::PathBuf;

pub mod config;
pub mod error;
pub mod helper;
pub mod replacement;
pub mod result;

/// A validated patch job: equal length, non-empty source and destination
/// patterns plus the files to read from and write to.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ByteReplacer {
    input: PathBuf,
    output: PathBuf,
    src: Vec<u8>,
    dst: Vec<u8>,
    max_count: usize,
}

impl ByteReplacer {
    /// Parses and checks the patterns of `config`. Does not touch the filesystem.
    pub fn new(config: &Config) -> Result<Self> {
        let src = parse_hex_field("src", &config.src)?;
        let dst = parse_hex_field("dst", &config.dst)?;
        log::debug!("src = {:02x?}, dst = {:02x?}", src, dst);

        if src.len() != dst.len() {
            return Err(ByteReplacerError::LengthMismatchError(src.len(), dst.len()));
        }
        if src.is_empty() {
            return Err(ByteReplacerError::EmptyPatternError);
        }

        Ok(Self {
            input: config.input.clone(),
            output: config.output.clone(),
            src,
            dst,
            max_count: config.count,
        })
    }

    pub fn src(&self) -> &[u8] {
        &self.src
    }

    pub fn dst(&self) -> &[u8] {
        &self.dst
    }

    pub fn max_count(&self) -> usize {
        self.max_count
    }

    /// Rewrites non-overlapping occurrences of `src` in `buf` with `dst`,
    /// leftmost first, stopping after `max_count` of them unless it is 0.
    ///
    /// Fails with `NotFoundError` if nothing matched, in which case `buf`
    /// is left untouched.
    pub fn replace(&self, buf: &mut [u8]) -> Result<Replacements> {
        let length = self.src.len();
        let mut replacements = Replacements::default();
        let mut position = 0usize;

        while let Some(relative) = find(&buf[position..], &self.src) {
            let offset = position + relative;
            buf[offset..offset + length].copy_from_slice(&self.dst);
            replacements.push(offset);
            log::trace!("replaced {} bytes at {:#x}", length, offset);

            if self.max_count > 0 && replacements.count() >= self.max_count {
                break;
            }
            // Resume after the written window
            position = offset + length;
        }

        if replacements.is_empty() {
            return Err(ByteReplacerError::NotFoundError);
        }
        Ok(replacements)
    }

    /// Reads the input file, patches it in memory and writes the output file.
    /// The output is written only when at least one replacement was made.
    pub fn run(&self) -> Result<Replacements> {
        let mut buf = read_bytes(&self.input)?;
        let replacements = self.replace(&mut buf)?;
        write_bytes(&self.output, &buf)?;
        log::info!("Replaced {} occurrences.", replacements.count());
        log::debug!("{}", replacements);
        Ok(replacements)
    }
}

/// Runs the patch job described by `config`.
pub fn replace_bytes(config: &Config) -> Result<Replacements> {
    ByteReplacer::new(config)?.run()
}
