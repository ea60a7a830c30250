use std::error::Error;
use std::fmt;

type Length = usize;

#[derive(Debug)]
pub enum ByteReplacerError {
    ParseError {
        field: &'static str,
        pattern: String,
        token: String,
    },
    LengthMismatchError(Length, Length),
    EmptyPatternError,
    IoReadError(std::io::Error),
    IoWriteError(std::io::Error),
    NotFoundError,
    ConfigReadError(std::io::Error),
    ConfigParseError(serde_json::Error),
}

impl fmt::Display for ByteReplacerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParseError {
                field,
                pattern,
                token,
            } => write!(
                f,
                "failed to parse {}: invalid hex token {:?} in {:?}",
                field, token, pattern
            ),
            Self::LengthMismatchError(src_length, dst_length) => write!(
                f,
                "source and destination sequences must be of the same length (src={}, dst={})",
                src_length, dst_length
            ),
            Self::EmptyPatternError => write!(f, "source and destination sequences must not be empty"),
            Self::IoReadError(why) => write!(f, "failed to read input file: {}", why),
            Self::IoWriteError(why) => write!(f, "failed to write output file: {}", why),
            Self::NotFoundError => write!(f, "pattern not found in the file"),
            Self::ConfigReadError(why) => write!(f, "failed to read config file: {}", why),
            Self::ConfigParseError(why) => write!(f, "failed to parse config file: {}", why),
        }
    }
}

impl Error for ByteReplacerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::IoReadError(why) | Self::IoWriteError(why) | Self::ConfigReadError(why) => {
                Some(why)
            }
            Self::ConfigParseError(why) => Some(why),
            _ => None,
        }
    }
}
