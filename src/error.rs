//! Error enum
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// ledger or word store unreachable, or a constraint violation.
    Storage(rusqlite::Error),
    /// the tokenizer could not process a unit of text.
    Tokenization(String),
    /// POS tag absent from the translation table.
    UnknownTag(String),
    /// a chunk failed during concurrent processing.
    /// Remaining chunks are abandoned and nothing is committed.
    ChunkFailed {
        chunk: usize,
        source: Box<Error>,
    },
    /// parallel sequences that must stay aligned have different lengths.
    Desync {
        expected: usize,
        got: usize,
    },
    Http(reqwest::Error),
    Url(url::ParseError),
    Selector(String),
    Serde(serde_json::Error),
    Csv(csv::Error),
    Glob(glob::GlobError),
    GlobPattern(glob::PatternError),
    ThreadPool(rayon::ThreadPoolBuildError),
    Dictionary(String),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::Storage(e) => write!(f, "storage error: {e}"),
            Error::Tokenization(reason) => write!(f, "tokenization failed: {reason}"),
            Error::UnknownTag(tag) => write!(f, "unknown POS tag: {tag:?}"),
            Error::ChunkFailed { chunk, source } => write!(f, "chunk {chunk} failed: {source}"),
            Error::Desync { expected, got } => write!(
                f,
                "pipeline desynchronization: expected {expected} items, got {got}"
            ),
            Error::Http(e) => write!(f, "http error: {e}"),
            Error::Url(e) => write!(f, "invalid url: {e}"),
            Error::Selector(s) => write!(f, "invalid css selector: {s}"),
            Error::Serde(e) => write!(f, "json error: {e}"),
            Error::Csv(e) => write!(f, "csv error: {e}"),
            Error::Glob(e) => write!(f, "glob error: {e}"),
            Error::GlobPattern(e) => write!(f, "glob pattern error: {e}"),
            Error::ThreadPool(e) => write!(f, "could not build worker pool: {e}"),
            Error::Dictionary(s) => write!(f, "dictionary error: {s}"),
            Error::Custom(s) => write!(f, "{s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Storage(e) => Some(e),
            Error::ChunkFailed { source, .. } => Some(source.as_ref()),
            Error::Http(e) => Some(e),
            Error::Url(e) => Some(e),
            Error::Serde(e) => Some(e),
            Error::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<rusqlite::Error> for Error {
    fn from(e: rusqlite::Error) -> Error {
        Error::Storage(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Http(e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Error {
        Error::Url(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<glob::GlobError> for Error {
    fn from(e: glob::GlobError) -> Error {
        Error::Glob(e)
    }
}

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Error {
        Error::GlobPattern(e)
    }
}

impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(e: rayon::ThreadPoolBuildError) -> Error {
        Error::ThreadPool(e)
    }
}

impl From<vibrato::errors::VibratoError> for Error {
    fn from(e: vibrato::errors::VibratoError) -> Error {
        Error::Dictionary(e.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
