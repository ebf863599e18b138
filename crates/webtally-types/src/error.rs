use std::fmt;
use std::path::PathBuf;

/// Fatal conditions that abort a summary run before any line is parsed.
///
/// Exactly three cases exist; per-line parse failures are not errors and are
/// tallied in the summary instead.
#[derive(Debug)]
pub enum SummaryError {
    /// The caller passed an empty or blank path
    EmptyPath,
    /// The path does not point to a readable regular file
    NotReadable(PathBuf),
    /// The file looked readable but opening it failed
    Open(PathBuf, std::io::Error),
}

impl fmt::Display for SummaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryError::EmptyPath => write!(f, "Empty path to file"),
            SummaryError::NotReadable(path) => {
                write!(f, "Wrong file: {}", path.display())
            }
            SummaryError::Open(path, err) => {
                write!(f, "Troubles with file opening: {}: {}", path.display(), err)
            }
        }
    }
}

impl std::error::Error for SummaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SummaryError::Open(_, err) => Some(err),
            _ => None,
        }
    }
}
