use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use webtally_types::SummaryError;

/// Open a log file for a summary pass, performing the fatal checks up front.
///
/// All three failure cases abort before any line is parsed: an empty path, a
/// path that is not a readable regular file, and an open that fails anyway
/// (e.g. permissions racing with the metadata check).
pub fn open_log(path: &Path) -> Result<BufReader<File>, SummaryError> {
    if path.as_os_str().is_empty() {
        return Err(SummaryError::EmptyPath);
    }
    if !path.is_file() {
        return Err(SummaryError::NotReadable(path.to_path_buf()));
    }
    let file = File::open(path).map_err(|err| SummaryError::Open(path.to_path_buf(), err))?;
    Ok(BufReader::new(file))
}

/// Forward-only iterator over the non-blank lines of an open log file.
///
/// Line terminators are stripped by the underlying reader; lines that are
/// empty after trimming never reach the parser. A read error mid-file ends
/// the stream, it is not surfaced separately.
pub struct LogLines<R: BufRead> {
    lines: Lines<R>,
}

impl<R: BufRead> LogLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl<R: BufRead> Iterator for LogLines<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            match self.lines.next()? {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => return Some(line),
                Err(_) => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::PathBuf;

    #[test]
    fn test_open_log_empty_path() {
        let err = open_log(Path::new("")).unwrap_err();
        assert!(matches!(err, SummaryError::EmptyPath));
    }

    #[test]
    fn test_open_log_missing_file() {
        let err = open_log(Path::new("/no/such/file.log")).unwrap_err();
        match err {
            SummaryError::NotReadable(path) => {
                assert_eq!(path, PathBuf::from("/no/such/file.log"));
            }
            other => panic!("Expected NotReadable, got {:?}", other),
        }
    }

    #[test]
    fn test_open_log_directory_is_not_readable() {
        let err = open_log(Path::new("/tmp")).unwrap_err();
        assert!(matches!(err, SummaryError::NotReadable(_)));
    }

    #[test]
    fn test_log_lines_skips_blank_lines() {
        let input = "first\n\n   \nsecond\r\n\nthird";
        let lines: Vec<String> = LogLines::new(Cursor::new(input)).collect();
        assert_eq!(lines, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_log_lines_empty_input() {
        let lines: Vec<String> = LogLines::new(Cursor::new("")).collect();
        assert!(lines.is_empty());
    }
}
