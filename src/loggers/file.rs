//! File backend.
//!
//! Every write replaces the file's content, so the file only ever holds the
//! most recent message.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::traits::ErrorLogger;
use crate::error::{LogError, LogResult};

/// File logger bound to a single destination path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLogger {
    path: PathBuf,
}

impl FileLogger {
    /// Creates a file logger; the path is not touched until the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ErrorLogger for FileLogger {
    fn write_error(&self, message: &str) -> LogResult<()> {
        overwrite_file(&self.path, message.as_bytes())
            .map_err(|e| LogError::io(self.path.display().to_string(), e))
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

fn overwrite_file(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    file.write_all(contents)?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_creates_file_with_message() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.txt");
        let logger = FileLogger::new(&path);

        logger.write_error("first failure").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first failure");
    }

    #[test]
    fn test_second_write_overwrites_first() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.txt");
        let logger = FileLogger::new(&path);

        logger.write_error("a much longer first message").unwrap();
        logger.write_error("short").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_replaces_preexisting_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.txt");
        fs::write(&path, "stale content from elsewhere").unwrap();

        FileLogger::new(&path).write_error("fresh").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh");
    }

    #[test]
    fn test_empty_message_truncates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.txt");
        let logger = FileLogger::new(&path);

        logger.write_error("something").unwrap();
        logger.write_error("").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_missing_parent_directory_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("log.txt");
        let logger = FileLogger::new(&path);

        let err = logger.write_error("nowhere to go").unwrap_err();

        match err {
            LogError::Io { destination, source } => {
                assert_eq!(destination, path.display().to_string());
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_directory_as_path_is_reported() {
        let dir = TempDir::new().unwrap();
        let logger = FileLogger::new(dir.path());

        assert!(matches!(
            logger.write_error("not a file"),
            Err(LogError::Io { .. })
        ));
    }

    #[test]
    fn test_accessors() {
        let logger = FileLogger::new("log.txt");
        assert_eq!(logger.path(), Path::new("log.txt"));
        assert_eq!(logger.name(), "file");
    }
}
