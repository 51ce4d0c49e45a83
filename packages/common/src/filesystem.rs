use crate::error::CommonError;
use crate::result::CommonResult;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// File system abstraction used when loading themes and project config
pub trait FileSystem {
    /// Check if a file exists
    fn exists(&self, path: &Path) -> bool;

    /// Read a whole file as UTF-8 text
    fn read_to_string(&self, path: &Path) -> CommonResult<String>;
}

/// Real file system implementation
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> CommonResult<String> {
        std::fs::read_to_string(path).map_err(|source| CommonError::Read {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// In-memory file system for testing
pub struct MockFileSystem {
    pub files: HashMap<PathBuf, String>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> CommonResult<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| CommonError::Read {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_read_existing() {
        let mut fs = MockFileSystem::new();
        fs.add_file("/theme.json", "{}");

        assert!(fs.exists(Path::new("/theme.json")));
        assert_eq!(fs.read_to_string(Path::new("/theme.json")).unwrap(), "{}");
    }

    #[test]
    fn test_mock_read_missing() {
        let fs = MockFileSystem::new();
        let err = fs.read_to_string(Path::new("/nope.json")).unwrap_err();
        assert!(matches!(err, CommonError::Read { .. }));
    }

    #[test]
    fn test_real_read_missing() {
        let err = RealFileSystem
            .read_to_string(Path::new("/definitely/not/here.json"))
            .unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
