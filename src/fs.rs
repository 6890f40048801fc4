//! Centralized filesystem operations for better testability.
//!
//! Everything that reads a manifest, a source file or a config file, or writes
//! a report, goes through the `FileSystem` trait so tests can run against an
//! in-memory tree.

use std::io;
use std::path::Path;

/// Trait for filesystem operations, enabling dependency injection and testing.
pub trait FileSystem: Send + Sync {
    /// Read the raw bytes of a file.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Write content to a file, creating it if it doesn't exist.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Read a file as UTF-8, failing on invalid data.
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        String::from_utf8(self.read(path)?)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Best-effort read: unreadable files yield an empty string and invalid
    /// UTF-8 sequences are replaced.
    fn read_lossy(&self, path: &Path) -> String {
        match self.read(path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                tracing::debug!("treating unreadable {} as empty: {}", path.display(), e);
                String::new()
            }
        }
    }
}

/// Real filesystem implementation using std::fs.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl RealFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFs {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

/// Global default filesystem for use when dependency injection isn't practical.
pub fn default_fs() -> &'static RealFs {
    static INSTANCE: RealFs = RealFs;
    &INSTANCE
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::RwLock;

    /// In-memory filesystem for testing. Directories exist implicitly as
    /// prefixes of stored files.
    #[derive(Debug, Default)]
    pub struct MockFs {
        files: RwLock<HashMap<String, Vec<u8>>>,
    }

    impl MockFs {
        pub fn new() -> Self {
            Self {
                files: RwLock::new(HashMap::new()),
            }
        }

        /// Pre-populate the mock filesystem with files.
        pub fn with_files<I, P, C>(files: I) -> Self
        where
            I: IntoIterator<Item = (P, C)>,
            P: AsRef<Path>,
            C: Into<Vec<u8>>,
        {
            let map: HashMap<String, Vec<u8>> = files
                .into_iter()
                .map(|(p, c)| (key(p.as_ref()), c.into()))
                .collect();
            Self {
                files: RwLock::new(map),
            }
        }

        /// Get a stored file as text.
        pub fn contents(&self, path: &Path) -> Option<String> {
            self.files
                .read()
                .unwrap()
                .get(&key(path))
                .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
        }
    }

    fn key(path: &Path) -> String {
        path.to_string_lossy().to_string()
    }

    impl FileSystem for MockFs {
        fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
            let key = key(path);
            self.files
                .read()
                .unwrap()
                .get(&key)
                .cloned()
                .ok_or_else(|| {
                    io::Error::new(io::ErrorKind::NotFound, format!("file not found: {}", key))
                })
        }

        fn write(&self, path: &Path, content: &str) -> io::Result<()> {
            self.files
                .write()
                .unwrap()
                .insert(key(path), content.as_bytes().to_vec());
            Ok(())
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.read().unwrap().contains_key(&key(path)) || self.is_dir(path)
        }

        fn is_dir(&self, path: &Path) -> bool {
            let prefix = format!("{}/", key(path).trim_end_matches('/'));
            self.files
                .read()
                .unwrap()
                .keys()
                .any(|k| k.starts_with(&prefix))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_mock_fs_read_write() {
            let fs = MockFs::new();
            let path = Path::new("/test/file.txt");

            assert!(!fs.exists(path));
            assert!(fs.read(path).is_err());

            fs.write(path, "hello world").unwrap();
            assert!(fs.exists(path));
            assert!(fs.is_dir(Path::new("/test")));
            assert_eq!(fs.read_to_string(path).unwrap(), "hello world");
        }

        #[test]
        fn test_read_lossy_never_fails() {
            let fs = MockFs::with_files([(Path::new("/bad.dart"), vec![b'a', 0xff, b'b'])]);

            assert_eq!(fs.read_lossy(Path::new("/bad.dart")), "a\u{fffd}b");
            assert!(fs.read_to_string(Path::new("/bad.dart")).is_err());
            assert_eq!(fs.read_lossy(Path::new("/missing.dart")), "");
        }
    }
}
