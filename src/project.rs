//! Project manifest and source-root detection.

use crate::fs::FileSystem;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const MANIFEST_FILE: &str = "pubspec.yaml";
pub const SOURCE_ROOT: &str = "lib";

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("pubspec.yaml not found in {}", .0.display())]
    MissingManifest(PathBuf),
    #[error("pubspec.yaml in {} does not declare a package name", .0.display())]
    MissingPackageName(PathBuf),
    #[error("source folder /lib not found in {}", .0.display())]
    MissingSourceRoot(PathBuf),
}

/// A Flutter/Dart package on disk.
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub lib_root: PathBuf,
    pub package_name: String,
}

impl Project {
    /// Open the package rooted at `root`, which should already be canonical.
    pub fn open(root: &Path, fs: &dyn FileSystem) -> Result<Self, ProjectError> {
        let manifest_path = root.join(MANIFEST_FILE);
        if !fs.exists(&manifest_path) {
            return Err(ProjectError::MissingManifest(root.to_path_buf()));
        }

        let manifest = fs
            .read_to_string(&manifest_path)
            .map_err(|_| ProjectError::MissingManifest(root.to_path_buf()))?;
        let package_name = package_name(&manifest)
            .ok_or_else(|| ProjectError::MissingPackageName(root.to_path_buf()))?;

        let lib_root = root.join(SOURCE_ROOT);
        if !fs.is_dir(&lib_root) {
            return Err(ProjectError::MissingSourceRoot(root.to_path_buf()));
        }

        Ok(Self {
            root: root.to_path_buf(),
            lib_root,
            package_name,
        })
    }

    /// Specifier prefix that addresses this package's own `lib/` folder.
    pub fn package_prefix(&self) -> String {
        format!("package:{}/", self.package_name)
    }
}

/// First `name:` entry of the manifest. Only top-level keys count, so
/// `dependencies:` entries that happen to contain `name:` are skipped.
fn package_name(manifest: &str) -> Option<String> {
    manifest
        .lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .find_map(|line| line.trim().strip_prefix("name:"))
        .map(|value| value.trim().trim_matches(|c| c == '"' || c == '\'').to_string())
        .filter(|name| !name.is_empty())
}
