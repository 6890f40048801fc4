use serde::{Deserialize, Serialize};

/// Glob patterns (matched against `/`-separated paths relative to the project
/// root) that place a file in an architectural layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Layer {
    pub name: String,
    pub patterns: Vec<String>,
}

impl Layer {
    pub fn presentation() -> Self {
        Self {
            name: "Presentation".to_string(),
            patterns: vec![
                "**/presentation/**".to_string(),
                "**/ui/**".to_string(),
                "**/pages/**".to_string(),
                "**/screens/**".to_string(),
                "**/views/**".to_string(),
                "**/widgets/**".to_string(),
            ],
        }
    }

    pub fn data() -> Self {
        Self {
            name: "Data".to_string(),
            patterns: vec![
                "**/data/**".to_string(),
                "**/datasources/**".to_string(),
                "**/data_sources/**".to_string(),
                "**/*_impl.dart".to_string(),
            ],
        }
    }

    /// Check if a relative path belongs to this layer.
    pub fn contains(&self, relative_path: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| glob_match(pattern, relative_path))
    }
}

/// Simple glob matching supporting ** and * wildcards.
pub fn glob_match(pattern: &str, path: &str) -> bool {
    let path = path.replace('\\', "/");
    let pattern = pattern.replace('\\', "/");

    glob_match_recursive(&pattern, &path)
}

fn glob_match_recursive(pattern: &str, path: &str) -> bool {
    if let Some(pos) = pattern.find("**") {
        let prefix = &pattern[..pos];
        let suffix = &pattern[pos + 2..];
        let suffix = suffix.strip_prefix('/').unwrap_or(suffix);

        if !prefix.is_empty() && !path.starts_with(prefix) {
            return false;
        }

        let remaining = &path[prefix.len()..];

        if suffix.is_empty() {
            return true;
        }

        // ** only spans whole segments
        for (i, _) in remaining.char_indices() {
            let at_boundary = i == 0 || remaining[..i].ends_with('/');
            if at_boundary && glob_match_recursive(suffix, &remaining[i..]) {
                return true;
            }
        }
        glob_match_recursive(suffix, "")
    } else if let Some(pos) = pattern.find('*') {
        let prefix = &pattern[..pos];
        let suffix = &pattern[pos + 1..];

        if !path.starts_with(prefix) {
            return false;
        }

        let remaining = &path[prefix.len()..];

        // * stays inside one segment
        for (i, c) in remaining.char_indices() {
            if c == '/' {
                return glob_match_recursive(suffix, &remaining[i..]);
            }
            if glob_match_recursive(suffix, &remaining[i..]) {
                return true;
            }
        }
        glob_match_recursive(suffix, "")
    } else {
        pattern == path || path.ends_with(&format!("/{}", pattern))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glob_match() {
        assert!(glob_match("**/data/**", "lib/data/user_repository.dart"));
        assert!(glob_match("**/data/**", "lib/features/auth/data/api.dart"));
        assert!(glob_match("**/*_impl.dart", "lib/domain/repo_impl.dart"));
        assert!(glob_match("lib/*.dart", "lib/main.dart"));
        assert!(!glob_match("lib/*.dart", "lib/src/main.dart"));
        assert!(!glob_match("**/data/**", "lib/metadata/tags.dart"));
        assert!(!glob_match("**/pages/**", "lib/pagination.dart"));
    }

    #[test]
    fn test_default_layers() {
        let presentation = Layer::presentation();
        let data = Layer::data();

        assert!(presentation.contains("lib/features/auth/presentation/login_page.dart"));
        assert!(presentation.contains("lib/screens/home.dart"));
        assert!(!presentation.contains("lib/domain/user.dart"));

        assert!(data.contains("lib/data/datasources/remote.dart"));
        assert!(data.contains("lib/repositories/user_repository_impl.dart"));
        assert!(!data.contains("lib/domain/user_repository.dart"));
    }
}
