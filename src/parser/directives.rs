use once_cell::sync::Lazy;
use regex::Regex;

// import 'package:app/x.dart' as x;
static IMPORT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?m)^\s*import\s+['"](.+?)['"]"#).unwrap());

// export 'src/widgets.dart' show Button;
static EXPORT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?m)^\s*export\s+['"](.+?)['"]"#).unwrap());

/// Import specifiers in source order.
pub fn extract_imports(source: &str) -> Vec<String> {
    capture_specifiers(&IMPORT_PATTERN, source)
}

/// Export specifiers in source order.
pub fn extract_exports(source: &str) -> Vec<String> {
    capture_specifiers(&EXPORT_PATTERN, source)
}

fn capture_specifiers(pattern: &Regex, source: &str) -> Vec<String> {
    pattern
        .captures_iter(source)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
