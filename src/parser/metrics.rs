use crate::model::FileMetrics;
use once_cell::sync::Lazy;
use regex::Regex;

static CLASS_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bclass\s+\w+").unwrap());

static WIDGET_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bclass\s+\w+\s+extends\s+(StatelessWidget|StatefulWidget|ConsumerWidget|HookWidget|ConsumerStatefulWidget)")
        .unwrap()
});

// Future<void> load(String id) async {
static METHOD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(void|Future|String|int|bool|double|Widget|List|Map|Set)\s+\w+\s*\([^)]*\)\s*(async\s*)?\{")
        .unwrap()
});

static BRANCH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(if|else|for|while|case|catch)\b").unwrap());

static OPERATOR_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\?\?|&&|\|\|").unwrap());

const NESTING_KEYWORDS: &[&str] = &["if ", "for ", "while ", "switch "];

pub fn compute_metrics(source: &str) -> FileMetrics {
    FileMetrics {
        loc: count_code_lines(source),
        complexity: cyclomatic_complexity(source),
        cognitive_complexity: cognitive_complexity(source),
        classes: CLASS_PATTERN.find_iter(source).count(),
        widgets: WIDGET_PATTERN.find_iter(source).count(),
        methods: METHOD_PATTERN.find_iter(source).count(),
    }
}

/// Non-blank lines that do not start a comment.
fn count_code_lines(source: &str) -> usize {
    source
        .lines()
        .map(str::trim)
        .filter(|line| {
            !line.is_empty()
                && !line.starts_with("//")
                && !line.starts_with("/*")
                && !line.starts_with('*')
        })
        .count()
}

/// Branch keywords plus short-circuit operators. Every `?` also counts on its
/// own, so `??` weighs three in total.
fn cyclomatic_complexity(source: &str) -> usize {
    BRANCH_PATTERN.find_iter(source).count()
        + OPERATOR_PATTERN.find_iter(source).count()
        + source.matches('?').count()
}

/// Nesting-weighted score: each branching line adds its depth, and the
/// deepest nesting reached is added once at the end.
fn cognitive_complexity(source: &str) -> usize {
    let mut depth: usize = 0;
    let mut max_depth = 0;
    let mut score = 0;

    for line in source.lines().map(str::trim) {
        if NESTING_KEYWORDS.iter().any(|kw| line.contains(kw)) {
            depth += 1;
            max_depth = max_depth.max(depth);
            score += depth;
        }
        if line.ends_with('}') {
            depth = depth.saturating_sub(1);
        }
    }

    score + max_depth
}
