use crate::model::{Cycle, Issue};

pub fn detect_circular_dependencies(cycles: &[&Cycle]) -> Vec<Issue> {
    cycles
        .iter()
        .map(|cycle| Issue::circular_dependency(cycle.path()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FileId, IssueKind, IssueSeverity};

    #[test]
    fn test_one_issue_per_cycle() {
        let a = FileId::new("/app/lib/a.dart");
        let b = FileId::new("/app/lib/b.dart");
        let cycle = Cycle::from_members(vec![a.clone(), b.clone()]);

        let issues = detect_circular_dependencies(&[&cycle]);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::CircularDependency);
        assert_eq!(issues[0].severity, IssueSeverity::Error);
        assert_eq!(issues[0].locations.len(), 3);
        assert!(issues[0].message.contains("a.dart → b.dart → a.dart"));
    }
}
