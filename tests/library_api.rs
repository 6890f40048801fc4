//! Integration tests for the dartmap library API.

use dartmap::model::{FileId, IssueKind};
use dartmap::project::ProjectError;
use dartmap::{AnalysisOptions, DartmapError, analyze};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A feature-first Flutter app with a barrel, a cycle between the two
/// blocs, a layer violation and generated code.
fn flutter_app() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    write(
        root,
        "pubspec.yaml",
        "name: todo_app\ndescription: Todos.\n\ndependencies:\n  flutter:\n    sdk: flutter\n",
    );
    write(
        root,
        "lib/main.dart",
        "import 'package:flutter/material.dart';\nimport 'package:todo_app/app.dart';\n\nvoid main() => runApp(const App());\n",
    );
    write(
        root,
        "lib/app.dart",
        "import 'package:flutter/material.dart';\nimport 'features/todos/todos.dart';\n\nclass App extends StatelessWidget {\n  const App();\n}\n",
    );
    write(
        root,
        "lib/features/todos/todos.dart",
        "export 'presentation/todo_page.dart';\nexport 'bloc/todo_bloc.dart';\n",
    );
    write(
        root,
        "lib/features/todos/presentation/todo_page.dart",
        "import '../bloc/todo_bloc.dart';\nimport '../data/todo_repository_impl.dart';\n\nclass TodoPage extends StatelessWidget {}\n",
    );
    write(
        root,
        "lib/features/todos/bloc/todo_bloc.dart",
        "import 'package:todo_app/features/todos/bloc/filter_bloc.dart';\n\nclass TodoBloc {}\n",
    );
    write(
        root,
        "lib/features/todos/bloc/filter_bloc.dart",
        "import 'todo_bloc.dart';\n\nclass FilterBloc {}\n",
    );
    write(
        root,
        "lib/features/todos/data/todo_repository_impl.dart",
        "import 'dart:convert';\n\nclass TodoRepositoryImpl {}\n",
    );
    write(
        root,
        "lib/features/todos/data/todo.freezed.dart",
        "part of 'todo.dart';\n",
    );
    write(root, "lib/utils/unused.dart", "int answer() => 42;\n");

    dir
}

fn id(root: &Path, rel: &str) -> FileId {
    FileId::new(root.canonicalize().unwrap().join(rel))
}

#[test]
fn test_analyze_flutter_app() {
    let dir = flutter_app();
    let root = dir.path();

    let result = analyze(root, AnalysisOptions::default()).unwrap();

    assert_eq!(result.project.package_name, "todo_app");
    assert_eq!(result.registry.len(), 8);
    assert_eq!(result.ignored_files, 1);
    assert!(!result.is_partial());

    // importing the barrel makes app a user of everything it re-exports
    let page = result
        .registry
        .get(&id(root, "lib/features/todos/presentation/todo_page.dart"))
        .unwrap();
    assert!(page.used_by().contains(&id(root, "lib/app.dart")));

    let bloc = result
        .registry
        .get(&id(root, "lib/features/todos/bloc/todo_bloc.dart"))
        .unwrap();
    assert_eq!(bloc.used_by().len(), 3);

    assert_eq!(result.cycles.len(), 1);
    assert_eq!(result.cycles[0].len(), 2);
}

#[test]
fn test_issues_detected() {
    let dir = flutter_app();
    let result = analyze(dir.path(), AnalysisOptions::default()).unwrap();

    let count = |pred: fn(&IssueKind) -> bool| result.issues.iter().filter(|i| pred(&i.kind)).count();

    assert_eq!(count(|k| matches!(k, IssueKind::CircularDependency)), 1);
    assert_eq!(count(|k| matches!(k, IssueKind::LayerViolation { .. })), 1);

    let dead: Vec<_> = result
        .issues
        .iter()
        .filter(|i| i.kind == IssueKind::DeadCode)
        .filter_map(|i| i.primary_file())
        .map(|f| f.file_name().to_string())
        .collect();
    assert_eq!(dead, vec!["unused.dart".to_string()]);
}

#[test]
fn test_partial_analysis() {
    let dir = flutter_app();
    let root = dir.path();
    let full = analyze(root, AnalysisOptions::default()).unwrap();

    let options = AnalysisOptions {
        target_files: vec![
            "lib/features/todos/bloc/todo_bloc.dart".to_string(),
            "\"lib/utils/unused.dart\"".to_string(),
            "lib/features/todos/data/todo.freezed.dart".to_string(),
        ],
        ..Default::default()
    };
    let partial = analyze(root, options).unwrap();

    assert!(partial.is_partial());
    assert_eq!(partial.reported_files().len(), 2);
    // ignored files cannot be selected
    assert_eq!(partial.missing_targets.len(), 1);

    for file in partial.reported_files() {
        assert_eq!(
            file.used_by(),
            full.registry.get(&file.id).unwrap().used_by(),
            "usage of {} must not depend on the scope",
            file.relative_path
        );
    }
    assert_eq!(partial.reported_cycles().len(), 1);
    assert_eq!(partial.summary.reported_files, 2);
}

#[test]
fn test_extra_ignore_patterns() {
    let dir = flutter_app();
    let options = AnalysisOptions {
        ignore_patterns: vec!["*_impl.dart".to_string()],
        ..Default::default()
    };

    let result = analyze(dir.path(), options).unwrap();
    assert_eq!(result.registry.len(), 7);
    assert_eq!(result.ignored_files, 2);
}

#[test]
fn test_ignore_file_is_honored() {
    let dir = flutter_app();
    write(dir.path(), ".analyseignore", "# local rules\n\nunused.dart\n");

    let result = analyze(dir.path(), AnalysisOptions::default()).unwrap();
    assert_eq!(result.registry.len(), 7);
}

#[test]
fn test_invalid_path() {
    let result = analyze(Path::new("/nonexistent/path"), AnalysisOptions::default());
    assert!(matches!(result, Err(DartmapError::PathNotFound(_))));
}

#[test]
fn test_missing_manifest() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("lib")).unwrap();

    let result = analyze(dir.path(), AnalysisOptions::default());
    assert!(matches!(
        result,
        Err(DartmapError::Project(ProjectError::MissingManifest(_)))
    ));
}

#[test]
fn test_missing_source_root() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "pubspec.yaml", "name: empty\n");

    let result = analyze(dir.path(), AnalysisOptions::default());
    assert!(matches!(
        result,
        Err(DartmapError::Project(ProjectError::MissingSourceRoot(_)))
    ));
}

#[test]
fn test_broken_config_is_an_error() {
    let dir = flutter_app();
    write(dir.path(), ".dartmap.toml", "[thresholds\n");

    let result = analyze(dir.path(), AnalysisOptions::default());
    assert!(matches!(result, Err(DartmapError::Config(_))));
}

#[cfg(unix)]
#[test]
fn test_target_through_symlinked_root() {
    let dir = flutter_app();
    let link = dir.path().with_extension("link");
    std::os::unix::fs::symlink(dir.path(), &link).unwrap();

    let target = link.join("lib/utils/unused.dart");
    let options = AnalysisOptions {
        target_files: vec![target.display().to_string()],
        ..Default::default()
    };
    let result = analyze(&link, options);
    fs::remove_file(&link).unwrap();

    let result = result.unwrap();
    assert!(result.missing_targets.is_empty());
    assert_eq!(result.reported_files().len(), 1);
    assert_eq!(result.reported_files()[0].id, id(dir.path(), "lib/utils/unused.dart"));
}
