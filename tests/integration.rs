//! Integration tests for the matterstamp library
//!
//! These build small folder trees in a temporary directory and check the
//! files and notifications a run produces.

use matterstamp::*;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

#[test]
fn test_adds_front_matter_to_plain_file() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a.md", "# Hello\n");

    let mut sink = CollectingSink::new();
    let summary = process_folder(temp_dir.path(), "title: Test", &mut sink).unwrap();

    assert_eq!(read(temp_dir.path(), "a.md"), "---\ntitle: Test\n---\n\n# Hello\n");
    assert_eq!(summary, Summary { added: 1, skipped: 0 });
    assert_eq!(
        sink.notifications,
        vec![Notification::new(temp_dir.path().join("a.md"), Outcome::Added)]
    );
}

#[test]
fn test_skips_existing_front_matter() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "b.md", "---\nfoo: bar\n---\nBody");

    let mut sink = CollectingSink::new();
    let summary = process_folder(temp_dir.path(), "title: Test", &mut sink).unwrap();

    assert_eq!(read(temp_dir.path(), "b.md"), "---\nfoo: bar\n---\nBody");
    assert_eq!(summary, Summary { added: 0, skipped: 1 });

    let hits: Vec<_> = sink.for_file("b.md").collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].outcome, Outcome::Skipped);
    assert!(hits[0].to_string().contains("b.md"));
    assert!(hits[0].to_string().contains("already contains YAML front matter"));
}

#[test]
fn test_ignores_non_markdown_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "notes.txt", "plain text");
    write(root, "README.MD", "upper case");
    write(root, "page.markdown", "long suffix");
    write(root, "doc.md", "markdown");

    let mut sink = CollectingSink::new();
    process_folder(root, "k: v", &mut sink).unwrap();

    assert_eq!(read(root, "notes.txt"), "plain text");
    assert_eq!(read(root, "README.MD"), "upper case");
    assert_eq!(read(root, "page.markdown"), "long suffix");
    assert_eq!(read(root, "doc.md"), "---\nk: v\n---\n\nmarkdown");

    assert_eq!(sink.for_file("notes.txt").count(), 0);
    assert_eq!(sink.for_file("README.MD").count(), 0);
    assert_eq!(sink.for_file("page.markdown").count(), 0);
    assert_eq!(sink.notifications.len(), 1);
}

#[test]
fn test_nested_files_are_processed_like_root_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "top.md", "top");
    write(root, "one/two/three/deep.md", "top");

    let mut sink = CollectingSink::new();
    let summary = process_folder(root, "depth: any", &mut sink).unwrap();

    assert_eq!(summary.added, 2);
    assert_eq!(read(root, "top.md"), read(root, "one/two/three/deep.md"));
    assert_eq!(sink.for_file("deep.md").count(), 1);
}

#[test]
fn test_rerun_changes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "a.md", "# A\n");
    write(root, "sub/b.md", "---\nexisting: true\n---\n# B\n");
    write(root, "sub/c.md", "");

    let mut sink = CollectingSink::new();
    let first = process_folder(root, "batch: 1", &mut sink).unwrap();
    assert_eq!(first, Summary { added: 2, skipped: 1 });

    let snapshot: Vec<String> = ["a.md", "sub/b.md", "sub/c.md"]
        .iter()
        .map(|rel| read(root, rel))
        .collect();

    let mut sink = CollectingSink::new();
    let second = process_folder(root, "batch: 2", &mut sink).unwrap();
    assert_eq!(second, Summary { added: 0, skipped: 3 });
    assert!(sink
        .notifications
        .iter()
        .all(|n| n.outcome == Outcome::Skipped));

    for (rel, before) in ["a.md", "sub/b.md", "sub/c.md"].iter().zip(snapshot) {
        assert_eq!(read(root, rel), before);
    }
}

#[test]
fn test_block_from_config_is_inserted_verbatim() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let notes = root.join("notes");
    write(root, "notes/a.md", "body\n");

    let config_path = root.join("config.yaml");
    fs::write(
        &config_path,
        format!(
            "folder_path: {}\nyaml_front_matter: |-\n  title: Test\n  tags:\n    - a\n",
            notes.display()
        ),
    )
    .unwrap();

    let config = Config::load(&config_path).unwrap();
    let mut sink = CollectingSink::new();
    process_config(&config, &mut sink).unwrap();

    assert_eq!(
        read(root, "notes/a.md"),
        "---\ntitle: Test\ntags:\n  - a\n---\n\nbody\n"
    );
}

#[test]
fn test_missing_folder_key_fails_before_touching_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "a.md", "# Hello\n");

    let config_path = root.join("config.yaml");
    fs::write(&config_path, "yaml_front_matter: \"title: Test\"\n").unwrap();

    let err = Config::load(&config_path).unwrap_err();
    assert!(matches!(err, MatterStampError::MissingKey { ref key } if key == "folder_path"));
    assert_eq!(read(root, "a.md"), "# Hello\n");
}

#[test]
fn test_dyn_sink() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a.md", "x");

    let mut collecting = CollectingSink::new();
    let sink: &mut dyn NotificationSink = &mut collecting;
    process_folder(temp_dir.path(), "k: v", sink).unwrap();

    assert_eq!(collecting.notifications.len(), 1);
}

#[test]
fn test_first_error_halts_without_rollback() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "a.md", "A");
    fs::write(root.join("b.md"), b"\xff\xfe\x00").unwrap();
    write(root, "c.md", "C");

    let mut sink = CollectingSink::new();
    let err = process_folder(root, "k: v", &mut sink).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Io);
    assert_eq!(read(root, "a.md"), "---\nk: v\n---\n\nA");
    assert_eq!(fs::read(root.join("b.md")).unwrap(), b"\xff\xfe\x00".to_vec());
    assert_eq!(read(root, "c.md"), "C");
    assert_eq!(
        sink.notifications,
        vec![Notification::new(root.join("a.md"), Outcome::Added)]
    );
}
