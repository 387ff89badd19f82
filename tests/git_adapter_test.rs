// tests/git_adapter_test.rs
use git2::{Commit, Oid, Repository, Signature};
use scm_version::scm::{GitAdapter, ProjectContext, ScmAdapter};
use scm_version::{VersionService, VersioningConfig, VersioningError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn init_repo() -> (TempDir, Repository) {
    let dir = TempDir::new().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    {
        let mut config = repo.config().unwrap();
        config.set_str("user.name", "Test").unwrap();
        config.set_str("user.email", "test@example.com").unwrap();
    }
    (dir, repo)
}

fn commit_file(repo: &Repository, name: &str, content: &str, message: &str) -> Oid {
    let root = repo.workdir().unwrap().to_path_buf();
    fs::write(root.join(name), content).unwrap();

    let mut index = repo.index().unwrap();
    index.add_path(Path::new(name)).unwrap();
    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();

    let sig = Signature::now("Test", "test@example.com").unwrap();
    let parents: Vec<Commit> = match repo.head() {
        Ok(head) => vec![head.peel_to_commit().unwrap()],
        Err(_) => Vec::new(),
    };
    let parent_refs: Vec<&Commit> = parents.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
        .unwrap()
}

fn checkout_new_branch(repo: &Repository, name: &str) {
    let head = repo.head().unwrap().peel_to_commit().unwrap();
    repo.branch(name, &head, false).unwrap();
    repo.set_head(&format!("refs/heads/{}", name)).unwrap();
}

fn tag(repo: &Repository, name: &str, oid: Oid) {
    let object = repo.find_object(oid, None).unwrap();
    repo.tag_lightweight(name, &object, false).unwrap();
}

#[test]
fn test_info_on_feature_branch() {
    let (dir, repo) = init_repo();
    let oid = commit_file(&repo, "README.md", "hello", "initial");
    checkout_new_branch(&repo, "feature/login");

    let project = ProjectContext::new(dir.path());
    let info = GitAdapter::new()
        .info(&project, &VersioningConfig::default())
        .unwrap();

    assert_eq!(info.branch, "feature/login");
    assert_eq!(info.commit, oid.to_string());
    assert!(!info.abbreviated.is_empty());
    assert!(oid.to_string().starts_with(&info.abbreviated));
    assert_eq!(info.tag, None);
    assert!(!info.dirty);
}

#[test]
fn test_modified_tracked_file_is_dirty() {
    let (dir, repo) = init_repo();
    commit_file(&repo, "README.md", "hello", "initial");
    fs::write(dir.path().join("README.md"), "changed").unwrap();

    let project = ProjectContext::new(dir.path());
    let info = GitAdapter::new()
        .info(&project, &VersioningConfig::default())
        .unwrap();
    assert!(info.dirty);
}

#[test]
fn test_staged_file_is_dirty() {
    let (dir, repo) = init_repo();
    commit_file(&repo, "README.md", "hello", "initial");
    fs::write(dir.path().join("NEW.md"), "new").unwrap();
    let mut index = repo.index().unwrap();
    index.add_path(Path::new("NEW.md")).unwrap();
    index.write().unwrap();

    let project = ProjectContext::new(dir.path());
    let info = GitAdapter::new()
        .info(&project, &VersioningConfig::default())
        .unwrap();
    assert!(info.dirty);
}

#[test]
fn test_exact_tag_at_head() {
    let (dir, repo) = init_repo();
    let oid = commit_file(&repo, "README.md", "hello", "initial");
    checkout_new_branch(&repo, "release/2.0");
    tag(&repo, "2.0.0", oid);

    let project = ProjectContext::new(dir.path());
    let info = GitAdapter::new()
        .info(&project, &VersioningConfig::default())
        .unwrap();
    assert_eq!(info.tag.as_deref(), Some("2.0.0"));
}

#[test]
fn test_base_tags_most_recent_first() {
    let (dir, repo) = init_repo();
    let first = commit_file(&repo, "a.txt", "1", "first");
    checkout_new_branch(&repo, "release/2.0");
    tag(&repo, "2.0.0", first);
    let second = commit_file(&repo, "a.txt", "2", "second");
    tag(&repo, "2.0.1", second);
    tag(&repo, "1.9.0", second);
    tag(&repo, "2.0.1-rc", second);
    commit_file(&repo, "a.txt", "3", "third");

    let project = ProjectContext::new(dir.path());
    let tags = GitAdapter::new()
        .base_tags(&project, &VersioningConfig::default(), "2.0")
        .unwrap();
    assert_eq!(tags, vec!["2.0.1", "2.0.0"]);
}

#[test]
fn test_service_on_release_branch() {
    let (dir, repo) = init_repo();
    let first = commit_file(&repo, "a.txt", "1", "first");
    checkout_new_branch(&repo, "release/2.0");
    tag(&repo, "2.0.0", first);
    commit_file(&repo, "a.txt", "2", "second");

    let project = ProjectContext::new(dir.path());
    let config = VersioningConfig {
        release_mode: "snapshot".to_string(),
        ..VersioningConfig::default()
    };
    let info = VersionService::standard()
        .compute_version_info(&project, &config)
        .unwrap();

    assert_eq!(info.scm, "git");
    assert_eq!(info.branch_type, "release");
    assert_eq!(info.base, "2.0");
    assert_eq!(info.last_tag, "2.0.0");
    assert_eq!(info.display, "2.0.1-SNAPSHOT");
    assert_eq!(info.full, format!("release-2.0-{}", info.abbreviated));
}

#[test]
fn test_service_without_git_directory() {
    let dir = TempDir::new().unwrap();
    let project = ProjectContext::new(dir.path());
    let info = VersionService::standard()
        .compute_version_info(&project, &VersioningConfig::default())
        .unwrap();
    assert!(info.is_none());
}

#[test]
fn test_untracked_file_is_not_dirty() {
    let (dir, repo) = init_repo();
    commit_file(&repo, "README.md", "hello", "initial");
    fs::write(dir.path().join("notes.txt"), "scratch").unwrap();

    let project = ProjectContext::new(dir.path());
    let info = GitAdapter::new()
        .info(&project, &VersioningConfig::default())
        .unwrap();
    assert!(!info.dirty);
}

#[test]
fn test_detached_head_reports_head() {
    let (dir, repo) = init_repo();
    let first = commit_file(&repo, "a.txt", "1", "first");
    commit_file(&repo, "a.txt", "2", "second");
    repo.set_head_detached(first).unwrap();

    let project = ProjectContext::new(dir.path());
    let info = GitAdapter::new()
        .info(&project, &VersioningConfig::default())
        .unwrap();
    assert_eq!(info.branch, "HEAD");
    assert_eq!(info.commit, first.to_string());
}

#[test]
fn test_tags_on_one_commit_highest_number_first() {
    let (dir, repo) = init_repo();
    let first = commit_file(&repo, "a.txt", "1", "first");
    checkout_new_branch(&repo, "release/2.0");
    tag(&repo, "2.0.0", first);
    let second = commit_file(&repo, "a.txt", "2", "second");
    tag(&repo, "2.0.2", second);
    tag(&repo, "2.0.10", second);
    tag(&repo, "2.0.9", second);

    let project = ProjectContext::new(dir.path());
    let tags = GitAdapter::new()
        .base_tags(&project, &VersioningConfig::default(), "2.0")
        .unwrap();
    assert_eq!(tags, vec!["2.0.10", "2.0.9", "2.0.2", "2.0.0"]);
}

#[test]
fn test_oversized_tag_number_aborts_computation() {
    let (dir, repo) = init_repo();
    let first = commit_file(&repo, "a.txt", "1", "first");
    checkout_new_branch(&repo, "release/2.0");
    tag(&repo, "2.0.5", first);
    let second = commit_file(&repo, "a.txt", "2", "second");
    tag(&repo, "2.0.18446744073709551616", second);

    let project = ProjectContext::new(dir.path());
    let tags = GitAdapter::new()
        .base_tags(&project, &VersioningConfig::default(), "2.0")
        .unwrap();
    assert_eq!(tags, vec!["2.0.18446744073709551616", "2.0.5"]);

    let err = VersionService::standard()
        .compute_version_info(&project, &VersioningConfig::default())
        .unwrap_err();
    assert!(matches!(err, VersioningError::TagParse { .. }));
}
