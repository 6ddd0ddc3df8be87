//! End-to-end scenarios for the rename-healing engine (spec.md §8),
//! exercised against real `git` repositories rather than the `FakeVcs`
//! double the unit tests in `src/healer/` use.

use docdoctor_lib::healer::{self, CancellationToken, RenameMapping, RenameSource};
use docdoctor_lib::testing::GitRepo;

fn heal_repo(repo: &GitRepo) -> docdoctor_lib::healer::FixResult {
    let token = CancellationToken::new();
    let roots = vec![repo.path().to_path_buf()];
    healer::fix(repo.path(), &[], 500, &roots, false, &token).unwrap()
}

#[test]
fn staged_rename_healing() {
    let repo = GitRepo::init().unwrap();
    repo.write("old/target.md", "# Target\n").unwrap();
    repo.write("index.md", "[Go](old/target.md)\n").unwrap();
    repo.commit_all("initial");
    repo.mv("old/target.md", "new/target.md");

    let result = heal_repo(&repo);

    assert!(result.broken_links.is_empty());
    assert_eq!(result.links_updated.len(), 1);
    let content = std::fs::read_to_string(repo.path().join("index.md")).unwrap();
    assert_eq!(content, "[Go](new/target.md)\n");
}

#[test]
fn ambiguity_skip_leaves_link_unhealed() {
    let repo = GitRepo::init().unwrap();
    repo.write("Foo.md", "# Foo\n").unwrap();
    repo.write("foo.md", "# foo\n").unwrap();
    repo.write("index.md", "[Foo](FOO.md)\n").unwrap();
    repo.commit_all("initial");
    repo.mv("Foo.md", "FooNew.md");
    repo.mv("foo.md", "fooNew.md");

    let result = heal_repo(&repo);

    assert_eq!(result.heal_skipped.len(), 1);
    assert!(result.heal_skipped[0].reason.contains("ambiguous"));
    assert_eq!(result.heal_skipped[0].candidates.len(), 2);
    let content = std::fs::read_to_string(repo.path().join("index.md")).unwrap();
    assert_eq!(content, "[Foo](FOO.md)\n");
}

#[test]
fn chained_rename_resolves_to_final_path() {
    let repo = GitRepo::init().unwrap();
    repo.write("file.md", "# F\n").unwrap();
    repo.write("index.md", "[Go](file.md)\n").unwrap();
    repo.commit_all("initial");
    repo.mv("file.md", "subdir/File.md");

    // Simulate the filename-conventions fixer having already normalized the
    // staged rename's casing in this same run, before git saw anything.
    std::fs::rename(
        repo.path().join("subdir/File.md"),
        repo.path().join("subdir/file.md"),
    )
    .unwrap();
    let fixer_mappings = vec![RenameMapping {
        old_abs: repo.path().join("subdir/File.md"),
        new_abs: repo.path().join("subdir/file.md"),
        source: RenameSource::Fixer,
    }];

    let token = CancellationToken::new();
    let roots = vec![repo.path().to_path_buf()];
    let result = healer::fix(repo.path(), &fixer_mappings, 500, &roots, false, &token).unwrap();

    assert!(result.broken_links.is_empty());
    let content = std::fs::read_to_string(repo.path().join("index.md")).unwrap();
    assert_eq!(content, "[Go](subdir/file.md)\n");
}

#[test]
fn site_absolute_link_preserves_leading_slash() {
    let repo = GitRepo::init().unwrap();
    repo.write("content/en/api/old.md", "# Old\n").unwrap();
    repo.write("content/en/guide/source.md", "[API](/en/api/old.md)\n").unwrap();
    repo.commit_all("initial");
    repo.mv("content/en/api/old.md", "content/en/api/new.md");

    let result = heal_repo(&repo);

    assert!(result.broken_links.is_empty());
    let content =
        std::fs::read_to_string(repo.path().join("content/en/guide/source.md")).unwrap();
    assert_eq!(content, "[API](/en/api/new.md)\n");
}

#[test]
fn extensionless_link_stays_extensionless_after_rename() {
    let repo = GitRepo::init().unwrap();
    repo.write("content/en/api/old.md", "# Old\n").unwrap();
    repo.write("content/en/guide/source.md", "[API](/en/api/old)\n").unwrap();
    repo.commit_all("initial");
    repo.mv("content/en/api/old.md", "content/en/api/new.md");

    let result = heal_repo(&repo);

    assert!(result.broken_links.is_empty());
    let content =
        std::fs::read_to_string(repo.path().join("content/en/guide/source.md")).unwrap();
    assert_eq!(content, "[API](/en/api/new)\n");
}

#[test]
fn fence_exclusion_reports_exactly_one_broken_link() {
    let repo = GitRepo::init().unwrap();
    repo.write(
        "index.md",
        "[Broken](./missing.md)\n\n~~~go\n[Broken](./missing.md)\n~~~\n",
    )
    .unwrap();
    repo.commit_all("initial");

    let broken = healer::detect_broken_links(repo.path()).unwrap();

    assert_eq!(broken.len(), 1);
    assert_eq!(broken[0].line_number, 1);
}

#[test]
fn clean_tree_after_heal_has_no_broken_links_or_skips() {
    let repo = GitRepo::init().unwrap();
    repo.write("index.md", "[Guide](guide.md)\n").unwrap();
    repo.write("guide.md", "# Guide\n").unwrap();
    repo.commit_all("initial");

    let result = heal_repo(&repo);

    assert!(result.broken_links.is_empty());
    assert!(result.heal_skipped.is_empty());
    assert!(result.links_updated.is_empty());
}
