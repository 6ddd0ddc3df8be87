//! Integration tests for the `core` module (config, filesystem scanning).

use docdoctor_lib::core::config::HealConfig;
use docdoctor_lib::core::files;
use std::path::PathBuf;
use tempfile::tempdir;

mod config_tests {
    use super::*;

    #[test]
    fn test_config_defaults_point_at_content_root() {
        let config = HealConfig::default();
        assert_eq!(config.docs_roots, vec![PathBuf::from("content")]);
        assert_eq!(config.ignore_files, vec!["README.md".to_string()]);
    }

    #[test]
    fn test_config_from_env_overrides_docs_root() {
        std::env::set_var("DOCDOCTOR_DOCS_ROOT", "/tmp/example-docs");
        let config = HealConfig::from_env();
        std::env::remove_var("DOCDOCTOR_DOCS_ROOT");

        assert_eq!(config.docs_roots, vec![PathBuf::from("/tmp/example-docs")]);
    }

    #[test]
    fn test_config_merge_prefers_non_default_values() {
        let mut base = HealConfig::default();
        let override_config = HealConfig::builder().docs_root("docs").git_history_depth(42).build();

        base.merge(override_config);

        assert_eq!(base.docs_roots, vec![PathBuf::from("docs")]);
        assert_eq!(base.git_history_depth, 42);
    }
}

mod file_operations_tests {
    use super::*;

    #[test]
    fn test_temp_file_creation() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.md");

        std::fs::write(&file_path, "# Test").unwrap();
        assert!(file_path.exists());

        let content = std::fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "# Test");
    }

    #[test]
    fn test_markdown_file_detection() {
        let md_paths = ["doc.md", "file.markdown"];
        for path in md_paths {
            let p = PathBuf::from(path);
            let ext = p.extension().map(|e| e.to_str().unwrap().to_lowercase());
            assert!(ext.map(|e| e == "md" || e == "markdown").unwrap_or(false));
        }
    }

    #[test]
    fn test_scan_finds_only_markdown_files() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a.md"), "# A").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not markdown").unwrap();

        let files = files::get_all_md_files(dir.path(), &files::ScanOptions::default()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("a.md"));
    }

    #[test]
    fn test_backup_and_restore_round_trip() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("original.md");
        std::fs::write(&file_path, "original content").unwrap();

        let backup_path = files::backup_file(&file_path).unwrap();
        assert!(backup_path.exists());

        std::fs::write(&file_path, "mutated content").unwrap();
        files::restore_from_backup(&file_path).unwrap();

        assert_eq!(std::fs::read_to_string(&file_path).unwrap(), "original content");
    }
}

mod hash_tests {
    use docdoctor_lib::fingerprint::fingerprint_content;

    #[test]
    fn test_hash_determinism() {
        let content = "Test content for hashing";
        assert_eq!(fingerprint_content(content), fingerprint_content(content));
    }

    #[test]
    fn test_hash_changes_with_content() {
        assert_ne!(fingerprint_content("a"), fingerprint_content("b"));
    }
}
