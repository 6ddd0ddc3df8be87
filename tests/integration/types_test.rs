//! Integration tests for the `types` module.

use docdoctor_lib::types::DataPath;

mod data_path_tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_data_path_markdown_detection() {
        let path = DataPath::new(PathBuf::from("doc.md"));
        assert!(path.is_markdown());

        let path2 = DataPath::new(PathBuf::from("file.txt"));
        assert!(!path2.is_markdown());

        let path3 = DataPath::new(PathBuf::from("doc.markdown"));
        assert!(path3.is_markdown());
    }

    #[test]
    fn test_data_path_content_root_detection() {
        let path = DataPath::new(PathBuf::from("content/en/guide/source.md"));
        assert!(path.is_in_content_root());

        let path2 = DataPath::new(PathBuf::from("static/assets/logo.png"));
        assert!(!path2.is_in_content_root());
    }

    #[test]
    fn test_data_path_stem() {
        let path = DataPath::new(PathBuf::from("content/guide/intro.md"));
        assert_eq!(path.stem(), Some(std::ffi::OsStr::new("intro")));
    }

    #[test]
    fn test_data_path_deref_to_path_methods() {
        let path = DataPath::new(PathBuf::from("content/guide/intro.md"));
        assert_eq!(path.file_name().unwrap(), "intro.md");
        assert_eq!(path.extension().unwrap(), "md");
    }

    #[test]
    fn test_data_path_from_conversions() {
        let from_str: DataPath = "content/a.md".into();
        let from_string: DataPath = String::from("content/a.md").into();
        assert_eq!(from_str, from_string);
    }

    #[test]
    fn test_data_path_display() {
        let path = DataPath::new(PathBuf::from("content/a.md"));
        assert_eq!(path.to_string(), "content/a.md");
    }
}
