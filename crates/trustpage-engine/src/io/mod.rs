use std::fs;
use std::path::{Path, PathBuf};

/// File extensions treated as author content sources.
pub const SOURCE_EXTENSIONS: &[&str] = &["txt", "md"];

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
}

/// Read a content source file
pub fn read_source(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write rendered HTML, creating parent directories as needed
pub fn write_rendered(path: &Path, html: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }
    fs::write(path, html).map_err(IoError::Io)?;
    log::info!("wrote {}", path.display());
    Ok(())
}

/// Scan for content sources under `root`, recursively, sorted by path
pub fn scan_content_files(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_content_dir(root)?;

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    log::debug!("found {} content files under {}", files.len(), root.display());
    Ok(files)
}

/// Where the HTML for `source` goes: its path relative to `root`, moved
/// under `out_dir`, with an `.html` extension.
///
/// Sources outside `root` keep only their file name.
pub fn rendered_path(root: &Path, source: &Path, out_dir: &Path) -> PathBuf {
    let relative = source
        .strip_prefix(root)
        .ok()
        .filter(|rel| !rel.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .or_else(|| source.file_name().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("index"));
    out_dir.join(relative).with_extension("html")
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(format!(
            "content directory not found: {}",
            path.display()
        )));
    }
    Ok(())
}

fn is_source(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if is_source(&path) {
            files.push(path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_scan_finds_sources_recursively() {
        let dir = TempDir::new().unwrap();
        create_test_file(&dir, "about.txt", "About us");
        create_test_file(&dir, "blog/first-post.md", "Impact\n\nWe grew.");

        let files = scan_content_files(dir.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.ends_with("about.txt")));
        assert!(files.iter().any(|f| f.ends_with("blog/first-post.md")));
    }

    #[test]
    fn test_scan_ignores_other_files() {
        let dir = TempDir::new().unwrap();
        create_test_file(&dir, "page.txt", "Text");
        create_test_file(&dir, "logo.png", "fake image data");
        create_test_file(&dir, "settings.json", "{}");

        let files = scan_content_files(dir.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name().unwrap(), "page.txt");
    }

    #[test]
    fn test_scan_results_are_sorted() {
        let dir = TempDir::new().unwrap();
        create_test_file(&dir, "b.txt", "");
        create_test_file(&dir, "a.txt", "");

        let files = scan_content_files(dir.path()).unwrap();
        assert!(files[0].ends_with("a.txt"));
        assert!(files[1].ends_with("b.txt"));
    }

    #[test]
    fn test_scan_invalid_dir() {
        let result = scan_content_files(Path::new("/this/path/does/not/exist"));
        assert!(matches!(result, Err(IoError::InvalidContentDir(_))));
    }

    #[test]
    fn test_read_source_not_found() {
        let dir = TempDir::new().unwrap();
        let result = read_source(&dir.path().join("missing.txt"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_write_rendered_creates_parents() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out/blog/post.html");

        write_rendered(&target, "<p>Hi</p>").unwrap();

        assert_eq!(read_source(&target).unwrap(), "<p>Hi</p>");
    }

    #[test]
    fn test_rendered_path_mirrors_layout() {
        let root = Path::new("/content");
        let out = Path::new("/site");
        assert_eq!(
            rendered_path(root, Path::new("/content/blog/post.txt"), out),
            PathBuf::from("/site/blog/post.html")
        );
        assert_eq!(
            rendered_path(root, Path::new("/elsewhere/about.md"), out),
            PathBuf::from("/site/about.html")
        );
    }

    #[test]
    fn test_rendered_path_for_single_file_root() {
        let source = Path::new("/content/about.txt");
        assert_eq!(
            rendered_path(source, source, Path::new("/site")),
            PathBuf::from("/site/about.html")
        );
    }
}
