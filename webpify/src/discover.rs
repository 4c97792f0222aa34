use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub(crate) const SOURCE_EXTENSION: &str = "png";

/// An empty directory argument means the current directory.
pub(crate) fn traversal_root(directory: &Path) -> &Path {
    if directory.as_os_str().is_empty() { Path::new(".") } else { directory }
}

/// Collects every `*.png` entry below `directory`, hidden ones included.
/// Symlinked directories are not descended into. Symlinks themselves are returned even when broken,
/// so converting them reports the problem.
pub(crate) fn evaluate_png_files(directory: &Path) -> Option<(Vec<PathBuf>, Vec<walkdir::Error>)> {
    let file_name_pattern = match Pattern::new(&format!("*.{}", SOURCE_EXTENSION)) {
        Ok(pattern) => pattern,
        Err(error) => {
            log::error!("Failed to interpret file name pattern: {}", error);
            return None;
        }
    };

    let match_options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    let root = traversal_root(directory);
    let walk_results = WalkDir::new(root).min_depth(1).follow_links(false);

    let (mut paths, mut errors) = walk_results.into_iter().fold(
        (Vec::<PathBuf>::new(), Vec::<walkdir::Error>::new()),
        |(mut paths, mut errors), walk_result| {
            match walk_result {
                Ok(entry) if entry.file_type().is_dir() => {}
                Ok(entry) if file_name_pattern.matches_with(&entry.file_name().to_string_lossy(), match_options) => {
                    paths.push(strip_current_directory(entry.into_path(), directory))
                }
                Ok(_) => {}
                Err(error) => errors.push(error),
            };
            (paths, errors)
        },
    );

    let lowercase_os_str_from_path = |path: &Path| path.as_os_str().to_ascii_lowercase();

    let lowercase_os_str_from_walk_error =
        |walk_error: &walkdir::Error| walk_error.path().map(lowercase_os_str_from_path).unwrap_or_default();

    paths.sort_by_key(|path_buf| lowercase_os_str_from_path(path_buf.as_path()));
    errors.sort_by_key(lowercase_os_str_from_walk_error);

    Some((paths, errors))
}

/// Paths found for an empty directory argument are reported relative, without a leading `./`.
fn strip_current_directory(path_buf: PathBuf, directory: &Path) -> PathBuf {
    if directory.as_os_str().is_empty() {
        path_buf.strip_prefix(".").map(Path::to_path_buf).unwrap_or(path_buf)
    } else {
        path_buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn empty_directory_walks_the_current_directory() {
        assert_eq!(traversal_root(Path::new("")), Path::new("."));
        assert_eq!(traversal_root(Path::new("photos")), Path::new("photos"));
        assert_eq!(strip_current_directory(PathBuf::from("./a/b.png"), Path::new("")), PathBuf::from("a/b.png"));
        assert_eq!(strip_current_directory(PathBuf::from("./a/b.png"), Path::new(".")), PathBuf::from("./a/b.png"));
    }

    #[test]
    fn finds_nested_and_hidden_png_files_only() {
        let directory = tempfile::tempdir().unwrap();
        let nested = directory.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::create_dir(directory.path().join("folder.png")).unwrap();

        for path in [
            directory.path().join("top.png"),
            directory.path().join(".hidden.png"),
            nested.join("deep.png"),
            nested.join("notes.txt"),
            nested.join("photo.webp"),
        ] {
            fs::write(path, b"").unwrap();
        }

        let (paths, errors) = evaluate_png_files(directory.path()).unwrap();

        assert!(errors.is_empty());
        assert_eq!(
            paths,
            vec![
                directory.path().join(".hidden.png"),
                nested.join("deep.png"),
                directory.path().join("top.png"),
            ]
        );
    }

    #[test]
    fn extension_match_is_case_sensitive() {
        let directory = tempfile::tempdir().unwrap();
        fs::write(directory.path().join("UPPER.PNG"), b"").unwrap();

        let (paths, _) = evaluate_png_files(directory.path()).unwrap();

        assert!(paths.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directories_are_not_followed() {
        let directory = tempfile::tempdir().unwrap();
        let album = directory.path().join("album");
        fs::create_dir(&album).unwrap();
        fs::write(album.join("a.png"), b"").unwrap();
        std::os::unix::fs::symlink(directory.path(), album.join("loop")).unwrap();

        let (paths, errors) = evaluate_png_files(directory.path()).unwrap();

        assert!(errors.is_empty());
        assert_eq!(paths, vec![album.join("a.png")]);
    }

    #[cfg(unix)]
    #[test]
    fn broken_png_symlinks_are_still_returned() {
        let directory = tempfile::tempdir().unwrap();
        let dangling = directory.path().join("dangling.png");
        std::os::unix::fs::symlink(directory.path().join("missing.png"), &dangling).unwrap();

        let (paths, _) = evaluate_png_files(directory.path()).unwrap();

        assert_eq!(paths, vec![dangling]);
    }
}
