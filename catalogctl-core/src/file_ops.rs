//! File operations backing the resource store
//!
//! Reads, writes and scans of `*.md` documents. Every helper is a short,
//! synchronous sequence of `std::fs` calls; nothing here retries or locks.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

const DOCUMENT_EXTENSION: &str = "md";

/// A document found by `list_markdown`
#[derive(Debug, Clone)]
pub struct MarkdownEntry {
    pub path: PathBuf,
    pub stem: String,
    pub modified: SystemTime,
}

/// Read a file's bytes, returning `None` if it does not exist
pub fn read_optional(path: &Path) -> io::Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Whether a regular file exists at `path`. Only `NotFound` counts as absent.
pub fn is_present(path: &Path) -> io::Result<bool> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(metadata.is_file()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// Create a file that must not exist yet (parent directories are created).
///
/// The content is written to a hidden temporary sibling first and then
/// published with a hard link, so readers see either no file or the whole
/// file. Fails with `ErrorKind::AlreadyExists` when the target is present.
pub fn write_new(path: &Path, content: &str) -> io::Result<()> {
    let tmp_path = stage(path, content)?;

    let result = fs::hard_link(&tmp_path, path);
    let _ = fs::remove_file(&tmp_path);
    result
}

/// Replace a file (or create it) through a temporary sibling and a rename
pub fn write_replace(path: &Path, content: &str) -> io::Result<()> {
    let tmp_path = stage(path, content)?;

    let result = fs::rename(&tmp_path, path);
    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

/// Delete a file, returning whether it existed
pub fn remove_optional(path: &Path) -> io::Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// List the `*.md` files directly inside `dir`.
///
/// Hidden files (leading `.`) and subdirectories are skipped. A missing
/// directory yields an empty list.
pub fn list_markdown(dir: &Path) -> io::Result<Vec<MarkdownEntry>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();

        if path.extension().map(|e| e != DOCUMENT_EXTENSION).unwrap_or(true) {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if stem.starts_with('.') {
            continue;
        }

        let metadata = entry.metadata()?;
        if !metadata.is_file() {
            continue;
        }

        files.push(MarkdownEntry {
            stem: stem.to_string(),
            modified: metadata.modified()?,
            path,
        });
    }

    Ok(files)
}

fn ensure_parent(path: &Path) -> io::Result<&Path> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)?;
    Ok(parent)
}

/// Write `content` to a fresh hidden sibling of `path` and return its path
fn stage(path: &Path, content: &str) -> io::Result<PathBuf> {
    let parent = ensure_parent(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let tmp_path = parent.join(format!(".{}.{}.tmp", file_name, uuid::Uuid::new_v4()));

    let result = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .and_then(|mut file| fill(&mut file, content));

    match result {
        Ok(()) => Ok(tmp_path),
        Err(e) => {
            let _ = fs::remove_file(&tmp_path);
            Err(e)
        }
    }
}

/// Write the whole content and stamp the modification time.
///
/// Kernel mtimes advance in scheduler ticks, so two writes in quick
/// succession can share a timestamp; the system clock is finer grained.
fn fill(file: &mut File, content: &str) -> io::Result<()> {
    file.write_all(content.as_bytes())?;
    file.set_modified(SystemTime::now())?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_new_and_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/users/u1.md");

        write_new(&path, "# Test\n\nContent here").unwrap();
        let content = read_optional(&path).unwrap();
        assert_eq!(content.as_deref(), Some(&b"# Test\n\nContent here"[..]));
    }

    #[test]
    fn test_write_new_refuses_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("u1.md");

        write_new(&path, "first").unwrap();
        let err = write_new(&path, "second").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["u1.md".to_string()]);
    }

    #[test]
    fn test_write_replace_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("u1.md");

        write_replace(&path, "first").unwrap();
        write_replace(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["u1.md".to_string()]);
    }

    #[test]
    fn test_read_optional_not_found() {
        let dir = tempdir().unwrap();
        let content = read_optional(&dir.path().join("missing.md")).unwrap();
        assert!(content.is_none());
    }

    #[test]
    fn test_is_present() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("u1.md");

        assert!(!is_present(&path).unwrap());
        fs::write(&path, "content").unwrap();
        assert!(is_present(&path).unwrap());
        assert!(!is_present(dir.path()).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_is_present_surfaces_permission_errors() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("u1.md"), "content").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // root ignores directory permissions
        let readable = fs::read_dir(&locked).is_ok();
        let result = is_present(&locked.join("u1.md"));
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        if !readable {
            assert_eq!(result.unwrap_err().kind(), io::ErrorKind::PermissionDenied);
        }
    }

    #[test]
    fn test_remove_optional() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("u1.md");
        fs::write(&path, "content").unwrap();

        assert!(remove_optional(&path).unwrap());
        assert!(!path.exists());
        assert!(!remove_optional(&path).unwrap());
    }

    #[test]
    fn test_list_markdown_filters_entries() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("u1.md"), "content").unwrap();
        fs::write(dir.path().join("u2.md"), "content").unwrap();
        fs::write(dir.path().join("notes.txt"), "content").unwrap();
        fs::write(dir.path().join(".hidden.md"), "content").unwrap();
        fs::create_dir(dir.path().join("folder.md")).unwrap();

        let mut stems: Vec<_> = list_markdown(dir.path())
            .unwrap()
            .into_iter()
            .map(|e| e.stem)
            .collect();
        stems.sort();
        assert_eq!(stems, vec!["u1", "u2"]);
    }

    #[test]
    fn test_list_markdown_missing_dir() {
        let dir = tempdir().unwrap();
        let files = list_markdown(&dir.path().join("does-not-exist")).unwrap();
        assert!(files.is_empty());
    }
}
