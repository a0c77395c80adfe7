//! Top-down directory walk with subtree pruning.

use super::filter::ExclusionSet;
use crate::error::{Error, Result};
use std::borrow::Cow;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One visited directory.
#[derive(Debug, Clone)]
pub struct WalkEntry {
    pub dir: PathBuf,
    /// Names of subdirectories, symlinked ones included.
    pub subdirs: Vec<OsString>,
    pub files: Vec<OsString>,
    /// Real (non-symlink) subdirectories the walk descends into.
    descend: Vec<PathBuf>,
}

impl WalkEntry {
    /// Full paths of the files in this directory, each with a lossy name for
    /// matching and display. The path keeps the raw name.
    pub fn file_paths(&self) -> impl Iterator<Item = (PathBuf, Cow<'_, str>)> + '_ {
        self.files
            .iter()
            .map(move |name| (self.dir.join(name), name.to_string_lossy()))
    }
}

fn read_entry(dir: &Path) -> io::Result<WalkEntry> {
    let mut subdirs = Vec::new();
    let mut files = Vec::new();
    let mut descend = Vec::new();

    for entry in fs::read_dir(dir)? {
        let Ok(entry) = entry else {
            continue;
        };
        let name = entry.file_name();
        let path = entry.path();

        match entry.file_type() {
            Ok(file_type) if file_type.is_dir() => {
                subdirs.push(name);
                descend.push(path);
            }
            Ok(file_type) if file_type.is_symlink() && path.is_dir() => {
                // Listed, not followed.
                subdirs.push(name);
            }
            // Unknown type counts as a file.
            _ => files.push(name),
        }
    }

    Ok(WalkEntry {
        dir: dir.to_path_buf(),
        subdirs,
        files,
        descend,
    })
}

/// Lazy top-down walk. Directories whose path hits the [`ExclusionSet`] are
/// neither yielded nor descended into.
///
/// The root must be a readable directory unless it is itself excluded;
/// nested directories that cannot be listed are skipped.
pub struct Walker {
    exclusions: ExclusionSet,
    pending: Vec<PathBuf>,
    first: Option<WalkEntry>,
}

impl Walker {
    pub fn new(root: &Path, exclusions: ExclusionSet) -> Result<Self> {
        if !root.is_dir() {
            return Err(Error::validation_invalid_argument(
                "root",
                format!("Not a directory: {}", root.display()),
                Some(root.display().to_string()),
            )
            .with_hint("Pass the project directory as ROOT"));
        }

        let first = if exclusions.is_excluded(root) {
            log_status!("walk", "Root {} is excluded, nothing to do", root.display());
            None
        } else {
            let entry = read_entry(root).map_err(|e| {
                Error::internal_io(e.to_string(), Some(format!("read dir {}", root.display())))
            })?;
            Some(entry)
        };

        Ok(Self {
            exclusions,
            pending: Vec::new(),
            first,
        })
    }

    fn visit(&mut self, entry: WalkEntry) -> WalkEntry {
        // Reverse so subdirectories pop in listing order.
        for dir in entry.descend.iter().rev() {
            if !self.exclusions.is_excluded(dir) {
                self.pending.push(dir.clone());
            }
        }
        entry
    }
}

impl Iterator for Walker {
    type Item = WalkEntry;

    fn next(&mut self) -> Option<WalkEntry> {
        if let Some(entry) = self.first.take() {
            return Some(self.visit(entry));
        }

        while let Some(dir) = self.pending.pop() {
            match read_entry(&dir) {
                Ok(entry) => return Some(self.visit(entry)),
                Err(e) => {
                    log_status!("walk", "Skipping {}: {}", dir.display(), e);
                }
            }
        }

        None
    }
}

/// Walk `root` with the given exclusions.
pub fn walk(root: &Path, exclusions: ExclusionSet) -> Result<Walker> {
    Walker::new(root, exclusions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Make `dir` unlistable. Returns false when permissions are not enforced
    /// (running as root), after restoring the mode.
    #[cfg(unix)]
    fn lock_dir(dir: &Path) -> bool {
        use std::os::unix::fs::PermissionsExt;

        fs::set_permissions(dir, fs::Permissions::from_mode(0o000)).unwrap();
        if fs::read_dir(dir).is_ok() {
            unlock_dir(dir);
            return false;
        }
        true
    }

    #[cfg(unix)]
    fn unlock_dir(dir: &Path) {
        use std::os::unix::fs::PermissionsExt;

        fs::set_permissions(dir, fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn visited(root: &Path) -> Vec<PathBuf> {
        walk(root, ExclusionSet::builtin())
            .unwrap()
            .map(|e| e.dir.strip_prefix(root).unwrap().to_path_buf())
            .collect()
    }

    #[test]
    fn visits_root_first_then_nested() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("src/components")).unwrap();
        fs::write(temp.path().join("src/components/a.ts"), "x").unwrap();

        let dirs = visited(temp.path());
        assert_eq!(dirs[0], PathBuf::new());
        assert!(dirs.contains(&PathBuf::from("src")));
        assert!(dirs.contains(&PathBuf::from("src/components")));
    }

    #[test]
    fn prunes_excluded_subtrees() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("node_modules/pkg/lib")).unwrap();
        fs::create_dir_all(temp.path().join("b/dist/inner")).unwrap();
        fs::create_dir_all(temp.path().join(".github/workflows")).unwrap();
        fs::create_dir_all(temp.path().join("keep")).unwrap();

        let dirs = visited(temp.path());
        assert!(dirs.contains(&PathBuf::from("keep")));
        assert!(dirs.contains(&PathBuf::from("b")));
        assert!(dirs.iter().all(|d| {
            let s = d.to_string_lossy();
            !s.contains("node_modules") && !s.contains("dist") && !s.contains(".git")
        }));
    }

    #[test]
    fn entry_lists_files_and_subdirs() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("a.ts"), "").unwrap();
        fs::write(temp.path().join("b.txt"), "").unwrap();

        let root = walk(temp.path(), ExclusionSet::builtin())
            .unwrap()
            .next()
            .unwrap();
        let mut files = root.files.clone();
        files.sort();
        assert_eq!(files, vec![OsString::from("a.ts"), OsString::from("b.txt")]);
        assert_eq!(root.subdirs, vec![OsString::from("sub")]);
        assert_eq!(root.file_paths().count(), 2);
    }

    #[test]
    fn excluded_root_yields_nothing() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("dist");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("a.ts"), "").unwrap();

        assert_eq!(walk(&root, ExclusionSet::builtin()).unwrap().count(), 0);
    }

    #[test]
    fn missing_root_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = walk(&temp.path().join("nope"), ExclusionSet::builtin())
            .err()
            .unwrap();
        assert_eq!(err.code.as_str(), "validation.invalid_argument");
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_nested_dir_is_skipped() {
        let temp = TempDir::new().unwrap();
        let locked = temp.path().join("locked");
        fs::create_dir_all(locked.join("inner")).unwrap();
        fs::create_dir(temp.path().join("open")).unwrap();
        if !lock_dir(&locked) {
            return;
        }

        let dirs = visited(temp.path());
        unlock_dir(&locked);

        assert!(dirs.contains(&PathBuf::from("open")));
        assert!(!dirs.contains(&PathBuf::from("locked")));
        assert!(!dirs.contains(&PathBuf::from("locked/inner")));
    }

    #[cfg(unix)]
    #[test]
    fn excluded_root_is_never_listed() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("dist");
        fs::create_dir(&root).unwrap();
        if !lock_dir(&root) {
            return;
        }

        let count = walk(&root, ExclusionSet::builtin()).map(|w| w.count());
        unlock_dir(&root);

        assert_eq!(count.ok(), Some(0));
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_root_is_an_io_error() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("site");
        fs::create_dir(&root).unwrap();
        if !lock_dir(&root) {
            return;
        }

        let err = walk(&root, ExclusionSet::builtin()).err();
        unlock_dir(&root);

        assert_eq!(err.unwrap().code.as_str(), "internal.io_error");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn file_paths_keep_raw_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = TempDir::new().unwrap();
        let name = OsStr::from_bytes(b"caf\xe9.ts");
        fs::write(temp.path().join(name), "x").unwrap();

        let root = walk(temp.path(), ExclusionSet::builtin())
            .unwrap()
            .next()
            .unwrap();
        let (path, display) = root.file_paths().next().unwrap();

        assert!(path.exists());
        assert_eq!(path.file_name(), Some(name));
        assert_eq!(display, "caf\u{fffd}.ts");
    }

    #[cfg(unix)]
    #[test]
    fn entries_without_a_directory_type_are_files() {
        let temp = TempDir::new().unwrap();
        std::os::unix::fs::symlink(temp.path().join("gone"), temp.path().join("dangling.ts"))
            .unwrap();

        let root = walk(temp.path(), ExclusionSet::builtin())
            .unwrap()
            .next()
            .unwrap();

        assert_eq!(root.files, vec![OsString::from("dangling.ts")]);
        assert!(root.subdirs.is_empty());
    }
}
