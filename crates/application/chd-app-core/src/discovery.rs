use std::path::{Path, PathBuf};

use anyhow::Context;
use chd_core::DiscPath;
use walkdir::WalkDir;

/// Disc images directly inside `folder` (no recursion), grouped by extension
/// in the given order and sorted by path within each group.
pub fn collect_folder_inputs(folder: &Path, extensions: &[&str]) -> anyhow::Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(folder).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) if e.depth() == 0 => {
                return Err(e).with_context(|| format!("Failed to read {}", folder.display()));
            }
            Err(e) => {
                tracing::debug!("Skipping unreadable entry in {}: {e}", folder.display());
                continue;
            }
        };
        if entry.file_type().is_file() || entry.path().is_file() {
            entries.push(entry.into_path());
        }
    }
    entries.sort();

    let mut files = Vec::new();
    for ext in extensions {
        files.extend(
            entries
                .iter()
                .filter(|p| DiscPath::has_any_extension(p, &[*ext]))
                .cloned(),
        );
    }
    Ok(files)
}

/// Dropped files with a disc-image extension first, in drop order, followed by
/// the disc images found directly inside each dropped folder.
pub fn collect_dropped(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut folders = Vec::new();
    for path in paths {
        if path.is_file() && DiscPath::has_any_extension(path, chd_config::DROP_EXTENSIONS) {
            files.push(path.clone());
        } else if path.is_dir() {
            folders.push(path);
        }
    }

    for folder in folders {
        match collect_folder_inputs(folder, chd_config::DROP_EXTENSIONS) {
            Ok(found) => files.extend(found),
            Err(e) => tracing::warn!("Ignoring dropped folder: {e:#}"),
        }
    }
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"").expect("write");
        path
    }

    #[test]
    fn folder_scan_orders_by_extension_then_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        let b_cue = touch(dir.path(), "b.cue");
        let a_iso = touch(dir.path(), "a.iso");
        let a_cue = touch(dir.path(), "a.CUE");
        touch(dir.path(), "a.bin");
        touch(dir.path(), "notes.txt");

        let found = collect_folder_inputs(dir.path(), &[".cue", ".iso"]).expect("scan");
        assert_eq!(found, vec![a_cue, b_cue, a_iso]);
    }

    #[test]
    fn folder_scan_is_not_recursive() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).expect("mkdir");
        touch(&nested, "deep.cue");
        // A directory named like a disc image is not a file.
        fs::create_dir(dir.path().join("fake.cue")).expect("mkdir");

        let found = collect_folder_inputs(dir.path(), &[".cue"]).expect("scan");
        assert!(found.is_empty());
    }

    #[test]
    fn missing_folder_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(collect_folder_inputs(&dir.path().join("gone"), &[".cue"]).is_err());
    }

    #[test]
    fn drop_accepts_files_then_folder_contents() {
        let dir = tempfile::tempdir().expect("tempdir");
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).expect("mkdir");
        let inner_cdi = touch(&sub, "x.cdi");
        let inner_gdi = touch(&sub, "y.gdi");
        let dropped_iso = touch(dir.path(), "game.iso");
        let ignored = touch(dir.path(), "readme.txt");

        let found = collect_dropped(&[sub.clone(), ignored, dropped_iso.clone()]);
        assert_eq!(found, vec![dropped_iso, inner_gdi, inner_cdi]);
    }
}
