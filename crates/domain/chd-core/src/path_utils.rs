use std::path::{Path, PathBuf};

pub struct DiscPath;

impl DiscPath {
    /// Lowercased extension with its leading dot, e.g. `.iso`.
    pub fn dotted_extension(path: &Path) -> Option<String> {
        path.extension()
            .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
    }

    /// Case-insensitive match against a list of dotted extensions.
    pub fn has_any_extension(path: &Path, extensions: &[&str]) -> bool {
        match Self::dotted_extension(path) {
            Some(ext) => extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext)),
            None => false,
        }
    }

    /// Same path with its final extension swapped for the container's.
    pub fn container_path(input: &Path) -> PathBuf {
        let ext = chd_config::CONTAINER_EXTENSION.trim_start_matches('.');
        input.with_extension(ext)
    }

    /// File name for status lines; falls back to the full path.
    pub fn display_name(path: &Path) -> String {
        path.file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_path_replaces_only_the_last_extension() {
        assert_eq!(
            DiscPath::container_path(Path::new("roms/Final.Fantasy.VII (Disc 1).cue")),
            PathBuf::from("roms/Final.Fantasy.VII (Disc 1).chd")
        );
        assert_eq!(
            DiscPath::container_path(Path::new("noext")),
            PathBuf::from("noext.chd")
        );
    }

    #[test]
    fn extension_match_ignores_case() {
        assert!(DiscPath::has_any_extension(Path::new("A.ISO"), &[".iso"]));
        assert!(!DiscPath::has_any_extension(Path::new("A.bin"), &[".iso", ".cue"]));
        assert!(!DiscPath::has_any_extension(Path::new("README"), &[".iso"]));
    }
}
