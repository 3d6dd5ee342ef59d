use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Finds the converter binary: next to the running program first, then on `PATH`.
#[derive(Debug, Clone)]
pub struct ToolLocator {
    file_name: String,
    program_dir: Option<PathBuf>,
    search_path: Option<OsString>,
}

impl Default for ToolLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolLocator {
    pub fn new() -> Self {
        Self {
            file_name: chd_config::tool_file_name(),
            program_dir: program_dir(),
            search_path: std::env::var_os("PATH"),
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn with_program_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.program_dir = dir;
        self
    }

    pub fn with_search_path(mut self, path: Option<OsString>) -> Self {
        self.search_path = path;
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn locate(&self) -> Option<PathBuf> {
        if let Some(dir) = &self.program_dir {
            let candidate = dir.join(&self.file_name);
            if is_runnable(&candidate) {
                return Some(candidate);
            }
        }

        let search_path = self.search_path.as_ref()?;
        std::env::split_paths(search_path)
            .map(|dir| dir.join(&self.file_name))
            .find(|candidate| is_runnable(candidate))
    }
}

/// An explicit override wins when it exists; otherwise fall back to the default search.
pub fn resolve_tool(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) if is_runnable(path) => Some(path.to_path_buf()),
        Some(path) => {
            tracing::warn!("Converter override {} does not exist", path.display());
            None
        }
        None => ToolLocator::new().locate(),
    }
}

/// Directory that holds the running executable.
pub fn program_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

#[cfg(unix)]
fn is_runnable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_runnable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch_tool(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"").expect("write tool");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod");
        }
        path
    }

    #[test]
    fn program_dir_wins_over_search_path() {
        let local = tempfile::tempdir().expect("tempdir");
        let on_path = tempfile::tempdir().expect("tempdir");
        let expected = touch_tool(local.path(), "chdman");
        touch_tool(on_path.path(), "chdman");

        let found = ToolLocator::new()
            .with_file_name("chdman")
            .with_program_dir(Some(local.path().to_path_buf()))
            .with_search_path(Some(on_path.path().as_os_str().to_os_string()))
            .locate();
        assert_eq!(found, Some(expected));
    }

    #[test]
    fn falls_back_to_first_search_path_hit() {
        let empty = tempfile::tempdir().expect("tempdir");
        let first = tempfile::tempdir().expect("tempdir");
        let second = tempfile::tempdir().expect("tempdir");
        let expected = touch_tool(first.path(), "chdman");
        touch_tool(second.path(), "chdman");

        let search = std::env::join_paths([empty.path(), first.path(), second.path()])
            .expect("join paths");
        let found = ToolLocator::new()
            .with_file_name("chdman")
            .with_program_dir(Some(empty.path().to_path_buf()))
            .with_search_path(Some(search))
            .locate();
        assert_eq!(found, Some(expected));
    }

    #[test]
    fn missing_everywhere_is_none() {
        let empty = tempfile::tempdir().expect("tempdir");
        let found = ToolLocator::new()
            .with_file_name("chdman")
            .with_program_dir(Some(empty.path().to_path_buf()))
            .with_search_path(None)
            .locate();
        assert_eq!(found, None);
    }

    #[test]
    #[cfg(unix)]
    fn non_executable_file_is_skipped() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("chdman"), b"").expect("write");
        let found = ToolLocator::new()
            .with_file_name("chdman")
            .with_program_dir(Some(dir.path().to_path_buf()))
            .with_search_path(None)
            .locate();
        assert_eq!(found, None);
    }

    #[test]
    fn missing_override_is_not_replaced_by_search() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert_eq!(resolve_tool(Some(&dir.path().join("nope"))), None);
    }
}
