//! Executable lookup in the process search path.

use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;

/// Return the absolute path of `command` in the first `PATH` entry that
/// contains it, or `None` when it is nowhere to be found. Entries that are
/// unreadable or not directories are skipped silently.
pub fn find_in_path(command: &str) -> Option<PathBuf> {
    let path_var = env::var_os("PATH")?;
    find_in_dirs(env::split_paths(&path_var), command)
}

/// True iff `command` is found in one of the `PATH` directories.
pub fn is_in_path(command: &str) -> bool {
    find_in_path(command).is_some()
}

fn find_in_dirs(dirs: impl IntoIterator<Item = PathBuf>, command: &str) -> Option<PathBuf> {
    let wanted = OsStr::new(command);
    for dir in dirs {
        let Ok(entries) = fs::read_dir(&dir) else {
            continue;
        };
        for entry in entries.flatten() {
            if entry.file_name() == wanted {
                return Some(entry.path());
            }
        }
    }
    None
}
