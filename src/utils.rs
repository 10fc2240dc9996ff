use std::{
    fs::{self, File, OpenOptions},
    io,
    path::{Component, Path, PathBuf},
};

/// Mode of every directory created beneath a root: owner read/write/execute.
pub const DIR_MODE: u32 = 0o700;
/// Mode of every file created beneath a root: owner read/write.
pub const FILE_MODE: u32 = 0o600;

const ROOT_PREFIX: &str = "pop";

/// Returns `true` when `name` describes a directory, i.e. ends with a path separator.
pub fn is_dir_marker(name: &str) -> bool {
    name.chars().last().is_some_and(std::path::is_separator)
}

/// Joins an entry name beneath `parent`, verbatim.
///
/// Returns `None` when `name` is absolute or contains a `..` component, since the
/// joined path would not lie beneath `parent`.
pub fn join_entry(parent: &Path, name: &str) -> Option<PathBuf> {
    let escapes = Path::new(name).components().any(|component| {
        matches!(
            component,
            Component::Prefix(_) | Component::RootDir | Component::ParentDir
        )
    });

    if escapes {
        return None;
    }

    Some(parent.join(name))
}

/// Creates `path` and all of its missing ancestors. Succeeds when it already exists
/// as a directory.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }

    builder.create(path)
}

/// Creates a new file at `path` for writing. Fails when anything already exists there.
pub fn create_exclusive(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }

    options.open(path)
}

/// Creates a fresh, uniquely named, empty directory inside `parent`.
///
/// The directory is kept on disk: removing it is left to the caller.
pub fn allocate_temp_dir(parent: &Path) -> io::Result<PathBuf> {
    let directory = tempfile::Builder::new()
        .prefix(ROOT_PREFIX)
        .tempdir_in(parent)?;

    Ok(directory.keep())
}
