use crate::{
    errors::PopError,
    tree::{Content, Tree},
    utils::{create_exclusive, ensure_dir, is_dir_marker, join_entry},
};
use std::{
    io::Write,
    path::{Path, PathBuf},
};

/// Materializes every entry of `tree` beneath `parent`, stopping at the first error.
///
/// Entries created before the failing one are left on disk.
pub(crate) fn materialize_tree(parent: &Path, tree: &Tree) -> Result<(), PopError> {
    for (name, content) in tree {
        materialize_entry(parent, name, content)?;
    }

    Ok(())
}

fn materialize_entry(parent: &Path, name: &str, content: &Content) -> Result<(), PopError> {
    if is_dir_marker(name) {
        materialize_dir(parent, name, content)
    } else {
        materialize_file(parent, name, content)
    }
}

fn entry_path(parent: &Path, name: &str) -> Result<PathBuf, PopError> {
    join_entry(parent, name).ok_or_else(|| PopError::InvalidEntryName {
        parent: parent.to_path_buf(),
        name: name.to_string(),
    })
}

/// Creates the directory named by `name`, then its children if `content` is a tree.
fn materialize_dir(parent: &Path, name: &str, content: &Content) -> Result<(), PopError> {
    let dir_path = entry_path(parent, name)?;

    create_directory(&dir_path)?;

    match content {
        Content::Empty => Ok(()),
        Content::Nested(children) => materialize_tree(&dir_path, children),
        other => Err(PopError::StructuralType {
            path: dir_path,
            found: other.kind(),
            expected: "a nested tree",
        }),
    }
}

/// Creates the file named by `name` and writes `content` into it.
///
/// The file is created before `content` is checked, so a mismatched entry leaves
/// a zero-byte file behind.
fn materialize_file(parent: &Path, name: &str, content: &Content) -> Result<(), PopError> {
    let file_path = entry_path(parent, name)?;

    let mut file = create_exclusive(&file_path).map_err(|error| PopError::FileCreation {
        path: file_path.clone(),
        source: error,
    })?;

    log::debug!("create file: {}", file_path.display());

    match content {
        Content::Empty => Ok(()),
        Content::Text(text) => {
            file.write_all(text.as_bytes())
                .map_err(|error| PopError::FileWrite {
                    path: file_path,
                    source: error,
                })
        }
        other => Err(PopError::StructuralType {
            path: file_path,
            found: other.kind(),
            expected: "text",
        }),
    }
}

/// Creates `path` and its missing ancestors.
pub(crate) fn create_directory(path: &Path) -> Result<(), PopError> {
    ensure_dir(path).map_err(|error| PopError::DirCreation {
        path: path.to_path_buf(),
        source: error,
    })?;

    log::debug!("create dir: {}", path.display());

    Ok(())
}
