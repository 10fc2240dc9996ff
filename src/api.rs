use crate::{
    errors::PopError,
    materialize::{create_directory, materialize_tree},
    tree::Tree,
    utils::allocate_temp_dir,
};
use std::path::{Path, PathBuf};

/// Materializes `tree` into a fresh, uniquely named directory inside the system
/// temporary directory and returns its path.
///
/// The directory is not removed afterwards.
///
/// # Errors
///
/// Returns a [`PopError`] if:
///
/// - The root directory cannot be allocated.
/// - Any entry of `tree` fails to materialize (see [`generate_at`]). The error is
///   wrapped in [`PopError::Incomplete`], which names the allocated root so the
///   partial tree can be inspected.
pub fn generate(tree: &Tree) -> Result<PathBuf, PopError> {
    generate_in(std::env::temp_dir(), tree)
}

/// Like [`generate`], but allocates the root directory inside `parent`.
pub fn generate_in(parent: impl AsRef<Path>, tree: &Tree) -> Result<PathBuf, PopError> {
    let parent = parent.as_ref();

    let root = allocate_temp_dir(parent).map_err(|error| PopError::RootCreation {
        parent: parent.to_path_buf(),
        source: error,
    })?;

    log::debug!("allocated root directory: {}", root.display());

    match generate_at(&root, tree) {
        Ok(()) => Ok(root),
        Err(error) => Err(PopError::Incomplete {
            root,
            source: Box::new(error),
        }),
    }
}

/// Materializes `tree` beneath `root`, creating `root` and its missing ancestors first.
///
/// Names ending with a path separator become directories, every other name becomes
/// a file. Directories are created idempotently; files must not exist yet.
///
/// # Errors
///
/// Returns a [`PopError`] if:
///
/// - `root` is empty.
/// - A directory cannot be created.
/// - A file already exists, cannot be created, or cannot be written.
/// - The content of an entry does not match its name.
///
/// The first error stops the walk. Entries created before it stay on disk.
pub fn generate_at(root: impl AsRef<Path>, tree: &Tree) -> Result<(), PopError> {
    let root = root.as_ref();

    if root.as_os_str().is_empty() {
        return Err(PopError::InvalidArgument);
    }

    create_directory(root)?;

    materialize_tree(root, tree).inspect_err(|error| {
        log::warn!(
            "generation under '{}' stopped, partial tree left in place: {}",
            root.display(),
            error
        );
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, io::ErrorKind};
    use walkdir::WalkDir;

    fn count_entries(root: &Path) -> usize {
        WalkDir::new(root).min_depth(1).into_iter().count()
    }

    #[test]
    fn test_generate_at_well_formed_tree() {
        let root = tempfile::tempdir().unwrap();
        let tree = Tree::new()
            .with("x.txt", ())
            .with("readme.md", "# fixture\n")
            .with(
                "src/",
                Tree::new()
                    .with("main.rs", "fn main() {}\n")
                    .with("empty/", ())
                    .with("nested/", Tree::new().with("deep.txt", "deep")),
            );

        generate_at(root.path(), &tree).unwrap();

        assert_eq!(count_entries(root.path()), 7);
        assert_eq!(fs::metadata(root.path().join("x.txt")).unwrap().len(), 0);
        assert_eq!(
            fs::read_to_string(root.path().join("readme.md")).unwrap(),
            "# fixture\n"
        );
        assert_eq!(
            fs::read_to_string(root.path().join("src/main.rs")).unwrap(),
            "fn main() {}\n"
        );
        assert!(root.path().join("src/empty").is_dir());
        assert_eq!(
            fs::read_to_string(root.path().join("src/nested/deep.txt")).unwrap(),
            "deep"
        );
    }

    #[test]
    fn test_generate_at_creates_missing_root() {
        let parent = tempfile::tempdir().unwrap();
        let root = parent.path().join("a/b/root");

        generate_at(&root, &Tree::new().with("f.txt", "f")).unwrap();

        assert!(root.join("f.txt").is_file());
    }

    #[test]
    fn test_generate_at_empty_root_is_invalid() {
        let error = generate_at("", &Tree::new().with("f.txt", "f")).unwrap_err();

        assert!(matches!(error, PopError::InvalidArgument));
        assert!(error.path().is_none());
        assert_eq!(error.to_string(), "root directory path cannot be empty");
    }

    #[test]
    fn test_generate_at_twice_fails_on_existing_file() {
        let root = tempfile::tempdir().unwrap();
        let tree = Tree::new()
            .with("dir/", Tree::new().with("inner.txt", "inner"))
            .with("a.txt", "a");

        generate_at(root.path(), &tree).unwrap();

        let error = generate_at(root.path(), &tree).unwrap_err();

        match error {
            PopError::FileCreation { path, source } => {
                assert_eq!(path, root.path().join("dir/inner.txt"));
                assert_eq!(source.kind(), ErrorKind::AlreadyExists);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(fs::read_to_string(root.path().join("a.txt")).unwrap(), "a");
    }

    #[test]
    fn test_generate_at_leaves_earlier_siblings_in_place() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("taken.txt"), "original").unwrap();
        let tree = Tree::new()
            .with("before.txt", "before")
            .with("taken.txt", "new")
            .with("after.txt", "after");

        let error = generate_at(root.path(), &tree).unwrap_err();

        assert!(matches!(error, PopError::FileCreation { .. }));
        assert!(root.path().join("before.txt").is_file());
        assert!(!root.path().join("after.txt").exists());
        assert_eq!(
            fs::read_to_string(root.path().join("taken.txt")).unwrap(),
            "original"
        );
    }

    #[test]
    fn test_generate_example_layout() {
        let parent = tempfile::tempdir().unwrap();
        let tree = Tree::new().with(
            "a/",
            Tree::new().with("b.txt", "hello").with("c/", ()),
        );

        let root = generate_in(parent.path(), &tree).unwrap();

        assert!(root.starts_with(parent.path()));
        assert_eq!(fs::read(root.join("a/b.txt")).unwrap(), b"hello");
        assert!(root.join("a/c").is_dir());
        assert_eq!(fs::read_dir(root.join("a/c")).unwrap().count(), 0);
        assert_eq!(count_entries(&root), 3);
    }

    #[test]
    fn test_generate_empty_tree() {
        let root = generate(&Tree::new()).unwrap();

        assert!(root.is_dir());
        assert_eq!(count_entries(&root), 0);

        fs::remove_dir_all(root).unwrap();
    }

    #[test]
    fn test_generate_single_empty_file() {
        let root = generate(&Tree::new().with("x.txt", ())).unwrap();

        assert_eq!(fs::metadata(root.join("x.txt")).unwrap().len(), 0);
        assert_eq!(count_entries(&root), 1);

        fs::remove_dir_all(root).unwrap();
    }

    #[test]
    fn test_generate_in_failure_names_partial_root() {
        let parent = tempfile::tempdir().unwrap();
        let tree = Tree::new()
            .with("kept.txt", "kept")
            .with("bad/", "not a tree");

        let error = generate_in(parent.path(), &tree).unwrap_err();

        match error {
            PopError::Incomplete { root, source } => {
                assert!(root.starts_with(parent.path()));
                assert_eq!(fs::read_to_string(root.join("kept.txt")).unwrap(), "kept");
                assert!(matches!(*source, PopError::StructuralType { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_generate_in_missing_parent_fails() {
        let parent = tempfile::tempdir().unwrap();
        let missing = parent.path().join("missing");

        let error = generate_in(&missing, &Tree::new()).unwrap_err();

        match error {
            PopError::RootCreation { parent, .. } => assert_eq!(parent, missing),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
