use crate::{
    errors::{FileFormat, FixtureError},
    tree::Tree,
};
use std::{fs, path::Path};

/// A [`Tree`] loaded from a TOML fixture file.
///
/// The top-level table is the tree itself: strings are file contents, tables are
/// directory contents.
///
/// ```toml
/// "x.txt" = ""
/// "a/" = { "b.txt" = "hello", "c/" = {} }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture(pub Tree);
impl Fixture {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FixtureError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|error| FixtureError::Io {
            path: path.to_path_buf(),
            source: error,
        })?;

        Self::parse(&content, path)
    }

    /// Parses fixture text; `origin` only names the source in errors.
    pub fn parse(content: &str, origin: &Path) -> Result<Self, FixtureError> {
        let tree: Tree = toml::from_str(content).map_err(|error| FixtureError::Parse {
            file_format: FileFormat::Toml,
            path: origin.to_path_buf(),
            source: error,
        })?;

        log::debug!(
            "loaded fixture from '{}' with {} top-level entries",
            origin.display(),
            tree.len()
        );

        Ok(Self(tree))
    }

    pub fn tree(&self) -> &Tree {
        &self.0
    }
}
