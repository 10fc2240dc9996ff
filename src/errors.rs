use crate::tree::ContentKind;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum PopError {
    #[error("root directory path cannot be empty")]
    #[diagnostic(
        code(pop::invalid_argument),
        help("Pass a non-empty root path, or use `generate` to allocate one.")
    )]
    InvalidArgument,

    #[error("cannot generate root directory under '{}'", .parent.display())]
    #[diagnostic(
        code(pop::root_creation),
        help("Check that the temporary directory exists and is writable.")
    )]
    RootCreation {
        parent: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot create directory '{}'", .path.display())]
    #[diagnostic(
        code(pop::dir_creation),
        help("Check file permissions, or that no path component is a regular file.")
    )]
    DirCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot create file '{}'", .path.display())]
    #[diagnostic(
        code(pop::file_creation),
        help("Files are never overwritten. Look for a duplicate entry name.")
    )]
    FileCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write file '{}'", .path.display())]
    #[diagnostic(
        code(pop::file_write),
        help("Check disk space and file permissions.")
    )]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("content of '{}' is {found} instead of {expected}", .path.display())]
    #[diagnostic(
        code(pop::structural_type),
        help("Names ending with a separator take a nested tree, other names take text.")
    )]
    StructuralType {
        path: PathBuf,
        found: ContentKind,
        expected: &'static str,
    },

    #[error("entry '{name}' does not lie beneath '{}'", .parent.display())]
    #[diagnostic(
        code(pop::invalid_entry_name),
        help("Entry names must be relative and must not contain `..`.")
    )]
    InvalidEntryName { parent: PathBuf, name: String },

    #[error("generation under '{}' stopped, partial tree left in place", .root.display())]
    #[diagnostic(code(pop::incomplete))]
    Incomplete {
        root: PathBuf,
        #[source]
        source: Box<PopError>,
    },
}

impl PopError {
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::InvalidArgument => None,
            Self::RootCreation { parent, .. } | Self::InvalidEntryName { parent, .. } => {
                Some(parent)
            }
            Self::Incomplete { root, .. } => Some(root),
            Self::DirCreation { path, .. }
            | Self::FileCreation { path, .. }
            | Self::FileWrite { path, .. }
            | Self::StructuralType { path, .. } => Some(path),
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum FileFormat {
    #[error("toml")]
    Toml,
}

#[derive(Debug, Error, Diagnostic)]
pub enum FixtureError {
    #[error("I/O error reading fixture '{}'", .path.display())]
    #[diagnostic(
        code(pop::fixture::io),
        help("Check that the fixture file exists and is readable.")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parsing error: {file_format} on '{}'", .path.display())]
    #[diagnostic(code(pop::fixture::parse), help("Review fixture file"))]
    Parse {
        file_format: FileFormat,
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
