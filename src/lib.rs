//! Materialize nested tree descriptions into real directories and files.
//!
//! ```no_run
//! use pop::Tree;
//!
//! let tree = Tree::new().with(
//!     "a/",
//!     Tree::new().with("b.txt", "hello").with("c/", ()),
//! );
//!
//! let root = pop::generate(&tree)?;
//! assert!(root.join("a/b.txt").is_file());
//! # Ok::<(), pop::PopError>(())
//! ```
mod api;
pub mod config;
pub mod errors;
mod materialize;
pub mod preview;
pub mod tree;
pub mod utils;

pub use api::{generate, generate_at, generate_in};
pub use errors::PopError;
pub use tree::{Content, ContentKind, Tree};
