//! Simplified tree view over a real filesystem.
//!
//! A [`DirectoryNode`] is materialized from disk once, when it is scanned,
//! and afterwards only changes through its own operations. Sizes are the
//! exception: a directory's size is always recomputed from disk, so a listing
//! can show sizes that disagree with the cached children.

mod directory_node;
mod file_node;
mod node;

pub use directory_node::{DirectoryNode, DirectoryScanError};
pub use file_node::FileNode;
pub use node::{Node, NodeKind, NodeTrait};
