use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use super::directory_node::display_name;
use crate::ext::BestEffortPathExt;
use crate::filesystem::{DirectoryNode, NodeKind, NodeTrait};

/// A leaf of the tree.
///
/// Scanned files remember their on-disk size as it was when scanned.
/// Synthetic files only exist in memory and have no path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    name: String,
    // Only shown through Debug outside of tests
    #[allow(dead_code)]
    path: Option<PathBuf>,
    size: u64,
}

impl FileNode {
    pub fn scanned(path: &Path) -> Self {
        let size = match fs::metadata(path) {
            Ok(metadata) => metadata.len(),
            Err(e) => {
                warn!(
                    "Could not read size of {}, treating it as empty: {}",
                    path.best_effort_path_display(),
                    e
                );
                0
            }
        };

        Self {
            name: display_name(path),
            path: Some(path.to_path_buf()),
            size,
        }
    }

    pub fn synthetic(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            path: None,
            size,
        }
    }

    #[cfg(test)]
    pub fn is_synthetic(&self) -> bool {
        self.path.is_none()
    }
}

impl NodeTrait for FileNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn is_container(&self) -> bool {
        false
    }

    fn list(&self) -> Vec<String> {
        vec![format!("{}: {} {}", NodeKind::File, self.name, self.size)]
    }

    fn navigate(&self, _segment: &str) -> Option<DirectoryNode> {
        None
    }
}
