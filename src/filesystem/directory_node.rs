use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use snafu::{Report, ResultExt, Snafu};
use tracing::{debug, info, warn};

use crate::ext::BestEffortPathExt;
use crate::filesystem::{FileNode, Node, NodeTrait};

/// A directory of the tree, backed by a real directory on disk.
///
/// `children` reflects the disk as it was when this node was scanned, plus
/// whatever was appended through [`DirectoryNode::make_subdirectory`] and
/// [`DirectoryNode::make_file`]. Directories found while scanning are kept
/// shallow: they know their path but not their own entries, which get read
/// only when such a directory is navigated into.
#[derive(Debug, Clone)]
pub struct DirectoryNode {
    name: String,
    path: PathBuf,
    children: Vec<Node>,
}

impl DirectoryNode {
    /// Reads the immediate entries of `path` once, in the order the OS
    /// reports them.
    pub fn scan(path: impl AsRef<Path>) -> Result<Self, DirectoryScanError> {
        let path = path.as_ref();
        debug!("Scanning directory {}", path.best_effort_path_display());

        let children = fs::read_dir(path)
            .context(ReadDirSnafu { path })?
            .map(|entry| {
                let entry_path = entry.context(ReadEntrySnafu { path })?.path();
                let node = if entry_path.is_dir() {
                    Node::Directory(Self::shallow(entry_path))
                } else {
                    Node::File(FileNode::scanned(&entry_path))
                };
                Ok::<_, DirectoryScanError>(node)
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Found {} entries in {}",
            children.len(),
            path.best_effort_path_display()
        );

        Ok(Self {
            name: display_name(path),
            path: path.to_path_buf(),
            children,
        })
    }

    fn shallow(path: PathBuf) -> Self {
        Self {
            name: display_name(&path),
            path,
            children: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn has_child(&self, name: &str) -> bool {
        self.children.iter().any(|child| child.name() == name)
    }

    /// Stable, ascending by each child's size at the time of sorting
    pub fn sort_by_size(&mut self) {
        self.children.sort_by_cached_key(|child| child.size());
    }

    /// Stable, ascending by name, ignoring case
    pub fn sort_by_name(&mut self) {
        self.children
            .sort_by_cached_key(|child| child.name().to_lowercase());
    }

    /// Creates `name` on disk under this directory and appends it.
    ///
    /// Returns false when `name` is not a single path segment, when a child
    /// with that exact name is already listed, or when the directory cannot
    /// be created or read back. Nothing is appended in any of these cases.
    pub fn make_subdirectory(&mut self, name: &str) -> bool {
        if !is_single_segment(name) {
            debug!("'{}' is not a single directory name", name);
            return false;
        }

        if self.has_child(name) {
            debug!("'{}' is already listed in {}", name, self.name);
            return false;
        }

        let target = self.path.join(name);
        if let Err(e) = fs::create_dir(&target) {
            warn!(
                "Failed to create directory {}: {}",
                target.best_effort_path_display(),
                e
            );
            return false;
        }

        match Self::scan(&target) {
            Ok(directory) => {
                info!("Created directory {}", target.best_effort_path_display());
                self.children.push(directory.into());
                true
            }
            Err(e) => {
                warn!("{}", Report::from_error(e));
                false
            }
        }
    }

    /// Appends an in-memory file; nothing is written to disk.
    ///
    /// The existence check looks at `name` relative to the process working
    /// directory, not relative to this directory.
    pub fn make_file(&mut self, name: &str, size: u64) -> bool {
        if Path::new(name).exists() {
            debug!("'{}' already exists in the working directory", name);
            return false;
        }

        self.children.push(FileNode::synthetic(name, size).into());
        true
    }

    /// Sum of the regular files directly under `path`, as found on disk now
    fn disk_size(path: &Path) -> io::Result<u64> {
        let mut total = 0;
        for entry in fs::read_dir(path)? {
            let entry_path = entry?.path();
            // Entries that vanish mid-scan simply do not count
            if let Ok(metadata) = fs::metadata(&entry_path) {
                if metadata.is_file() {
                    total += metadata.len();
                }
            }
        }
        Ok(total)
    }
}

impl NodeTrait for DirectoryNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        match Self::disk_size(&self.path) {
            Ok(size) => size,
            Err(e) => {
                warn!(
                    "Could not compute size of {}, reporting 0: {}",
                    self.path.best_effort_path_display(),
                    e
                );
                0
            }
        }
    }

    fn is_container(&self) -> bool {
        true
    }

    fn list(&self) -> Vec<String> {
        self.children.iter().map(Node::summary_line).collect()
    }

    fn navigate(&self, segment: &str) -> Option<DirectoryNode> {
        let candidate = self.path.join(segment);
        if !candidate.is_dir() {
            debug!(
                "{} is not a directory",
                candidate.best_effort_path_display()
            );
            return None;
        }

        match Self::scan(&candidate) {
            Ok(directory) => Some(directory),
            Err(e) => {
                warn!("{}", Report::from_error(e));
                None
            }
        }
    }
}

/// True for plain names such as `build`, false for `a/b`, `..` or `/abs`
fn is_single_segment(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Last segment of `path`, or the whole path when it has none (`/`, `..`)
pub(super) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[derive(Debug, Snafu)]
pub enum DirectoryScanError {
    #[snafu(display("Failed to read directory {}", path.best_effort_path_display()))]
    ReadDirError { path: PathBuf, source: io::Error },
    #[snafu(display("Failed to read an entry of directory {}", path.best_effort_path_display()))]
    ReadEntryError { path: PathBuf, source: io::Error },
}
