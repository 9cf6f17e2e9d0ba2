use derive_more::{Display, From, IsVariant};

use crate::filesystem::{DirectoryNode, FileNode};

pub trait NodeTrait {
    fn name(&self) -> &str;
    /// Size in bytes. Never fails; unreadable entries count as empty.
    fn size(&self) -> u64;
    fn is_container(&self) -> bool;
    /// Lines describing this node's immediate entries
    fn list(&self) -> Vec<String>;
    /// Returns the freshly scanned directory `segment` resolves to, if any
    fn navigate(&self, segment: &str) -> Option<DirectoryNode>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum NodeKind {
    #[display("Directory")]
    Directory,
    #[display("File")]
    File,
}

#[derive(Debug, Clone, From, IsVariant)]
pub enum Node {
    File(FileNode),
    Directory(DirectoryNode),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        if self.is_container() {
            NodeKind::Directory
        } else {
            NodeKind::File
        }
    }

    /// The line a parent directory prints for this node
    pub fn summary_line(&self) -> String {
        format!("{}: {} {}", self.kind(), self.name(), self.size())
    }
}

impl NodeTrait for Node {
    fn name(&self) -> &str {
        match self {
            Node::File(file) => file.name(),
            Node::Directory(directory) => directory.name(),
        }
    }

    fn size(&self) -> u64 {
        match self {
            Node::File(file) => file.size(),
            Node::Directory(directory) => directory.size(),
        }
    }

    fn is_container(&self) -> bool {
        match self {
            Node::File(file) => file.is_container(),
            Node::Directory(directory) => directory.is_container(),
        }
    }

    fn list(&self) -> Vec<String> {
        match self {
            Node::File(file) => file.list(),
            Node::Directory(directory) => directory.list(),
        }
    }

    fn navigate(&self, segment: &str) -> Option<DirectoryNode> {
        match self {
            Node::File(file) => file.navigate(segment),
            Node::Directory(directory) => directory.navigate(segment),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn kind_displays_as_listing_tag() {
        assert_eq!(NodeKind::Directory.to_string(), "Directory");
        assert_eq!(NodeKind::File.to_string(), "File");
    }

    #[test]
    fn summary_line_for_synthetic_file() {
        let node = Node::from(FileNode::synthetic("notes.txt", 42));

        assert!(node.is_file());
        assert!(!node.is_container());
        assert_eq!(node.summary_line(), "File: notes.txt 42");
    }

    #[test]
    fn summary_line_for_directory_uses_live_size() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let directory =
            DirectoryNode::scan(temp_dir.path()).expect("Failed to scan temp directory");
        let node = Node::from(directory);

        std::fs::write(temp_dir.path().join("late.bin"), [0u8; 7])
            .expect("Failed to write file");

        assert!(node.is_directory());
        assert!(node.is_container());
        assert!(node.summary_line().ends_with(" 7"));
        assert!(node.summary_line().starts_with("Directory: "));
    }

    #[test]
    fn kind_follows_is_container() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let directory = Node::from(
            DirectoryNode::scan(temp_dir.path()).expect("Failed to scan temp directory"),
        );
        let file = Node::from(FileNode::synthetic("f", 1));

        assert!(directory.is_container());
        assert_eq!(directory.kind(), NodeKind::Directory);
        assert!(!file.is_container());
        assert_eq!(file.kind(), NodeKind::File);
    }

    #[test]
    fn file_variant_never_navigates() {
        let node = Node::from(FileNode::synthetic("a", 1));

        assert!(node.navigate("anything").is_none());
    }
}
