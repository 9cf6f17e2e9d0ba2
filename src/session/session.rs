use tracing::{debug, info};

use crate::ext::BestEffortPathExt;
use crate::filesystem::{DirectoryNode, NodeTrait};
use crate::session::{RandomSizeGenerator, SizeGenerator};

/// Where the user currently is in the tree.
///
/// Navigation only goes forward: a successful `cd` replaces the current
/// directory with a freshly scanned one and the previous node is dropped.
#[derive(Debug)]
pub struct Session<G: SizeGenerator = RandomSizeGenerator> {
    current: DirectoryNode,
    size_generator: G,
}

impl Session {
    pub fn new(root: DirectoryNode) -> Self {
        Self::with_size_generator(root, RandomSizeGenerator)
    }
}

impl<G: SizeGenerator> Session<G> {
    pub fn with_size_generator(root: DirectoryNode, size_generator: G) -> Self {
        debug!("Starting session in {}", root.path().best_effort_path_display());
        Self {
            current: root,
            size_generator,
        }
    }

    #[cfg(test)]
    pub fn current(&self) -> &DirectoryNode {
        &self.current
    }

    pub fn list(&self) -> Vec<String> {
        self.current.list()
    }

    /// Leaves the session untouched and returns false when `segment` is not
    /// a readable directory under the current one.
    pub fn change_directory(&mut self, segment: &str) -> bool {
        match self.current.navigate(segment) {
            Some(next) => {
                info!("Changed directory to {}", next.path().best_effort_path_display());
                self.current = next;
                true
            }
            None => false,
        }
    }

    pub fn sort_by_size(&mut self) -> Vec<String> {
        self.current.sort_by_size();
        self.current.list()
    }

    pub fn sort_by_name(&mut self) -> Vec<String> {
        self.current.sort_by_name();
        self.current.list()
    }

    pub fn make_directory(&mut self, name: &str) -> String {
        if self.current.make_subdirectory(name) {
            format!("Directory: {name} was created")
        } else {
            format!("Directory: {name} already exists")
        }
    }

    pub fn make_file(&mut self, name: &str) -> String {
        let size = self.size_generator.next_size();
        debug!("Drew size {} for '{}'", size, name);

        if self.current.make_file(name, size) {
            format!("File: {name} was created")
        } else {
            format!("File: {name} already exists")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use std::fs;
    use tempfile::TempDir;

    struct FixedSizes(Vec<u64>);

    impl SizeGenerator for FixedSizes {
        fn next_size(&mut self) -> u64 {
            self.0.remove(0)
        }
    }

    #[fixture]
    fn workspace() -> TempDir {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp_dir.path().join("zeta.txt"), [b'z'; 20]).expect("Failed to write file");
        fs::write(temp_dir.path().join("Alpha.txt"), [b'a'; 2]).expect("Failed to write file");
        fs::create_dir(temp_dir.path().join("nested")).expect("Failed to create dir");
        fs::write(temp_dir.path().join("nested").join("deep.txt"), [b'd'; 4])
            .expect("Failed to write file");
        temp_dir
    }

    fn session_in(dir: &TempDir, sizes: Vec<u64>) -> Session<FixedSizes> {
        let root = DirectoryNode::scan(dir.path()).expect("Failed to scan");
        Session::with_size_generator(root, FixedSizes(sizes))
    }

    #[rstest]
    fn change_directory_replaces_current(workspace: TempDir) {
        let mut session = session_in(&workspace, vec![]);

        assert!(session.change_directory("nested"));

        assert_eq!(session.current().name(), "nested");
        assert_eq!(session.list(), vec!["File: deep.txt 4".to_string()]);
    }

    #[rstest]
    #[case("does_not_exist")]
    #[case("zeta.txt")]
    fn failed_change_directory_leaves_session_alone(
        workspace: TempDir,
        #[case] segment: &str,
    ) {
        let mut session = session_in(&workspace, vec![]);
        let before = session.list();

        assert!(!session.change_directory(segment));

        assert_eq!(session.current().path(), workspace.path());
        assert_eq!(session.list(), before);
    }

    #[rstest]
    fn sort_by_name_returns_sorted_listing(workspace: TempDir) {
        let mut session = session_in(&workspace, vec![]);

        let lines = session.sort_by_name();

        assert_eq!(
            lines,
            vec![
                "File: Alpha.txt 2".to_string(),
                "Directory: nested 4".to_string(),
                "File: zeta.txt 20".to_string(),
            ]
        );
        assert_eq!(session.list(), lines);
    }

    #[rstest]
    fn sort_by_size_returns_sorted_listing(workspace: TempDir) {
        let mut session = session_in(&workspace, vec![]);

        let lines = session.sort_by_size();

        assert_eq!(
            lines,
            vec![
                "File: Alpha.txt 2".to_string(),
                "Directory: nested 4".to_string(),
                "File: zeta.txt 20".to_string(),
            ]
        );
    }

    #[rstest]
    fn make_directory_reports_status(workspace: TempDir) {
        let mut session = session_in(&workspace, vec![]);

        assert_eq!(session.make_directory("fresh"), "Directory: fresh was created");
        assert_eq!(session.make_directory("fresh"), "Directory: fresh already exists");
        assert_eq!(session.make_directory("nested"), "Directory: nested already exists");
        assert!(workspace.path().join("fresh").is_dir());
    }

    #[rstest]
    fn make_file_uses_injected_size(workspace: TempDir) {
        let mut session = session_in(&workspace, vec![77]);

        assert_eq!(
            session.make_file("session_generated_file.txt"),
            "File: session_generated_file.txt was created"
        );

        assert!(session.list().contains(&"File: session_generated_file.txt 77".to_string()));
    }

    #[test]
    fn make_file_with_random_size_lands_in_range() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = DirectoryNode::scan(temp_dir.path()).expect("Failed to scan");
        let mut session = Session::new(root);

        session.make_file("random_size_session_file.txt");

        let size = session.current().children()[0].size();
        assert!((1..=1024).contains(&size));
    }

    #[test]
    fn make_file_reports_existing_working_directory_entry() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let mut session = session_in(&temp_dir, vec![5]);

        // The crate manifest always sits in the test working directory
        assert_eq!(session.make_file("Cargo.toml"), "File: Cargo.toml already exists");
        assert!(session.list().is_empty());
    }
}
