use std::path::{Component, Path, PathBuf};

/// Renders a path for log and error messages.
///
/// Existing paths are shown canonicalized. Paths that cannot be canonicalized
/// (typically because they no longer exist, or never did) are made absolute
/// against the working directory and lexically normalized instead.
pub trait BestEffortPathExt {
    fn best_effort_path_display(&self) -> String;
}

impl BestEffortPathExt for Path {
    fn best_effort_path_display(&self) -> String {
        if let Ok(canonical) = self.canonicalize() {
            return canonical.display().to_string();
        }

        let absolute = std::path::absolute(self).unwrap_or_else(|_| self.to_path_buf());
        lexically_normalize(&absolute).display().to_string()
    }
}

impl BestEffortPathExt for PathBuf {
    fn best_effort_path_display(&self) -> String {
        self.as_path().best_effort_path_display()
    }
}

fn lexically_normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Never pop past the root or a prefix
                if matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                ) {
                    normalized.pop();
                }
            }
            other => normalized.push(other),
        }
    }

    normalized
}
