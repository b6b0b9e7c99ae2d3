use std::path::{Path, PathBuf};

/// Absolute form of a path for log and error messages. Falls back to the
/// path as given when it cannot be canonicalized (for example because it
/// does not exist).
pub fn best_effort_path_display(path: &Path) -> String {
    path.canonicalize()
        .or_else(|_| std::env::current_dir().map(|current_dir| current_dir.join(path)))
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

pub trait BestEffortPathExt {
    fn best_effort_path_display(&self) -> String;
}

impl BestEffortPathExt for Path {
    fn best_effort_path_display(&self) -> String {
        best_effort_path_display(self)
    }
}

impl BestEffortPathExt for PathBuf {
    fn best_effort_path_display(&self) -> String {
        best_effort_path_display(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn existing_path_is_canonicalized() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let expected = dir.path().canonicalize().unwrap().display().to_string();
        assert_eq!(dir.path().best_effort_path_display(), expected);
    }

    #[test]
    fn missing_relative_path_is_joined_to_current_dir() {
        let shown = Path::new("surely/missing.yaml").best_effort_path_display();
        assert!(Path::new(&shown).is_absolute());
        assert!(shown.ends_with("missing.yaml"));
    }
}
