use std::path::Path;

use crate::error::BundleError;
use crate::preflight;

/// Run only the precondition check and report the result.
pub fn run(source: &Path) -> Result<(), BundleError> {
    println!("Checking source tree at {}...", source.display());
    preflight::check_source(source)?;
    println!("All required paths present.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn passes_on_a_complete_source_tree() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("LICENSE.txt"), "license text").unwrap();
        fs::write(dir.path().join("settings.py"), "SETTINGS = {}").unwrap();
        fs::write(dir.path().join("app.py"), "print('hi')").unwrap();
        fs::write(dir.path().join(".env.example"), "KEY=value").unwrap();
        fs::write(dir.path().join("pyproject.toml"), "[project]").unwrap();
        fs::create_dir(dir.path().join("scripts")).unwrap();
        fs::create_dir(dir.path().join("assets")).unwrap();

        assert!(run(dir.path()).is_ok());
    }

    #[test]
    fn fails_outside_a_project_root() {
        let dir = tempdir().unwrap();

        let result = run(dir.path());

        assert!(matches!(result, Err(BundleError::NotProjectRoot(_))));
    }
}
