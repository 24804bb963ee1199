//! Version resolution for the bundle.
//!
//! Priority: explicit flag, then a non-empty interactive answer, then the
//! stored `VERSION` marker in the source root, then the default. The stored
//! value beats the default whether or not prompting happens.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::manifest::VERSION_FILENAME;

/// Version used when nothing else supplies one.
pub const DEFAULT_VERSION: &str = "v1.0.0";

/// Read the stored `VERSION` marker from the source root.
///
/// Returns `None` when the file is absent, unreadable, or blank.
pub fn read_stored(source: &Path) -> Option<String> {
    let content = fs::read_to_string(source.join(VERSION_FILENAME)).ok()?;
    let trimmed = content.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Ask for a version on stdin. `fallback` is shown as the value an empty
/// answer resolves to. Returns the trimmed answer, possibly empty.
pub fn prompt(fallback: &str) -> io::Result<String> {
    print!("Version to package [{}]: ", fallback);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Pick the version from the candidates in priority order. Blank candidates
/// fall through; the result is trimmed and never contains a newline.
pub fn resolve(explicit: Option<&str>, answer: Option<&str>, stored: Option<&str>) -> String {
    for candidate in [explicit, answer, stored].into_iter().flatten() {
        let trimmed = candidate.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    DEFAULT_VERSION.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn explicit_wins_over_everything() {
        let version = resolve(Some("v3.1.4"), Some("v2.0.0"), Some("v1.5.0"));
        assert_eq!(version, "v3.1.4");
    }

    #[test]
    fn answer_wins_over_stored() {
        let version = resolve(None, Some("v2.0.0"), Some("v1.5.0"));
        assert_eq!(version, "v2.0.0");
    }

    #[test]
    fn empty_answer_falls_back_to_stored() {
        let version = resolve(None, Some(""), Some("v1.5.0"));
        assert_eq!(version, "v1.5.0");
    }

    #[test]
    fn stored_beats_default_when_prompting_is_skipped() {
        // The no-prompt branch passes answer = None.
        let version = resolve(None, None, Some("v1.5.0"));
        assert_eq!(version, "v1.5.0");
    }

    #[test]
    fn default_when_nothing_is_supplied() {
        assert_eq!(resolve(None, None, None), DEFAULT_VERSION);
        assert_eq!(resolve(None, Some("   "), None), DEFAULT_VERSION);
    }

    #[test]
    fn result_is_trimmed() {
        let version = resolve(Some("  v2.2.2\n"), None, None);
        assert_eq!(version, "v2.2.2");
    }

    #[test]
    fn read_stored_trims_the_marker_content() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(VERSION_FILENAME), "v0.9.1\n").unwrap();

        assert_eq!(read_stored(dir.path()), Some("v0.9.1".to_string()));
    }

    #[test]
    fn read_stored_returns_none_for_missing_marker() {
        let dir = tempdir().unwrap();

        assert_eq!(read_stored(dir.path()), None);
    }

    #[test]
    fn read_stored_returns_none_for_blank_marker() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(VERSION_FILENAME), "\n  \n").unwrap();

        assert_eq!(read_stored(dir.path()), None);
    }
}
