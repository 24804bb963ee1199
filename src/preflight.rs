use std::path::Path;

use crate::error::BundleError;
use crate::manifest::{EntryKind, MANIFEST, ROOT_MARKER};

/// Check that `source` is a project root and that every manifest source
/// path exists. Prints one report line per path.
///
/// Returns `MissingInputs` listing every absent path, or `NotProjectRoot`
/// when the root marker itself is missing.
pub fn check_source(source: &Path) -> Result<(), BundleError> {
    if !source.join(ROOT_MARKER).is_file() {
        return Err(BundleError::NotProjectRoot(source.to_path_buf()));
    }

    let mut missing = Vec::new();

    for entry in MANIFEST {
        let path = source.join(entry.source);
        let present = match entry.kind {
            EntryKind::File => path.is_file(),
            EntryKind::Tree => path.is_dir(),
        };

        if present {
            println!("  - {} ok", entry.source);
        } else {
            println!("  - {} MISSING", entry.source);
            missing.push(entry.source.to_string());
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(BundleError::MissingInputs(missing))
    }
}
