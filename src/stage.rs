use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;

use crate::error::BundleError;
use crate::manifest::{EntryKind, MANIFEST, VERSION_FILENAME};

/// Remove any previous staging directory and create it fresh.
///
/// Removal is retried once after a short delay; a handle closed just before
/// the run can keep the directory locked briefly.
pub fn recreate_dir(dir: &Path) -> Result<(), BundleError> {
    if dir.exists() {
        if fs::remove_dir_all(dir).is_err() {
            thread::sleep(Duration::from_millis(500));
            fs::remove_dir_all(dir).map_err(|e| BundleError::StagingRemovalFailed {
                path: dir.to_path_buf(),
                source: e,
            })?;
        }
    }

    fs::create_dir_all(dir).map_err(|e| BundleError::StagingCreationFailed {
        path: dir.to_path_buf(),
        source: e,
    })
}

/// Copy every manifest entry from `source` into `dest` and write the
/// resolved version to the bundle's version file.
///
/// Directory entries are copied recursively. Prints one confirmation line
/// per entry. Any copy failure is fatal; a partially populated staging
/// directory is removed wholesale by the next run.
pub fn assemble(source: &Path, dest: &Path, version: &str) -> Result<(), BundleError> {
    for entry in MANIFEST {
        let from = source.join(entry.source);
        let to = dest.join(entry.dest);

        match entry.kind {
            EntryKind::File => {
                fs::copy(&from, &to).map_err(|e| BundleError::CopyFailed {
                    from: from.clone(),
                    to: to.clone(),
                    source: e,
                })?;
            }
            EntryKind::Tree => copy_tree(&from, &to)?,
        }

        if entry.source == entry.dest {
            println!("  - {}", entry.source);
        } else {
            println!("  - {} -> {}", entry.source, entry.dest);
        }
    }

    // Exact bytes: no trailing newline, no BOM.
    let version_path = dest.join(VERSION_FILENAME);
    fs::write(&version_path, version.as_bytes()).map_err(|e| BundleError::VersionWriteFailed {
        path: version_path,
        source: e,
    })
}

/// Recursively copy a directory tree.
fn copy_tree(from: &Path, to: &Path) -> Result<(), BundleError> {
    let copy_err = |source| BundleError::CopyFailed {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    fs::create_dir_all(to).map_err(copy_err)?;

    for entry in fs::read_dir(from).map_err(copy_err)? {
        let entry = entry.map_err(copy_err)?;
        let path = entry.path();
        let target = to.join(entry.file_name());

        if path.is_dir() {
            copy_tree(&path, &target)?;
        } else {
            fs::copy(&path, &target).map_err(|e| BundleError::CopyFailed {
                from: path.clone(),
                to: target.clone(),
                source: e,
            })?;
        }
    }

    Ok(())
}
