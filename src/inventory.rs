use std::fs;
use std::io;
use std::path::Path;

use crate::error::BundleError;

/// Human-readable size with threshold units and truncating magnitudes:
/// bytes up to and including 1024, kilobytes up to and including 1 MiB,
/// megabytes beyond.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;

    if bytes <= KB {
        format!("{} B", bytes)
    } else if bytes <= MB {
        format!("{} KB", bytes / KB)
    } else {
        format!("{} MB", bytes / MB)
    }
}

/// Print every entry of the staged tree, indented by depth, files with
/// their sizes and directories with a trailing slash. Entries are sorted
/// by name so the report is deterministic.
pub fn report(dir: &Path) -> Result<(), BundleError> {
    walk(dir, 1).map_err(BundleError::InventoryFailed)
}

fn walk(dir: &Path, depth: usize) -> io::Result<()> {
    let mut entries = fs::read_dir(dir)?.collect::<io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let path = entry.path();
        let name = entry.file_name();
        let indent = "  ".repeat(depth);

        if path.is_dir() {
            println!("{}{}/", indent, name.to_string_lossy());
            walk(&path, depth + 1)?;
        } else {
            let len = entry.metadata()?.len();
            println!("{}{} ({})", indent, name.to_string_lossy(), format_size(len));
        }
    }

    Ok(())
}
