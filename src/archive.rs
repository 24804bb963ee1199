//! Compresses an assembled bundle into a zip archive.
//!
//! The staging directory's contents sit at the archive root; the directory
//! itself is not a nested entry, so unpacking into a fresh folder yields
//! the bundle layout directly.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::BundleError;

/// Create (or replace) the zip archive for an assembled bundle.
///
/// Any archive already at `archive_path` is deleted first. After writing,
/// the archive must exist on disk; if it does not, the error is fatal.
pub fn create_archive(bundle_dir: &Path, archive_path: &Path) -> Result<(), BundleError> {
    if archive_path.exists() {
        fs::remove_file(archive_path).map_err(BundleError::ArchiveCreationFailed)?;
    }

    let file = File::create(archive_path).map_err(BundleError::ArchiveCreationFailed)?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);

    add_dir_contents(&mut writer, options, bundle_dir, "")
        .map_err(BundleError::ArchiveCreationFailed)?;

    writer
        .finish()
        .map_err(|e| BundleError::ArchiveCreationFailed(io::Error::other(e)))?;

    if !archive_path.is_file() {
        return Err(BundleError::ArchiveMissing(archive_path.to_path_buf()));
    }

    Ok(())
}

/// Recursively add directory contents to the archive. Entry names use
/// forward slashes regardless of platform.
fn add_dir_contents(
    writer: &mut ZipWriter<File>,
    options: SimpleFileOptions,
    dir: &Path,
    prefix: &str,
) -> io::Result<()> {
    let mut entries = fs::read_dir(dir)?.collect::<io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let path = entry.path();
        let name = entry.file_name();
        let entry_name = if prefix.is_empty() {
            name.to_string_lossy().into_owned()
        } else {
            format!("{}/{}", prefix, name.to_string_lossy())
        };

        if path.is_dir() {
            writer
                .add_directory(entry_name.as_str(), options)
                .map_err(io::Error::other)?;
            add_dir_contents(writer, options, &path, &entry_name)?;
        } else {
            writer
                .start_file(entry_name.as_str(), options)
                .map_err(io::Error::other)?;
            let mut source = File::open(&path)?;
            io::copy(&mut source, writer)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use zip::ZipArchive;

    fn write_bundle(root: &Path) {
        fs::write(root.join("app.py"), "print('hi')").unwrap();
        fs::write(root.join("VERSION"), "v2.0.0").unwrap();
        fs::create_dir(root.join("scripts")).unwrap();
        fs::write(root.join("scripts/install.bat"), "@echo off\r\n").unwrap();
        fs::create_dir_all(root.join("assets/icons")).unwrap();
        fs::write(root.join("assets/icons/tray.png"), [0u8; 32]).unwrap();
    }

    #[test]
    fn bundle_contents_sit_at_the_archive_root() {
        let bundle = tempdir().unwrap();
        let out = tempdir().unwrap();
        write_bundle(bundle.path());
        let archive_path = out.path().join("bundle.zip");

        create_archive(bundle.path(), &archive_path).unwrap();

        let archive = ZipArchive::new(File::open(&archive_path).unwrap()).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        assert!(names.contains(&"app.py"));
        assert!(names.contains(&"VERSION"));
        assert!(names.contains(&"scripts/install.bat"));
        assert!(names.contains(&"assets/icons/tray.png"));
        assert!(!names.iter().any(|n| n.starts_with("bundle/")));
    }

    #[test]
    fn archived_file_contents_round_trip() {
        let bundle = tempdir().unwrap();
        let out = tempdir().unwrap();
        write_bundle(bundle.path());
        let archive_path = out.path().join("bundle.zip");

        create_archive(bundle.path(), &archive_path).unwrap();

        let mut archive = ZipArchive::new(File::open(&archive_path).unwrap()).unwrap();
        let mut entry = archive.by_name("VERSION").unwrap();
        let mut content = String::new();
        io::Read::read_to_string(&mut entry, &mut content).unwrap();
        assert_eq!(content, "v2.0.0");
    }

    #[test]
    fn prior_archive_is_replaced() {
        let bundle = tempdir().unwrap();
        let out = tempdir().unwrap();
        write_bundle(bundle.path());
        let archive_path = out.path().join("bundle.zip");
        fs::write(&archive_path, "not a zip").unwrap();

        create_archive(bundle.path(), &archive_path).unwrap();

        let archive = ZipArchive::new(File::open(&archive_path).unwrap()).unwrap();
        assert!(archive.len() > 0);
    }

    #[test]
    fn missing_bundle_directory_is_fatal() {
        let out = tempdir().unwrap();
        let archive_path = out.path().join("bundle.zip");

        let result = create_archive(Path::new("/nonexistent/bundle"), &archive_path);

        assert!(matches!(result, Err(BundleError::ArchiveCreationFailed(_))));
    }
}
