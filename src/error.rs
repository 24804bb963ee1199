use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while assembling a bundle.
#[derive(Debug)]
pub enum BundleError {
    /// The source directory does not look like a project root
    NotProjectRoot(PathBuf),
    /// Required source paths are absent
    MissingInputs(Vec<String>),
    /// Failed to read the version prompt answer
    PromptFailed(io::Error),
    /// Failed to remove a previous staging directory
    StagingRemovalFailed { path: PathBuf, source: io::Error },
    /// Failed to create the staging directory
    StagingCreationFailed { path: PathBuf, source: io::Error },
    /// Failed to copy a manifest entry into the staging directory
    CopyFailed { from: PathBuf, to: PathBuf, source: io::Error },
    /// Failed to write the version file into the bundle
    VersionWriteFailed { path: PathBuf, source: io::Error },
    /// Failed to rewrite the install script
    PatchFailed { path: PathBuf, source: io::Error },
    /// Failed to walk the staged tree
    InventoryFailed(io::Error),
    /// Failed to create the archive
    ArchiveCreationFailed(io::Error),
    /// Archive creation finished but the file is not there
    ArchiveMissing(PathBuf),
}

impl fmt::Display for BundleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BundleError::NotProjectRoot(path) => {
                write!(
                    f,
                    "{} is not a project root (no {} found)",
                    path.display(),
                    crate::manifest::ROOT_MARKER
                )
            }
            BundleError::MissingInputs(paths) => {
                write!(
                    f,
                    "required paths missing from the source tree: {}",
                    paths.join(", ")
                )
            }
            BundleError::PromptFailed(e) => {
                write!(f, "failed to read version prompt answer: {}", e)
            }
            BundleError::StagingRemovalFailed { path, source } => {
                write!(
                    f,
                    "failed to remove previous staging directory {}: {}",
                    path.display(),
                    source
                )
            }
            BundleError::StagingCreationFailed { path, source } => {
                write!(
                    f,
                    "failed to create staging directory {}: {}",
                    path.display(),
                    source
                )
            }
            BundleError::CopyFailed { from, to, source } => {
                write!(
                    f,
                    "failed to copy {} to {}: {}",
                    from.display(),
                    to.display(),
                    source
                )
            }
            BundleError::VersionWriteFailed { path, source } => {
                write!(
                    f,
                    "failed to write version file {}: {}",
                    path.display(),
                    source
                )
            }
            BundleError::PatchFailed { path, source } => {
                write!(
                    f,
                    "failed to patch install script {}: {}",
                    path.display(),
                    source
                )
            }
            BundleError::InventoryFailed(e) => {
                write!(f, "failed to list bundle contents: {}", e)
            }
            BundleError::ArchiveCreationFailed(e) => {
                write!(f, "failed to create archive: {}", e)
            }
            BundleError::ArchiveMissing(path) => {
                write!(
                    f,
                    "archive was not produced at expected location: {}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for BundleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BundleError::PromptFailed(e) => Some(e),
            BundleError::StagingRemovalFailed { source, .. } => Some(source),
            BundleError::StagingCreationFailed { source, .. } => Some(source),
            BundleError::CopyFailed { source, .. } => Some(source),
            BundleError::VersionWriteFailed { source, .. } => Some(source),
            BundleError::PatchFailed { source, .. } => Some(source),
            BundleError::InventoryFailed(e) => Some(e),
            BundleError::ArchiveCreationFailed(e) => Some(e),
            _ => None,
        }
    }
}
