//! The fixed copy manifest for the bundle.
//!
//! The set of files that make up a bundle is part of the tool, not
//! configuration: every entry here is copied from the source checkout into
//! the staging directory, and the preflight check requires every source
//! path to exist.

/// File whose presence marks a directory as a source checkout root.
pub const ROOT_MARKER: &str = "pyproject.toml";

/// Filename the resolved version is written to inside the bundle.
pub const VERSION_FILENAME: &str = "VERSION";

/// Install script rewritten for offline use after copying (bundle-relative).
pub const INSTALL_SCRIPT: &str = "scripts/install.bat";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A single file.
    File,
    /// A directory copied recursively.
    Tree,
}

/// One source-to-destination copy instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Path relative to the source checkout root.
    pub source: &'static str,
    /// Path relative to the staging directory.
    pub dest: &'static str,
    pub kind: EntryKind,
}

/// Everything that goes into a bundle. The environment template is the one
/// entry renamed on copy: it ships as the live dot-file.
pub const MANIFEST: &[ManifestEntry] = &[
    ManifestEntry {
        source: "LICENSE.txt",
        dest: "LICENSE.txt",
        kind: EntryKind::File,
    },
    ManifestEntry {
        source: "settings.py",
        dest: "settings.py",
        kind: EntryKind::File,
    },
    ManifestEntry {
        source: "app.py",
        dest: "app.py",
        kind: EntryKind::File,
    },
    ManifestEntry {
        source: ".env.example",
        dest: ".env",
        kind: EntryKind::File,
    },
    ManifestEntry {
        source: "pyproject.toml",
        dest: "pyproject.toml",
        kind: EntryKind::File,
    },
    ManifestEntry {
        source: "scripts",
        dest: "scripts",
        kind: EntryKind::Tree,
    },
    ManifestEntry {
        source: "assets",
        dest: "assets",
        kind: EntryKind::Tree,
    },
];
