//! Rewrites the copied install script for offline use.
//!
//! The upstream script installs the application's own packages from the
//! package index. The bundled copy must install them from the source tree
//! shipped alongside it instead, and must recreate the user data directory
//! when an earlier run removed it. Both edits are line-oriented: a single
//! forward pass where every replacement rule fires at most once and the
//! repair block is inserted only before the first anchor occurrence.

use std::fs;
use std::path::Path;

use crate::error::BundleError;
use crate::manifest::INSTALL_SCRIPT;

struct LineRule {
    /// Exact command line emitted by the upstream script.
    find: &'static str,
    /// Two-line local equivalent: a notice, then the bundled-tree install.
    replace: [&'static str; 2],
}

const LINE_RULES: [LineRule; 3] = [
    LineRule {
        find: "call python -m pip install -U app-engine",
        replace: [
            "echo Installing app-engine from the bundled source tree",
            "call python -m pip install -U \"..\\libs\\app-engine\"",
        ],
    },
    LineRule {
        find: "call python -m pip install -U app-ui",
        replace: [
            "echo Installing app-ui from the bundled source tree",
            "call python -m pip install -U \"..\\libs\\app-ui\"",
        ],
    },
    LineRule {
        find: "call python -m pip install -U app-extras[full]",
        replace: [
            "echo Installing app-extras from the bundled source tree",
            "call python -m pip install -U \"..\\libs\\app-extras[full]\"",
        ],
    },
];

/// Section label the repair block is inserted before.
const ANCHOR_LINE: &str = ":launch_app";

const REPAIR_BLOCK: [&str; 5] = [
    "REM Recreate the user data directory if an earlier run removed it",
    "if not exist \"%USERPROFILE%\\.app-data\" (",
    "    echo Restoring missing data directory %USERPROFILE%\\.app-data",
    "    mkdir \"%USERPROFILE%\\.app-data\"",
    ")",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    Patched,
    /// The bundle has no install script. Not an error: the step is skipped.
    ScriptAbsent,
}

/// Patch the install script inside an assembled bundle, in place.
///
/// The rewritten file keeps the original's line endings (cmd.exe scripts are
/// CRLF) and is written without a byte-order mark; a leading BOM in the
/// source is dropped.
pub fn patch_install_script(bundle_dir: &Path) -> Result<PatchOutcome, BundleError> {
    let path = bundle_dir.join(INSTALL_SCRIPT);
    if !path.is_file() {
        return Ok(PatchOutcome::ScriptAbsent);
    }

    let patch_err = |source| BundleError::PatchFailed {
        path: path.clone(),
        source,
    };

    let content = fs::read_to_string(&path).map_err(patch_err)?;
    let patched = rewrite(&content);
    fs::write(&path, patched).map_err(patch_err)?;

    Ok(PatchOutcome::Patched)
}

/// One forward pass over the lines with a consumed flag per rule.
fn rewrite(content: &str) -> String {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let eol = if content.contains("\r\n") { "\r\n" } else { "\n" };
    let ends_with_newline = content.ends_with('\n');

    let mut consumed = [false; LINE_RULES.len()];
    let mut inserted = false;
    let mut out: Vec<&str> = Vec::new();

    for line in content.lines() {
        if !inserted && line == ANCHOR_LINE {
            out.extend(REPAIR_BLOCK);
            inserted = true;
            out.push(line);
            continue;
        }

        let mut replaced = false;
        for (i, rule) in LINE_RULES.iter().enumerate() {
            if !consumed[i] && line == rule.find {
                consumed[i] = true;
                out.extend(rule.replace);
                replaced = true;
                break;
            }
        }

        if !replaced {
            out.push(line);
        }
    }

    let mut result = out.join(eol);
    if ends_with_newline {
        result.push_str(eol);
    }
    result
}
