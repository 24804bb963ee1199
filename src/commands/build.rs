//! The full packaging pipeline: preflight, version, staging, assembly,
//! installer patch, inventory, archive.

use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::BundleError;
use crate::installer::{self, PatchOutcome};
use crate::manifest::INSTALL_SCRIPT;
use crate::utils::hash::hash_bytes;
use crate::{archive, inventory, preflight, stage, version};

/// Run the pipeline.
///
/// # Arguments
/// * `source` - The source checkout to package
/// * `output` - The staging directory; the archive lands next to it as `<output>.zip`
/// * `explicit_version` - Version from the command line, wins over every other source
/// * `no_prompt` - Suppress the interactive version prompt
pub fn run(
    source: &Path,
    output: &Path,
    explicit_version: Option<&str>,
    no_prompt: bool,
) -> Result<(), BundleError> {
    println!("Checking source tree at {}...", source.display());
    preflight::check_source(source)?;

    let stored = version::read_stored(source);
    let answer = if explicit_version.is_none() && !no_prompt {
        let fallback = stored.as_deref().unwrap_or(version::DEFAULT_VERSION);
        Some(version::prompt(fallback).map_err(BundleError::PromptFailed)?)
    } else {
        None
    };
    let version = version::resolve(explicit_version, answer.as_deref(), stored.as_deref());
    println!("Packaging version {}", version);

    println!("Recreating staging directory {}...", output.display());
    stage::recreate_dir(output)?;

    println!("Copying bundle contents:");
    stage::assemble(source, output, &version)?;

    if installer::patch_install_script(output)? == PatchOutcome::Patched {
        println!("Rewrote {} for offline installs", INSTALL_SCRIPT);
    }

    println!("Bundle contents:");
    inventory::report(output)?;

    let archive_path = archive_path_for(output);
    print!("Writing {}... ", archive_path.display());
    io::stdout().flush().ok();
    archive::create_archive(output, &archive_path)?;
    println!("done");

    let data = fs::read(&archive_path).map_err(BundleError::ArchiveCreationFailed)?;
    println!();
    println!(
        "Created: {} ({})",
        archive_path.display(),
        inventory::format_size(data.len() as u64)
    );
    println!("SHA-256: {}", hash_bytes(&data));

    Ok(())
}

/// The archive lands next to the staging directory as `<dir name>.zip`.
pub fn archive_path_for(output: &Path) -> PathBuf {
    let mut name = output
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("app-bundle"));
    name.push(".zip");
    output.with_file_name(name)
}
