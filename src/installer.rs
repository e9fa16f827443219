use crate::copy_entry::CopyEntry;
use log::{debug, info};
use std::fs;
use std::io;
use std::path::Path;

/// What happened to a single entry during an install pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Copied { bytes: u64 },
    SourceMissing,
    DestinationDirMissing,
}

/// Copies `entry` if its source is a file and the destination directory
/// already exists. Missing preconditions are reported, never created.
pub fn install_entry(root: &Path, entry: &CopyEntry) -> io::Result<InstallOutcome> {
    let source = entry.source_in(root);
    if !source.is_file() {
        debug!("Skipping '{}': source not found", source.display());
        return Ok(InstallOutcome::SourceMissing);
    }

    let destination_dir = entry.destination_dir_in(root);
    if !destination_dir.is_dir() {
        debug!(
            "Skipping '{}': destination directory '{}' does not exist",
            source.display(),
            destination_dir.display()
        );
        return Ok(InstallOutcome::DestinationDirMissing);
    }

    let destination = entry.destination_in(root);
    let bytes = fs::copy(&source, &destination)?;
    info!(
        "Copied '{}' to '{}' ({} bytes)",
        source.display(),
        destination.display(),
        bytes
    );
    Ok(InstallOutcome::Copied { bytes })
}

/// Installs every entry in order, stopping at the first failed copy.
pub fn install(root: &Path, entries: &[CopyEntry]) -> io::Result<()> {
    for entry in entries {
        install_entry(root, entry)?;
    }
    Ok(())
}
