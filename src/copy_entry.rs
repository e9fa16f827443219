use std::path::{Path, PathBuf};

/// Resources installed on every run: (source, destination), both relative
/// to the project root.
const DEFAULT_ENTRIES: &[(&str, &str)] = &[(
    "defaults/xml/network-config-file.xml",
    "platforms/android/app/res/xml/network-config-file.xml",
)];

/// One file to install, as a pair of paths relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyEntry {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl CopyEntry {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    pub fn source_in(&self, root: &Path) -> PathBuf {
        root.join(&self.source)
    }

    pub fn destination_in(&self, root: &Path) -> PathBuf {
        root.join(&self.destination)
    }

    /// Directory the destination file lands in. An empty parent (bare file
    /// name under an empty root) means the current directory.
    pub fn destination_dir_in(&self, root: &Path) -> PathBuf {
        let destination = self.destination_in(root);
        match destination.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

pub fn default_entries() -> Vec<CopyEntry> {
    DEFAULT_ENTRIES
        .iter()
        .map(|(source, destination)| CopyEntry::new(*source, *destination))
        .collect()
}
