mod copy_entry;
mod installer;

use crate::copy_entry::{CopyEntry, default_entries};
use crate::installer::install;
use clap::{Parser, Subcommand};
use log::{error, info};
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Project root the entry paths are resolved against (defaults to the
    /// current directory)
    root: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the entries that would be installed
    List,
}

fn run_install(root: &Path) -> io::Result<()> {
    let entries = default_entries();
    info!(
        "Installing {} resource(s) under '{}'",
        entries.len(),
        root.display()
    );
    install(root, &entries)
}

fn list_entries(out: &mut impl Write, entries: &[CopyEntry]) -> io::Result<()> {
    if entries.is_empty() {
        writeln!(out, "No entries defined.")?;
    } else {
        for (i, entry) in entries.iter().enumerate() {
            writeln!(
                out,
                "{}: {} -> {}",
                i,
                entry.source.display(),
                entry.destination.display()
            )?;
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Some(Commands::List) => list_entries(&mut io::stdout().lock(), &default_entries()),
        None => {
            let root = cli.root.clone().unwrap_or_else(|| PathBuf::from("."));
            run_install(&root)
        }
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}
