//! Navigation tracker CLI.
//!
//! Provides the `navtrail` binary with subcommands for working with a
//! tracker database offline: `export` writes the stored graph blob as JSON,
//! `clear` empties it, and `sites` reads or replaces the tracked-site list.
//!
//! Operates on the same SQLite blob store the HTTP server uses, so the
//! output of `export` matches the server's `/export` endpoint exactly.

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use navtrail_core::TrackedSites;
use navtrail_storage::{persist, SqliteKv};

/// Navigation tracker tools.
#[derive(Parser)]
#[command(name = "navtrail", about = "Navigation tracker tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Write the stored graph blob as pretty-printed JSON.
    Export {
        /// Path to the tracker database file.
        #[arg(short, long, default_value = "navtrail.db")]
        db: String,

        /// Output file (default: stdout).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Delete the stored graph blob.
    Clear {
        /// Path to the tracker database file.
        #[arg(short, long, default_value = "navtrail.db")]
        db: String,
    },
    /// Show or replace the tracked-site list.
    Sites {
        /// Path to the tracker database file.
        #[arg(short, long, default_value = "navtrail.db")]
        db: String,

        /// Comma-separated site list to store (omit to show the current list).
        #[arg(short, long)]
        set: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Export { db, output } => run_export(&db, output),
        Commands::Clear { db } => run_clear(&db),
        Commands::Sites { db, set } => run_sites(&db, set),
    };
    process::exit(exit_code);
}

/// Execute the export subcommand.
///
/// Returns exit code: 0 = success, 1 = no graph saved yet, 3 = I/O error.
fn run_export(db_path: &str, output: Option<PathBuf>) -> i32 {
    let store = match open_store(db_path) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let text = match persist::export_graph_json(&store) {
        Ok(Some(text)) => text,
        Ok(None) => {
            eprintln!("Error: no graph data saved yet in '{}'", db_path);
            return 1;
        }
        Err(e) => {
            eprintln!("Error: failed to read graph: {}", e);
            return 3;
        }
    };

    match output {
        Some(path) => {
            if let Err(e) = fs::write(&path, text) {
                eprintln!("Error: failed to write '{}': {}", path.display(), e);
                return 3;
            }
            0
        }
        None => {
            println!("{}", text);
            0
        }
    }
}

/// Execute the clear subcommand.
///
/// Returns exit code: 0 = success, 3 = I/O error.
fn run_clear(db_path: &str) -> i32 {
    let mut store = match open_store(db_path) {
        Ok(s) => s,
        Err(code) => return code,
    };

    if let Err(e) = persist::remove_graph(&mut store) {
        eprintln!("Error: failed to clear graph: {}", e);
        return 3;
    }
    0
}

/// Execute the sites subcommand.
///
/// Returns exit code: 0 = success, 1 = empty site list, 3 = I/O error.
fn run_sites(db_path: &str, set: Option<String>) -> i32 {
    let mut store = match open_store(db_path) {
        Ok(s) => s,
        Err(code) => return code,
    };

    match set {
        Some(list) => {
            let sites: Vec<String> = list
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            if sites.is_empty() {
                eprintln!("Error: site list is empty");
                return 1;
            }
            if let Err(e) = persist::save_tracked_sites(&mut store, &TrackedSites(sites)) {
                eprintln!("Error: failed to save site list: {}", e);
                return 3;
            }
            0
        }
        None => match persist::load_tracked_sites(&store) {
            Ok(sites) => {
                for site in sites.as_slice() {
                    println!("{}", site);
                }
                0
            }
            Err(e) => {
                eprintln!("Error: failed to read site list: {}", e);
                3
            }
        },
    }
}

/// Opens the blob store, mapping failure to exit code 3.
fn open_store(db_path: &str) -> Result<SqliteKv, i32> {
    SqliteKv::open(db_path).map_err(|e| {
        eprintln!("Error: failed to open database '{}': {}", db_path, e);
        3
    })
}
