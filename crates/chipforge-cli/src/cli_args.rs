//! CLI argument definitions for the chipforge command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined
//! here, keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

use crate::catalog;

/// Chipforge - Procedural Audio Asset Generation
#[derive(Parser)]
#[command(name = "chipforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate every cataloged asset into an output directory
    GenerateAll {
        /// Output directory for WAV files and the manifest
        #[arg(short, long, default_value = "assets/audio")]
        out_dir: String,

        /// Base seed from which per-asset seeds are derived
        #[arg(long, default_value_t = catalog::BASE_SEED)]
        base_seed: u32,
    },

    /// Generate a single cataloged asset
    Generate {
        /// Asset name from the catalog (see `chipforge list`)
        #[arg(short, long)]
        name: String,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        out_dir: String,

        /// Override the derived seed
        #[arg(long)]
        seed: Option<u32>,

        /// Override the mood key (music beds and drones only;
        /// unrecognized keys fall back to the default mood)
        #[arg(long)]
        mood: Option<String>,
    },

    /// List the asset catalog
    List,
}
