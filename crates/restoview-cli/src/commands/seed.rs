//! Seed import command
//!
//! Usage: restoview seed import <PATH>

use super::{CmdResult, Context};
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SeedArgs {
    #[command(subcommand)]
    pub command: SeedCommand,
}

#[derive(Debug, Subcommand)]
pub enum SeedCommand {
    /// Import a seed file (or every .yaml/.yml file in a directory)
    Import(ImportArgs),
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Path to seed YAML file or directory
    pub path: PathBuf,
}

pub fn execute(args: SeedArgs, ctx: &Context) -> CmdResult {
    match args.command {
        SeedCommand::Import(import_args) => execute_import(import_args, ctx),
    }
}

fn execute_import(args: ImportArgs, ctx: &Context) -> CmdResult {
    let mut conn = ctx.open()?;

    let seed_files = if args.path.is_dir() {
        // Sorted so a directory imports in a stable order
        let mut files: Vec<PathBuf> = std::fs::read_dir(&args.path)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.extension()
                    .map(|ext| ext == "yaml" || ext == "yml")
                    .unwrap_or(false)
            })
            .collect();
        files.sort();
        files
    } else {
        vec![args.path]
    };

    for seed_file in seed_files {
        println!("Importing {}...", seed_file.display());
        let summary = restoview_store::seed::import_seed(&seed_file, &mut conn)?;
        println!(
            "✓ Imported {} restaurants, {} customers, {} reviews (digest: {})",
            summary.restaurants, summary.customers, summary.reviews, summary.digest
        );
    }

    Ok(())
}
