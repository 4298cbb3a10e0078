// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::{
    fs::{self, File},
    path::PathBuf,
};

use clap::{ArgAction, Parser, Subcommand};
use log::{debug, info};

use crate::config::{load_config, FastkitConfig};
use crate::errors::FastkitError;
use crate::extract::{extract_file, parse_ranges};
use crate::rename::{rename_folder, RenameOptions, TagColumns, TagTable};
use crate::unique::{unique_file, DedupOrder};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// More log output (-v: info, -vv: debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Residues per line in written FastA files (0: no wrapping)
    #[arg(long = "line-width", global = true)]
    line_width: Option<usize>,

    /// Configuration file (default: ~/.fastkitconfig, then ./.fastkitconfig)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Extract (and join) subsequences from every sequence of a FastA file
    #[command(after_help = "Positions are 1-based and inclusive, and are taken in pairs: \
        `10 20 30 40` joins 10-20 and 30-40. A trailing odd position extracts to the end of \
        the sequence. If end < start, the range wraps around the end of the (circular) \
        sequence, e.g. `16000 500` for a D-loop.")]
    Extract {
        /// FastA file to be processed
        #[arg(short = 'f', long = "fasta-file", value_parser = readable_file)]
        fasta_file: PathBuf,

        /// Output file
        #[arg(short = 'o', long = "output-file")]
        output_file: PathBuf,

        /// Subsequence boundaries, e.g. 10 20
        #[arg(required = true, num_args = 1.., value_parser = position)]
        positions: Vec<usize>,
    },

    /// Rename sequences to <accession>_<tag>, for all .fasta files in a folder
    Rename {
        /// Folder containing the FastA files to be renamed
        #[arg(short = 'd', long, value_parser = readable_dir)]
        folder: PathBuf,

        /// Tag table: spreadsheet exported as CSV (or TSV)
        #[arg(short = 't', long = "tag-file", alias = "excel-file", value_parser = readable_file)]
        tag_file: PathBuf,

        /// Column holding the accession codes (1-based)
        #[arg(long = "code-column", value_parser = position)]
        code_column: Option<usize>,

        /// Column holding the tags (1-based)
        #[arg(long = "tag-column", value_parser = position)]
        tag_column: Option<usize>,

        /// Tag for codes not found in the table
        #[arg(long = "unknown-tag")]
        unknown_tag: Option<String>,

        /// Name of the output subfolder
        #[arg(long = "output-dir")]
        output_dir: Option<String>,
    },

    /// Write only the unique sequences (case-insensitive) of a FastA file
    Unique {
        /// FastA file to be processed
        #[arg(short = 'f', long = "fasta-file", value_parser = readable_file)]
        fasta_file: PathBuf,

        /// Output file
        #[arg(short = 'o', long = "output-file")]
        output_file: PathBuf,

        /// Sort sequences by id before deduplication (and in the output)
        #[arg(short = 's', long = "sort-ids")]
        sort_ids: bool,
    },
}

// Argument validators (clap reports their errors as usage errors)

fn readable_file(arg: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(arg);
    if !path.is_file() {
        return Err(format!("{} is not a valid path", arg));
    }
    File::open(&path).map_err(|e| format!("{} is not a readable file ({})", arg, e))?;
    Ok(path)
}

fn readable_dir(arg: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(arg);
    if !path.is_dir() {
        return Err(format!("{} is not a valid path", arg));
    }
    fs::read_dir(&path).map_err(|e| format!("{} is not a readable dir ({})", arg, e))?;
    Ok(path)
}

fn position(arg: &str) -> Result<usize, String> {
    match arg.parse::<usize>() {
        Ok(0) => Err(String::from("positions are 1-based")),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("{}: {}", arg, e)),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

// Command-line flags take precedence over the config file, which takes precedence over the
// built-in defaults.
fn merge_settings(cli: &Cli, config: &FastkitConfig) -> (usize, TagColumns, RenameOptions) {
    let line_width = cli.line_width.unwrap_or(config.fasta.line_width);
    let mut columns = TagColumns {
        code: config.rename.code_column,
        tag: config.rename.tag_column,
    };
    let mut options = RenameOptions {
        unknown_tag: config.rename.unknown_tag.clone(),
        output_dir: config.rename.output_dir.clone(),
        line_width,
    };
    if let Command::Rename {
        code_column,
        tag_column,
        unknown_tag,
        output_dir,
        ..
    } = &cli.command
    {
        columns.code = code_column.unwrap_or(columns.code);
        columns.tag = tag_column.unwrap_or(columns.tag);
        if let Some(tag) = unknown_tag {
            options.unknown_tag = tag.clone();
        }
        if let Some(dir) = output_dir {
            options.output_dir = dir.clone();
        }
    }
    (line_width, columns, options)
}

fn run_cli(cli: Cli) -> Result<(), FastkitError> {
    let config = load_config(cli.config.as_deref())?;
    debug!("config: {:?}", config);
    let (line_width, columns, options) = merge_settings(&cli, &config);

    match cli.command {
        Command::Extract {
            fasta_file,
            output_file,
            positions,
        } => {
            let ranges = parse_ranges(&positions)?;
            extract_file(&fasta_file, &output_file, &ranges, line_width)?;
        }
        Command::Rename { folder, tag_file, .. } => {
            let tags = TagTable::from_path(&tag_file, columns)?;
            info!("Loaded {} tags from {}", tags.len(), tag_file.display());
            rename_folder(&folder, &tags, &options)?;
        }
        Command::Unique {
            fasta_file,
            output_file,
            sort_ids,
        } => {
            let order = if sort_ids {
                DedupOrder::SortedIds
            } else {
                DedupOrder::Input
            };
            unique_file(&fasta_file, &output_file, order, line_width)?;
        }
    }
    Ok(())
}

pub fn run() -> Result<(), FastkitError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    info!("Starting log");
    run_cli(cli)
}
