// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Unlike a multi-command tool, github-friends does exactly one job, so there
// is no subcommand enum: the whole CLI is a single flat struct.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants (SortBy)
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "github-friends",
    version,
    about = "Build a friends page from a list of GitHub usernames",
    long_about = "github-friends reads GitHub usernames or profile URLs from a file and/or the \
                  command line, looks each one up on the GitHub API, drops unknown users and \
                  organizations, and writes friends.md, friends.html, friends.json and friends.csv."
)]
pub struct Cli {
    /// Input file (one GitHub username or profile URL per line)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// GitHub usernames or profile URLs given directly on the command line
    pub usernames: Vec<String>,

    /// Print debug logging (retries, rate limit waits, dropped users)
    #[arg(short, long)]
    pub verbose: bool,

    /// Keep organization accounts instead of dropping them
    #[arg(long)]
    pub include_orgs: bool,

    /// How to order the friends list
    #[arg(long, value_enum, default_value_t = SortBy::Name)]
    pub sort_by: SortBy,

    /// Directory the four output files are written to
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Personal access token, sent as a bearer credential
    ///
    /// Read from the GITHUB_TOKEN environment variable; raises the API rate limit.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

/// Sort order of the rendered friends list
#[derive(ValueEnum, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SortBy {
    /// Alphabetical by first name, then last name
    #[default]
    Name,
    /// Most followers first
    Followers,
}
