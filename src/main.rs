// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Collect and de-duplicate the usernames (file + arguments)
// 3. Look each one up on the GitHub API, one after another
// 4. Sort the survivors and write friends.md/.html/.json/.csv
// 5. Exit with proper code (0 = success, 2 = error)
//
// Rust concepts used:
// - async/await: The HTTP client and retry sleeps are async
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching on fetch outcomes
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod github;        // src/github/ - GitHub API client
mod input;         // src/input/ - username parsing and de-duplication
mod profile;       // src/profile.rs - the Friend Profile record
mod render;        // src/render/ - output formats

use anyhow::Result;
use clap::Parser;
use log::warn;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use cli::{Cli, SortBy};
use github::{FetchOutcome, GithubClient};
use profile::FriendProfile;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = friends page written (possibly empty)
//   Err = input file or output write failure
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let usernames = input::collect_usernames(cli.file.as_deref(), &cli.usernames)?;

    if usernames.is_empty() {
        println!("⚠️  No usernames given. Pass them as arguments or with --file.");
    }

    let client = GithubClient::new(cli.token.clone())?.include_orgs(cli.include_orgs);

    println!("🔍 Validating and fetching {} users...", usernames.len());
    let mut friends = fetch_all(&client, &usernames, &mut io::stdout()).await?;

    if friends.is_empty() {
        println!("\n⚠️  No valid users found, writing an empty friends list.");
    }

    let written = publish(&mut friends, cli.sort_by, &cli.out_dir)?;

    println!("\n✅ Done! {} friend(s) written to:", friends.len());
    for path in &written {
        println!("   {}", path.display());
    }

    Ok(0)
}

// Looks up every username in order and keeps the valid accounts
//
// Failures never abort the run: a username that can't be fetched is
// reported and left out.
//
// Progress goes to `out` one whole line at a time, so retry warnings logged
// while a lookup is in flight never land in the middle of a line.
async fn fetch_all(
    client: &GithubClient,
    usernames: &[String],
    out: &mut impl Write,
) -> Result<Vec<FriendProfile>> {
    let mut friends = Vec::new();

    for username in usernames {
        writeln!(out, "→ Fetching {}...", username)?;

        match client.fetch_user(username).await {
            Ok(FetchOutcome::Found(profile)) => {
                writeln!(out, "   OK")?;
                friends.push(profile);
            }
            Ok(FetchOutcome::NotFound) => writeln!(out, "   not found")?,
            Ok(FetchOutcome::NotAUser { account_type }) => {
                writeln!(out, "   skipped ({})", account_type.to_lowercase())?;
            }
            Err(e) => {
                writeln!(out, "   failed")?;
                warn!("{}", e);
            }
        }
    }

    Ok(friends)
}

// Sorts the friends and writes every output file
//
// An empty list still produces the files, so a page from an earlier run
// never outlives the users it listed.
fn publish(
    friends: &mut [FriendProfile],
    sort_by: SortBy,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    profile::sort_profiles(friends, sort_by);
    render::write_all(out_dir, friends)
}

// Sets up env_logger
//
// RUST_LOG always wins. Without it we show warnings, or our own debug
// output when -v is given (dependencies stay at warn either way).
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,github_friends=debug"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
