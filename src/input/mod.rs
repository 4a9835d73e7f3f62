// src/input/mod.rs
// =============================================================================
// This module turns raw user input into a clean list of GitHub usernames.
//
// Submodules:
// - parse: Normalizes one token (bare username or profile URL)
// - collect: Gathers tokens from a file and the command line, then de-duplicates
// =============================================================================

mod collect;
mod parse;

pub use collect::collect_usernames;
