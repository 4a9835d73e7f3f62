// src/input/collect.rs
// =============================================================================
// Collects usernames from an optional input file plus command-line tokens.
//
// - File lines come first, then CLI tokens
// - Each token goes through parse_input_line; rejected tokens are logged
// - Duplicates are removed case-insensitively (GitHub logins are
//   case-insensitive), keeping the first spelling seen
// - The result is sorted case-insensitively so runs are reproducible
// =============================================================================

use anyhow::{Context, Result};
use log::{debug, warn};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::parse::parse_input_line;

pub fn collect_usernames(file: Option<&Path>, args: &[String]) -> Result<Vec<String>> {
    let mut tokens: Vec<String> = Vec::new();

    if let Some(path) = file {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display()))?;
        tokens.extend(content.lines().map(str::to_string));
    }

    tokens.extend(args.iter().cloned());

    Ok(dedupe(&tokens))
}

// BTreeMap keyed by the lowercase login gives us both de-duplication and a
// stable case-insensitive order in one pass.
fn dedupe(tokens: &[String]) -> Vec<String> {
    let mut seen: BTreeMap<String, String> = BTreeMap::new();

    for token in tokens {
        match parse_input_line(token) {
            Some(username) => {
                let key = username.to_lowercase();
                if seen.contains_key(&key) {
                    debug!("skipping duplicate username {}", username);
                } else {
                    seen.insert(key, username);
                }
            }
            None => {
                let trimmed = token.trim();
                if !trimmed.is_empty() && !trimmed.starts_with('#') {
                    warn!("ignoring input that is not a GitHub username or profile URL: {}", trimmed);
                }
            }
        }
    }

    seen.into_values().collect()
}
