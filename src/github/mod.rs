// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Currently implements:
// - Looking up a single account via GET /users/{username}
// - Retrying transient failures with exponential backoff
// - Waiting out rate limits (403/429) using GitHub's rate limit headers
// - Classifying the account (user, organization, missing)
//
// Everything is sequential: one request in flight at a time.
// =============================================================================

mod fetch;
mod model;
mod retry;

#[cfg(test)]
pub(crate) mod test_server;

pub use fetch::GithubClient;
pub use model::{ApiUser, FetchOutcome};
