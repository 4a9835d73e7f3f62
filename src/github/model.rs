// src/github/model.rs
// =============================================================================
// Types exchanged with the GitHub API and returned by the fetch routine.
// =============================================================================

use serde::Deserialize;
use thiserror::Error;

use crate::profile::FriendProfile;

/// The subset of the `/users/{username}` response we care about.
///
/// Unknown fields are ignored here; the full body is kept separately as raw
/// JSON on the profile.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiUser {
    pub login: String,
    /// "User", "Organization" or "Bot"
    #[serde(rename = "type", default)]
    pub account_type: String,
    pub name: Option<String>,
    pub html_url: Option<String>,
    #[serde(default)]
    pub followers: u64,
    pub location: Option<String>,
    pub bio: Option<String>,
}

impl ApiUser {
    pub fn is_user(&self) -> bool {
        self.account_type == "User"
    }
}

/// What a lookup concluded about one username
#[derive(Debug)]
pub enum FetchOutcome {
    /// A valid account, ready to render
    Found(FriendProfile),
    /// GitHub answered 404
    NotFound,
    /// The account exists but is an organization (or bot)
    NotAUser { account_type: String },
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("gave up on {username} after {attempts} attempt(s): {last_failure}")]
    RetriesExhausted {
        username: String,
        attempts: u32,
        last_failure: String,
    },
}
