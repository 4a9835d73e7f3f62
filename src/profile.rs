// src/profile.rs
// =============================================================================
// The Friend Profile: one normalized record per GitHub user that survived
// validation.
//
// A profile is built from the `/users/{username}` API response and lives only
// for the duration of a run. It keeps the raw JSON around so the JSON output
// can carry everything GitHub told us.
//
// Rust concepts:
// - serde derive: the JSON renderer serializes this struct directly
// - Ordering / cmp: composing sort keys with .then_with()
// =============================================================================

use serde::Serialize;
use serde_json::Value;
use std::cmp::Ordering;

use crate::cli::SortBy;
use crate::github::ApiUser;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FriendProfile {
    pub username: String,
    /// The free-text name exactly as returned by the API
    pub name: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub html_url: String,
    pub followers: u64,
    pub location: Option<String>,
    pub bio: Option<String>,
    /// The untouched API response
    pub raw: Value,
}

impl FriendProfile {
    // Builds a profile from a decoded API user plus the raw response body
    pub fn from_api(user: ApiUser, raw: Value) -> Self {
        let (first_name, last_name) = split_name(user.name.as_deref());

        // Older or partial responses can omit html_url; the profile page URL is
        // predictable from the login.
        let html_url = user
            .html_url
            .unwrap_or_else(|| format!("https://github.com/{}", user.login));

        FriendProfile {
            username: user.login,
            name: user.name,
            first_name,
            last_name,
            html_url,
            followers: user.followers,
            location: user.location,
            bio: user.bio,
            raw,
        }
    }

    /// "First Last", or the username when the account has no name set
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }

    fn name_order(&self, other: &Self) -> Ordering {
        self.first_name
            .to_lowercase()
            .cmp(&other.first_name.to_lowercase())
            .then_with(|| self.last_name.to_lowercase().cmp(&other.last_name.to_lowercase()))
            .then_with(|| self.username.to_lowercase().cmp(&other.username.to_lowercase()))
    }
}

// Splits a free-text name on whitespace
//
// The first word becomes the first name and the second word the last name.
// Anything after the second word is dropped, matching how the page has always
// been rendered.
//
// Example:
//   Some("  Ada   Lovelace ") -> ("Ada", "Lovelace")
//   None                      -> ("", "")
pub fn split_name(name: Option<&str>) -> (String, String) {
    let mut parts = name.unwrap_or("").split_whitespace();
    let first = parts.next().unwrap_or("").to_string();
    let last = parts.next().unwrap_or("").to_string();
    (first, last)
}

pub fn sort_profiles(profiles: &mut [FriendProfile], sort_by: SortBy) {
    match sort_by {
        SortBy::Name => profiles.sort_by(|a, b| a.name_order(b)),
        SortBy::Followers => profiles.sort_by(|a, b| {
            b.followers
                .cmp(&a.followers)
                .then_with(|| a.name_order(b))
        }),
    }
}
