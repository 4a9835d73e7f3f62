// src/render/json.rs
// =============================================================================
// Renders friends.json: a pretty-printed array of profiles, raw API
// responses included.
// =============================================================================

use anyhow::{Context, Result};

use crate::profile::FriendProfile;

pub fn render_json(profiles: &[FriendProfile]) -> Result<String> {
    let mut json =
        serde_json::to_string_pretty(profiles).context("failed to serialize friends to JSON")?;
    json.push('\n');
    Ok(json)
}
