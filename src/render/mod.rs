// src/render/mod.rs
// =============================================================================
// This module turns the sorted friends list into the four output files.
//
// Submodules:
// - markdown: friends.md, a bullet list of links
// - html: friends.html, a standalone page
// - json: friends.json, full profile data including the raw API response
// - csv: friends.csv, one row per friend for spreadsheets
//
// Every renderer is a pure function from &[FriendProfile] to String; only
// write_all() touches the filesystem.
// =============================================================================

mod csv;
mod html;
mod json;
mod markdown;

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::profile::FriendProfile;

pub use csv::render_csv;
pub use html::render_html;
pub use json::render_json;
pub use markdown::render_markdown;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Html,
    Json,
    Csv,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Markdown,
        OutputFormat::Html,
        OutputFormat::Json,
        OutputFormat::Csv,
    ];

    /// Fixed file name for this format
    pub fn file_name(self) -> &'static str {
        match self {
            OutputFormat::Markdown => "friends.md",
            OutputFormat::Html => "friends.html",
            OutputFormat::Json => "friends.json",
            OutputFormat::Csv => "friends.csv",
        }
    }

    pub fn render(self, profiles: &[FriendProfile]) -> Result<String> {
        match self {
            OutputFormat::Markdown => Ok(render_markdown(profiles)),
            OutputFormat::Html => Ok(render_html(profiles)),
            OutputFormat::Json => render_json(profiles),
            OutputFormat::Csv => Ok(render_csv(profiles)),
        }
    }
}

// Writes every format into out_dir, creating the directory if needed
//
// Returns: the paths written, in OutputFormat::ALL order
pub fn write_all(out_dir: &Path, profiles: &[FriendProfile]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;

    let mut written = Vec::with_capacity(OutputFormat::ALL.len());
    for format in OutputFormat::ALL {
        let path = out_dir.join(format.file_name());
        let content = format.render(profiles)?;
        fs::write(&path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        debug!("wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}
