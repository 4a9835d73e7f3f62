// src/render/html.rs
// =============================================================================
// Renders friends.html, a self-contained page with a small inline stylesheet.
//
// All names and URLs come from the GitHub API, so they are escaped before
// being placed in text or attribute positions.
// =============================================================================

use crate::profile::FriendProfile;

const STYLE: &str = "body{font-family:sans-serif;padding:20px;}\
a{color:#0366d6;text-decoration:none;}\
li{margin:5px 0;}";

pub fn render_html(profiles: &[FriendProfile]) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html><head><meta charset='UTF-8'><title>My Friends</title>");
    html.push_str(&format!("<style>{}</style></head><body>\n", STYLE));
    html.push_str("<h1>My friends</h1>\n<ul>\n");

    for profile in profiles {
        html.push_str(&format!(
            "<li><a href='{}' target='_blank'>{}</a></li>\n",
            escape(&profile.html_url),
            escape(&profile.display_name())
        ));
    }

    html.push_str("</ul></body></html>\n");
    html
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
