// src/render/markdown.rs
// =============================================================================
// Renders friends.md:
//
//   # My friends
//
//   - [Ada Lovelace](https://github.com/ada)
//   - [octocat](https://github.com/octocat)
// =============================================================================

use crate::profile::FriendProfile;

pub fn render_markdown(profiles: &[FriendProfile]) -> String {
    let mut md = String::from("# My friends\n\n");

    for profile in profiles {
        md.push_str(&format!(
            "- [{}]({})\n",
            escape_text(&profile.display_name()),
            escape_destination(&profile.html_url)
        ));
    }

    md
}

// Link text must not close the bracket early
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '[' | ']' | '*' | '_' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn escape_destination(url: &str) -> String {
    url.replace('(', "\\(").replace(')', "\\)").replace(' ', "%20")
}
