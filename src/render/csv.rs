// src/render/csv.rs
// =============================================================================
// Renders friends.csv following RFC 4180 quoting rules: a field is wrapped in
// double quotes only when it contains a comma, a quote or a line break, and
// embedded quotes are doubled.
// =============================================================================

use crate::profile::FriendProfile;

const HEADER: [&str; 7] = [
    "username",
    "first_name",
    "last_name",
    "html_url",
    "followers",
    "location",
    "bio",
];

pub fn render_csv(profiles: &[FriendProfile]) -> String {
    let mut csv = HEADER.join(",");
    csv.push('\n');

    for profile in profiles {
        let followers = profile.followers.to_string();
        let row = [
            profile.username.as_str(),
            profile.first_name.as_str(),
            profile.last_name.as_str(),
            profile.html_url.as_str(),
            followers.as_str(),
            profile.location.as_deref().unwrap_or(""),
            profile.bio.as_deref().unwrap_or(""),
        ];
        let fields: Vec<String> = row.iter().map(|field| escape_field(field)).collect();
        csv.push_str(&fields.join(","));
        csv.push('\n');
    }

    csv
}

fn escape_field(field: &str) -> String {
    if field.contains(|c: char| matches!(c, ',' | '"' | '\n' | '\r')) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
