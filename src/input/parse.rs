// src/input/parse.rs
// =============================================================================
// Normalizes a single input token into a GitHub username.
//
// Accepted forms:
//   - octocat
//   - https://github.com/octocat
//   - https://www.github.com/octocat/some-repo   (first path segment wins)
//
// Everything else (other hosts, blank lines, comments, tokens with spaces or
// punctuation) is rejected by returning None.
// =============================================================================

use url::Url;

// Parses one line of input
//
// Parameters:
//   line: raw token, possibly with surrounding whitespace or a trailing newline
//
// Returns: Some(username) if the token names a GitHub account, None otherwise
//
// Example:
//   "  https://github.com/rust-lang/rust \n" -> Some("rust-lang")
pub fn parse_input_line(line: &str) -> Option<String> {
    let line = line.trim();

    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    if has_http_scheme(line) {
        return username_from_url(line);
    }

    if is_valid_username(line) {
        Some(line.to_string())
    } else {
        None
    }
}

// Schemes are case-insensitive, so HTTPS://github.com/x is still a URL
fn has_http_scheme(token: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        token
            .get(..scheme.len())
            .map_or(false, |prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

// Extracts the account name from a github.com profile URL
fn username_from_url(raw: &str) -> Option<String> {
    let url = Url::parse(raw).ok()?;

    match url.host_str() {
        Some("github.com") | Some("www.github.com") => {}
        _ => return None,
    }

    let first = url.path_segments()?.find(|segment| !segment.is_empty())?;

    if is_valid_username(first) {
        Some(first.to_string())
    } else {
        None
    }
}

// GitHub logins are made of letters, digits and hyphens; underscores are
// tolerated because older imports still contain them.
fn is_valid_username(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
