// src/github/fetch.rs
// =============================================================================
// This module looks up GitHub accounts, one at a time.
//
// Strategy:
// - GET https://api.github.com/users/{username}
// - 200: decode, keep real users (and organizations if asked to)
// - 404: the account does not exist, no point retrying
// - 403/429: rate limited, wait as long as GitHub tells us, then retry
// - anything else (5xx, network errors, bad JSON): back off and retry
// - after RetryPolicy::max_attempts failures, give up on that username
//
// Rust concepts:
// - async functions: For network I/O
// - Result: For error handling (FetchError is a thiserror enum)
// - Builder pattern: GithubClient::new(..).include_orgs(..)
// =============================================================================

use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use std::time::{Duration, SystemTime};

use super::model::{ApiUser, FetchError, FetchOutcome};
use super::retry::RetryPolicy;
use crate::profile::FriendProfile;

pub const GITHUB_API: &str = "https://api.github.com";

const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!("github-friends/", env!("CARGO_PKG_VERSION"));

pub struct GithubClient {
    http: Client,
    base_url: String,
    token: Option<String>,
    retry: RetryPolicy,
    include_orgs: bool,
}

// What one HTTP attempt concluded
enum Attempt {
    Done(FetchOutcome),
    Retry { reason: String, wait: Duration },
}

impl GithubClient {
    // Creates a client for the public GitHub API
    //
    // Parameters:
    //   token: optional personal access token (from GITHUB_TOKEN)
    pub fn new(token: Option<String>) -> Result<Self, FetchError> {
        Self::with_base_url(GITHUB_API, token, RetryPolicy::default())
    }

    // Same as new() but against any API root (GitHub Enterprise, or a local
    // server in tests)
    pub fn with_base_url(
        base_url: &str,
        token: Option<String>,
        retry: RetryPolicy,
    ) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("x-github-api-version", HeaderValue::from_static(API_VERSION));

        // We reuse this client for every lookup (connection pooling)
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(FetchError::Client)?;

        Ok(GithubClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            // An empty GITHUB_TOKEN is the same as no token
            token: token.filter(|t| !t.trim().is_empty()),
            retry,
            include_orgs: false,
        })
    }

    /// Keep organization accounts instead of reporting them as NotAUser
    pub fn include_orgs(mut self, include: bool) -> Self {
        self.include_orgs = include;
        self
    }

    // Looks up one username, retrying as described at the top of this file
    //
    // Returns:
    //   Ok(FetchOutcome): GitHub gave a definite answer
    //   Err(FetchError::RetriesExhausted): every attempt failed
    pub async fn fetch_user(&self, username: &str) -> Result<FetchOutcome, FetchError> {
        let url = format!("{}/users/{}", self.base_url, username);
        let max_attempts = self.retry.max_attempts.max(1);
        let mut last_failure = String::new();

        for attempt in 1..=max_attempts {
            debug!("GET {} (attempt {}/{})", url, attempt, max_attempts);

            let wait = match self.request(&url).send().await {
                Ok(response) => match self.classify(response, attempt).await {
                    Attempt::Done(outcome) => return Ok(outcome),
                    Attempt::Retry { reason, wait } => {
                        last_failure = reason;
                        wait
                    }
                },
                Err(e) => {
                    last_failure = describe_error(&e);
                    self.retry.backoff(attempt)
                }
            };

            // No point sleeping after the final attempt
            if attempt < max_attempts {
                warn!(
                    "{}: {} (attempt {}/{}), retrying in {:?}",
                    username, last_failure, attempt, max_attempts, wait
                );
                tokio::time::sleep(wait).await;
            }
        }

        Err(FetchError::RetriesExhausted {
            username: username.to_string(),
            attempts: max_attempts,
            last_failure,
        })
    }

    fn request(&self, url: &str) -> reqwest::RequestBuilder {
        let request = self.http.get(url);
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    // Turns one HTTP response into either a final outcome or a retry
    async fn classify(&self, response: Response, attempt: u32) -> Attempt {
        let status = response.status();

        match status {
            StatusCode::OK => self.decode(response, attempt).await,

            StatusCode::NOT_FOUND => Attempt::Done(FetchOutcome::NotFound),

            StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => Attempt::Retry {
                reason: format!("rate limited (HTTP {})", status.as_u16()),
                wait: self
                    .retry
                    .rate_limit_wait(response.headers(), attempt, SystemTime::now()),
            },

            _ => Attempt::Retry {
                reason: format!("HTTP {}", status),
                wait: self.retry.backoff(attempt),
            },
        }
    }

    async fn decode(&self, response: Response, attempt: u32) -> Attempt {
        let parsed = response
            .json::<Value>()
            .await
            .map_err(|e| e.to_string())
            .and_then(|raw| {
                serde_json::from_value::<ApiUser>(raw.clone())
                    .map(|user| (user, raw))
                    .map_err(|e| e.to_string())
            });

        let (user, raw) = match parsed {
            Ok(pair) => pair,
            Err(e) => {
                return Attempt::Retry {
                    reason: format!("unreadable response body: {}", e),
                    wait: self.retry.backoff(attempt),
                }
            }
        };

        if user.is_user() || self.include_orgs {
            Attempt::Done(FetchOutcome::Found(FriendProfile::from_api(user, raw)))
        } else {
            Attempt::Done(FetchOutcome::NotAUser {
                account_type: user.account_type,
            })
        }
    }
}

// Short human-readable reason for a transport failure
fn describe_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_connect() {
        "connection failed".to_string()
    } else {
        error.to_string()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a loop instead of recursion for retries?
//    - The attempt counter stays in one place
//    - Async recursion in Rust needs boxing, a for loop does not
//
// 2. Why does classify() return an enum instead of Result?
//    - A retry is not an error yet, it only becomes one when we run out of
//      attempts
//    - Attempt::Retry carries both the reason (for the log) and the wait
//
// 3. What is tokio::time::sleep?
//    - The async version of std::thread::sleep
//    - It parks this task without blocking the runtime thread
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::test_server::{no_wait, reply, serve};
    use tokio::net::TcpListener;

    const OCTOCAT: &str = r#"{"login":"octocat","type":"User","name":"The Octocat","html_url":"https://github.com/octocat","followers":42}"#;

    #[tokio::test]
    async fn test_found_user() {
        let (base, requests) = serve(vec![reply("200 OK", &[], OCTOCAT)]).await;
        let client = GithubClient::with_base_url(&base, None, no_wait()).unwrap();

        match client.fetch_user("octocat").await.unwrap() {
            FetchOutcome::Found(profile) => {
                assert_eq!(profile.username, "octocat");
                assert_eq!(profile.display_name(), "The Octocat");
                assert_eq!(profile.followers, 42);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }

        let requests = requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].starts_with("GET /users/octocat "));
        assert!(requests[0].to_lowercase().contains("accept: application/vnd.github+json"));
        assert!(!requests[0].to_lowercase().contains("authorization"));
    }

    #[tokio::test]
    async fn test_token_is_sent_as_bearer() {
        let (base, requests) = serve(vec![reply("200 OK", &[], OCTOCAT)]).await;
        let client =
            GithubClient::with_base_url(&base, Some("s3cret".to_string()), no_wait()).unwrap();

        client.fetch_user("octocat").await.unwrap();

        let requests = requests.lock().unwrap();
        assert!(requests[0].to_lowercase().contains("authorization: bearer s3cret"));
    }

    #[tokio::test]
    async fn test_not_found_is_not_retried() {
        let (base, requests) = serve(vec![reply("404 Not Found", &[], "{}")]).await;
        let client = GithubClient::with_base_url(&base, None, no_wait()).unwrap();

        let outcome = client.fetch_user("nobody").await.unwrap();
        assert!(matches!(outcome, FetchOutcome::NotFound));
        assert_eq!(requests.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_organization_is_rejected_by_default() {
        let org = r#"{"login":"rust-lang","type":"Organization"}"#;
        let (base, _) = serve(vec![reply("200 OK", &[], org)]).await;
        let client = GithubClient::with_base_url(&base, None, no_wait()).unwrap();

        match client.fetch_user("rust-lang").await.unwrap() {
            FetchOutcome::NotAUser { account_type } => assert_eq!(account_type, "Organization"),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_organization_kept_with_include_orgs() {
        let org = r#"{"login":"rust-lang","type":"Organization"}"#;
        let (base, _) = serve(vec![reply("200 OK", &[], org)]).await;
        let client = GithubClient::with_base_url(&base, None, no_wait())
            .unwrap()
            .include_orgs(true);

        let outcome = client.fetch_user("rust-lang").await.unwrap();
        assert!(matches!(outcome, FetchOutcome::Found(_)));
    }

    #[tokio::test]
    async fn test_rate_limit_then_success() {
        let (base, requests) = serve(vec![
            reply(
                "403 Forbidden",
                &[("X-RateLimit-Remaining", "0"), ("X-RateLimit-Reset", "0")],
                r#"{"message":"API rate limit exceeded"}"#,
            ),
            reply("200 OK", &[], OCTOCAT),
        ])
        .await;
        let client = GithubClient::with_base_url(&base, None, no_wait()).unwrap();

        let outcome = client.fetch_user("octocat").await.unwrap();
        assert!(matches!(outcome, FetchOutcome::Found(_)));
        assert_eq!(requests.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_too_many_requests_then_success() {
        let (base, requests) = serve(vec![
            reply("429 Too Many Requests", &[("Retry-After", "0")], "{}"),
            reply("200 OK", &[], OCTOCAT),
        ])
        .await;
        let client = GithubClient::with_base_url(&base, None, no_wait()).unwrap();

        let outcome = client.fetch_user("octocat").await.unwrap();
        assert!(matches!(outcome, FetchOutcome::Found(_)));
        assert_eq!(requests.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_server_errors_exhaust_retries() {
        let (base, requests) = serve(vec![
            reply("502 Bad Gateway", &[], "{}"),
            reply("500 Internal Server Error", &[], "{}"),
            reply("503 Service Unavailable", &[], "{}"),
        ])
        .await;
        let client = GithubClient::with_base_url(&base, None, no_wait()).unwrap();

        let err = client.fetch_user("octocat").await.unwrap_err();
        match err {
            FetchError::RetriesExhausted {
                username,
                attempts,
                last_failure,
            } => {
                assert_eq!(username, "octocat");
                assert_eq!(attempts, 3);
                assert!(last_failure.contains("503"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(requests.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_bad_json_is_retried() {
        let (base, requests) = serve(vec![
            reply("200 OK", &[], "not json"),
            reply("200 OK", &[], OCTOCAT),
        ])
        .await;
        let client = GithubClient::with_base_url(&base, None, no_wait()).unwrap();

        let outcome = client.fetch_user("octocat").await.unwrap();
        assert!(matches!(outcome, FetchOutcome::Found(_)));
        assert_eq!(requests.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_connection_refused_exhausts_retries() {
        // Grab a free port, then close it so nothing is listening
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let client = GithubClient::with_base_url(&base, None, no_wait()).unwrap();
        let err = client.fetch_user("octocat").await.unwrap_err();
        assert!(matches!(err, FetchError::RetriesExhausted { attempts: 3, .. }));
    }

    #[test]
    fn test_blank_token_is_ignored() {
        let client =
            GithubClient::with_base_url(GITHUB_API, Some("  ".to_string()), no_wait()).unwrap();
        assert!(client.token.is_none());
    }
}
