// SPDX-License-Identifier: PMPL-1.0-or-later
//! Page fetcher.
//!
//! Redirects are followed by hand rather than by reqwest so the hop limit can
//! be reported as its own error. Relative `Location` headers are resolved
//! against the URL that produced them.

use crate::config::FetchConfig;
use crate::error::{PitchbotError, Result};
use reqwest::header::{CONTENT_TYPE, LOCATION, USER_AGENT};
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// HTTP client for retrieving a single page.
pub struct Fetcher {
    client: Client,
    max_redirects: usize,
    max_body_bytes: usize,
    user_agent: String,
}

impl Fetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            client,
            max_redirects: config.max_redirects,
            max_body_bytes: config.max_body_bytes,
            user_agent: config.user_agent.clone(),
        })
    }

    /// Fetch `target` and return the final response body as text.
    pub async fn fetch(&self, target: &str) -> Result<String> {
        let mut url = parse_target(target)?;
        let mut hops = 0;

        loop {
            info!(url = %url, hop = hops, "fetching");
            let response = self
                .client
                .get(url.clone())
                .header(USER_AGENT, &self.user_agent)
                .send()
                .await?;

            let status = response.status();
            if status.is_redirection() {
                if let Some(next) = redirect_target(&url, &response)? {
                    hops += 1;
                    if hops > self.max_redirects {
                        return Err(PitchbotError::TooManyRedirects {
                            limit: self.max_redirects,
                        });
                    }
                    debug!(from = %url, to = %next, status = status.as_u16(), "following redirect");
                    url = next;
                    continue;
                }
            }

            if !status.is_success() {
                return Err(PitchbotError::Unreachable {
                    url: url.to_string(),
                    status: status.as_u16(),
                });
            }

            check_content_type(&response)?;
            return self.read_body(response).await;
        }
    }

    async fn read_body(&self, response: Response) -> Result<String> {
        let body = response.bytes().await?;
        let body = if body.len() > self.max_body_bytes {
            debug!(
                size = body.len(),
                limit = self.max_body_bytes,
                "truncating response body"
            );
            &body[..self.max_body_bytes]
        } else {
            &body[..]
        };
        Ok(String::from_utf8_lossy(body).into_owned())
    }
}

/// Parse and validate a target URL. Only http and https are accepted.
pub fn parse_target(target: &str) -> Result<Url> {
    let url = Url::parse(target.trim())
        .map_err(|e| PitchbotError::InvalidTarget(format!("{}: {}", target, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(PitchbotError::InvalidTarget(format!(
            "{}: unsupported scheme '{}'",
            target, other
        ))),
    }
}

/// Resolve the `Location` header of a redirect response, if any.
fn redirect_target(current: &Url, response: &Response) -> Result<Option<Url>> {
    let Some(location) = response.headers().get(LOCATION) else {
        return Ok(None);
    };
    let location = location
        .to_str()
        .map_err(|_| PitchbotError::InvalidTarget("non-ASCII redirect location".to_string()))?;
    let next = current
        .join(location)
        .map_err(|e| PitchbotError::InvalidTarget(format!("redirect to {}: {}", location, e)))?;
    Ok(Some(next))
}

fn check_content_type(response: &Response) -> Result<()> {
    let Some(value) = response.headers().get(CONTENT_TYPE) else {
        return Ok(());
    };
    let content_type = value.to_str().unwrap_or_default();
    if is_textual(content_type) {
        Ok(())
    } else {
        Err(PitchbotError::UnsupportedContent(content_type.to_string()))
    }
}

/// `text/*`, and XML or XHTML documents.
pub fn is_textual(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase();
    mime.starts_with("text/") || mime.ends_with("/xml") || mime.ends_with("+xml")
}
