//! Async HTTP client wrapping the remote meetings API.

use std::time::Duration;

use serde::Deserialize;

use crate::{Error, Result};

/// Connection settings for the remote meetings API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
  /// Bearer token, if the deployment requires a session.
  pub token:    Option<String>,
}

/// One meeting record as served by the remote API.
#[derive(Debug, Clone, Deserialize)]
pub struct MeetingDto {
  pub id:           i64,
  pub title:        String,
  /// RFC 3339 date-time string. Records whose date fails to parse are
  /// dropped during conversion, not surfaced as fetch errors.
  pub scheduled_at: String,
  pub category:     String,
  /// Free-text venue description; classified into home/away locally.
  pub location:     String,
  pub presenter:    Option<String>,
  /// 0/1 integer flag.
  pub has_meal:     i64,
  pub notes:        Option<String>,
}

/// Envelope the API wraps every payload in.
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
  data: T,
}

/// Async HTTP client for the remote meetings API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: reqwest::Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(30))
      .build()?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!("{}{path}", self.config.base_url.trim_end_matches('/'))
  }

  fn auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    match &self.config.token {
      Some(token) => req.bearer_auth(token),
      None => req,
    }
  }

  /// `GET /meetings` — the full meeting list as wire records.
  pub async fn fetch_meetings(&self) -> Result<Vec<MeetingDto>> {
    let resp = self
      .auth(self.client.get(self.url("/meetings")))
      .send()
      .await?;

    if !resp.status().is_success() {
      return Err(Error::Status(resp.status()));
    }
    let body: ApiResponse<Vec<MeetingDto>> = resp.json().await?;
    Ok(body.data)
  }
}
