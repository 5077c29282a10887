//! HTTP server wiring for Muster.
//!
//! Mounts the JSON API from [`muster_api`] under `/api`, adds the runtime
//! mode switch at `/mode`, and owns the [`AppContext`] that decides which
//! backends serve each request.

pub mod env;

use std::sync::Arc;

use axum::{
  Json,
  Router,
  extract::State,
  http::StatusCode,
  routing::get,
};
use muster_api::ApiState;
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

pub use env::{AppContext, Mode};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and the
/// `MUSTER_*` environment.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:         String,
  #[serde(default = "default_port")]
  pub port:         u16,
  /// Backend mode at startup; switchable at runtime via `PUT /mode`.
  #[serde(default)]
  pub mode:         Mode,
  #[serde(default = "default_api_base_url")]
  pub api_base_url: String,
  /// Bearer token for the remote feed, if the deployment requires one.
  #[serde(default)]
  pub api_token:    Option<String>,
}

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 8700 }
fn default_api_base_url() -> String { "http://localhost:8080/api".into() }

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application router around a shared [`AppContext`].
pub fn router(ctx: Arc<AppContext>) -> Router {
  let api = ApiState::new(ctx.clone(), ctx.clone());
  Router::new()
    .route("/mode", get(get_mode).put(set_mode))
    .with_state(ctx)
    .nest("/api", muster_api::api_router(api))
    .layer(TraceLayer::new_for_http())
}

// ─── Mode endpoints ───────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
struct ModeBody {
  mode: Mode,
}

/// `GET /mode`
async fn get_mode(State(ctx): State<Arc<AppContext>>) -> Json<ModeBody> {
  Json(ModeBody { mode: ctx.mode() })
}

/// `PUT /mode` — rebuild the backends; see [`AppContext::set_mode`].
async fn set_mode(
  State(ctx): State<Arc<AppContext>>,
  Json(body): Json<ModeBody>,
) -> StatusCode {
  tracing::info!(mode = ?body.mode, "switching backend mode");
  ctx.set_mode(body.mode);
  StatusCode::NO_CONTENT
}

// ─── Tests ────────────────────────────────────────────────────────────────────
