//! Error type for `muster-store-remote`.

use muster_core::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("http transport error: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("server returned {0}")]
  Status(reqwest::StatusCode),

  /// The remote API has no mutation endpoints yet. Permanent capability
  /// gap, not a transient condition.
  #[error("`{0}` is not implemented by the remote API")]
  NotImplemented(&'static str),
}

impl StoreError for Error {
  fn is_not_implemented(&self) -> bool {
    matches!(self, Self::NotImplemented(_))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
