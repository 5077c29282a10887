//! [`RemoteMeetingStore`] — the HTTP-backed implementation of the meeting
//! store port.

use muster_core::{meeting::Meeting, store::MeetingStore};
use uuid::Uuid;

use crate::{Error, Result, client::ApiClient, convert};

/// [`MeetingStore`] served by the remote HTTP API.
///
/// `get_by_id` has no server-side endpoint and is implemented by fetching
/// the full list and filtering locally. Fine for the small datasets this
/// API serves; a caveat at larger scale.
#[derive(Clone)]
pub struct RemoteMeetingStore {
  client: ApiClient,
}

impl RemoteMeetingStore {
  pub fn new(client: ApiClient) -> Self { Self { client } }
}

impl MeetingStore for RemoteMeetingStore {
  type Error = Error;

  async fn list_all(&self) -> Result<Vec<Meeting>> {
    let dtos = self.client.fetch_meetings().await?;
    // Records with unparseable dates are dropped inside the conversion;
    // the result is the successful subset.
    Ok(dtos.iter().filter_map(convert::meeting_from_dto).collect())
  }

  async fn get_by_id(&self, id: Uuid) -> Result<Option<Meeting>> {
    Ok(self.list_all().await?.into_iter().find(|m| m.id == id))
  }

  async fn create(&self, _meeting: Meeting) -> Result<()> {
    Err(Error::NotImplemented("create"))
  }

  async fn replace(&self, _meeting: Meeting) -> Result<()> {
    Err(Error::NotImplemented("replace"))
  }

  async fn delete(&self, _id: Uuid) -> Result<()> {
    Err(Error::NotImplemented("delete"))
  }
}
