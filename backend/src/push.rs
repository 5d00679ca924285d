use std::time::Duration;

use actix::{MailboxError, Message, Recipient};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Text frame pushed to the browser after every tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingUpdate {
    pub heading: String,
    pub value: u64,
}

#[derive(Debug, Error)]
pub enum PushError {
    #[error("view owner is gone")]
    OwnerGone,
    #[error("view owner did not answer in time")]
    Timeout,
    #[error("view is detached")]
    Detached,
    #[error("cannot encode heading update: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<MailboxError> for PushError {
    fn from(err: MailboxError) -> Self {
        match err {
            MailboxError::Closed => PushError::OwnerGone,
            MailboxError::Timeout => PushError::Timeout,
        }
    }
}

/// Asks the owner of a view to advance it by one tick.
#[derive(Debug, Clone, Copy, Message)]
#[rtype(result = "Result<(), PushError>")]
pub struct Tick;

/// Hands a tick to the actor that owns the view and waits for it to be applied.
///
/// An owner that has not applied the tick within `timeout` is reported as
/// [`PushError::Timeout`].
pub async fn dispatch(owner: &Recipient<Tick>, timeout: Duration) -> Result<(), PushError> {
    owner.send(Tick).timeout(timeout).await?
}
