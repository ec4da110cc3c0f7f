//! World record fetching with context guards
//!
//! The request is asynchronous and the extension can be reloaded while it is
//! in flight. [`load_resource`] checks the hosting context right before the
//! request and right after the response; the controller checks a third time
//! before it touches the page.

use super::HostingContext;
use crate::models::{WorldId, WorldRecord};
use std::future::Future;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("invalid world record: {0}")]
    Decode(String),
}

/// Anything that can produce a world record for an identifier.
pub trait WorldSource {
    fn fetch_world(&self, world_id: &WorldId) -> impl Future<Output = Result<WorldRecord, FetchError>>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(WorldRecord),
    Failed(FetchError),
    /// The hosting context went away; nothing may be shown.
    Abandoned,
}

/// Fetch one world record, abandoning silently if the context is invalidated
/// around the request.
pub async fn load_resource<C, S>(context: &C, source: &S, world_id: &WorldId) -> LoadOutcome
where
    C: HostingContext + ?Sized,
    S: WorldSource,
{
    if context.is_invalid() {
        log::debug!("Extension context invalidated, aborting fetch");
        return LoadOutcome::Abandoned;
    }

    let result = source.fetch_world(world_id).await;

    if context.is_invalid() {
        log::debug!("Extension context invalidated after fetch, aborting");
        return LoadOutcome::Abandoned;
    }

    match result {
        Ok(record) => LoadOutcome::Loaded(record),
        Err(err) => LoadOutcome::Failed(err),
    }
}
