//! Shared, reloadable stream list
//!
//! Once loaded, a stream list is read by many tasks and never modified in
//! place. A reload builds a fresh list and swaps it in whole; readers holding
//! the previous snapshot keep a consistent view until they drop it.

use std::sync::Arc;

use tokio::sync::RwLock;

use super::error::Result;
use super::store::StreamList;

/// Validated stream list published to concurrent readers
#[derive(Debug)]
pub struct SharedStreamList {
    current: RwLock<Arc<StreamList>>,
}

impl SharedStreamList {
    /// Publish an initial stream list
    ///
    /// The list must pass validation.
    pub fn new(list: StreamList) -> Result<Self> {
        list.validate()?;

        Ok(Self {
            current: RwLock::new(Arc::new(list)),
        })
    }

    /// Get the current stream list
    pub async fn snapshot(&self) -> Arc<StreamList> {
        Arc::clone(&*self.current.read().await)
    }

    /// Replace the current stream list with a newly loaded one
    ///
    /// Returns the previous list. An invalid list is rejected and the
    /// current one stays in place.
    pub async fn replace(&self, list: StreamList) -> Result<Arc<StreamList>> {
        if let Err(err) = list.validate() {
            tracing::warn!(error = %err, "Rejected stream list reload");
            return Err(err);
        }

        let streams = list.len();
        let mut current = self.current.write().await;
        let previous = std::mem::replace(&mut *current, Arc::new(list));

        tracing::info!(
            streams = streams,
            previous_streams = previous.len(),
            "Stream list replaced"
        );

        Ok(previous)
    }
}
