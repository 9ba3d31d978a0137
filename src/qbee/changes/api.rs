//! Change and commit API operations

use log::{debug, info};
use serde::Serialize;

use crate::config::api;
use crate::error::Result;
use crate::qbee::QbeeClient;

use super::models::{Change, ChangeRequest, CommitRequest, CommitResult};

impl QbeeClient {
    /// Stage a configuration change
    pub async fn create_change<C>(&self, request: &ChangeRequest<'_, C>) -> Result<Change>
    where
        C: Serialize,
    {
        debug!(
            "Staging {} change '{}' for {}",
            if request.is_reset() { "reset" } else { "write" },
            request.formtype,
            request.target
        );

        let path = format!("/{}", api::CHANGE);
        let change: Change = self.post_json(&path, request).await?;

        debug!("Staged change {}", change.sha);
        Ok(change)
    }

    /// Commit every uncommitted change of the account
    ///
    /// This is account-wide: changes staged by other callers since their own
    /// commit are committed as well.
    pub async fn commit(&self, message: &str) -> Result<CommitResult> {
        let path = format!("/{}", api::COMMIT);
        let result: CommitResult = self.post_json(&path, &CommitRequest::new(message)).await?;

        if result.is_empty() {
            info!("Nothing to commit");
        } else {
            info!(
                "Committed {} change(s) as {}",
                result.changes.len(),
                result.sha.as_deref().unwrap_or("unknown")
            );
        }
        Ok(result)
    }

    /// List uncommitted changes of the account
    pub async fn list_uncommitted(&self) -> Result<Vec<Change>> {
        let path = format!("/{}", api::CHANGELIST);
        let changes: Vec<Change> = self.get_json(&path).await?;
        debug!("Found {} uncommitted change(s)", changes.len());
        Ok(changes)
    }

    /// Delete one uncommitted change by its content hash
    pub async fn delete_uncommitted(&self, sha: &str) -> Result<()> {
        let path = format!("/{}/{}", api::CHANGE, urlencoding::encode(sha));
        self.delete_path(&path).await?;
        debug!("Deleted uncommitted change {}", sha);
        Ok(())
    }

    /// Delete all uncommitted changes of the account
    pub async fn clear_uncommitted(&self) -> Result<()> {
        let path = format!("/{}", api::CHANGES);
        self.delete_path(&path).await?;
        info!("Cleared all uncommitted changes");
        Ok(())
    }
}
