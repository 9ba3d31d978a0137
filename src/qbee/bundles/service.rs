//! Generic write, reset and read of a bundle on a target

use log::{debug, info};

use crate::config::defaults;
use crate::error::Result;
use crate::qbee::changes::{stage_and_commit, AppliedChange, ChangeRequest};
use crate::qbee::{QbeeClient, Target};

use super::{Bundle, BundleEntry};

/// Default commit message for a bundle operation
pub fn commit_message(action: &str, form_type: &str, target: &Target) -> String {
    format!(
        "{}: {} {} for {}",
        defaults::COMMIT_MESSAGE_PREFIX,
        action,
        form_type,
        target
    )
}

impl QbeeClient {
    /// Replace bundle `B` on `target` and commit
    pub async fn write_bundle<B: Bundle>(
        &self,
        target: &Target,
        bundle: &B,
        extend: bool,
        message: &str,
    ) -> Result<AppliedChange> {
        debug!("Writing {} for {} (extend={})", B::FORM_TYPE, target, extend);

        let request = ChangeRequest::write(target, B::FORM_TYPE, bundle, extend);
        let applied = stage_and_commit(self, &request, message).await?;

        info!("Applied {} for {}", B::FORM_TYPE, target);
        Ok(applied)
    }

    /// Reset bundle `B` on `target` to what it inherits, and commit
    pub async fn clear_bundle<B: Bundle>(
        &self,
        target: &Target,
        message: &str,
    ) -> Result<AppliedChange> {
        debug!("Resetting {} for {}", B::FORM_TYPE, target);

        let request = ChangeRequest::<B>::reset(target, B::FORM_TYPE);
        let applied = stage_and_commit(self, &request, message).await?;

        info!("Reset {} for {}", B::FORM_TYPE, target);
        Ok(applied)
    }

    /// Read bundle `B` from the active configuration of `target`
    ///
    /// `Ok(None)` means the bundle is not configured there. Entries of other
    /// bundles are not decoded.
    pub async fn get_bundle<B: Bundle>(&self, target: &Target) -> Result<Option<BundleEntry<B>>> {
        let config = self.get_configuration(target).await?;
        B::select(&config.bundle_data)
    }
}
