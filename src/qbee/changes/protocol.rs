//! Stage, commit and roll back
//!
//! Every configuration write goes through [`stage_and_commit`]: the change is
//! staged, all pending changes are committed, and if the commit fails the
//! staged change is deleted again so it does not linger in the change list.
//!
//! Commit is account-wide. If two callers stage changes concurrently, the
//! first commit applies both. That is how the API behaves and it is kept.

use log::{debug, warn};
use serde::Serialize;

use crate::error::{QbeeError, Result};
use crate::qbee::QbeeClient;

use super::models::{AppliedChange, Change, ChangeRequest, CommitResult};

/// The three calls the write protocol is built from
#[allow(async_fn_in_trait)]
pub trait ChangeProtocol {
    async fn create_change<C>(&self, request: &ChangeRequest<'_, C>) -> Result<Change>
    where
        C: Serialize;

    async fn commit(&self, message: &str) -> Result<CommitResult>;

    async fn delete_uncommitted(&self, sha: &str) -> Result<()>;
}

impl ChangeProtocol for QbeeClient {
    async fn create_change<C>(&self, request: &ChangeRequest<'_, C>) -> Result<Change>
    where
        C: Serialize,
    {
        QbeeClient::create_change(self, request).await
    }

    async fn commit(&self, message: &str) -> Result<CommitResult> {
        QbeeClient::commit(self, message).await
    }

    async fn delete_uncommitted(&self, sha: &str) -> Result<()> {
        QbeeClient::delete_uncommitted(self, sha).await
    }
}

/// Stage `request`, commit, and roll the staged change back if the commit fails
///
/// Rollback is attempted exactly once. Its failure is attached to the
/// returned `QbeeError::Commit` and never replaces the commit error.
pub async fn stage_and_commit<P, C>(
    protocol: &P,
    request: &ChangeRequest<'_, C>,
    message: &str,
) -> Result<AppliedChange>
where
    P: ChangeProtocol + ?Sized,
    C: Serialize,
{
    let change = protocol.create_change(request).await?;

    match protocol.commit(message).await {
        Ok(commit) => Ok(AppliedChange { change, commit }),
        Err(commit_err) => {
            warn!(
                "Commit failed, removing staged change {}: {}",
                change.sha, commit_err
            );

            let rollback = match protocol.delete_uncommitted(&change.sha).await {
                Ok(()) => {
                    debug!("Rolled back staged change {}", change.sha);
                    None
                }
                Err(rollback_err) => {
                    warn!(
                        "Could not roll back staged change {}: {}",
                        change.sha, rollback_err
                    );
                    Some(Box::new(rollback_err))
                }
            };

            Err(QbeeError::Commit {
                sha: change.sha,
                commit: Box::new(commit_err),
                rollback,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qbee::Target;
    use std::sync::Mutex;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Serialize, Debug)]
    struct Empty {}

    fn failure(message: &str) -> QbeeError {
        QbeeError::Api {
            method: "POST".to_string(),
            path: "/test".to_string(),
            status: 500,
            code: None,
            message: message.to_string(),
        }
    }

    /// In-memory protocol that records every call
    #[derive(Default)]
    struct RecordingProtocol {
        stage_error: Option<&'static str>,
        commit_error: Option<&'static str>,
        rollback_error: Option<&'static str>,
        calls: Mutex<Vec<String>>,
    }

    impl RecordingProtocol {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl ChangeProtocol for RecordingProtocol {
        async fn create_change<C>(&self, request: &ChangeRequest<'_, C>) -> Result<Change>
        where
            C: Serialize,
        {
            self.calls
                .lock()
                .unwrap()
                .push(format!("create:{}", request.formtype));
            if let Some(msg) = self.stage_error {
                return Err(failure(msg));
            }
            Ok(Change {
                id: None,
                sha: "abc123".to_string(),
                status: None,
                created: None,
                content: None,
            })
        }

        async fn commit(&self, message: &str) -> Result<CommitResult> {
            self.calls.lock().unwrap().push(format!("commit:{}", message));
            match self.commit_error {
                Some(msg) => Err(failure(msg)),
                None => Ok(CommitResult {
                    sha: Some("c0ffee".to_string()),
                    changes: vec!["abc123".to_string()],
                    ..Default::default()
                }),
            }
        }

        async fn delete_uncommitted(&self, sha: &str) -> Result<()> {
            self.calls.lock().unwrap().push(format!("delete:{}", sha));
            match self.rollback_error {
                Some(msg) => Err(failure(msg)),
                None => Ok(()),
            }
        }
    }

    fn request(target: &Target) -> ChangeRequest<'_, Empty> {
        ChangeRequest::reset(target, "firewall")
    }

    #[tokio::test]
    async fn test_success_does_not_roll_back() {
        let protocol = RecordingProtocol::default();
        let target = Target::Tag("t1".to_string());

        let applied = stage_and_commit(&protocol, &request(&target), "msg")
            .await
            .unwrap();

        assert_eq!(applied.change.sha, "abc123");
        assert_eq!(applied.commit.sha.as_deref(), Some("c0ffee"));
        assert_eq!(protocol.calls(), vec!["create:firewall", "commit:msg"]);
    }

    #[tokio::test]
    async fn test_stage_failure_skips_commit() {
        let protocol = RecordingProtocol {
            stage_error: Some("bad payload"),
            ..Default::default()
        };
        let target = Target::Tag("t1".to_string());

        let err = stage_and_commit(&protocol, &request(&target), "msg")
            .await
            .unwrap_err();

        assert!(matches!(err, QbeeError::Api { .. }));
        assert_eq!(protocol.calls(), vec!["create:firewall"]);
    }

    #[tokio::test]
    async fn test_commit_failure_rolls_back_once_with_staged_sha() {
        let protocol = RecordingProtocol {
            commit_error: Some("network timeout"),
            ..Default::default()
        };
        let target = Target::Tag("t1".to_string());

        let err = stage_and_commit(&protocol, &request(&target), "msg")
            .await
            .unwrap_err();

        assert_eq!(
            protocol.calls(),
            vec!["create:firewall", "commit:msg", "delete:abc123"]
        );
        match err {
            QbeeError::Commit { sha, rollback, .. } => {
                assert_eq!(sha, "abc123");
                assert!(rollback.is_none());
            }
            other => panic!("Expected QbeeError::Commit, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_commit_and_rollback_failure_reports_both() {
        let protocol = RecordingProtocol {
            commit_error: Some("network timeout"),
            rollback_error: Some("not found"),
            ..Default::default()
        };
        let target = Target::Tag("t1".to_string());

        let err = stage_and_commit(&protocol, &request(&target), "msg")
            .await
            .unwrap_err();

        let text = err.to_string();
        assert!(text.contains("network timeout"));
        assert!(text.contains("not found"));
        assert_eq!(
            protocol
                .calls()
                .iter()
                .filter(|c| c.starts_with("delete:"))
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn test_rollback_over_http() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/change"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "sha": "abc123"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/commit"))
            .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
                "error": {"code": 500, "message": "network timeout"}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/change/abc123"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "error": {"code": 404, "message": "not found"}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = QbeeClient::test_client(&mock_server.uri());
        let target = Target::Tag("t1".to_string());

        let err = stage_and_commit(&client, &request(&target), "msg")
            .await
            .unwrap_err();

        let text = err.to_string();
        assert!(text.contains("network timeout"));
        assert!(text.contains("not found"));
        assert!(text.contains("abc123"));
    }
}
