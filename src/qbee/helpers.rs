//! Helper functions shared by command handlers

use futures::future::join_all;
use indicatif::ProgressBar;
use log::debug;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::path::Path;

use crate::error::{QbeeError, Result};
use crate::qbee::Target;

/// Fetch data for multiple targets in parallel
///
/// The `fetcher` function is called for each target and should return
/// either the fetched data or an error tuple containing the target and error.
pub async fn fetch_for_targets<T, F, Fut>(
    targets: Vec<Target>,
    fetcher: F,
) -> Vec<std::result::Result<T, (Target, QbeeError)>>
where
    F: Fn(Target) -> Fut,
    Fut: Future<Output = std::result::Result<T, (Target, QbeeError)>>,
{
    let futures = targets.into_iter().map(fetcher);
    join_all(futures).await
}

/// Collect results from parallel target fetches
///
/// Returns a tuple of (successes, had_errors). Errors are printed to stderr,
/// respecting spinner suspension if a spinner is active.
pub fn collect_target_results<T>(
    results: Vec<std::result::Result<T, (Target, QbeeError)>>,
    spinner: &Option<ProgressBar>,
    resource_name: &str,
) -> (Vec<T>, bool) {
    let mut successes = Vec::new();
    let mut had_errors = false;

    for result in results {
        match result {
            Ok(data) => successes.push(data),
            Err((target, e)) => {
                had_errors = true;
                let msg = format!("Error fetching {} for {}:\n  {}\n", resource_name, target, e);
                if let Some(ref s) = spinner {
                    s.suspend(|| eprintln!("{}", msg));
                } else {
                    eprintln!("{}", msg);
                }
            }
        }
    }

    (successes, had_errors)
}

/// Read a JSON or YAML document into `T`
///
/// Files ending in `.yaml`/`.yml` are parsed as YAML, anything else as JSON.
pub fn load_payload<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| QbeeError::Io(format!("Failed to read '{}': {}", path.display(), e)))?;

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    debug!(
        "Loading {} payload from {}",
        if is_yaml { "YAML" } else { "JSON" },
        path.display()
    );

    if is_yaml {
        serde_yml::from_str(&content).map_err(|e| {
            QbeeError::Validation(format!("Invalid YAML in '{}': {}", path.display(), e))
        })
    } else {
        serde_json::from_str(&content).map_err(|e| {
            QbeeError::Validation(format!("Invalid JSON in '{}': {}", path.display(), e))
        })
    }
}

/// Log completion status to info log
pub fn log_completion(had_errors: bool) {
    if had_errors {
        log::info!("Completed with some errors");
    } else {
        log::info!("Completed successfully");
    }
}
