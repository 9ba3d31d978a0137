//! User confirmation prompts for destructive operations

use dialoguer::Confirm;

use crate::error::{QbeeError, Result};

/// Ask the user to confirm `prompt`
///
/// `yes` skips the prompt. In batch mode nothing can be asked, so the
/// operation is refused unless `yes` was given.
pub fn confirm_action(prompt: &str, yes: bool, batch: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    if batch {
        return Err(QbeeError::Validation(format!(
            "{} Refusing in batch mode; pass --yes to confirm",
            prompt
        )));
    }

    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| QbeeError::Io(format!("Failed to read confirmation: {}", e)))
}
