//! File manager API operations

use log::{debug, info};
use reqwest::multipart::{Form, Part};
use std::path::Path;

use crate::config::api;
use crate::error::{QbeeError, Result};
use crate::qbee::{ItemList, QbeeClient};

use super::models::{join_path, CreateDirRequest, DeleteFileRequest, FileEntry};

impl QbeeClient {
    /// List a directory of the file manager
    pub async fn list_files(&self, dir: &str) -> Result<Vec<FileEntry>> {
        let path = format!("/{}?path={}", api::FILES, urlencoding::encode(dir));
        let list: ItemList<FileEntry> = self.get_json(&path).await?;
        debug!("Found {} entries in '{}'", list.items.len(), dir);
        Ok(list.items)
    }

    /// Upload a local file into `dest_dir`; returns the remote path
    pub async fn upload_file(&self, local: &Path, dest_dir: &str) -> Result<String> {
        let name = local
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                QbeeError::Validation(format!("'{}' is not a file path", local.display()))
            })?
            .to_string();

        let data = tokio::fs::read(local)
            .await
            .map_err(|e| QbeeError::Io(format!("Failed to read '{}': {}", local.display(), e)))?;
        let size = data.len();

        let form = Form::new()
            .text("path", dest_dir.to_string())
            .part("file", Part::bytes(data).file_name(name.clone()));

        let path = format!("/{}", api::FILE);
        self.post_multipart(&path, form).await?;

        let remote = join_path(dest_dir, &name);
        info!("Uploaded {} ({} bytes)", remote, size);
        Ok(remote)
    }

    /// Delete a file or an empty directory
    pub async fn delete_file(&self, file_path: &str) -> Result<()> {
        let path = format!("/{}", api::FILE);
        self.delete_json(&path, &DeleteFileRequest { path: file_path })
            .await?;
        info!("Deleted {}", file_path);
        Ok(())
    }

    /// Create directory `name` under `parent`
    pub async fn create_directory(&self, parent: &str, name: &str) -> Result<String> {
        if name.is_empty() || name.contains('/') {
            return Err(QbeeError::Validation(format!(
                "invalid directory name '{}'",
                name
            )));
        }

        let path = format!("/{}/{}", api::FILE, api::CREATEDIR);
        self.send_json_no_content(
            reqwest::Method::POST,
            &path,
            &CreateDirRequest { path: parent, name },
        )
        .await?;

        Ok(join_path(parent, name))
    }
}
