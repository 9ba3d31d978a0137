//! File manager data models

use serde::{Deserialize, Serialize};

/// A file or directory in the file manager
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct FileEntry {
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub is_dir: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Unix timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
}

impl FileEntry {
    pub fn kind(&self) -> &'static str {
        if self.is_dir {
            "dir"
        } else {
            "file"
        }
    }

    pub fn created_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.created
            .and_then(|ts| chrono::DateTime::from_timestamp(ts, 0))
    }
}

/// Body of `DELETE /file`
#[derive(Serialize, Debug)]
pub(crate) struct DeleteFileRequest<'a> {
    pub path: &'a str,
}

/// Body of `POST /file/createdir`
#[derive(Serialize, Debug)]
pub(crate) struct CreateDirRequest<'a> {
    pub path: &'a str,
    pub name: &'a str,
}

/// Join a file manager directory and a name
pub fn join_path(dir: &str, name: &str) -> String {
    format!("{}/{}", dir.trim_end_matches('/'), name.trim_start_matches('/'))
}
