//! Local account bundles: passwords, users and SSH keys

use serde::{Deserialize, Serialize};

use super::{Bundle, BundleKind};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PasswordBundle {
    #[serde(default)]
    pub users: Vec<PasswordUser>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PasswordUser {
    pub username: String,
    /// crypt(3) formatted hash
    pub passwordhash: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct UsersBundle {
    #[serde(default)]
    pub items: Vec<UserItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserItem {
    pub username: String,
    pub action: UserAction,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserAction {
    Add,
    Remove,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct SshKeysBundle {
    #[serde(default)]
    pub users: Vec<SshKeyUser>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SshKeyUser {
    pub username: String,
    #[serde(default)]
    pub userkeys: Vec<String>,
}

impl Bundle for PasswordBundle {
    const KIND: BundleKind = BundleKind::Password;
}

impl Bundle for UsersBundle {
    const KIND: BundleKind = BundleKind::Users;
}

impl Bundle for SshKeysBundle {
    const KIND: BundleKind = BundleKind::SshKeys;
}
