//! Data source model
//!
//! A page reads its data from one of two GitHub repositories: the
//! deployment's own ("local") or the fixed upstream one.

pub mod infer;
pub mod registry;
pub mod resolver;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::consts::{GITHUB_BASE_URL, UPSTREAM_OWNER, UPSTREAM_REPO_NAME};
use crate::error::AppError;

pub use infer::{RepoInfo, infer_from_location, infer_repo_info};
pub use registry::normalize_source_key;
pub use resolver::{
    Defaults, Navigation, Resolution, ResolutionOrigin, resolve, toggle, try_get_query_param,
    try_get_stored_preference,
};

/// Which of the two sources is meant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKey {
    #[default]
    Local,
    Upstream,
}

impl SourceKey {
    pub const ALL: [SourceKey; 2] = [SourceKey::Local, SourceKey::Upstream];

    pub fn as_str(self) -> &'static str {
        match self {
            SourceKey::Local => "local",
            SourceKey::Upstream => "upstream",
        }
    }

    /// The other source
    pub fn flip(self) -> Self {
        match self {
            SourceKey::Local => SourceKey::Upstream,
            SourceKey::Upstream => SourceKey::Local,
        }
    }
}

impl fmt::Display for SourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize_source_key(Some(s)).ok_or_else(|| AppError::UnknownSource {
            input: s.to_string(),
        })
    }
}

/// Identity of one data source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceDescriptor {
    pub key: SourceKey,
    pub owner: String,
    pub repo_name: String,
    pub label: String,
}

impl SourceDescriptor {
    pub fn upstream() -> Self {
        Self {
            key: SourceKey::Upstream,
            owner: UPSTREAM_OWNER.to_string(),
            repo_name: UPSTREAM_REPO_NAME.to_string(),
            label: "Upstream".to_string(),
        }
    }

    pub fn local(owner: impl Into<String>, repo_name: impl Into<String>) -> Self {
        Self {
            key: SourceKey::Local,
            owner: owner.into(),
            repo_name: repo_name.into(),
            label: "Local".to_string(),
        }
    }

    /// Repository page on GitHub
    pub fn repo_url(&self) -> String {
        format!("{GITHUB_BASE_URL}/{}/{}", self.owner, self.repo_name)
    }
}

/// Both descriptors for one environment snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sources {
    pub local: SourceDescriptor,
    pub upstream: SourceDescriptor,
}

impl Sources {
    pub fn get(&self, key: SourceKey) -> &SourceDescriptor {
        match key {
            SourceKey::Local => &self.local,
            SourceKey::Upstream => &self.upstream,
        }
    }
}
