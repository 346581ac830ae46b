//! Resolved data location handed to data-fetching code

use serde::Serialize;

use crate::consts::RAW_CONTENT_BASE_URL;
use crate::source::{SourceDescriptor, SourceKey};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataConfig {
    pub repo_owner: String,
    pub repo_name: String,
    pub data_branch: String,
    pub active_source: SourceKey,
}

impl DataConfig {
    pub fn from_descriptor(source: &SourceDescriptor, data_branch: &str) -> Self {
        Self {
            repo_owner: source.owner.clone(),
            repo_name: source.repo_name.clone(),
            data_branch: data_branch.to_string(),
            active_source: source.key,
        }
    }

    /// Raw-content root of the data branch
    pub fn data_base_url(&self) -> String {
        format!(
            "{RAW_CONTENT_BASE_URL}/{}/{}/{}",
            self.repo_owner, self.repo_name, self.data_branch
        )
    }

    /// Full URL of a file on the data branch, e.g. `data/2025-01-01.jsonl`
    pub fn data_url(&self, relative_path: &str) -> String {
        format!("{}/{}", self.data_base_url(), relative_path)
    }
}
