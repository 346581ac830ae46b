//! Active source resolution
//!
//! Runs once per page load. Inputs are checked in order and the first
//! one that normalizes to a known key wins:
//!
//! 1. `?source=` query parameter
//! 2. persisted preference
//! 3. `local`
//!
//! Every read failure counts as "not provided", so resolution always
//! ends with a usable source.

use serde::Serialize;
use tracing::{debug, info};

use super::infer::infer_from_location;
use super::registry::normalize_source_key;
use super::{SourceDescriptor, SourceKey, Sources};
use crate::consts::{
    DEFAULT_DATA_BRANCH, DEFAULT_REPO_NAME, DEFAULT_REPO_OWNER, SOURCE_PARAM, STORAGE_KEY,
    UPSTREAM_OWNER, UPSTREAM_REPO_NAME,
};
use crate::data_config::DataConfig;
use crate::location::PageLocation;
use crate::storage::PreferenceStore;

/// Deployment-time identity, used when the page URL gives nothing to infer from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub repo_owner: String,
    pub repo_name: String,
    pub data_branch: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            repo_owner: DEFAULT_REPO_OWNER.to_string(),
            repo_name: DEFAULT_REPO_NAME.to_string(),
            data_branch: DEFAULT_DATA_BRANCH.to_string(),
        }
    }
}

/// Which input decided the active source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionOrigin {
    Query,
    Stored,
    Default,
}

#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    pub key: SourceKey,
    pub origin: ResolutionOrigin,
    pub sources: Sources,
    pub config: DataConfig,
}

impl Resolution {
    pub fn active(&self) -> &SourceDescriptor {
        self.sources.get(self.key)
    }
}

/// Where the host should navigate after a toggle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub key: SourceKey,
    pub href: String,
}

pub fn try_get_query_param(location: &PageLocation) -> Option<SourceKey> {
    let raw = location.query_param(SOURCE_PARAM);
    let key = normalize_source_key(raw.as_deref());
    if raw.is_some() && key.is_none() {
        debug!(value = ?raw, "ignoring unrecognized source query value");
    }
    key
}

pub fn try_get_stored_preference(store: &dyn PreferenceStore) -> Option<SourceKey> {
    match store.get(STORAGE_KEY) {
        Ok(raw) => {
            let key = normalize_source_key(raw.as_deref());
            if raw.is_some() && key.is_none() {
                debug!(value = ?raw, "ignoring unrecognized stored source");
            }
            key
        }
        Err(e) => {
            debug!(error = %e, "stored source unavailable");
            None
        }
    }
}

fn non_empty(value: &str) -> Option<&str> {
    Some(value).filter(|v| !v.is_empty())
}

/// Build the `local` descriptor: inferred identity, then configured
/// defaults, then upstream. Owner and name fall back independently.
pub fn resolve_local_source(location: &PageLocation, defaults: &Defaults) -> SourceDescriptor {
    let inferred = infer_from_location(location);
    let owner = inferred
        .owner
        .as_deref()
        .or_else(|| non_empty(&defaults.repo_owner))
        .unwrap_or(UPSTREAM_OWNER);
    let repo_name = inferred
        .repo_name
        .as_deref()
        .or_else(|| non_empty(&defaults.repo_name))
        .unwrap_or(UPSTREAM_REPO_NAME);
    SourceDescriptor::local(owner, repo_name)
}

pub fn resolve(
    location: &PageLocation,
    store: &dyn PreferenceStore,
    defaults: &Defaults,
) -> Resolution {
    let sources = Sources {
        local: resolve_local_source(location, defaults),
        upstream: SourceDescriptor::upstream(),
    };

    let (key, origin) = if let Some(key) = try_get_query_param(location) {
        (key, ResolutionOrigin::Query)
    } else if let Some(key) = try_get_stored_preference(store) {
        (key, ResolutionOrigin::Stored)
    } else {
        (SourceKey::default(), ResolutionOrigin::Default)
    };

    let branch = non_empty(&defaults.data_branch).unwrap_or(DEFAULT_DATA_BRANCH);
    let config = DataConfig::from_descriptor(sources.get(key), branch);
    debug!(
        source = %key,
        origin = ?origin,
        owner = %config.repo_owner,
        repo = %config.repo_name,
        "resolved data source"
    );

    Resolution {
        key,
        origin,
        sources,
        config,
    }
}

/// Flip the source, persist the choice and compute the reload target.
/// A storage write failure does not stop the navigation.
pub fn toggle(
    current: SourceKey,
    location: &PageLocation,
    store: &dyn PreferenceStore,
) -> Navigation {
    let next = current.flip();
    if let Err(e) = store.set(STORAGE_KEY, next.as_str()) {
        debug!(error = %e, "could not persist source preference");
    }
    let href = location
        .with_query_param(SOURCE_PARAM, next.as_str())
        .unwrap_or_else(|| location.href().to_string());
    info!(from = %current, to = %next, "switching data source");
    Navigation { key: next, href }
}
