//! Keep page links and the toggle control in line with the active source
//!
//! Each step stands alone, can be re-run with the same inputs without
//! changing the result, and does nothing when its elements are absent.

use serde::Serialize;
use tracing::debug;

use super::{DocumentAdapter, ElementHandle, Selector};
use crate::consts::{INTERNAL_PAGES, SOURCE_PARAM, TOGGLE_ELEMENT_ID};
use crate::location::{PageLocation, path_and_query, set_query_param};
use crate::source::resolver::{Navigation, toggle};
use crate::source::{SourceDescriptor, SourceKey};
use crate::storage::PreferenceStore;

const REPO_BUTTON_CLASS: &str = "github-button";
const FOOTER_REPO_PREFIX: &str = "https://github.com/";
const TOGGLE_VALUE_CLASS: &str = "data-source-value";

/// Point repository buttons and footer GitHub links at the active repository
pub fn update_repo_links(doc: &mut dyn DocumentAdapter, source: &SourceDescriptor) -> usize {
    let repo_url = source.repo_url();
    let mut links = doc.find_by_selector(&Selector::AnchorWithClass(REPO_BUTTON_CLASS));
    links.extend(doc.find_by_selector(&Selector::AnchorWithHrefPrefixIn {
        ancestor: "footer",
        prefix: FOOTER_REPO_PREFIX,
    }));
    links.sort_by_key(|link| link.0);
    links.dedup();
    for link in &links {
        doc.set_attribute(*link, "href", &repo_url);
    }
    links.len()
}

/// Carry `?source=` on links to sibling pages
pub fn update_internal_links(
    doc: &mut dyn DocumentAdapter,
    key: SourceKey,
    location: &PageLocation,
) -> usize {
    let mut rewritten = 0;
    for page in INTERNAL_PAGES {
        for link in doc.find_by_selector(&Selector::AnchorWithHref(page)) {
            let Some(href) = doc.attribute(link, "href") else {
                continue;
            };
            let Some(mut url) = location.join(&href) else {
                debug!(href = %href, "skipping link that does not resolve");
                continue;
            };
            set_query_param(&mut url, SOURCE_PARAM, key.as_str());
            doc.set_attribute(link, "href", &path_and_query(&url));
            rewritten += 1;
        }
    }
    rewritten
}

/// Label shown for `key`: the per-source data attribute when set, else `fallback`
pub fn toggle_label(
    doc: &dyn DocumentAdapter,
    toggle: ElementHandle,
    key: SourceKey,
    fallback: &str,
) -> String {
    let attribute = match key {
        SourceKey::Local => "data-label-local",
        SourceKey::Upstream => "data-label-upstream",
    };
    doc.attribute(toggle, attribute)
        .filter(|label| !label.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

pub fn update_toggle(
    doc: &mut dyn DocumentAdapter,
    toggle: ElementHandle,
    source: &SourceDescriptor,
) {
    let label = toggle_label(doc, toggle, source.key, &source.label);
    match doc.find_descendant_by_class(toggle, TOGGLE_VALUE_CLASS) {
        Some(value) => doc.set_text(value, &label),
        None => doc.set_text(toggle, &format!("Source: {label}")),
    }
    doc.set_attribute(toggle, "data-source", source.key.as_str());
}

/// A toggle control wired to the source that was active when it was synced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleBinding {
    pub element: ElementHandle,
    pub current: SourceKey,
}

impl ToggleBinding {
    /// Run on activation: persist the other source and return the reload target
    pub fn activate(&self, location: &PageLocation, store: &dyn PreferenceStore) -> Navigation {
        toggle(self.current, location, store)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SyncReport {
    pub repo_links: usize,
    pub internal_links: usize,
    #[serde(skip)]
    pub toggle: Option<ToggleBinding>,
}

pub fn sync_document(
    doc: &mut dyn DocumentAdapter,
    active: &SourceDescriptor,
    location: &PageLocation,
) -> SyncReport {
    let repo_links = update_repo_links(doc, active);
    let internal_links = update_internal_links(doc, active.key, location);

    let toggle = doc.find_by_id(TOGGLE_ELEMENT_ID).map(|element| {
        update_toggle(doc, element, active);
        ToggleBinding {
            element,
            current: active.key,
        }
    });

    debug!(repo_links, internal_links, toggle = toggle.is_some(), "synced document");
    SyncReport {
        repo_links,
        internal_links,
        toggle,
    }
}
