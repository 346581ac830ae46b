//! Page lifecycle
//!
//! Resolution happens synchronously when the page is loaded so the data
//! configuration is settled before anything reads it. Link sync waits for
//! the document-ready signal, which fires once.

use crate::data_config::DataConfig;
use crate::dom::{DocumentAdapter, SyncReport, sync_document};
use crate::location::PageLocation;
use crate::source::{Defaults, Resolution, resolve};
use crate::storage::PreferenceStore;

#[derive(Debug)]
pub struct Page {
    location: PageLocation,
    resolution: Resolution,
    ready: bool,
}

impl Page {
    pub fn load(location: PageLocation, store: &dyn PreferenceStore, defaults: &Defaults) -> Self {
        let resolution = resolve(&location, store, defaults);
        Self {
            location,
            resolution,
            ready: false,
        }
    }

    pub fn location(&self) -> &PageLocation {
        &self.location
    }

    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    pub fn config(&self) -> &DataConfig {
        &self.resolution.config
    }

    /// Document-ready hook. Syncs the document the first time only.
    pub fn on_ready(&mut self, doc: &mut dyn DocumentAdapter) -> Option<SyncReport> {
        if self.ready {
            return None;
        }
        self.ready = true;
        Some(sync_document(doc, self.resolution.active(), &self.location))
    }
}
