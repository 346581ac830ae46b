//! Pick the GitHub repository a static site reads its data from.
//!
//! A deployment can read from its own fork ("local") or the upstream
//! repository. The choice comes from the `?source=` query parameter, then
//! the persisted preference, then defaults to `local`. The result is a
//! [`DataConfig`] that data-fetching code asks for URLs.

pub mod consts;
pub mod data_config;
pub mod dom;
pub mod error;
pub mod location;
pub mod page;
pub mod source;
pub mod storage;

pub use data_config::DataConfig;
pub use error::{AppError, StorageError};
pub use location::PageLocation;
pub use page::Page;
pub use source::{
    Defaults, Navigation, Resolution, ResolutionOrigin, SourceDescriptor, SourceKey, Sources,
    resolve, toggle,
};
pub use storage::{JsonFileStore, MemoryStore, PreferenceStore};
