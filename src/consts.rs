/// Query parameter that selects a source for the current page load
pub const SOURCE_PARAM: &str = "source";

/// Local storage key holding the persisted source preference
pub const STORAGE_KEY: &str = "arxiv_data_source";

/// Branch that carries the JSON-lines data files
pub const DEFAULT_DATA_BRANCH: &str = "data";

/// Fallback identity used when the hosting environment gives nothing to infer from.
/// Deployments substitute these through the config file or CLI flags.
pub const DEFAULT_REPO_OWNER: &str = "dw-dengwei";
pub const DEFAULT_REPO_NAME: &str = "daily-arXiv-ai-enhanced";

pub const UPSTREAM_OWNER: &str = "dw-dengwei";
pub const UPSTREAM_REPO_NAME: &str = "daily-arXiv-ai-enhanced";

pub const GITHUB_BASE_URL: &str = "https://github.com";
pub const RAW_CONTENT_BASE_URL: &str = "https://raw.githubusercontent.com";

/// Element id of the optional source toggle control
pub const TOGGLE_ELEMENT_ID: &str = "dataSourceToggle";

/// Sibling pages whose links carry the `source` parameter forward
pub const INTERNAL_PAGES: &[&str] = &["index.html", "statistic.html", "settings.html"];
