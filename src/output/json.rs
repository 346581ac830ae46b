use serde_json::json;

use datasrc::source::RepoInfo;
use datasrc::{Navigation, Resolution};

pub(crate) fn resolution_json(resolution: &Resolution) -> String {
    let value = json!({
        "active_source": resolution.key,
        "origin": resolution.origin,
        "repo_owner": resolution.config.repo_owner,
        "repo_name": resolution.config.repo_name,
        "data_branch": resolution.config.data_branch,
        "data_base_url": resolution.config.data_base_url(),
        "repo_url": resolution.active().repo_url(),
        "sources": resolution.sources,
    });
    serde_json::to_string_pretty(&value).unwrap_or_default()
}

pub(crate) fn infer_json(href: &str, info: &RepoInfo) -> String {
    let value = json!({
        "page": href,
        "owner": info.owner,
        "repo_name": info.repo_name,
    });
    serde_json::to_string_pretty(&value).unwrap_or_default()
}

pub(crate) fn data_url_json(resolution: &Resolution, path: &str) -> String {
    let value = json!({
        "active_source": resolution.key,
        "path": path,
        "url": resolution.config.data_url(path),
    });
    serde_json::to_string_pretty(&value).unwrap_or_default()
}

pub(crate) fn navigation_json(nav: &Navigation) -> String {
    serde_json::to_string_pretty(nav).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use datasrc::{Defaults, MemoryStore, PageLocation, resolve};
    use serde_json::Value;

    #[test]
    fn resolution_json_fields() {
        let loc = PageLocation::new("https://alice.github.io/myrepo/index.html");
        let r = resolve(&loc, &MemoryStore::new(), &Defaults::default());
        let v: Value = serde_json::from_str(&resolution_json(&r)).unwrap();
        assert_eq!(v["active_source"], "local");
        assert_eq!(v["origin"], "default");
        assert_eq!(v["repo_owner"], "alice");
        assert_eq!(v["repo_url"], "https://github.com/alice/myrepo");
        assert_eq!(v["sources"]["upstream"]["label"], "Upstream");
    }

    #[test]
    fn infer_json_nulls_when_not_pages() {
        let v: Value =
            serde_json::from_str(&infer_json("http://localhost/", &RepoInfo::default())).unwrap();
        assert!(v["owner"].is_null());
        assert!(v["repo_name"].is_null());
    }
}
