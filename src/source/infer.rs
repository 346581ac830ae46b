//! Repository inference from the hosting environment
//!
//! GitHub Pages serves `https://<owner>.github.io/<repo>/` for project
//! sites and `https://<owner>.github.io/` for the user site, whose
//! repository is named `<owner>.github.io`.

use serde::Serialize;

use crate::location::PageLocation;

/// Owner and repository name derived from a page URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepoInfo {
    pub owner: Option<String>,
    pub repo_name: Option<String>,
}

pub fn infer_repo_info(hostname: &str, path: &str) -> RepoInfo {
    let host_parts: Vec<&str> = hostname.split('.').collect();
    let is_pages_host =
        host_parts.len() >= 3 && host_parts[1] == "github" && host_parts[2] == "io";
    if !is_pages_host {
        return RepoInfo::default();
    }

    let owner = Some(host_parts[0]).filter(|o| !o.is_empty());
    let repo_name = match path.split('/').find(|segment| !segment.is_empty()) {
        Some(segment) => Some(segment.to_string()),
        None => owner.map(|o| format!("{o}.github.io")),
    };

    RepoInfo {
        owner: owner.map(str::to_string),
        repo_name,
    }
}

pub fn infer_from_location(location: &PageLocation) -> RepoInfo {
    infer_repo_info(location.hostname(), location.pathname())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(owner: &str, repo: &str) -> RepoInfo {
        RepoInfo {
            owner: Some(owner.to_string()),
            repo_name: Some(repo.to_string()),
        }
    }

    #[test]
    fn user_site_defaults_repo_name() {
        assert_eq!(
            infer_repo_info("alice.github.io", ""),
            info("alice", "alice.github.io")
        );
        assert_eq!(
            infer_repo_info("bob.github.io", "/"),
            info("bob", "bob.github.io")
        );
    }

    #[test]
    fn project_site_uses_first_segment() {
        assert_eq!(
            infer_repo_info("alice.github.io", "/myrepo/index.html"),
            info("alice", "myrepo")
        );
        assert_eq!(
            infer_repo_info("alice.github.io", "//myrepo//deep/page.html"),
            info("alice", "myrepo")
        );
    }

    #[test]
    fn other_hosts_yield_nothing() {
        for host in ["localhost", "example.com", "github.io", "alice.gitlab.io", ""] {
            assert_eq!(infer_repo_info(host, "/myrepo/"), RepoInfo::default(), "{host}");
        }
    }

    #[test]
    fn suffix_labels_must_match_exactly() {
        assert_eq!(
            infer_repo_info("alice.GitHub.io", "/r"),
            RepoInfo::default()
        );
        assert_eq!(
            infer_repo_info("alice.github.iox", "/r"),
            RepoInfo::default()
        );
    }

    #[test]
    fn extra_trailing_labels_still_match() {
        // only labels 2 and 3 are checked
        assert_eq!(
            infer_repo_info("alice.github.io.mirror.net", "/r/"),
            info("alice", "r")
        );
    }

    #[test]
    fn empty_owner_label_still_reads_path() {
        assert_eq!(
            infer_repo_info(".github.io", "/r"),
            RepoInfo {
                owner: None,
                repo_name: Some("r".to_string()),
            }
        );
        assert_eq!(infer_repo_info(".github.io", "/"), RepoInfo::default());
    }

    #[test]
    fn from_location() {
        let loc = PageLocation::new("https://alice.github.io/myrepo/index.html?source=main");
        assert_eq!(infer_from_location(&loc), info("alice", "myrepo"));

        let loc = PageLocation::new("http://localhost:8000/index.html");
        assert_eq!(infer_from_location(&loc), RepoInfo::default());
    }
}
