//! Test data factories

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::Path;
use tap_release::config::ReleaseConfig;
use tap_release::types::PullRequest;

/// Tag listing as printed by `git ls-remote --tags`
pub const TAG_LISTING: &str = "\
1111111111111111111111111111111111111111\trefs/tags/1.2.3
2222222222222222222222222222222222222222\trefs/tags/1.3.0
";

/// Configuration with only the required variables set
pub fn make_config() -> ReleaseConfig {
    make_config_with(&[])
}

/// Configuration with required variables plus `extra`
pub fn make_config_with(extra: &[(&str, &str)]) -> ReleaseConfig {
    let mut vars: HashMap<String, String> = HashMap::from([
        ("TARGET_REPO_NAME".to_string(), "tuist/homebrew-tuist".to_string()),
        ("GITHUB_ACCESS_TOKEN".to_string(), "ghp_test".to_string()),
        ("TUIST_GIT_EMAIL".to_string(), "bot@tuist.io".to_string()),
        ("GITHUB_REPOSITORY_OWNER".to_string(), "tuist".to_string()),
    ]);
    for (k, v) in extra {
        vars.insert((*k).to_string(), (*v).to_string());
    }
    ReleaseConfig::from_lookup(|name| vars.get(name).cloned()).unwrap()
}

/// Write the shipped templates into `<checkout>/templates`
pub fn install_templates(checkout: &Path) {
    let src = Path::new(env!("CARGO_MANIFEST_DIR")).join("templates");
    let dest = checkout.join("templates");
    std::fs::create_dir_all(&dest).unwrap();
    for name in ["tuist.rb", "tuistenv.rb"] {
        std::fs::copy(src.join(name), dest.join(name)).unwrap();
    }
}

/// An open PR
pub fn make_pr(number: u64, head: &str) -> PullRequest {
    PullRequest {
        number,
        html_url: format!("https://github.com/tuist/homebrew-tuist/pull/{number}"),
        base_ref: "main".to_string(),
        head_ref: head.to_string(),
        title: format!("PR for {head}"),
    }
}
