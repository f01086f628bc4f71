//! Template rendering by literal token replacement

use crate::error::Result;
use crate::types::FormulaDescriptor;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Placeholder for the formula class name
pub const FORMULA_TOKEN: &str = "_FORMULA_";
/// Placeholder for the archive checksum
pub const SHA_TOKEN: &str = "_SHA_";
/// Placeholder for the archive URL
pub const URL_TOKEN: &str = "_URL_";

/// Replace every occurrence of `token` in the file at `path`
///
/// A token that does not occur leaves the file untouched.
pub async fn replace_token(path: &Path, token: &str, value: &str) -> Result<()> {
    let contents = fs::read_to_string(path).await?;
    if !contents.contains(token) {
        debug!(token, path = %path.display(), "token not present");
        return Ok(());
    }
    fs::write(path, contents.replace(token, value)).await?;
    Ok(())
}

/// Copy the descriptor's template into `dir` and fill in its placeholders
pub async fn render_formula(descriptor: &FormulaDescriptor, dir: &Path) -> Result<PathBuf> {
    let output = dir.join(&descriptor.output);
    fs::copy(&descriptor.template, &output).await?;

    replace_token(&output, FORMULA_TOKEN, &descriptor.symbol).await?;
    replace_token(&output, SHA_TOKEN, &descriptor.sha256).await?;
    replace_token(&output, URL_TOKEN, &descriptor.url).await?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(template: PathBuf) -> FormulaDescriptor {
        FormulaDescriptor {
            template,
            output: "tuist@1.3.0.rb".to_string(),
            symbol: "TuistAT130".to_string(),
            sha256: "abc123".to_string(),
            url: "https://example.com/tuist.zip".to_string(),
        }
    }

    #[tokio::test]
    async fn test_replaces_all_tokens() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("tuist.rb");
        std::fs::write(
            &template,
            "class _FORMULA_ < Formula\n  url \"_URL_\"\n  sha256 \"_SHA_\"\nend\n",
        )
        .unwrap();

        let out = render_formula(&descriptor(template.clone()), dir.path())
            .await
            .unwrap();

        let rendered = std::fs::read_to_string(out).unwrap();
        insta::assert_snapshot!(rendered.trim_end(), @r#"
        class TuistAT130 < Formula
          url "https://example.com/tuist.zip"
          sha256 "abc123"
        end
        "#);
        // template itself is left alone
        assert!(std::fs::read_to_string(template).unwrap().contains(FORMULA_TOKEN));
    }

    #[tokio::test]
    async fn test_replaces_every_occurrence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f.rb");
        std::fs::write(&path, "_SHA_ and _SHA_").unwrap();

        replace_token(&path, SHA_TOKEN, "x").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "x and x");
    }

    #[tokio::test]
    async fn test_missing_token_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f.rb");
        std::fs::write(&path, "no placeholders here\n").unwrap();

        replace_token(&path, URL_TOKEN, "https://example.com").await.unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "no placeholders here\n"
        );
    }

    #[tokio::test]
    async fn test_missing_template_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = render_formula(&descriptor(dir.path().join("absent.rb")), dir.path()).await;
        assert!(result.is_err());
    }
}
