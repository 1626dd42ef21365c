use addrscan_matcher::{AddressColumns, AddressMatcher, GrammarDef};
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing::info;

/// Input parameters for the Extract command strategy.
#[derive(Debug, Clone)]
pub struct ExtractInput {
    pub grammar: GrammarDef,
    /// Text given on the command line; takes precedence over `file`.
    pub text: Option<String>,
    /// File to read; stdin when neither `text` nor `file` is set.
    pub file: Option<PathBuf>,
    /// Print only the first address as a fixed-shape object.
    pub first: bool,
}

/// Strategy for extracting addresses from a single block of text.
///
/// Prints a JSON array of records, or with `first` a single object whose
/// fields are all `null` when nothing matched.
#[derive(Debug, Clone, Copy)]
pub struct ExtractStrategy;

impl super::CommandStrategy for ExtractStrategy {
    type Input = ExtractInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let text = read_text(input.text, input.file.as_deref()).await?;
        let matcher = AddressMatcher::new(&input.grammar)?;

        let rendered = if input.first {
            let columns = AddressColumns::from(matcher.extract_first(&text));
            info!(matched = !columns.is_absent(), "Extracted first address");
            serde_json::to_string_pretty(&columns)?
        } else {
            let records = matcher.extract(&text);
            info!(count = records.len(), "Extracted addresses");
            serde_json::to_string_pretty(&records)?
        };

        println!("{rendered}");
        Ok(())
    }
}

async fn read_text(text: Option<String>, file: Option<&Path>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    if let Some(path) = file {
        return tokio::fs::read_to_string(path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()));
    }

    let mut buffer = String::new();
    tokio::io::stdin().read_to_string(&mut buffer).await?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    async fn test_inline_text_wins_over_file() {
        let text = read_text(
            Some("inline".to_string()),
            Some(Path::new("/definitely/not/here")),
        )
        .await
        .expect("inline text needs no file");
        assert_eq!(text, "inline");
    }

    #[tokio::test]
    async fn test_missing_file_names_path() {
        let err = read_text(None, Some(Path::new("/definitely/not/here.txt")))
            .await
            .err()
            .map(|e| e.to_string())
            .unwrap_or_default();
        assert!(err.contains("/definitely/not/here.txt"));
    }
}
