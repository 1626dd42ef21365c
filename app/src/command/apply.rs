use addrscan_matcher::{AddressMatcher, ColumnApplier, GrammarDef, Row};
use std::path::PathBuf;
use tracing::info;

/// Input parameters for the Apply command strategy.
#[derive(Debug, Clone)]
pub struct ApplyInput {
    pub grammar: GrammarDef,
    /// JSON array of objects, or JSON Lines.
    pub input: PathBuf,
    /// Destination file; stdout when unset.
    pub output: Option<PathBuf>,
    pub column: String,
    pub prefix: String,
}

/// Strategy for extracting addresses from one column of a table.
///
/// The table is read whole, every cell of the column is matched (first
/// address only), and the six address columns are appended to each row.
/// Output keeps the input format.
#[derive(Debug, Clone, Copy)]
pub struct ApplyStrategy;

impl super::CommandStrategy for ApplyStrategy {
    type Input = ApplyInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let content = tokio::fs::read_to_string(&input.input)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", input.input.display()))?;
        let (mut rows, format) = parse_table(&content)?;
        info!(rows = rows.len(), column = %input.column, ?format, "Loaded table");

        let matcher = AddressMatcher::new(&input.grammar)?;
        let ApplyInput { column, prefix, .. } = input;
        let rows = tokio::task::spawn_blocking(move || {
            ColumnApplier::new(&matcher, column)
                .with_prefix(prefix)
                .apply(&mut rows)
                .map(|()| rows)
        })
        .await??;

        let rendered = render_table(&rows, format)?;
        match input.output {
            Some(path) => {
                tokio::fs::write(&path, rendered).await?;
                info!("Wrote {} rows to {}", rows.len(), path.display());
            }
            None => print!("{rendered}"),
        }

        Ok(())
    }
}

/// Layout of a table file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableFormat {
    JsonArray,
    JsonLines,
}

fn parse_table(content: &str) -> anyhow::Result<(Vec<Row>, TableFormat)> {
    if content.trim_start().starts_with('[') {
        let rows: Vec<Row> = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Expected a JSON array of objects: {e}"))?;
        return Ok((rows, TableFormat::JsonArray));
    }

    let rows = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str::<Row>(line)
                .map_err(|e| anyhow::anyhow!("line {}: expected a JSON object: {e}", index + 1))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok((rows, TableFormat::JsonLines))
}

fn render_table(rows: &[Row], format: TableFormat) -> anyhow::Result<String> {
    match format {
        TableFormat::JsonArray => Ok(serde_json::to_string_pretty(rows)? + "\n"),
        TableFormat::JsonLines => {
            let mut out = String::new();
            for row in rows {
                out.push_str(&serde_json::to_string(row)?);
                out.push('\n');
            }
            Ok(out)
        }
    }
}
