use addrscan_config::Config;
use addrscan_matcher::AddressMatcher;
use std::path::PathBuf;
use tracing::info;

/// Input parameters for the Info command strategy.
#[derive(Debug, Clone)]
pub struct InfoInput {
    pub config: Config,
    /// File the config came from, if any.
    pub source: Option<PathBuf>,
}

/// Strategy for displaying the effective configuration.
///
/// This strategy outputs:
/// - Where the configuration was loaded from
/// - Roadway types and unit designators, and whether they compile
/// - Column defaults for `apply`
/// - Logging level
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = InfoInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = input.config;

        println!("=== addrscan Configuration ===\n");

        println!("Source:");
        match input.source {
            Some(path) => println!("  {}", path.display()),
            None => println!("  (built-in defaults)"),
        }
        println!();

        println!("Matcher:");
        println!(
            "  Street Suffixes: {}",
            truncate(&config.matcher.street_suffixes.join(", "), 70)
        );
        println!(
            "  Unit Designators: {}",
            truncate(&config.matcher.unit_designators.join(", "), 70)
        );

        info!("Compiling address grammar");
        match AddressMatcher::new(&config.matcher) {
            Ok(matcher) => {
                println!("  Grammar: OK ({} byte pattern)", matcher.pattern().len());
            }
            Err(e) => {
                println!("  Grammar: invalid");
                println!("  Error: {e}");
            }
        }
        println!();

        println!("Column:");
        println!("  Default Column: {}", config.column.default_column);
        if config.column.prefix.is_empty() {
            println!("  Prefix: (none)");
        } else {
            println!("  Prefix: {}", config.column.prefix);
        }
        println!();

        println!("Logging:");
        println!("  Level: {}", config.logging.level);

        Ok(())
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Street, St", 70), "Street, St");
        assert_eq!(truncate("abcdefghij", 6), "abc...");
    }
}
