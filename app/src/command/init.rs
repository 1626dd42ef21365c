use addrscan_config::Config;
use std::path::PathBuf;

/// Input parameters for the Init command strategy.
#[derive(Debug, Clone)]
pub struct InitInput {
    /// Where to write the config; `~/addrscan/config.json` when unset.
    pub path: Option<PathBuf>,
}

/// Strategy for initializing the configuration.
///
/// Writes the default template and refuses to overwrite an existing file.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = InitInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        match input.path {
            Some(path) => {
                Config::write_template(&path)?;
                println!("✅ Created config file at: {}", path.display());
                Ok(())
            }
            None => Config::create_config(),
        }
    }
}
