use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

// Grammar settings live next to the matcher that compiles them
use addrscan_matcher::GrammarDef;

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub matcher: GrammarDef,
    #[serde(default)]
    pub column: ColumnConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ColumnConfig {
    #[serde(default = "ColumnConfig::default_column")]
    pub default_column: String,
    #[serde(default)]
    pub prefix: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            default_column: Self::default_column(),
            prefix: String::new(),
        }
    }
}

impl ColumnConfig {
    fn default_column() -> String {
        "notes".to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

impl LoggingConfig {
    fn default_level() -> String {
        "info".to_string()
    }
}

const CONFIG_TEMPLATE: &str = r#"{
  "matcher": {
    "street_suffixes": [
      "Street", "St", "Avenue", "Ave", "Road", "Rd", "Boulevard", "Blvd",
      "Drive", "Dr", "Lane", "Ln", "Court", "Ct", "Place", "Pl", "Way",
      "Parkway", "Pkwy", "Circle", "Cir"
    ],
    "unit_designators": [
      "Apartment", "Apt", "Suite", "Ste", "Unit", "Floor", "Fl", "Room", "Rm"
    ]
  },
  "column": {
    "default_column": "notes",
    "prefix": ""
  },
  "logging": {
    "level": "info"
  }
}
"#;

impl Config {
    /// Default location: `~/addrscan/config.json`.
    pub fn default_path() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("addrscan")
            .join("config.json"))
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file {}: {e}", path.display())
        })?;
        let config: Self = serde_json::from_str(&content)?;
        debug!("Loaded config from {}", path.display());

        Ok(config)
    }

    /// Load the file at `path` (or the default location) when it exists,
    /// otherwise fall back to built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = path {
            return Self::load_from(path);
        }

        let config_path = Self::default_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            debug!("No config at {}, using defaults", config_path.display());
            Ok(Self::default())
        }
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("addrscan");

        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");
        Self::write_template(&config_path)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("🔧 Configuration options:");
        println!("   - matcher.street_suffixes: words that may end a street name");
        println!("   - matcher.unit_designators: words that introduce a unit number");
        println!("   - column.default_column: column read by 'addrscan apply'");
        println!("   - column.prefix: prefix for the extracted columns");
        println!("   - logging.level: log filter when RUST_LOG is unset");
        println!();
        Ok(())
    }

    /// Write the default template to `path`, refusing to overwrite.
    pub fn write_template(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                path.display()
            );
        }

        std::fs::write(path, CONFIG_TEMPLATE)?;
        Ok(())
    }
}
