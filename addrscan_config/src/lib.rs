mod schema;

pub use schema::{ColumnConfig, Config, LoggingConfig};
