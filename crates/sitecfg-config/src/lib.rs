pub mod discovery;
pub mod environment;
pub mod error;
pub mod plugin;
pub mod resolver;
pub mod settings;
pub mod table;
pub mod validation;

// Re-export main types
pub use environment::*;
pub use error::*;
pub use plugin::*;
pub use resolver::*;
pub use settings::*;
pub use table::ModeTable;

// Re-export discovery and validation
pub use discovery::{discover, ConfigDiscovery};
pub use validation::{
    validate_base_path, validate_output_dir, validate_settings, ConfigValidator, SchemaValidator,
};
