pub mod builder;
pub mod loader;
pub mod types;
pub mod validator;

pub use builder::CheckerConfigBuilder;
pub use loader::{ConfigLoader, DefaultConfigLoader};
pub use types::{CheckerConfig, DEFAULT_ACCEPT, DEFAULT_DISAMBIGUATION_PREDICATE};
pub use validator::ConfigValidatorImpl;
