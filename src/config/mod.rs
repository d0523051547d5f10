mod loader;
mod model;

pub use loader::{ConfigLoader, DEFAULT_CONFIG_PATH, FileConfigLoader, FileSystem, RealFileSystem};
pub use model::Config;
