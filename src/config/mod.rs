mod compile;
mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult, parse_config};
pub use model::{
    BodyConfig, CONFIG_VERSION, Config, LabelsConfig, LockfileConfig, MissingTestsConfig,
    SizeConfig, TopicConfig,
};
pub use validation::validate_config_semantics;
