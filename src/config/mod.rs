mod settings;

pub use settings::{
    ApiConfig, GeneratorConfig, LoggingConfig, OtelConfig, ServerConfig, Settings,
};
