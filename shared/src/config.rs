use serde::Deserialize;

fn default_max_snippets() -> usize {
    crate::matcher::DEFAULT_MAX_SNIPPETS
}

fn default_upload_dir() -> String {
    "uploads".into()
}

fn default_port() -> u16 {
    8000
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default = "default_max_snippets")]
    pub max_snippets: usize,
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Settings {
    pub fn new() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::default())
            .build()?
            .try_deserialize()
    }
}
