use serde::Deserialize;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub feed: FeedSettings,
    pub search: SearchSettings,
}

#[derive(Deserialize, Clone)]
pub struct FeedSettings {
    /// Base URL of the content feed, e.g. "https://example.org/next-data"
    pub base_url: String,
}

#[derive(Deserialize, Clone)]
pub struct SearchSettings {
    /// Endpoint of the hosted search index deployment
    pub endpoint: String,
    pub api_key: String,
}

pub fn read_config() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let config_directory = base_path.join("config");

    let settings = config::Config::builder()
        .add_source(config::File::from(config_directory.join("base.yaml")).required(false))
        .add_source(
            config::Environment::with_prefix("SITESEARCH")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
