use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Credentials for the demo login flow in the app binary. Optional; the
    /// catalogue can still be requested without them (the service answers 401).
    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub password: Option<String>,
}

fn default_api_base_url() -> String {
    "https://anime-flix-db.herokuapp.com/".to_string()
}

impl Config {
    /// Read configuration from `ANIMEFLIX_`-prefixed environment variables.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed("ANIMEFLIX_").from_env::<Config>()
    }
}
