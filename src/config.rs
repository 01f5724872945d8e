use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub http: HttpConfig,
    pub ui: UiConfig,
}

/// Where the datasets come from. Each entry is an `http(s)://` URL or a local path.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DataConfig {
    pub reviews: String,
    pub locations: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_seconds: u64,
    pub user_agent: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub default_max_reviews: usize,
    pub max_reviews_limit: usize,
    pub window_width: f64,
    pub window_height: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            http: HttpConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            reviews: "https://github.com/melody-10/Proyecto_Hoteles_California/blob/main/final_database.csv?raw=true".into(),
            locations: vec![
                "https://raw.githubusercontent.com/melody-10/Proyecto_Hoteles_California/main/hotels_ca.csv".into(),
                "https://raw.githubusercontent.com/melody-10/Proyecto_Hoteles_California/main/BBDD_BI.csv".into(),
            ],
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: concat!("hotelradar/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_max_reviews: 5,
            max_reviews_limit: 20,
            window_width: 1200.0,
            window_height: 800.0,
        }
    }
}

impl UiConfig {
    /// Upper bound of the review-count slider, never below 1.
    pub fn review_limit(&self) -> usize {
        self.max_reviews_limit.max(1)
    }

    /// Initial slider position, kept inside `1..=review_limit()`.
    pub fn initial_reviews(&self) -> usize {
        self.default_max_reviews.clamp(1, self.review_limit())
    }
}

impl Config {
    /// Load config from a TOML file. Falls back to defaults if file doesn't exist.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!("Config file {} not found, using defaults", path.display());
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(config) => {
                    tracing::info!("Config loaded from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {e}, using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let config = Config::load("definitely/not/here/config.toml");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = Config::parse(
            r#"
            [data]
            reviews = "data/reviews.csv"

            [ui]
            max_reviews_limit = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.data.reviews, "data/reviews.csv");
        assert_eq!(config.data.locations, DataConfig::default().locations);
        assert_eq!(config.ui.max_reviews_limit, 10);
        assert_eq!(config.ui.default_max_reviews, 5);
        assert_eq!(config.http, HttpConfig::default());
    }

    #[test]
    fn empty_location_list_is_allowed() {
        let config = Config::parse("[data]\nlocations = []\n").unwrap();
        assert!(config.data.locations.is_empty());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::parse("[ui\nmax_reviews_limit = ").is_err());
    }

    #[test]
    fn slider_bounds_are_sane() {
        let ui = UiConfig {
            default_max_reviews: 50,
            max_reviews_limit: 0,
            ..UiConfig::default()
        };
        assert_eq!(ui.review_limit(), 1);
        assert_eq!(ui.initial_reviews(), 1);

        let ui = UiConfig::default();
        assert_eq!(ui.review_limit(), 20);
        assert_eq!(ui.initial_reviews(), 5);
    }
}
