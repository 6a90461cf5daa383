use std::{net::SocketAddr, path::PathBuf};

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub database_url: String,
    /// Prefix prepended to stored poster, photo and still paths.
    pub media_url: String,
    /// JSON catalog loaded into an empty database on startup.
    pub fixtures: Option<PathBuf>,
    /// Apply the list view's draft policy to slug lookups too.
    pub detail_hides_drafts: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 =
            std::env::var("PORT").unwrap_or_else(|_| "8000".to_string()).parse().context("PORT")?;

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://kinoteka.db?mode=rwc".to_string());

        let media_url = std::env::var("MEDIA_URL").unwrap_or_else(|_| "/media/".to_string());

        let fixtures = std::env::var("FIXTURES").ok().filter(|s| !s.is_empty()).map(PathBuf::from);

        let detail_hides_drafts = match std::env::var("DETAIL_HIDES_DRAFTS") {
            Ok(v) => parse_flag(&v).context("DETAIL_HIDES_DRAFTS")?,
            Err(_) => false,
        };

        Ok(Self {
            addr: format!("{host}:{port}").parse().context("HOST/PORT")?,
            database_url,
            media_url,
            fixtures,
            detail_hides_drafts,
        })
    }

    pub fn media(&self, path: &str) -> String {
        if path.is_empty() || path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.media_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

fn parse_flag(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("expected a boolean, got `{other}`"),
    }
}

#[cfg(test)]
impl Config {
    pub fn for_tests() -> Self {
        Self {
            addr: ([127, 0, 0, 1], 0).into(),
            database_url: "sqlite::memory:".to_string(),
            media_url: "/media/".to_string(),
            fixtures: None,
            detail_hides_drafts: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_paths_are_joined_once() {
        let config = Config::for_tests();
        assert_eq!(config.media("movies/matrix.jpg"), "/media/movies/matrix.jpg");
        assert_eq!(config.media("/actors/neo.png"), "/media/actors/neo.png");
        assert_eq!(config.media("https://cdn.example/x.jpg"), "https://cdn.example/x.jpg");
        assert_eq!(config.media(""), "");
    }

    #[test]
    fn flags_accept_common_spellings() {
        assert!(parse_flag("TRUE").unwrap());
        assert!(parse_flag(" on ").unwrap());
        assert!(!parse_flag("0").unwrap());
        assert!(parse_flag("maybe").is_err());
    }
}
