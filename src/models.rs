use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::{
    entities::{actor, category, genre, movie, movie_shot},
    thread::ReviewThread,
};

/// Letters, digits, `-` and `_` only.
pub fn valid_slug(slug: &str) -> Result<(), ValidationError> {
    if !slug.is_empty() && slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        Ok(())
    } else {
        Err(ValidationError::new("slug")
            .with_message("may only contain letters, numbers, hyphens and underscores".into()))
    }
}

fn valid_ip(ip: &str) -> Result<(), ValidationError> {
    ip.parse::<std::net::IpAddr>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("ip").with_message("not an IP address".into()))
}

/// Shared shape of categories and genres.
#[derive(Clone, Debug, Deserialize, Validate)]
pub struct NewLookup {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(length(max = 160), custom(function = "valid_slug"))]
    pub url: String,
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct NewActor {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub age: i16,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct NewMovie {
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub tagline: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub poster: String,
    #[serde(default = "default_year")]
    #[validate(range(min = 0))]
    pub year: i32,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub country: String,
    #[serde(default = "today")]
    pub world_premiere: Date,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub budget: i64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub fees_in_usa: i64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub fees_in_world: i64,
    pub category_id: Option<i32>,
    #[validate(length(max = 160), custom(function = "valid_slug"))]
    pub url: String,
    #[serde(default)]
    pub draft: bool,
}

fn default_year() -> i32 {
    2000
}

fn today() -> Date {
    jiff::Zoned::now().date()
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct NewShot {
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub image: String,
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct NewReview {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 5000))]
    pub text: String,
    pub parent_id: Option<i32>,
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct Vote {
    #[validate(custom(function = "valid_ip"))]
    pub ip: String,
    pub movie_id: i32,
    pub star_id: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct RatingSummary {
    pub votes: u64,
    pub average: Option<f64>,
}

impl RatingSummary {
    pub fn from_values(values: impl IntoIterator<Item = i16>) -> Self {
        let (votes, total) =
            values.into_iter().fold((0u64, 0i64), |(n, sum), v| (n + 1, sum + i64::from(v)));
        let average = (votes > 0).then(|| total as f64 / votes as f64);
        Self { votes, average }
    }
}

/// Everything the detail page shows for one movie.
#[derive(Clone, Debug)]
pub struct MovieDetail {
    pub movie: movie::Model,
    pub category: Option<category::Model>,
    pub genres: Vec<genre::Model>,
    pub cast: Vec<actor::Model>,
    pub directors: Vec<actor::Model>,
    pub shots: Vec<movie_shot::Model>,
    pub reviews: ReviewThread,
    pub rating: RatingSummary,
}
