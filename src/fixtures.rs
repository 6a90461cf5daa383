use std::{collections::HashMap, path::Path};

use anyhow::Context;
use sea_orm::DatabaseTransaction;
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{NewActor, NewLookup, NewMovie, NewReview, NewShot},
    repo::Store,
};

/// A whole catalog in one JSON document. Movies reference categories and
/// genres by slug and people by name.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Fixture {
    pub categories: Vec<NewLookup>,
    pub genres: Vec<NewLookup>,
    pub actors: Vec<NewActor>,
    pub stars: Vec<i16>,
    pub movies: Vec<FixtureMovie>,
}

#[derive(Debug, Deserialize)]
pub struct FixtureMovie {
    #[serde(flatten)]
    pub movie: NewMovie,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub cast: Vec<String>,
    #[serde(default)]
    pub directors: Vec<String>,
    #[serde(default)]
    pub shots: Vec<NewShot>,
    #[serde(default)]
    pub reviews: Vec<FixtureReview>,
}

#[derive(Debug, Deserialize)]
pub struct FixtureReview {
    pub email: String,
    pub name: String,
    pub text: String,
    #[serde(default)]
    pub replies: Vec<FixtureReview>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub movies: usize,
    pub reviews: usize,
}

pub async fn read(path: &Path) -> anyhow::Result<Fixture> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading fixtures {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing fixtures {}", path.display()))
}

/// Loads `fixture` unless the catalog already has movies. The load runs in
/// one transaction, so a failure leaves the database as it was.
pub async fn load(store: &Store, fixture: Fixture) -> AppResult<LoadSummary> {
    if store.movies().count().await? > 0 {
        tracing::info!("catalog not empty, skipping fixtures");
        return Ok(LoadSummary::default());
    }

    let txn = store.begin().await?;
    let summary = match write(&txn, fixture).await {
        Ok(summary) => summary,
        Err(err) => {
            tracing::warn!(error = %err, "fixture load failed, rolling back");
            txn.rollback().await?;
            return Err(err);
        }
    };
    txn.commit().await?;

    tracing::info!(movies = summary.movies, reviews = summary.reviews, "fixtures loaded");
    Ok(summary)
}

async fn write(store: &Store<DatabaseTransaction>, fixture: Fixture) -> AppResult<LoadSummary> {
    let mut categories = HashMap::new();
    for input in fixture.categories {
        let row = store.categories().create(input).await?;
        categories.insert(row.url.clone(), row.id);
    }

    let mut genres = HashMap::new();
    for input in fixture.genres {
        let row = store.genres().create(input).await?;
        genres.insert(row.url.clone(), row.id);
    }

    let mut people = HashMap::new();
    for input in fixture.actors {
        let row = store.actors().create(input).await?;
        people.insert(row.name.clone(), row.id);
    }

    for value in fixture.stars {
        store.stars().create(value).await?;
    }

    let mut summary = LoadSummary::default();
    for entry in fixture.movies {
        let mut input = entry.movie;
        if let Some(slug) = &entry.category {
            input.category_id = Some(resolve(&categories, slug, "category")?);
        }
        let movie = store.movies().create(input).await?;

        for slug in &entry.genres {
            store.movies().add_genre(movie.id, resolve(&genres, slug, "genre")?).await?;
        }
        for name in &entry.cast {
            store.movies().add_actor(movie.id, resolve(&people, name, "actor")?).await?;
        }
        for name in &entry.directors {
            store.movies().add_director(movie.id, resolve(&people, name, "actor")?).await?;
        }
        for shot in entry.shots {
            store.shots().create(movie.id, shot).await?;
        }

        // Depth-first so each reply's parent already has an id.
        let mut pending: Vec<(Option<i32>, FixtureReview)> =
            entry.reviews.into_iter().rev().map(|r| (None, r)).collect();
        while let Some((parent_id, review)) = pending.pop() {
            let row = store
                .reviews()
                .create(
                    movie.id,
                    NewReview { email: review.email, name: review.name, text: review.text, parent_id },
                )
                .await?;
            summary.reviews += 1;
            pending.extend(review.replies.into_iter().rev().map(|r| (Some(row.id), r)));
        }

        summary.movies += 1;
    }

    Ok(summary)
}

fn resolve(index: &HashMap<String, i32>, key: &str, entity: &'static str) -> AppResult<i32> {
    index
        .get(key)
        .copied()
        .ok_or_else(|| AppError::Invalid(format!("fixture references unknown {entity} `{key}`")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::testing::store;

    const CATALOG: &str = r#"{
        "categories": [{ "name": "Movies", "url": "movies" }],
        "genres": [
            { "name": "Action", "url": "action" },
            { "name": "Sci-Fi", "url": "sci-fi" }
        ],
        "actors": [
            { "name": "Keanu Reeves", "age": 34, "image": "actors/keanu.jpg" },
            { "name": "Lana Wachowski", "age": 33 }
        ],
        "stars": [1, 2, 3, 4, 5],
        "movies": [{
            "title": "The Matrix",
            "tagline": "Welcome to the Real World",
            "year": 1999,
            "country": "USA",
            "world_premiere": "1999-03-31",
            "budget": 63000000,
            "url": "matrix-1999",
            "category": "movies",
            "genres": ["action", "sci-fi"],
            "cast": ["Keanu Reeves"],
            "directors": ["Lana Wachowski"],
            "shots": [{ "title": "Lobby", "image": "shots/lobby.jpg" }],
            "reviews": [{
                "email": "morpheus@example.com",
                "name": "Morpheus",
                "text": "What is real?",
                "replies": [{ "email": "neo@example.com", "name": "Neo", "text": "Whoa." }]
            }]
        }]
    }"#;

    #[tokio::test]
    async fn loads_a_linked_catalog() {
        let store = store().await;
        let fixture: Fixture = serde_json::from_str(CATALOG).unwrap();

        let summary = load(&store, fixture).await.unwrap();
        assert_eq!(summary, LoadSummary { movies: 1, reviews: 2 });

        let detail = store.movies().detail("matrix-1999", false).await.unwrap();
        assert_eq!(detail.movie.year, 1999);
        assert_eq!(detail.movie.world_premiere, "1999-03-31");
        assert_eq!(detail.category.unwrap().url, "movies");
        assert_eq!(detail.genres.len(), 2);
        assert_eq!(detail.cast[0].name, "Keanu Reeves");
        assert_eq!(detail.directors[0].name, "Lana Wachowski");
        assert_eq!(detail.shots.len(), 1);

        let walk: Vec<_> =
            detail.reviews.walk().into_iter().map(|(d, r)| (d, r.name.clone())).collect();
        assert_eq!(walk, [(0, "Morpheus".to_string()), (1, "Neo".to_string())]);
        assert_eq!(store.stars().all().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn second_load_is_skipped() {
        let store = store().await;
        load(&store, serde_json::from_str(CATALOG).unwrap()).await.unwrap();
        let again = load(&store, serde_json::from_str(CATALOG).unwrap()).await.unwrap();
        assert_eq!(again, LoadSummary::default());
    }

    #[tokio::test]
    async fn unknown_references_fail() {
        let store = store().await;
        let fixture: Fixture = serde_json::from_str(
            r#"{ "movies": [{ "title": "Lost", "url": "lost", "genres": ["noir"] }] }"#,
        )
        .unwrap();
        let err = load(&store, fixture).await.unwrap_err();
        assert!(matches!(err, AppError::Invalid(_)), "{err:?}");
    }

    #[tokio::test]
    async fn failed_load_leaves_nothing_behind() {
        let store = store().await;
        let broken: Fixture = serde_json::from_str(
            r#"{
                "categories": [{ "name": "Movies", "url": "movies" }],
                "movies": [{ "title": "Lost", "url": "lost", "category": "movies", "genres": ["noir"] }]
            }"#,
        )
        .unwrap();
        let err = load(&store, broken).await.unwrap_err();
        assert!(err.to_string().contains("unknown genre `noir`"), "{err}");
        assert_eq!(store.movies().count().await.unwrap(), 0);
        assert!(store.categories().all().await.unwrap().is_empty());

        // A corrected catalog still loads afterwards.
        let summary = load(&store, serde_json::from_str(CATALOG).unwrap()).await.unwrap();
        assert_eq!(summary, LoadSummary { movies: 1, reviews: 2 });
        assert!(store.movies().get_by_slug("matrix-1999").await.is_ok());
    }
}
