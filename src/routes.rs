use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    http::Uri,
    response::{Html, Redirect},
    routing::get,
};

use crate::{
    AppState,
    error::{AppError, AppResult},
    templates,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(movie_list))
        .route("/movie/{slug}", get(append_slash))
        .route("/movie/{slug}/", get(movie_detail))
        .fallback(not_found)
        .with_state(state)
}

/// Published movies only.
pub async fn movie_list(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let movies = state.store.movies().list_published().await?;
    tracing::debug!(count = movies.len(), "listing movies");
    Ok(Html(templates::movie_list_page(&movies, &state.config)))
}

pub async fn movie_detail(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> AppResult<Html<String>> {
    let detail =
        state.store.movies().detail(&slug, !state.config.detail_hides_drafts).await?;
    Ok(Html(templates::movie_detail_page(&detail, &state.config)))
}

/// `/movie/{slug}` -> `/movie/{slug}/`.
async fn append_slash(Path(slug): Path<String>) -> Redirect {
    Redirect::permanent(&format!("/movie/{slug}/"))
}

async fn not_found(uri: Uri) -> AppError {
    AppError::not_found("page", uri.path())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::{
        config::Config,
        models::{NewActor, NewReview},
        repo::{
            Store,
            testing::{self, lookup, new_movie},
        },
    };

    async fn state(config: Config) -> Arc<AppState> {
        let store = testing::store().await;
        Arc::new(AppState { config: Arc::new(config), store })
    }

    async fn get(state: &Arc<AppState>, uri: &str) -> (StatusCode, String) {
        let resp = router(state.clone())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    async fn seed(store: &Store) {
        let drama = store.categories().create(lookup("Drama", "drama")).await.unwrap();
        let mut matrix = new_movie("The Matrix", "matrix-1999");
        matrix.category_id = Some(drama.id);
        let matrix = store.movies().create(matrix).await.unwrap();

        let mut draft = new_movie("Secret Cut", "secret-cut");
        draft.draft = true;
        store.movies().create(draft).await.unwrap();

        let keanu = store
            .actors()
            .create(NewActor {
                name: "Keanu Reeves".into(),
                age: 34,
                description: String::new(),
                image: String::new(),
            })
            .await
            .unwrap();
        store.movies().add_actor(matrix.id, keanu.id).await.unwrap();
        store
            .reviews()
            .create(
                matrix.id,
                NewReview {
                    email: "neo@example.com".into(),
                    name: "Neo".into(),
                    text: "I know kung fu.".into(),
                    parent_id: None,
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn list_shows_published_movies_only() {
        let state = state(Config::for_tests()).await;
        seed(&state.store).await;

        let (status, body) = get(&state, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("The Matrix"));
        assert!(body.contains("href=\"/movie/matrix-1999/\""));
        assert!(body.contains("src=\"/media/movies/poster.jpg\""));
        assert!(!body.contains("Secret Cut"));
    }

    #[tokio::test]
    async fn detail_renders_related_rows() {
        let state = state(Config::for_tests()).await;
        seed(&state.store).await;

        let (status, body) = get(&state, "/movie/matrix-1999/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Welcome to the Real World"));
        assert!(body.contains("Keanu Reeves"));
        assert!(body.contains("Drama"));
        assert!(body.contains("$63,000,000"));
        assert!(body.contains("I know kung fu."));
    }

    #[tokio::test]
    async fn unknown_slug_is_404() {
        let state = state(Config::for_tests()).await;
        let (status, body) = get(&state, "/movie/nope/").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("movie `nope` not found"));

        let (status, _) = get(&state, "/nowhere").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn detail_without_trailing_slash_redirects() {
        let state = state(Config::for_tests()).await;
        let resp = router(state)
            .oneshot(Request::builder().uri("/movie/matrix-1999").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(resp.headers()["location"], "/movie/matrix-1999/");
    }

    #[tokio::test]
    async fn drafts_follow_the_detail_policy() {
        let open = state(Config::for_tests()).await;
        seed(&open.store).await;
        let (status, body) = get(&open, "/movie/secret-cut/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Secret Cut"));

        let strict = state(Config { detail_hides_drafts: true, ..Config::for_tests() }).await;
        seed(&strict.store).await;
        let (status, _) = get(&strict, "/movie/secret-cut/").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
