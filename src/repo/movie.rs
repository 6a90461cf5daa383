use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    sea_query::OnConflict,
};
use validator::Validate;

use crate::{
    entities::{actor, category, genre, movie, movie_actor, movie_director, movie_genre},
    error::{AppError, AppResult},
    models::{MovieDetail, NewMovie},
};

use super::{RatingRepo, ReviewRepo, ShotRepo};

pub struct MovieRepo<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MovieRepo<'a, C> {
    pub(super) fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, input: NewMovie) -> AppResult<movie::Model> {
        input.validate()?;
        let mut active = <movie::ActiveModel as ActiveModelTrait>::default();
        apply(&mut active, input);
        let model = active.insert(self.db).await?;
        tracing::debug!(id = model.id, slug = %model.url, draft = model.draft, "movie created");
        Ok(model)
    }

    pub async fn get(&self, id: i32) -> AppResult<movie::Model> {
        movie::Entity::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::not_found("movie", id))
    }

    pub async fn update(&self, id: i32, input: NewMovie) -> AppResult<movie::Model> {
        input.validate()?;
        let mut active = self.get(id).await?.into_active_model();
        apply(&mut active, input);
        Ok(active.update(self.db).await?)
    }

    pub async fn set_draft(&self, id: i32, draft: bool) -> AppResult<movie::Model> {
        let mut active = self.get(id).await?.into_active_model();
        active.draft = Set(draft);
        Ok(active.update(self.db).await?)
    }

    /// Shots, reviews, ratings and credit/genre links are removed with the
    /// movie by the schema's foreign keys.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let res = movie::Entity::delete_by_id(id).exec(self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::not_found("movie", id));
        }
        tracing::debug!(id, "movie deleted");
        Ok(())
    }

    /// Published movies, newest premiere first, ties in creation order.
    pub async fn list_published(&self) -> AppResult<Vec<movie::Model>> {
        Ok(movie::Entity::find()
            .filter(movie::Column::Draft.eq(false))
            .order_by_desc(movie::Column::WorldPremiere)
            .order_by_asc(movie::Column::Id)
            .all(self.db)
            .await?)
    }

    /// All movies, drafts included.
    pub async fn count(&self) -> AppResult<u64> {
        Ok(movie::Entity::find().count(self.db).await?)
    }

    /// The one movie whose slug is `slug`, drafts included.
    pub async fn get_by_slug(&self, slug: &str) -> AppResult<movie::Model> {
        let mut rows = movie::Entity::find()
            .filter(movie::Column::Url.eq(slug))
            .limit(2)
            .all(self.db)
            .await?;

        match rows.len() {
            0 => Err(AppError::not_found("movie", slug)),
            1 => Ok(rows.remove(0)),
            n => {
                tracing::error!(slug, rows = n, "slug matched more than one movie");
                Err(AppError::Integrity(format!("slug `{slug}` matches {n} movies")))
            }
        }
    }

    pub async fn add_actor(&self, movie_id: i32, actor_id: i32) -> AppResult<()> {
        let link = movie_actor::ActiveModel { movie_id: Set(movie_id), actor_id: Set(actor_id) };
        movie_actor::Entity::insert(link)
            .on_conflict(
                OnConflict::columns([movie_actor::Column::MovieId, movie_actor::Column::ActorId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;
        Ok(())
    }

    pub async fn add_director(&self, movie_id: i32, actor_id: i32) -> AppResult<()> {
        let link = movie_director::ActiveModel { movie_id: Set(movie_id), actor_id: Set(actor_id) };
        movie_director::Entity::insert(link)
            .on_conflict(
                OnConflict::columns([
                    movie_director::Column::MovieId,
                    movie_director::Column::ActorId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;
        Ok(())
    }

    pub async fn add_genre(&self, movie_id: i32, genre_id: i32) -> AppResult<()> {
        let link = movie_genre::ActiveModel { movie_id: Set(movie_id), genre_id: Set(genre_id) };
        movie_genre::Entity::insert(link)
            .on_conflict(
                OnConflict::columns([movie_genre::Column::MovieId, movie_genre::Column::GenreId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;
        Ok(())
    }

    pub async fn cast(&self, movie: &movie::Model) -> AppResult<Vec<actor::Model>> {
        Ok(movie.find_linked(movie::Cast).order_by_asc(actor::Column::Name).all(self.db).await?)
    }

    pub async fn directors(&self, movie: &movie::Model) -> AppResult<Vec<actor::Model>> {
        Ok(movie.find_linked(movie::Directors).order_by_asc(actor::Column::Name).all(self.db).await?)
    }

    pub async fn genres(&self, movie: &movie::Model) -> AppResult<Vec<genre::Model>> {
        Ok(movie.find_related(genre::Entity).order_by_asc(genre::Column::Name).all(self.db).await?)
    }

    pub async fn category(&self, movie: &movie::Model) -> AppResult<Option<category::Model>> {
        Ok(movie.find_related(category::Entity).one(self.db).await?)
    }

    /// Loads the slug's movie together with everything its page shows.
    pub async fn detail(&self, slug: &str, include_drafts: bool) -> AppResult<MovieDetail> {
        let movie = self.get_by_slug(slug).await?;
        if movie.draft && !include_drafts {
            return Err(AppError::not_found("movie", slug));
        }

        let category = self.category(&movie).await?;
        let genres = self.genres(&movie).await?;
        let cast = self.cast(&movie).await?;
        let directors = self.directors(&movie).await?;
        let shots = ShotRepo::new(self.db).for_movie(movie.id).await?;
        let reviews = ReviewRepo::new(self.db).thread(movie.id).await?;
        let rating = RatingRepo::new(self.db).summary(movie.id).await?;

        Ok(MovieDetail { movie, category, genres, cast, directors, shots, reviews, rating })
    }
}

fn apply(active: &mut movie::ActiveModel, input: NewMovie) {
    active.title = Set(input.title);
    active.tagline = Set(input.tagline);
    active.description = Set(input.description);
    active.poster = Set(input.poster);
    active.year = Set(input.year);
    active.country = Set(input.country);
    active.world_premiere = Set(input.world_premiere.to_string());
    active.budget = Set(input.budget);
    active.fees_in_usa = Set(input.fees_in_usa);
    active.fees_in_world = Set(input.fees_in_world);
    active.category_id = Set(input.category_id);
    active.url = Set(input.url);
    active.draft = Set(input.draft);
}
