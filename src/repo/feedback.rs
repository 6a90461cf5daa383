use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, sea_query::OnConflict,
};
use validator::Validate;

use crate::{
    entities::{movie_shot, rating, rating_star, review},
    error::{AppError, AppResult},
    models::{NewReview, NewShot, RatingSummary, Vote},
    thread::ReviewThread,
};

pub struct ShotRepo<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShotRepo<'a, C> {
    pub(super) fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, movie_id: i32, input: NewShot) -> AppResult<movie_shot::Model> {
        input.validate()?;
        let model = movie_shot::ActiveModel {
            id: Default::default(),
            title: Set(input.title),
            description: Set(input.description),
            image: Set(input.image),
            movie_id: Set(movie_id),
        }
        .insert(self.db)
        .await?;
        Ok(model)
    }

    pub async fn for_movie(&self, movie_id: i32) -> AppResult<Vec<movie_shot::Model>> {
        Ok(movie_shot::Entity::find()
            .filter(movie_shot::Column::MovieId.eq(movie_id))
            .order_by_asc(movie_shot::Column::Id)
            .all(self.db)
            .await?)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let res = movie_shot::Entity::delete_by_id(id).exec(self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::not_found("movie shot", id));
        }
        Ok(())
    }
}

pub struct RatingRepo<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RatingRepo<'a, C> {
    pub(super) fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a vote. A second vote from the same address on the same movie
    /// replaces the first.
    pub async fn rate(&self, vote: Vote) -> AppResult<rating::Model> {
        vote.validate()?;
        let model = rating::ActiveModel {
            id: Default::default(),
            ip: Set(vote.ip.clone()),
            star_id: Set(vote.star_id),
            movie_id: Set(vote.movie_id),
        };

        rating::Entity::insert(model)
            .on_conflict(
                OnConflict::columns([rating::Column::Ip, rating::Column::MovieId])
                    .update_column(rating::Column::StarId)
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        let stored = rating::Entity::find()
            .filter(rating::Column::Ip.eq(vote.ip.as_str()))
            .filter(rating::Column::MovieId.eq(vote.movie_id))
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::Integrity(format!("vote from {} was not stored", vote.ip)))?;

        tracing::debug!(movie_id = vote.movie_id, star_id = vote.star_id, "vote recorded");
        Ok(stored)
    }

    pub async fn for_movie(&self, movie_id: i32) -> AppResult<Vec<rating::Model>> {
        Ok(rating::Entity::find()
            .filter(rating::Column::MovieId.eq(movie_id))
            .order_by_asc(rating::Column::Id)
            .all(self.db)
            .await?)
    }

    pub async fn summary(&self, movie_id: i32) -> AppResult<RatingSummary> {
        let rows = rating::Entity::find()
            .filter(rating::Column::MovieId.eq(movie_id))
            .find_also_related(rating_star::Entity)
            .all(self.db)
            .await?;
        Ok(RatingSummary::from_values(rows.into_iter().filter_map(|(_, star)| star.map(|s| s.value))))
    }
}

pub struct ReviewRepo<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewRepo<'a, C> {
    pub(super) fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds a review to `movie_id`. A reply must answer a review of the same
    /// movie.
    pub async fn create(&self, movie_id: i32, input: NewReview) -> AppResult<review::Model> {
        input.validate()?;

        if let Some(parent_id) = input.parent_id {
            let parent = self.get(parent_id).await?;
            if parent.movie_id != movie_id {
                return Err(AppError::Invalid(format!(
                    "review {parent_id} belongs to another movie"
                )));
            }
        }

        let model = review::ActiveModel {
            id: Default::default(),
            email: Set(input.email),
            name: Set(input.name),
            text: Set(input.text),
            parent_id: Set(input.parent_id),
            movie_id: Set(movie_id),
        }
        .insert(self.db)
        .await?;
        tracing::debug!(id = model.id, movie_id, parent_id = ?model.parent_id, "review added");
        Ok(model)
    }

    pub async fn get(&self, id: i32) -> AppResult<review::Model> {
        review::Entity::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::not_found("review", id))
    }

    /// Replies survive and lose their parent link.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let res = review::Entity::delete_by_id(id).exec(self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::not_found("review", id));
        }
        Ok(())
    }

    pub async fn for_movie(&self, movie_id: i32) -> AppResult<Vec<review::Model>> {
        Ok(review::Entity::find()
            .filter(review::Column::MovieId.eq(movie_id))
            .order_by_asc(review::Column::Id)
            .all(self.db)
            .await?)
    }

    pub async fn thread(&self, movie_id: i32) -> AppResult<ReviewThread> {
        Ok(ReviewThread::build(self.for_movie(movie_id).await?))
    }
}
