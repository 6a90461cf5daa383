use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    ModelTrait, QueryOrder, Set,
};
use validator::Validate;

use crate::{
    entities::{actor, category, genre, movie, rating_star},
    error::{AppError, AppResult},
    models::{NewActor, NewLookup},
};

pub struct CategoryRepo<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepo<'a, C> {
    pub(super) fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, input: NewLookup) -> AppResult<category::Model> {
        input.validate()?;
        let model = category::ActiveModel {
            id: Default::default(),
            name: Set(input.name),
            description: Set(input.description),
            url: Set(input.url),
        }
        .insert(self.db)
        .await?;
        tracing::debug!(id = model.id, slug = %model.url, "category created");
        Ok(model)
    }

    pub async fn get(&self, id: i32) -> AppResult<category::Model> {
        category::Entity::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::not_found("category", id))
    }

    pub async fn all(&self) -> AppResult<Vec<category::Model>> {
        Ok(category::Entity::find().order_by_asc(category::Column::Name).all(self.db).await?)
    }

    pub async fn update(&self, id: i32, input: NewLookup) -> AppResult<category::Model> {
        input.validate()?;
        let mut active = self.get(id).await?.into_active_model();
        active.name = Set(input.name);
        active.description = Set(input.description);
        active.url = Set(input.url);
        Ok(active.update(self.db).await?)
    }

    /// Movies in the category keep existing with no category.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let res = category::Entity::delete_by_id(id).exec(self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::not_found("category", id));
        }
        Ok(())
    }
}

pub struct GenreRepo<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GenreRepo<'a, C> {
    pub(super) fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, input: NewLookup) -> AppResult<genre::Model> {
        input.validate()?;
        let model = genre::ActiveModel {
            id: Default::default(),
            name: Set(input.name),
            description: Set(input.description),
            url: Set(input.url),
        }
        .insert(self.db)
        .await?;
        tracing::debug!(id = model.id, slug = %model.url, "genre created");
        Ok(model)
    }

    pub async fn get(&self, id: i32) -> AppResult<genre::Model> {
        genre::Entity::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::not_found("genre", id))
    }

    pub async fn all(&self) -> AppResult<Vec<genre::Model>> {
        Ok(genre::Entity::find().order_by_asc(genre::Column::Name).all(self.db).await?)
    }

    pub async fn update(&self, id: i32, input: NewLookup) -> AppResult<genre::Model> {
        input.validate()?;
        let mut active = self.get(id).await?.into_active_model();
        active.name = Set(input.name);
        active.description = Set(input.description);
        active.url = Set(input.url);
        Ok(active.update(self.db).await?)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let res = genre::Entity::delete_by_id(id).exec(self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::not_found("genre", id));
        }
        Ok(())
    }
}

pub struct ActorRepo<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ActorRepo<'a, C> {
    pub(super) fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, input: NewActor) -> AppResult<actor::Model> {
        input.validate()?;
        let model = actor::ActiveModel {
            id: Default::default(),
            name: Set(input.name),
            age: Set(input.age),
            description: Set(input.description),
            image: Set(input.image),
        }
        .insert(self.db)
        .await?;
        Ok(model)
    }

    pub async fn get(&self, id: i32) -> AppResult<actor::Model> {
        actor::Entity::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::not_found("actor", id))
    }

    pub async fn all(&self) -> AppResult<Vec<actor::Model>> {
        Ok(actor::Entity::find().order_by_asc(actor::Column::Name).all(self.db).await?)
    }

    pub async fn update(&self, id: i32, input: NewActor) -> AppResult<actor::Model> {
        input.validate()?;
        let mut active = self.get(id).await?.into_active_model();
        active.name = Set(input.name);
        active.age = Set(input.age);
        active.description = Set(input.description);
        active.image = Set(input.image);
        Ok(active.update(self.db).await?)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let res = actor::Entity::delete_by_id(id).exec(self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::not_found("actor", id));
        }
        Ok(())
    }

    /// Movies the person acted in and movies they directed, by title.
    pub async fn filmography(
        &self,
        id: i32,
    ) -> AppResult<(Vec<movie::Model>, Vec<movie::Model>)> {
        let person = self.get(id).await?;
        let acted = person
            .find_linked(actor::ActedIn)
            .order_by_asc(movie::Column::Title)
            .all(self.db)
            .await?;
        let directed = person
            .find_linked(actor::Directed)
            .order_by_asc(movie::Column::Title)
            .all(self.db)
            .await?;
        Ok((acted, directed))
    }
}

pub struct RatingStarRepo<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RatingStarRepo<'a, C> {
    pub(super) fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, value: i16) -> AppResult<rating_star::Model> {
        let model =
            rating_star::ActiveModel { id: Default::default(), value: Set(value) }.insert(self.db).await?;
        Ok(model)
    }

    pub async fn get(&self, id: i32) -> AppResult<rating_star::Model> {
        rating_star::Entity::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::not_found("rating star", id))
    }

    /// Highest value first.
    pub async fn all(&self) -> AppResult<Vec<rating_star::Model>> {
        Ok(rating_star::Entity::find()
            .order_by_desc(rating_star::Column::Value)
            .all(self.db)
            .await?)
    }

    pub async fn update(&self, id: i32, value: i16) -> AppResult<rating_star::Model> {
        let mut active = self.get(id).await?.into_active_model();
        active.value = Set(value);
        Ok(active.update(self.db).await?)
    }

    /// Votes cast with this star go with it.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let res = rating_star::Entity::delete_by_id(id).exec(self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::not_found("rating star", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{self, lookup, store};
    use crate::{error::AppError, models::NewActor};

    #[tokio::test]
    async fn duplicate_category_slug_is_a_conflict() {
        let store = store().await;
        let drama = store.categories().create(lookup("Drama", "drama")).await.unwrap();

        let err = store.categories().create(lookup("Drama again", "drama")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)), "{err:?}");

        let kept = store.categories().get(drama.id).await.unwrap();
        assert_eq!(kept.name, "Drama");
        assert_eq!(store.categories().all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn updating_into_a_taken_genre_slug_fails() {
        let store = store().await;
        store.genres().create(lookup("Action", "action")).await.unwrap();
        let scifi = store.genres().create(lookup("Sci-Fi", "sci-fi")).await.unwrap();

        let err = store.genres().update(scifi.id, lookup("Sci-Fi", "action")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)), "{err:?}");
        assert_eq!(store.genres().get(scifi.id).await.unwrap().url, "sci-fi");
    }

    #[tokio::test]
    async fn invalid_slug_never_reaches_the_store() {
        let store = store().await;
        let err = store.categories().create(lookup("Drama", "dra ma")).await.unwrap_err();
        assert!(matches!(err, AppError::Invalid(_)), "{err:?}");
        assert!(store.categories().all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_rows_are_not_found() {
        let store = store().await;
        assert!(matches!(store.categories().get(42).await, Err(AppError::NotFound { .. })));
        assert!(matches!(store.genres().delete(42).await, Err(AppError::NotFound { .. })));
        assert!(matches!(store.stars().delete(42).await, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn actors_render_as_their_name() {
        let store = store().await;
        let neo = store
            .actors()
            .create(NewActor {
                name: "Keanu Reeves".into(),
                age: 34,
                description: String::new(),
                image: "actors/keanu.jpg".into(),
            })
            .await
            .unwrap();
        assert_eq!(neo.to_string(), "Keanu Reeves");

        let err = store
            .actors()
            .update(neo.id, NewActor { age: -1, ..testing_actor() })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Invalid(_)));
    }

    #[tokio::test]
    async fn stars_are_listed_highest_first() {
        let store = store().await;
        for value in [3, 5, 1] {
            store.stars().create(value).await.unwrap();
        }
        let values: Vec<_> = store.stars().all().await.unwrap().into_iter().map(|s| s.value).collect();
        assert_eq!(values, [5, 3, 1]);

        let err = store.stars().create(5).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    fn testing_actor() -> NewActor {
        NewActor { name: "Carrie-Anne Moss".into(), age: 32, description: String::new(), image: String::new() }
    }

    #[tokio::test]
    async fn filmography_separates_cast_and_director_credits() {
        let store = store().await;
        let matrix = testing::movie(&store, "matrix-1999").await;
        let reloaded = testing::movie(&store, "matrix-reloaded").await;
        let person = store.actors().create(testing_actor()).await.unwrap();

        store.movies().add_actor(matrix.id, person.id).await.unwrap();
        store.movies().add_director(reloaded.id, person.id).await.unwrap();

        let (acted, directed) = store.actors().filmography(person.id).await.unwrap();
        assert_eq!(acted.iter().map(|m| m.id).collect::<Vec<_>>(), [matrix.id]);
        assert_eq!(directed.iter().map(|m| m.id).collect::<Vec<_>>(), [reloaded.id]);
    }
}
