//! Data access, one repository per entity.
//!
//! Entities stay plain sea-orm models; every read and write the application
//! performs goes through these types so callers never build queries.

mod catalog;
mod feedback;
mod movie;

use sea_orm::{ConnectionTrait, DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::error::AppResult;

pub use catalog::{ActorRepo, CategoryRepo, GenreRepo, RatingStarRepo};
pub use feedback::{RatingRepo, ReviewRepo, ShotRepo};
pub use movie::MovieRepo;

/// Repositories bound to one connection. `Store<DatabaseTransaction>` hands
/// out the same repositories inside a transaction; see [`Store::begin`].
#[derive(Clone)]
pub struct Store<C = DatabaseConnection> {
    db: C,
}

impl Store {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn begin(&self) -> AppResult<Store<DatabaseTransaction>> {
        Ok(Store { db: self.db.begin().await? })
    }
}

impl Store<DatabaseTransaction> {
    pub async fn commit(self) -> AppResult<()> {
        Ok(self.db.commit().await?)
    }

    pub async fn rollback(self) -> AppResult<()> {
        Ok(self.db.rollback().await?)
    }
}

impl<C: ConnectionTrait> Store<C> {
    pub fn categories(&self) -> CategoryRepo<'_, C> {
        CategoryRepo::new(&self.db)
    }

    pub fn genres(&self) -> GenreRepo<'_, C> {
        GenreRepo::new(&self.db)
    }

    pub fn actors(&self) -> ActorRepo<'_, C> {
        ActorRepo::new(&self.db)
    }

    pub fn stars(&self) -> RatingStarRepo<'_, C> {
        RatingStarRepo::new(&self.db)
    }

    pub fn movies(&self) -> MovieRepo<'_, C> {
        MovieRepo::new(&self.db)
    }

    pub fn shots(&self) -> ShotRepo<'_, C> {
        ShotRepo::new(&self.db)
    }

    pub fn ratings(&self) -> RatingRepo<'_, C> {
        RatingRepo::new(&self.db)
    }

    pub fn reviews(&self) -> ReviewRepo<'_, C> {
        ReviewRepo::new(&self.db)
    }
}
