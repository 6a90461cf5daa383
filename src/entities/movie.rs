use jiff::civil::Date;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "movie")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub tagline: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub poster: String,
    pub year: i32,
    pub country: String,
    /// ISO `YYYY-MM-DD`, so lexical order is chronological order.
    pub world_premiere: String,
    pub budget: i64,
    pub fees_in_usa: i64,
    pub fees_in_world: i64,
    pub category_id: Option<i32>,
    #[sea_orm(unique)]
    pub url: String,
    pub draft: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Category,
    #[sea_orm(has_many = "super::movie_shot::Entity")]
    MovieShot,
    #[sea_orm(has_many = "super::rating::Entity")]
    Rating,
    #[sea_orm(has_many = "super::review::Entity")]
    Review,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::movie_shot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieShot.def()
    }
}

impl Related<super::rating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rating.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

impl Related<super::genre::Entity> for Entity {
    fn to() -> RelationDef {
        super::movie_genre::Relation::Genre.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::movie_genre::Relation::Movie.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Actors credited in the cast. Directors go through [`Directors`]; both
/// point at `actor`, so neither can be a plain `Related` impl.
pub struct Cast;

impl Linked for Cast {
    type FromEntity = Entity;
    type ToEntity = super::actor::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::movie_actor::Relation::Movie.def().rev(),
            super::movie_actor::Relation::Actor.def(),
        ]
    }
}

pub struct Directors;

impl Linked for Directors {
    type FromEntity = Entity;
    type ToEntity = super::actor::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::movie_director::Relation::Movie.def().rev(),
            super::movie_director::Relation::Actor.def(),
        ]
    }
}

impl Model {
    /// Canonical path of the detail page. Changing the slug changes it.
    pub fn absolute_url(&self) -> String {
        format!("/movie/{}/", self.url)
    }

    pub fn premiere(&self) -> Option<Date> {
        self.world_premiere.parse().ok()
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.title)
    }
}
