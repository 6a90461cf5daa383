use sea_orm::entity::prelude::*;

/// A person credited on a movie, either in the cast or as a director.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "actor")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub age: i16,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub image: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Movies this person appears in.
pub struct ActedIn;

impl Linked for ActedIn {
    type FromEntity = Entity;
    type ToEntity = super::movie::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::movie_actor::Relation::Actor.def().rev(),
            super::movie_actor::Relation::Movie.def(),
        ]
    }
}

/// Movies this person directed.
pub struct Directed;

impl Linked for Directed {
    type FromEntity = Entity;
    type ToEntity = super::movie::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::movie_director::Relation::Actor.def().rev(),
            super::movie_director::Relation::Movie.def(),
        ]
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
