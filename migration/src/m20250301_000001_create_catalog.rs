use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Category::Table)
                    .if_not_exists()
                    .col(pk_auto(Category::Id))
                    .col(string_len(Category::Name, 100))
                    .col(text(Category::Description))
                    .col(string_len(Category::Url, 160).unique_key())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Genre::Table)
                    .if_not_exists()
                    .col(pk_auto(Genre::Id))
                    .col(string_len(Genre::Name, 100))
                    .col(text(Genre::Description))
                    .col(string_len(Genre::Url, 160).unique_key())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Actor::Table)
                    .if_not_exists()
                    .col(pk_auto(Actor::Id))
                    .col(string_len(Actor::Name, 100))
                    .col(small_integer(Actor::Age).default(0).check(Expr::col(Actor::Age).gte(0)))
                    .col(text(Actor::Description))
                    .col(string(Actor::Image))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RatingStar::Table)
                    .if_not_exists()
                    .col(pk_auto(RatingStar::Id))
                    .col(small_integer(RatingStar::Value).default(0).unique_key())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Movie::Table)
                    .if_not_exists()
                    .col(pk_auto(Movie::Id))
                    .col(string_len(Movie::Title, 100))
                    .col(string_len(Movie::Tagline, 100).default(""))
                    .col(text(Movie::Description))
                    .col(string(Movie::Poster))
                    .col(integer(Movie::Year).default(2000).check(Expr::col(Movie::Year).gte(0)))
                    .col(string_len(Movie::Country, 100))
                    .col(string_len(Movie::WorldPremiere, 10))
                    .col(big_integer(Movie::Budget).default(0).check(Expr::col(Movie::Budget).gte(0)))
                    .col(
                        big_integer(Movie::FeesInUsa)
                            .default(0)
                            .check(Expr::col(Movie::FeesInUsa).gte(0)),
                    )
                    .col(
                        big_integer(Movie::FeesInWorld)
                            .default(0)
                            .check(Expr::col(Movie::FeesInWorld).gte(0)),
                    )
                    .col(integer_null(Movie::CategoryId))
                    .col(string_len(Movie::Url, 160).unique_key())
                    .col(boolean(Movie::Draft).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_category")
                            .from(Movie::Table, Movie::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movie_draft_premiere")
                    .table(Movie::Table)
                    .col(Movie::Draft)
                    .col(Movie::WorldPremiere)
                    .to_owned(),
            )
            .await?;

        manager.create_table(movie_link(MovieActor::Table, MovieActor::ActorId, "movie_actor")).await?;
        manager
            .create_table(movie_link(MovieDirector::Table, MovieDirector::ActorId, "movie_director"))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MovieGenre::Table)
                    .if_not_exists()
                    .col(integer(MovieGenre::MovieId))
                    .col(integer(MovieGenre::GenreId))
                    .primary_key(Index::create().col(MovieGenre::MovieId).col(MovieGenre::GenreId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_genre_movie")
                            .from(MovieGenre::Table, MovieGenre::MovieId)
                            .to(Movie::Table, Movie::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_genre_genre")
                            .from(MovieGenre::Table, MovieGenre::GenreId)
                            .to(Genre::Table, Genre::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MovieGenre::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(MovieDirector::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(MovieActor::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Movie::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(RatingStar::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Actor::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Genre::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Category::Table).to_owned()).await?;
        Ok(())
    }
}

/// Cast and directors share the same join layout against `actor`.
fn movie_link<T, C>(table: T, actor_col: C, name: &str) -> TableCreateStatement
where
    T: IntoIden + Copy + 'static,
    C: IntoIden + Copy + 'static,
{
    Table::create()
        .table(table)
        .if_not_exists()
        .col(integer(MovieActor::MovieId))
        .col(integer(actor_col))
        .primary_key(Index::create().col(MovieActor::MovieId).col(actor_col))
        .foreign_key(
            ForeignKey::create()
                .name(format!("fk_{name}_movie"))
                .from(table, MovieActor::MovieId)
                .to(Movie::Table, Movie::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name(format!("fk_{name}_actor"))
                .from(table, actor_col)
                .to(Actor::Table, Actor::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[derive(DeriveIden)]
enum Category {
    Table,
    Id,
    Name,
    Description,
    Url,
}

#[derive(DeriveIden)]
enum Genre {
    Table,
    Id,
    Name,
    Description,
    Url,
}

#[derive(DeriveIden)]
enum Actor {
    Table,
    Id,
    Name,
    Age,
    Description,
    Image,
}

#[derive(DeriveIden)]
enum RatingStar {
    Table,
    Id,
    Value,
}

#[derive(DeriveIden)]
enum Movie {
    Table,
    Id,
    Title,
    Tagline,
    Description,
    Poster,
    Year,
    Country,
    WorldPremiere,
    Budget,
    FeesInUsa,
    FeesInWorld,
    CategoryId,
    Url,
    Draft,
}

#[derive(DeriveIden, Clone, Copy)]
enum MovieActor {
    Table,
    MovieId,
    ActorId,
}

#[derive(DeriveIden, Clone, Copy)]
enum MovieDirector {
    Table,
    ActorId,
}

#[derive(DeriveIden)]
enum MovieGenre {
    Table,
    MovieId,
    GenreId,
}
