use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MovieShot::Table)
                    .if_not_exists()
                    .col(pk_auto(MovieShot::Id))
                    .col(string_len(MovieShot::Title, 100))
                    .col(text(MovieShot::Description))
                    .col(string(MovieShot::Image))
                    .col(integer(MovieShot::MovieId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_shot_movie")
                            .from(MovieShot::Table, MovieShot::MovieId)
                            .to(Movie::Table, Movie::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movie_shot_movie")
                    .table(MovieShot::Table)
                    .col(MovieShot::MovieId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Rating::Table)
                    .if_not_exists()
                    .col(pk_auto(Rating::Id))
                    .col(string_len(Rating::Ip, 45))
                    .col(integer(Rating::StarId))
                    .col(integer(Rating::MovieId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rating_star")
                            .from(Rating::Table, Rating::StarId)
                            .to(RatingStar::Table, RatingStar::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rating_movie")
                            .from(Rating::Table, Rating::MovieId)
                            .to(Movie::Table, Movie::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(pk_auto(Review::Id))
                    .col(string_len(Review::Email, 254))
                    .col(string_len(Review::Name, 100))
                    .col(text(Review::Text))
                    .col(integer_null(Review::ParentId))
                    .col(integer(Review::MovieId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_parent")
                            .from(Review::Table, Review::ParentId)
                            .to(Review::Table, Review::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_movie")
                            .from(Review::Table, Review::MovieId)
                            .to(Movie::Table, Movie::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_review_movie")
                    .table(Review::Table)
                    .col(Review::MovieId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Review::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Rating::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(MovieShot::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Movie {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum RatingStar {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum MovieShot {
    Table,
    Id,
    Title,
    Description,
    Image,
    MovieId,
}

#[derive(DeriveIden)]
enum Rating {
    Table,
    Id,
    Ip,
    StarId,
    MovieId,
}

#[derive(DeriveIden)]
enum Review {
    Table,
    Id,
    Email,
    Name,
    Text,
    ParentId,
    MovieId,
}
