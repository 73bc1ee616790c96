use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Scores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Scores::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Scores::Nickname).string().not_null())
                    .col(ColumnDef::new(Scores::Score).integer().not_null())
                    .col(
                        ColumnDef::new(Scores::ElapsedSeconds)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Scores::Attempts).integer().not_null())
                    .col(
                        ColumnDef::new(Scores::UsedHint)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Scores::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create index on score for leaderboard queries
        manager
            .create_index(
                Index::create()
                    .name("idx_scores_score")
                    .table(Scores::Table)
                    .col(Scores::Score)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Scores::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Scores {
    Table,
    Id,
    Nickname,
    Score,
    ElapsedSeconds,
    Attempts,
    UsedHint,
    CreatedAt,
}
