use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Words::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Words::Word)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Words::Category).string().not_null())
                    .col(ColumnDef::new(Words::Hint).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create index on category for random-word lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_words_category")
                    .table(Words::Table)
                    .col(Words::Category)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Words::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Words {
    Table,
    Word,
    Category,
    Hint,
}
