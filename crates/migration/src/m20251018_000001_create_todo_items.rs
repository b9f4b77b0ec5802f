use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Ids are supplied by callers, so the key is a plain integer without a sequence
        manager
            .create_table(
                Table::create()
                    .table(TodoItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TodoItems::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TodoItems::Title).string_len(255).not_null())
                    .col(
                        ColumnDef::new(TodoItems::Description)
                            .string_len(1000)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TodoItems::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum TodoItems {
    Table,
    Id,
    Title,
    Description,
}
