use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        tracing::info!("Creating posts table");

        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Posts::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Posts::Title)
                            .text()
                            .not_null()
                            .check(Expr::cust("char_length(title) > 0")),
                    )
                    .col(ColumnDef::new(Posts::Topic).text().null())
                    .col(ColumnDef::new(Posts::Type2).text().null())
                    .col(ColumnDef::new(Posts::Date).text().null())
                    .col(ColumnDef::new(Posts::Views).big_integer().null())
                    .col(ColumnDef::new(Posts::Likes).big_integer().null())
                    .col(ColumnDef::new(Posts::Comments).big_integer().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    Id,
    Title,
    Topic,
    Type2,
    Date,
    Views,
    Likes,
    Comments,
}
