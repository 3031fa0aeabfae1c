use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Cards {
    Table,
    Id,
    Event,
    Sheet,
    Position,
    Grid,
    Round,
    Prize,
    Used,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cards::Table)
                    .if_not_exists()
                    // Ids carry the event/sheet/position encoding: {event}_F{sheet}C{position}
                    .col(ColumnDef::new(Cards::Id).text().not_null().primary_key())
                    .col(ColumnDef::new(Cards::Event).text().not_null())
                    .col(ColumnDef::new(Cards::Sheet).integer().not_null())
                    .col(ColumnDef::new(Cards::Position).integer().not_null())
                    .col(ColumnDef::new(Cards::Grid).text().not_null())
                    .col(ColumnDef::new(Cards::Round).integer().not_null())
                    .col(
                        ColumnDef::new(Cards::Prize)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Cards::Used)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Cards::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cards_event")
                    .table(Cards::Table)
                    .col(Cards::Event)
                    .to_owned(),
            )
            .await?;

        // list_unused filters on (used, round) and orders by (sheet, position)
        manager
            .create_index(
                Index::create()
                    .name("idx_cards_used_round")
                    .table(Cards::Table)
                    .col(Cards::Used)
                    .col(Cards::Round)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cards::Table).to_owned())
            .await
    }
}
