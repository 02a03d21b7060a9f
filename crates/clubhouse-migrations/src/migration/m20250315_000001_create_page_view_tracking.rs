use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ========================================
        // PAGE_VIEW_EVENTS TABLE
        // ========================================
        manager
            .create_table(
                Table::create()
                    .table(PageViewEvents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PageViewEvents::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PageViewEvents::Path).string().not_null())
                    .col(ColumnDef::new(PageViewEvents::SessionId).string().null())
                    .col(ColumnDef::new(PageViewEvents::UserAgent).string().null())
                    .col(
                        ColumnDef::new(PageViewEvents::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // The aggregator filters by timestamp and groups by path; both need
        // an index once the raw table approaches the archive threshold.
        manager
            .create_index(
                Index::create()
                    .name("idx_page_view_events_timestamp")
                    .table(PageViewEvents::Table)
                    .col(PageViewEvents::Timestamp)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_page_view_events_path")
                    .table(PageViewEvents::Table)
                    .col(PageViewEvents::Path)
                    .to_owned(),
            )
            .await?;

        // ========================================
        // ARCHIVED_PAGE_VIEW_COUNTS TABLE
        // ========================================
        manager
            .create_table(
                Table::create()
                    .table(ArchivedPageViewCounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ArchivedPageViewCounts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ArchivedPageViewCounts::Count)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ArchivedPageViewCounts::ArchivedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(ArchivedPageViewCounts::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(PageViewEvents::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PageViewEvents {
    Table,
    Id,
    Path,
    SessionId,
    UserAgent,
    Timestamp,
}

#[derive(DeriveIden)]
enum ArchivedPageViewCounts {
    Table,
    Id,
    Count,
    ArchivedAt,
}
