use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ========================================
        // USERS TABLE
        // ========================================
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(Users::Role)
                            .text()
                            .not_null()
                            .default("member"),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_email_unique")
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ========================================
        // SESSIONS TABLE
        // ========================================
        manager
            .create_table(
                Table::create()
                    .table(Sessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sessions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sessions::UserId).integer().not_null())
                    .col(ColumnDef::new(Sessions::SessionToken).string().not_null())
                    .col(
                        ColumnDef::new(Sessions::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Sessions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sessions_user")
                            .from(Sessions::Table, Sessions::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sessions_token_unique")
                    .table(Sessions::Table)
                    .col(Sessions::SessionToken)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ========================================
        // BLOGS TABLE
        // ========================================
        manager
            .create_table(
                Table::create()
                    .table(Blogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Blogs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Blogs::Title).string().not_null())
                    .col(ColumnDef::new(Blogs::Slug).string().not_null())
                    .col(ColumnDef::new(Blogs::Content).text().not_null())
                    .col(ColumnDef::new(Blogs::Author).string().not_null())
                    .col(
                        ColumnDef::new(Blogs::Published)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Blogs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Blogs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_blogs_slug_unique")
                    .table(Blogs::Table)
                    .col(Blogs::Slug)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_blogs_published")
                    .table(Blogs::Table)
                    .col(Blogs::Published)
                    .to_owned(),
            )
            .await?;

        // ========================================
        // LAB_MANUALS TABLE
        // ========================================
        manager
            .create_table(
                Table::create()
                    .table(LabManuals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LabManuals::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LabManuals::Title).string().not_null())
                    .col(ColumnDef::new(LabManuals::Subject).string().not_null())
                    .col(ColumnDef::new(LabManuals::Semester).integer().not_null())
                    .col(ColumnDef::new(LabManuals::FileUrl).string().not_null())
                    .col(ColumnDef::new(LabManuals::Description).text().null())
                    .col(
                        ColumnDef::new(LabManuals::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_lab_manuals_subject_semester")
                    .table(LabManuals::Table)
                    .col(LabManuals::Subject)
                    .col(LabManuals::Semester)
                    .to_owned(),
            )
            .await?;

        // ========================================
        // QUESTION_PAPERS TABLE
        // ========================================
        manager
            .create_table(
                Table::create()
                    .table(QuestionPapers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(QuestionPapers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(QuestionPapers::Title).string().not_null())
                    .col(ColumnDef::new(QuestionPapers::Subject).string().not_null())
                    .col(
                        ColumnDef::new(QuestionPapers::Semester)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(QuestionPapers::Year).integer().not_null())
                    .col(ColumnDef::new(QuestionPapers::ExamType).text().not_null())
                    .col(ColumnDef::new(QuestionPapers::FileUrl).string().not_null())
                    .col(
                        ColumnDef::new(QuestionPapers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_question_papers_subject_year")
                    .table(QuestionPapers::Table)
                    .col(QuestionPapers::Subject)
                    .col(QuestionPapers::Year)
                    .to_owned(),
            )
            .await?;

        // ========================================
        // TEXTBOOKS TABLE
        // ========================================
        manager
            .create_table(
                Table::create()
                    .table(Textbooks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Textbooks::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Textbooks::Title).string().not_null())
                    .col(ColumnDef::new(Textbooks::Subject).string().not_null())
                    .col(ColumnDef::new(Textbooks::Author).string().not_null())
                    .col(ColumnDef::new(Textbooks::Edition).string().null())
                    .col(ColumnDef::new(Textbooks::FileUrl).string().not_null())
                    .col(
                        ColumnDef::new(Textbooks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // ========================================
        // SYLLABUS_ENTRIES TABLE
        // ========================================
        manager
            .create_table(
                Table::create()
                    .table(SyllabusEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SyllabusEntries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SyllabusEntries::Subject).string().not_null())
                    .col(
                        ColumnDef::new(SyllabusEntries::Semester)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SyllabusEntries::Content).text().not_null())
                    .col(ColumnDef::new(SyllabusEntries::FileUrl).string().null())
                    .col(
                        ColumnDef::new(SyllabusEntries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(SyllabusEntries::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // ========================================
        // ANNOUNCEMENTS TABLE
        // ========================================
        manager
            .create_table(
                Table::create()
                    .table(Announcements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Announcements::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Announcements::Title).string().not_null())
                    .col(ColumnDef::new(Announcements::Body).text().not_null())
                    .col(
                        ColumnDef::new(Announcements::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Announcements::UpdatedAt)
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
            .drop_table(Table::drop().table(Announcements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SyllabusEntries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Textbooks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(QuestionPapers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LabManuals::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Blogs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Sessions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Role,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Sessions {
    Table,
    Id,
    UserId,
    SessionToken,
    ExpiresAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Blogs {
    Table,
    Id,
    Title,
    Slug,
    Content,
    Author,
    Published,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum LabManuals {
    Table,
    Id,
    Title,
    Subject,
    Semester,
    FileUrl,
    Description,
    CreatedAt,
}

#[derive(DeriveIden)]
enum QuestionPapers {
    Table,
    Id,
    Title,
    Subject,
    Semester,
    Year,
    ExamType,
    FileUrl,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Textbooks {
    Table,
    Id,
    Title,
    Subject,
    Author,
    Edition,
    FileUrl,
    CreatedAt,
}

#[derive(DeriveIden)]
enum SyllabusEntries {
    Table,
    Id,
    Subject,
    Semester,
    Content,
    FileUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Announcements {
    Table,
    Id,
    Title,
    Body,
    CreatedAt,
    UpdatedAt,
}
