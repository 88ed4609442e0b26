use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // applications
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Applications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Applications::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Applications::PositionId).integer().not_null())
                    .col(ColumnDef::new(Applications::CandidateId).integer().not_null())
                    .col(
                        ColumnDef::new(Applications::ApplicationDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Applications::CurrentInterviewStep)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Applications::Notes).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_applications_position_id")
                            .from(Applications::Table, Applications::PositionId)
                            .to(Positions::Table, Positions::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_applications_candidate_id")
                            .from(Applications::Table, Applications::CandidateId)
                            .to(Candidates::Table, Candidates::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_applications_current_interview_step")
                            .from(Applications::Table, Applications::CurrentInterviewStep)
                            .to(InterviewSteps::Table, InterviewSteps::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // interviews
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Interviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Interviews::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Interviews::ApplicationId).integer().not_null())
                    .col(ColumnDef::new(Interviews::InterviewStepId).integer().not_null())
                    .col(
                        ColumnDef::new(Interviews::InterviewDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Interviews::Result).text())
                    .col(ColumnDef::new(Interviews::Score).integer())
                    .col(ColumnDef::new(Interviews::Notes).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_interviews_application_id")
                            .from(Interviews::Table, Interviews::ApplicationId)
                            .to(Applications::Table, Applications::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_interviews_interview_step_id")
                            .from(Interviews::Table, Interviews::InterviewStepId)
                            .to(InterviewSteps::Table, InterviewSteps::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Pipeline view per position; stage lookup per candidate
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_applications_position_id
                ON applications (position_id);
                CREATE INDEX IF NOT EXISTS idx_applications_candidate_id
                ON applications (candidate_id);
                CREATE INDEX IF NOT EXISTS idx_interviews_application_id
                ON interviews (application_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Interviews::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Applications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Applications {
    Table,
    Id,
    PositionId,
    CandidateId,
    ApplicationDate,
    CurrentInterviewStep,
    Notes,
}

#[derive(DeriveIden)]
enum Interviews {
    Table,
    Id,
    ApplicationId,
    InterviewStepId,
    InterviewDate,
    Result,
    Score,
    Notes,
}

#[derive(DeriveIden)]
enum Positions {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Candidates {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum InterviewSteps {
    Table,
    Id,
}
