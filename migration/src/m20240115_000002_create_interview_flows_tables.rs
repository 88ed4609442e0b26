use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // interview_flows
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(InterviewFlows::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InterviewFlows::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(InterviewFlows::Description).text())
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // interview_steps
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(InterviewSteps::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InterviewSteps::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(InterviewSteps::InterviewFlowId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(InterviewSteps::Name).string_len(100).not_null())
                    .col(ColumnDef::new(InterviewSteps::OrderIndex).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_interview_steps_flow_id")
                            .from(InterviewSteps::Table, InterviewSteps::InterviewFlowId)
                            .to(InterviewFlows::Table, InterviewFlows::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One step per position in a flow; also serves the flow lookup.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_interview_steps_flow_order_unique
                ON interview_steps (interview_flow_id, order_index);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InterviewSteps::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(InterviewFlows::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum InterviewFlows {
    Table,
    Id,
    Description,
}

#[derive(DeriveIden)]
enum InterviewSteps {
    Table,
    Id,
    InterviewFlowId,
    Name,
    OrderIndex,
}
