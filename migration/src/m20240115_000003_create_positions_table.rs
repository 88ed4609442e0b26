use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Positions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Positions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Positions::InterviewFlowId).integer().not_null())
                    .col(ColumnDef::new(Positions::Title).string_len(150).not_null())
                    .col(ColumnDef::new(Positions::Description).text())
                    .col(
                        ColumnDef::new(Positions::Status)
                            .string_len(30)
                            .not_null()
                            .default("Draft"),
                    )
                    .col(
                        ColumnDef::new(Positions::IsVisible)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_positions_interview_flow_id")
                            .from(Positions::Table, Positions::InterviewFlowId)
                            .to(InterviewFlows::Table, InterviewFlows::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Positions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Positions {
    Table,
    Id,
    InterviewFlowId,
    Title,
    Description,
    Status,
    IsVisible,
}

#[derive(DeriveIden)]
enum InterviewFlows {
    Table,
    Id,
}
