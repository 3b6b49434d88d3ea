use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create report_status enum
        manager
            .create_type(
                Type::create()
                    .as_enum(ReportStatus::Enum)
                    .values([
                        ReportStatus::Received,
                        ReportStatus::InProgress,
                        ReportStatus::Resolved,
                        ReportStatus::Rejected,
                    ])
                    .to_owned(),
            )
            .await?;

        // Create reports table
        manager
            .create_table(
                Table::create()
                    .table(Reports::Table)
                    .if_not_exists()
                    .col(pk_uuid(Reports::Id))
                    .col(uuid(Reports::UserId))
                    .col(string(Reports::Locality))
                    .col(text(Reports::Description))
                    .col(
                        ColumnDef::new(Reports::Status)
                            .enumeration(
                                ReportStatus::Enum,
                                [
                                    ReportStatus::Received,
                                    ReportStatus::InProgress,
                                    ReportStatus::Resolved,
                                    ReportStatus::Rejected,
                                ],
                            )
                            .not_null()
                            .default("received"),
                    )
                    .col(
                        timestamp_with_time_zone(Reports::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Reports::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reports_user_id")
                            .from(Reports::Table, Reports::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reports_locality")
                    .table(Reports::Table)
                    .col(Reports::Locality)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reports_user_id")
                    .table(Reports::Table)
                    .col(Reports::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reports::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(ReportStatus::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Reports {
    Table,
    Id,
    UserId,
    Locality,
    Description,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum ReportStatus {
    #[sea_orm(iden = "report_status")]
    Enum,
    Received,
    InProgress,
    Resolved,
    Rejected,
}
