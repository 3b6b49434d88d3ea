use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create case_status enum
        manager
            .create_type(
                Type::create()
                    .as_enum(CaseStatus::Enum)
                    .values([
                        CaseStatus::Open,
                        CaseStatus::InProgress,
                        CaseStatus::Closed,
                    ])
                    .to_owned(),
            )
            .await?;

        // Create service_cases table
        manager
            .create_table(
                Table::create()
                    .table(ServiceCases::Table)
                    .if_not_exists()
                    .col(pk_uuid(ServiceCases::Id))
                    .col(uuid(ServiceCases::ReportId))
                    .col(uuid(ServiceCases::UserId))
                    .col(string(ServiceCases::Locality))
                    .col(string(ServiceCases::Category))
                    .col(
                        ColumnDef::new(ServiceCases::Status)
                            .enumeration(
                                CaseStatus::Enum,
                                [
                                    CaseStatus::Open,
                                    CaseStatus::InProgress,
                                    CaseStatus::Closed,
                                ],
                            )
                            .not_null()
                            .default("open"),
                    )
                    .col(
                        timestamp_with_time_zone(ServiceCases::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(ServiceCases::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_cases_report_id")
                            .from(ServiceCases::Table, ServiceCases::ReportId)
                            .to(Reports::Table, Reports::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_service_cases_user_id")
                    .table(ServiceCases::Table)
                    .col(ServiceCases::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServiceCases::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(CaseStatus::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ServiceCases {
    Table,
    Id,
    ReportId,
    UserId,
    Locality,
    Category,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Reports {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum CaseStatus {
    #[sea_orm(iden = "case_status")]
    Enum,
    Open,
    InProgress,
    Closed,
}
