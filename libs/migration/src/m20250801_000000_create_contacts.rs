use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create contact_status enum
        manager
            .create_type(
                Type::create()
                    .as_enum(ContactStatus::Enum)
                    .values([ContactStatus::Lead, ContactStatus::Registered])
                    .to_owned(),
            )
            .await?;

        // Create contacts table
        manager
            .create_table(
                Table::create()
                    .table(Contacts::Table)
                    .if_not_exists()
                    .col(pk_uuid(Contacts::Id))
                    .col(
                        ColumnDef::new(Contacts::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(string(Contacts::Phone))
                    .col(
                        ColumnDef::new(Contacts::Status)
                            .enumeration(
                                ContactStatus::Enum,
                                [ContactStatus::Lead, ContactStatus::Registered],
                            )
                            .not_null()
                            .default("lead"),
                    )
                    .col(
                        timestamp_with_time_zone(Contacts::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Contacts::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_contacts_status")
                    .table(Contacts::Table)
                    .col(Contacts::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Contacts::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(ContactStatus::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Contacts {
    Table,
    Id,
    Email,
    Phone,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ContactStatus {
    #[sea_orm(iden = "contact_status")]
    Enum,
    Lead,
    Registered,
}
