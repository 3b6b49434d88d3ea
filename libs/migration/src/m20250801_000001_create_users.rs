use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create user_role enum
        manager
            .create_type(
                Type::create()
                    .as_enum(UserRole::Enum)
                    .values([UserRole::Admin, UserRole::Representative, UserRole::Citizen])
                    .to_owned(),
            )
            .await?;

        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_uuid(Users::Id))
                    .col(string(Users::Username))
                    .col(string(Users::PasswordHash))
                    .col(uuid(Users::ContactId))
                    .col(string(Users::Email))
                    .col(string(Users::Phone))
                    .col(
                        ColumnDef::new(Users::Role)
                            .enumeration(
                                UserRole::Enum,
                                [UserRole::Admin, UserRole::Representative, UserRole::Citizen],
                            )
                            .not_null(),
                    )
                    .col(string(Users::Locality))
                    .col(string(Users::Street))
                    .col(boolean(Users::Verified).default(false))
                    .col(
                        timestamp_with_time_zone(Users::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Users::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_contact_id")
                            .from(Users::Table, Users::ContactId)
                            .to(Contacts::Table, Contacts::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Username uniqueness is enforced here, not in application code.
        // PgUserRepository matches this index name when translating
        // constraint violations.
        manager
            .create_index(
                Index::create()
                    .name("idx_users_username_unique")
                    .table(Users::Table)
                    .col(Users::Username)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_role_locality")
                    .table(Users::Table)
                    .col(Users::Role)
                    .col(Users::Locality)
                    .to_owned(),
            )
            .await?;

        // At most one verified representative per locality. Partial
        // indexes are not expressible through the schema builder.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_users_one_verified_representative
                    ON users (locality)
                    WHERE role = 'representative' AND verified
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_users_one_verified_representative")
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(UserRole::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    PasswordHash,
    ContactId,
    Email,
    Phone,
    Role,
    Locality,
    Street,
    Verified,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Contacts {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum UserRole {
    #[sea_orm(iden = "user_role")]
    Enum,
    Admin,
    Representative,
    Citizen,
}
