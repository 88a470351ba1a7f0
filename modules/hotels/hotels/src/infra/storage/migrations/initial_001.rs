use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn id_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

fn timestamp_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .not_null()
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(id_col(Users::Id))
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(timestamp_col(Users::CreatedAt))
                    .col(timestamp_col(Users::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Sessions::Table)
                    .if_not_exists()
                    .col(id_col(Sessions::Id))
                    .col(ColumnDef::new(Sessions::UserId).integer().not_null())
                    .col(ColumnDef::new(Sessions::Token).text().not_null())
                    .col(timestamp_col(Sessions::CreatedAt))
                    .col(timestamp_col(Sessions::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Sessions::Table, Sessions::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Enrollments::Table)
                    .if_not_exists()
                    .col(id_col(Enrollments::Id))
                    .col(ColumnDef::new(Enrollments::Name).string().not_null())
                    .col(
                        ColumnDef::new(Enrollments::Cpf)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(timestamp_col(Enrollments::Birthday))
                    .col(ColumnDef::new(Enrollments::Phone).string().not_null())
                    .col(
                        ColumnDef::new(Enrollments::UserId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(timestamp_col(Enrollments::CreatedAt))
                    .col(timestamp_col(Enrollments::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Enrollments::Table, Enrollments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TicketTypes::Table)
                    .if_not_exists()
                    .col(id_col(TicketTypes::Id))
                    .col(ColumnDef::new(TicketTypes::Name).string().not_null())
                    .col(ColumnDef::new(TicketTypes::Price).integer().not_null())
                    .col(ColumnDef::new(TicketTypes::IsRemote).boolean().not_null())
                    .col(
                        ColumnDef::new(TicketTypes::IncludesHotel)
                            .boolean()
                            .not_null(),
                    )
                    .col(timestamp_col(TicketTypes::CreatedAt))
                    .col(timestamp_col(TicketTypes::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tickets::Table)
                    .if_not_exists()
                    .col(id_col(Tickets::Id))
                    .col(ColumnDef::new(Tickets::TicketTypeId).integer().not_null())
                    .col(ColumnDef::new(Tickets::EnrollmentId).integer().not_null())
                    .col(ColumnDef::new(Tickets::Status).string().not_null())
                    .col(timestamp_col(Tickets::CreatedAt))
                    .col(timestamp_col(Tickets::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Tickets::Table, Tickets::TicketTypeId)
                            .to(TicketTypes::Table, TicketTypes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Tickets::Table, Tickets::EnrollmentId)
                            .to(Enrollments::Table, Enrollments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tickets_enrollment")
                    .table(Tickets::Table)
                    .col(Tickets::EnrollmentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Hotels::Table)
                    .if_not_exists()
                    .col(id_col(Hotels::Id))
                    .col(ColumnDef::new(Hotels::Name).string().not_null())
                    .col(ColumnDef::new(Hotels::Image).string().not_null())
                    .col(timestamp_col(Hotels::CreatedAt))
                    .col(timestamp_col(Hotels::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(id_col(Rooms::Id))
                    .col(ColumnDef::new(Rooms::Name).string().not_null())
                    .col(ColumnDef::new(Rooms::Capacity).integer().not_null())
                    .col(ColumnDef::new(Rooms::HotelId).integer().not_null())
                    .col(timestamp_col(Rooms::CreatedAt))
                    .col(timestamp_col(Rooms::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Rooms::Table, Rooms::HotelId)
                            .to(Hotels::Table, Hotels::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rooms_hotel")
                    .table(Rooms::Table)
                    .col(Rooms::HotelId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Hotels::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tickets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TicketTypes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Enrollments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Sessions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Sessions {
    Table,
    Id,
    UserId,
    Token,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Enrollments {
    Table,
    Id,
    Name,
    Cpf,
    Birthday,
    Phone,
    UserId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum TicketTypes {
    Table,
    Id,
    Name,
    Price,
    IsRemote,
    IncludesHotel,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Tickets {
    Table,
    Id,
    TicketTypeId,
    EnrollmentId,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Hotels {
    Table,
    Id,
    Name,
    Image,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Rooms {
    Table,
    Id,
    Name,
    Capacity,
    HotelId,
    CreatedAt,
    UpdatedAt,
}
