//! Initial schema migration - creates all tables from scratch.
//!
//! - `catalog_items`: purchasable items per tenant
//! - `consumption_params`: per-tenant ration overrides
//! - `calculations`: stored calculation snapshots (request + result JSON)

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ─────────────────────────────────────────────────────────────────────────────
// Table identifiers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Iden)]
enum CatalogItems {
    Table,
    Id,
    TenantId,
    Name,
    UnitPriceMinor,
    Category,
    BeverageClass,
    SupplyKind,
    PerAdultRate,
    PackageSize,
    Active,
}

#[derive(Iden)]
enum ConsumptionParams {
    Table,
    TenantId,
    GramsMeatPerAdult,
    GramsSidePerAdult,
    MlBeveragePerAdult,
    GramsDessertPerAdult,
}

#[derive(Iden)]
enum Calculations {
    Table,
    Id,
    TenantId,
    UserId,
    CreatedAt,
    TotalCostMinor,
    RequestJson,
    ResultJson,
}

// ─────────────────────────────────────────────────────────────────────────────
// Migration implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ───────────────────────────────────────────────────────────────────
        // 1. Catalog items
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(CatalogItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CatalogItems::Id)
                            .blob()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CatalogItems::TenantId).string().not_null())
                    .col(ColumnDef::new(CatalogItems::Name).string().not_null())
                    .col(
                        ColumnDef::new(CatalogItems::UnitPriceMinor)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(CatalogItems::Category).string().not_null())
                    .col(ColumnDef::new(CatalogItems::BeverageClass).string())
                    .col(ColumnDef::new(CatalogItems::SupplyKind).string())
                    .col(
                        ColumnDef::new(CatalogItems::PerAdultRate)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(CatalogItems::PackageSize)
                            .double()
                            .not_null()
                            .default(1.0),
                    )
                    .col(
                        ColumnDef::new(CatalogItems::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-catalog_items-tenant_id-active")
                    .table(CatalogItems::Table)
                    .col(CatalogItems::TenantId)
                    .col(CatalogItems::Active)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 2. Consumption params
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(ConsumptionParams::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ConsumptionParams::TenantId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ConsumptionParams::GramsMeatPerAdult)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ConsumptionParams::GramsSidePerAdult)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ConsumptionParams::MlBeveragePerAdult)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ConsumptionParams::GramsDessertPerAdult)
                            .double()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 3. Calculations
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Calculations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Calculations::Id)
                            .blob()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Calculations::TenantId).string().not_null())
                    .col(ColumnDef::new(Calculations::UserId).string())
                    .col(
                        ColumnDef::new(Calculations::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Calculations::TotalCostMinor)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Calculations::RequestJson).text().not_null())
                    .col(ColumnDef::new(Calculations::ResultJson).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-calculations-tenant_id-created_at")
                    .table(Calculations::Table)
                    .col(Calculations::TenantId)
                    .col(Calculations::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Calculations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ConsumptionParams::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CatalogItems::Table).to_owned())
            .await?;
        Ok(())
    }
}
