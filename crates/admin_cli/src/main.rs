use std::error::Error;

use clap::{Args, Parser, Subcommand};
use engine::{
    CalculateCmd, CalculationResult, ConsumptionParams, CreateItemCmd, Engine, ItemKind,
    MoneyCents, People,
};
use migration::MigratorTrait;
use sea_orm::{Database, DatabaseConnection};
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "provisio_admin")]
#[command(about = "Admin utilities for Provisio (catalog, rations, calculations)")]
struct Cli {
    /// Database connection string (also read from `DATABASE_URL`).
    #[arg(long, env = "DATABASE_URL", default_value = migration::DEFAULT_DATABASE_URL)]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Item(Item),
    Params(Params),
    Calculate(CalculateArgs),
    History(HistoryArgs),
}

#[derive(Args, Debug)]
struct Item {
    #[command(subcommand)]
    command: ItemCommand,
}

#[derive(Subcommand, Debug)]
enum ItemCommand {
    Add(ItemAddArgs),
    List(TenantArgs),
    Archive(ItemArchiveArgs),
}

#[derive(Args, Debug)]
struct TenantArgs {
    #[arg(long)]
    tenant: String,
}

#[derive(Args, Debug)]
struct ItemAddArgs {
    #[arg(long)]
    tenant: String,
    #[arg(long)]
    name: String,
    /// MEAT, SIDE, OTHER, DESSERT, BEVERAGE or SUPPLY.
    #[arg(long)]
    category: String,
    /// Per adult rate (g, ml or units depending on the category).
    #[arg(long, default_value_t = 0.0)]
    rate: f64,
    #[arg(long, default_value_t = 1.0)]
    package_size: f64,
    /// Package price, e.g. `12.50`.
    #[arg(long, default_value = "0")]
    price: MoneyCents,
    /// ALCOHOLIC or NON_ALCOHOLIC (beverages only).
    #[arg(long)]
    beverage_class: Option<String>,
    /// CHARCOAL, FIRESTARTER or OTHER (supplies only).
    #[arg(long)]
    supply_kind: Option<String>,
}

#[derive(Args, Debug)]
struct ItemArchiveArgs {
    #[arg(long)]
    tenant: String,
    #[arg(long)]
    id: Uuid,
}

#[derive(Args, Debug)]
struct Params {
    #[command(subcommand)]
    command: ParamsCommand,
}

#[derive(Subcommand, Debug)]
enum ParamsCommand {
    Show(TenantArgs),
    Set(ParamsSetArgs),
    Reset(TenantArgs),
}

#[derive(Args, Debug)]
struct ParamsSetArgs {
    #[arg(long)]
    tenant: String,
    /// Grams of meat per adult.
    #[arg(long)]
    meat: Option<f64>,
    /// Grams of sides per adult.
    #[arg(long)]
    side: Option<f64>,
    /// Milliliters of beverage per adult.
    #[arg(long)]
    beverage: Option<f64>,
    /// Grams of dessert per adult.
    #[arg(long)]
    dessert: Option<f64>,
}

#[derive(Args, Debug)]
struct CalculateArgs {
    #[arg(long)]
    tenant: String,
    #[arg(long, default_value_t = 0)]
    men: u32,
    #[arg(long, default_value_t = 0)]
    women: u32,
    #[arg(long, default_value_t = 0)]
    children: u32,
    #[arg(long, default_value_t = 0)]
    drinkers: u32,
    #[arg(long, default_value_t = 0.0)]
    hours: f64,
    /// Comma separated item ids.
    #[arg(long, value_delimiter = ',')]
    items: Vec<Uuid>,
    /// Stored as the author of the calculation.
    #[arg(long)]
    user: Option<String>,
}

#[derive(Args, Debug)]
struct HistoryArgs {
    #[arg(long)]
    tenant: String,
    #[arg(long, default_value_t = 10)]
    limit: u64,
}

async fn connect_db(
    database_url: &str,
) -> Result<DatabaseConnection, Box<dyn Error + Send + Sync>> {
    let db = Database::connect(database_url).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

fn print_params(params: &ConsumptionParams) {
    println!("meat:     {} g/adult", params.grams_meat_per_adult);
    println!("side:     {} g/adult", params.grams_side_per_adult);
    println!("beverage: {} ml/adult", params.ml_beverage_per_adult);
    println!("dessert:  {} g/adult", params.grams_dessert_per_adult);
}

fn print_result(result: &CalculationResult) {
    println!(
        "people: {} (adults {}, drinkers {}, adult equivalent {})",
        result.total_people, result.adult_people, result.drinker_people, result.adult_equivalent
    );
    for line in &result.line_items {
        println!(
            "{:<24} {:<12} {:>10} -> {:>4} x {:<8} = {:>10}",
            line.name,
            line.category,
            line.required_quantity,
            line.packages_to_buy,
            line.package_size,
            line.line_cost.to_string()
        );
    }
    println!("total: {}", result.total_cost);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();

    let db = connect_db(&cli.database_url).await?;
    let engine = Engine::builder().database(db).build().await?;

    match cli.command {
        Command::Item(Item {
            command: ItemCommand::Add(args),
        }) => {
            let kind = ItemKind::parse(
                &args.category,
                args.beverage_class.as_deref(),
                args.supply_kind.as_deref(),
            )?;
            let item = engine
                .create_item(
                    CreateItemCmd::new(&args.tenant, args.name, kind)
                        .unit_price(args.price)
                        .per_adult_rate(args.rate)
                        .package_size(args.package_size),
                )
                .await?;
            println!("created item: {} ({})", item.name, item.id);
        }
        Command::Item(Item {
            command: ItemCommand::List(args),
        }) => {
            for item in engine.list_items(&args.tenant).await? {
                println!(
                    "{} {:<24} {:<12} rate {:<8} package {:<8} price {}",
                    item.id,
                    item.name,
                    item.kind.category(),
                    item.rate(),
                    item.package_size(),
                    item.unit_price()
                );
            }
        }
        Command::Item(Item {
            command: ItemCommand::Archive(args),
        }) => {
            engine.archive_item(&args.tenant, args.id).await?;
            println!("archived item: {}", args.id);
        }
        Command::Params(Params {
            command: ParamsCommand::Show(args),
        }) => {
            print_params(&engine.consumption_params(&args.tenant).await?);
        }
        Command::Params(Params {
            command: ParamsCommand::Set(args),
        }) => {
            let current = engine.consumption_params(&args.tenant).await?;
            let params = ConsumptionParams {
                grams_meat_per_adult: args.meat.unwrap_or(current.grams_meat_per_adult),
                grams_side_per_adult: args.side.unwrap_or(current.grams_side_per_adult),
                ml_beverage_per_adult: args.beverage.unwrap_or(current.ml_beverage_per_adult),
                grams_dessert_per_adult: args.dessert.unwrap_or(current.grams_dessert_per_adult),
            };
            engine.set_consumption_params(&args.tenant, params).await?;
            print_params(&params);
        }
        Command::Params(Params {
            command: ParamsCommand::Reset(args),
        }) => {
            engine.reset_consumption_params(&args.tenant).await?;
            print_params(&engine.consumption_params(&args.tenant).await?);
        }
        Command::Calculate(args) => {
            let people = People::new(args.men, args.women, args.children, args.drinkers);
            let mut cmd = CalculateCmd::new(&args.tenant, people)
                .duration_hours(args.hours)
                .items(args.items);
            if let Some(user) = args.user {
                cmd = cmd.user_id(user);
            }
            let outcome = engine.calculate(cmd).await?;
            print_result(&outcome.result);
            match outcome.id {
                Some(id) => println!("stored as {id}"),
                None => eprintln!("calculation was not stored"),
            }
        }
        Command::History(args) => {
            for calc in engine.list_calculations(&args.tenant, args.limit).await? {
                println!(
                    "{} {} {} people, {} lines, total {}",
                    calc.id,
                    calc.created_at.format("%Y-%m-%d %H:%M"),
                    calc.result.total_people,
                    calc.result.line_items.len(),
                    calc.result.total_cost
                );
            }
        }
    }

    Ok(())
}
