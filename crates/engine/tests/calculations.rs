use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

use engine::{
    BeverageClass, CalculateCmd, ConsumptionParams, CreateItemCmd, Engine, EngineError, ItemKind,
    MoneyCents, People, SupplyKind,
};
use migration::MigratorTrait;
use uuid::Uuid;

async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (engine, db)
}

async fn add_item(
    engine: &Engine,
    tenant: &str,
    name: &str,
    kind: ItemKind,
    rate: f64,
    package_size: f64,
    price_cents: i64,
) -> Uuid {
    engine
        .create_item(
            CreateItemCmd::new(tenant, name, kind)
                .per_adult_rate(rate)
                .package_size(package_size)
                .unit_price(MoneyCents::new(price_cents)),
        )
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn meat_only_event_is_computed_and_stored() {
    let (engine, _db) = engine_with_db().await;
    let picanha = add_item(&engine, "bbq", "Picanha", ItemKind::Meat, 400.0, 1000.0, 50_00).await;

    let outcome = engine
        .calculate(
            CalculateCmd::new("bbq", People::new(4, 2, 0, 0))
                .user_id("alice")
                .duration_hours(5.0)
                .item(picanha),
        )
        .await
        .unwrap();

    let line = &outcome.result.line_items[0];
    assert_eq!(line.required_quantity, 2640.0);
    assert_eq!(line.packages_to_buy, 3);
    assert_eq!(outcome.result.total_cost, MoneyCents::new(150_00));

    let id = outcome.id.expect("calculation stored");
    let stored = engine.calculation("bbq", id).await.unwrap();
    assert_eq!(stored.user_id.as_deref(), Some("alice"));
    assert_eq!(stored.result, outcome.result);
    assert_eq!(stored.request, outcome.request);
    assert_eq!(stored.request.duration_hours, 5.0);
}

#[tokio::test]
async fn tenant_params_override_defaults() {
    let (engine, _db) = engine_with_db().await;
    let soda = add_item(
        &engine,
        "party",
        "Soda",
        ItemKind::Beverage {
            beverage_class: BeverageClass::NonAlcoholic,
        },
        1.0,
        2000.0,
        8_00,
    )
    .await;

    assert_eq!(
        engine.consumption_params("party").await.unwrap(),
        ConsumptionParams::default()
    );

    let custom = ConsumptionParams {
        ml_beverage_per_adult: 1500.0,
        ..ConsumptionParams::default()
    };
    engine.set_consumption_params("party", custom).await.unwrap();
    assert_eq!(engine.consumption_params("party").await.unwrap(), custom);
    // Updating an existing override.
    let custom = ConsumptionParams {
        ml_beverage_per_adult: 1000.0,
        ..custom
    };
    engine.set_consumption_params("party", custom).await.unwrap();

    let outcome = engine
        .calculate(CalculateCmd::new("party", People::new(3, 0, 0, 0)).item(soda))
        .await
        .unwrap();
    assert_eq!(outcome.result.line_items[0].required_quantity, 3000.0);
    assert_eq!(outcome.result.line_items[0].packages_to_buy, 2);
    assert_eq!(outcome.request.params, custom);

    // Other tenants keep the defaults.
    assert_eq!(
        engine.consumption_params("other").await.unwrap(),
        ConsumptionParams::default()
    );

    engine.reset_consumption_params("party").await.unwrap();
    assert_eq!(
        engine.consumption_params("party").await.unwrap(),
        ConsumptionParams::default()
    );
}

#[tokio::test]
async fn invalid_params_are_rejected() {
    let (engine, _db) = engine_with_db().await;
    let err = engine
        .set_consumption_params(
            "party",
            ConsumptionParams {
                grams_meat_per_adult: 0.0,
                ..ConsumptionParams::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidParams(_)));
}

#[tokio::test]
async fn catalog_lists_only_active_items_of_the_tenant() {
    let (engine, _db) = engine_with_db().await;
    let charcoal = add_item(
        &engine,
        "bbq",
        "Charcoal",
        ItemKind::Supply {
            supply_kind: SupplyKind::Charcoal,
        },
        2.5,
        5.0,
        25_00,
    )
    .await;
    let beer = add_item(
        &engine,
        "bbq",
        "Beer",
        ItemKind::Beverage {
            beverage_class: BeverageClass::Alcoholic,
        },
        1000.0,
        350.0,
        4_50,
    )
    .await;
    add_item(&engine, "other", "Cake", ItemKind::Dessert, 100.0, 1.0, 1_00).await;

    let items = engine.list_items("bbq").await.unwrap();
    let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["Beer", "Charcoal"]);
    assert_eq!(
        items[0].kind,
        ItemKind::Beverage {
            beverage_class: BeverageClass::Alcoholic
        }
    );

    engine.archive_item("bbq", beer).await.unwrap();
    let items = engine.list_items("bbq").await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, charcoal);

    // Archived items cannot be selected any more.
    let err = engine
        .calculate(CalculateCmd::new("bbq", People::new(1, 0, 0, 1)).item(beer))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::KeyNotFound(_)));

    // Another tenant cannot archive it either.
    let err = engine.archive_item("other", charcoal).await.unwrap_err();
    assert!(matches!(err, EngineError::KeyNotFound(_)));
}

#[tokio::test]
async fn selection_order_is_kept_and_duplicates_are_ignored() {
    let (engine, _db) = engine_with_db().await;
    let rice = add_item(&engine, "t", "Rice", ItemKind::Side, 150.0, 1000.0, 6_00).await;
    let steak = add_item(&engine, "t", "Steak", ItemKind::Meat, 400.0, 1000.0, 60_00).await;

    let outcome = engine
        .calculate(
            CalculateCmd::new("t", People::new(10, 0, 0, 0)).items([steak, rice, steak]),
        )
        .await
        .unwrap();
    let names: Vec<&str> = outcome
        .result
        .line_items
        .iter()
        .map(|line| line.name.as_str())
        .collect();
    assert_eq!(names, vec!["Steak", "Rice"]);
    // Rice alone is below the side base: full declared ration.
    assert_eq!(outcome.result.line_items[1].required_quantity, 1500.0);
    // A side is selected: no meat-only bonus.
    assert_eq!(outcome.result.line_items[0].required_quantity, 4000.0);
}

#[tokio::test]
async fn validation_errors_are_not_stored() {
    let (engine, db) = engine_with_db().await;
    let steak = add_item(&engine, "t", "Steak", ItemKind::Meat, 400.0, 1000.0, 60_00).await;

    let err = engine
        .calculate(CalculateCmd::new("t", People::new(0, 0, 0, 0)).item(steak))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::Validation("define at least one attendee".to_string())
    );

    let err = engine
        .calculate(CalculateCmd::new("t", People::new(3, 0, 0, 0)))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::Validation("select at least one item".to_string())
    );

    let backend = db.get_database_backend();
    let row = db
        .query_one(Statement::from_string(
            backend,
            "SELECT COUNT(*) AS n FROM calculations",
        ))
        .await
        .unwrap()
        .unwrap();
    let count: i64 = row.try_get("", "n").unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn history_is_scoped_by_tenant() {
    let (engine, _db) = engine_with_db().await;
    let steak = add_item(&engine, "a", "Steak", ItemKind::Meat, 400.0, 1000.0, 60_00).await;

    for men in 1..=3 {
        engine
            .calculate(CalculateCmd::new("a", People::new(men, 0, 0, 0)).item(steak))
            .await
            .unwrap();
    }

    let history = engine.list_calculations("a", 10).await.unwrap();
    assert_eq!(history.len(), 3);
    assert!(history.iter().all(|calc| calc.tenant_id == "a"));
    assert_eq!(engine.list_calculations("a", 2).await.unwrap().len(), 2);
    assert!(engine.list_calculations("b", 10).await.unwrap().is_empty());

    let err = engine.calculation("b", history[0].id).await.unwrap_err();
    assert!(matches!(err, EngineError::KeyNotFound(_)));
}

#[tokio::test]
async fn history_order_is_total() {
    let (engine, _db) = engine_with_db().await;
    let steak = add_item(&engine, "a", "Steak", ItemKind::Meat, 400.0, 1000.0, 60_00).await;

    for men in 1..=6 {
        engine
            .calculate(CalculateCmd::new("a", People::new(men, 0, 0, 0)).item(steak))
            .await
            .unwrap();
    }

    let history = engine.list_calculations("a", 10).await.unwrap();
    let mut expected: Vec<_> = history.iter().map(|calc| (calc.created_at, calc.id)).collect();
    expected.sort_by(|a, b| b.cmp(a));
    let actual: Vec<_> = history.iter().map(|calc| (calc.created_at, calc.id)).collect();
    assert_eq!(actual, expected);

    // Same query, same order.
    let again: Vec<_> = engine
        .list_calculations("a", 10)
        .await
        .unwrap()
        .iter()
        .map(|calc| calc.id)
        .collect();
    let ids: Vec<_> = history.iter().map(|calc| calc.id).collect();
    assert_eq!(again, ids);
}

#[tokio::test]
async fn attendees_are_checked_before_the_catalog() {
    let (engine, _db) = engine_with_db().await;
    let steak = add_item(&engine, "t", "Steak", ItemKind::Meat, 400.0, 1000.0, 60_00).await;
    engine.archive_item("t", steak).await.unwrap();

    for item_id in [Uuid::new_v4(), steak] {
        let err = engine
            .calculate(CalculateCmd::new("t", People::new(0, 0, 0, 3)).item(item_id))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::Validation("define at least one attendee".to_string())
        );
    }
}

#[tokio::test]
async fn unknown_item_ids_are_rejected() {
    let (engine, _db) = engine_with_db().await;
    let err = engine
        .calculate(CalculateCmd::new("t", People::new(3, 0, 0, 0)).item(Uuid::new_v4()))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::KeyNotFound(_)));
}

#[tokio::test]
async fn empty_item_names_and_tenants_are_rejected() {
    let (engine, _db) = engine_with_db().await;
    let err = engine
        .create_item(CreateItemCmd::new("t", "  ", ItemKind::Meat))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidItem(_)));

    let err = engine.list_items(" ").await.unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));
}

#[tokio::test]
async fn builder_rejects_invalid_defaults() {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    let err = Engine::builder()
        .database(db)
        .defaults(ConsumptionParams {
            grams_dessert_per_adult: -1.0,
            ..ConsumptionParams::default()
        })
        .build()
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidParams(_)));
}

#[tokio::test]
async fn builder_defaults_apply_to_tenants_without_override() {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let defaults = ConsumptionParams {
        grams_meat_per_adult: 500.0,
        ..ConsumptionParams::default()
    };
    let engine = Engine::builder()
        .database(db)
        .defaults(defaults)
        .build()
        .await
        .unwrap();

    assert_eq!(engine.defaults(), defaults);
    assert_eq!(engine.consumption_params("any").await.unwrap(), defaults);

    let steak = add_item(&engine, "any", "Steak", ItemKind::Meat, 400.0, 1000.0, 60_00).await;
    let outcome = engine
        .calculate(CalculateCmd::new("any", People::new(2, 0, 0, 0)).item(steak))
        .await
        .unwrap();
    assert_eq!(outcome.result.line_items[0].required_quantity, 1200.0);
}

#[tokio::test]
async fn single_item_lookup_hides_archived_items() {
    let (engine, _db) = engine_with_db().await;
    let cake = add_item(&engine, "t", "Cake", ItemKind::Dessert, 100.0, 1.0, 1_00).await;

    assert_eq!(engine.item("t", cake).await.unwrap().name, "Cake");
    let err = engine.item("u", cake).await.unwrap_err();
    assert!(matches!(err, EngineError::KeyNotFound(_)));

    engine.archive_item("t", cake).await.unwrap();
    let err = engine.item("t", cake).await.unwrap_err();
    assert!(matches!(err, EngineError::KeyNotFound(_)));
}
