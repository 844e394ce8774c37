use super::*;

fn filter(field: &str, operator: FilterOperator, value: impl Into<FilterValue>) -> FilterSpec {
    FilterSpec::new(field, operator, value.into())
}

/// Tests that an empty filter matches the whole collection.
///
/// Expected: Ok with every airline and a matching count
#[tokio::test]
async fn empty_filter_matches_everything() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_airline(db).await?;
    }

    let page = SearchRepository::new(db)
        .search::<entity::airline::Entity>(&SearchCriteria::default())
        .await?;

    assert_eq!(page.count, 3);
    assert_eq!(page.data.len(), 3);

    Ok(())
}

/// Tests that contains matches case-insensitively and that the count is not
/// capped by the page size.
///
/// Expected: Ok with only names containing "air"
#[tokio::test]
async fn contains_is_case_insensitive() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Test Air", "AIRWAYS", "Flybe", "Fair Wings"] {
        factory::airline::AirlineFactory::new(db).name(name).build().await?;
    }

    let criteria = SearchCriteria::filtered(vec![filter("name", FilterOperator::Contains, "Air")])
        .with_pagination(2, 1);
    let page = SearchRepository::new(db)
        .search::<entity::airline::Entity>(&criteria)
        .await?;

    assert_eq!(page.count, 3);
    assert_eq!(page.data.len(), 2);
    assert!(page
        .data
        .iter()
        .all(|airline| airline.name.to_lowercase().contains("air")));

    Ok(())
}

/// Tests that endsWith matches suffixes and startsWith matches prefixes.
///
/// Expected: Ok with exactly one distinct airline per operator
#[tokio::test]
async fn ends_with_differs_from_starts_with() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::airline::AirlineFactory::new(db).name("Sky Air").build().await?;
    factory::airline::AirlineFactory::new(db).name("Air Sky").build().await?;

    let repo = SearchRepository::new(db);
    let suffix = repo
        .search::<entity::airline::Entity>(&SearchCriteria::filtered(vec![filter(
            "name",
            FilterOperator::EndsWith,
            "air",
        )]))
        .await?;
    let prefix = repo
        .search::<entity::airline::Entity>(&SearchCriteria::filtered(vec![filter(
            "name",
            FilterOperator::StartsWith,
            "air",
        )]))
        .await?;

    assert_eq!(suffix.count, 1);
    assert_eq!(suffix.data[0].name, "Sky Air");
    assert_eq!(prefix.count, 1);
    assert_eq!(prefix.data[0].name, "Air Sky");

    Ok(())
}

/// Tests that a filter without operator matches the whole value ignoring case.
///
/// Expected: Ok with the single exact match
#[tokio::test]
async fn exact_matches_whole_value() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::person::PersonFactory::new(db)
        .first_name("Ann")
        .build()
        .await?;
    factory::person::PersonFactory::new(db)
        .first_name("Anna")
        .build()
        .await?;

    let page = SearchRepository::new(db)
        .search::<entity::person::Entity>(&SearchCriteria::filtered(vec![filter(
            "firstName",
            FilterOperator::Exact,
            "ann",
        )]))
        .await?;

    assert_eq!(page.count, 1);
    assert_eq!(page.data[0].first_name, "Ann");

    Ok(())
}

/// Tests numeric range operators.
///
/// Expected: Ok with people aged 30 and over
#[tokio::test]
async fn compares_numbers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for age in [25, 30, 45] {
        factory::person::PersonFactory::new(db).age(age).build().await?;
    }

    let repo = SearchRepository::new(db);
    let adults = repo
        .search::<entity::person::Entity>(&SearchCriteria::filtered(vec![filter(
            "age",
            FilterOperator::Gte,
            30i64,
        )]))
        .await?;
    let young = repo
        .count::<entity::person::Entity>(&SearchCriteria::filtered(vec![filter(
            "age",
            FilterOperator::Lt,
            30i64,
        )]))
        .await?;

    assert_eq!(adults.count, 2);
    assert!(adults.data.iter().all(|p| p.age.unwrap_or(0) >= 30));
    assert_eq!(young, 1);

    Ok(())
}

/// Tests that a later filter on the same field replaces the earlier one.
///
/// Expected: Ok matching only the value of the second filter
#[tokio::test]
async fn later_filter_on_same_field_wins() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::person::PersonFactory::new(db).age(1).build().await?;
    factory::person::PersonFactory::new(db).age(2).build().await?;

    let page = SearchRepository::new(db)
        .search::<entity::person::Entity>(&SearchCriteria::filtered(vec![
            filter("age", FilterOperator::Eq, 1i64),
            filter("age", FilterOperator::Eq, 2i64),
        ]))
        .await?;

    assert_eq!(page.count, 1);
    assert_eq!(page.data[0].age, Some(2));

    Ok(())
}

/// Tests that differently spelled names of one column merge like a repeated field.
///
/// Expected: Ok matching only the value of the second filter
#[tokio::test]
async fn aliases_of_one_column_merge() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["One", "Two"] {
        factory::airline::AirlineFactory::new(db).name(name).build().await?;
    }

    let page = SearchRepository::new(db)
        .search::<entity::airline::Entity>(&SearchCriteria::filtered(vec![
            filter("name", FilterOperator::Eq, "One"),
            filter("Name", FilterOperator::Eq, "Two"),
        ]))
        .await?;

    assert_eq!(page.count, 1);
    assert_eq!(page.data[0].name, "Two");

    Ok(())
}

/// Tests that filters on different fields are combined with AND.
///
/// Expected: Ok with the person matching both filters
#[tokio::test]
async fn combines_fields_with_and() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::person::PersonFactory::new(db)
        .first_name("Kate")
        .age(30)
        .build()
        .await?;
    factory::person::PersonFactory::new(db)
        .first_name("Kate")
        .age(50)
        .build()
        .await?;

    let count = SearchRepository::new(db)
        .count::<entity::person::Entity>(&SearchCriteria::filtered(vec![
            filter("firstName", FilterOperator::Eq, "kate"),
            filter("age", FilterOperator::Gt, 40i64),
        ]))
        .await?;

    assert_eq!(count, 1);

    Ok(())
}

/// Tests that a filter on an unknown field matches nothing.
///
/// Expected: Ok with an empty page and a zero count
#[tokio::test]
async fn unknown_field_matches_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_person(db).await?;

    let page = SearchRepository::new(db)
        .search::<entity::person::Entity>(&SearchCriteria::filtered(vec![filter(
            "shoeSize",
            FilterOperator::Eq,
            44i64,
        )]))
        .await?;

    assert_eq!(page.count, 0);
    assert!(page.data.is_empty());

    Ok(())
}
