use super::*;

/// Tests that plan items are numbered in the given order and read back in
/// that order.
///
/// Expected: Ok with positions 0, 1 and matching airlines
#[tokio::test]
async fn stores_items_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let trip = factory::create_trip(db).await?;
    let origin = factory::create_airport(db).await?;
    let destination = factory::create_airport(db).await?;

    let item = |code: &str, from: i32, to: i32| NewPlanItem {
        airline_code: code.to_string(),
        origin_airport_id: from,
        destination_airport_id: to,
        departure: None,
    };

    let repo = PlanItemRepository::new(db);
    repo.create_many(
        trip.trip_id,
        vec![
            item("AA", origin.id, destination.id),
            item("BA", destination.id, origin.id),
        ],
    )
    .await?;

    let items = repo.find_by_trip(trip.trip_id).await?;

    let order: Vec<_> = items
        .iter()
        .map(|i| (i.position, i.airline_code.as_str()))
        .collect();
    assert_eq!(order, vec![(0, "AA"), (1, "BA")]);

    Ok(())
}

/// Tests counting items that touch an airport and deleting a trip's items.
///
/// Expected: Ok with origin and destination both counted
#[tokio::test]
async fn counts_and_deletes_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let trip = factory::create_trip(db).await?;
    let hub = factory::create_airport(db).await?;
    let other = factory::create_airport(db).await?;
    factory::create_plan_item(db, trip.trip_id, 0, "AA", hub.id, other.id).await?;
    factory::create_plan_item(db, trip.trip_id, 1, "AA", other.id, hub.id).await?;

    let repo = PlanItemRepository::new(db);

    assert_eq!(repo.count_by_airport(hub.id).await?, 2);
    assert_eq!(repo.delete_by_trip(trip.trip_id).await?, 2);
    assert_eq!(repo.count_by_airport(hub.id).await?, 0);

    Ok(())
}

/// Tests that an empty plan stores nothing.
///
/// Expected: Ok with no items
#[tokio::test]
async fn empty_plan_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanItemRepository::new(db);
    repo.create_many(1, Vec::new()).await?;

    assert!(repo.find_by_trip(1).await?.is_empty());

    Ok(())
}
