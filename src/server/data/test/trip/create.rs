use super::*;

/// Tests that trip ids are allocated after the current maximum.
///
/// Expected: Ok(1) on an empty table, then the maximum plus one
#[tokio::test]
async fn allocates_next_trip_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TripRepository::new(db);
    assert_eq!(repo.next_trip_id().await?, 1);

    factory::trip::TripFactory::new(db).trip_id(7).build().await?;
    factory::trip::TripFactory::new(db).trip_id(3).build().await?;

    assert_eq!(repo.next_trip_id().await?, 8);

    Ok(())
}

/// Tests creating and finding a trip.
///
/// Expected: Ok with the trip found by its id
#[tokio::test]
async fn creates_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TripRepository::new(db);
    let created = repo
        .create(NewTrip {
            trip_id: 42,
            name: "Island hopping".to_string(),
            description: None,
            budget: Some(1200),
        })
        .await?;

    assert_eq!(repo.find_by_trip_id(42).await?, Some(created));
    assert_eq!(repo.find_all().await?.len(), 1);

    Ok(())
}
