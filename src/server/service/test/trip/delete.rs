use super::*;

/// Tests that deleting a trip removes its plan and links but keeps the people.
///
/// Expected: Ok with the trip gone, the person kept and no trips listed for them
#[tokio::test]
async fn removes_plan_and_links() -> Result<(), AppError> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (trip, travellers) = factory::helpers::create_trip_with_travellers(db, 1).await?;
    let airport = factory::create_airport(db).await?;
    factory::create_plan_item(db, trip.trip_id, 0, "AA", airport.id, airport.id).await?;

    let service = TripService::new(db);
    service.delete(TxContext::New, trip.trip_id).await?;

    assert!(!service.exists(trip.trip_id).await?);
    assert!(PersonService::new(db).exists(&travellers[0].username).await?);
    assert!(PersonTripService::new(db)
        .trips_of(&travellers[0].username)
        .await?
        .is_empty());
    assert!(matches!(
        service.get(trip.trip_id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests deleting a trip that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unknown_trip_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TripService::new(db).delete(TxContext::New, 999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
