use super::*;

/// Tests that deleting a person removes their trip and staff links only.
///
/// Expected: Ok with the links gone, the trip and the airline kept
#[tokio::test]
async fn removes_links_of_person() -> Result<(), AppError> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (trip, travellers) = factory::helpers::create_trip_with_travellers(db, 2).await?;
    let airline = factory::create_airline(db).await?;
    factory::create_airline_staff(db, &airline.airline_code, &travellers[0].username).await?;

    PersonService::new(db)
        .delete(TxContext::New, &travellers[0].username)
        .await?;

    let remaining = PersonTripService::new(db)
        .travellers_of(trip.trip_id)
        .await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(
        remaining[0].as_ref().map(|p| p.username.as_str()),
        Some(travellers[1].username.as_str())
    );
    assert!(AirlineStaffService::new(db)
        .staff_of(&airline.airline_code)
        .await?
        .is_empty());

    Ok(())
}
