use super::*;

/// Tests that a link is visible from both sides.
///
/// Expected: Ok with the airline listing the person and the person listing the airline
#[tokio::test]
async fn link_is_symmetric() -> Result<(), AppError> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let airline = factory::create_airline(db).await?;
    let person = factory::create_person(db).await?;

    let service = AirlineStaffService::new(db);
    service
        .link(
            TxContext::New,
            airline.airline_code.clone(),
            person.username.clone(),
        )
        .await?;

    let staff = service.staff_of(&airline.airline_code).await?;
    let employers = service.employers_of(&person.username).await?;

    assert_eq!(
        staff[0].as_ref().map(|p| p.username.as_str()),
        Some(person.username.as_str())
    );
    assert_eq!(
        employers[0].as_ref().map(|a| a.airline_code.as_str()),
        Some(airline.airline_code.as_str())
    );

    Ok(())
}

/// Tests linking a pair twice.
///
/// Expected: Err(AppError::Conflict) and still exactly one link
#[tokio::test]
async fn duplicate_link_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::create_person(db).await?;
    let trip = factory::create_trip(db).await?;

    let service = PersonTripService::new(db);
    service
        .link(TxContext::New, person.username.clone(), trip.trip_id)
        .await?;
    let result = service
        .link(TxContext::New, person.username.clone(), trip.trip_id)
        .await;

    match result {
        Err(AppError::Conflict(msg)) => assert_eq!(
            msg,
            format!(
                "Relation between person '{}' and trip '{}' already exists",
                person.username, trip.trip_id
            )
        ),
        other => panic!("expected Conflict, got {:?}", other),
    }
    assert_eq!(service.travellers_of(trip.trip_id).await?.len(), 1);

    Ok(())
}

/// Tests linking to a record that does not exist.
///
/// Expected: Err(AppError::NotFound) naming the missing trip
#[tokio::test]
async fn missing_side_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::create_person(db).await?;

    let result = PersonTripService::new(db)
        .link(TxContext::New, person.username.clone(), 404)
        .await;

    match result {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "Provided trip '404' does not exist"),
        other => panic!("expected NotFound, got {:?}", other),
    }

    Ok(())
}

/// Tests removing a link, then removing it again.
///
/// Expected: Ok, then Err(AppError::NotFound)
#[tokio::test]
async fn unlinks_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (airline, persons) = factory::helpers::create_airline_with_staff(db, 1).await?;
    let username = persons[0].username.clone();

    let service = AirlineStaffService::new(db);
    service
        .unlink(TxContext::New, airline.airline_code.clone(), username.clone())
        .await?;

    assert!(!service.link_exists(&airline.airline_code, &username).await?);

    let again = service
        .unlink(TxContext::New, airline.airline_code.clone(), username.clone())
        .await;

    match again {
        Err(AppError::NotFound(msg)) => assert_eq!(
            msg,
            format!(
                "Relation between airline '{}' and person '{}' does not exist",
                airline.airline_code, username
            )
        ),
        other => panic!("expected NotFound, got {:?}", other),
    }

    Ok(())
}
