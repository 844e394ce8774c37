use super::*;

/// Tests that creating a trip creates the airline, airports and traveller it
/// references and links the traveller.
///
/// Expected: Ok with one plan item, all referenced records and one link stored
#[tokio::test]
async fn cascades_into_references() -> Result<(), AppError> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = TripService::new(db)
        .create(
            TxContext::New,
            CreateTripParam {
                trip_id: Some(10),
                plan_items: vec![leg(
                    AirlineRef {
                        airline_code: "NW".to_string(),
                        name: Some("New Wings".to_string()),
                    },
                    new_airport("EGLL", "LHR"),
                    new_airport("LFPG", "CDG"),
                )],
                travellers: vec![new_traveller("alice")],
                ..trip("Paris")
            },
        )
        .await?;

    assert_eq!(created.trip_id, 10);
    assert_eq!(created.plan_items.len(), 1);
    assert_eq!(created.plan_items[0].position, 0);
    assert_eq!(
        created.plan_items[0].origin,
        Some(AirportKey::new("EGLL", "LHR").into_dto())
    );

    let probe = ExistenceProbe::new(db);
    assert!(probe.exists::<entity::airline::Entity>(&"NW".to_string()).await?);
    assert!(
        probe
            .exists::<entity::airport::Entity>(&AirportKey::new("LFPG", "CDG"))
            .await?
    );
    assert!(PersonService::new(db).exists("alice").await?);
    assert!(PersonTripService::new(db).link_exists(&"alice".to_string(), &10).await?);

    Ok(())
}

/// Tests that existing references are reused and that a traveller listed twice
/// is linked once.
///
/// Expected: Ok with a generated trip id and a single link
#[tokio::test]
async fn reuses_existing_references() -> Result<(), AppError> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let airline = factory::create_airline(db).await?;
    let origin = factory::create_airport(db).await?;
    let destination = factory::create_airport(db).await?;
    let person = factory::create_person(db).await?;
    factory::trip::TripFactory::new(db).trip_id(4).build().await?;

    let reference = |airport: &entity::airport::Model| AirportRef {
        icao: airport.icao.clone(),
        iata: airport.iata.clone(),
        name: None,
        city: None,
        country: None,
    };

    let created = TripService::new(db)
        .create(
            TxContext::New,
            CreateTripParam {
                plan_items: vec![leg(
                    AirlineRef {
                        airline_code: airline.airline_code.clone(),
                        name: None,
                    },
                    reference(&origin),
                    reference(&destination),
                )],
                travellers: vec![
                    TravellerParam::username(&person.username),
                    TravellerParam::username(&person.username),
                ],
                ..trip("Reuse")
            },
        )
        .await?;

    assert_eq!(created.trip_id, 5);
    let travellers = PersonTripService::new(db)
        .travellers_of(created.trip_id)
        .await?;
    assert_eq!(travellers.len(), 1);

    Ok(())
}

/// Tests that a failure in the second plan item undoes everything written for
/// the first one.
///
/// Expected: Err(AppError::InvalidInput) and neither the trip nor the new
/// airline and airports exist
#[tokio::test]
async fn failure_rolls_back_cascade() -> Result<(), AppError> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TripService::new(db)
        .create(
            TxContext::New,
            CreateTripParam {
                trip_id: Some(1),
                plan_items: vec![
                    leg(
                        AirlineRef {
                            airline_code: "OK".to_string(),
                            name: Some("Okay Air".to_string()),
                        },
                        new_airport("KBOS", "BOS"),
                        new_airport("KSFO", "SFO"),
                    ),
                    leg(
                        AirlineRef {
                            airline_code: "NO".to_string(),
                            name: None,
                        },
                        new_airport("KSFO", "SFO"),
                        new_airport("KBOS", "BOS"),
                    ),
                ],
                ..trip("Broken")
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::InvalidInput(_))));

    let probe = ExistenceProbe::new(db);
    assert!(!probe.exists::<entity::trip::Entity>(&1).await?);
    assert!(!probe.exists::<entity::airline::Entity>(&"OK".to_string()).await?);
    assert!(
        !probe
            .exists::<entity::airport::Entity>(&AirportKey::new("KBOS", "BOS"))
            .await?
    );

    Ok(())
}

/// Tests that an unknown traveller without names aborts the whole trip.
///
/// Expected: Err(AppError::InvalidInput) and no trip or traveller stored
#[tokio::test]
async fn traveller_without_names_aborts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TripService::new(db)
        .create(
            TxContext::New,
            CreateTripParam {
                trip_id: Some(3),
                travellers: vec![new_traveller("named"), TravellerParam::username("nameless")],
                ..trip("Half known")
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::InvalidInput(_))));
    assert!(!TripService::new(db).exists(3).await?);
    assert!(!PersonService::new(db).exists("named").await?);

    Ok(())
}

/// Tests creating a trip with an id that is taken.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn duplicate_trip_id_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_trip(db).await?;

    let result = TripService::new(db)
        .create(
            TxContext::New,
            CreateTripParam {
                trip_id: Some(existing.trip_id),
                ..trip("Again")
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
