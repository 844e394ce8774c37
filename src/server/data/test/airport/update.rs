use super::*;

/// Tests updating only the provided fields.
///
/// Expected: Ok with the city cleared and the name kept
#[tokio::test]
async fn updates_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let airport = factory::airport::AirportFactory::new(db)
        .name("Old Name")
        .city("Somewhere")
        .build()
        .await?;
    let key = AirportKey::new(&airport.icao, &airport.iata);

    let updated = AirportRepository::new(db)
        .update(
            &key,
            UpdateAirportParam {
                city: Some(None),
                country: Some(Some("Utopia".to_string())),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.name, "Old Name");
    assert!(updated.city.is_none());
    assert_eq!(updated.country.as_deref(), Some("Utopia"));

    Ok(())
}

/// Tests updating an airport that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn missing_airport_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AirportRepository::new(db)
        .update(&AirportKey::new("XXXX", "XXX"), UpdateAirportParam::default())
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
