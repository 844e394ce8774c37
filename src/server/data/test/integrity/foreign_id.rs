use super::*;

/// Tests resolving a business key to the row id other records store.
///
/// Expected: Ok(Some(id)) equal to the stored id
#[tokio::test]
async fn resolves_row_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_airport(db).await?;
    let airport = factory::create_airport(db).await?;

    let id = ExistenceProbe::new(db)
        .foreign_id::<entity::airport::Entity>(&AirportKey::new(&airport.icao, &airport.iata))
        .await?;

    assert_eq!(id, Some(airport.id));

    Ok(())
}

/// Tests resolving an unknown key.
///
/// Expected: Ok(None)
#[tokio::test]
async fn unknown_key_has_no_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let id = ExistenceProbe::new(db)
        .foreign_id::<entity::person::Entity>(&"ghost".to_string())
        .await?;

    assert!(id.is_none());

    Ok(())
}
