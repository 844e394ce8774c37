use super::*;

/// Tests that the CEO snapshot round-trips through the JSON column.
///
/// Expected: Ok with the same snapshot read back
#[tokio::test]
async fn stores_ceo_snapshot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ceo = CeoSnapshot {
        username: "boss".to_string(),
        first_name: "Big".to_string(),
        last_name: "Boss".to_string(),
        email: None,
    };

    let repo = AirlineRepository::new(db);
    repo.create(NewAirline {
        airline_code: "BB".to_string(),
        name: "Boss Air".to_string(),
        ceo: Some(ceo.clone()),
        ceo_name: None,
        home_airport_id: None,
    })
    .await?;

    let airline = repo.find_by_code("BB").await?.unwrap();

    assert_eq!(airline.ceo, Some(ceo));
    assert!(airline.ceo_name.is_none());

    Ok(())
}

/// Tests reading an airline whose CEO column holds something else.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn malformed_ceo_document_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let airline = factory::airline::AirlineFactory::new(db)
        .ceo(serde_json::json!({ "unexpected": true }))
        .build()
        .await?;

    let result = AirlineRepository::new(db)
        .find_by_code(&airline.airline_code)
        .await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
