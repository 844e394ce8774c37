use super::*;

/// Tests listing airports in key order.
///
/// Expected: Ok with airports sorted by ICAO
#[tokio::test]
async fn finds_all_in_key_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for icao in ["LFPG", "EDDF", "KJFK"] {
        factory::airport::AirportFactory::new(db)
            .icao(icao)
            .build()
            .await?;
    }

    let airports = AirportRepository::new(db).find_all().await?;

    let codes: Vec<_> = airports.iter().map(|a| a.icao.as_str()).collect();
    assert_eq!(codes, vec!["EDDF", "KJFK", "LFPG"]);

    Ok(())
}

/// Tests mapping row ids to keys.
///
/// Expected: Ok with only the known ids present
#[tokio::test]
async fn maps_ids_to_keys() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let airport = factory::create_airport(db).await?;

    let keys = AirportRepository::new(db)
        .keys_by_ids(vec![airport.id, airport.id + 100])
        .await?;

    assert_eq!(keys.len(), 1);
    assert_eq!(
        keys.get(&airport.id),
        Some(&AirportKey::new(&airport.icao, &airport.iata))
    );

    Ok(())
}
