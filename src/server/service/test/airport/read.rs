use super::*;

/// Tests creating an airport and reading it back by key.
///
/// Expected: Ok with the stored fields
#[tokio::test]
async fn creates_and_gets() -> Result<(), AppError> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AirportService::new(db);
    service
        .create(
            TxContext::New,
            CreateAirportParam {
                icao: "LFPG".to_string(),
                iata: "CDG".to_string(),
                name: "Charles de Gaulle".to_string(),
                city: Some("Paris".to_string()),
                country: Some("France".to_string()),
            },
        )
        .await?;

    let airport = service.get(&AirportKey::new("LFPG", "CDG")).await?;

    assert_eq!(airport.name, "Charles de Gaulle");
    assert_eq!(airport.city.as_deref(), Some("Paris"));

    Ok(())
}

/// Tests reading an unknown airport.
///
/// Expected: Err(AppError::NotFound) naming both codes
#[tokio::test]
async fn unknown_airport_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AirportService::new(db)
        .get(&AirportKey::new("XXXX", "XXX"))
        .await;

    match result {
        Err(AppError::NotFound(msg)) => {
            assert_eq!(msg, "Provided airport 'XXXX/XXX' does not exist")
        }
        other => panic!("expected NotFound, got {:?}", other),
    }

    Ok(())
}

/// Tests listing the airlines based at an airport.
///
/// Expected: Ok with the based airline only
#[tokio::test]
async fn lists_based_airlines() -> Result<(), AppError> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let airport = factory::create_airport(db).await?;
    let based = factory::airline::AirlineFactory::new(db)
        .home_airport_id(airport.id)
        .build()
        .await?;
    factory::create_airline(db).await?;

    let airlines = AirportService::new(db)
        .airlines_based_at(&AirportKey::new(&airport.icao, &airport.iata))
        .await?;

    assert_eq!(airlines.len(), 1);
    assert_eq!(airlines[0].airline_code, based.airline_code);

    Ok(())
}

/// Tests searching airports by country.
///
/// Expected: Ok with the matching airports and their count
#[tokio::test]
async fn searches_by_country() -> Result<(), AppError> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for country in ["Germany", "germany", "Spain"] {
        factory::airport::AirportFactory::new(db)
            .country(country)
            .build()
            .await?;
    }

    let criteria = SearchCriteria::filtered(vec![FilterSpec::new(
        "country",
        FilterOperator::Exact,
        FilterValue::from("GERMANY"),
    )]);
    let service = AirportService::new(db);
    let result = service.search(&criteria).await?;

    assert_eq!(result.total_count, 2);
    assert_eq!(result.data.len(), 2);
    assert_eq!(service.search_count(&criteria).await?, 2);

    Ok(())
}
