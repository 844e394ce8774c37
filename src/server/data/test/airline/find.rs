use super::*;

/// Tests finding and counting airlines by home airport.
///
/// Expected: Ok with only the airlines based at the airport
#[tokio::test]
async fn finds_by_home_airport() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let home = factory::create_airport(db).await?;
    let elsewhere = factory::create_airport(db).await?;
    for _ in 0..2 {
        factory::airline::AirlineFactory::new(db)
            .home_airport_id(home.id)
            .build()
            .await?;
    }
    factory::airline::AirlineFactory::new(db)
        .home_airport_id(elsewhere.id)
        .build()
        .await?;
    factory::create_airline(db).await?;

    let repo = AirlineRepository::new(db);
    let based = repo.find_by_home_airport(home.id).await?;

    assert_eq!(based.len(), 2);
    assert!(based.iter().all(|a| a.home_airport_id == Some(home.id)));
    assert_eq!(repo.count_by_home_airport(home.id).await?, 2);
    assert_eq!(repo.find_all().await?.len(), 4);

    Ok(())
}
