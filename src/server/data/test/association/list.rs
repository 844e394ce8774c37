use super::*;

/// Tests listing the persons working for an airline.
///
/// Expected: Ok with every staff member resolved, ordered by username
#[tokio::test]
async fn lists_linked_records() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let airline = factory::create_airline(db).await?;
    for username in ["carol", "alice", "bob"] {
        factory::person::create_person_with_username(db, username).await?;
        factory::create_airline_staff(db, &airline.airline_code, username).await?;
    }

    let listed = staff(db).list_right(&airline.airline_code).await?;

    let usernames: Vec<_> = listed
        .iter()
        .map(|person| person.as_ref().map(|p| p.username.as_str()))
        .collect();
    assert_eq!(usernames, vec![Some("alice"), Some("bob"), Some("carol")]);

    Ok(())
}

/// Tests that a link whose record was removed is kept as an empty slot.
///
/// Expected: Ok with None in place of the missing trip
#[tokio::test]
async fn keeps_dangling_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::create_person(db).await?;
    let trip = factory::trip::TripFactory::new(db).trip_id(1).build().await?;
    factory::create_person_trip(db, &person.username, trip.trip_id).await?;
    factory::create_person_trip(db, &person.username, 2).await?;

    let listed = trips(db).list_right(&person.username).await?;

    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].as_ref().map(|t| t.trip_id), Some(1));
    assert!(listed[1].is_none());

    Ok(())
}

/// Tests listing in the reverse direction.
///
/// Expected: Ok with the airlines employing the person
#[tokio::test]
async fn lists_reverse_side() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::create_person(db).await?;
    let first = factory::create_airline(db).await?;
    let second = factory::create_airline(db).await?;
    factory::create_airline_staff(db, &first.airline_code, &person.username).await?;
    factory::create_airline_staff(db, &second.airline_code, &person.username).await?;

    let listed = staff(db).list_left(&person.username).await?;

    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(Option::is_some));

    Ok(())
}

/// Tests listing a side with no links.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn unlinked_side_lists_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let trip = factory::create_trip(db).await?;

    let listed = trips(db).list_left(&trip.trip_id).await?;

    assert!(listed.is_empty());

    Ok(())
}
