use super::*;

/// Tests a partial update that clears the age.
///
/// Expected: Ok with the new last name, no age and the email kept
#[tokio::test]
async fn applies_partial_update() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::person::PersonFactory::new(db)
        .email("kept@example.com")
        .age(50)
        .build()
        .await?;

    let updated = PersonRepository::new(db)
        .update(
            &person.username,
            UpdatePersonParam {
                last_name: Some("Renamed".to_string()),
                age: Some(None),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.last_name, "Renamed");
    assert!(updated.age.is_none());
    assert_eq!(updated.email.as_deref(), Some("kept@example.com"));

    Ok(())
}

/// Tests an update without changes.
///
/// Expected: Ok with the stored person unchanged
#[tokio::test]
async fn empty_update_keeps_person() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::create_person(db).await?;

    let updated = PersonRepository::new(db)
        .update(&person.username, UpdatePersonParam::default())
        .await?;

    assert_eq!(updated.first_name, person.first_name);

    Ok(())
}
