use super::*;

use crate::server::service::association::AirlineStaffService;

/// Tests that deleting an airline removes its staff links but keeps the people.
///
/// Expected: Ok with no links left and the person still present
#[tokio::test]
async fn removes_staff_links() -> Result<(), AppError> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (airline, persons) = factory::helpers::create_airline_with_staff(db, 2).await?;

    AirlineService::new(db)
        .delete(TxContext::New, &airline.airline_code)
        .await?;

    let staff = AirlineStaffService::new(db);
    assert!(staff.staff_of(&airline.airline_code).await?.is_empty());
    assert!(staff.employers_of(&persons[0].username).await?.is_empty());
    assert!(
        crate::server::service::person::PersonService::new(db)
            .exists(&persons[0].username)
            .await?
    );

    Ok(())
}

/// Tests deleting an airline that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unknown_airline_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AirlineService::new(db).delete(TxContext::New, "ZZ").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
