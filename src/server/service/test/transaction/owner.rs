use super::*;

/// Tests that an owning scope commits a successful result.
///
/// Expected: Ok and the write is visible afterwards
#[tokio::test]
async fn owner_commits_on_success() -> Result<(), AppError> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let scope = TxScope::enter(db, TxContext::New).await?;
    assert!(scope.is_owner());

    let result = PersonRepository::new(scope.txn())
        .create(person("committed"))
        .await
        .map_err(AppError::from);
    scope.finish(result).await?;

    assert!(PersonService::new(db).exists("committed").await?);

    Ok(())
}

/// Tests that an owning scope rolls back and returns the original error.
///
/// Expected: Err(AppError::InvalidInput) and the write is gone
#[tokio::test]
async fn owner_rolls_back_on_failure() -> Result<(), AppError> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let scope = TxScope::enter(db, TxContext::New).await?;
    PersonRepository::new(scope.txn())
        .create(person("discarded"))
        .await?;

    let result = scope
        .finish::<()>(Err(AppError::InvalidInput("stop".to_string())))
        .await;

    assert!(matches!(result, Err(AppError::InvalidInput(ref msg)) if msg == "stop"));
    assert!(!PersonService::new(db).exists("discarded").await?);

    Ok(())
}
