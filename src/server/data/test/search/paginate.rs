use super::*;

async fn seed_people(db: &sea_orm::DatabaseConnection, count: usize) -> Result<(), DbErr> {
    for _ in 0..count {
        factory::create_person(db).await?;
    }
    Ok(())
}

/// Tests that the first page holds at most one page of records.
///
/// Expected: Ok with min(size, total) records and the full count
#[tokio::test]
async fn first_page_is_page_sized() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed_people(db, 25).await?;

    let page = SearchRepository::new(db)
        .search::<entity::person::Entity>(&SearchCriteria::default().with_pagination(10, 1))
        .await?;

    assert_eq!(page.count, 25);
    assert_eq!(page.data.len(), 10);

    Ok(())
}

/// Tests the cumulative limit: page 2 starts after the first page and may
/// return up to two pages of records.
///
/// Expected: Ok with the 15 records after the first 10
#[tokio::test]
async fn later_pages_use_cumulative_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed_people(db, 25).await?;

    let criteria = SearchCriteria::default()
        .with_sort(SortSpec::asc("username"))
        .with_pagination(10, 2);
    let page = SearchRepository::new(db)
        .search::<entity::person::Entity>(&criteria)
        .await?;

    assert_eq!(page.count, 25);
    assert_eq!(page.data.len(), 15);
    assert!(page.data.len() <= 20);

    Ok(())
}

/// Tests that a page beyond the data is empty but still reports the count.
///
/// Expected: Ok with no records and the full count
#[tokio::test]
async fn page_beyond_data_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed_people(db, 5).await?;

    let page = SearchRepository::new(db)
        .search::<entity::person::Entity>(&SearchCriteria::default().with_pagination(10, 3))
        .await?;

    assert_eq!(page.count, 5);
    assert!(page.data.is_empty());

    Ok(())
}

/// Tests that page 0 returns an empty window while counting every match.
///
/// Expected: Ok with no records and the full count
#[tokio::test]
async fn page_zero_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed_people(db, 4).await?;

    let page = SearchRepository::new(db)
        .search::<entity::person::Entity>(&SearchCriteria::default().with_pagination(10, 0))
        .await?;

    assert_eq!(page.count, 4);
    assert!(page.data.is_empty());

    Ok(())
}

/// Tests that a page size larger than any row count returns every record.
///
/// Expected: Ok with all records on the first page
#[tokio::test]
async fn oversized_page_size_returns_everything() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed_people(db, 3).await?;

    let page = SearchRepository::new(db)
        .search::<entity::person::Entity>(&SearchCriteria::default().with_pagination(u64::MAX, 1))
        .await?;

    assert_eq!(page.count, 3);
    assert_eq!(page.data.len(), 3);

    Ok(())
}

/// Tests that a window whose size times page overflows the store's integer range
/// runs as a query instead of failing.
///
/// Expected: Ok with no records and the full count
#[tokio::test]
async fn overflowing_window_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_travel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed_people(db, 2).await?;

    let page = SearchRepository::new(db)
        .search::<entity::person::Entity>(
            &SearchCriteria::default().with_pagination(u64::MAX / 2, 3),
        )
        .await?;

    assert_eq!(page.count, 2);
    assert!(page.data.is_empty());

    Ok(())
}
