use super::*;

/// Tests removing a restaurant.
///
/// Expected: Ok with only the other restaurant left
#[tokio::test]
async fn removes_restaurant() -> Result<(), StoreError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = test.store();

    let doomed = factory::create_restaurant(store.as_ref()).await?;
    let kept = factory::create_restaurant(store.as_ref()).await?;

    let repo = RestaurantRepository::new(store.as_ref(), 10);
    repo.remove(doomed.id).await?;

    let remaining = repo.list(&RestaurantFilter::default(), None, 0).await?;

    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);

    Ok(())
}

/// Tests removing the same restaurant twice.
///
/// Expected: Ok the first time, then Err(StoreError::NotFound)
#[tokio::test]
async fn fails_when_already_removed() -> Result<(), StoreError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = test.store();

    let restaurant = factory::create_restaurant(store.as_ref()).await?;

    let repo = RestaurantRepository::new(store.as_ref(), 10);
    repo.remove(restaurant.id).await?;
    let result = repo.remove(restaurant.id).await;

    assert!(matches!(result, Err(StoreError::NotFound)));
    assert!(test.collection.is_empty());

    Ok(())
}
