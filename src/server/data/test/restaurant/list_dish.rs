use super::*;

/// Tests listing the menu of a restaurant created without dishes.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn returns_empty_menu() -> Result<(), StoreError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = test.store();

    let restaurant = factory::create_restaurant(store.as_ref()).await?;

    let repo = RestaurantRepository::new(store.as_ref(), 10);
    let menu = repo
        .list_dish(&RestaurantFilter::by_id(restaurant.id))
        .await?;

    assert!(menu.is_empty());

    Ok(())
}

/// Tests listing the menu of a seeded restaurant.
///
/// Expected: Ok with the seeded dishes
#[tokio::test]
async fn returns_seeded_menu() -> Result<(), StoreError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = test.store();

    let restaurant = factory::restaurant::RestaurantFactory::new(store.as_ref())
        .dish(fixture::dish::entity())
        .dish(fixture::dish::named("Kvass", 12_000))
        .build()
        .await?;

    let repo = RestaurantRepository::new(store.as_ref(), 10);
    let menu = repo
        .list_dish(&RestaurantFilter::by_id(restaurant.id))
        .await?;

    assert_eq!(menu.len(), 2);
    assert_eq!(menu[1].name, "Kvass");

    Ok(())
}

/// Tests listing the menu of a restaurant that does not exist.
///
/// Expected: Err(StoreError::NotFound)
#[tokio::test]
async fn fails_for_nonexistent_restaurant() {
    let test = TestBuilder::new().build().await.unwrap();
    let store = test.store();

    let repo = RestaurantRepository::new(store.as_ref(), 10);
    let result = repo
        .list_dish(&RestaurantFilter::by_id(ObjectId::new()))
        .await;

    assert!(matches!(result, Err(StoreError::NotFound)));
}
