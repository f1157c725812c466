use super::*;

/// Tests updating a single field.
///
/// Verifies that only the city changes while name and rating stay intact.
///
/// Expected: Ok with city updated
#[tokio::test]
async fn updates_only_present_fields() -> Result<(), StoreError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = test.store();

    let restaurant = factory::create_restaurant(store.as_ref()).await?;

    let repo = RestaurantRepository::new(store.as_ref(), 10);
    repo.update(
        &RestaurantFilter::by_id(restaurant.id),
        &UpdateRestaurantParams {
            city: Some("Kazan".to_string()),
            ..Default::default()
        },
    )
    .await?;

    let updated = repo
        .list(&RestaurantFilter::by_id(restaurant.id), None, 0)
        .await?;

    assert_eq!(updated[0].city, "Kazan");
    assert_eq!(updated[0].name, restaurant.name);
    assert_eq!(updated[0].rating, restaurant.rating);

    Ok(())
}

/// Tests that an update keeps the stored menu.
///
/// Expected: Ok with the dish still present after renaming
#[tokio::test]
async fn preserves_menu() -> Result<(), StoreError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = test.store();

    let restaurant = factory::restaurant::RestaurantFactory::new(store.as_ref())
        .dish(fixture::dish::entity())
        .build()
        .await?;

    let repo = RestaurantRepository::new(store.as_ref(), 10);
    repo.update(
        &RestaurantFilter::by_id(restaurant.id),
        &UpdateRestaurantParams {
            name: Some("Renamed".to_string()),
            ..Default::default()
        },
    )
    .await?;

    let menu = repo
        .list_dish(&RestaurantFilter::by_id(restaurant.id))
        .await?;

    assert_eq!(menu.len(), 1);
    assert_eq!(menu[0].name, fixture::dish::DEFAULT_NAME);

    Ok(())
}

/// Tests updating a restaurant that does not exist.
///
/// Expected: Err(StoreError::NotFound)
#[tokio::test]
async fn fails_for_nonexistent_restaurant() {
    let test = TestBuilder::new()
        .with_simple_restaurant_set()
        .build()
        .await
        .unwrap();
    let store = test.store();

    let repo = RestaurantRepository::new(store.as_ref(), 10);
    let result = repo
        .update(
            &RestaurantFilter::by_id(ObjectId::new()),
            &UpdateRestaurantParams {
                rating: Some(1.0),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(StoreError::NotFound)));
}
