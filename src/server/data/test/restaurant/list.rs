use super::*;

/// Tests listing an empty collection.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn returns_empty_list() -> Result<(), StoreError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = test.store();

    let repo = RestaurantRepository::new(store.as_ref(), 10);
    let restaurants = repo.list(&RestaurantFilter::default(), None, 0).await?;

    assert!(restaurants.is_empty());

    Ok(())
}

/// Tests listing every restaurant in insertion order.
///
/// Expected: Ok with both seeded restaurants
#[tokio::test]
async fn lists_all_restaurants() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_simple_restaurant_set()
        .build()
        .await
        .unwrap();
    let store = test.store();

    let repo = RestaurantRepository::new(store.as_ref(), 10);
    let restaurants = repo.list(&RestaurantFilter::default(), None, 0).await?;

    let names: Vec<_> = restaurants.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Name1", "Name2"]);

    Ok(())
}

/// Tests filtering by city.
///
/// Verifies that only restaurants whose city equals the filter value are returned.
///
/// Expected: Ok with the single matching restaurant
#[tokio::test]
async fn filters_by_city() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_simple_restaurant_set()
        .build()
        .await
        .unwrap();
    let store = test.store();

    let filter = RestaurantFilter {
        city: Some("City2".to_string()),
        ..Default::default()
    };
    let repo = RestaurantRepository::new(store.as_ref(), 10);
    let restaurants = repo.list(&filter, None, 0).await?;

    assert_eq!(restaurants.len(), 1);
    assert_eq!(restaurants[0].name, "Name2");

    Ok(())
}

/// Tests that a rating of zero is treated as a real constraint.
///
/// Expected: Ok with only the zero-rated restaurant
#[tokio::test]
async fn filters_by_zero_rating() -> Result<(), StoreError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = test.store();

    let unrated = factory::restaurant::RestaurantFactory::new(store.as_ref())
        .rating(Some(0.0))
        .build()
        .await?;
    factory::create_restaurant(store.as_ref()).await?;

    let filter = RestaurantFilter {
        rating: Some(0.0),
        ..Default::default()
    };
    let repo = RestaurantRepository::new(store.as_ref(), 10);
    let restaurants = repo.list(&filter, None, 0).await?;

    assert_eq!(restaurants.len(), 1);
    assert_eq!(restaurants[0].id, unrated.id);

    Ok(())
}

/// Tests that list results never carry a menu.
///
/// Expected: Ok with restaurant whose menu is empty even though one dish is stored
#[tokio::test]
async fn excludes_menu() -> Result<(), StoreError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = test.store();

    let restaurant = factory::restaurant::RestaurantFactory::new(store.as_ref())
        .dish(fixture::dish::entity())
        .build()
        .await?;

    let repo = RestaurantRepository::new(store.as_ref(), 10);
    let restaurants = repo
        .list(&RestaurantFilter::by_id(restaurant.id), None, 0)
        .await?;

    assert_eq!(restaurants.len(), 1);
    assert!(restaurants[0].menu.is_empty());

    Ok(())
}

/// Tests pagination with a page size of one.
///
/// Verifies that page 2 skips the first restaurant and returns only the second.
///
/// Expected: Ok with the second restaurant only
#[tokio::test]
async fn paginates_results() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_simple_restaurant_set()
        .build()
        .await
        .unwrap();
    let store = test.store();

    let repo = RestaurantRepository::new(store.as_ref(), 1);

    let first = repo.list(&RestaurantFilter::default(), None, 1).await?;
    let second = repo.list(&RestaurantFilter::default(), None, 2).await?;
    let third = repo.list(&RestaurantFilter::default(), None, 3).await?;

    assert_eq!(first.len(), 1);
    assert_eq!(first[0].name, "Name1");
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].name, "Name2");
    assert!(third.is_empty());

    Ok(())
}

/// Tests descending ordering by rating.
///
/// Expected: Ok with the higher-rated restaurant first
#[tokio::test]
async fn orders_by_rating_descending() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_simple_restaurant_set()
        .build()
        .await
        .unwrap();
    let store = test.store();

    let repo = RestaurantRepository::new(store.as_ref(), 10);
    let restaurants = repo
        .list(&RestaurantFilter::default(), Some("-rating"), 0)
        .await?;

    let ratings: Vec<_> = restaurants.iter().map(|r| r.rating).collect();
    assert_eq!(ratings, vec![Some(5.5), Some(4.5)]);

    Ok(())
}

/// Tests that store failures propagate unchanged.
///
/// Expected: Err(StoreError::Backend)
#[tokio::test]
async fn propagates_store_failure() {
    let test = TestBuilder::new().unavailable().build().await.unwrap();
    let store = test.store();

    let repo = RestaurantRepository::new(store.as_ref(), 10);
    let result = repo.list(&RestaurantFilter::default(), None, 0).await;

    assert!(matches!(result, Err(StoreError::Backend(_))));
}

/// Tests filtering by name and rating together.
///
/// Verifies that every present filter field must match.
///
/// Expected: Ok with the fixture restaurant only
#[tokio::test]
async fn filters_by_name_and_rating() -> Result<(), StoreError> {
    let restaurant = fixture::restaurant::entity();
    let test = TestBuilder::new()
        .with_restaurant(restaurant.clone())
        .with_simple_restaurant_set()
        .build()
        .await
        .unwrap();
    let store = test.store();

    let filter = RestaurantFilter {
        name: Some(fixture::restaurant::DEFAULT_NAME.to_string()),
        rating: fixture::restaurant::DEFAULT_RATING,
        ..Default::default()
    };
    let repo = RestaurantRepository::new(store.as_ref(), 10);
    let restaurants = repo.list(&filter, None, 0).await?;

    assert_eq!(restaurants.len(), 1);
    assert_eq!(restaurants[0].id, restaurant.id);

    let mismatched = RestaurantFilter {
        rating: Some(1.0),
        ..filter
    };
    assert!(repo.list(&mismatched, None, 0).await?.is_empty());

    Ok(())
}
