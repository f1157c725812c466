use super::*;

fn params() -> CreateRestaurantParams {
    CreateRestaurantParams {
        name: "Teremok".to_string(),
        city: "Moscow".to_string(),
        rating: Some(7.5),
        menu: Vec::new(),
    }
}

/// Tests creating a restaurant.
///
/// Verifies that the created restaurant can be listed back by its generated id.
///
/// Expected: Ok with restaurant stored
#[tokio::test]
async fn creates_restaurant() -> Result<(), StoreError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = test.store();

    let repo = RestaurantRepository::new(store.as_ref(), 10);
    let created = repo.create(params()).await?;

    let restaurants = repo
        .list(&RestaurantFilter::by_id(created.id), None, 0)
        .await?;

    assert_eq!(restaurants.len(), 1);
    assert_eq!(restaurants[0].name, "Teremok");
    assert_eq!(restaurants[0].city, "Moscow");
    assert_eq!(restaurants[0].rating, Some(7.5));
    assert_eq!(test.collection.len(), 1);

    Ok(())
}

/// Tests that every created restaurant receives a distinct id.
///
/// Expected: Ok with two different ids
#[tokio::test]
async fn assigns_unique_ids() -> Result<(), StoreError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = test.store();

    let repo = RestaurantRepository::new(store.as_ref(), 10);
    let first = repo.create(params()).await?;
    let second = repo.create(params()).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(test.collection.len(), 2);

    Ok(())
}

/// Tests creating a restaurant with an initial menu.
///
/// Expected: Ok with the menu readable through `list_dish`
#[tokio::test]
async fn creates_restaurant_with_menu() -> Result<(), StoreError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = test.store();

    let repo = RestaurantRepository::new(store.as_ref(), 10);
    let created = repo
        .create(CreateRestaurantParams {
            menu: vec![Dish {
                name: "Pelmeni".to_string(),
                price: 35_000,
            }],
            ..params()
        })
        .await?;

    let menu = repo.list_dish(&RestaurantFilter::by_id(created.id)).await?;

    assert_eq!(menu.len(), 1);
    assert_eq!(menu[0].name, "Pelmeni");
    assert_eq!(menu[0].price, 35_000);

    Ok(())
}

/// Tests that a restaurant without a rating keeps the field unset.
///
/// Expected: Ok with rating None after reading back
#[tokio::test]
async fn keeps_rating_unset() -> Result<(), StoreError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = test.store();

    let repo = RestaurantRepository::new(store.as_ref(), 10);
    let created = repo
        .create(CreateRestaurantParams {
            rating: None,
            ..params()
        })
        .await?;

    let restaurants = repo
        .list(&RestaurantFilter::by_id(created.id), None, 0)
        .await?;

    assert_eq!(restaurants[0].rating, None);

    Ok(())
}
