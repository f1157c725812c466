use super::*;

/// Tests appending dishes to a menu.
///
/// Verifies that two appends land in the order they were made.
///
/// Expected: Ok with both dishes in append order
#[tokio::test]
async fn appends_dishes_in_order() -> Result<(), StoreError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = test.store();

    let restaurant = factory::create_restaurant(store.as_ref()).await?;
    let filter = RestaurantFilter::by_id(restaurant.id);

    let repo = RestaurantRepository::new(store.as_ref(), 10);
    repo.add_dish(
        &filter,
        Dish {
            name: "Borscht".to_string(),
            price: 45_000,
        },
    )
    .await?;
    repo.add_dish(
        &filter,
        Dish {
            name: "Blini".to_string(),
            price: 30_000,
        },
    )
    .await?;

    let menu = repo.list_dish(&filter).await?;

    let names: Vec<_> = menu.iter().map(|dish| dish.name.as_str()).collect();
    assert_eq!(names, vec!["Borscht", "Blini"]);
    assert_eq!(menu[1].price, 30_000);

    Ok(())
}

/// Tests adding a dish to a restaurant that does not exist.
///
/// Expected: Err(StoreError::NotFound)
#[tokio::test]
async fn fails_for_nonexistent_restaurant() {
    let test = TestBuilder::new().build().await.unwrap();
    let store = test.store();

    let repo = RestaurantRepository::new(store.as_ref(), 10);
    let result = repo
        .add_dish(
            &RestaurantFilter::by_id(ObjectId::new()),
            Dish {
                name: "Borscht".to_string(),
                price: 45_000,
            },
        )
        .await;

    assert!(matches!(result, Err(StoreError::NotFound)));
}
