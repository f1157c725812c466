use super::*;
use crate::server::config::Config;
use docstore::MongoCollection;

/// Runs the repository against a live MongoDB.
///
/// Uses `MONGO_ADDRESS` and the `MONGO_DB_NAME_TEST` database from the environment
/// and works in a throwaway collection that is dropped afterwards.
///
/// Expected: Ok with create, update, add_dish, list_dish and remove round-tripping
#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn round_trips_against_mongo() -> Result<(), StoreError> {
    let _ = dotenvy::dotenv();
    let config = Config::from_env().unwrap();

    let client = mongodb::Client::with_uri_str(&config.mongo_address).await?;
    let database = client.database(&config.test_database_name);
    let collection_name = format!("restaurants_{}", ObjectId::new().to_hex());
    let store = MongoCollection::new(&database, &collection_name);

    store.ping().await?;

    let repo = RestaurantRepository::new(&store, 10);
    let created = repo
        .create(CreateRestaurantParams {
            name: "Smoke".to_string(),
            city: "Moscow".to_string(),
            rating: Some(0.0),
            menu: Vec::new(),
        })
        .await?;
    let filter = RestaurantFilter::by_id(created.id);

    repo.update(
        &filter,
        &UpdateRestaurantParams {
            city: Some("Kazan".to_string()),
            ..Default::default()
        },
    )
    .await?;
    repo.add_dish(
        &filter,
        Dish {
            name: "Borscht".to_string(),
            price: 45_000,
        },
    )
    .await?;

    let listed = repo.list(&filter, Some("-rating"), 1).await?;
    let menu = repo.list_dish(&filter).await?;
    repo.remove(created.id).await?;
    let removed_again = repo.remove(created.id).await;

    database
        .collection::<bson::Document>(&collection_name)
        .drop()
        .await?;
    client.shutdown().await;

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].city, "Kazan");
    assert_eq!(listed[0].rating, Some(0.0));
    assert!(listed[0].menu.is_empty());
    assert_eq!(menu.len(), 1);
    assert!(matches!(removed_again, Err(StoreError::NotFound)));

    Ok(())
}
