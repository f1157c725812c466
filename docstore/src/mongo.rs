use async_trait::async_trait;
use bson::{doc, Document};
use futures::TryStreamExt;
use mongodb::{options::FindOptions, Collection, Database};

use crate::{
    accessor::{DataAccessor, Querier},
    error::StoreError,
    sort::SortKey,
};

/// [`DataAccessor`] over a MongoDB collection.
///
/// Cloning is cheap: the driver's `Database` and `Collection` handles share the
/// client's connection pool.
#[derive(Clone)]
pub struct MongoCollection {
    database: Database,
    collection: Collection<Document>,
}

impl MongoCollection {
    pub fn new(database: &Database, name: &str) -> Self {
        Self {
            database: database.clone(),
            collection: database.collection(name),
        }
    }
}

#[async_trait]
impl DataAccessor for MongoCollection {
    fn find(&self, filter: Document) -> Box<dyn Querier> {
        Box::new(MongoQuery {
            collection: self.collection.clone(),
            filter,
            options: FindOptions::default(),
        })
    }

    async fn insert(&self, document: Document) -> Result<(), StoreError> {
        self.collection.insert_one(document).await?;

        Ok(())
    }

    async fn update(&self, filter: Document, change: Document) -> Result<(), StoreError> {
        let result = self.collection.update_one(filter, change).await?;

        if result.matched_count == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    async fn remove(&self, filter: Document) -> Result<(), StoreError> {
        let result = self.collection.delete_one(filter).await?;

        if result.deleted_count == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.database.run_command(doc! { "ping": 1 }).await?;

        Ok(())
    }
}

/// Find options accumulated by the cursor chain, sent with the terminal call.
struct MongoQuery {
    collection: Collection<Document>,
    filter: Document,
    options: FindOptions,
}

#[async_trait]
impl Querier for MongoQuery {
    fn select(mut self: Box<Self>, projection: Document) -> Box<dyn Querier> {
        self.options.projection = Some(projection);
        self
    }

    fn sort(mut self: Box<Self>, key: &str) -> Box<dyn Querier> {
        self.options.sort = SortKey::parse(key).map(|key| key.to_document());
        self
    }

    fn skip(mut self: Box<Self>, n: u64) -> Box<dyn Querier> {
        self.options.skip = Some(n);
        self
    }

    fn limit(mut self: Box<Self>, n: u64) -> Box<dyn Querier> {
        self.options.limit = Some(i64::try_from(n).unwrap_or(i64::MAX));
        self
    }

    async fn all(&self) -> Result<Vec<Document>, StoreError> {
        let cursor = self
            .collection
            .find(self.filter.clone())
            .with_options(self.options.clone())
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn one(&self) -> Result<Document, StoreError> {
        let mut options = self.options.clone();
        options.limit = Some(1);

        let mut cursor = self
            .collection
            .find(self.filter.clone())
            .with_options(options)
            .await?;

        cursor.try_next().await?.ok_or(StoreError::NotFound)
    }
}
