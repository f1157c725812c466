use async_trait::async_trait;
use bson::{oid::ObjectId, Bson, Document};
use parking_lot::RwLock;
use std::{cmp::Ordering, sync::Arc};

use crate::{
    accessor::{DataAccessor, Querier},
    error::StoreError,
    sort::SortKey,
};

const ID_FIELD: &str = "_id";

/// In-process [`DataAccessor`] holding documents in insertion order.
///
/// Supports the subset of store semantics the repositories rely on:
/// equality filters on top-level fields, inclusive or exclusive projections,
/// single-key sorting, skip/limit and the `$set`/`$push` update operators.
/// Clones share the same documents.
#[derive(Clone, Default)]
pub struct MemoryCollection {
    documents: Arc<RwLock<Vec<Document>>>,
}

impl MemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }

    /// Snapshot of the stored documents in insertion order.
    pub fn documents(&self) -> Vec<Document> {
        self.documents.read().clone()
    }
}

#[async_trait]
impl DataAccessor for MemoryCollection {
    fn find(&self, filter: Document) -> Box<dyn Querier> {
        Box::new(MemoryQuery {
            documents: Arc::clone(&self.documents),
            filter,
            projection: None,
            sort: None,
            skip: 0,
            limit: 0,
        })
    }

    async fn insert(&self, mut document: Document) -> Result<(), StoreError> {
        let mut documents = self.documents.write();

        match document.get(ID_FIELD) {
            Some(id) => {
                if documents.iter().any(|stored| stored.get(ID_FIELD) == Some(id)) {
                    return Err(StoreError::Backend(format!(
                        "Duplicate key: _id {} already exists",
                        id
                    )));
                }
            }
            None => {
                document.insert(ID_FIELD, ObjectId::new());
            }
        }

        documents.push(document);

        Ok(())
    }

    async fn update(&self, filter: Document, change: Document) -> Result<(), StoreError> {
        let mut documents = self.documents.write();

        let Some(target) = documents
            .iter_mut()
            .find(|document| matches_filter(document, &filter))
        else {
            return Err(StoreError::NotFound);
        };

        apply_change(target, change)
    }

    async fn remove(&self, filter: Document) -> Result<(), StoreError> {
        let mut documents = self.documents.write();

        let Some(index) = documents
            .iter()
            .position(|document| matches_filter(document, &filter))
        else {
            return Err(StoreError::NotFound);
        };

        documents.remove(index);

        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

struct MemoryQuery {
    documents: Arc<RwLock<Vec<Document>>>,
    filter: Document,
    projection: Option<Document>,
    sort: Option<SortKey>,
    skip: u64,
    limit: u64,
}

impl MemoryQuery {
    /// Applies filter, sort, skip, limit and projection, in that order.
    fn run(&self, limit: u64) -> Vec<Document> {
        let mut matched: Vec<Document> = self
            .documents
            .read()
            .iter()
            .filter(|document| matches_filter(document, &self.filter))
            .cloned()
            .collect();

        if let Some(key) = &self.sort {
            matched.sort_by(|a, b| compare_field(a, b, key));
        }

        let skip = usize::try_from(self.skip).unwrap_or(usize::MAX);
        let take = match limit {
            0 => usize::MAX,
            n => usize::try_from(n).unwrap_or(usize::MAX),
        };

        matched
            .into_iter()
            .skip(skip)
            .take(take)
            .map(|document| match &self.projection {
                Some(projection) => project(document, projection),
                None => document,
            })
            .collect()
    }
}

#[async_trait]
impl Querier for MemoryQuery {
    fn select(mut self: Box<Self>, projection: Document) -> Box<dyn Querier> {
        self.projection = Some(projection);
        self
    }

    fn sort(mut self: Box<Self>, key: &str) -> Box<dyn Querier> {
        self.sort = SortKey::parse(key);
        self
    }

    fn skip(mut self: Box<Self>, n: u64) -> Box<dyn Querier> {
        self.skip = n;
        self
    }

    fn limit(mut self: Box<Self>, n: u64) -> Box<dyn Querier> {
        self.limit = n;
        self
    }

    async fn all(&self) -> Result<Vec<Document>, StoreError> {
        Ok(self.run(self.limit))
    }

    async fn one(&self) -> Result<Document, StoreError> {
        self.run(1).into_iter().next().ok_or(StoreError::NotFound)
    }
}

fn matches_filter(document: &Document, filter: &Document) -> bool {
    filter.iter().all(|(field, expected)| {
        document
            .get(field)
            .is_some_and(|actual| compare_bson(actual, expected) == Ordering::Equal)
    })
}

fn apply_change(target: &mut Document, change: Document) -> Result<(), StoreError> {
    // Without operators the change replaces the whole body, keeping the id.
    if !change.keys().any(|key| key.starts_with('$')) {
        let id = target.get(ID_FIELD).cloned();
        *target = change;
        if let Some(id) = id {
            target.insert(ID_FIELD, id);
        }
        return Ok(());
    }

    for (operator, fields) in change {
        let Bson::Document(fields) = fields else {
            return Err(StoreError::Backend(format!(
                "Update operator {} expects a document",
                operator
            )));
        };

        match operator.as_str() {
            "$set" => {
                for (field, value) in fields {
                    if field == ID_FIELD {
                        return Err(StoreError::Backend(
                            "Performing an update on the path '_id' would modify the immutable field '_id'"
                                .to_string(),
                        ));
                    }
                    target.insert(field, value);
                }
            }
            "$push" => {
                for (field, value) in fields {
                    match target.get_mut(&field) {
                        Some(Bson::Array(items)) => items.push(value),
                        Some(_) => {
                            return Err(StoreError::Backend(format!(
                                "The field '{}' must be an array",
                                field
                            )));
                        }
                        None => {
                            target.insert(field, Bson::Array(vec![value]));
                        }
                    }
                }
            }
            other => {
                return Err(StoreError::Backend(format!(
                    "Unsupported update operator {}",
                    other
                )));
            }
        }
    }

    Ok(())
}

fn project(document: Document, projection: &Document) -> Document {
    let keep_id = projection.get(ID_FIELD).map_or(true, is_truthy);
    let inclusive = projection
        .iter()
        .any(|(field, flag)| field != ID_FIELD && is_truthy(flag));

    document
        .into_iter()
        .filter(|(field, _)| {
            if field == ID_FIELD {
                keep_id
            } else if inclusive {
                projection.get(field).is_some_and(is_truthy)
            } else {
                !projection.contains_key(field)
            }
        })
        .collect()
}

fn is_truthy(value: &Bson) -> bool {
    match value {
        Bson::Boolean(flag) => *flag,
        Bson::Int32(n) => *n != 0,
        Bson::Int64(n) => *n != 0,
        Bson::Double(n) => *n != 0.0,
        _ => true,
    }
}

/// Missing values sort before present ones.
fn compare_field(a: &Document, b: &Document, key: &SortKey) -> Ordering {
    let ordering = match (a.get(&key.field), b.get(&key.field)) {
        (Some(x), Some(y)) => compare_bson(x, y),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    };

    if key.descending {
        ordering.reverse()
    } else {
        ordering
    }
}

fn compare_bson(a: &Bson, b: &Bson) -> Ordering {
    if let (Some(x), Some(y)) = (as_number(a), as_number(b)) {
        return x.total_cmp(&y);
    }

    match (a, b) {
        (Bson::String(x), Bson::String(y)) => x.cmp(y),
        (Bson::Boolean(x), Bson::Boolean(y)) => x.cmp(y),
        (Bson::ObjectId(x), Bson::ObjectId(y)) => x.bytes().cmp(&y.bytes()),
        _ if a == b => Ordering::Equal,
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

fn as_number(value: &Bson) -> Option<f64> {
    match value {
        Bson::Int32(n) => Some(f64::from(*n)),
        Bson::Int64(n) => Some(*n as f64),
        Bson::Double(n) => Some(*n),
        _ => None,
    }
}

fn type_rank(value: &Bson) -> u8 {
    match value {
        Bson::Null => 0,
        Bson::Int32(_) | Bson::Int64(_) | Bson::Double(_) => 1,
        Bson::String(_) => 2,
        Bson::Document(_) => 3,
        Bson::Array(_) => 4,
        Bson::ObjectId(_) => 5,
        Bson::Boolean(_) => 6,
        Bson::DateTime(_) => 7,
        _ => 8,
    }
}
