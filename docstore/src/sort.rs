use bson::Document;

/// A single-field ordering parsed from a key such as `rating` or `-rating`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub descending: bool,
}

impl SortKey {
    /// Parses an ordering key. A leading `-` marks descending order and a
    /// leading `+` is accepted for ascending.
    ///
    /// # Returns
    /// - `Some(SortKey)` - The key names a field
    /// - `None` - The key is empty or consists of the direction marker only
    pub fn parse(key: &str) -> Option<Self> {
        let key = key.trim();
        let (field, descending) = match key.strip_prefix('-') {
            Some(field) => (field, true),
            None => (key.strip_prefix('+').unwrap_or(key), false),
        };

        if field.is_empty() {
            return None;
        }

        Some(Self {
            field: field.to_string(),
            descending,
        })
    }

    /// Sort specification in the `{field: 1 | -1}` form understood by the store.
    pub fn to_document(&self) -> Document {
        let mut document = Document::new();
        document.insert(self.field.clone(), if self.descending { -1 } else { 1 });
        document
    }
}
