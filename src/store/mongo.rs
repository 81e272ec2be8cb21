//! MongoDB store adapter.

use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{Document, doc};
use futures::TryStreamExt;
use mongodb::{Client, Collection};

use crate::catalog::{CURRENCY_AMOUNT_PATTERN, Field, Filter, ProcessedBook, SortOrder};
use crate::config::DatabaseConfig;
use crate::error::Result;
use crate::store::BookStore;

/// MongoDB-backed record store.
///
/// Constructed once at startup and injected into the catalog; the driver
/// pools connections internally, so cloning the handle is cheap and safe
/// across concurrent requests.
#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    collection: Collection<ProcessedBook>,
}

impl MongoStore {
    /// Connect to the record store and verify it is reachable.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let client = Client::with_uri_str(&config.url).await?;
        let database = client.database(&config.database);

        database.run_command(doc! { "ping": 1 }).await?;
        tracing::info!(
            database = %config.database,
            collection = %config.collection,
            "Connected to record store"
        );

        let collection = database.collection::<ProcessedBook>(&config.collection);
        Ok(Self { client, collection })
    }

    /// Shut the client down, draining in-flight operations.
    pub async fn close(self) {
        self.client.shutdown().await;
    }
}

#[async_trait]
impl BookStore for MongoStore {
    async fn find(
        &self,
        filter: &Filter,
        sort: (Field, SortOrder),
        skip: u64,
        limit: u32,
    ) -> Result<Vec<ProcessedBook>> {
        let (field, order) = sort;
        let direction = match order {
            SortOrder::Descending => -1,
        };

        let mut sort_doc = Document::new();
        sort_doc.insert(field.name(), direction);

        let cursor = self
            .collection
            .find(filter_to_document(filter))
            .sort(sort_doc)
            .skip(skip)
            .limit(limit as i64)
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn count(&self, filter: &Filter) -> Result<u64> {
        Ok(self
            .collection
            .count_documents(filter_to_document(filter))
            .await?)
    }

    async fn find_one(&self, id: ObjectId) -> Result<Option<ProcessedBook>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }
}

/// Translate a filter predicate into a MongoDB query document.
fn filter_to_document(filter: &Filter) -> Document {
    match filter {
        Filter::All => Document::new(),
        Filter::Contains { field, needle } => regex_match(*field, &escape_regex(needle)),
        Filter::StarCount(n) => {
            let mut document = Document::new();
            document.insert(Field::StarCount.name(), *n);
            document
        }
        Filter::HasPriceAmount(field) => regex_match(*field, CURRENCY_AMOUNT_PATTERN),
        Filter::AllOf(filters) => doc! { "$and": subdocuments(filters) },
        Filter::AnyOf(filters) => doc! { "$or": subdocuments(filters) },
    }
}

/// `{ <field>: { "$regex": <pattern>, "$options": "i" } }`
fn regex_match(field: Field, pattern: &str) -> Document {
    let mut document = Document::new();
    document.insert(field.name(), doc! { "$regex": pattern, "$options": "i" });
    document
}

fn subdocuments(filters: &[Filter]) -> Vec<Document> {
    filters.iter().map(filter_to_document).collect()
}

/// Escape regex metacharacters so a substring filter matches literally.
fn escape_regex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(
            c,
            '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_regex_metacharacters() {
        assert_eq!(escape_regex("sci-fi"), "sci-fi");
        assert_eq!(escape_regex("a.b*c"), "a\\.b\\*c");
        assert_eq!(escape_regex("(x|y)"), "\\(x\\|y\\)");
    }

    #[test]
    fn translates_combined_filter() {
        let filter = Filter::AllOf(vec![
            Filter::Contains {
                field: Field::ProductType,
                needle: "poetry".to_string(),
            },
            Filter::StarCount(4),
        ]);

        let document = filter_to_document(&filter);
        let arms = document.get_array("$and").unwrap();
        assert_eq!(arms.len(), 2);
    }

    #[test]
    fn match_all_translates_to_empty_document() {
        assert!(filter_to_document(&Filter::All).is_empty());
    }
}
