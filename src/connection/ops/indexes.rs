//! Index operations for MongoDB collections.

use mongodb::Client;
use mongodb::IndexModel;
use mongodb::bson::Document;

use crate::connection::ConnectionManager;
use crate::error::Result;

impl ConnectionManager {
    /// List indexes for a collection (runs in Tokio runtime)
    pub fn list_indexes(
        &self,
        client: &Client,
        database: &str,
        collection: &str,
    ) -> Result<Vec<IndexModel>> {
        use futures::TryStreamExt;

        let client = client.clone();
        let database = database.to_string();
        let collection = collection.to_string();

        self.runtime.block_on(async {
            let coll = client.database(&database).collection::<Document>(&collection);
            let cursor = coll.list_indexes().await?;
            let indexes: Vec<IndexModel> = cursor.try_collect().await?;
            Ok(indexes)
        })
    }

    /// Create an index from a key document and return the server-assigned name
    /// (runs in Tokio runtime)
    pub fn create_index(
        &self,
        client: &Client,
        database: &str,
        collection: &str,
        keys: Document,
    ) -> Result<String> {
        let client = client.clone();
        let database = database.to_string();
        let collection = collection.to_string();

        self.runtime.block_on(async {
            let coll = client.database(&database).collection::<Document>(&collection);
            let index = IndexModel::builder().keys(keys).build();
            let result = coll.create_index(index).await?;
            Ok(result.index_name)
        })
    }
}
