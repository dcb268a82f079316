//! Aggregation pipeline operations.

use mongodb::Client;
use mongodb::bson::Document;

use crate::connection::ConnectionManager;
use crate::error::Result;

impl ConnectionManager {
    /// Run an aggregation pipeline and collect every output document (runs in Tokio runtime)
    pub fn aggregate(
        &self,
        client: &Client,
        database: &str,
        collection: &str,
        pipeline: Vec<Document>,
    ) -> Result<Vec<Document>> {
        use futures::TryStreamExt;

        let client = client.clone();
        let database = database.to_string();
        let collection = collection.to_string();

        self.runtime.block_on(async {
            let coll = client.database(&database).collection::<Document>(&collection);
            let cursor = coll.aggregate(pipeline).await?;
            let docs: Vec<Document> = cursor.try_collect().await?;
            Ok(docs)
        })
    }
}
