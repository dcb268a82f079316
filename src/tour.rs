//! The fixed sequence of operations run against the books collection.
//!
//! Every step is literal data: a filter, an update, a pipeline or an index key
//! document handed unmodified to the server.

use mongodb::bson::{Document, doc};

use crate::connection::FindDocumentsOptions;

/// One driver call and its literal arguments
#[derive(Clone, Debug, PartialEq)]
pub enum Operation {
    Find(FindDocumentsOptions),
    UpdateOne { filter: Document, update: Document },
    DeleteOne { filter: Document },
    Aggregate { pipeline: Vec<Document> },
    CreateIndex { keys: Document },
    ExplainFind { filter: Document },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub title: &'static str,
    pub operation: Operation,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub title: &'static str,
    pub steps: Vec<Step>,
}

fn step(title: &'static str, operation: Operation) -> Step {
    Step { title, operation }
}

fn find_all() -> FindDocumentsOptions {
    FindDocumentsOptions::filter(doc! {})
}

pub fn average_price_by_genre() -> Vec<Document> {
    vec![doc! { "$group": { "_id": "$genre", "avgPrice": { "$avg": "$price" } } }]
}

pub fn author_with_most_books() -> Vec<Document> {
    vec![
        doc! { "$group": { "_id": "$author", "count": { "$sum": 1 } } },
        doc! { "$sort": { "count": -1 } },
        doc! { "$limit": 1 },
    ]
}

/// `1949` becomes `"1940s"`: the first three characters of the year plus `0s`.
pub fn books_by_decade() -> Vec<Document> {
    vec![doc! {
        "$group": {
            "_id": {
                "$concat": [
                    { "$substr": [{ "$toString": "$published_year" }, 0, 3] },
                    "0s"
                ]
            },
            "count": { "$sum": 1 }
        }
    }]
}

fn basic_crud() -> Section {
    Section {
        title: "Task 2: Basic CRUD",
        steps: vec![
            step(
                "Find all books in genre \"Dystopian\"",
                Operation::Find(FindDocumentsOptions::filter(doc! { "genre": "Dystopian" })),
            ),
            step(
                "Find books published after 2000",
                Operation::Find(FindDocumentsOptions::filter(
                    doc! { "published_year": { "$gt": 2000 } },
                )),
            ),
            step(
                "Find books by author \"George Orwell\"",
                Operation::Find(FindDocumentsOptions::filter(doc! { "author": "George Orwell" })),
            ),
            step(
                "Update price of \"1984\" to 10.99",
                Operation::UpdateOne {
                    filter: doc! { "title": "1984" },
                    update: doc! { "$set": { "price": 10.99 } },
                },
            ),
            step(
                "Delete book titled \"To Be Deleted\" (if exists)",
                Operation::DeleteOne { filter: doc! { "title": "To Be Deleted" } },
            ),
        ],
    }
}

fn advanced_queries() -> Section {
    Section {
        title: "Task 3: Advanced Queries",
        steps: vec![
            step(
                "Books in stock and published after 2010",
                Operation::Find(FindDocumentsOptions::filter(
                    doc! { "in_stock": true, "published_year": { "$gt": 2010 } },
                )),
            ),
            step(
                "Projection: title, author, price",
                Operation::Find(
                    find_all()
                        .with_projection(doc! { "title": 1, "author": 1, "price": 1, "_id": 0 }),
                ),
            ),
            step(
                "Sort by price ascending",
                Operation::Find(find_all().with_sort(doc! { "price": 1 })),
            ),
            step(
                "Sort by price descending",
                Operation::Find(find_all().with_sort(doc! { "price": -1 })),
            ),
            step("Pagination: Page 1 (limit 5)", Operation::Find(find_all().with_limit(5))),
            step(
                "Pagination: Page 2 (skip 5, limit 5)",
                Operation::Find(find_all().with_skip(5).with_limit(5)),
            ),
        ],
    }
}

fn aggregation_pipeline() -> Section {
    Section {
        title: "Task 4: Aggregation Pipeline",
        steps: vec![
            step(
                "Average price by genre",
                Operation::Aggregate { pipeline: average_price_by_genre() },
            ),
            step(
                "Author with most books",
                Operation::Aggregate { pipeline: author_with_most_books() },
            ),
            step(
                "Books grouped by publication decade",
                Operation::Aggregate { pipeline: books_by_decade() },
            ),
        ],
    }
}

fn indexing() -> Section {
    Section {
        title: "Task 5: Indexing",
        steps: vec![
            step("Create index on title", Operation::CreateIndex { keys: doc! { "title": 1 } }),
            step(
                "Create compound index on author and published_year",
                Operation::CreateIndex { keys: doc! { "author": 1, "published_year": 1 } },
            ),
            step(
                "Explain query using title index",
                Operation::ExplainFind { filter: doc! { "title": "1984" } },
            ),
        ],
    }
}

/// All sections in execution order.
pub fn tour() -> Vec<Section> {
    vec![basic_crud(), advanced_queries(), aggregation_pipeline(), indexing()]
}
