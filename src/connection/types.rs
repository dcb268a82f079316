use mongodb::bson::Document;

/// Options for a `find` against one collection
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FindDocumentsOptions {
    pub filter: Option<Document>,
    pub sort: Option<Document>,
    pub projection: Option<Document>,
    pub skip: Option<u64>,
    pub limit: Option<i64>,
}

impl FindDocumentsOptions {
    pub fn filter(filter: Document) -> Self {
        Self { filter: Some(filter), ..Self::default() }
    }

    pub fn with_sort(mut self, sort: Document) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_projection(mut self, projection: Document) -> Self {
        self.projection = Some(projection);
        self
    }

    pub fn with_skip(mut self, skip: u64) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Verbosity accepted by the `explain` command.
///
/// A bare `explain` runs every candidate plan, so `AllPlansExecution` is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExplainVerbosity {
    ExecutionStats,
    #[default]
    AllPlansExecution,
}

impl ExplainVerbosity {
    pub fn as_str(self) -> &'static str {
        match self {
            ExplainVerbosity::ExecutionStats => "executionStats",
            ExplainVerbosity::AllPlansExecution => "allPlansExecution",
        }
    }
}
