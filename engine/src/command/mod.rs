pub mod parser;

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Load {
        // None means the configured data file
        path: Option<PathBuf>,
    },
    List,
    Describe {
        key: Option<String>,
    },
    Stats,
    Audit,
    Help,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    Message(String),
    Data(TableResponse),
    Exit,
}

/// Tabular output for the CLI to lay out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableResponse {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}
