use std::io::BufRead;
use std::path::Path;

use log::info;

use crate::command::{Command, QueryResult, TableResponse};
use crate::config::Config;
use crate::error::Result;
use crate::report::{self, Description};
use crate::source::{LoadSummary, Loader};
use crate::storage::ChainedHashTable;

pub const MENU: &str = "\
1. Load Data Structure.
2. Print Course List.
3. Print Course.
9. Exit";

/// Owns the configuration and the single course table behind the menu.
pub struct Planner {
    pub config: Config,
    table: ChainedHashTable,
}

impl Planner {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let table = ChainedHashTable::new(config.bucket_count, config.hash_policy)?;
        info!(
            "Course table ready: {} buckets, {:?} hashing",
            table.bucket_count(),
            table.policy()
        );
        Ok(Self { config, table })
    }

    pub fn table(&self) -> &ChainedHashTable {
        &self.table
    }

    fn loader(&self) -> Loader {
        Loader {
            delimiter: self.config.delimiter,
            skip_header: self.config.skip_header,
        }
    }

    /// Loads on top of whatever is already in the table.
    pub fn load(&mut self, path: &Path) -> Result<LoadSummary> {
        let loader = self.loader();
        loader.load_file(path, &mut self.table)
    }

    pub fn load_from_reader<R: BufRead>(&mut self, reader: R) -> Result<LoadSummary> {
        let loader = self.loader();
        loader.load_reader(reader, &mut self.table)
    }

    pub fn list_sorted(&self) -> String {
        report::list_sorted(&self.table)
    }

    pub fn describe(&self, key: &str) -> Description {
        report::describe(&self.table, key)
    }

    pub fn execute(&mut self, command: Command) -> Result<QueryResult> {
        match command {
            Command::Load { path } => {
                let path = path.unwrap_or_else(|| self.config.data_file.clone());
                let summary = self.load(&path)?;
                Ok(QueryResult::Message(format!(
                    "Courses loaded successfully. ({} loaded, {} skipped)",
                    summary.inserted, summary.skipped
                )))
            }

            Command::List => Ok(QueryResult::Message(self.list_sorted())),

            Command::Describe { key } => {
                let key = key.unwrap_or_default();
                Ok(QueryResult::Message(self.describe(&key).render()))
            }

            Command::Stats => {
                let rows = report::bucket_stats(&self.table)
                    .into_iter()
                    .map(|stat| {
                        vec![
                            stat.bucket.to_string(),
                            stat.chain_length.to_string(),
                            stat.keys.join(" "),
                        ]
                    })
                    .collect();

                Ok(QueryResult::Data(TableResponse {
                    columns: vec![
                        "bucket".to_string(),
                        "chain".to_string(),
                        "keys".to_string(),
                    ],
                    rows,
                }))
            }

            Command::Audit => {
                let dangling = report::dangling_prerequisites(&self.table);
                if dangling.is_empty() {
                    return Ok(QueryResult::Message(
                        "All prerequisites refer to loaded courses.".to_string(),
                    ));
                }

                Ok(QueryResult::Data(TableResponse {
                    columns: vec!["course".to_string(), "missing prerequisite".to_string()],
                    rows: dangling
                        .into_iter()
                        .map(|(course, prereq)| vec![course, prereq])
                        .collect(),
                }))
            }

            Command::Help => Ok(QueryResult::Message(MENU.to_string())),

            Command::Exit => Ok(QueryResult::Exit),
        }
    }
}
