//! Output formatting structures for CLI display

use filerev_core::Commit;
use tabled::{settings::Style, Table, Tabled};

/// Table row for displaying the commit log
#[derive(Tabled)]
pub struct LogRow {
    #[tabled(rename = "Hash")]
    pub hash: String,
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "File")]
    pub file: String,
    #[tabled(rename = "Message")]
    pub message: String,
}

/// Renders the history as a table, oldest first, short hashes.
pub fn log_table(commits: &[Commit]) -> Table {
    let rows: Vec<LogRow> = commits
        .iter()
        .map(|c| LogRow {
            hash: c.short_hash().to_string(),
            date: c.timestamp.clone(),
            file: c.filename.clone(),
            message: c.message.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table
}
