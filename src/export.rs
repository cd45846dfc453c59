use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::TrackerConfig;
use crate::errors::Result;

/// filename used when the caller does not supply one
pub const DEFAULT_EXPORT_FILENAME: &str = "export.csv";

/// content type of exported files
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8;";

/// rendered table: header and body rows alike, one string per cell
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// quote a single cell: trim, double embedded quotes, wrap in quotes
pub fn quote_field(cell: &str) -> String {
    format!("\"{}\"", cell.trim().replace('"', "\"\""))
}

/// every cell quoted, cells joined by commas, rows by newlines
pub fn export_table_to_csv(table: &Table) -> String {
    table
        .rows
        .iter()
        .map(|row| row.iter().map(|cell| quote_field(cell)).collect::<Vec<_>>().join(","))
        .collect::<Vec<_>>()
        .join("\n")
}

/// a CSV file ready to hand to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
    pub mime_type: &'static str,
}

impl CsvExport {
    pub fn from_table(table: &Table, filename: Option<&str>) -> Self {
        Self {
            filename: filename
                .filter(|name| !name.is_empty())
                .unwrap_or(DEFAULT_EXPORT_FILENAME)
                .to_string(),
            content: export_table_to_csv(table),
            mime_type: CSV_MIME_TYPE,
        }
    }

    /// export named after the configured `export_filename`
    pub fn from_config(table: &Table, config: &TrackerConfig) -> Self {
        Self::from_table(table, Some(&config.export_filename))
    }

    /// write into `dir` under the export filename
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.filename);
        fs::write(&path, self.content.as_bytes())?;
        info!("exported {} bytes to {}", self.content.len(), path.display());
        Ok(path)
    }
}
