//! Tabular row windows returned for a slice.

use serde::{Deserialize, Serialize};

/// Display metadata for one column of a [`DataPanelRows`] window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInfo {
    /// Column name
    pub name: String,
    /// Column type name as reported by the server
    #[serde(rename = "type")]
    pub kind: String,
    /// Front-end component used to render cells of this column
    pub cell_component: String,
    /// Component properties; `null` when the server omits them
    #[serde(default)]
    pub cell_props: serde_json::Value,
}

/// A window of rows from a data panel, with the columns describing them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPanelRows {
    /// Column metadata, in cell order
    pub column_infos: Vec<ColumnInfo>,
    /// Row cells; each inner vector follows `column_infos` order
    pub rows: Vec<Vec<serde_json::Value>>,
    /// Total number of rows available, not just those in this window
    pub full_length: usize,
    /// Name of the primary key column, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<String>,
}

impl DataPanelRows {
    /// Index of the named column.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_infos.iter().position(|c| c.name == name)
    }

    /// Iterate over the cells of one column.
    ///
    /// Rows shorter than the column index yield nothing for that row.
    pub fn column<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a serde_json::Value> + 'a {
        let index = self.column_index(name);
        self.rows
            .iter()
            .filter_map(move |row| index.and_then(|i| row.get(i)))
    }

    /// Number of rows in this window.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether this window holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
