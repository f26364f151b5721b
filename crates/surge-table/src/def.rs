//! Table definitions as JSON documents.
//!
//! A [`TableDef`] is the unvalidated, serializable form of a table. It only
//! becomes usable after [`TableDef::build`] checks it:
//!
//! ```text
//! {
//!   "name": "tiny",
//!   "domain": { "min": 1, "max": 2 },
//!   "entries": [
//!     { "range": { "min": 1, "max": 1 }, "resolver": { "kind": "text", "text": "heads" } },
//!     { "range": { "min": 2, "max": 2 }, "resolver": { "kind": "text", "text": "tails" } }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TableResult;
use crate::range::Range;
use crate::table::{RangeTable, TableEntry};

/// The serializable description of a range table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDef {
    /// Table name.
    pub name: String,
    /// Domain the entries must cover exactly.
    pub domain: Range,
    /// Entries in ascending order.
    pub entries: Vec<TableEntry>,
}

impl TableDef {
    /// Parse a definition from JSON without validating it.
    pub fn from_json(json: &str) -> TableResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> TableResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate into a usable table.
    pub fn build(self) -> TableResult<RangeTable> {
        RangeTable::new(self.name, self.domain, self.entries)
    }
}

impl RangeTable {
    /// The serializable form of this table.
    pub fn to_def(&self) -> TableDef {
        TableDef {
            name: self.name().to_string(),
            domain: self.domain(),
            entries: self.entries().to_vec(),
        }
    }
}

impl TryFrom<TableDef> for RangeTable {
    type Error = crate::error::TableError;

    fn try_from(def: TableDef) -> Result<Self, Self::Error> {
        def.build()
    }
}

/// Read, parse and validate a table from a JSON file.
pub fn load_table(path: &Path) -> TableResult<RangeTable> {
    let json = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), "loading table definition");
    TableDef::from_json(&json)?.build()
}
