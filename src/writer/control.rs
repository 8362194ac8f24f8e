//! Program control metadata written at the top of every file

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Row, Table, TableIdentifier};
use crate::registry::SchemaRegistry;

/// Values for the synthesized `PROGRAM CONTROL` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramControlInfo {
    /// Written as `ProgramName`
    pub program: String,
    /// Written as `Version`
    pub version: String,
    /// Written as `CurrUnits`, e.g. `N, m, C`
    pub units: String,
}

impl Default for ProgramControlInfo {
    fn default() -> Self {
        Self {
            program: "SAP2000".to_string(),
            version: "22.0.0".to_string(),
            units: "N, m, C".to_string(),
        }
    }
}

impl ProgramControlInfo {
    pub fn new(program: impl Into<String>, version: impl Into<String>, units: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            version: version.into(),
            units: units.into(),
        }
    }

    /// Set the units from the host's unit code, e.g. `kN_m_C`
    pub fn with_units_code(mut self, code: &str) -> Self {
        self.units = units_from_code(code);
        self
    }

    /// Build the control table, using the registered schema when there is one
    pub fn to_table(&self, registry: &SchemaRegistry) -> Result<Table> {
        let identifier = TableIdentifier::program_control();
        let schema = registry.resolve(&identifier)?.into_owned();

        let mut table = Table::new(identifier, schema);
        table.add_row(
            Row::new()
                .with("ProgramName", self.program.as_str())
                .with("Version", self.version.as_str())
                .with("CurrUnits", self.units.as_str()),
        )?;
        Ok(table)
    }
}

/// Turn a unit code such as `kip_ft_F` into the `CurrUnits` text `Kip, ft, F`
pub fn units_from_code(code: &str) -> String {
    let mut chars = code.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    capitalized.replace('_', ", ")
}
