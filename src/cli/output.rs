use comfy_table::Table;
use serde::Serialize;

use crate::prelude::*;

#[derive(Copy, Clone, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table.
    #[default]
    Table,

    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Print the value to the standard output.
    pub fn print<T: Serialize>(self, value: &T, build_table: impl FnOnce(&T) -> Table) -> Result {
        match self {
            Self::Table => println!("{}", build_table(value)),
            Self::Json => println!(
                "{}",
                serde_json::to_string_pretty(value).context("failed to serialize the output")?
            ),
        }
        Ok(())
    }
}
