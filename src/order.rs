use serde::{Deserialize, Serialize};
use std::io::{self, Write};

use crate::{commands::Command, error::OrderError, models::MenuItem};

/// Printed after the items every time an order is shown
pub const SEPARATOR: &str = "-----------------------";

/// The receiver, holds the items in the order they were added
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct Order {
    items: Vec<MenuItem>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute the given command against the current items
    ///
    /// The order does no validation of its own, whatever the command decides is applied.
    /// A failing command leaves the items untouched.
    pub fn execute<T: Command>(
        &mut self,
        command: &T,
        candidate: MenuItem,
    ) -> Result<(), OrderError> {
        log::debug!("Executing command for item: {}", candidate.name);

        command.execute(&mut self.items, candidate).map_err(|e| {
            log::warn!("Command failed: {}", e);
            e
        })
    }

    /// Run the given query against the current items
    #[inline(always)]
    pub fn query<R, F: FnOnce(&[MenuItem]) -> R>(&self, query: F) -> R {
        query(&self.items)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Writes every item followed by [`SEPARATOR`]
    pub fn write_items<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for item in &self.items {
            writeln!(out, "{item}")?;
        }
        writeln!(out, "{SEPARATOR}")
    }

    pub fn show_current_items(&self) {
        let stdout = io::stdout();
        if let Err(e) = self.write_items(&mut stdout.lock()) {
            log::error!("Couldn't show order: {}", e);
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.items)
    }
}
