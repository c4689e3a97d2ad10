use crate::{error::OrderError, models::MenuItem};
use serde::{Deserialize, Serialize};

/// An operation on the items of an order
///
/// Commands hold no state, the items and the candidate item are handed in on every execution.
/// Remove and Modify look the candidate up by name and only ever touch the first match,
/// since Add never checks for duplicates.
pub trait Command {
    fn execute(&self, items: &mut Vec<MenuItem>, candidate: MenuItem) -> Result<(), OrderError>;
}

/// Appends the candidate, duplicates included
pub struct AddCommand;

impl Command for AddCommand {
    fn execute(&self, items: &mut Vec<MenuItem>, candidate: MenuItem) -> Result<(), OrderError> {
        items.push(candidate);
        Ok(())
    }
}

/// Drops the first item with the candidate's name
pub struct RemoveCommand;

impl Command for RemoveCommand {
    fn execute(&self, items: &mut Vec<MenuItem>, candidate: MenuItem) -> Result<(), OrderError> {
        let index = position_of(items, &candidate.name)?;
        items.remove(index);
        Ok(())
    }
}

/// Copies amount and price from the candidate onto the first item with the same name
pub struct ModifyCommand;

impl Command for ModifyCommand {
    fn execute(&self, items: &mut Vec<MenuItem>, candidate: MenuItem) -> Result<(), OrderError> {
        let index = position_of(items, &candidate.name)?;
        let item = &mut items[index];
        item.amount = candidate.amount;
        item.price = candidate.price;
        Ok(())
    }
}

fn position_of(items: &[MenuItem], name: &str) -> Result<usize, OrderError> {
    items
        .iter()
        .position(|item| item.name == name)
        .ok_or_else(|| OrderError::ItemNotFound(name.to_string()))
}

/// The closed set of commands a patron can select
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderCommand {
    Add,
    Modify,
    Remove,
}

impl OrderCommand {
    /// Number the command is selected with, see [`CommandFactory::get_command`]
    pub fn selector(self) -> i32 {
        match self {
            OrderCommand::Add => 1,
            OrderCommand::Modify => 2,
            OrderCommand::Remove => 3,
        }
    }
}

impl Command for OrderCommand {
    fn execute(&self, items: &mut Vec<MenuItem>, candidate: MenuItem) -> Result<(), OrderError> {
        match self {
            OrderCommand::Add => AddCommand.execute(items, candidate),
            OrderCommand::Modify => ModifyCommand.execute(items, candidate),
            OrderCommand::Remove => RemoveCommand.execute(items, candidate),
        }
    }
}

pub struct CommandFactory;

impl CommandFactory {
    /// Maps a selector to its command: 1 is Add, 2 is Modify and 3 is Remove
    ///
    /// Every other value falls back to Add instead of failing.
    pub fn get_command(selector: i32) -> OrderCommand {
        match selector {
            1 => OrderCommand::Add,
            2 => OrderCommand::Modify,
            3 => OrderCommand::Remove,
            other => {
                log::debug!("Unknown command selector {}, defaulting to Add", other);
                OrderCommand::Add
            }
        }
    }
}
