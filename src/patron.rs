use crate::{
    commands::{CommandFactory, OrderCommand},
    error::OrderError,
    models::MenuItem,
    order::Order,
};

/// The invoker, picks a command and an item and has its order execute them
///
/// Nothing here knows how a command changes the order.
#[derive(Default)]
pub struct Patron {
    command: Option<OrderCommand>,
    menu_item: Option<MenuItem>,
    order: Order,
}

impl Patron {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order(order: Order) -> Self {
        Patron {
            command: None,
            menu_item: None,
            order,
        }
    }

    /// Selects the command through [`CommandFactory::get_command`], unknown selectors mean Add
    pub fn set_command(&mut self, selector: i32) {
        self.command = Some(CommandFactory::get_command(selector));
    }

    pub fn set_menu_item(&mut self, item: MenuItem) {
        self.menu_item = Some(item);
    }

    /// Executes the selected command with the selected item
    ///
    /// Both stay selected afterwards, so the same command can be run again.
    /// Fails without touching the order if either one was never selected.
    pub fn execute_command(&mut self) -> Result<(), OrderError> {
        let command = self.command.ok_or(OrderError::CommandNotSet)?;
        let item = self.menu_item.clone().ok_or(OrderError::MenuItemNotSet)?;

        self.order.execute(&command, item)
    }

    pub fn show_current_order(&self) {
        self.order.show_current_items();
    }

    pub fn order(&self) -> &Order {
        &self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execute_needs_a_command() {
        let mut patron = Patron::new();
        patron.set_menu_item(MenuItem::new("Fries", 1, 1.5));

        assert_eq!(patron.execute_command(), Err(OrderError::CommandNotSet));
        assert!(patron.order().is_empty());
    }

    #[test]
    fn execute_needs_an_item() {
        let mut patron = Patron::new();
        patron.set_command(1);

        assert_eq!(patron.execute_command(), Err(OrderError::MenuItemNotSet));
        assert!(patron.order().is_empty());
    }

    #[test]
    fn selection_is_kept_between_executions() {
        let mut patron = Patron::new();
        patron.set_command(1);
        patron.set_menu_item(MenuItem::new("Fries", 1, 1.5));

        patron.execute_command().unwrap();
        patron.execute_command().unwrap();

        assert_eq!(patron.order().len(), 2);
    }

    #[test]
    fn unknown_selector_adds() {
        let mut patron = Patron::new();
        patron.set_command(42);
        patron.set_menu_item(MenuItem::new("Shake", 1, 3.0));
        patron.execute_command().unwrap();

        assert_eq!(patron.order().items(), [MenuItem::new("Shake", 1, 3.0)]);
    }

    #[test]
    fn works_on_existing_order() {
        let mut order = Order::new();
        order
            .execute(&OrderCommand::Add, MenuItem::new("Burger", 1, 4.5))
            .unwrap();

        let mut patron = Patron::with_order(order);
        patron.set_command(3);
        patron.set_menu_item(MenuItem::new("Burger", 0, 0.0));
        patron.execute_command().unwrap();

        assert!(patron.order().is_empty());
    }
}
