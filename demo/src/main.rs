use fastfood::{MenuItem, OrderCommand, OrderError, Patron};

fn main() -> Result<(), OrderError> {
    env_logger::init();

    let mut patron = Patron::new();

    for item in [
        MenuItem::new("Milk Tea", 2, 1.99),
        MenuItem::new("BlueSky", 2, 2.59),
        MenuItem::new("Pepsi", 2, 1.19),
    ] {
        run(&mut patron, OrderCommand::Add, item)?;
    }
    patron.show_current_order();

    run(&mut patron, OrderCommand::Remove, MenuItem::new("Milk Tea", 2, 1.99))?;
    patron.show_current_order();

    // 4 Pepsi instead of 2, and at a new price
    run(&mut patron, OrderCommand::Modify, MenuItem::new("Pepsi", 4, 2.59))?;
    patron.show_current_order();

    if let Ok(json) = patron.order().to_json() {
        log::debug!("Final order: {}", json);
    }
    Ok(())
}

fn run(patron: &mut Patron, command: OrderCommand, item: MenuItem) -> Result<(), OrderError> {
    patron.set_command(command.selector());
    patron.set_menu_item(item);
    patron.execute_command()
}
