use serde::{Deserialize, Serialize};
use std::fmt;

/// An item being ordered: what it is, how many and the price of one.
///
/// No validation happens on construction, a negative amount or price is kept as given.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MenuItem {
    pub name: String,
    pub amount: i32,
    pub price: f64,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, amount: i32, price: f64) -> Self {
        MenuItem {
            name: name.into(),
            amount,
            price,
        }
    }

    pub fn display(&self) {
        println!("{self}");
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Amount: {}", self.amount)?;
        write!(f, "Price: ${}", self.price)
    }
}
