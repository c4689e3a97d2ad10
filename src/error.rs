#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    #[error("Menu item not found in order: {0}")]
    ItemNotFound(String),

    #[error("No command selected")]
    CommandNotSet,

    #[error("No menu item selected")]
    MenuItemNotSet,
}
