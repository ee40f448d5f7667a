pub mod add_shelf_item;
pub mod clear_shelf;
pub mod get_shelf;
pub mod remove_shelf_item;
pub mod select_items;
