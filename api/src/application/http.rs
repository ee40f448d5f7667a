pub mod catalog;
pub mod gallery;
pub mod health;
pub mod ingredients;
pub mod recipe;
pub mod server;
pub mod session;
pub mod shelf;
