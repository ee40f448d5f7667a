pub mod catalog;
pub mod common;
pub mod export;
pub mod gallery;
pub mod identification;
pub mod recipe;
pub mod session;
pub mod shelf;
pub mod shopping;
