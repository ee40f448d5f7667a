pub mod entities;
pub mod page;
pub mod ports;
pub mod services;

pub use entities::*;
pub use page::Page;
pub use ports::*;
