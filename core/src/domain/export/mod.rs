pub mod ports;

pub use ports::DocumentExporter;
