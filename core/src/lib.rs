pub mod engine;
pub mod probe;
pub mod report;
pub mod signature;
