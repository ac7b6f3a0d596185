pub mod analyzers;
pub mod output;
pub mod parser;
pub mod report;
pub mod shell;
pub mod stats;
pub mod store;
