pub mod entry_parser;
pub mod report;
