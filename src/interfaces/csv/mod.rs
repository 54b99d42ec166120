pub mod campaign_reader;
pub mod report_writer;
