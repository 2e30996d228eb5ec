pub mod address_writer;
pub mod payload_reader;
