pub mod response_reader;
