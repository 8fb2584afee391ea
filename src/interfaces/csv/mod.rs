pub mod result_writer;
pub mod scenario_reader;
