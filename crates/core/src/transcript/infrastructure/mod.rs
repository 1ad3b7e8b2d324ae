pub mod json_file_reader;
