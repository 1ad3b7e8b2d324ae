pub mod srt_file_writer;
pub mod srt_renderer;
