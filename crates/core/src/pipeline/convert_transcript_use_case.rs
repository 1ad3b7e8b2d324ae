use std::path::Path;

use crate::subtitle::domain::block_merger::MergeConfig;
use crate::subtitle::domain::subtitle_writer::SubtitleWriter;
use crate::transcript::domain::transcript_reader::TranscriptReader;

use super::convert::{convert, Conversion};

/// File-to-file conversion: read raw JSON, run the pipeline, persist SRT.
///
/// The pipeline itself is the pure [`convert`] function; this use case only
/// wires filesystem seams around it so shells stay thin. Each run is
/// independent — no state survives between calls.
pub struct ConvertTranscriptUseCase {
    reader: Box<dyn TranscriptReader>,
    writer: Box<dyn SubtitleWriter>,
    config: MergeConfig,
}

impl ConvertTranscriptUseCase {
    pub fn new(
        reader: Box<dyn TranscriptReader>,
        writer: Box<dyn SubtitleWriter>,
        config: MergeConfig,
    ) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    pub fn run(
        &self,
        input: &Path,
        output: &Path,
    ) -> Result<Conversion, Box<dyn std::error::Error>> {
        let json = self.reader.read_text(input)?;
        let conversion = convert(&json, &self.config)?;
        self.writer.write(output, &conversion.entries)?;

        log::info!(
            "wrote {} entries to {} (confidence {:.3})",
            conversion.entries.len(),
            output.display(),
            conversion.confidence
        );
        Ok(conversion)
    }
}
