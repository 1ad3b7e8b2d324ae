/// Per-block speaker occurrence counts with stable first-seen ordering.
///
/// The dominant speaker is the tally mode; ties break toward the speaker
/// seen first, so insertion order matters and a hash map will not do.
#[derive(Debug, Default)]
pub struct SpeakerTally {
    counts: Vec<(String, usize)>,
}

impl SpeakerTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, speaker: &str) {
        match self.counts.iter_mut().find(|(name, _)| name == speaker) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((speaker.to_string(), 1)),
        }
    }

    /// The most frequent speaker, first-seen winning ties.
    pub fn dominant(&self) -> Option<&str> {
        let mut best: Option<(&str, usize)> = None;
        for (name, count) in &self.counts {
            match best {
                Some((_, best_count)) if *count <= best_count => {}
                _ => best = Some((name, *count)),
            }
        }
        best.map(|(name, _)| name)
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tally_has_no_dominant() {
        assert!(SpeakerTally::new().dominant().is_none());
    }

    #[test]
    fn test_single_speaker_dominates() {
        let mut tally = SpeakerTally::new();
        tally.record("S1");
        assert_eq!(tally.dominant(), Some("S1"));
    }

    #[test]
    fn test_majority_wins() {
        let mut tally = SpeakerTally::new();
        tally.record("S1");
        tally.record("S2");
        tally.record("S2");
        assert_eq!(tally.dominant(), Some("S2"));
    }

    #[test]
    fn test_tie_breaks_toward_first_seen() {
        let mut tally = SpeakerTally::new();
        tally.record("S2");
        tally.record("S1");
        tally.record("S1");
        tally.record("S2");
        assert_eq!(tally.dominant(), Some("S2"));
    }

    #[test]
    fn test_clear_resets_counts() {
        let mut tally = SpeakerTally::new();
        tally.record("S1");
        tally.clear();
        assert!(tally.is_empty());
        assert!(tally.dominant().is_none());
    }
}
