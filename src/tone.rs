//! Tone cues fired when a string is plucked.

/// Note frequencies in Hz, one per string: C4 E4 G4 B4 D5 E4 G4 C4.
pub const NOTE_TABLE: [f32; 8] = [
    261.63, 329.63, 392.00, 493.88, 587.33, 329.63, 392.00, 261.63,
];

/// Total cue length in seconds.
pub const TONE_DURATION: f32 = 0.5;
/// Linear attack time in seconds; keeps the onset click-free.
pub const TONE_ATTACK: f32 = 0.05;
/// Peak gain of the envelope.
pub const TONE_PEAK: f32 = 0.5;

/// Everything a sink needs to play one short, fire-and-forget cue:
/// a sine at `frequency` with a linear ramp 0 -> `peak` over `attack`
/// seconds, then `peak` -> 0 at `duration`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ToneCue {
    pub frequency: f32,
    pub duration: f32,
    pub attack: f32,
    pub peak: f32,
}

impl ToneCue {
    /// Cue for the `index`-th string. Out-of-range indices produce `None`;
    /// callers treat that as a silent no-op rather than an error.
    pub fn for_note(index: usize) -> Option<ToneCue> {
        let frequency = *NOTE_TABLE.get(index)?;
        Some(ToneCue {
            frequency,
            duration: TONE_DURATION,
            attack: TONE_ATTACK,
            peak: TONE_PEAK,
        })
    }
}

/// Playback strategy seam: fire the short cue for the `index`-th string.
///
/// Cues may overlap under rapid hand-offs; sinks never cut a prior cue
/// short and never fail. An unavailable backend or unknown index plays
/// nothing.
pub trait ToneSink {
    fn emit(&mut self, index: usize);
}

/// A sink that plays nothing.
pub struct NoOpToneSink;

impl ToneSink for NoOpToneSink {
    fn emit(&mut self, _index: usize) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_spans_eight_strings() {
        assert_eq!(NOTE_TABLE.len(), 8);
        for i in 0..NOTE_TABLE.len() {
            assert!(ToneCue::for_note(i).is_some());
        }
    }

    #[test]
    fn out_of_range_is_silent() {
        assert_eq!(ToneCue::for_note(NOTE_TABLE.len()), None);
        assert_eq!(ToneCue::for_note(usize::MAX), None);
    }

    #[test]
    fn cue_carries_envelope_constants() {
        let cue = ToneCue::for_note(0).unwrap();
        assert_eq!(cue.frequency, 261.63);
        assert_eq!(cue.duration, TONE_DURATION);
        assert_eq!(cue.attack, TONE_ATTACK);
        assert_eq!(cue.peak, TONE_PEAK);
        assert!(cue.attack < cue.duration);
    }
}
