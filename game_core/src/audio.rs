//! Audio cue port
//!
//! Cues are fire-and-forget: playback failure is the backend's problem.

/// Sounds the game asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// Ball bounced off a wall or paddle
    Bounce,
    /// A point was scored
    Score,
}

/// Something that can play audio cues
pub trait AudioCues {
    /// Restart the cue from the beginning and play it
    fn play(&mut self, cue: AudioCue);
}

impl<T: AudioCues + ?Sized> AudioCues for &mut T {
    fn play(&mut self, cue: AudioCue) {
        (**self).play(cue)
    }
}

/// Silent backend
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAudio;

impl AudioCues for NoAudio {
    fn play(&mut self, _cue: AudioCue) {}
}
