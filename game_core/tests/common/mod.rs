#![allow(dead_code)]

use game_core::{AudioCue, AudioCues, DrawSurface, FrameScheduler, Hud, Score};
use glam::Vec2;

#[derive(Debug, Default)]
pub struct FakeScheduler {
    pub requested: usize,
    pub cancelled: usize,
}

impl FrameScheduler for FakeScheduler {
    fn request_frame(&mut self) {
        self.requested += 1;
    }

    fn cancel_frame(&mut self) {
        self.cancelled += 1;
    }
}

#[derive(Debug, Default)]
pub struct RecordingHud {
    pub scores: Vec<Score>,
    pub controls: Vec<Option<String>>,
}

impl RecordingHud {
    pub fn last_control(&self) -> Option<Option<&str>> {
        self.controls.last().map(|label| label.as_deref())
    }
}

impl Hud for RecordingHud {
    fn show_scores(&mut self, score: Score) {
        self.scores.push(score);
    }

    fn show_start_control(&mut self, label: Option<&str>) {
        self.controls.push(label.map(str::to_string));
    }
}

#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub cues: Vec<AudioCue>,
}

impl RecordingAudio {
    pub fn count(&self, cue: AudioCue) -> usize {
        self.cues.iter().filter(|c| **c == cue).count()
    }
}

impl AudioCues for RecordingAudio {
    fn play(&mut self, cue: AudioCue) {
        self.cues.push(cue);
    }
}

/// Counts frames and overlays, ignores everything else
#[derive(Debug, Default)]
pub struct CountingSurface {
    pub frames: usize,
    pub overlays: usize,
    pub texts: Vec<String>,
}

impl DrawSurface for CountingSurface {
    fn clear(&mut self, _width: f32, _height: f32) {
        self.frames += 1;
    }

    fn fill_rect(&mut self, _pos: Vec2, _size: Vec2, _color: &str, alpha: f32) {
        if alpha < 1.0 {
            self.overlays += 1;
        }
    }

    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: &str) {}

    fn dashed_line(&mut self, _from: Vec2, _to: Vec2, _dash: [f32; 2], _color: &str) {}

    fn fill_text(&mut self, text: &str, _at: Vec2, _font: &str, _color: &str) {
        self.texts.push(text.to_string());
    }
}
