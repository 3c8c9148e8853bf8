//! `<audio>` element backend for game sound cues

use game_core::{AudioCue, AudioCues};
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlAudioElement};

use crate::dom::{element_by_id, BOUNCE_SOUND_ID, SCORE_SOUND_ID};

pub struct HtmlAudioCues {
    bounce: HtmlAudioElement,
    score: HtmlAudioElement,
}

impl HtmlAudioCues {
    pub fn from_document(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            bounce: element_by_id(document, BOUNCE_SOUND_ID)?,
            score: element_by_id(document, SCORE_SOUND_ID)?,
        })
    }
}

impl AudioCues for HtmlAudioCues {
    fn play(&mut self, cue: AudioCue) {
        let element = match cue {
            AudioCue::Bounce => &self.bounce,
            AudioCue::Score => &self.score,
        };
        element.set_current_time(0.0);
        // Autoplay may be refused; the returned promise is not awaited
        let _ = element.play();
    }
}
