//! Page elements outside the canvas: score labels and the play button

use game_core::{Hud, Score};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

pub const CANVAS_ID: &str = "gameCanvas";
pub const PLAY_BUTTON_ID: &str = "playBtn";
pub const PLAYER_SCORE_ID: &str = "playerScore";
pub const AI_SCORE_ID: &str = "aiScore";
pub const BOUNCE_SOUND_ID: &str = "soundBounce";
pub const SCORE_SOUND_ID: &str = "soundScore";

/// Look up an element by id and cast it to the expected type
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element #{}", id)))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Element #{} has an unexpected type", id)))
}

pub struct DomHud {
    player_score: Element,
    ai_score: Element,
    play_button: HtmlElement,
}

impl DomHud {
    pub fn from_document(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            player_score: element_by_id(document, PLAYER_SCORE_ID)?,
            ai_score: element_by_id(document, AI_SCORE_ID)?,
            play_button: element_by_id(document, PLAY_BUTTON_ID)?,
        })
    }

    pub fn play_button(&self) -> &HtmlElement {
        &self.play_button
    }
}

impl Hud for DomHud {
    fn show_scores(&mut self, score: Score) {
        self.player_score
            .set_text_content(Some(&score.player.to_string()));
        self.ai_score.set_text_content(Some(&score.ai.to_string()));
    }

    fn show_start_control(&mut self, label: Option<&str>) {
        let display = match label {
            Some(label) => {
                self.play_button.set_text_content(Some(label));
                "inline-block"
            }
            None => "none",
        };
        if let Err(e) = self.play_button.style().set_property("display", display) {
            log::warn!("Failed to toggle play button: {:?}", e);
        }
    }
}
