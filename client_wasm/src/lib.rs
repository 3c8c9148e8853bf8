//! Browser client for Pong
//!
//! Binds the game loop to a 2D `<canvas>`, two `<audio>` cues, the score
//! labels and the play button, and drives it with `requestAnimationFrame`.

pub mod audio;
pub mod canvas;
pub mod dom;
pub mod input;
pub mod scheduler;

use audio::HtmlAudioCues;
use canvas::CanvasSurface;
use dom::DomHud;
use game_core::GameLoop;
use scheduler::AnimationFrameScheduler;

/// The game loop wired to browser backends
pub type WebGame = GameLoop<CanvasSurface, AnimationFrameScheduler, HtmlAudioCues, DomHud>;

#[cfg(target_arch = "wasm32")]
mod app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use game_core::{Config, Session};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use super::*;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&format!("Failed to init logger: {}", e)))?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?;
        let canvas: HtmlCanvasElement = dom::element_by_id(&document, dom::CANVAS_ID)?;

        // Arena size is read once, here
        let config = Config::with_arena(canvas.width() as f32, canvas.height() as f32);
        let seed = js_sys::Date::now() as u64;
        let session = Session::new(config, seed);

        let scheduler = AnimationFrameScheduler::new(window.clone());
        let frame_slot = scheduler.callback_slot();
        let hud = DomHud::from_document(&document)?;
        let play_button = hud.play_button().clone();

        let game: Rc<RefCell<WebGame>> = Rc::new(RefCell::new(GameLoop::new(
            session,
            CanvasSurface::from_canvas(&canvas)?,
            scheduler,
            HtmlAudioCues::from_document(&document)?,
            hud,
        )));

        // Per-frame callback
        {
            let game = game.clone();
            *frame_slot.borrow_mut() = Some(Closure::new(move |_time: f64| {
                game.borrow_mut().tick();
            }));
        }

        // Mouse move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let y = input::pointer_y(&event, &canvas_clone);
                game.borrow_mut().pointer_moved(y);
            });
            canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Play / Play Again
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                log::info!("Starting game");
                game.borrow_mut().start();
            });
            play_button
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Show the court before the first game
        game.borrow_mut().present();

        log::info!(
            "Pong ready: {}x{} arena, seed {}",
            canvas.width(),
            canvas.height(),
            seed
        );
        Ok(())
    }
}
