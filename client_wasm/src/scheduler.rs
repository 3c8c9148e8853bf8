//! `requestAnimationFrame` scheduling

use std::cell::RefCell;
use std::rc::Rc;

use game_core::FrameScheduler;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

pub type FrameCallback = Closure<dyn FnMut(f64)>;

/// Shared slot for the per-frame callback
///
/// The callback needs the game loop and the game loop owns the scheduler,
/// so the slot is filled in after both exist.
pub type FrameSlot = Rc<RefCell<Option<FrameCallback>>>;

pub struct AnimationFrameScheduler {
    window: Window,
    callback: FrameSlot,
    handle: Option<i32>,
}

impl AnimationFrameScheduler {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            callback: Rc::new(RefCell::new(None)),
            handle: None,
        }
    }

    pub fn callback_slot(&self) -> FrameSlot {
        self.callback.clone()
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn request_frame(&mut self) {
        let slot = self.callback.borrow();
        let Some(callback) = slot.as_ref() else {
            log::warn!("Frame requested before the frame callback was installed");
            return;
        };
        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(handle) => self.handle = Some(handle),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }

    fn cancel_frame(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Err(e) = self.window.cancel_animation_frame(handle) {
                log::warn!("cancelAnimationFrame failed: {:?}", e);
            }
        }
    }
}
