//! Pointer input handling

use web_sys::{HtmlCanvasElement, MouseEvent};

/// Pointer y relative to the top of the canvas
pub fn pointer_y(event: &MouseEvent, canvas: &HtmlCanvasElement) -> f32 {
    let rect = canvas.get_bounding_client_rect();
    relative_y(event.client_y() as f64, rect.top())
}

/// Viewport y made relative to an element's top edge
pub fn relative_y(client_y: f64, element_top: f64) -> f32 {
    (client_y - element_top) as f32
}
