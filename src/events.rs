use crate::core::BlueprintField;
use crate::dom;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Resize is a full reset: re-sync the canvas to the viewport, then
/// regenerate the whole field (nodes resampled, bursts dropped).
pub fn wire_resize(canvas: &web::HtmlCanvasElement, field: Rc<RefCell<BlueprintField>>) {
    let canvas_resize = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_to_viewport(&canvas_resize);
        field.borrow_mut().resize(w, h);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

pub fn wire_pointer(field: Rc<RefCell<BlueprintField>>) {
    // pointermove: the canvas spans the viewport at (0, 0), so client
    // coordinates map straight onto the surface.
    {
        let field_move = field.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            field_move
                .borrow_mut()
                .set_pointer(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
        }) as Box<dyn FnMut(_)>);
        if let Some(window) = web::window() {
            let _ = window
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // pointerout: drop the highlight once the cursor leaves the page.
    {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            field.borrow_mut().clear_pointer();
        }) as Box<dyn FnMut(_)>);
        if let Some(window) = web::window() {
            let _ = window
                .add_event_listener_with_callback("pointerout", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}
