use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Size the canvas backing store to the full viewport and return the new
/// dimensions. The blueprint always covers the whole window, so CSS pixels
/// are used directly.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let (vw, vh) = viewport_size();
    canvas.set_width((vw as u32).max(1));
    canvas.set_height((vh as u32).max(1));
    (canvas.width() as f32, canvas.height() as f32)
}

fn viewport_size() -> (f64, f64) {
    if let Some(w) = web::window() {
        let vw = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let vh = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        (vw, vh)
    } else {
        (0.0, 0.0)
    }
}
