#![cfg(target_arch = "wasm32")]
use crate::core::{BlueprintField, FieldConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("blueprint-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Pages without the background element still load this bundle; skip the
    // whole effect rather than fail.
    let canvas_el = match document.get_element_by_id(constants::CANVAS_ELEMENT_ID) {
        Some(el) => el,
        None => return Ok(()),
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let (width, height) = dom::sync_canvas_to_viewport(&canvas);
    let seed = js_sys::Date::now() as u64;
    let field = Rc::new(RefCell::new(BlueprintField::new(
        FieldConfig::default(),
        width,
        height,
        seed,
    )));

    events::wire_resize(&canvas, field.clone());
    events::wire_pointer(field.clone());

    // Step + draw once per display refresh, indefinitely.
    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext { field, ctx })));
    Ok(())
}
