use crate::core::BlueprintField;
use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: Rc<RefCell<BlueprintField>>,
    pub ctx: web::CanvasRenderingContext2d,
}

impl FrameContext {
    /// One display-refresh step: advance the simulation, then repaint.
    pub fn frame(&mut self) {
        self.field.borrow_mut().step();
        render::draw(&self.ctx, &self.field.borrow());
    }
}

/// Drive `FrameContext::frame` from a self-rescheduling
/// `requestAnimationFrame` closure. Runs until the page unloads; there is no
/// explicit stop.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
