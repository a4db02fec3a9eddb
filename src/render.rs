//! Canvas2D drawing of the current field state. All mutation lives in
//! `core::field`; this module only reads.

use crate::constants::*;
use crate::core::BlueprintField;
use web_sys as web;

pub fn draw(ctx: &web::CanvasRenderingContext2d, field: &BlueprintField) {
    let w = field.width() as f64;
    let h = field.height() as f64;
    ctx.clear_rect(0.0, 0.0, w, h);
    draw_grid(ctx, w, h);
    draw_nodes(ctx, field);
    draw_connections(ctx, field);
    draw_bursts(ctx, field);
    draw_pointer_glow(ctx, field);
}

fn draw_grid(ctx: &web::CanvasRenderingContext2d, w: f64, h: f64) {
    ctx.begin_path();
    ctx.set_stroke_style_str(GRID_STROKE);
    ctx.set_line_width(GRID_LINE_WIDTH);
    let mut x = 0.0;
    while x < w {
        ctx.move_to(x, 0.0);
        ctx.line_to(x, h);
        x += GRID_CELL_PX;
    }
    let mut y = 0.0;
    while y < h {
        ctx.move_to(0.0, y);
        ctx.line_to(w, y);
        y += GRID_CELL_PX;
    }
    ctx.stroke();
}

fn draw_nodes(ctx: &web::CanvasRenderingContext2d, field: &BlueprintField) {
    let palette = &field.config.palette;
    for node in &field.nodes {
        ctx.set_fill_style_str(palette.node);
        ctx.set_global_alpha(NODE_FILL_ALPHA);
        let size = node.size as f64;
        ctx.fill_rect(
            node.pos.x as f64 - size / 2.0,
            node.pos.y as f64 - size / 2.0,
            size,
            size,
        );
        if let Some(tag) = node.tag {
            ctx.set_font(TAG_FONT);
            ctx.set_global_alpha(node.tag_alpha as f64);
            let _ = ctx.fill_text(
                tag,
                node.pos.x as f64 + TAG_OFFSET_X,
                node.pos.y as f64 + TAG_OFFSET_Y,
            );
        }
        ctx.set_global_alpha(1.0);
    }
}

fn draw_connections(ctx: &web::CanvasRenderingContext2d, field: &BlueprintField) {
    let [r, g, b] = field.config.palette.line_rgb;
    ctx.set_line_width(CONNECTION_LINE_WIDTH);
    for conn in field.connections() {
        let p1 = field.nodes[conn.a].pos;
        let p2 = field.nodes[conn.b].pos;
        ctx.begin_path();
        ctx.move_to(p1.x as f64, p1.y as f64);
        ctx.line_to(p2.x as f64, p2.y as f64);
        ctx.set_stroke_style_str(&format!("rgba({r}, {g}, {b}, {})", conn.alpha));
        ctx.stroke();
    }
}

fn draw_bursts(ctx: &web::CanvasRenderingContext2d, field: &BlueprintField) {
    let pulse = field.config.palette.pulse;
    for burst in &field.bursts {
        let (tail, head) = burst.span(&field.nodes);
        ctx.begin_path();
        ctx.move_to(tail.x as f64, tail.y as f64);
        ctx.line_to(head.x as f64, head.y as f64);
        ctx.set_stroke_style_str(pulse);
        ctx.set_line_width(BURST_LINE_WIDTH);
        ctx.set_shadow_blur(BURST_SHADOW_BLUR);
        ctx.set_shadow_color(pulse);
        ctx.stroke();
        ctx.set_shadow_blur(0.0);
        ctx.set_line_width(CONNECTION_LINE_WIDTH);
    }
}

fn draw_pointer_glow(ctx: &web::CanvasRenderingContext2d, field: &BlueprintField) {
    let pos = match field.pointer.pos {
        Some(p) => p,
        None => return,
    };
    let (x, y) = (pos.x as f64, pos.y as f64);
    let radius = field.pointer.radius as f64;
    ctx.begin_path();
    let _ = ctx.arc(x, y, radius, 0.0, std::f64::consts::TAU);
    if let Ok(grad) = ctx.create_radial_gradient(x, y, 0.0, x, y, radius) {
        let _ = grad.add_color_stop(0.0, POINTER_GLOW_CENTER);
        let _ = grad.add_color_stop(1.0, POINTER_GLOW_EDGE);
        ctx.set_fill_style_canvas_gradient(&grad);
        ctx.fill();
    }
}
