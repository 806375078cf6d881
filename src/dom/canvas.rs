use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::domain::FieldSettings;
use crate::simulation::IntroCore;

/// Draws the particle field onto the overlay canvas
pub(super) struct FieldPainter {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    link_rgb: String,
    dot_rgb: String,
    link_width: f64,
}

impl FieldPainter {
    pub(super) fn new(canvas: HtmlCanvasElement, settings: &FieldSettings) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("No 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let [lr, lg, lb] = settings.link_rgb;
        let [dr, dg, db] = settings.dot_rgb;
        Ok(Self {
            canvas,
            ctx,
            link_rgb: format!("{}, {}, {}", lr, lg, lb),
            dot_rgb: format!("{}, {}, {}", dr, dg, db),
            link_width: settings.link_width as f64,
        })
    }

    pub(super) fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    /// Clear, then links under dots. Both use the positions after this frame's advance.
    pub(super) fn paint(&self, core: &mut IntroCore) {
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);

        ctx.set_line_width(self.link_width);
        for link in core.collect_links() {
            ctx.begin_path();
            ctx.move_to(link.a.x as f64, link.a.y as f64);
            ctx.line_to(link.b.x as f64, link.b.y as f64);
            ctx.set_stroke_style_str(&format!("rgba({}, {})", self.link_rgb, link.alpha));
            ctx.stroke();
        }

        let amplitude = core.field().settings().pulse_amplitude;
        for p in core.field().particles() {
            ctx.begin_path();
            if ctx
                .arc(p.pos.x as f64, p.pos.y as f64, p.radius as f64, 0.0, std::f64::consts::TAU)
                .is_err()
            {
                continue;
            }
            ctx.set_fill_style_str(&format!("rgba({}, {})", self.dot_rgb, p.pulse_alpha(amplitude)));
            ctx.fill();
        }
    }
}
