use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Logical surface dimensions plus the device pixel scale used to map
/// logical coordinates to physical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
}

impl SurfaceSize {
    /// Hosts sometimes report 0 (or nothing at all) for viewport size or
    /// pixel ratio; every component is floored at 1.
    pub fn clamped(width: f64, height: f64, scale: f64) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            scale: scale.max(1.0),
        }
    }
}

/// The drawing operations the animator needs. Tests substitute a
/// recording implementation; production uses `CanvasSurface`.
pub trait Surface {
    /// Resize the physical buffer to logical × scale and reset the
    /// transform so all subsequent drawing uses logical coordinates.
    fn set_size(&mut self, size: SurfaceSize);
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, opacity: f64);
    /// White trail fading from opaque at the head to transparent at the tail.
    fn stroke_trail(&mut self, head_x: f64, head_y: f64, tail_x: f64, tail_y: f64, width: f64);
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// `None` when the host provides no 2D context; the caller is
    /// expected to skip the animation entirely in that case.
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()??
            .dyn_into()
            .ok()?;
        Some(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn set_size(&mut self, size: SurfaceSize) {
        self.canvas.set_width((size.width * size.scale).floor() as u32);
        self.canvas.set_height((size.height * size.scale).floor() as u32);
        let _ = self
            .ctx
            .set_transform(size.scale, 0.0, 0.0, size.scale, 0.0, 0.0);
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, opacity: f64) {
        self.ctx.begin_path();
        self.ctx
            .set_fill_style_str(&format!("rgba(255,255,255,{})", opacity));
        let _ = self.ctx.arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0);
        self.ctx.fill();
    }

    fn stroke_trail(&mut self, head_x: f64, head_y: f64, tail_x: f64, tail_y: f64, width: f64) {
        let gradient = self.ctx.create_linear_gradient(head_x, head_y, tail_x, tail_y);
        let _ = gradient.add_color_stop(0.0_f32, "rgba(255,255,255,1)");
        let _ = gradient.add_color_stop(1.0_f32, "rgba(255,255,255,0)");
        self.ctx.set_stroke_style_canvas_gradient(&gradient);
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(tail_x, tail_y);
        self.ctx.line_to(head_x, head_y);
        self.ctx.stroke();
    }
}
