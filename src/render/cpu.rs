use kurbo::{Circle, PathEl, RoundedRect, Shape as _, Vec2};

use crate::{
    foundation::core::{Point, Rgba8},
    foundation::error::{SlideError, SlideResult},
    view::ControlView,
};

const PATH_TOLERANCE: f64 = 0.1;
const HANDLE_GLASS: Rgba8 = Rgba8::from_hex(0xffffff).with_alpha(26);
const KNOB: Rgba8 = Rgba8::from_hex(0xffffff);
const CHEVRON: Rgba8 = Rgba8::from_hex(0x1f2937);

/// Rasterized control, row-major RGBA8.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub data: Vec<u8>,
    /// Whether color channels are premultiplied by alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

#[derive(Clone, Debug)]
/// Canvas options for [`render_view`].
pub struct RenderSettings {
    /// Empty margin around the track, in pixels.
    pub padding_px: u32,
    /// Canvas fill behind the track.
    pub background: Rgba8,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            padding_px: 8,
            background: Rgba8::from_hex(0x12141c),
        }
    }
}

/// Rasterize a view snapshot on the CPU.
///
/// The label is not drawn; text stays with the view model.
pub fn render_view(view: &ControlView, settings: &RenderSettings) -> SlideResult<FrameRGBA> {
    let pad = f64::from(settings.padding_px);
    let width = (view.track.width().ceil() as u32).saturating_add(2 * settings.padding_px);
    let height = (view.track.height().ceil() as u32).saturating_add(2 * settings.padding_px);
    if width == 0 || height == 0 {
        return Err(SlideError::render("canvas has zero area"));
    }
    let width_u16: u16 = width
        .try_into()
        .map_err(|_| SlideError::render("canvas width exceeds u16"))?;
    let height_u16: u16 = height
        .try_into()
        .map_err(|_| SlideError::render("canvas height exceeds u16"))?;

    let offset = Vec2::new(pad, pad);
    let track = view.track + offset;
    let handle = view.handle + offset;
    let side = handle.height();
    let center = handle.center();

    let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

    set_color(&mut ctx, settings.background);
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(width),
        f64::from(height),
    ));

    fill_shape(
        &mut ctx,
        &RoundedRect::from_rect(track, track.height() / 2.0),
        view.track_tint,
    );
    fill_shape(&mut ctx, &Circle::new(center, side / 2.0), HANDLE_GLASS);
    fill_shape(&mut ctx, &Circle::new(center, side * 0.4), KNOB);
    fill_path(&mut ctx, &chevron(center, side * 0.12), CHEVRON);

    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(width_u16, height_u16);
    ctx.render_to_pixmap(&mut pixmap);

    tracing::debug!(width, height, state = ?view.state, "rendered control");
    Ok(FrameRGBA {
        width,
        height,
        data: pixmap.data_as_u8_slice().to_vec(),
        premultiplied: true,
    })
}

fn chevron(center: Point, s: f64) -> kurbo::BezPath {
    let mut path = kurbo::BezPath::new();
    path.move_to((center.x - 0.4 * s, center.y - s));
    path.line_to((center.x + 0.6 * s, center.y));
    path.line_to((center.x - 0.4 * s, center.y + s));
    path.close_path();
    path
}

fn set_color(ctx: &mut vello_cpu::RenderContext, c: Rgba8) {
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
}

fn fill_shape(ctx: &mut vello_cpu::RenderContext, shape: &impl kurbo::Shape, color: Rgba8) {
    fill_path(ctx, &shape.to_path(PATH_TOLERANCE), color);
}

fn fill_path(ctx: &mut vello_cpu::RenderContext, path: &kurbo::BezPath, color: Rgba8) {
    set_color(ctx, color);
    ctx.fill_path(&bezpath_to_cpu(path));
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
