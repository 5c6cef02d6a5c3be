use cairo::Context;
use palette::Srgba;
use strum::IntoEnumIterator;

use super::scene::Scene;
use super::theme::{self, ThemeColors};
use super::{LABEL_FONT_SIZE, MARKER_SIZE, REFERENCE_RADIUS, SYMBOL_FONT_SIZE};
use crate::geometry::{
    self, Point, WheelGeometry, LABEL_RADIUS_FACTOR, MARKER_RADIUS_FACTOR, SLOT_ANGLE,
    SYMBOL_RADIUS_FACTOR,
};
use crate::zodiac::ZodiacSign;

struct SliceRenderer<'a> {
    sign: ZodiacSign,
    index: usize,
    geometry: &'a WheelGeometry,
    rotation: f64,
    upright_symbols: bool,
}

impl<'a> SliceRenderer<'a> {
    fn new(
        sign: ZodiacSign,
        index: usize,
        geometry: &'a WheelGeometry,
        rotation: f64,
        upright_symbols: bool,
    ) -> Self {
        Self {
            sign,
            index,
            geometry,
            rotation,
            upright_symbols,
        }
    }

    /// Scale factor from the classic 180px wheel to the current surface.
    fn scale(&self) -> f64 {
        self.geometry.radius / REFERENCE_RADIUS
    }

    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        self.draw_wedge(cr, colors)?;
        self.draw_label(cr, colors)?;
        self.draw_symbol(cr, colors)?;
        Ok(())
    }

    fn draw_wedge(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let start = geometry::slot_start_angle(self.index) + self.rotation;
        let end = start + SLOT_ANGLE;
        let center = self.geometry.center;

        cr.move_to(center.x, center.y);
        cr.arc(
            center.x,
            center.y,
            self.geometry.radius,
            start.to_radians(),
            end.to_radians(),
        );
        cr.close_path();

        set_source(cr, theme::slice_color(self.index));
        cr.fill_preserve()?;
        set_source(cr, colors.outline);
        cr.set_line_width(1.0 * self.scale());
        cr.stroke()
    }

    fn draw_label(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let angle = geometry::slot_mid_angle(self.index) + self.rotation;
        let pos = self.geometry.point_at(angle, LABEL_RADIUS_FACTOR);
        let name = self.sign.to_string();

        set_source(cr, colors.label);
        cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
        cr.set_font_size(LABEL_FONT_SIZE * self.scale());
        draw_text_at(cr, &name, pos, Some(angle))
    }

    fn draw_symbol(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let angle = geometry::slot_mid_angle(self.index) + self.rotation;
        let pos = self.geometry.point_at(angle, SYMBOL_RADIUS_FACTOR);
        let glyph = self.sign.symbol().to_string();

        set_source(cr, colors.label);
        cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
        cr.set_font_size(SYMBOL_FONT_SIZE * self.scale());
        // upright glyphs keep their rotated position but not the slot angle
        let orientation = (!self.upright_symbols).then_some(angle);
        draw_text_at(cr, &glyph, pos, orientation)
    }
}

pub fn draw(
    cr: &Context,
    scene: &Scene,
    geometry: &WheelGeometry,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    draw_face(cr, geometry, colors)?;

    for (i, sign) in ZodiacSign::iter().enumerate() {
        SliceRenderer::new(
            sign,
            i,
            geometry,
            scene.display_rotation,
            scene.upright_symbols,
        )
        .draw(cr, colors)?;
    }

    draw_markers(cr, &scene.highlight_slots, geometry, colors.highlight)?;
    if scene.show_accents {
        draw_markers(cr, &scene.accent_slots, geometry, colors.accent)?;
    }
    Ok(())
}

fn draw_face(
    cr: &Context,
    geometry: &WheelGeometry,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let center = geometry.center;
    cr.arc(
        center.x,
        center.y,
        geometry.radius,
        0.0,
        2.0 * std::f64::consts::PI,
    );
    set_source(cr, colors.face);
    cr.fill_preserve()?;
    set_source(cr, colors.outline);
    cr.set_line_width(2.0 * geometry.radius / REFERENCE_RADIUS);
    cr.stroke()
}

/// Decorative marker circles at the rim. Fixed to the frame; they never
/// rotate with the wheel.
fn draw_markers(
    cr: &Context,
    slots: &[usize],
    geometry: &WheelGeometry,
    color: Srgba<f64>,
) -> Result<(), cairo::Error> {
    let scale = geometry.radius / REFERENCE_RADIUS;
    set_source(cr, color);
    for &slot in slots {
        let pos = geometry.point_at(geometry::slot_start_angle(slot), MARKER_RADIUS_FACTOR);
        cr.arc(pos.x, pos.y, MARKER_SIZE * scale, 0.0, 2.0 * std::f64::consts::PI);
        cr.fill()?;
    }
    Ok(())
}

fn set_source(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

/// Show `text` centered on `pos`, optionally rotated to `angle_deg` around
/// its own anchor.
fn draw_text_at(
    cr: &Context,
    text: &str,
    pos: Point,
    angle_deg: Option<f64>,
) -> Result<(), cairo::Error> {
    cr.save()?;
    cr.translate(pos.x, pos.y);
    if let Some(deg) = angle_deg {
        cr.rotate(deg.to_radians());
    }
    if let Ok(ext) = cr.text_extents(text) {
        cr.move_to(-ext.width() / 2.0, ext.height() / 2.0);
        cr.show_text(text)?;
    }
    cr.restore()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use cairo::{Format, ImageSurface};

    /// Headless render smoke test against an image surface.
    #[test]
    fn renders_to_an_image_surface() {
        let surface = ImageSurface::create(Format::ARgb32, 400, 400).unwrap();
        let cr = Context::new(&surface).unwrap();
        let geometry = WheelGeometry::fit(400.0, 400.0);
        let colors = ThemeColors::default();

        let mut scene = Scene::new(&Config::default());
        scene.display_rotation = 47.0;
        scene.show_accents = true;

        draw(&cr, &scene, &geometry, &colors).unwrap();
    }

    #[test]
    fn upright_variant_renders_too() {
        let surface = ImageSurface::create(Format::ARgb32, 200, 300).unwrap();
        let cr = Context::new(&surface).unwrap();
        let geometry = WheelGeometry::fit(200.0, 300.0);

        let config = Config {
            upright_symbols: true,
            ..Config::default()
        };
        let scene = Scene::new(&config);

        draw(&cr, &scene, &geometry, &ThemeColors::default()).unwrap();
    }
}
