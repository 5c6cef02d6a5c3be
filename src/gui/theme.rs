use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::{FromColor, Hsl, Srgb, Srgba};

use crate::geometry::SLOT_COUNT;

pub struct ThemeColors {
    pub face: Srgba<f64>,
    pub outline: Srgba<f64>,
    pub label: Srgba<f64>,
    pub highlight: Srgba<f64>,
    pub accent: Srgba<f64>,
}

impl Default for ThemeColors {
    /// The fallback palette, used when no style context is available.
    fn default() -> Self {
        Self {
            face: Srgba::new(1.0, 1.0, 1.0, 1.0),
            outline: Srgba::new(0.0, 0.0, 0.0, 1.0),
            label: Srgba::new(0.1, 0.1, 0.1, 1.0),
            highlight: Srgba::new(1.0, 0.84, 0.0, 0.55),
            accent: Srgba::new(0.5, 0.2, 0.7, 0.55),
        }
    }
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        Self {
            face: Self::lookup_color(
                context,
                "theme_base_color",
                Srgba::new(1.0, 1.0, 1.0, 1.0),
                Some(1.0),
            ),
            outline: Self::lookup_color(
                context,
                "theme_fg_color",
                Srgba::new(0.0, 0.0, 0.0, 1.0),
                Some(1.0),
            ),
            label: Self::lookup_color(
                context,
                "theme_text_color",
                Srgba::new(0.1, 0.1, 0.1, 1.0),
                Some(1.0),
            ),
            highlight: Self::lookup_color(
                context,
                "theme_selected_bg_color",
                Srgba::new(1.0, 0.84, 0.0, 0.55),
                Some(0.55),
            ),
            // the classic wheel's purple marker circles
            accent: Srgba::new(0.5, 0.2, 0.7, 0.55),
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}

/// Pastel hue ramp for the pie slices, one hue step per slot
/// (hsl(i * 30deg, 70%, 80%)).
pub fn slice_color(index: usize) -> Srgba<f64> {
    let hue = (index % SLOT_COUNT) as f64 * (360.0 / SLOT_COUNT as f64);
    let rgb: Srgb<f64> = Srgb::from_color(Hsl::new_srgb(hue, 0.7, 0.8));
    Srgba::new(rgb.red, rgb.green, rgb.blue, 1.0)
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.zodiac-window {
    background-color: @theme_bg_color;
}
.soulmate-label {
    font-size: 18px;
    font-weight: bold;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_hues_step_by_thirty_degrees() {
        // slot 0 is red-ish, slot 4 (120deg) green-ish, slot 8 (240deg) blue-ish
        let red = slice_color(0);
        assert!(red.red > red.green && red.red > red.blue);
        let green = slice_color(4);
        assert!(green.green > green.red && green.green > green.blue);
        let blue = slice_color(8);
        assert!(blue.blue > blue.red && blue.blue > blue.green);
    }

    #[test]
    fn slice_colors_are_opaque_and_in_gamut() {
        for i in 0..SLOT_COUNT {
            let c = slice_color(i);
            assert_eq!(c.alpha, 1.0);
            for channel in [c.red, c.green, c.blue] {
                assert!((0.0..=1.0).contains(&channel));
            }
        }
    }
}
