use crate::config::{Config, SnapConvention};
use crate::geometry::Point;
use crate::rotation::WheelState;
use crate::selection;
use crate::zodiac::ZodiacSign;

/// Everything the draw function reads, shared between the component and the
/// cairo draw closure. Mutated only through the handlers below.
pub struct Scene {
    pub state: WheelState,
    /// Rotation currently on screen, degrees in [0, 360). Tracks the live
    /// rotation during a drag and the animated glide after release.
    pub display_rotation: f64,
    pub snap_convention: SnapConvention,
    pub upright_symbols: bool,
    pub highlight_slots: Vec<usize>,
    pub accent_slots: Vec<usize>,
    pub show_accents: bool,
    pub selected: ZodiacSign,
}

/// Where the post-release glide starts and ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapTarget {
    pub from: f64,
    pub to: f64,
}

impl Scene {
    pub fn new(config: &Config) -> Self {
        let state = WheelState::new();
        let selected = selection::soulmate(state.committed_rotation(), config.snap_convention);
        Self {
            state,
            display_rotation: 0.0,
            snap_convention: config.snap_convention,
            upright_symbols: config.upright_symbols,
            highlight_slots: config.highlight_slots.clone(),
            accent_slots: config.accent_slots.clone(),
            show_accents: false,
            selected,
        }
    }

    /// Apply a reloaded config. Rotation and drag state survive; the
    /// selection is recomputed in case the convention changed.
    pub fn apply_config(&mut self, config: &Config) {
        self.snap_convention = config.snap_convention;
        self.upright_symbols = config.upright_symbols;
        self.highlight_slots = config.highlight_slots.clone();
        self.accent_slots = config.accent_slots.clone();
        self.selected =
            selection::soulmate(self.state.committed_rotation(), self.snap_convention);
    }

    pub fn begin_drag(&mut self, pointer: Point, center: Point) {
        self.state.begin_drag(pointer, center);
    }

    /// Follow the pointer. Returns whether the display changed.
    pub fn drag_to(&mut self, pointer: Point, center: Point) -> bool {
        match self.state.drag_to(pointer, center) {
            Some(live) => {
                self.display_rotation = live;
                true
            }
            None => false,
        }
    }

    /// Commit the drag. Updates the selection and returns the glide arc for
    /// the snap animation; `None` when no drag was active.
    pub fn end_drag(&mut self) -> Option<SnapTarget> {
        let committed = self.state.end_drag()?;
        self.selected = selection::soulmate(committed, self.snap_convention);
        Some(SnapTarget {
            from: self.display_rotation,
            to: committed,
        })
    }

    pub fn toggle_accents(&mut self) {
        self.show_accents = !self.show_accents;
    }
}
