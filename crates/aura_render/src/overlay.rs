//! Slider widget drawing
//!
//! Builds flat quads for the preset slider: a grey track, a filled bar up to
//! the current value, tick marks at each step, a marker at the initial value
//! and a square handle.

use aura_input::PresetSlider;
use aura_math::Rgba;

use crate::pipeline::OverlayVertex;

/// Fraction of the window height kept free below the scene for the slider
pub const SLIDER_MARGIN: f32 = 0.25;

const TRACK: Rgba = Rgba::rgb(0.83, 0.83, 0.83);
const TRACK_DARK: Rgba = Rgba::rgb(0.3, 0.3, 0.3);
const INITIAL_MARKER: Rgba = Rgba::rgb(1.0, 0.0, 0.0);
const HANDLE_EDGE: Rgba = Rgba::rgb(0.5, 0.5, 0.5);

/// Triangles for the slider in normalized device coordinates
pub fn slider_vertices(slider: &PresetSlider, initial: usize, dark: bool) -> Vec<OverlayVertex> {
    let rect = slider.rect();
    let mut quads = QuadList::default();

    let track = if dark { TRACK_DARK } else { TRACK };
    quads.push(rect.left, rect.bottom, rect.width, rect.height, track);

    let fill = Rgba::cycle(0);
    quads.push(rect.left, rect.bottom, rect.width * slider.fraction(), rect.height, fill);

    let (min, max) = slider.range();
    let tick_color = if dark { Rgba::WHITE } else { Rgba::BLACK };
    for v in min..=max {
        let x = rect.left + rect.width * value_fraction(v, min, max);
        quads.push(x - 0.001, rect.bottom - 0.008, 0.002, 0.006, tick_color);
    }

    let initial_x = rect.left + rect.width * value_fraction(initial, min, max);
    quads.push(initial_x - 0.001, rect.bottom, 0.002, rect.height, INITIAL_MARKER);

    let handle_x = rect.left + rect.width * slider.fraction();
    let hw = 0.012;
    let hh = rect.height * 1.4;
    let hy = rect.bottom + rect.height / 2.0 - hh / 2.0;
    quads.push(handle_x - hw / 2.0, hy, hw, hh, HANDLE_EDGE);
    let inset = 0.002;
    quads.push(handle_x - hw / 2.0 + inset, hy + inset, hw - 2.0 * inset, hh - 2.0 * inset, Rgba::WHITE);

    quads.vertices
}

fn value_fraction(v: usize, min: usize, max: usize) -> f32 {
    if max <= min {
        0.0
    } else {
        (v.saturating_sub(min)) as f32 / (max - min) as f32
    }
}

#[derive(Default)]
struct QuadList {
    vertices: Vec<OverlayVertex>,
}

impl QuadList {
    /// Push a rectangle given in figure fractions
    fn push(&mut self, left: f32, bottom: f32, width: f32, height: f32, color: Rgba) {
        let (x0, y0) = to_ndc(left, bottom);
        let (x1, y1) = to_ndc(left + width, bottom + height);
        let c = color.0;
        self.vertices.extend_from_slice(&[
            OverlayVertex::new([x0, y0], c),
            OverlayVertex::new([x1, y0], c),
            OverlayVertex::new([x1, y1], c),
            OverlayVertex::new([x0, y0], c),
            OverlayVertex::new([x1, y1], c),
            OverlayVertex::new([x0, y1], c),
        ]);
    }
}

fn to_ndc(fx: f32, fy: f32) -> (f32, f32) {
    (fx * 2.0 - 1.0, fy * 2.0 - 1.0)
}
