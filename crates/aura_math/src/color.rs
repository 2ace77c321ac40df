//! RGBA colors and the named palette used by the animations

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

/// sRGB color with straight alpha, components in `[0, 1]`
///
/// Serializes as a plain `[r, g, b, a]` array.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgba(pub [f32; 4]);

impl Rgba {
    pub const WHITE: Self = Self([1.0, 1.0, 1.0, 1.0]);
    pub const BLACK: Self = Self([0.0, 0.0, 0.0, 1.0]);
    pub const CYAN: Self = Self([0.0, 1.0, 1.0, 1.0]);

    /// Ten-color qualitative cycle, handed out in order to layers drawn
    /// without an explicit color
    pub const CYCLE: [Self; 10] = [
        Self([0.121_569, 0.466_667, 0.705_882, 1.0]), // #1f77b4
        Self([1.0, 0.498_039, 0.054_902, 1.0]),       // #ff7f0e
        Self([0.172_549, 0.627_451, 0.172_549, 1.0]), // #2ca02c
        Self([0.839_216, 0.152_941, 0.156_863, 1.0]), // #d62728
        Self([0.580_392, 0.403_922, 0.741_176, 1.0]), // #9467bd
        Self([0.549_020, 0.337_255, 0.294_118, 1.0]), // #8c564b
        Self([0.890_196, 0.466_667, 0.760_784, 1.0]), // #e377c2
        Self([0.498_039, 0.498_039, 0.498_039, 1.0]), // #7f7f7f
        Self([0.737_255, 0.741_176, 0.133_333, 1.0]), // #bcbd22
        Self([0.090_196, 0.745_098, 0.811_765, 1.0]), // #17becf
    ];

    /// Create an opaque color from RGB components
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self([r, g, b, 1.0])
    }

    /// Same color with a different alpha
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Self {
        let [r, g, b, _] = self.0;
        Self([r, g, b, alpha])
    }

    /// Color at position `index` of [`Rgba::CYCLE`], wrapping around
    #[inline]
    pub fn cycle(index: usize) -> Self {
        Self::CYCLE[index % Self::CYCLE.len()]
    }

    /// Look up a named color (CSS/X11 definitions)
    ///
    /// Returns `None` for names outside the palette the animations use.
    pub fn from_name(name: &str) -> Option<Self> {
        let c = match name {
            "white" => Self::WHITE,
            "black" => Self::BLACK,
            "cyan" => Self::CYAN,
            "gray" | "grey" => Self::rgb(0.501_961, 0.501_961, 0.501_961),
            "lightgray" | "lightgrey" => Self::rgb(0.827_451, 0.827_451, 0.827_451),
            "red" => Self::rgb(1.0, 0.0, 0.0),
            "orange" => Self::rgb(1.0, 0.647_059, 0.0),
            "yellow" => Self::rgb(1.0, 1.0, 0.0),
            "green" => Self::rgb(0.0, 0.501_961, 0.0),
            "blue" => Self::rgb(0.0, 0.0, 1.0),
            "indigo" => Self::rgb(0.294_118, 0.0, 0.509_804),
            "violet" => Self::rgb(0.933_333, 0.509_804, 0.933_333),
            "pink" => Self::rgb(1.0, 0.752_941, 0.796_078),
            _ => return None,
        };
        Some(c)
    }

    #[inline]
    pub fn r(&self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub fn g(&self) -> f32 {
        self.0[1]
    }

    #[inline]
    pub fn b(&self) -> f32 {
        self.0[2]
    }

    #[inline]
    pub fn a(&self) -> f32 {
        self.0[3]
    }
}

impl From<[f32; 3]> for Rgba {
    fn from(c: [f32; 3]) -> Self {
        Self::rgb(c[0], c[1], c[2])
    }
}
