//! Frame scene description
//!
//! A [`FrameScene`] is everything one animation frame draws. It is rebuilt
//! from scratch on every tick, so nothing here carries state between frames.

use aura_math::{Polyline, Rgba, Surface};
use bitflags::bitflags;

bitflags! {
    /// Display flags for the 3D axes
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct AxesFlags: u8 {
        /// Draw the 12 edges of the axes box (no ticks or labels)
        const VISIBLE = 1 << 0;
        /// Black figure background instead of white
        const DARK = 1 << 1;
    }
}

impl Default for AxesFlags {
    fn default() -> Self {
        AxesFlags::VISIBLE
    }
}

/// Camera view angles in degrees
///
/// Elevation is measured up from the xy plane, azimuth counter-clockwise
/// around z from the +x axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewAngles {
    pub elevation_deg: f32,
    pub azimuth_deg: f32,
}

impl ViewAngles {
    pub fn new(elevation_deg: f32, azimuth_deg: f32) -> Self {
        Self { elevation_deg, azimuth_deg }
    }
}

impl Default for ViewAngles {
    fn default() -> Self {
        Self::new(30.0, -60.0)
    }
}

/// Axes setup for one frame
#[derive(Clone, Debug, PartialEq)]
pub struct AxesSpec {
    pub xlim: (f32, f32),
    pub ylim: (f32, f32),
    pub zlim: (f32, f32),
    pub title: String,
    pub title_color: Rgba,
    pub flags: AxesFlags,
    /// Requested camera view; `None` keeps the default view
    pub view: Option<ViewAngles>,
}

impl AxesSpec {
    /// Create axes with the given limits, an empty title and default flags
    pub fn new(xlim: (f32, f32), ylim: (f32, f32), zlim: (f32, f32)) -> Self {
        Self {
            xlim,
            ylim,
            zlim,
            title: String::new(),
            title_color: Rgba::BLACK,
            flags: AxesFlags::default(),
            view: None,
        }
    }

    /// Set the title and its color
    pub fn with_title(mut self, title: impl Into<String>, color: Rgba) -> Self {
        self.title = title.into();
        self.title_color = color;
        self
    }

    /// Hide the axes box
    pub fn axis_off(mut self) -> Self {
        self.flags.remove(AxesFlags::VISIBLE);
        self
    }

    /// Use a black background
    pub fn dark(mut self) -> Self {
        self.flags.insert(AxesFlags::DARK);
        self
    }

    /// Request a camera view
    pub fn with_view(mut self, view: ViewAngles) -> Self {
        self.view = Some(view);
        self
    }

    /// Whether the axes box is drawn
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.flags.contains(AxesFlags::VISIBLE)
    }
}

/// One drawable item
#[derive(Clone, Debug, PartialEq)]
pub enum Layer {
    /// A translucent surface
    Surface {
        surface: Surface,
        color: Rgba,
        alpha: f32,
    },
    /// A polyline with a width in points
    Line {
        line: Polyline,
        color: Rgba,
        width: f32,
        alpha: f32,
    },
}

impl Layer {
    /// Color with the layer alpha applied
    pub fn effective_color(&self) -> Rgba {
        match self {
            Layer::Surface { color, alpha, .. } | Layer::Line { color, alpha, .. } => {
                color.with_alpha(color.a() * alpha)
            }
        }
    }

    /// Number of sampled points in the layer
    pub fn point_count(&self) -> usize {
        match self {
            Layer::Surface { surface, .. } => surface.points.len(),
            Layer::Line { line, .. } => line.points.len(),
        }
    }
}

/// Everything drawn in one frame
#[derive(Clone, Debug, PartialEq)]
pub struct FrameScene {
    pub axes: AxesSpec,
    pub layers: Vec<Layer>,
}

impl FrameScene {
    /// Create an empty scene on the given axes
    pub fn new(axes: AxesSpec) -> Self {
        Self {
            axes,
            layers: Vec::new(),
        }
    }

    /// Add a surface layer
    pub fn add_surface(&mut self, surface: Surface, color: Rgba, alpha: f32) -> &mut Self {
        self.layers.push(Layer::Surface { surface, color, alpha });
        self
    }

    /// Add a line layer
    pub fn add_line(&mut self, line: Polyline, color: Rgba, width: f32, alpha: f32) -> &mut Self {
        self.layers.push(Layer::Line { line, color, width, alpha });
        self
    }

    /// Iterate over surface layers
    pub fn surfaces(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter().filter(|l| matches!(l, Layer::Surface { .. }))
    }

    /// Iterate over line layers
    pub fn lines(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter().filter(|l| matches!(l, Layer::Line { .. }))
    }

    pub fn surface_count(&self) -> usize {
        self.surfaces().count()
    }

    pub fn line_count(&self) -> usize {
        self.lines().count()
    }

    /// Total sampled points across all layers
    pub fn point_count(&self) -> usize {
        self.layers.iter().map(Layer::point_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aura_math::{primitives, Vec3};

    fn axes() -> AxesSpec {
        AxesSpec::new((-1.0, 1.0), (-1.0, 1.0), (0.0, 2.0))
    }

    #[test]
    fn test_default_flags_visible_light() {
        let a = axes();
        assert!(a.is_visible());
        assert!(!a.flags.contains(AxesFlags::DARK));
        assert!(a.view.is_none());
    }

    #[test]
    fn test_axis_off_and_dark() {
        let a = axes().axis_off().dark();
        assert!(!a.is_visible());
        assert!(a.flags.contains(AxesFlags::DARK));
    }

    #[test]
    fn test_scene_counts() {
        let mut scene = FrameScene::new(axes());
        scene
            .add_surface(primitives::sphere(1.0, Vec3::ZERO, 5), Rgba::CYAN, 0.25)
            .add_line(primitives::ring(1.0, 0.0, 8), Rgba::WHITE, 2.0, 1.0);
        assert_eq!(scene.surface_count(), 1);
        assert_eq!(scene.line_count(), 1);
        assert_eq!(scene.point_count(), 25 + 8);
    }

    #[test]
    fn test_effective_color_multiplies_alpha() {
        let layer = Layer::Surface {
            surface: primitives::sphere(1.0, Vec3::ZERO, 3),
            color: Rgba::rgb(0.5, 0.3, 0.5),
            alpha: 0.25,
        };
        assert_eq!(layer.effective_color().0, [0.5, 0.3, 0.5, 0.25]);
    }
}
