//! Stylized human body built from spheres and cylinders, shrinking under damping
//!
//! Two damping laws are provided. [`DampedBody`] decays exponentially with
//! time; [`CinematicBody`] decays linearly over a fixed span while the camera
//! drifts, and adds chakra rings, organs, and a scatter of cells and atoms.

use aura_math::{linspace, primitives, Surface, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{
    Animation, AnimationError, AxesSpec, Controls, FrameScene, Rgba, Timing, ViewAngles,
};

/// A vertical cylinder segment of the body
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Limb {
    pub z_start: f32,
    pub z_end: f32,
    pub radius: f32,
    /// Horizontal offset of the limb axis; mirrored for paired limbs
    pub x_offset: f32,
}

/// Body parts in draw order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyPart {
    Head,
    Torso,
    RightArm,
    LeftArm,
    RightLeg,
    LeftLeg,
}

/// Undamped body dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyProportions {
    pub head_center_z: f32,
    pub head_radius: f32,
    pub torso: Limb,
    pub arm: Limb,
    pub leg: Limb,
    pub sphere_resolution: usize,
    pub cylinder_resolution: usize,
}

impl BodyProportions {
    /// Proportions used by the exponentially damped body
    pub fn sturdy() -> Self {
        Self {
            head_center_z: 1.75,
            head_radius: 0.25,
            torso: Limb { z_start: 0.8, z_end: 1.6, radius: 0.3, x_offset: 0.0 },
            arm: Limb { z_start: 1.2, z_end: 0.6, radius: 0.1, x_offset: 0.45 },
            leg: Limb { z_start: 0.8, z_end: 0.0, radius: 0.12, x_offset: 0.15 },
            sphere_resolution: 20,
            cylinder_resolution: 30,
        }
    }

    /// Slimmer proportions used by the cinematic body
    pub fn slender() -> Self {
        Self {
            head_center_z: 1.85,
            head_radius: 0.2,
            torso: Limb { z_start: 0.8, z_end: 1.6, radius: 0.25, x_offset: 0.0 },
            arm: Limb { z_start: 1.2, z_end: 0.8, radius: 0.08, x_offset: 0.35 },
            leg: Limb { z_start: 0.8, z_end: 0.0, radius: 0.1, x_offset: 0.12 },
            sphere_resolution: 20,
            cylinder_resolution: 20,
        }
    }

    /// Surface of one part with every radius scaled by `damping`
    pub fn part(&self, part: BodyPart, damping: f32) -> Surface {
        let limb = |l: &Limb, sign: f32| {
            primitives::cylinder(
                l.z_start,
                l.z_end,
                l.radius * damping,
                sign * l.x_offset,
                0.0,
                self.cylinder_resolution,
            )
        };
        match part {
            BodyPart::Head => primitives::sphere(
                self.head_radius * damping,
                Vec3::new(0.0, 0.0, self.head_center_z),
                self.sphere_resolution,
            ),
            BodyPart::Torso => limb(&self.torso, 1.0),
            BodyPart::RightArm => limb(&self.arm, 1.0),
            BodyPart::LeftArm => limb(&self.arm, -1.0),
            BodyPart::RightLeg => limb(&self.leg, 1.0),
            BodyPart::LeftLeg => limb(&self.leg, -1.0),
        }
    }
}

const ALL_PARTS: [BodyPart; 6] = [
    BodyPart::Head,
    BodyPart::Torso,
    BodyPart::RightArm,
    BodyPart::LeftArm,
    BodyPart::RightLeg,
    BodyPart::LeftLeg,
];

/// Body whose every radius decays as `exp(-S·t)`, `t = frame / 10`
pub struct DampedBody {
    sadness: f32,
    proportions: BodyProportions,
}

impl DampedBody {
    pub const DEFAULT_SADNESS: f32 = 0.85;
    pub const FRAMES: u32 = 120;
    pub const INTERVAL_MS: u64 = 60;

    pub fn new(sadness: f32) -> Result<Self, AnimationError> {
        Ok(Self {
            sadness: check_sadness(sadness)?,
            proportions: BodyProportions::sturdy(),
        })
    }

    /// Damping factor at `frame`
    pub fn damping(&self, frame: u32) -> f32 {
        let t = frame as f32 / 10.0;
        (-self.sadness * t).exp()
    }
}

impl Default for DampedBody {
    fn default() -> Self {
        Self {
            sadness: Self::DEFAULT_SADNESS,
            proportions: BodyProportions::sturdy(),
        }
    }
}

impl Animation for DampedBody {
    fn name(&self) -> &str {
        "Damped Body"
    }

    fn timing(&self) -> Timing {
        Timing::bounded(Self::INTERVAL_MS, Self::FRAMES)
    }

    fn frame(&self, frame: u32, _controls: &Controls) -> Result<FrameScene, AnimationError> {
        if frame >= Self::FRAMES {
            return Err(AnimationError::FrameOutOfRange { frame, len: Self::FRAMES });
        }
        let damping = self.damping(frame);

        let axes = AxesSpec::new((-1.0, 1.0), (-1.0, 1.0), (0.0, 2.0))
            .with_title("3D Human Body Under Sadness (System-Wide Damping)", Rgba::BLACK)
            .axis_off();
        let mut scene = FrameScene::new(axes);

        // Parts take successive colors from the default cycle
        for (i, part) in ALL_PARTS.iter().enumerate() {
            let alpha = if *part == BodyPart::Head { 0.7 } else { 0.6 };
            scene.add_surface(self.proportions.part(*part, damping), Rgba::cycle(i), alpha);
        }

        Ok(scene)
    }
}

/// Names of the cinematic body's layers, bottom to top
pub const LAYER_NAMES: [&str; 9] = [
    "Torso", "Head", "Arms", "Legs", "Chakras", "Brain", "Heart", "Cells", "Atoms",
];

/// Colors and scatter extents of a cinematic body
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CinematicStyle {
    pub title: &'static str,
    pub torso: Rgba,
    pub head: Rgba,
    pub arms: Rgba,
    pub legs: Rgba,
    pub brain: Rgba,
    pub heart: Rgba,
    pub cells: Rgba,
    pub atoms: Rgba,
    pub chakras: [Rgba; 7],
    /// Half-width of the cube cells are scattered in
    pub cell_spread: f32,
    /// Half-width of the cube atoms are scattered in
    pub atom_spread: f32,
    /// Draw the brain before the heart
    pub brain_first: bool,
}

fn named(name: &str) -> Rgba {
    Rgba::from_name(name).unwrap_or(Rgba::WHITE)
}

fn rainbow() -> [Rgba; 7] {
    ["red", "orange", "yellow", "green", "blue", "indigo", "violet"].map(named)
}

impl CinematicStyle {
    /// Gray body with named organ colors
    pub fn cinematic() -> Self {
        Self {
            title: "Extreme Deep Cinematic Sadness - Full Body 3D",
            torso: named("gray"),
            head: named("lightgray"),
            arms: named("gray"),
            legs: named("gray"),
            brain: named("blue"),
            heart: named("red"),
            cells: named("pink"),
            atoms: named("violet"),
            chakras: rainbow(),
            cell_spread: 0.3,
            atom_spread: 0.35,
            brain_first: false,
        }
    }

    /// Layered variant with explicit gray levels and a tighter scatter
    pub fn layered() -> Self {
        Self {
            title: "Extreme Cinematic Sadness - 3D Full Body",
            torso: Rgba::rgb(0.6, 0.6, 0.6),
            head: Rgba::rgb(0.7, 0.7, 0.7),
            arms: Rgba::rgb(0.5, 0.5, 0.5),
            legs: Rgba::rgb(0.5, 0.5, 0.5),
            brain: named("blue"),
            heart: named("red"),
            cells: named("pink"),
            atoms: named("violet"),
            chakras: rainbow(),
            cell_spread: 0.25,
            atom_spread: 0.3,
            brain_first: true,
        }
    }
}

/// Fixed random positions of cells and atoms
#[derive(Clone, Debug, PartialEq)]
pub struct Scatter {
    pub cells: Vec<Vec3>,
    pub atoms: Vec<Vec3>,
}

impl Scatter {
    pub const CELL_COUNT: usize = 30;
    pub const ATOM_COUNT: usize = 80;

    /// Draw positions uniformly inside cubes of the given half-widths
    pub fn generate(seed: u64, cell_spread: f32, atom_spread: f32) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut cube = |spread: f32, n: usize| -> Vec<Vec3> {
            (0..n)
                .map(|_| {
                    Vec3::new(
                        rng.gen_range(-spread..spread),
                        rng.gen_range(-spread..spread),
                        rng.gen_range(-spread..spread),
                    )
                })
                .collect()
        };
        let cells = cube(cell_spread, Self::CELL_COUNT);
        let atoms = cube(atom_spread, Self::ATOM_COUNT);
        Self { cells, atoms }
    }
}

/// Body fading linearly to `1 - S` over `T` seconds with a drifting camera
pub struct CinematicBody {
    sadness: f32,
    proportions: BodyProportions,
    style: CinematicStyle,
    scatter: Scatter,
    times: Vec<f32>,
    chakra_heights: Vec<f32>,
}

impl CinematicBody {
    pub const DEFAULT_SADNESS: f32 = 0.98;
    /// Total simulated time in seconds
    pub const DURATION: f32 = 15.0;
    pub const FRAMES: u32 = 400;
    pub const INTERVAL_MS: u64 = 60;
    const RING_SAMPLES: usize = 30;
    const CELL_RADIUS: f32 = 0.015;
    const ATOM_RADIUS: f32 = 0.005;

    pub fn new(sadness: f32, style: CinematicStyle, seed: u64) -> Result<Self, AnimationError> {
        let sadness = check_sadness(sadness)?;
        Ok(Self {
            sadness,
            proportions: BodyProportions::slender(),
            scatter: Scatter::generate(seed, style.cell_spread, style.atom_spread),
            style,
            times: linspace(0.0, Self::DURATION, Self::FRAMES as usize),
            chakra_heights: linspace(0.8, 1.7, 7),
        })
    }

    #[inline]
    pub fn style(&self) -> &CinematicStyle {
        &self.style
    }

    #[inline]
    pub fn scatter(&self) -> &Scatter {
        &self.scatter
    }

    /// Heights of the named layers, evenly spread over `[0.2, 1.8]`
    pub fn layer_heights() -> Vec<(&'static str, f32)> {
        LAYER_NAMES.iter().copied().zip(linspace(0.2, 1.8, LAYER_NAMES.len())).collect()
    }

    /// One line per layer, as logged when the layered body starts
    pub fn layer_summary() -> Vec<String> {
        Self::layer_heights()
            .into_iter()
            .map(|(name, z)| format!("{:<8} z={:.2}", name, z))
            .collect()
    }

    /// Simulated time at `frame`
    pub fn time(&self, frame: u32) -> Result<f32, AnimationError> {
        self.times
            .get(frame as usize)
            .copied()
            .ok_or(AnimationError::FrameOutOfRange { frame, len: Self::FRAMES })
    }

    /// Damping factor `1 - S·time/T`
    pub fn damping_at(&self, time: f32) -> f32 {
        1.0 - self.sadness * time / Self::DURATION
    }

    /// Camera drift: `elev = 30 + 10·sin(0.05·time)`, `azim = 50 + 30·cos(0.03·time)`
    pub fn view_at(time: f32) -> ViewAngles {
        ViewAngles::new(30.0 + 10.0 * (0.05 * time).sin(), 50.0 + 30.0 * (0.03 * time).cos())
    }
}

impl Animation for CinematicBody {
    fn name(&self) -> &str {
        self.style.title
    }

    fn timing(&self) -> Timing {
        Timing::bounded(Self::INTERVAL_MS, Self::FRAMES)
    }

    fn frame(&self, frame: u32, _controls: &Controls) -> Result<FrameScene, AnimationError> {
        let time = self.time(frame)?;
        let d = self.damping_at(time);
        let style = &self.style;
        let body = &self.proportions;

        let axes = AxesSpec::new((-0.6, 0.6), (-0.6, 0.6), (0.0, 2.2))
            .with_title(style.title, Rgba::WHITE)
            .with_view(Self::view_at(time))
            .axis_off()
            .dark();
        let mut scene = FrameScene::new(axes);

        scene.add_surface(body.part(BodyPart::Torso, d), style.torso, 0.6 * d);
        scene.add_surface(body.part(BodyPart::Head, d), style.head, 0.7 * d);
        scene.add_surface(body.part(BodyPart::RightArm, d), style.arms, 0.6 * d);
        scene.add_surface(body.part(BodyPart::LeftArm, d), style.arms, 0.6 * d);
        scene.add_surface(body.part(BodyPart::RightLeg, d), style.legs, 0.6 * d);
        scene.add_surface(body.part(BodyPart::LeftLeg, d), style.legs, 0.6 * d);

        for (z, color) in self.chakra_heights.iter().zip(style.chakras) {
            scene.add_line(primitives::ring(0.12 * d, *z, Self::RING_SAMPLES), color, 3.0, d);
        }

        let n = body.sphere_resolution;
        let heart = primitives::sphere(0.06 * d, Vec3::new(0.0, 0.0, 1.6), n);
        let brain = primitives::sphere(0.08 * d, Vec3::new(0.0, 0.0, 1.85), n);
        // Translucent layers blend in draw order
        if style.brain_first {
            scene.add_surface(brain, style.brain, d);
            scene.add_surface(heart, style.heart, d);
        } else {
            scene.add_surface(heart, style.heart, d);
            scene.add_surface(brain, style.brain, d);
        }

        for pos in &self.scatter.cells {
            scene.add_surface(primitives::sphere(Self::CELL_RADIUS * d, *pos, n), style.cells, d);
        }
        for pos in &self.scatter.atoms {
            scene.add_surface(primitives::sphere(Self::ATOM_RADIUS * d, *pos, n), style.atoms, d);
        }

        Ok(scene)
    }
}

fn check_sadness(sadness: f32) -> Result<f32, AnimationError> {
    if sadness.is_finite() && (0.0..=1.0).contains(&sadness) {
        Ok(sadness)
    } else {
        Err(AnimationError::InvalidParameter(format!(
            "sadness must lie in [0, 1], got {}",
            sadness
        )))
    }
}
