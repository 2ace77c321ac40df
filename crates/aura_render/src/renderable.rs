//! Renderable geometry - bridges FrameScene to GPU buffers
//!
//! Surfaces are triangulated straight from their parameter grid. Lines have
//! no width on the GPU, so each polyline is swept into a thin tube whose
//! radius follows the requested line width.
//!
//! Opaque triangles come first in the index buffer and translucent ones
//! after, with `opaque_index_count` marking the split.

use aura_core::{FrameScene, Layer};
use aura_math::{Polyline, Rgba, Surface, Vec3};

use crate::axes_box::AxesBox;
use crate::pipeline::Vertex3D;

/// Alpha at or above which a layer is drawn in the opaque pass
const OPAQUE_ALPHA: f32 = 0.999;

/// Controls how scene layers become triangles
#[derive(Clone, Debug, PartialEq)]
pub struct TessellationOptions {
    /// Tube radius in box units for each point of line width
    pub line_radius_per_point: f32,
    /// Vertices around each tube ring
    pub tube_sides: usize,
    /// Line width of the axes box edges, in points
    pub axes_edge_width: f32,
    pub axes_color: Rgba,
}

impl Default for TessellationOptions {
    fn default() -> Self {
        Self {
            line_radius_per_point: 0.003,
            tube_sides: 6,
            axes_edge_width: 0.8,
            axes_color: Rgba::rgb(0.5, 0.5, 0.5),
        }
    }
}

/// GPU-ready geometry for one frame
#[derive(Clone, Debug, Default)]
pub struct RenderableGeometry {
    pub vertices: Vec<Vertex3D>,
    pub indices: Vec<u32>,
    /// Indices before this offset belong to the opaque pass
    pub opaque_index_count: usize,
}

impl RenderableGeometry {
    /// Create an empty renderable geometry
    pub fn new() -> Self {
        Self::default()
    }

    /// Tessellate every layer of a frame, plus the axes box when visible
    pub fn from_scene(scene: &FrameScene, options: &TessellationOptions) -> Self {
        let axes_box = AxesBox::from_axes(&scene.axes);
        let mut opaque = MeshBuilder::default();
        let mut translucent = MeshBuilder::default();

        if scene.axes.is_visible() {
            let radius = options.axes_edge_width * options.line_radius_per_point;
            let color = options.axes_color.0;
            for (a, b) in AxesBox::edges() {
                opaque.add_tube(&[a, b], radius, options.tube_sides, color);
            }
        }

        for layer in &scene.layers {
            let color = layer.effective_color();
            let target = if color.a() >= OPAQUE_ALPHA { &mut opaque } else { &mut translucent };
            match layer {
                Layer::Surface { surface, .. } => {
                    target.add_surface(surface, &axes_box, color.0);
                }
                Layer::Line { line, width, .. } => {
                    let points = mapped_points(line, &axes_box);
                    let radius = width.max(0.0) * options.line_radius_per_point;
                    target.add_tube(&points, radius, options.tube_sides, color.0);
                }
            }
        }

        let mut result = Self {
            opaque_index_count: opaque.indices.len(),
            vertices: opaque.vertices,
            indices: opaque.indices,
        };
        let offset = result.vertices.len() as u32;
        result.vertices.extend(translucent.vertices);
        result.indices.extend(translucent.indices.into_iter().map(|i| i + offset));

        log::debug!(
            "Tessellated {} layers: {} vertices, {} triangles ({} opaque)",
            scene.layers.len(),
            result.vertex_count(),
            result.triangle_count(),
            result.opaque_index_count / 3,
        );
        result
    }

    /// Get the number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Clear all geometry
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        self.opaque_index_count = 0;
    }
}

fn mapped_points(line: &Polyline, axes_box: &AxesBox) -> Vec<Vec3> {
    line.points.iter().map(|p| axes_box.to_box(*p)).collect()
}

#[derive(Default)]
struct MeshBuilder {
    vertices: Vec<Vertex3D>,
    indices: Vec<u32>,
}

impl MeshBuilder {
    fn add_surface(&mut self, surface: &Surface, axes_box: &AxesBox, color: [f32; 4]) {
        if surface.rows < 2 || surface.cols < 2 {
            return;
        }

        let positions: Vec<Vec3> = surface.points.iter().map(|p| axes_box.to_box(*p)).collect();
        let triangles = surface.triangles();

        // Area-weighted vertex normals; zero where all adjacent cells are degenerate
        let mut normals = vec![Vec3::ZERO; positions.len()];
        for [a, b, c] in &triangles {
            let (pa, pb, pc) = (positions[*a as usize], positions[*b as usize], positions[*c as usize]);
            let face = (pb - pa).cross(pc - pa);
            for i in [a, b, c] {
                normals[*i as usize] += face;
            }
        }

        let base = self.vertices.len() as u32;
        self.vertices.extend(
            positions
                .iter()
                .zip(&normals)
                .map(|(p, n)| Vertex3D::new(p.to_array(), n.normalized().to_array(), color)),
        );
        self.indices
            .extend(triangles.iter().flat_map(|tri| tri.iter().map(|i| i + base)));
    }

    fn add_tube(&mut self, points: &[Vec3], radius: f32, sides: usize, color: [f32; 4]) {
        if points.len() < 2 || sides < 3 {
            return;
        }

        let frames = tube_frames(points);
        let base = self.vertices.len() as u32;
        for (p, (normal, binormal)) in points.iter().zip(&frames) {
            for s in 0..sides {
                let angle = s as f32 / sides as f32 * std::f32::consts::TAU;
                let dir = *normal * angle.cos() + *binormal * angle.sin();
                self.vertices.push(Vertex3D::new((*p + dir * radius).to_array(), dir.to_array(), color));
            }
        }

        let sides = sides as u32;
        for ring in 0..(points.len() as u32 - 1) {
            let r0 = base + ring * sides;
            let r1 = r0 + sides;
            for s in 0..sides {
                let next = (s + 1) % sides;
                self.indices.extend_from_slice(&[r0 + s, r1 + s, r1 + next]);
                self.indices.extend_from_slice(&[r0 + s, r1 + next, r0 + next]);
            }
        }
    }
}

/// Parallel-transport frames along a polyline
///
/// Returns one `(normal, binormal)` pair per point, both perpendicular to the
/// local tangent. Repeated points reuse the previous tangent.
fn tube_frames(points: &[Vec3]) -> Vec<(Vec3, Vec3)> {
    let mut frames = Vec::with_capacity(points.len());
    let mut tangent = Vec3::Z;
    let mut normal = perpendicular_to(tangent);

    for i in 0..points.len() {
        let prev = points[i.saturating_sub(1)];
        let next = points[(i + 1).min(points.len() - 1)];
        let t = (next - prev).normalized();
        if t != Vec3::ZERO {
            tangent = t;
        }

        // Remove the tangent component, keeping the ring orientation continuous
        let projected = normal - tangent * normal.dot(tangent);
        normal = if projected.length_squared() > 1e-8 {
            projected.normalized()
        } else {
            perpendicular_to(tangent)
        };
        frames.push((normal, tangent.cross(normal)));
    }
    frames
}

/// Any unit vector perpendicular to `v` (a unit vector)
fn perpendicular_to(v: Vec3) -> Vec3 {
    let axis = if v.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
    v.cross(axis).normalized()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aura_core::AxesSpec;
    use aura_math::ParamGrid;

    const EPSILON: f32 = 1e-5;

    fn bare_axes() -> AxesSpec {
        AxesSpec::new((-1.0, 1.0), (-1.0, 1.0), (0.0, 1.0)).axis_off()
    }

    fn flat_surface(rows: usize, cols: usize) -> Surface {
        let r: Vec<f32> = (0..rows).map(|i| i as f32 / (rows - 1) as f32).collect();
        let c: Vec<f32> = (0..cols).map(|i| i as f32 / (cols - 1) as f32).collect();
        ParamGrid::new(r, c).map(|x, y| Vec3::new(x, y, 0.5))
    }

    #[test]
    fn test_empty_scene() {
        let geometry = RenderableGeometry::from_scene(&FrameScene::new(bare_axes()), &TessellationOptions::default());
        assert_eq!(geometry.vertex_count(), 0);
        assert_eq!(geometry.triangle_count(), 0);
    }

    #[test]
    fn test_axes_box_adds_edges() {
        let options = TessellationOptions::default();
        let scene = FrameScene::new(AxesSpec::new((-1.0, 1.0), (-1.0, 1.0), (0.0, 1.0)));
        let geometry = RenderableGeometry::from_scene(&scene, &options);
        // 12 two-point tubes
        assert_eq!(geometry.vertex_count(), 12 * 2 * options.tube_sides);
        assert_eq!(geometry.triangle_count(), 12 * 2 * options.tube_sides);
        assert_eq!(geometry.opaque_index_count, geometry.indices.len());
    }

    #[test]
    fn test_surface_triangulation_and_normals() {
        let mut scene = FrameScene::new(bare_axes());
        scene.add_surface(flat_surface(3, 4), Rgba::CYAN, 0.25);
        let geometry = RenderableGeometry::from_scene(&scene, &TessellationOptions::default());

        assert_eq!(geometry.vertex_count(), 12);
        assert_eq!(geometry.triangle_count(), 2 * 2 * 3);
        // Translucent, so nothing in the opaque pass
        assert_eq!(geometry.opaque_index_count, 0);
        for v in &geometry.vertices {
            // Flat sheet in z: normals along +-z
            assert!((v.normal[2].abs() - 1.0).abs() < EPSILON);
            assert!((v.color[3] - 0.25).abs() < EPSILON);
        }
    }

    #[test]
    fn test_degenerate_surface_still_emitted() {
        let mut scene = FrameScene::new(bare_axes());
        let collapsed = flat_surface(3, 3).map_points(|_| Vec3::ZERO);
        scene.add_surface(collapsed, Rgba::WHITE, 0.5);
        let geometry = RenderableGeometry::from_scene(&scene, &TessellationOptions::default());
        assert_eq!(geometry.vertex_count(), 9);
        assert!(geometry.vertices.iter().all(|v| v.normal == [0.0; 3]));
    }

    #[test]
    fn test_line_becomes_tube() {
        let options = TessellationOptions::default();
        let mut scene = FrameScene::new(bare_axes());
        let line: Polyline = (0..5).map(|i| Vec3::new(0.0, 0.0, i as f32 * 0.25)).collect();
        scene.add_line(line, Rgba::WHITE, 2.0, 1.0);
        let geometry = RenderableGeometry::from_scene(&scene, &options);

        assert_eq!(geometry.vertex_count(), 5 * options.tube_sides);
        assert_eq!(geometry.triangle_count(), 4 * 2 * options.tube_sides);
        assert_eq!(geometry.opaque_index_count, geometry.indices.len());

        // Every ring vertex sits at the tube radius from the axis
        let radius = 2.0 * options.line_radius_per_point;
        for v in &geometry.vertices {
            let r = (v.position[0].powi(2) + v.position[1].powi(2)).sqrt();
            assert!((r - radius).abs() < EPSILON);
        }
    }

    #[test]
    fn test_opaque_before_translucent() {
        let mut scene = FrameScene::new(bare_axes());
        scene.add_surface(flat_surface(2, 2), Rgba::CYAN, 0.3);
        let line: Polyline = vec![Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0)].into_iter().collect();
        scene.add_line(line, Rgba::WHITE, 1.0, 1.0);
        let geometry = RenderableGeometry::from_scene(&scene, &TessellationOptions::default());

        let split = geometry.opaque_index_count;
        assert!(split > 0 && split < geometry.indices.len());
        for &i in &geometry.indices[..split] {
            assert_eq!(geometry.vertices[i as usize].color[3], 1.0);
        }
        for &i in &geometry.indices[split..] {
            assert!(geometry.vertices[i as usize].color[3] < 1.0);
        }
    }

    #[test]
    fn test_short_lines_skipped() {
        let mut scene = FrameScene::new(bare_axes());
        scene.add_line(Polyline::new(vec![Vec3::ZERO]), Rgba::WHITE, 1.0, 1.0);
        let geometry = RenderableGeometry::from_scene(&scene, &TessellationOptions::default());
        assert_eq!(geometry.vertex_count(), 0);
    }

    #[test]
    fn test_tube_frames_are_orthonormal() {
        let points: Vec<Vec3> = (0..20)
            .map(|i| {
                let t = i as f32 * 0.3;
                Vec3::new(t.cos(), t.sin(), t * 0.1)
            })
            .collect();
        for (n, b) in tube_frames(&points) {
            assert!((n.length() - 1.0).abs() < 1e-4);
            assert!((b.length() - 1.0).abs() < 1e-4);
            assert!(n.dot(b).abs() < 1e-4);
        }
    }

    #[test]
    fn test_repeated_points_do_not_break_frames() {
        let points = vec![Vec3::ZERO, Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0)];
        let frames = tube_frames(&points);
        assert_eq!(frames.len(), 3);
        assert!(frames.iter().all(|(n, _)| (n.length() - 1.0).abs() < 1e-4));
    }
}
