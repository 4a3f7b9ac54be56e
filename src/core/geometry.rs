use glam::Vec3;

/// CPU-side triangle mesh with interleavable attributes.
///
/// Positions, normals and uvs are parallel arrays; `indices` index into them
/// three at a time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub name: String,
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Replace normals with area-weighted face normals accumulated per vertex.
    pub fn compute_normals(&mut self) {
        let mut acc = vec![Vec3::ZERO; self.positions.len()];
        for tri in self.indices.chunks_exact(3) {
            let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let pa = Vec3::from(self.positions[a]);
            let pb = Vec3::from(self.positions[b]);
            let pc = Vec3::from(self.positions[c]);
            let n = (pb - pa).cross(pc - pa);
            acc[a] += n;
            acc[b] += n;
            acc[c] += n;
        }
        self.normals = acc
            .into_iter()
            .map(|n| n.try_normalize().unwrap_or(Vec3::Z).to_array())
            .collect();
    }
}

/// Flat annulus in the xy plane facing +z.
///
/// Uvs map the annulus into the unit square the same way a planar projection
/// of the outer radius would, so the fragment stage can recover distance from
/// either the uv or the interpolated radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingGeometry {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub segments: u32,
}

impl RingGeometry {
    pub fn new(inner_radius: f32, outer_radius: f32, segments: u32) -> Self {
        assert!(inner_radius > 0.0, "ring inner radius must be positive");
        assert!(
            outer_radius > inner_radius,
            "ring outer radius must exceed inner radius"
        );
        assert!(segments >= 3, "ring needs at least 3 segments");
        Self {
            inner_radius,
            outer_radius,
            segments,
        }
    }

    pub fn build(&self) -> MeshData {
        let n = self.segments;
        let mut mesh = MeshData {
            name: "ring".to_string(),
            ..Default::default()
        };
        for ring in 0..2 {
            let r = if ring == 0 {
                self.inner_radius
            } else {
                self.outer_radius
            };
            for s in 0..=n {
                let theta = s as f32 / n as f32 * std::f32::consts::TAU;
                let (sin, cos) = theta.sin_cos();
                let x = r * cos;
                let y = r * sin;
                mesh.positions.push([x, y, 0.0]);
                mesh.normals.push([0.0, 0.0, 1.0]);
                mesh.uvs.push([
                    (x / self.outer_radius + 1.0) * 0.5,
                    (y / self.outer_radius + 1.0) * 0.5,
                ]);
            }
        }
        let stride = n + 1;
        for s in 0..n {
            let a = s;
            let b = s + stride;
            let c = s + stride + 1;
            let d = s + 1;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
        mesh
    }
}

/// Filled disc in the xy plane facing +z, used by the radial aura style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiscGeometry {
    pub radius: f32,
    pub segments: u32,
}

impl DiscGeometry {
    pub fn new(radius: f32, segments: u32) -> Self {
        assert!(radius > 0.0, "disc radius must be positive");
        assert!(segments >= 3, "disc needs at least 3 segments");
        Self { radius, segments }
    }

    pub fn build(&self) -> MeshData {
        let n = self.segments;
        let mut mesh = MeshData {
            name: "disc".to_string(),
            ..Default::default()
        };
        mesh.positions.push([0.0, 0.0, 0.0]);
        mesh.normals.push([0.0, 0.0, 1.0]);
        mesh.uvs.push([0.5, 0.5]);
        for s in 0..=n {
            let theta = s as f32 / n as f32 * std::f32::consts::TAU;
            let (sin, cos) = theta.sin_cos();
            mesh.positions
                .push([self.radius * cos, self.radius * sin, 0.0]);
            mesh.normals.push([0.0, 0.0, 1.0]);
            mesh.uvs.push([(cos + 1.0) * 0.5, (sin + 1.0) * 0.5]);
        }
        for s in 1..=n {
            mesh.indices.extend_from_slice(&[0, s, s + 1]);
        }
        mesh
    }
}
