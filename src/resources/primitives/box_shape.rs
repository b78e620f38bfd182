use crate::resources::geometry::Geometry;

/// Axis-aligned box centered at the local origin. 24 vertices, 4 per face.
#[must_use]
pub fn create_box(width: f32, height: f32, depth: f32) -> Geometry {
    let w = width / 2.0;
    let h = height / 2.0;
    let d = depth / 2.0;

    let positions: [[f32; 3]; 24] = [
        // Front face (+Z)
        [-w, -h, d],
        [w, -h, d],
        [w, h, d],
        [-w, h, d],
        // Back face (-Z)
        [-w, -h, -d],
        [-w, h, -d],
        [w, h, -d],
        [w, -h, -d],
        // Top face (+Y)
        [-w, h, -d],
        [-w, h, d],
        [w, h, d],
        [w, h, -d],
        // Bottom face (-Y)
        [-w, -h, -d],
        [w, -h, -d],
        [w, -h, d],
        [-w, -h, d],
        // Right face (+X)
        [w, -h, -d],
        [w, h, -d],
        [w, h, d],
        [w, -h, d],
        // Left face (-X)
        [-w, -h, -d],
        [-w, -h, d],
        [-w, h, d],
        [-w, h, -d],
    ];

    let face_normals: [[f32; 3]; 6] = [
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
        [1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0],
    ];

    let mut geo = Geometry::new();
    geo.positions.extend_from_slice(&positions);

    for normal in &face_normals {
        for _ in 0..4 {
            geo.normals.push(*normal);
            geo.uvs.push([0.0, 0.0]);
        }
    }

    // Two triangles per face.
    for face in 0..6u16 {
        let base = face * 4;
        geo.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    geo
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_counts() {
        let geo = create_box(1.0, 2.0, 3.0);
        assert_eq!(geo.vertex_count(), 24);
        assert_eq!(geo.triangle_count(), 12);
    }

    #[test]
    fn box_extents() {
        let geo = create_box(2.0, 4.0, 6.0);
        for p in &geo.positions {
            assert!(p[0].abs() <= 1.0 + 1e-6);
            assert!(p[1].abs() <= 2.0 + 1e-6);
            assert!(p[2].abs() <= 3.0 + 1e-6);
        }
    }
}
