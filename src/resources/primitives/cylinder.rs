use std::f32::consts::PI;

use crate::resources::geometry::Geometry;

/// Options for a (possibly tapered) capped cylinder, Y-up, centered at the
/// local origin. Body segments use different top/bottom radii for taper.
pub struct CylinderOptions {
    pub radius_top: f32,
    pub radius_bottom: f32,
    pub height: f32,
    pub radial_segments: u32,
}

impl Default for CylinderOptions {
    fn default() -> Self {
        Self {
            radius_top: 1.0,
            radius_bottom: 1.0,
            height: 1.0,
            radial_segments: 16,
        }
    }
}

#[must_use]
pub fn create_cylinder(options: CylinderOptions) -> Geometry {
    let radial_segments = options.radial_segments.max(3);
    let half_height = options.height / 2.0;

    let mut geo = Geometry::new();

    // Side wall: two rings (bottom, top) with slope-corrected normals.
    let slope = (options.radius_bottom - options.radius_top) / options.height;

    for (ring, (py, radius)) in [
        (-half_height, options.radius_bottom),
        (half_height, options.radius_top),
    ]
    .into_iter()
    .enumerate()
    {
        for x in 0..=radial_segments {
            let u_ratio = x as f32 / radial_segments as f32;
            let phi = u_ratio * 2.0 * PI;
            let (sin, cos) = phi.sin_cos();

            geo.positions.push([radius * sin, py, radius * cos]);

            let n_len = (1.0 + slope * slope).sqrt();
            geo.normals.push([sin / n_len, slope / n_len, cos / n_len]);
            geo.uvs.push([u_ratio, ring as f32]);
        }
    }

    let stride = radial_segments + 1;
    for x in 0..radial_segments {
        let v0 = x;
        let v1 = x + 1;
        let v2 = stride + x;
        let v3 = stride + x + 1;

        geo.indices.push(v0 as u16);
        geo.indices.push(v2 as u16);
        geo.indices.push(v1 as u16);

        geo.indices.push(v1 as u16);
        geo.indices.push(v2 as u16);
        geo.indices.push(v3 as u16);
    }

    // Caps: a center vertex fanned to a rim ring.
    for (py, radius, ny) in [
        (half_height, options.radius_top, 1.0_f32),
        (-half_height, options.radius_bottom, -1.0),
    ] {
        if radius <= 0.0 {
            continue;
        }

        let center_index = geo.positions.len() as u16;
        geo.positions.push([0.0, py, 0.0]);
        geo.normals.push([0.0, ny, 0.0]);
        geo.uvs.push([0.5, 0.5]);

        let rim_start = geo.positions.len() as u16;
        for x in 0..=radial_segments {
            let phi = x as f32 / radial_segments as f32 * 2.0 * PI;
            let (sin, cos) = phi.sin_cos();
            geo.positions.push([radius * sin, py, radius * cos]);
            geo.normals.push([0.0, ny, 0.0]);
            geo.uvs.push([0.5 + sin * 0.5, 0.5 + cos * 0.5]);
        }

        for x in 0..radial_segments {
            let a = rim_start + x as u16;
            let b = rim_start + x as u16 + 1;
            if ny > 0.0 {
                geo.indices.extend_from_slice(&[center_index, a, b]);
            } else {
                geo.indices.extend_from_slice(&[center_index, b, a]);
            }
        }
    }

    geo
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cylinder_height_bounds() {
        let geo = create_cylinder(CylinderOptions {
            radius_top: 0.5,
            radius_bottom: 0.7,
            height: 2.0,
            radial_segments: 8,
        });
        for p in &geo.positions {
            assert!(p[1] >= -1.0 - 1e-6 && p[1] <= 1.0 + 1e-6);
        }
    }

    #[test]
    fn cylinder_taper_radii() {
        let geo = create_cylinder(CylinderOptions {
            radius_top: 0.2,
            radius_bottom: 0.4,
            height: 1.0,
            radial_segments: 12,
        });
        // Side-wall rim vertices at the top must sit on the top radius.
        let top_rim: Vec<_> = geo
            .positions
            .iter()
            .take(2 * 13) // side wall only
            .filter(|p| (p[1] - 0.5).abs() < 1e-6)
            .collect();
        assert!(!top_rim.is_empty());
        for p in top_rim {
            let r = (p[0] * p[0] + p[2] * p[2]).sqrt();
            assert!((r - 0.2).abs() < 1e-5, "top rim radius {r}");
        }
    }
}
