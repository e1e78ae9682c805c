//! Pointer picking via ray-sphere intersection.
//!
//! Casts a ray from the camera through a normalized pointer coordinate and
//! intersects it against figure bounding spheres. The nearest hit along
//! the ray wins. All math runs on the CPU; the candidate set is small (at
//! most the 16 grid figures).

use glam::{Vec2, Vec3, Vec4};

use crate::camera::Camera;

/// One pickable figure, described by its bounding sphere.
#[derive(Debug, Clone, Copy)]
pub struct PickCandidate<'a> {
    /// Stable figure name, carried through to the hit.
    pub name: &'a str,
    /// Bounding-sphere center (the figure's world position).
    pub center: Vec3,
    /// Bounding-sphere radius.
    pub radius: f32,
}

/// The nearest figure a pointer ray intersected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit<'a> {
    /// Stable name of the hit figure.
    pub name: &'a str,
    /// The figure's world position (sphere center, not the ray point).
    pub position: Vec3,
    /// Ray parameter at sphere entry, in world units from the ray origin.
    pub t: f32,
}

/// Convert a pointer position in physical pixels to normalized device
/// coordinates: x, y in [-1, 1] with y up.
#[must_use]
pub fn screen_to_ndc(pixel: Vec2, viewport: (u32, u32)) -> Vec2 {
    let (width, height) = viewport;
    Vec2::new(
        (2.0 * pixel.x / width.max(1) as f32) - 1.0,
        1.0 - (2.0 * pixel.y / height.max(1) as f32),
    )
}

/// World-space ray through an NDC point: unprojects the point on the near
/// and far planes with the inverse view-projection matrix.
#[must_use]
pub fn pointer_ray(ndc: Vec2, camera: &Camera) -> (Vec3, Vec3) {
    let inv_view_proj = camera.build_matrix().inverse();

    // wgpu clip space: z in [0, 1]
    let near = inv_view_proj * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
    let far = inv_view_proj * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);

    let origin = near.truncate() / near.w;
    let through = far.truncate() / far.w;

    (origin, (through - origin).normalize())
}

/// Ray parameter where the ray enters the sphere, if it does and the
/// entry point is in front of the origin.
#[must_use]
pub fn ray_sphere_intersect(
    origin: Vec3,
    dir: Vec3,
    center: Vec3,
    radius: f32,
) -> Option<f32> {
    let oc = origin - center;
    let b = oc.dot(dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Cast a ray through `ndc` and return the nearest intersected candidate.
#[must_use]
pub fn pick<'a>(
    ndc: Vec2,
    camera: &Camera,
    candidates: &[PickCandidate<'a>],
) -> Option<PickHit<'a>> {
    let (origin, dir) = pointer_ray(ndc, camera);

    let mut closest: Option<PickHit<'a>> = None;
    for candidate in candidates {
        let Some(t) =
            ray_sphere_intersect(origin, dir, candidate.center, candidate.radius)
        else {
            continue;
        };
        if closest.as_ref().is_none_or(|hit| t < hit.t) {
            closest = Some(PickHit {
                name: candidate.name,
                position: candidate.center,
                t,
            });
        }
    }
    closest
}

/// Project a world position to NDC with the given camera.
///
/// Returns `None` when the point is behind the eye.
#[must_use]
pub fn project_to_ndc(world: Vec3, camera: &Camera) -> Option<Vec2> {
    let clip = camera.build_matrix() * world.extend(1.0);
    if clip.w <= 0.0 {
        return None;
    }
    Some(Vec2::new(clip.x / clip.w, clip.y / clip.w))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn front_camera() -> Camera {
        Camera::looking_at_origin(Vec3::new(0.0, 0.0, 10.0), Vec3::Y, 1.0)
    }

    #[test]
    fn test_screen_to_ndc_maps_corners_and_center() {
        let viewport = (800, 600);
        assert_eq!(
            screen_to_ndc(Vec2::new(0.0, 0.0), viewport),
            Vec2::new(-1.0, 1.0)
        );
        assert_eq!(
            screen_to_ndc(Vec2::new(800.0, 600.0), viewport),
            Vec2::new(1.0, -1.0)
        );
        assert_eq!(
            screen_to_ndc(Vec2::new(400.0, 300.0), viewport),
            Vec2::ZERO
        );
    }

    #[test]
    fn test_center_ray_points_at_the_origin() {
        let (origin, dir) = pointer_ray(Vec2::ZERO, &front_camera());
        // The ray starts on the near plane in front of the eye and heads
        // down -Z toward the origin.
        assert!(origin.z < 10.0);
        assert!((dir - Vec3::NEG_Z).length() < 1e-4);
    }

    #[test]
    fn test_ray_hits_sphere_at_origin() {
        let camera = front_camera();
        let candidates = [PickCandidate {
            name: "figure",
            center: Vec3::ZERO,
            radius: 1.0,
        }];
        let hit = pick(Vec2::ZERO, &camera, &candidates);
        assert!(
            matches!(hit, Some(h) if h.name == "figure" && h.position == Vec3::ZERO)
        );
    }

    #[test]
    fn test_nearest_candidate_wins() {
        let camera = front_camera();
        let candidates = [
            PickCandidate {
                name: "far",
                center: Vec3::new(0.0, 0.0, -5.0),
                radius: 1.0,
            },
            PickCandidate {
                name: "near",
                center: Vec3::new(0.0, 0.0, 2.0),
                radius: 1.0,
            },
        ];
        let hit = pick(Vec2::ZERO, &camera, &candidates);
        assert!(matches!(hit, Some(h) if h.name == "near"));
    }

    #[test]
    fn test_off_axis_pointer_misses_everything() {
        let camera = front_camera();
        let candidates = [PickCandidate {
            name: "figure",
            center: Vec3::ZERO,
            radius: 0.5,
        }];
        assert!(pick(Vec2::new(0.9, 0.9), &camera, &candidates).is_none());
        assert!(pick(Vec2::ZERO, &camera, &[]).is_none());
    }

    #[test]
    fn test_projected_center_picks_the_projected_sphere() {
        // Project a known sphere center to NDC, then pick through that
        // exact coordinate: the ray must come back to the same sphere.
        let camera = Camera::looking_at_origin(
            Vec3::new(0.0, 10.0, 0.0),
            Vec3::new(0.0, 0.0, -1.0),
            1.6,
        );
        let center = Vec3::new(-2.0, 0.0, -2.0);
        let candidates = [
            PickCandidate {
                name: "target",
                center,
                radius: 0.7,
            },
            PickCandidate {
                name: "decoy",
                center: Vec3::new(2.0, 0.0, 2.0),
                radius: 0.7,
            },
        ];

        let ndc = project_to_ndc(center, &camera);
        assert!(ndc.is_some());
        let hit = ndc.and_then(|ndc| pick(ndc, &camera, &candidates));
        assert!(matches!(hit, Some(h) if h.name == "target"));
    }

    #[test]
    fn test_sphere_behind_the_eye_is_ignored() {
        let camera = front_camera();
        let candidates = [PickCandidate {
            name: "behind",
            center: Vec3::new(0.0, 0.0, 20.0),
            radius: 1.0,
        }];
        assert!(pick(Vec2::ZERO, &camera, &candidates).is_none());
    }
}
