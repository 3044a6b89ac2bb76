use glam::{Mat4, Vec2, Vec3, Vec4};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Compute a world-space ray through a point of the viewport.
///
/// - `px`: position in CSS pixels relative to the viewport's top-left corner
/// - `size`: viewport size in CSS pixels
/// - `view_proj`: camera projection * view
/// - `eye`: camera position
pub fn screen_to_world_ray(px: Vec2, size: Vec2, view_proj: Mat4, eye: Vec3) -> Ray {
    let w = size.x.max(1.0);
    let h = size.y.max(1.0);
    let ndc_x = (2.0 * px.x / w) - 1.0;
    let ndc_y = 1.0 - (2.0 * px.y / h);
    let inv = view_proj.inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    Ray::new(eye, p1 - eye)
}

/// Project a world-space point to CSS pixels of a viewport of `size`.
/// `None` for points behind the camera.
pub fn world_to_screen(point: Vec3, size: Vec2, view_proj: Mat4) -> Option<Vec2> {
    let clip = view_proj * point.extend(1.0);
    if clip.w <= 1e-6 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    Some(Vec2::new(
        (ndc.x * 0.5 + 0.5) * size.x,
        (0.5 - ndc.y * 0.5) * size.y,
    ))
}

/// Slab test against the axis-aligned box `[-half, half]^3`.
/// Returns the entry distance along the ray, or the exit distance when the
/// origin is inside the box.
#[inline]
pub fn ray_centered_box(origin: Vec3, dir: Vec3, half: f32) -> Option<f32> {
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;
    for axis in 0..3 {
        let o = origin[axis];
        let d = dir[axis];
        if d.abs() < 1e-8 {
            if o < -half || o > half {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let mut t0 = (-half - o) * inv;
        let mut t1 = (half - o) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_min = t_min.max(t0);
        t_max = t_max.min(t1);
        if t_min > t_max {
            return None;
        }
    }
    if t_max < 0.0 {
        return None;
    }
    Some(if t_min >= 0.0 { t_min } else { t_max })
}

/// Intersect a ray with a cube of edge `size` placed by `model`
/// (rotation + translation, no scale). Distance is in world units.
pub fn ray_oriented_cube(ray: &Ray, model: Mat4, size: f32) -> Option<f32> {
    let inv = model.inverse();
    let o = inv.transform_point3(ray.origin);
    let d = inv.transform_vector3(ray.dir);
    ray_centered_box(o, d, size * 0.5)
}

/// Index of the closest hit among `models`, if any.
pub fn nearest_cube_hit<I>(ray: &Ray, models: I, size: f32) -> Option<usize>
where
    I: IntoIterator<Item = Option<Mat4>>,
{
    let mut best = None::<(usize, f32)>;
    for (i, model) in models.into_iter().enumerate() {
        let Some(model) = model else { continue };
        if let Some(t) = ray_oriented_cube(ray, model, size) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}
