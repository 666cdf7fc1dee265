use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length.
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }
}

/// World-space collision volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere { center: Vec3, radius: f32 },
    Aabb { min: Vec3, max: Vec3 },
}

impl Shape {
    pub fn sphere(center: Vec3, radius: f32) -> Self {
        Shape::Sphere { center, radius }
    }

    /// Axis-aligned box from its center and half extents.
    pub fn cuboid(center: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Shape::Aabb {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec3 {
        match *self {
            Shape::Sphere { center, .. } => center,
            Shape::Aabb { min, max } => (min + max) * 0.5,
        }
    }

    /// Distance along `ray` to the first surface crossing. A ray that starts
    /// inside the volume does not hit it.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        match *self {
            Shape::Sphere { center, radius } => {
                let oc = ray.origin - center;
                let c = oc.length_squared() - radius * radius;
                if c < 0.0 {
                    return None;
                }
                let b = oc.dot(ray.direction);
                let discriminant = b * b - c;
                if discriminant < 0.0 {
                    return None;
                }
                let t = -b - discriminant.sqrt();
                (t >= 0.0).then_some(t)
            }
            Shape::Aabb { min, max } => {
                let inv = ray.direction.recip();
                let t1 = (min - ray.origin) * inv;
                let t2 = (max - ray.origin) * inv;
                let t_near = t1.min(t2).max_element();
                let t_far = t1.max(t2).min_element();
                if t_near > t_far || t_far < 0.0 || t_near < 0.0 {
                    return None;
                }
                Some(t_near)
            }
        }
    }
}

/// Nearest intersection returned by [`nearest_hit`].
#[derive(Debug, Clone, PartialEq)]
pub struct RayHit<K> {
    pub key: K,
    pub distance: f32,
    pub point: Vec3,
}

/// Finds the closest shape crossed by `ray` within `max_distance`.
/// Ties keep the first candidate in iteration order.
pub fn nearest_hit<'a, K, I>(ray: &Ray, max_distance: f32, candidates: I) -> Option<RayHit<K>>
where
    I: IntoIterator<Item = (K, &'a Shape)>,
{
    let mut best: Option<(K, f32)> = None;

    for (key, shape) in candidates {
        let Some(distance) = shape.intersect(ray) else {
            continue;
        };
        if distance > max_distance {
            continue;
        }
        if best.as_ref().map_or(true, |(_, d)| distance < *d) {
            best = Some((key, distance));
        }
    }

    best.map(|(key, distance)| RayHit {
        key,
        distance,
        point: ray.at(distance),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forward_ray() -> Ray {
        Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z)
    }

    #[test]
    fn test_sphere_hit_distance() {
        let shape = Shape::sphere(Vec3::ZERO, 1.0);
        let t = shape.intersect(&forward_ray()).unwrap();
        assert!((t - 9.0).abs() < 1e-5);
    }

    #[test]
    fn test_sphere_miss() {
        let shape = Shape::sphere(Vec3::new(5.0, 0.0, 0.0), 1.0);
        assert!(shape.intersect(&forward_ray()).is_none());
    }

    #[test]
    fn test_behind_origin_is_ignored() {
        let shape = Shape::sphere(Vec3::new(0.0, 0.0, 20.0), 1.0);
        assert!(shape.intersect(&forward_ray()).is_none());
    }

    #[test]
    fn test_aabb_hit_distance() {
        let shape = Shape::cuboid(Vec3::ZERO, Vec3::splat(0.5));
        let t = shape.intersect(&forward_ray()).unwrap();
        assert!((t - 9.5).abs() < 1e-5);
    }

    #[test]
    fn test_aabb_origin_inside() {
        let shape = Shape::cuboid(Vec3::new(0.0, 0.0, 10.0), Vec3::ONE);
        assert!(shape.intersect(&forward_ray()).is_none());
    }

    #[test]
    fn test_nearest_hit_prefers_closest() {
        let far = Shape::sphere(Vec3::new(0.0, 0.0, -5.0), 1.0);
        let near = Shape::sphere(Vec3::ZERO, 1.0);
        let hit = nearest_hit(&forward_ray(), f32::INFINITY, [("far", &far), ("near", &near)])
            .unwrap();

        assert_eq!(hit.key, "near");
        assert!((hit.point - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn test_nearest_hit_respects_max_distance() {
        let shape = Shape::sphere(Vec3::ZERO, 1.0);
        assert!(nearest_hit(&forward_ray(), 5.0, [(0u32, &shape)]).is_none());
    }
}
