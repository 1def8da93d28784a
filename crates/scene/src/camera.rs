use crate::Vec3;

const NEAR: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view, degrees.
    pub fov: f64,
}

impl Camera {
    pub fn new(position: impl Into<Vec3>, fov: f64) -> Self {
        Self {
            position: position.into(),
            target: Vec3::ZERO,
            fov,
        }
    }

    pub fn looking_at(mut self, target: impl Into<Vec3>) -> Self {
        self.target = target.into();
        self
    }

    /// Perspective projection onto a `width` x `height` viewport.
    ///
    /// Returns `None` for points at or behind the near plane.
    pub fn project(&self, point: Vec3, width: f64, height: f64) -> Option<Projected> {
        let forward = (self.target - self.position).normalize();
        let mut right = forward.cross(Vec3::UP).normalize();
        if right.length() == 0.0 {
            right = Vec3::new(1.0, 0.0, 0.0);
        }
        let up = right.cross(forward);

        let relative = point - self.position;
        let depth = relative.dot(forward);
        if depth <= NEAR {
            return None;
        }

        let focal = 1.0 / (self.fov.to_radians() / 2.0).tan();
        let aspect = width / height;
        let ndc_x = relative.dot(right) * focal / (depth * aspect);
        let ndc_y = relative.dot(up) * focal / depth;

        Some(Projected {
            x: (ndc_x + 1.0) / 2.0 * width,
            y: (1.0 - ndc_y) / 2.0 * height,
            depth,
            scale: focal / depth * height / 2.0,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
    /// Pixels per world unit at this depth.
    pub scale: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fog {
    pub colour: String,
    pub near: f64,
    pub far: f64,
}

impl Fog {
    /// Linear fog: fully visible before `near`, gone after `far`.
    pub fn visibility(&self, depth: f64) -> f64 {
        if self.far <= self.near {
            return 1.0;
        }

        (1.0 - (depth - self.near) / (self.far - self.near)).clamp(0.0, 1.0)
    }
}
