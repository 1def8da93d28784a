//! Pure motion primitives.
//!
//! Every motion maps elapsed seconds to an offset that is added to a node's
//! resting position and rotation. Nothing here keeps state between frames.

use crate::Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    RotationX,
    RotationY,
    RotationZ,
    PositionX,
    PositionY,
    PositionZ,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Constant angular velocity, radians per second on each axis.
    Spin { rate: Vec3 },
    /// `amplitude * sin(frequency * t + phase)` on a single channel.
    Sway {
        channel: Channel,
        amplitude: f64,
        frequency: f64,
        phase: f64,
    },
    /// Gentle bob and tilt around the resting pose.
    Float {
        speed: f64,
        rotation_intensity: f64,
        float_intensity: f64,
        offset: f64,
    },
    /// Circle of `radius` in the XZ plane.
    Orbit { radius: f64, rate: f64, phase: f64 },
    /// Vertical jitter: `amplitude * (cos(phase) - cos(t + phase))`.
    Drift { amplitude: f64, phase: f64 },
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Offset {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Offset {
    fn position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    fn rotation(rotation: Vec3) -> Self {
        Self {
            rotation,
            ..Default::default()
        }
    }
}

impl std::ops::Add for Offset {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            position: self.position + rhs.position,
            rotation: self.rotation + rhs.rotation,
        }
    }
}

impl Motion {
    pub const fn spin(x: f64, y: f64, z: f64) -> Self {
        Self::Spin {
            rate: Vec3::new(x, y, z),
        }
    }

    pub const fn sway(channel: Channel, amplitude: f64, frequency: f64) -> Self {
        Self::Sway {
            channel,
            amplitude,
            frequency,
            phase: 0.0,
        }
    }

    pub const fn float(speed: f64, rotation_intensity: f64, float_intensity: f64) -> Self {
        Self::Float {
            speed,
            rotation_intensity,
            float_intensity,
            offset: 0.0,
        }
    }

    pub fn offset(&self, t: f64) -> Offset {
        match *self {
            Motion::Spin { rate } => Offset::rotation(rate * t),
            Motion::Sway {
                channel,
                amplitude,
                frequency,
                phase,
            } => {
                let value = amplitude * (frequency * t + phase).sin();
                match channel {
                    Channel::RotationX => Offset::rotation(Vec3::new(value, 0.0, 0.0)),
                    Channel::RotationY => Offset::rotation(Vec3::new(0.0, value, 0.0)),
                    Channel::RotationZ => Offset::rotation(Vec3::new(0.0, 0.0, value)),
                    Channel::PositionX => Offset::position(Vec3::new(value, 0.0, 0.0)),
                    Channel::PositionY => Offset::position(Vec3::new(0.0, value, 0.0)),
                    Channel::PositionZ => Offset::position(Vec3::new(0.0, 0.0, value)),
                }
            }
            Motion::Float {
                speed,
                rotation_intensity,
                float_intensity,
                offset,
            } => {
                let t = (t + offset) / 4.0 * speed;
                Offset {
                    position: Vec3::new(0.0, t.sin() / 10.0 * float_intensity, 0.0),
                    rotation: Vec3::new(
                        t.cos() / 8.0 * rotation_intensity,
                        t.sin() / 8.0 * rotation_intensity,
                        t.sin() / 20.0 * rotation_intensity,
                    ),
                }
            }
            Motion::Orbit {
                radius,
                rate,
                phase,
            } => {
                let angle = rate * t + phase;
                Offset::position(Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius))
            }
            Motion::Drift { amplitude, phase } => Offset::position(Vec3::new(
                0.0,
                amplitude * (phase.cos() - (t + phase).cos()),
                0.0,
            )),
        }
    }
}

/// Sum of every motion's offset at `t`.
pub fn combined(motions: &[Motion], t: f64) -> Offset {
    motions
        .iter()
        .fold(Offset::default(), |acc, motion| acc + motion.offset(t))
}
