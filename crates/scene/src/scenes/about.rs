use std::f64::consts::PI;

use crate::{Camera, Material, Motion, Node, Scene, Shape};

/// A figure on a plinth, lit by a spotlight circling overhead.
pub fn about() -> Scene {
    Scene::new("about", Camera::new([7.0, 4.0, 1.0], 40.0).looking_at([0.0, 1.0, 0.0]))
        .period(3.0 * PI)
        .node(
            Node::mesh(
                "spotlight",
                Shape::Glow { radius: 1.2 },
                Material::solid("#4ade80").opacity(0.35),
            )
            .at([0.0, 5.0, 0.0])
            .with_motion(Motion::Orbit {
                radius: 2.5,
                rate: 1.0 / 1.5,
                phase: 0.0,
            }),
        )
        .node(
            Node::mesh(
                "ground",
                Shape::Grid {
                    size: 10.0,
                    divisions: 10,
                },
                Material::wireframe("#1a3a2e").opacity(0.5),
            )
            .at([0.0, -1.0, 0.0]),
        )
        .node(
            Node::mesh(
                "plinth",
                Shape::Cone {
                    radius: 1.0,
                    height: 0.8,
                },
                Material::solid("#2d4a3e"),
            )
            .at([0.0, -0.6, 0.0]),
        )
        .node(
            Node::mesh(
                "figure",
                Shape::Icosahedron { radius: 0.9 },
                Material::solid("#e8f0f0").opacity(0.9),
            )
            .at([0.0, 1.0, 0.0]),
        )
}
