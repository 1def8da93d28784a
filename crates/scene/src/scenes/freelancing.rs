use std::f64::consts::TAU;

use super::LOOP;
use crate::{Camera, Channel, Material, Motion, Node, Scene, Shape};

const ORBITERS: usize = 8;

/// Torus knot ringed by eight small octahedra, bobbing as one.
pub fn freelancing() -> Scene {
    let orbiters = (0..ORBITERS).map(|i| {
        let angle = i as f64 * TAU / ORBITERS as f64;
        let colour = if i % 2 == 0 { "#4ade80" } else { "#f97316" };

        Node::mesh(
            format!("orbiter-{i}"),
            Shape::Octahedron { radius: 0.1 },
            Material::solid(colour),
        )
        .at([
            angle.cos() * 2.5,
            angle.sin() * 2.5,
            (i as f64 * 0.8).sin() * 0.5,
        ])
    });

    Scene::new("freelancing", Camera::new([0.0, 0.0, 6.0], 50.0))
        .period(LOOP)
        .node(
            Node::group("cluster")
                .with_motion(Motion::sway(Channel::PositionY, 0.2, 1.0))
                .child(
                    Node::mesh(
                        "knot",
                        Shape::TorusKnot {
                            radius: 1.0,
                            tube: 0.3,
                        },
                        Material::wireframe("#4ade80").opacity(0.8),
                    )
                    .with_motion(Motion::spin(0.3, 0.4, 0.0)),
                )
                .children(orbiters),
        )
}
