use std::f64::consts::TAU;

use super::LOOP;
use crate::{Camera, Material, Motion, Node, Scene, Shape};

const ORBITERS: usize = 6;

/// Slowly turning mandala: wireframe icosahedron with six orbiting spheres.
pub fn contact() -> Scene {
    let orbiters = (0..ORBITERS).map(|i| {
        let angle = i as f64 * TAU / ORBITERS as f64;
        let colour = if i % 2 == 0 { "#4ade80" } else { "#f97316" };

        Node::mesh(
            format!("orbiter-{i}"),
            Shape::Sphere { radius: 0.15 },
            Material::solid(colour),
        )
        .at([
            angle.cos() * 3.0,
            angle.sin() * 3.0,
            (i as f64 * 0.5).sin() * 0.5,
        ])
    });

    Scene::new("contact", Camera::new([0.0, 0.0, 8.0], 50.0))
        .period(LOOP)
        .node(
            Node::group("mandala")
                .with_motion(Motion::spin(0.0, 0.0, 0.1))
                .child(Node::mesh(
                    "core",
                    Shape::Icosahedron { radius: 1.5 },
                    Material::wireframe("#4ade80").opacity(0.6),
                ))
                .children(orbiters),
        )
}
