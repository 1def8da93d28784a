use super::LOOP;
use crate::{Camera, Material, Motion, Node, Scene, Shape};

/// Floating wireframe octahedron beside an experience entry.
pub fn experience_card(name: impl Into<String>, colour: &str) -> Scene {
    Scene::new(name, Camera::new([0.0, 0.0, 3.0], 75.0))
        .period(LOOP)
        .node(
            Node::mesh(
                "octahedron",
                Shape::Octahedron { radius: 1.0 },
                Material::wireframe(colour),
            )
            .with_motion(Motion::spin(0.3, 0.2, 0.0))
            .with_motion(Motion::float(2.0, 0.5, 1.0)),
        )
}

/// Spinning wireframe dodecahedron in a project card header.
pub fn project_card(name: impl Into<String>, colour: &str) -> Scene {
    Scene::new(name, Camera::new([0.0, 0.0, 3.0], 75.0))
        .period(LOOP)
        .node(
            Node::mesh(
                "dodecahedron",
                Shape::Dodecahedron { radius: 1.0 },
                Material::wireframe(colour),
            )
            .with_motion(Motion::spin(0.2, 0.3, 0.0)),
        )
}
