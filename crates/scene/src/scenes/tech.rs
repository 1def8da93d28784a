use rand::{Rng, SeedableRng, rngs::StdRng};

use super::LOOP;
use crate::{Camera, Channel, Material, Motion, Node, Scene, Shape, Vec3};

/// Name, colour and position of each node in the tech universe.
pub const TECH_STACK: [(&str, &str, [f64; 3]); 9] = [
    ("Next.js", "#ffffff", [-3.0, 2.5, 0.0]),
    ("React.js", "#61dafb", [0.0, 3.0, 0.0]),
    ("Three.js", "#4ade80", [3.0, 2.5, 0.0]),
    ("Python", "#3776ab", [-3.5, 0.5, 0.0]),
    ("Blender", "#f5792a", [0.0, 0.0, 0.0]),
    ("Kotlin", "#7f52ff", [3.5, 0.5, 0.0]),
    ("JavaScript", "#f7df1e", [-2.5, -2.0, 0.0]),
    ("TypeScript", "#3178c6", [0.0, -2.5, 0.0]),
    ("v0", "#ffffff", [2.5, -2.0, 0.0]),
];

/// Labelled tech nodes joined by a seeded random set of connection lines.
pub fn tech(seed: u64) -> Scene {
    let mut rng = StdRng::seed_from_u64(seed);

    let nodes = TECH_STACK.iter().map(|(name, colour, at)| {
        Node::mesh(
            format!("tech-{}", name.to_lowercase()),
            Shape::Sphere { radius: 0.35 },
            Material::solid(*colour),
        )
        .labelled(*name)
        .at(*at)
        .with_motion(Motion::spin(0.0, 0.5, 0.0))
        .with_motion(Motion::float(2.0, 0.3, 0.5))
    });

    let mut lines = Vec::new();
    for (i, (_, _, from)) in TECH_STACK.iter().enumerate() {
        for (j, (_, _, to)) in TECH_STACK.iter().enumerate().skip(i + 1) {
            if rng.random::<f64>() > 0.5 {
                let (from, to) = (Vec3::from(*from), Vec3::from(*to));
                lines.push(
                    Node::mesh(
                        format!("link-{i}-{j}"),
                        Shape::Line { to: to - from },
                        Material::wireframe("#4ade80").opacity(0.2),
                    )
                    .at(from),
                );
            }
        }
    }

    Scene::new("tech", Camera::new([0.0, 0.0, 8.0], 50.0))
        .period(LOOP)
        .node(
            Node::group("universe")
                .with_motion(Motion::sway(Channel::RotationY, 0.1, 0.1))
                .child(
                    Node::group("links")
                        .with_motion(Motion::sway(Channel::RotationZ, 0.05, 0.1))
                        .children(lines),
                )
                .children(nodes),
        )
}
