use rand::{Rng, SeedableRng, rngs::StdRng};

use super::LOOP;
use crate::{Camera, Channel, Material, Motion, Node, Scene, Shape, Vec3};

const FIREFLIES: usize = 100;
const STARS: usize = 3000;
const STAR_RADIUS: f64 = 100.0;
const STAR_DEPTH: f64 = 50.0;

/// Mountain valley with pines, floating tech orbs, fireflies and a star field.
pub fn hero(seed: u64) -> Scene {
    let mut rng = StdRng::seed_from_u64(seed);

    Scene::new("hero", Camera::new([0.0, 1.0, 10.0], 60.0).looking_at([0.0, 1.0, 0.0]))
        .fog("#0a1510", 8.0, 30.0)
        .period(LOOP)
        .node(stars(&mut rng))
        .node(mountains())
        .node(terrain())
        .node(Node::group("pines").children(pines()))
        .node(orbs())
        .node(fireflies(&mut rng))
}

fn mountains() -> Node {
    let peak = |name: &str, at: [f64; 3], radius: f64, height: f64, material: Material| {
        Node::mesh(name, Shape::Cone { radius, height }, material).at(at)
    };
    let cap = |name: &str, at: [f64; 3], radius: f64, height: f64| {
        Node::mesh(name, Shape::Cone { radius, height }, Material::solid("#e8f0f0")).at(at)
    };

    let distant = Material::solid("#1a2a22").opacity(0.7);

    Node::group("mountains")
        .at([0.0, -3.0, -8.0])
        .with_motion(Motion::sway(Channel::RotationY, 0.1, 0.05))
        .children([
            peak("distant-left", [-7.0, -1.5, -2.0], 2.0, 3.5, distant.clone()),
            peak("distant-right", [7.0, -1.2, -2.0], 1.8, 3.0, distant),
            peak("main", [0.0, 0.0, 0.0], 3.0, 6.0, Material::solid("#1a3a2e")),
            cap("main-snow", [0.0, 2.5, 0.0], 1.2, 1.5),
            peak("left", [-4.0, -0.5, 1.0], 2.5, 5.0, Material::solid("#2d4a3e")),
            cap("left-snow", [-4.0, 1.5, 1.0], 1.0, 1.2),
            peak("right", [4.0, -0.8, 0.5], 2.2, 4.5, Material::solid("#365a4a")),
            cap("right-snow", [4.0, 1.2, 0.5], 0.9, 1.0),
        ])
}

fn pines() -> Vec<Node> {
    const SPOTS: [[f64; 3]; 8] = [
        [-6.0, -4.0, -2.0],
        [-5.0, -4.2, 0.0],
        [-4.0, -4.0, 1.0],
        [4.0, -4.1, 1.0],
        [5.0, -4.0, 0.0],
        [6.0, -4.2, -1.0],
        [-3.0, -4.3, 2.0],
        [3.0, -4.2, 2.0],
    ];

    SPOTS
        .iter()
        .enumerate()
        .map(|(i, spot)| {
            Node::group(format!("pine-{i}")).at(*spot).children([
                Node::mesh(
                    "trunk",
                    Shape::Cone {
                        radius: 0.15,
                        height: 0.8,
                    },
                    Material::solid("#4a3728"),
                )
                .at([0.0, 0.4, 0.0]),
                Node::mesh(
                    "foliage-low",
                    Shape::Cone {
                        radius: 0.8,
                        height: 1.5,
                    },
                    Material::solid("#1a4a2e"),
                )
                .at([0.0, 1.2, 0.0]),
                Node::mesh(
                    "foliage-mid",
                    Shape::Cone {
                        radius: 0.6,
                        height: 1.2,
                    },
                    Material::solid("#2a5a3e"),
                )
                .at([0.0, 1.8, 0.0]),
                Node::mesh(
                    "foliage-top",
                    Shape::Cone {
                        radius: 0.4,
                        height: 0.9,
                    },
                    Material::solid("#3a6a4e"),
                )
                .at([0.0, 2.3, 0.0]),
            ])
        })
        .collect()
}

fn orbs() -> Node {
    Node::group("orbs")
        .with_motion(Motion::spin(0.0, 0.1, 0.0))
        .children([
            Node::mesh(
                "orb-green",
                Shape::Icosahedron { radius: 0.4 },
                Material::wireframe("#4ade80"),
            )
            .at([-3.0, 1.0, 2.0])
            .with_motion(Motion::float(2.0, 1.0, 2.0)),
            Node::mesh(
                "orb-orange",
                Shape::Octahedron { radius: 0.35 },
                Material::wireframe("#f97316"),
            )
            .at([3.0, 2.0, 1.0])
            .with_motion(Motion::float(1.5, 0.8, 1.5)),
            Node::mesh(
                "orb-blue",
                Shape::Dodecahedron { radius: 0.3 },
                Material::wireframe("#60a5fa"),
            )
            .at([0.0, 3.0, 0.0])
            .with_motion(Motion::float(2.5, 1.2, 2.0)),
        ])
}

fn terrain() -> Node {
    Node::mesh(
        "terrain",
        Shape::Grid {
            size: 50.0,
            divisions: 20,
        },
        Material::wireframe("#1a3a2e").opacity(0.3),
    )
    .at([0.0, -4.5, 0.0])
}

fn fireflies(rng: &mut StdRng) -> Node {
    let flies = (0..FIREFLIES).map(|i| {
        let at = Vec3::new(
            rng.random_range(-10.0..10.0),
            rng.random_range(-2.0..6.0),
            rng.random_range(-7.5..7.5),
        );
        let colour = if rng.random_bool(0.5) { "#ffd94d" } else { "#4dff80" };

        Node::mesh(
            format!("firefly-{i}"),
            Shape::Point { size: 0.1 },
            Material::solid(colour).opacity(0.8),
        )
        .at(at)
        .with_motion(Motion::Drift {
            amplitude: 0.12,
            phase: i as f64,
        })
    });

    Node::group("fireflies").children(flies)
}

fn stars(rng: &mut StdRng) -> Node {
    let stars = (0..STARS).map(|i| {
        // Uniform direction on the sphere, pushed out into the shell.
        let z: f64 = rng.random_range(-1.0..1.0);
        let theta: f64 = rng.random_range(0.0..std::f64::consts::TAU);
        let r = (1.0 - z * z).sqrt();
        let distance = STAR_RADIUS + rng.random::<f64>() * STAR_DEPTH;

        Node::mesh(
            format!("star-{i}"),
            Shape::Point { size: 0.4 },
            Material::solid("#ffffff").opacity(0.8).without_fog(),
        )
        .at(Vec3::new(r * theta.cos(), r * theta.sin(), z) * distance)
    });

    Node::group("stars").children(stars)
}
