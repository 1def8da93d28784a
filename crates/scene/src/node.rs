use strum::IntoStaticStr;

use crate::{Motion, Transform, Vec3, motion};

#[derive(Debug, Clone, Copy, PartialEq, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Shape {
    Sphere { radius: f64 },
    Cone { radius: f64, height: f64 },
    Octahedron { radius: f64 },
    Dodecahedron { radius: f64 },
    Icosahedron { radius: f64 },
    TorusKnot { radius: f64, tube: f64 },
    Point { size: f64 },
    /// Segment from the node origin to `to`, in local space.
    Line { to: Vec3 },
    /// Square wireframe grid lying in the local XZ plane.
    Grid { size: f64, divisions: usize },
    /// Soft light source.
    Glow { radius: f64 },
}

impl Shape {
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub colour: String,
    pub opacity: f64,
    pub wireframe: bool,
    /// Whether scene fog fades this material.
    pub fog: bool,
}

impl Material {
    pub fn solid(colour: impl Into<String>) -> Self {
        Self {
            colour: colour.into(),
            opacity: 1.0,
            wireframe: false,
            fog: true,
        }
    }

    pub fn wireframe(colour: impl Into<String>) -> Self {
        Self {
            wireframe: true,
            ..Self::solid(colour)
        }
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn without_fog(mut self) -> Self {
        self.fog = false;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub shape: Shape,
    pub material: Material,
}

/// A scene graph node. Groups have no mesh and only carry a transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub name: String,
    pub mesh: Option<Mesh>,
    pub label: Option<String>,
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f64,
    pub motions: Vec<Motion>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mesh: None,
            label: None,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
            motions: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn mesh(name: impl Into<String>, shape: Shape, material: Material) -> Self {
        Self {
            mesh: Some(Mesh { shape, material }),
            ..Self::group(name)
        }
    }

    pub fn at(mut self, position: impl Into<Vec3>) -> Self {
        self.position = position.into();
        self
    }

    pub fn rotated(mut self, rotation: impl Into<Vec3>) -> Self {
        self.rotation = rotation.into();
        self
    }

    pub fn scaled(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn labelled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.motions.push(motion);
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Local transform at `t`: resting pose plus every motion offset.
    pub fn local(&self, t: f64) -> Transform {
        let offset = motion::combined(&self.motions, t);

        Transform::new(
            self.position + offset.position,
            self.rotation + offset.rotation,
            self.scale,
        )
    }

    pub(crate) fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }
}

/// A mesh resolved to world space for one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// Depth-first index of the node, stable across frames.
    pub index: usize,
    pub name: String,
    pub shape: Shape,
    pub material: Material,
    pub label: Option<String>,
    pub transform: Transform,
}

pub(crate) fn collect(
    node: &Node,
    parent: &Transform,
    t: f64,
    index: &mut usize,
    out: &mut Vec<Placement>,
) {
    let world = parent.then(&node.local(t));
    let current = *index;
    *index += 1;

    if let Some(mesh) = &node.mesh {
        out.push(Placement {
            index: current,
            name: node.name.to_owned(),
            shape: mesh.shape,
            material: mesh.material.clone(),
            label: node.label.clone(),
            transform: world,
        });
    }

    for child in &node.children {
        collect(child, &world, t, index, out);
    }
}
