use crate::{Camera, Fog, Node, Placement, Transform, node};

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Unique per page, used to scope SVG ids.
    pub name: String,
    pub camera: Camera,
    pub fog: Option<Fog>,
    pub background: Option<String>,
    /// Seconds covered by one animation loop.
    pub period: f64,
    pub nodes: Vec<Node>,
}

impl Scene {
    pub fn new(name: impl Into<String>, camera: Camera) -> Self {
        Self {
            name: name.into(),
            camera,
            fog: None,
            background: None,
            period: 20.0,
            nodes: Vec::new(),
        }
    }

    pub fn fog(mut self, colour: impl Into<String>, near: f64, far: f64) -> Self {
        self.fog = Some(Fog {
            colour: colour.into(),
            near,
            far,
        });
        self
    }

    pub fn background(mut self, colour: impl Into<String>) -> Self {
        self.background = Some(colour.into());
        self
    }

    pub fn period(mut self, seconds: f64) -> Self {
        self.period = seconds;
        self
    }

    pub fn node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    /// Every mesh in world space at `elapsed` seconds, in depth-first order.
    pub fn frame(&self, elapsed: f64) -> Vec<Placement> {
        let root = Transform::default();
        let mut index = 0;
        let mut out = Vec::new();

        for node in &self.nodes {
            node::collect(node, &root, elapsed, &mut index, &mut out);
        }

        out
    }

    pub fn node_count(&self) -> usize {
        self.nodes.iter().map(Node::count).sum()
    }
}
