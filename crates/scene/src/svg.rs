//! Renders a scene to a self-contained animated SVG.
//!
//! `Scene::frame` is sampled over one loop period and every attribute that
//! changes between samples becomes a SMIL `<animate>` keyframe list, so the
//! browser plays the motion without any script.

use std::f64::consts::TAU;

use crate::{Camera, Placement, Scene, Shape, Vec3};

const KNOT_SEGMENTS: usize = 64;
const LABEL_COLOUR: &str = "#e5e7eb";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    /// Keyframes per loop.
    pub frames: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            frames: 24,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Figure {
    Circle { cx: f64, cy: f64, r: f64 },
    Path { d: String },
}

#[derive(Debug, Clone, PartialEq)]
struct Sample {
    figure: Figure,
    opacity: f64,
    depth: f64,
    anchor: (f64, f64),
}

struct Track<'a> {
    placement: &'a Placement,
    samples: Vec<Sample>,
    depth: f64,
}

pub fn render(scene: &Scene, options: &RenderOptions) -> String {
    let frames = options.frames.max(1);
    let (width, height) = (f64::from(options.width), f64::from(options.height));

    let timeline: Vec<Vec<Placement>> = (0..=frames)
        .map(|k| scene.frame(scene.period * k as f64 / frames as f64))
        .collect();

    let mut tracks = Vec::new();
    for (slot, placement) in timeline[0].iter().enumerate() {
        let samples: Vec<Option<Sample>> = timeline
            .iter()
            .map(|frame| draw(&frame[slot], scene, width, height))
            .collect();

        if let Some(samples) = fill_gaps(samples) {
            let depth = samples[0].depth;
            tracks.push(Track {
                placement,
                samples,
                depth,
            });
        }
    }

    // Painter's order: farthest first.
    tracks.sort_by(|a, b| b.depth.total_cmp(&a.depth));

    let mut out = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" class="scene scene-{}" preserveAspectRatio="xMidYMid slice" aria-hidden="true" focusable="false">"#,
        options.width,
        options.height,
        escape(&scene.name)
    );

    out.push_str(&format!(
        r#"<defs><filter id="glow-{}" x="-100%" y="-100%" width="300%" height="300%"><feGaussianBlur stdDeviation="12"/></filter></defs>"#,
        escape(&scene.name)
    ));

    if let Some(background) = &scene.background {
        out.push_str(&format!(
            r#"<rect width="100%" height="100%" fill="{}"/>"#,
            escape(background)
        ));
    }

    let dur = format!("{}s", num(scene.period));
    for track in &tracks {
        element(&mut out, scene, track, &dur);
    }

    out.push_str("</svg>");
    out
}

fn element(out: &mut String, scene: &Scene, track: &Track<'_>, dur: &str) {
    let placement = track.placement;
    let material = &placement.material;
    let colour = escape(&material.colour);
    let opacities: Vec<String> = track.samples.iter().map(|s| num(s.opacity)).collect();

    let paint = match placement.shape {
        Shape::Line { .. } | Shape::Grid { .. } => {
            format!(r#"fill="none" stroke="{colour}" stroke-width="1""#)
        }
        Shape::Glow { .. } => format!(
            r#"fill="{colour}" filter="url(#glow-{})""#,
            escape(&scene.name)
        ),
        Shape::Point { .. } => format!(r#"fill="{colour}""#),
        _ if material.wireframe => {
            format!(r#"fill="none" stroke="{colour}" stroke-width="1.2""#)
        }
        _ => format!(r#"fill="{colour}" fill-opacity="0.85" stroke="{colour}""#),
    };

    let head = format!(
        r#"class="{}" data-node="{}" {paint} opacity="{}""#,
        placement.shape.kind(),
        escape(&placement.name),
        opacities[0]
    );

    match &track.samples[0].figure {
        Figure::Circle { .. } => {
            let (cx, cy, r) = circle_channels(&track.samples);
            out.push_str(&format!(
                r#"<circle {head} cx="{}" cy="{}" r="{}">"#,
                cx[0], cy[0], r[0]
            ));
            animate(out, "cx", &cx, dur);
            animate(out, "cy", &cy, dur);
            animate(out, "r", &r, dur);
            animate(out, "opacity", &opacities, dur);
            out.push_str("</circle>");
        }
        Figure::Path { .. } => {
            let d: Vec<String> = track
                .samples
                .iter()
                .map(|s| match &s.figure {
                    Figure::Path { d } => d.to_owned(),
                    Figure::Circle { .. } => String::new(),
                })
                .collect();
            out.push_str(&format!(r#"<path {head} d="{}">"#, d[0]));
            animate(out, "d", &d, dur);
            animate(out, "opacity", &opacities, dur);
            out.push_str("</path>");
        }
    }

    if let Some(label) = &placement.label {
        let x: Vec<String> = track.samples.iter().map(|s| num(s.anchor.0)).collect();
        let y: Vec<String> = track.samples.iter().map(|s| num(s.anchor.1)).collect();
        out.push_str(&format!(
            r#"<text class="label" x="{}" y="{}" fill="{LABEL_COLOUR}" font-size="14" text-anchor="middle" opacity="{}">{}"#,
            x[0],
            y[0],
            opacities[0],
            escape(label)
        ));
        animate(out, "x", &x, dur);
        animate(out, "y", &y, dur);
        animate(out, "opacity", &opacities, dur);
        out.push_str("</text>");
    }
}

fn circle_channels(samples: &[Sample]) -> (Vec<String>, Vec<String>, Vec<String>) {
    let mut cx = Vec::with_capacity(samples.len());
    let mut cy = Vec::with_capacity(samples.len());
    let mut r = Vec::with_capacity(samples.len());

    for sample in samples {
        if let Figure::Circle {
            cx: x,
            cy: y,
            r: radius,
        } = sample.figure
        {
            cx.push(num(x));
            cy.push(num(y));
            r.push(num(radius));
        }
    }

    (cx, cy, r)
}

/// Writes nothing when the attribute never changes.
fn animate(out: &mut String, attribute: &str, values: &[String], dur: &str) {
    if values.windows(2).all(|pair| pair[0] == pair[1]) {
        return;
    }

    out.push_str(&format!(
        r#"<animate attributeName="{attribute}" dur="{dur}" repeatCount="indefinite" values="{}"/>"#,
        values.join(";")
    ));
}

/// Frames where the node is culled borrow the nearest visible geometry and
/// become transparent. `None` when the node is never visible.
fn fill_gaps(samples: Vec<Option<Sample>>) -> Option<Vec<Sample>> {
    let first = samples.iter().flatten().next()?.clone();
    let mut last = first;

    Some(
        samples
            .into_iter()
            .map(|sample| match sample {
                Some(sample) => {
                    last = sample.clone();
                    sample
                }
                None => Sample {
                    opacity: 0.0,
                    ..last.clone()
                },
            })
            .collect(),
    )
}

fn draw(placement: &Placement, scene: &Scene, width: f64, height: f64) -> Option<Sample> {
    let camera = &scene.camera;
    let transform = &placement.transform;
    let centre = camera.project(transform.translation, width, height)?;
    let size = centre.scale * transform.scale;

    let figure = match placement.shape {
        Shape::Sphere { radius } | Shape::Glow { radius } => Figure::Circle {
            cx: centre.x,
            cy: centre.y,
            r: radius * size,
        },
        Shape::Point { size: point } => Figure::Circle {
            cx: centre.x,
            cy: centre.y,
            r: (point * size / 2.0).max(0.5),
        },
        Shape::Cone { radius, height: h } => {
            let outline = [
                Vec3::new(0.0, h / 2.0, 0.0),
                Vec3::new(-radius, -h / 2.0, 0.0),
                Vec3::new(radius, -h / 2.0, 0.0),
            ];
            Figure::Path {
                d: polyline(camera, placement, &outline, true, width, height)?,
            }
        }
        Shape::Octahedron { radius } => Figure::Path {
            d: polyline(camera, placement, &regular(4, radius), true, width, height)?,
        },
        Shape::Dodecahedron { radius } => Figure::Path {
            d: polyline(camera, placement, &regular(5, radius), true, width, height)?,
        },
        Shape::Icosahedron { radius } => Figure::Path {
            d: polyline(camera, placement, &regular(6, radius), true, width, height)?,
        },
        Shape::TorusKnot { radius, tube } => Figure::Path {
            d: polyline(camera, placement, &knot(radius, tube), true, width, height)?,
        },
        Shape::Line { to } => Figure::Path {
            d: polyline(camera, placement, &[Vec3::ZERO, to], false, width, height)?,
        },
        Shape::Grid { size, divisions } => Figure::Path {
            d: grid(camera, placement, size, divisions, width, height)?,
        },
    };

    let fog = match (&scene.fog, placement.material.fog) {
        (Some(fog), true) => fog.visibility(centre.depth),
        _ => 1.0,
    };

    let anchor_offset = match figure {
        Figure::Circle { r, .. } => r + 18.0,
        Figure::Path { .. } => 18.0,
    };

    Some(Sample {
        figure,
        opacity: placement.material.opacity * fog,
        depth: centre.depth,
        anchor: (centre.x, centre.y + anchor_offset),
    })
}

/// Regular polygon in the local XY plane, first vertex straight up.
fn regular(sides: usize, radius: f64) -> Vec<Vec3> {
    (0..sides)
        .map(|i| {
            let angle = TAU * i as f64 / sides as f64;
            Vec3::new(angle.sin() * radius, angle.cos() * radius, 0.0)
        })
        .collect()
}

/// Centre line of a (2,3) torus knot.
fn knot(radius: f64, tube: f64) -> Vec<Vec3> {
    let (p, q) = (2.0, 3.0);

    (0..KNOT_SEGMENTS)
        .map(|i| {
            let u = i as f64 / KNOT_SEGMENTS as f64 * p * TAU;
            let quo = q / p * u;
            let r = radius * (2.0 + quo.cos()) * 0.5;
            // The tube gives the curve a little extra breadth.
            Vec3::new(
                r * u.cos() * (1.0 + tube),
                r * u.sin() * (1.0 + tube),
                radius * quo.sin() * 0.5,
            )
        })
        .collect()
}

fn polyline(
    camera: &Camera,
    placement: &Placement,
    points: &[Vec3],
    closed: bool,
    width: f64,
    height: f64,
) -> Option<String> {
    let mut d = String::new();

    for (i, point) in points.iter().enumerate() {
        let p = camera.project(placement.transform.apply(*point), width, height)?;
        d.push_str(if i == 0 { "M" } else { "L" });
        d.push_str(&format!("{} {}", num(p.x), num(p.y)));
    }

    if closed {
        d.push('Z');
    }

    Some(d)
}

fn grid(
    camera: &Camera,
    placement: &Placement,
    size: f64,
    divisions: usize,
    width: f64,
    height: f64,
) -> Option<String> {
    let divisions = divisions.max(1);
    let half = size / 2.0;
    let step = size / divisions as f64;
    let mut d = String::new();

    let project = |x: f64, z: f64| {
        camera.project(placement.transform.apply(Vec3::new(x, 0.0, z)), width, height)
    };

    for line in 0..=divisions {
        let fixed = -half + step * line as f64;
        for seg in 0..divisions {
            let (from, to) = (-half + step * seg as f64, -half + step * (seg + 1) as f64);

            for (a, b) in [
                (project(fixed, from), project(fixed, to)),
                (project(from, fixed), project(to, fixed)),
            ] {
                if let (Some(a), Some(b)) = (a, b) {
                    d.push_str(&format!(
                        "M{} {}L{} {}",
                        num(a.x),
                        num(a.y),
                        num(b.x),
                        num(b.y)
                    ));
                }
            }
        }
    }

    if d.is_empty() { None } else { Some(d) }
}

fn num(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded == 0.0 {
        "0".to_owned()
    } else {
        format!("{rounded}")
    }
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
