use portfolio_scene::{
    Scene, scenes,
    svg::{self, RenderOptions},
};

use crate::content::{EXPERIENCES, PROJECTS};

/// Seed for every procedurally placed element, so the page is identical
/// across restarts.
const SCENE_SEED: u64 = 7;

/// Keyframes per loop for the long-running scenes.
const LOOP_FRAMES: usize = 72;
const HERO_FRAMES: usize = 96;
const ABOUT_FRAMES: usize = 36;

/// Pre-rendered SVG for each section, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct Showcase {
    pub hero: String,
    pub about: String,
    pub experiences: Vec<String>,
    pub projects: Vec<String>,
    pub tech: String,
    pub freelancing: String,
    pub contact: String,
}

impl Showcase {
    pub fn render() -> Self {
        let started = std::time::Instant::now();

        let showcase = Self {
            hero: draw(&scenes::hero(SCENE_SEED), 1280, 800, HERO_FRAMES),
            about: draw(&scenes::about(), 600, 600, ABOUT_FRAMES),
            experiences: EXPERIENCES
                .iter()
                .enumerate()
                .map(|(i, experience)| {
                    let scene = scenes::experience_card(format!("experience-{i}"), experience.colour);
                    draw(&scene, 160, 160, LOOP_FRAMES)
                })
                .collect(),
            projects: PROJECTS
                .iter()
                .enumerate()
                .map(|(i, project)| {
                    let scene = scenes::project_card(format!("project-{i}"), project.colour);
                    draw(&scene, 320, 180, LOOP_FRAMES)
                })
                .collect(),
            tech: draw(&scenes::tech(SCENE_SEED), 900, 600, LOOP_FRAMES),
            freelancing: draw(&scenes::freelancing(), 600, 600, LOOP_FRAMES),
            contact: draw(&scenes::contact(), 600, 600, LOOP_FRAMES),
        };

        tracing::info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            bytes = showcase.len(),
            "Scenes rendered"
        );

        showcase
    }

    pub fn len(&self) -> usize {
        [
            &self.hero,
            &self.about,
            &self.tech,
            &self.freelancing,
            &self.contact,
        ]
        .iter()
        .map(|svg| svg.len())
        .chain(self.experiences.iter().map(String::len))
        .chain(self.projects.iter().map(String::len))
        .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn draw(scene: &Scene, width: u32, height: u32, frames: usize) -> String {
    svg::render(
        scene,
        &RenderOptions {
            width,
            height,
            frames,
        },
    )
}
