use axum::{extract::State, response::IntoResponse};
use portfolio_scene::scenes::TECH_STACK;
use time::OffsetDateTime;

use crate::{
    content::{
        self, About, ContactInfo, Experience, Footer, Freelancing, Hero, Link, Project,
        SectionHeading, Social,
    },
    routes::AppState,
    showcase::Showcase,
    template::Template,
};

pub struct ExperienceCard<'a> {
    pub experience: &'a Experience,
    pub scene: &'a str,
}

pub struct ProjectCard<'a> {
    pub project: &'a Project,
    pub scene: &'a str,
}

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub title: &'static str,
    pub description: &'static str,
    pub owner: &'static str,
    pub email: &'static str,
    pub nav_links: &'static [Link],
    pub socials: &'static [Social],
    pub hero: &'static Hero,
    pub about: &'static About,
    pub experience_heading: &'static SectionHeading,
    pub projects_heading: &'static SectionHeading,
    pub tech_heading: &'static SectionHeading,
    pub tech_stack: &'static [(&'static str, &'static str, [f64; 3])],
    pub extra_skills: &'static [&'static str],
    pub freelancing: &'static Freelancing,
    pub contact_heading: &'static SectionHeading,
    pub contact_info: &'static [ContactInfo],
    pub footer: &'static Footer,
    pub resume_filename: &'static str,
    pub showcase: &'a Showcase,
    pub experiences: Vec<ExperienceCard<'a>>,
    pub projects: Vec<ProjectCard<'a>>,
    pub resume_url: &'a str,
    pub year: i32,
}

impl<'a> IndexTemplate<'a> {
    pub fn new(showcase: &'a Showcase, resume_url: &'a str, year: i32) -> Self {
        let experiences = content::EXPERIENCES
            .iter()
            .enumerate()
            .map(|(i, experience)| ExperienceCard {
                experience,
                scene: scene_at(&showcase.experiences, i),
            })
            .collect();

        let projects = content::PROJECTS
            .iter()
            .enumerate()
            .map(|(i, project)| ProjectCard {
                project,
                scene: scene_at(&showcase.projects, i),
            })
            .collect();

        Self {
            title: content::TITLE,
            description: content::DESCRIPTION,
            owner: content::OWNER,
            email: content::EMAIL,
            nav_links: content::NAV_LINKS,
            socials: content::SOCIALS,
            hero: &content::HERO,
            about: &content::ABOUT,
            experience_heading: &content::EXPERIENCE_HEADING,
            projects_heading: &content::PROJECTS_HEADING,
            tech_heading: &content::TECH_HEADING,
            tech_stack: &TECH_STACK,
            extra_skills: content::EXTRA_SKILLS,
            freelancing: &content::FREELANCING,
            contact_heading: &content::CONTACT_HEADING,
            contact_info: content::CONTACT_INFO,
            footer: &content::FOOTER,
            resume_filename: content::RESUME_FILENAME,
            showcase,
            experiences,
            projects,
            resume_url,
            year,
        }
    }
}

fn scene_at(scenes: &[String], index: usize) -> &str {
    scenes.get(index).map(String::as_str).unwrap_or_default()
}

pub async fn page(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    let year = OffsetDateTime::now_utc().year();

    template.render(IndexTemplate::new(
        &app.showcase,
        &app.config.site.resume_url,
        year,
    ))
}
