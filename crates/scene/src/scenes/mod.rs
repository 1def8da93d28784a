//! The decorative scene behind each page section.

mod about;
mod cards;
mod contact;
mod freelancing;
mod hero;
mod tech;

use std::f64::consts::PI;

pub use about::about;
pub use cards::{experience_card, project_card};
pub use contact::contact;
pub use freelancing::freelancing;
pub use hero::hero;
pub use tech::{TECH_STACK, tech};

/// 20π seconds: a whole number of turns for every spin rate used on the page.
pub const LOOP: f64 = 20.0 * PI;
