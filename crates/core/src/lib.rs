//! Core card rules. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod chaos;
pub mod compiler;
pub mod condition;
pub mod config;
pub mod database;
pub mod descriptor;
pub mod effects;
pub mod names;
pub mod rng;
pub mod skill;

pub use cards::*;
pub use chaos::*;
pub use compiler::*;
pub use condition::*;
pub use config::*;
pub use database::*;
pub use descriptor::*;
pub use effects::*;
pub use names::*;
pub use rng::*;
pub use skill::*;
pub use skill_test::*;
