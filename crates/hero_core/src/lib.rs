//! Character model: a `Superhero` base with health and energy pools, and
//! two specializations that override parts of its behavior through the
//! [`Hero`] trait.

pub mod hero;
pub mod showcase;
pub mod specialists;

pub use hero::{Hero, Superhero, MAX_ENERGY, MAX_HEALTH};
pub use showcase::{run, HeroSnapshot, ShowcaseOutcome};
pub use specialists::{MagicHero, TechHero, DEFAULT_GADGET_USES, MAX_MANA};
