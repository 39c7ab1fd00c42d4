//! Vehicle model: shared [`Chassis`] state behind a [`Vehicle`] trait whose
//! `travel` method every concrete vehicle implements with its own motion
//! semantics.

pub mod chassis;
pub mod fleet;
pub mod showcase;

pub use chassis::Chassis;
pub use fleet::{AnyVehicle, Bicycle, Boat, Car, Gear, MotionMode, Motorcycle, Plane, Vehicle};
pub use showcase::{run, FleetSnapshot, ShowcaseOutcome, ShowcaseRng, DEFAULT_SEED};
