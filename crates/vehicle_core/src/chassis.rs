use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

const START_SPEED: f32 = 10.0;

/// Shared vehicle state. This is the concrete half of the abstract base:
/// it carries the common fields and generic motion operations, but is not
/// a [`crate::Vehicle`] itself, so the abstract role cannot travel.
#[derive(Debug, Clone, Serialize)]
pub struct Chassis {
    pub name: String,
    pub max_speed: f32,
    pub fuel_type: String,
    pub current_speed: f32,
    pub is_moving: bool,
    #[serde(skip)]
    created_at: DateTime<Utc>,
}

impl Chassis {
    pub fn new(name: impl Into<String>, max_speed: f32, fuel_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_speed,
            fuel_type: fuel_type.into(),
            current_speed: 0.0,
            is_moving: false,
            created_at: Utc::now(),
        }
    }

    /// Begins motion at the generic starting speed. Warns and leaves state
    /// untouched when already moving.
    pub fn start(&mut self) -> bool {
        if self.is_moving {
            warn!(target: "vehicle_core.motion", vehicle = %self.name, "already moving");
            return false;
        }
        self.is_moving = true;
        self.current_speed = START_SPEED;
        info!(
            target: "vehicle_core.motion",
            vehicle = %self.name,
            speed = self.current_speed,
            "started"
        );
        true
    }

    pub fn stop(&mut self) -> bool {
        if !self.is_moving {
            warn!(target: "vehicle_core.motion", vehicle = %self.name, "already stopped");
            return false;
        }
        self.is_moving = false;
        self.current_speed = 0.0;
        info!(target: "vehicle_core.motion", vehicle = %self.name, "stopped");
        true
    }

    /// Raises speed by `amount`, never past `max_speed`. Requires motion.
    pub fn accelerate(&mut self, amount: f32) -> bool {
        if !self.is_moving {
            warn!(
                target: "vehicle_core.motion",
                vehicle = %self.name,
                "cannot accelerate: start the vehicle first"
            );
            return false;
        }
        self.current_speed = self.max_speed.min(self.current_speed + amount);
        info!(
            target: "vehicle_core.motion",
            vehicle = %self.name,
            speed = self.current_speed,
            "accelerated"
        );
        true
    }

    /// Whole days elapsed since construction.
    pub fn age_days(&self) -> i64 {
        (Utc::now() - self.created_at).num_days()
    }

    pub fn describe(&self) -> String {
        format!(
            "{} ({}, max: {} km/h)",
            self.name, self.fuel_type, self.max_speed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_sets_initial_speed() {
        let mut chassis = Chassis::new("Toyota Camry", 180.0, "Gasoline");
        assert!(chassis.start());
        assert!(chassis.is_moving);
        assert_eq!(chassis.current_speed, 10.0);
    }

    #[test]
    fn double_start_is_rejected_without_state_change() {
        let mut chassis = Chassis::new("Toyota Camry", 180.0, "Gasoline");
        chassis.start();
        chassis.accelerate(40.0);
        assert!(!chassis.start());
        assert_eq!(chassis.current_speed, 50.0);
    }

    #[test]
    fn stop_resets_speed() {
        let mut chassis = Chassis::new("Toyota Camry", 180.0, "Gasoline");
        chassis.start();
        assert!(chassis.stop());
        assert!(!chassis.is_moving);
        assert_eq!(chassis.current_speed, 0.0);
    }

    #[test]
    fn stop_while_stationary_is_rejected() {
        let mut chassis = Chassis::new("Toyota Camry", 180.0, "Gasoline");
        assert!(!chassis.stop());
    }

    #[test]
    fn accelerate_clamps_to_max_speed() {
        let mut chassis = Chassis::new("Toyota Camry", 180.0, "Gasoline");
        chassis.start();
        chassis.accelerate(500.0);
        assert_eq!(chassis.current_speed, 180.0);
    }

    #[test]
    fn accelerate_requires_motion() {
        let mut chassis = Chassis::new("Toyota Camry", 180.0, "Gasoline");
        assert!(!chassis.accelerate(30.0));
        assert_eq!(chassis.current_speed, 0.0);
    }

    #[test]
    fn fresh_chassis_has_zero_age() {
        let chassis = Chassis::new("Toyota Camry", 180.0, "Gasoline");
        assert_eq!(chassis.age_days(), 0);
    }

    #[test]
    fn description_names_fuel_and_max_speed() {
        let chassis = Chassis::new("Toyota Camry", 180.0, "Gasoline");
        assert_eq!(chassis.describe(), "Toyota Camry (Gasoline, max: 180 km/h)");
    }
}
