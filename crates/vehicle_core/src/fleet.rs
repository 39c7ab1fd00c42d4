use std::fmt;

use serde::Serialize;
use tracing::{info, warn};

use crate::chassis::Chassis;

const TAKEOFF_SPEED: f32 = 200.0;
const CRUISE_ALTITUDE: f32 = 1000.0;
const SAIL_SPEED: f32 = 15.0;
const HUMAN_POWER: &str = "Human Power";

/// How a vehicle moves. `Display` yields the tag the drivers report, so a
/// caller can tell which concrete type handled a `travel` call without
/// inspecting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MotionMode {
    Driving,
    Flying,
    Sailing,
    Pedaling,
    Riding,
}

impl fmt::Display for MotionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            MotionMode::Driving => "Driving",
            MotionMode::Flying => "Flying",
            MotionMode::Sailing => "Sailing",
            MotionMode::Pedaling => "Pedaling",
            MotionMode::Riding => "Riding",
        };
        f.write_str(tag)
    }
}

/// The abstract vehicle contract. Shared state and generic operations live
/// on the [`Chassis`]; `travel` is the override every concrete vehicle
/// must supply. Calling `travel` through `dyn Vehicle` dispatches to the
/// concrete implementation.
pub trait Vehicle {
    fn chassis(&self) -> &Chassis;
    fn chassis_mut(&mut self) -> &mut Chassis;
    fn travel(&mut self) -> MotionMode;
}

/// Car transmission positions: P, R, N, D and manual gears 1-6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gear {
    Park,
    Reverse,
    Neutral,
    Drive,
    Manual(u8),
}

impl Gear {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "P" => Some(Gear::Park),
            "R" => Some(Gear::Reverse),
            "N" => Some(Gear::Neutral),
            "D" => Some(Gear::Drive),
            _ => match symbol.parse::<u8>() {
                Ok(n) if (1..=6).contains(&n) => Some(Gear::Manual(n)),
                _ => None,
            },
        }
    }
}

impl fmt::Display for Gear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gear::Park => f.write_str("P"),
            Gear::Reverse => f.write_str("R"),
            Gear::Neutral => f.write_str("N"),
            Gear::Drive => f.write_str("D"),
            Gear::Manual(n) => write!(f, "{n}"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Car {
    #[serde(flatten)]
    pub chassis: Chassis,
    pub doors: u32,
    pub gear: Gear,
}

impl Car {
    pub fn new(name: impl Into<String>, max_speed: f32, fuel_type: impl Into<String>, doors: u32) -> Self {
        Self {
            chassis: Chassis::new(name, max_speed, fuel_type),
            doors,
            gear: Gear::Park,
        }
    }

    /// Shifts to the gear named by `symbol`; rejects anything outside the
    /// fixed P/R/N/D/1-6 set.
    pub fn change_gear(&mut self, symbol: &str) -> bool {
        match Gear::from_symbol(symbol) {
            Some(gear) => {
                self.gear = gear;
                info!(
                    target: "vehicle_core.car",
                    vehicle = %self.chassis.name,
                    gear = %self.gear,
                    "gear changed"
                );
                true
            }
            None => {
                warn!(
                    target: "vehicle_core.car",
                    vehicle = %self.chassis.name,
                    symbol,
                    "invalid gear"
                );
                false
            }
        }
    }
}

impl Vehicle for Car {
    fn chassis(&self) -> &Chassis {
        &self.chassis
    }

    fn chassis_mut(&mut self) -> &mut Chassis {
        &mut self.chassis
    }

    fn travel(&mut self) -> MotionMode {
        if !self.chassis.is_moving {
            self.chassis.start();
        }
        info!(
            target: "vehicle_core.car",
            vehicle = %self.chassis.name,
            speed = self.chassis.current_speed,
            "driving on the road"
        );
        MotionMode::Driving
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Plane {
    #[serde(flatten)]
    pub chassis: Chassis,
    pub wingspan: f32,
    pub altitude: f32,
    /// Flight state tracked independently from the generic moving flag.
    pub is_flying: bool,
}

impl Plane {
    pub fn new(
        name: impl Into<String>,
        max_speed: f32,
        fuel_type: impl Into<String>,
        wingspan: f32,
    ) -> Self {
        Self {
            chassis: Chassis::new(name, max_speed, fuel_type),
            wingspan,
            altitude: 0.0,
            is_flying: false,
        }
    }

    /// Leaves the ground at takeoff speed and cruise altitude. No-op when
    /// already airborne.
    pub fn take_off(&mut self) {
        if self.is_flying {
            return;
        }
        self.is_flying = true;
        self.chassis.is_moving = true;
        self.chassis.current_speed = TAKEOFF_SPEED;
        self.altitude = CRUISE_ALTITUDE;
        info!(
            target: "vehicle_core.plane",
            vehicle = %self.chassis.name,
            altitude = self.altitude,
            "taken off"
        );
    }

    pub fn land(&mut self) -> bool {
        if !self.is_flying {
            warn!(target: "vehicle_core.plane", vehicle = %self.chassis.name, "not flying");
            return false;
        }
        self.is_flying = false;
        self.chassis.is_moving = false;
        self.chassis.current_speed = 0.0;
        self.altitude = 0.0;
        info!(target: "vehicle_core.plane", vehicle = %self.chassis.name, "landed");
        true
    }
}

impl Vehicle for Plane {
    fn chassis(&self) -> &Chassis {
        &self.chassis
    }

    fn chassis_mut(&mut self) -> &mut Chassis {
        &mut self.chassis
    }

    fn travel(&mut self) -> MotionMode {
        if !self.chassis.is_moving {
            self.take_off();
        }
        info!(
            target: "vehicle_core.plane",
            vehicle = %self.chassis.name,
            altitude = self.altitude,
            speed = self.chassis.current_speed,
            "flying"
        );
        MotionMode::Flying
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Boat {
    #[serde(flatten)]
    pub chassis: Chassis,
    pub displacement: f32,
    /// Anchored boats cannot move; new boats start anchored.
    pub anchor_down: bool,
}

impl Boat {
    pub fn new(
        name: impl Into<String>,
        max_speed: f32,
        fuel_type: impl Into<String>,
        displacement: f32,
    ) -> Self {
        Self {
            chassis: Chassis::new(name, max_speed, fuel_type),
            displacement,
            anchor_down: true,
        }
    }

    /// Weighs anchor and gets under way at sailing speed. No-op when the
    /// anchor is already up.
    pub fn raise_anchor(&mut self) {
        if !self.anchor_down {
            return;
        }
        self.anchor_down = false;
        self.chassis.is_moving = true;
        self.chassis.current_speed = SAIL_SPEED;
        info!(target: "vehicle_core.boat", vehicle = %self.chassis.name, "anchor raised");
    }

    pub fn drop_anchor(&mut self) -> bool {
        if self.anchor_down {
            warn!(target: "vehicle_core.boat", vehicle = %self.chassis.name, "already anchored");
            return false;
        }
        self.anchor_down = true;
        self.chassis.is_moving = false;
        self.chassis.current_speed = 0.0;
        info!(target: "vehicle_core.boat", vehicle = %self.chassis.name, "anchor dropped");
        true
    }
}

impl Vehicle for Boat {
    fn chassis(&self) -> &Chassis {
        &self.chassis
    }

    fn chassis_mut(&mut self) -> &mut Chassis {
        &mut self.chassis
    }

    fn travel(&mut self) -> MotionMode {
        if !self.chassis.is_moving {
            self.raise_anchor();
        }
        info!(
            target: "vehicle_core.boat",
            vehicle = %self.chassis.name,
            speed = self.chassis.current_speed,
            "sailing on water"
        );
        MotionMode::Sailing
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Bicycle {
    #[serde(flatten)]
    pub chassis: Chassis,
    pub gears: u32,
    pub current_gear: u32,
}

impl Bicycle {
    pub fn new(name: impl Into<String>, max_speed: f32, gears: u32) -> Self {
        Self {
            chassis: Chassis::new(name, max_speed, HUMAN_POWER),
            gears,
            current_gear: 1,
        }
    }

    /// Shifts within 1..=gears; out-of-range requests leave the current
    /// gear alone.
    pub fn shift_gear(&mut self, gear: u32) -> bool {
        if (1..=self.gears).contains(&gear) {
            self.current_gear = gear;
            info!(
                target: "vehicle_core.bicycle",
                vehicle = %self.chassis.name,
                gear,
                "gear shifted"
            );
            true
        } else {
            warn!(
                target: "vehicle_core.bicycle",
                vehicle = %self.chassis.name,
                gear,
                total_gears = self.gears,
                "gear out of range"
            );
            false
        }
    }
}

impl Vehicle for Bicycle {
    fn chassis(&self) -> &Chassis {
        &self.chassis
    }

    fn chassis_mut(&mut self) -> &mut Chassis {
        &mut self.chassis
    }

    fn travel(&mut self) -> MotionMode {
        if !self.chassis.is_moving {
            self.chassis.start();
        }
        info!(
            target: "vehicle_core.bicycle",
            vehicle = %self.chassis.name,
            gear = self.current_gear,
            speed = self.chassis.current_speed,
            "pedaling"
        );
        MotionMode::Pedaling
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Motorcycle {
    #[serde(flatten)]
    pub chassis: Chassis,
    pub engine_size: f32,
    pub helmet_on: bool,
}

impl Motorcycle {
    pub fn new(
        name: impl Into<String>,
        max_speed: f32,
        fuel_type: impl Into<String>,
        engine_size: f32,
    ) -> Self {
        Self {
            chassis: Chassis::new(name, max_speed, fuel_type),
            engine_size,
            helmet_on: false,
        }
    }

    pub fn wear_helmet(&mut self) {
        self.helmet_on = true;
        info!(target: "vehicle_core.motorcycle", vehicle = %self.chassis.name, "helmet on");
    }

    pub fn remove_helmet(&mut self) {
        self.helmet_on = false;
        warn!(
            target: "vehicle_core.motorcycle",
            vehicle = %self.chassis.name,
            "helmet removed, ride carefully"
        );
    }
}

impl Vehicle for Motorcycle {
    fn chassis(&self) -> &Chassis {
        &self.chassis
    }

    fn chassis_mut(&mut self) -> &mut Chassis {
        &mut self.chassis
    }

    fn travel(&mut self) -> MotionMode {
        if !self.chassis.is_moving {
            self.chassis.start();
        }
        info!(
            target: "vehicle_core.motorcycle",
            vehicle = %self.chassis.name,
            helmet_on = self.helmet_on,
            speed = self.chassis.current_speed,
            "riding"
        );
        MotionMode::Riding
    }
}

/// Closed set of concrete vehicles. The drivers hold these so their
/// type-specific follow-ups are a pattern match instead of downcasting.
#[derive(Debug, Clone, Serialize)]
pub enum AnyVehicle {
    Car(Car),
    Plane(Plane),
    Boat(Boat),
    Bicycle(Bicycle),
    Motorcycle(Motorcycle),
}

impl AnyVehicle {
    /// Brings the vehicle to rest the way its type does: planes land,
    /// boats drop anchor, everything else simply stops.
    pub fn halt(&mut self) -> bool {
        match self {
            AnyVehicle::Plane(plane) => plane.land(),
            AnyVehicle::Boat(boat) => boat.drop_anchor(),
            other => other.chassis_mut().stop(),
        }
    }
}

impl Vehicle for AnyVehicle {
    fn chassis(&self) -> &Chassis {
        match self {
            AnyVehicle::Car(v) => v.chassis(),
            AnyVehicle::Plane(v) => v.chassis(),
            AnyVehicle::Boat(v) => v.chassis(),
            AnyVehicle::Bicycle(v) => v.chassis(),
            AnyVehicle::Motorcycle(v) => v.chassis(),
        }
    }

    fn chassis_mut(&mut self) -> &mut Chassis {
        match self {
            AnyVehicle::Car(v) => v.chassis_mut(),
            AnyVehicle::Plane(v) => v.chassis_mut(),
            AnyVehicle::Boat(v) => v.chassis_mut(),
            AnyVehicle::Bicycle(v) => v.chassis_mut(),
            AnyVehicle::Motorcycle(v) => v.chassis_mut(),
        }
    }

    fn travel(&mut self) -> MotionMode {
        match self {
            AnyVehicle::Car(v) => v.travel(),
            AnyVehicle::Plane(v) => v.travel(),
            AnyVehicle::Boat(v) => v.travel(),
            AnyVehicle::Bicycle(v) => v.travel(),
            AnyVehicle::Motorcycle(v) => v.travel(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn car_travel_starts_then_drives() {
        let mut car = Car::new("Toyota Camry", 180.0, "Gasoline", 4);
        assert_eq!(car.travel(), MotionMode::Driving);
        assert!(car.chassis.is_moving);
        assert_eq!(car.chassis.current_speed, 10.0);
    }

    #[test]
    fn repeat_travel_does_not_retrigger_start() {
        let mut car = Car::new("Toyota Camry", 180.0, "Gasoline", 4);
        car.travel();
        car.chassis.accelerate(40.0);
        assert_eq!(car.travel(), MotionMode::Driving);
        assert_eq!(car.chassis.current_speed, 50.0);
    }

    #[test]
    fn gear_symbols_round_trip() {
        assert_eq!(Gear::from_symbol("P"), Some(Gear::Park));
        assert_eq!(Gear::from_symbol("D"), Some(Gear::Drive));
        assert_eq!(Gear::from_symbol("3"), Some(Gear::Manual(3)));
        assert_eq!(Gear::from_symbol("7"), None);
        assert_eq!(Gear::from_symbol("X"), None);
    }

    #[test]
    fn car_rejects_invalid_gear() {
        let mut car = Car::new("Toyota Camry", 180.0, "Gasoline", 4);
        assert!(car.change_gear("D"));
        assert!(!car.change_gear("X"));
        assert_eq!(car.gear, Gear::Drive);
    }

    #[test]
    fn plane_travel_takes_off_once() {
        let mut plane = Plane::new("Boeing 747", 920.0, "Jet Fuel", 64.4);
        assert_eq!(plane.travel(), MotionMode::Flying);
        assert!(plane.is_flying);
        assert_eq!(plane.altitude, 1000.0);
        assert_eq!(plane.chassis.current_speed, 200.0);

        plane.chassis.accelerate(100.0);
        plane.travel();
        assert_eq!(plane.chassis.current_speed, 300.0);
    }

    #[test]
    fn plane_lands_only_when_flying() {
        let mut plane = Plane::new("Boeing 747", 920.0, "Jet Fuel", 64.4);
        assert!(!plane.land());
        plane.take_off();
        assert!(plane.land());
        assert!(!plane.is_flying);
        assert_eq!(plane.altitude, 0.0);
        assert_eq!(plane.chassis.current_speed, 0.0);
    }

    #[test]
    fn boat_travel_raises_anchor() {
        let mut boat = Boat::new("Sailboat Explorer", 25.0, "Wind", 1500.0);
        assert!(boat.anchor_down);
        assert_eq!(boat.travel(), MotionMode::Sailing);
        assert!(!boat.anchor_down);
        assert_eq!(boat.chassis.current_speed, 15.0);
    }

    #[test]
    fn anchored_boat_cannot_drop_anchor_again() {
        let mut boat = Boat::new("Sailboat Explorer", 25.0, "Wind", 1500.0);
        assert!(!boat.drop_anchor());
        boat.raise_anchor();
        assert!(boat.drop_anchor());
        assert!(!boat.chassis.is_moving);
    }

    #[test]
    fn bicycle_is_human_powered() {
        let bike = Bicycle::new("Mountain Bike", 40.0, 21);
        assert_eq!(bike.chassis.fuel_type, "Human Power");
    }

    #[test]
    fn bicycle_rejects_out_of_range_gear() {
        let mut bike = Bicycle::new("Mountain Bike", 40.0, 21);
        assert!(!bike.shift_gear(25));
        assert_eq!(bike.current_gear, 1);
        assert!(bike.shift_gear(3));
        assert_eq!(bike.current_gear, 3);
        assert!(!bike.shift_gear(0));
        assert_eq!(bike.current_gear, 3);
    }

    #[test]
    fn motorcycle_tracks_helmet_state() {
        let mut bike = Motorcycle::new("Harley Davidson", 180.0, "Gasoline", 1200.0);
        assert!(!bike.helmet_on);
        bike.wear_helmet();
        assert!(bike.helmet_on);
        bike.remove_helmet();
        assert!(!bike.helmet_on);
    }

    #[test]
    fn trait_object_dispatches_to_concrete_travel() {
        let mut vehicles: Vec<Box<dyn Vehicle>> = vec![
            Box::new(Car::new("Honda Civic", 200.0, "Gasoline", 4)),
            Box::new(Plane::new("Airbus A320", 890.0, "Jet Fuel", 35.8)),
        ];
        let modes: Vec<MotionMode> = vehicles.iter_mut().map(|v| v.travel()).collect();
        assert_eq!(modes, [MotionMode::Driving, MotionMode::Flying]);
    }

    #[test]
    fn halt_uses_type_specific_stop() {
        let mut plane = AnyVehicle::Plane(Plane::new("Boeing 747", 920.0, "Jet Fuel", 64.4));
        plane.travel();
        assert!(plane.halt());
        match plane {
            AnyVehicle::Plane(inner) => assert!(!inner.is_flying),
            _ => unreachable!(),
        }

        let mut boat = AnyVehicle::Boat(Boat::new("Sailboat Explorer", 25.0, "Wind", 1500.0));
        boat.travel();
        assert!(boat.halt());
        match boat {
            AnyVehicle::Boat(inner) => assert!(inner.anchor_down),
            _ => unreachable!(),
        }

        let mut car = AnyVehicle::Car(Car::new("Toyota Camry", 180.0, "Gasoline", 4));
        car.travel();
        assert!(car.halt());
        assert!(!car.chassis().is_moving);
    }

    #[test]
    fn motion_mode_tags_match_reported_strings() {
        assert_eq!(MotionMode::Driving.to_string(), "Driving");
        assert_eq!(MotionMode::Flying.to_string(), "Flying");
        assert_eq!(MotionMode::Sailing.to_string(), "Sailing");
        assert_eq!(MotionMode::Pedaling.to_string(), "Pedaling");
        assert_eq!(MotionMode::Riding.to_string(), "Riding");
    }
}
