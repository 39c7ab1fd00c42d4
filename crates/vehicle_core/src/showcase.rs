//! Scripted fleet demonstration. Accelerate amounts come from a seeded RNG
//! so a run is reproducible from its seed alone.

use std::ops::RangeInclusive;

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;
use tracing::info;

use crate::fleet::{AnyVehicle, Bicycle, Boat, Car, MotionMode, Motorcycle, Plane, Vehicle};

pub const DEFAULT_SEED: u64 = 42;
const ACCELERATE_RANGE: RangeInclusive<u32> = 20..=50;

/// Seeded RNG that remembers its seed, so outcomes can report how to
/// reproduce themselves.
#[derive(Debug)]
pub struct ShowcaseRng {
    seed: u64,
    rng: StdRng,
}

impl ShowcaseRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn gen_range(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.rng.gen_range(range)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ShowcaseOutcome {
    pub seed: u64,
    pub transcript: Vec<String>,
    pub fleet: Vec<FleetSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FleetSnapshot {
    pub name: String,
    pub mode: MotionMode,
    pub final_speed: f32,
    pub is_moving: bool,
}

/// Runs the scripted fleet demo: every vehicle travels, accelerates by a
/// seeded amount, travels again, halts its own way, then shows one unique
/// feature; a final pass compares two vehicles through `dyn Vehicle`.
pub fn run(seed: u64) -> ShowcaseOutcome {
    let mut rng = ShowcaseRng::new(seed);
    let mut transcript = Vec::new();
    let mut fleet_state = Vec::new();

    transcript.push("=== Vehicle Movement Demo ===".to_owned());

    let mut fleet = vec![
        AnyVehicle::Car(Car::new("Toyota Camry", 180.0, "Gasoline", 4)),
        AnyVehicle::Plane(Plane::new("Boeing 747", 920.0, "Jet Fuel", 64.4)),
        AnyVehicle::Boat(Boat::new("Sailboat Explorer", 25.0, "Wind", 1500.0)),
        AnyVehicle::Bicycle(Bicycle::new("Mountain Bike", 40.0, 21)),
        AnyVehicle::Motorcycle(Motorcycle::new("Harley Davidson", 180.0, "Gasoline", 1200.0)),
    ];

    for vehicle in &mut fleet {
        transcript.push(format!(
            "Testing: {} ({} days old)",
            vehicle.chassis().describe(),
            vehicle.chassis().age_days()
        ));

        let mode = vehicle.travel();
        transcript.push(format!("Movement type: {mode}"));

        let boost = rng.gen_range(ACCELERATE_RANGE);
        vehicle.chassis_mut().accelerate(boost as f32);
        transcript.push(format!(
            "Accelerated by {boost} to {} km/h",
            vehicle.chassis().current_speed
        ));
        vehicle.travel();

        let final_speed = vehicle.chassis().current_speed;
        vehicle.halt();

        // Each type shows one feature the others lack.
        match vehicle {
            AnyVehicle::Car(car) => {
                car.change_gear("D");
                transcript.push(format!("{} is in gear {}", car.chassis.name, car.gear));
            }
            AnyVehicle::Bicycle(bike) => {
                bike.shift_gear(3);
                transcript.push(format!(
                    "{} is in gear {} of {}",
                    bike.chassis.name, bike.current_gear, bike.gears
                ));
            }
            AnyVehicle::Motorcycle(moto) => {
                moto.wear_helmet();
                transcript.push(format!(
                    "{} rider helmet on: {}",
                    moto.chassis.name, moto.helmet_on
                ));
            }
            _ => {}
        }

        fleet_state.push(FleetSnapshot {
            name: vehicle.chassis().name.clone(),
            mode,
            final_speed,
            is_moving: vehicle.chassis().is_moving,
        });
    }

    transcript.push("All vehicles demonstrated their movement styles".to_owned());

    // Same call site, two behaviors: dispatch through the trait object.
    transcript.push("=== Movement Comparison ===".to_owned());
    let mut pair: Vec<Box<dyn Vehicle>> = vec![
        Box::new(Car::new("Honda Civic", 200.0, "Gasoline", 4)),
        Box::new(Plane::new("Airbus A320", 890.0, "Jet Fuel", 35.8)),
    ];
    for vehicle in &mut pair {
        let mode = vehicle.travel();
        transcript.push(format!("{} movement: {mode}", vehicle.chassis().name));
    }

    info!(
        target: "vehicle_core.showcase",
        seed,
        vehicles = fleet_state.len(),
        "fleet showcase complete"
    );

    ShowcaseOutcome {
        seed,
        transcript,
        fleet: fleet_state,
    }
}
