use serde::Serialize;
use tracing::{info, warn};

pub const MAX_HEALTH: i32 = 100;
pub const MAX_ENERGY: i32 = 100;
const POWER_ENERGY_COST: i32 = 20;
const REST_HEALTH_GAIN: i32 = 30;
const REST_ENERGY_GAIN: i32 = 50;
const WEAKNESS_MULTIPLIER: i32 = 2;

/// Shared hero state and behavior. Specializations embed one of these and
/// override selected operations through the [`Hero`] trait.
#[derive(Debug, Clone, Serialize)]
pub struct Superhero {
    pub name: String,
    pub secret_identity: String,
    pub powers: Vec<String>,
    pub weakness: String,
    pub base_of_operations: String,
    pub health: i32,
    pub energy: i32,
}

impl Superhero {
    pub fn new(
        name: impl Into<String>,
        secret_identity: impl Into<String>,
        powers: Vec<String>,
        weakness: impl Into<String>,
        base_of_operations: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            secret_identity: secret_identity.into(),
            powers,
            weakness: weakness.into(),
            base_of_operations: base_of_operations.into(),
            health: MAX_HEALTH,
            energy: MAX_ENERGY,
        }
    }

    pub fn has_power(&self, power_name: &str) -> bool {
        self.powers.iter().any(|p| p == power_name)
    }

    /// Spends 20 energy on a known power. Fails without touching state when
    /// the power is unknown or energy is short.
    pub fn use_power(&mut self, power_name: &str) -> bool {
        if self.has_power(power_name) && self.energy >= POWER_ENERGY_COST {
            self.energy -= POWER_ENERGY_COST;
            info!(
                target: "hero_core.power",
                hero = %self.name,
                power = power_name,
                energy = self.energy,
                "power used"
            );
            true
        } else {
            warn!(
                target: "hero_core.power",
                hero = %self.name,
                power = power_name,
                energy = self.energy,
                "cannot use power: not enough energy or power not available"
            );
            false
        }
    }

    /// Applies damage, doubled when the type matches this hero's weakness.
    /// Health has no lower floor; a defeated hero can keep taking hits.
    pub fn take_damage(&mut self, amount: i32, damage_type: &str) {
        let amount = if damage_type == self.weakness {
            info!(
                target: "hero_core.damage",
                hero = %self.name,
                damage_type,
                "critical hit: weakness exploited"
            );
            amount * WEAKNESS_MULTIPLIER
        } else {
            amount
        };

        self.health -= amount;
        info!(
            target: "hero_core.damage",
            hero = %self.name,
            amount,
            health = self.health,
            "damage taken"
        );

        if self.health <= 0 {
            warn!(target: "hero_core.damage", hero = %self.name, "hero defeated");
        }
    }

    /// Restores up to 30 health and 50 energy, clamped at 100 each.
    pub fn rest(&mut self) {
        self.health = MAX_HEALTH.min(self.health + REST_HEALTH_GAIN);
        self.energy = MAX_ENERGY.min(self.energy + REST_ENERGY_GAIN);
        info!(
            target: "hero_core.rest",
            hero = %self.name,
            health = self.health,
            energy = self.energy,
            "rested"
        );
    }

    pub fn introduce(&self) -> String {
        format!(
            "I am {}, also known as {}. My powers include: {}",
            self.name,
            self.secret_identity,
            self.powers.join(", ")
        )
    }
}

/// Dynamic-dispatch seam for the hero hierarchy. Call sites hold
/// `&mut dyn Hero` and get specialization behavior without knowing the
/// concrete type; default methods delegate to the embedded base.
pub trait Hero {
    fn base(&self) -> &Superhero;
    fn base_mut(&mut self) -> &mut Superhero;

    fn use_power(&mut self, power_name: &str) -> bool {
        self.base_mut().use_power(power_name)
    }

    fn introduce(&self) -> String {
        self.base().introduce()
    }
}

impl Hero for Superhero {
    fn base(&self) -> &Superhero {
        self
    }

    fn base_mut(&mut self) -> &mut Superhero {
        self
    }
}
