use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{info, warn};

use crate::hero::{Hero, Superhero, MAX_HEALTH};

pub const MAX_MANA: i32 = 100;
pub const DEFAULT_GADGET_USES: u32 = 3;
const SPELL_MANA_COST: i32 = 25;
const MEDITATE_MANA_GAIN: i32 = 40;
const MEDITATE_HEALTH_GAIN: i32 = 20;

/// A hero whose edge comes from finite-use gadgets.
#[derive(Debug, Clone, Serialize)]
pub struct TechHero {
    #[serde(flatten)]
    pub base: Superhero,
    /// Gadget name to remaining uses. Ordered so introductions and
    /// snapshots list gadgets deterministically.
    pub gadgets: BTreeMap<String, u32>,
}

impl TechHero {
    pub fn new(base: Superhero, gadgets: BTreeMap<String, u32>) -> Self {
        Self { base, gadgets }
    }

    /// Consumes one use of a gadget. Fails when the gadget is unknown or
    /// spent, leaving the count untouched.
    pub fn use_gadget(&mut self, gadget_name: &str) -> bool {
        match self.gadgets.get_mut(gadget_name) {
            Some(uses) if *uses > 0 => {
                *uses -= 1;
                info!(
                    target: "hero_core.gadget",
                    hero = %self.base.name,
                    gadget = gadget_name,
                    uses_remaining = *uses,
                    "gadget used"
                );
                true
            }
            _ => {
                warn!(
                    target: "hero_core.gadget",
                    hero = %self.base.name,
                    gadget = gadget_name,
                    "cannot use gadget: no uses remaining or gadget not available"
                );
                false
            }
        }
    }

    /// Adds a gadget, overwriting any previous count for the same name.
    pub fn craft_gadget(&mut self, gadget_name: &str, uses: u32) {
        self.gadgets.insert(gadget_name.to_owned(), uses);
        info!(
            target: "hero_core.gadget",
            hero = %self.base.name,
            gadget = gadget_name,
            uses,
            "gadget crafted"
        );
    }
}

impl Hero for TechHero {
    fn base(&self) -> &Superhero {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Superhero {
        &mut self.base
    }

    fn introduce(&self) -> String {
        let base_intro = self.base.introduce();
        let gadget_list = self
            .gadgets
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        format!("{base_intro} I'm a tech hero with gadgets: {gadget_list}")
    }
}

/// A hero casting from a mana pool instead of the shared energy pool.
#[derive(Debug, Clone, Serialize)]
pub struct MagicHero {
    #[serde(flatten)]
    pub base: Superhero,
    /// May start above 100; meditation still clamps at 100.
    pub mana: i32,
}

impl MagicHero {
    pub fn new(base: Superhero, mana: i32) -> Self {
        Self { base, mana }
    }

    /// Restores up to 40 mana and 20 health, clamped at 100 each.
    pub fn meditate(&mut self) {
        self.mana = MAX_MANA.min(self.mana + MEDITATE_MANA_GAIN);
        self.base.health = MAX_HEALTH.min(self.base.health + MEDITATE_HEALTH_GAIN);
        info!(
            target: "hero_core.magic",
            hero = %self.base.name,
            mana = self.mana,
            health = self.base.health,
            "meditated"
        );
    }
}

impl Hero for MagicHero {
    fn base(&self) -> &Superhero {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Superhero {
        &mut self.base
    }

    /// Casting spends 25 mana and never touches the energy pool.
    fn use_power(&mut self, power_name: &str) -> bool {
        if self.base.has_power(power_name) && self.mana >= SPELL_MANA_COST {
            self.mana -= SPELL_MANA_COST;
            info!(
                target: "hero_core.magic",
                hero = %self.base.name,
                spell = power_name,
                mana = self.mana,
                "spell cast"
            );
            true
        } else {
            warn!(
                target: "hero_core.magic",
                hero = %self.base.name,
                spell = power_name,
                mana = self.mana,
                "cannot cast: not enough mana or spell not available"
            );
            false
        }
    }

    fn introduce(&self) -> String {
        let base_intro = self.base.introduce();
        format!("{base_intro} I wield ancient magic with {} mana.", self.mana)
    }
}
