//! Scripted demonstration of the hero hierarchy. The sequence is fixed and
//! fully deterministic so the regression crate can snapshot its outcome.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::hero::{Hero, Superhero};
use crate::specialists::{MagicHero, TechHero};

/// Transcript lines plus the final state of every hero in the script.
#[derive(Debug, Clone, Serialize)]
pub struct ShowcaseOutcome {
    pub transcript: Vec<String>,
    pub roster: Vec<HeroSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroSnapshot {
    pub name: String,
    pub health: i32,
    pub energy: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mana: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gadgets: Option<BTreeMap<String, u32>>,
}

impl HeroSnapshot {
    fn of_base(hero: &Superhero) -> Self {
        Self {
            name: hero.name.clone(),
            health: hero.health,
            energy: hero.energy,
            mana: None,
            gadgets: None,
        }
    }

    fn of_tech(hero: &TechHero) -> Self {
        Self {
            gadgets: Some(hero.gadgets.clone()),
            ..Self::of_base(&hero.base)
        }
    }

    fn of_magic(hero: &MagicHero) -> Self {
        Self {
            mana: Some(hero.mana),
            ..Self::of_base(&hero.base)
        }
    }
}

/// Runs the scripted hero demo: a polymorphic pass over the roster, each
/// hero's special abilities, then a weakness-exploitation round.
pub fn run() -> ShowcaseOutcome {
    let mut transcript = Vec::new();

    let mut iron_man = TechHero::new(
        Superhero::new(
            "Iron Man",
            "Tony Stark",
            vec![
                "Repulsor Blasts".into(),
                "Flight".into(),
                "Super Strength".into(),
            ],
            "EMP",
            "Stark Tower",
        ),
        BTreeMap::from([
            ("Arc Reactor".to_owned(), 5),
            ("Jarvis AI".to_owned(), 10),
            ("Missiles".to_owned(), 3),
        ]),
    );

    let mut doctor_strange = MagicHero::new(
        Superhero::new(
            "Doctor Strange",
            "Stephen Strange",
            vec![
                "Mystic Arts".into(),
                "Portal Creation".into(),
                "Time Manipulation".into(),
            ],
            "Dark Magic",
            "Sanctum Sanctorum",
        ),
        150,
    );

    let mut captain_america = Superhero::new(
        "Captain America",
        "Steve Rogers",
        vec![
            "Super Strength".into(),
            "Enhanced Agility".into(),
            "Shield Mastery".into(),
        ],
        "Psychological Warfare",
        "Avengers Tower",
    );

    transcript.push("=== Superhero Universe Demo ===".to_owned());

    // Same calls on every roster entry; the trait picks the behavior.
    let roster: [&mut dyn Hero; 3] = [&mut iron_man, &mut doctor_strange, &mut captain_america];
    for hero in roster {
        transcript.push(hero.introduce());
        let first_power = hero.base().powers[0].clone();
        let used = hero.use_power(&first_power);
        transcript.push(format!(
            "{} attempts {first_power}: {}",
            hero.base().name,
            if used { "success" } else { "failure" }
        ));
        hero.base_mut().take_damage(25, "Random Attack");
        transcript.push(format!(
            "{} takes a random hit, health now {}",
            hero.base().name,
            hero.base().health
        ));
    }

    transcript.push("=== Special Abilities ===".to_owned());
    iron_man.use_gadget("Missiles");
    iron_man.craft_gadget("New Gauntlet", 2);
    transcript.push(format!(
        "Iron Man gadget bag: {}",
        iron_man
            .gadgets
            .iter()
            .map(|(name, uses)| format!("{name} x{uses}"))
            .collect::<Vec<_>>()
            .join(", ")
    ));

    doctor_strange.meditate();
    doctor_strange.use_power("Portal Creation");
    transcript.push(format!(
        "Doctor Strange settles at {} mana",
        doctor_strange.mana
    ));

    captain_america.rest();
    captain_america.use_power("Shield Mastery");
    transcript.push(format!(
        "Captain America finishes with health {}, energy {}",
        captain_america.health, captain_america.energy
    ));

    transcript.push("=== Weakness Exploitation ===".to_owned());
    iron_man.base.take_damage(20, "EMP");
    doctor_strange.base.take_damage(15, "Dark Magic");
    transcript.push(format!(
        "After critical hits: Iron Man health {}, Doctor Strange health {}",
        iron_man.base.health, doctor_strange.base.health
    ));

    ShowcaseOutcome {
        roster: vec![
            HeroSnapshot::of_tech(&iron_man),
            HeroSnapshot::of_magic(&doctor_strange),
            HeroSnapshot::of_base(&captain_america),
        ],
        transcript,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_is_deterministic() {
        let first = run();
        let second = run();
        assert_eq!(first.transcript, second.transcript);
    }

    #[test]
    fn script_ends_with_expected_roster_state() {
        let outcome = run();
        let names: Vec<_> = outcome.roster.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["Iron Man", "Doctor Strange", "Captain America"]);

        let iron_man = &outcome.roster[0];
        assert_eq!(iron_man.health, 35);
        assert_eq!(iron_man.energy, 80);
        let gadgets = iron_man.gadgets.as_ref().unwrap();
        assert_eq!(gadgets["Missiles"], 2);
        assert_eq!(gadgets["New Gauntlet"], 2);

        let strange = &outcome.roster[1];
        assert_eq!(strange.health, 65);
        assert_eq!(strange.mana, Some(75));
        assert_eq!(strange.energy, 100);

        let cap = &outcome.roster[2];
        assert_eq!(cap.health, 100);
        assert_eq!(cap.energy, 80);
    }
}
