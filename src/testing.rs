use itertools::Itertools;
use proptest::{
    collection::{hash_set, vec},
    prelude::*,
    sample::SizeRange,
};

use crate::values::{Character, Course};

/// Generates courses with pairwise-distinct course numbers.
pub fn courses(size: impl Into<SizeRange>) -> impl Strategy<Value = Vec<Course>> {
    hash_set("[A-Z]{2,4}[0-9]{3}", size).prop_map(|numbers| {
        numbers
            .into_iter()
            .map(|number| Course {
                title: format!("Course {}", number),
                number,
                prerequisites: Vec::new(),
            })
            .collect_vec()
    })
}

/// Generates characters with pairwise-distinct names.
pub fn characters(size: impl Into<SizeRange>) -> impl Strategy<Value = Vec<Character>> {
    hash_set("[A-Z][a-z]{2,10}", size).prop_flat_map(|names| {
        let stats = vec((1..500u32, 1..4000u32), names.len());
        (Just(names), stats).prop_map(|(names, stats)| {
            names
                .into_iter()
                .zip(stats)
                .map(|(name, (gun_dps, health))| Character {
                    name,
                    abilities: ["Q", "W", "E", "R"].map(String::from),
                    gun_dps,
                    bullet_damage: 14.0,
                    ammo: 22,
                    bullet_speed: 566.0,
                    light_melee: 63,
                    heavy_melee: 116,
                    health,
                    health_regen: 2.0,
                    bullet_resist: 0.0,
                    spirit_resist: 0.0,
                    move_speed: 7.3,
                    sprint_speed: 12.0,
                    stamina: 3,
                })
                .collect_vec()
        })
    })
}
