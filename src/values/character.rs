use proptest::prelude::*;

use crate::prelude::*;

/// A playable character's stat sheet, ordered and looked up by name.
///
/// The store never interprets any of these fields; they only travel through
/// it and surface in the HTML report.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub name: String,
    pub abilities: [String; 4],
    pub gun_dps: u32,
    pub bullet_damage: f32,
    pub ammo: u32,
    pub bullet_speed: f32,
    pub light_melee: u32,
    pub heavy_melee: u32,
    pub health: u32,
    pub health_regen: f32,
    pub bullet_resist: f32,
    pub spirit_resist: f32,
    pub move_speed: f32,
    pub sprint_speed: f32,
    pub stamina: u32,
}

impl Keyed for Character {
    type Key = String;

    fn key(&self) -> &String {
        &self.name
    }
}

impl Arbitrary for Character {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            ("[A-Z][a-z]{2,10}", any::<[String; 4]>()),
            (0..500u32, 0.0..200.0f32, 0..60u32, 0.0..1000.0f32),
            (0..200u32, 0..300u32, 1..4000u32, 0.0..20.0f32),
            (0.0..1.0f32, 0.0..1.0f32, 0.0..12.0f32, 0.0..16.0f32, 0..6u32),
        )
            .prop_map(
                |(
                    (name, abilities),
                    (gun_dps, bullet_damage, ammo, bullet_speed),
                    (light_melee, heavy_melee, health, health_regen),
                    (bullet_resist, spirit_resist, move_speed, sprint_speed, stamina),
                )| {
                    Self {
                        name,
                        abilities,
                        gun_dps,
                        bullet_damage,
                        ammo,
                        bullet_speed,
                        light_melee,
                        heavy_melee,
                        health,
                        health_regen,
                        bullet_resist,
                        spirit_resist,
                        move_speed,
                        sprint_speed,
                        stamina,
                    }
                },
            )
            .boxed()
    }
}
