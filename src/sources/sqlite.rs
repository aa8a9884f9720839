use std::path::Path;

use log::warn;
use rusqlite::{Connection, Row};

use crate::{prelude::*, sources::LoadReport, values::Character};

/// The schema the capstone database ships with.
const CREATE_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS Characters (
    Name TEXT PRIMARY KEY,
    Ability1 TEXT, Ability2 TEXT, Ability3 TEXT, Ability4 TEXT,
    DPS REAL, BulletDMG REAL, Ammo INTEGER, BulletPS REAL,
    LightMelee INTEGER, HeavyMelee INTEGER,
    MaxHealth INTEGER, HealthRegen REAL, BulletResist REAL, SpiritResist REAL,
    MoveSpeed REAL, SprintSpeed REAL, Stamina INTEGER
);";

const SELECT_ALL: &str = "\
SELECT Name, Ability1, Ability2, Ability3, Ability4,
       DPS, BulletDMG, Ammo, BulletPS, LightMelee, HeavyMelee,
       MaxHealth, HealthRegen, BulletResist, SpiritResist,
       MoveSpeed, SprintSpeed, Stamina
FROM Characters;";

/// Creates the `Characters` table when the database does not have it yet.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute(CREATE_TABLE, [])?;
    Ok(())
}

/// Loads every character row into the store. Duplicate names are skipped
/// with a warning rather than aborting the load.
pub fn load_characters(
    conn: &Connection,
    store: &mut OrderedStore<Character>,
) -> Result<LoadReport> {
    ensure_schema(conn)?;

    let mut statement = conn.prepare(SELECT_ALL)?;
    let rows = statement.query_map([], character_from_row)?;

    let mut report = LoadReport::default();

    for row in rows {
        let character = row?;
        let name = character.name.clone();

        match store.insert(character) {
            Ok(()) => report.loaded += 1,
            Err(StoreError::DuplicateKey) => {
                warn!("skipping duplicate character {}", name);
                report.skipped += 1;
            }
            Err(error) => return Err(error.into()),
        }
    }

    Ok(report)
}

pub fn load_characters_from_path(
    path: impl AsRef<Path>,
    store: &mut OrderedStore<Character>,
) -> Result<LoadReport> {
    let conn = Connection::open(path)?;
    load_characters(&conn, store)
}

/// Columns are read positionally; numerics come out as REAL and get cast,
/// which tolerates INTEGER/REAL mismatches in hand-edited databases.
fn character_from_row(row: &Row<'_>) -> rusqlite::Result<Character> {
    Ok(Character {
        name: row.get(0)?,
        abilities: [row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?],
        gun_dps: row.get::<_, f64>(5)? as u32,
        bullet_damage: row.get::<_, f64>(6)? as f32,
        ammo: row.get::<_, f64>(7)? as u32,
        bullet_speed: row.get::<_, f64>(8)? as f32,
        light_melee: row.get::<_, f64>(9)? as u32,
        heavy_melee: row.get::<_, f64>(10)? as u32,
        health: row.get::<_, f64>(11)? as u32,
        health_regen: row.get::<_, f64>(12)? as f32,
        bullet_resist: row.get::<_, f64>(13)? as f32,
        spirit_resist: row.get::<_, f64>(14)? as f32,
        move_speed: row.get::<_, f64>(15)? as f32,
        sprint_speed: row.get::<_, f64>(16)? as f32,
        stamina: row.get::<_, f64>(17)? as u32,
    })
}
