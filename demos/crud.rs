//! End-to-end CRUD walkthrough over an in-memory character database:
//! seed, load into the store, search, update, delete, export the report.
//!
//! Run with `cargo run --example crud`.

use rusqlite::{params, Connection};

use orchard::{prelude::*, report, sources::sqlite, values::Character};

fn seed(conn: &Connection) -> Result<()> {
    sqlite::ensure_schema(conn)?;

    let characters: [(&str, u32, u32); 3] = [
        ("Pocket", 250, 550),
        ("Yamato", 125, 700),
        ("Abrams", 80, 900),
    ];

    for (name, dps, health) in characters {
        conn.execute(
            "INSERT INTO Characters VALUES (?1, 'Q', 'W', 'E', 'R', ?2, 14.0, 22, \
             566.0, 63, 116, ?3, 2.0, 0.0, 0.0, 7.3, 12.0, 3)",
            params![name, dps, health],
        )?;
    }

    Ok(())
}

fn display(store: &OrderedStore<Character>) {
    for character in store.iter() {
        println!(
            "Character: {} | Gun DPS: {} | Health: {}",
            character.name, character.gun_dps, character.health
        );
    }
}

fn main() -> Result<()> {
    let conn = Connection::open_in_memory()?;
    seed(&conn)?;

    let mut store = OrderedStore::new();
    let report_tally = sqlite::load_characters(&conn, &mut store)?;

    println!("=== All Characters ({} loaded) ===", report_tally.loaded);
    display(&store);

    println!("\n=== Search Result ===");
    let name = "Pocket".to_string();
    match store.get(&name) {
        Some(found) => println!(
            "Found {} | Gun DPS: {} | Health: {}",
            found.name, found.gun_dps, found.health
        ),
        None => println!("Character not found!"),
    }

    println!("\n=== Update Pocket ===");
    if let Some(found) = store.get(&name) {
        let mut updated = found.clone();
        updated.health = 2000;
        store.update(&name, updated)?;
        println!("updated: {}", name);
    }

    println!("\n=== Delete Yamato ===");
    store.remove(&"Yamato".to_string())?;
    println!("removed: Yamato");

    println!("\n=== Characters After Deletion ===");
    display(&store);

    let path = std::env::temp_dir().join("character_report.html");
    report::write_report(&store, "Character Database Report", &path)?;
    println!("\nHTML report generated: {}", path.display());

    Ok(())
}
