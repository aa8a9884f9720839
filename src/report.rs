use std::{fmt::Write as _, fs, path::Path};

use crate::{prelude::*, values::Character};

/// A record the HTML report knows how to render: a label plus two numeric
/// metrics, the primary one feeding the bar chart.
pub trait ReportRow: Keyed {
    /// Column header of the charted metric.
    const PRIMARY: &'static str;
    /// Column header of the second metric.
    const SECONDARY: &'static str;

    fn label(&self) -> &str;
    fn primary(&self) -> f64;
    fn secondary(&self) -> f64;
}

impl ReportRow for Character {
    const PRIMARY: &'static str = "Gun DPS";
    const SECONDARY: &'static str = "Health";

    fn label(&self) -> &str {
        &self.name
    }

    fn primary(&self) -> f64 {
        self.gun_dps.into()
    }

    fn secondary(&self) -> f64 {
        self.health.into()
    }
}

const SVG_WIDTH: u32 = 1400;
const SVG_HEIGHT: u32 = 300;
const BAR_SPACING: u32 = 20;
const MAX_BAR_HEIGHT: f64 = 200.0;
const CHART_BASELINE: f64 = 250.0;

const STYLE: &str = "<style>
body { background-color: #62544a; color: #c09f7e; font-family: Arial, sans-serif; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
th { background-color: #62544a; }
.chart-bar { fill: #93a0fe; }
.chart-label { font-size: 10px; text-anchor: middle; }
.chart-value { font-size: 10px; text-anchor: middle; fill: #62544a; }
</style>
";

/// Renders the store's ordered snapshot to an HTML file at `path`.
///
/// An empty store writes nothing at all, there is no point in an empty
/// report.
pub fn write_report<R: ReportRow>(
    store: &OrderedStore<R>,
    title: &str,
    path: impl AsRef<Path>,
) -> Result<()> {
    let rows: Vec<&R> = store.iter().collect();
    if rows.is_empty() {
        return Ok(());
    }

    fs::write(path, render(title, &rows))?;

    Ok(())
}

/// Builds the report document: a table of all rows followed by an SVG bar
/// chart of the primary metric, bars scaled so the maximum reaches full
/// height, value above each bar and label below it.
pub fn render<R: ReportRow>(title: &str, rows: &[&R]) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset='UTF-8'>\n");
    let _ = writeln!(html, "<title>{}</title>", escape(title));
    html.push_str(STYLE);
    html.push_str("</head>\n<body>\n");
    let _ = writeln!(html, "<h1>{}</h1>", escape(title));

    html.push_str("<h2>Stats</h2>\n<table>\n");
    let _ = writeln!(
        html,
        "<tr><th>Name</th><th>{}</th><th>{}</th></tr>",
        R::PRIMARY,
        R::SECONDARY
    );
    for row in rows {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(row.label()),
            row.primary(),
            row.secondary()
        );
    }
    html.push_str("</table>\n");

    let _ = writeln!(html, "<h2>{} Chart</h2>", R::PRIMARY);
    let _ = writeln!(html, "<svg width='{SVG_WIDTH}' height='{SVG_HEIGHT}'>");

    let max = rows.iter().map(|row| row.primary()).fold(0.0f64, f64::max);
    if max > 0.0 {
        let count = rows.len() as u32;
        let bar_width = (SVG_WIDTH.saturating_sub(BAR_SPACING * count) / count).max(1);

        for (index, row) in rows.iter().enumerate() {
            let height = row.primary() / max * MAX_BAR_HEIGHT;
            let x = index as u32 * (bar_width + BAR_SPACING);
            let y = CHART_BASELINE - height;

            let _ = writeln!(
                html,
                "<rect x='{x}' y='{y}' width='{bar_width}' height='{height}' class='chart-bar'></rect>"
            );
            let _ = writeln!(
                html,
                "<text x='{}' y='{}' class='chart-value'>{}</text>",
                x + bar_width / 2,
                y - 5.0,
                row.primary()
            );
            let _ = writeln!(
                html,
                "<text x='{}' y='265' class='chart-label'>{}</text>",
                x + bar_width / 2,
                escape(row.label())
            );
        }
    }

    html.push_str("</svg>\n</body>\n</html>\n");

    html
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::testing;

    fn character(name: &str, gun_dps: u32, health: u32) -> Character {
        Character {
            name: name.to_string(),
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
        }
    }

    fn roster() -> OrderedStore<Character> {
        let mut store = OrderedStore::new();
        store.insert(character("Pocket", 250, 550)).unwrap();
        store.insert(character("Yamato", 125, 700)).unwrap();
        store
    }

    #[test]
    fn renders_a_table_row_per_record() {
        let store = roster();
        let rows: Vec<_> = store.iter().collect();

        let html = render("Character Database Report", &rows);

        assert!(html.contains("<h1>Character Database Report</h1>"));
        assert!(html.contains("<tr><th>Name</th><th>Gun DPS</th><th>Health</th></tr>"));
        assert!(html.contains("<tr><td>Pocket</td><td>250</td><td>550</td></tr>"));
        assert!(html.contains("<tr><td>Yamato</td><td>125</td><td>700</td></tr>"));
    }

    #[test]
    fn scales_bars_to_the_largest_primary_value() {
        let store = roster();
        let rows: Vec<_> = store.iter().collect();

        let html = render("Report", &rows);

        assert_eq!(html.matches("class='chart-bar'").count(), 2);
        // Pocket holds the maximum, so its bar is drawn at full height.
        assert!(html.contains("height='200' class='chart-bar'"));
        assert!(html.contains("height='100' class='chart-bar'"));
    }

    #[test_strategy::proptest(fork = false)]
    fn draws_one_bar_per_record(
        #[strategy(testing::characters(1..16))] characters: Vec<Character>,
    ) {
        let mut store = OrderedStore::new();
        for character in characters {
            store.insert(character)?;
        }

        let rows: Vec<_> = store.iter().collect();
        let html = render("Report", &rows);

        prop_assert_eq!(html.matches("class='chart-bar'").count(), rows.len());
    }

    #[test]
    fn escapes_markup_in_labels() {
        let mut store = OrderedStore::new();
        store.insert(character("Mirage <&>", 100, 100)).unwrap();
        let rows: Vec<_> = store.iter().collect();

        let html = render("Report", &rows);

        assert!(html.contains("Mirage &lt;&amp;&gt;"));
        assert!(!html.contains("Mirage <&>"));
    }

    #[test]
    fn empty_stores_write_no_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.html");

        write_report(&OrderedStore::<Character>::new(), "Report", &path).unwrap();

        assert!(!path.exists());
    }

    #[test]
    fn writes_the_report_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.html");

        write_report(&roster(), "Report", &path).unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("</svg>"));
    }
}
