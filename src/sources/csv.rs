use std::{fs::File, io::Read, path::Path};

use csv::{ReaderBuilder, StringRecord};
use log::warn;

use crate::{prelude::*, sources::LoadReport, values::Course};

/// Loads a headerless course catalog: field 0 is the course number, field 1
/// the title, every remaining field a prerequisite course number.
///
/// Rows that cannot produce a course and rows whose key is already present
/// are skipped with a warning; a bad row never aborts the load.
pub fn load_courses<R: Read>(input: R, store: &mut OrderedStore<Course>) -> Result<LoadReport> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut report = LoadReport::default();

    for row in reader.records() {
        let row = match row {
            Ok(row) => row,
            Err(error) => {
                warn!("skipping unreadable row: {}", error);
                report.skipped += 1;
                continue;
            }
        };

        let Some(course) = course_from_row(&row) else {
            warn!("skipping malformed row: {:?}", row);
            report.skipped += 1;
            continue;
        };

        let number = course.number.clone();
        match store.insert(course) {
            Ok(()) => report.loaded += 1,
            Err(StoreError::DuplicateKey) => {
                warn!("skipping duplicate course {}", number);
                report.skipped += 1;
            }
            Err(error) => return Err(error.into()),
        }
    }

    Ok(report)
}

pub fn load_courses_from_path(
    path: impl AsRef<Path>,
    store: &mut OrderedStore<Course>,
) -> Result<LoadReport> {
    let file = File::open(path)?;
    load_courses(file, store)
}

fn course_from_row(row: &StringRecord) -> Option<Course> {
    let number = row.get(0)?.trim();
    let title = row.get(1)?.trim();
    if number.is_empty() {
        return None;
    }

    let prerequisites = row
        .iter()
        .skip(2)
        .map(|field| field.trim().to_string())
        .filter(|field| !field.is_empty())
        .collect();

    Some(Course {
        number: number.to_string(),
        title: title.to_string(),
        prerequisites,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use proptest::prelude::*;

    use super::*;
    use crate::testing;

    const CATALOG: &str = "\
CSCI300,Introduction to Algorithms,CSCI200,MATH201
CSCI100,Introduction to Computer Science
CSCI200,Data Structures,CSCI100
CSCI300,Duplicate Row,CSCI100
";

    #[test]
    fn loads_courses_and_skips_duplicates() {
        let mut store = OrderedStore::new();

        let report = load_courses(CATALOG.as_bytes(), &mut store).unwrap();

        assert_eq!(
            report,
            LoadReport {
                loaded: 3,
                skipped: 1
            }
        );
        assert_eq!(
            store
                .iter()
                .map(|course| course.number.as_str())
                .collect::<Vec<_>>(),
            vec!["CSCI100", "CSCI200", "CSCI300"]
        );

        // The duplicate row never replaced the original payload.
        let algorithms = store.get(&"CSCI300".to_string()).unwrap();
        assert_eq!(algorithms.title, "Introduction to Algorithms");
        assert_eq!(algorithms.prerequisites, vec!["CSCI200", "MATH201"]);
    }

    #[test]
    fn rows_without_a_title_are_skipped() {
        let mut store = OrderedStore::new();

        let report = load_courses("CSCI100\n".as_bytes(), &mut store).unwrap();

        assert_eq!(
            report,
            LoadReport {
                loaded: 0,
                skipped: 1
            }
        );
        assert!(store.is_empty());
    }

    #[test]
    fn loads_from_a_file_on_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "CSCI100,Introduction to Computer Science").unwrap();

        let mut store = OrderedStore::new();
        let report = load_courses_from_path(file.path(), &mut store).unwrap();

        assert_eq!(report.loaded, 1);
        assert!(store.contains(&"CSCI100".to_string()));
    }

    #[test_strategy::proptest(fork = false)]
    fn loads_whatever_the_catalog_lists(
        #[strategy(testing::courses(0..24))] courses: Vec<Course>,
    ) {
        let mut text = String::new();
        for course in &courses {
            text.push_str(&format!("{},{}\n", course.number, course.title));
        }

        let mut store = OrderedStore::new();
        let report = load_courses(text.as_bytes(), &mut store)?;

        prop_assert_eq!(report.loaded, courses.len());
        prop_assert_eq!(report.skipped, 0);
        for course in &courses {
            prop_assert_eq!(store.get(course.key()), Some(course));
        }
    }

    #[test]
    fn missing_files_are_reported() {
        let mut store = OrderedStore::new();

        let result = load_courses_from_path("no-such-catalog.csv", &mut store);

        assert!(matches!(result, Err(Error::Io(_))));
    }
}
