use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use crate::{prelude::*, sources, values::Course};

/// Whether a record source has been loaded into the store yet. Query options
/// stay gated until a load succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Uninitialized,
    Loaded,
}

/// Line-oriented menu over a course catalog, generic over its input and
/// output so the loop runs against a terminal and against test buffers
/// alike.
///
/// Failures of individual commands are printed and the loop continues; only
/// I/O failures on the menu itself end the run.
pub struct CatalogShell<I, O> {
    input: I,
    output: O,
    source: PathBuf,
    store: OrderedStore<Course>,
    state: LoadState,
}

impl<I: BufRead, O: Write> CatalogShell<I, O> {
    pub fn new(input: I, output: O, source: impl Into<PathBuf>) -> Self {
        Self {
            input,
            output,
            source: source.into(),
            store: OrderedStore::new(),
            state: LoadState::Uninitialized,
        }
    }

    /// Runs the menu loop until the user exits or the input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;

            let Some(choice) = self.read_line()? else {
                return Ok(());
            };

            match choice.as_str() {
                "1" => self.load()?,
                "2" => self.display_all()?,
                "3" => self.search()?,
                "9" => {
                    writeln!(self.output, "Exiting.")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid input. Try again.")?,
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "1. Load course data")?;
        writeln!(self.output, "2. Display all courses")?;
        writeln!(self.output, "3. Search for a course")?;
        writeln!(self.output, "9. Exit")?;
        writeln!(self.output, "Enter your choice:")?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn load(&mut self) -> Result<()> {
        match sources::csv::load_courses_from_path(&self.source, &mut self.store) {
            Ok(report) => {
                self.state = LoadState::Loaded;
                writeln!(
                    self.output,
                    "Courses loaded successfully ({} loaded, {} skipped).",
                    report.loaded, report.skipped
                )?;
            }
            Err(error) => writeln!(self.output, "Error: {}", error)?,
        }
        Ok(())
    }

    fn display_all(&mut self) -> Result<()> {
        if self.state == LoadState::Uninitialized {
            writeln!(self.output, "Please load course data first.")?;
            return Ok(());
        }

        for course in self.store.iter() {
            writeln!(self.output, "{}: {}", course.number, course.title)?;
        }
        Ok(())
    }

    fn search(&mut self) -> Result<()> {
        if self.state == LoadState::Uninitialized {
            writeln!(self.output, "Please load course data first.")?;
            return Ok(());
        }

        writeln!(self.output, "Enter course number:")?;
        let Some(number) = self.read_line()? else {
            return Ok(());
        };

        let Some(course) = self.store.get(&number) else {
            writeln!(self.output, "Course not found.")?;
            return Ok(());
        };

        writeln!(self.output)?;
        writeln!(self.output, "Course Number: {}", course.number)?;
        writeln!(self.output, "Course Title: {}", course.title)?;

        if course.prerequisites.is_empty() {
            writeln!(self.output, "Prerequisites: None")?;
            return Ok(());
        }

        writeln!(self.output, "Prerequisites:")?;
        for number in &course.prerequisites {
            match self.store.get(number) {
                Some(prerequisite) => writeln!(
                    self.output,
                    "- {}: {}",
                    prerequisite.number, prerequisite.title
                )?,
                None => writeln!(self.output, "- {} (not found)", number)?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{io::Cursor, path::Path};

    use super::*;

    const CATALOG: &str = "\
CSCI200,Data Structures,CSCI100
CSCI100,Introduction to Computer Science
CSCI300,Introduction to Algorithms,CSCI200,MATH201
";

    fn catalog_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, CATALOG.as_bytes()).unwrap();
        file
    }

    fn run_script(source: &Path, script: &str) -> String {
        let mut output = Vec::new();
        CatalogShell::new(Cursor::new(script.to_string()), &mut output, source)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn queries_are_gated_until_a_load_succeeds() {
        let file = catalog_file();

        let output = run_script(file.path(), "2\n3\n9\n");

        assert_eq!(output.matches("Please load course data first.").count(), 2);
        assert!(output.contains("Exiting."));
    }

    #[test]
    fn displays_courses_in_key_order_after_loading() {
        let file = catalog_file();

        let output = run_script(file.path(), "1\n2\n9\n");

        assert!(output.contains("Courses loaded successfully (3 loaded, 0 skipped)."));
        let first = output
            .find("CSCI100: Introduction to Computer Science")
            .unwrap();
        let second = output.find("CSCI200: Data Structures").unwrap();
        let third = output.find("CSCI300: Introduction to Algorithms").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn search_resolves_prerequisites_against_the_store() {
        let file = catalog_file();

        let output = run_script(file.path(), "1\n3\nCSCI300\n9\n");

        assert!(output.contains("Course Number: CSCI300"));
        assert!(output.contains("Course Title: Introduction to Algorithms"));
        assert!(output.contains("- CSCI200: Data Structures"));
        assert!(output.contains("- MATH201 (not found)"));
    }

    #[test]
    fn courses_without_prerequisites_say_so() {
        let file = catalog_file();

        let output = run_script(file.path(), "1\n3\nCSCI100\n9\n");

        assert!(output.contains("Prerequisites: None"));
    }

    #[test]
    fn missing_courses_are_reported() {
        let file = catalog_file();

        let output = run_script(file.path(), "1\n3\nMATH999\n9\n");

        assert!(output.contains("Course not found."));
    }

    #[test]
    fn load_failures_keep_the_loop_alive() {
        let output = run_script(Path::new("no-such-file.csv"), "1\n2\n9\n");

        assert!(output.contains("Error: io error:"));
        assert!(output.contains("Please load course data first."));
        assert!(output.contains("Exiting."));
    }

    #[test]
    fn unknown_choices_reprompt() {
        let file = catalog_file();

        let output = run_script(file.path(), "7\n9\n");

        assert!(output.contains("Invalid input. Try again."));
    }

    #[test]
    fn end_of_input_ends_the_loop() {
        let file = catalog_file();

        let output = run_script(file.path(), "");

        assert!(output.contains("Enter your choice:"));
    }
}
