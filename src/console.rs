//! Interactive menu over a [`Roster`].
//!
//! The menu reads whitespace-separated tokens from any [`BufRead`] and
//! writes prompts to any [`Write`], so a session can be driven from a test.
//! End of input is treated as choosing to exit, which saves the roster.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Context;
use tracing::warn;

use crate::models::Teacher;
use crate::roster::{LoadReport, Roster};

/// Token that ends the course list when adding a teacher.
pub const END_OF_COURSES: &str = "done";

const MENU: &str = "\
Staff Management System
1. Add teacher
2. Add administrator
3. Add logistics staff
4. Display all employees
5. Compute and display all pay
0. Exit";

/// Splits input into whitespace-separated tokens across lines.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD.
    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
    }
}

struct Session<'a, R, W> {
    roster: &'a mut Roster,
    input: Tokens<R>,
    out: W,
}

impl<R: BufRead, W: Write> Session<'_, R, W> {
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        self.input.next_token()
    }

    /// Prompts for an integer. Prints a message and returns `None` if the
    /// token is not a number or input has ended.
    fn prompt_number(&mut self, text: &str) -> io::Result<Option<i64>> {
        let Some(token) = self.prompt(text)? else {
            return Ok(None);
        };
        match token.parse() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                writeln!(self.out, "Invalid number: {}", token)?;
                Ok(None)
            }
        }
    }

    fn add_teacher(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("Teacher name: ")? else {
            return Ok(());
        };
        let Some(id) = self.prompt_number("Teacher ID: ")? else {
            return Ok(());
        };

        let mut teacher = Teacher::new(name, id, Default::default());
        writeln!(
            self.out,
            "Enter courses as '<course> <hours>', '{}' to finish:",
            END_OF_COURSES
        )?;
        loop {
            let Some(course) = self.input.next_token()? else {
                return Ok(());
            };
            if course == END_OF_COURSES {
                break;
            }
            let Some(hours) = self.prompt_number("")? else {
                return Ok(());
            };
            teacher.add_course(course, hours);
        }

        self.roster.push(teacher);
        Ok(())
    }

    fn add_administrator(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("Administrator name: ")? else {
            return Ok(());
        };
        let Some(id) = self.prompt_number("Administrator ID: ")? else {
            return Ok(());
        };
        let Some(position) = self.prompt("Administrator position: ")? else {
            return Ok(());
        };
        self.roster.add_administrator(name, id, position);
        Ok(())
    }

    fn add_logistics(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("Logistics staff name: ")? else {
            return Ok(());
        };
        let Some(id) = self.prompt_number("Logistics staff ID: ")? else {
            return Ok(());
        };
        let Some(days) = self.prompt_number("Working days: ")? else {
            return Ok(());
        };
        self.roster.add_logistics(name, id, days);
        Ok(())
    }

    fn show_pay(&mut self) -> io::Result<()> {
        for summary in self.roster.compute_all_pays() {
            writeln!(
                self.out,
                "Pay for {} (ID: {}): {}",
                summary.name, summary.id, summary.pay
            )?;
        }
        self.roster.display_all(&mut self.out)
    }

    fn save(&mut self, data_file: &Path) -> io::Result<()> {
        match self.roster.save(data_file) {
            Ok(count) => writeln!(
                self.out,
                "Saved {} records to {}",
                count,
                data_file.display()
            ),
            Err(err) => {
                warn!(error = %err, "Save failed");
                writeln!(self.out, "{}", err)
            }
        }
    }
}

/// Loads `data_file` into the roster and tells the operator what happened.
///
/// A missing file is the normal first-run state. Any other failure is
/// reported and the session continues with whatever was loaded.
pub fn load_at_startup<W: Write>(
    roster: &mut Roster,
    data_file: &Path,
    out: &mut W,
) -> anyhow::Result<()> {
    let written = match roster.load(data_file) {
        Ok(LoadReport::NoExistingData) => writeln!(
            out,
            "No existing data in {}; it will be created on exit.",
            data_file.display()
        ),
        Ok(LoadReport::Loaded { records, .. }) => writeln!(
            out,
            "Loaded {} records from {}",
            records,
            data_file.display()
        ),
        Err(err) => writeln!(out, "{}", err),
    };
    written.context("failed to write to console")
}

/// Runs the menu until the operator exits or input ends, then saves the
/// roster to `data_file`.
///
/// Save failures are reported to the operator, not returned. The only
/// errors returned are failures to read input or write output; the roster
/// is saved before such an error is returned.
pub fn run<R: BufRead, W: Write>(
    roster: &mut Roster,
    input: R,
    output: W,
    data_file: &Path,
) -> anyhow::Result<()> {
    let mut session = Session {
        roster,
        input: Tokens::new(input),
        out: output,
    };

    let outcome = session.menu_loop();
    if let Err(err) = &outcome {
        warn!(error = %err, "Console session aborted, saving roster");
    }
    // Save runs even when the menu loop failed.
    let reported = session.save(data_file);
    outcome?;
    reported.context("failed to report save")
}

impl<R: BufRead, W: Write> Session<'_, R, W> {
    /// Runs menu choices until the operator exits or input ends.
    fn menu_loop(&mut self) -> anyhow::Result<()> {
        loop {
            writeln!(self.out, "\n{}", MENU).context("failed to write menu")?;
            let choice = self
                .prompt("Enter your choice: ")
                .context("failed to read menu choice")?;

            let result = match choice.as_deref().map(str::parse::<u32>) {
                None | Some(Ok(0)) => {
                    writeln!(self.out, "Exiting.").context("failed to write to console")?;
                    return Ok(());
                }
                Some(Ok(1)) => self.add_teacher(),
                Some(Ok(2)) => self.add_administrator(),
                Some(Ok(3)) => self.add_logistics(),
                Some(Ok(4)) => self.roster.display_all(&mut self.out),
                Some(Ok(5)) => self.show_pay(),
                Some(_) => writeln!(self.out, "Invalid choice, please try again."),
            };
            result.context("console I/O failed")?;
        }
    }
}
