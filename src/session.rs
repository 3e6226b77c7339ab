//! Interactive sessions driving the roster and the profile builder

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::console::Console;
use crate::error::{ClassbookError, Result};
use crate::profile::{self, Profile};
use crate::roster::{GradeEntryOutcome, Roster, GRADE_MAX, GRADE_MIN};

/// Main menu options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddStudent,
    AddGrades,
    Report,
    TopPerformer,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = ClassbookError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let number: i64 = trimmed
            .parse()
            .map_err(|_| ClassbookError::invalid_number(trimmed))?;

        match number {
            1 => Ok(MenuChoice::AddStudent),
            2 => Ok(MenuChoice::AddGrades),
            3 => Ok(MenuChoice::Report),
            4 => Ok(MenuChoice::TopPerformer),
            5 => Ok(MenuChoice::Exit),
            other => Err(ClassbookError::InvalidChoice(other)),
        }
    }
}

const MENU: &str = "\n--- Student Grade Analyzer ---\n\
1. Add a new student\n\
2. Add grades for a student\n\
3. Generate a full report\n\
4. Find the top student\n\
5. Exit program";

const INVALID_MENU_INPUT: &str = "You typed an invalid choice. Please try again.";
const INVALID_GRADE_INPUT: &str = "Invalid grade. Try again.";

/// Menu loop over a roster
pub struct GradeSession<R, W> {
    console: Console<R, W>,
    roster: Roster,
}

impl<R: BufRead, W: Write> GradeSession<R, W> {
    pub fn new(console: Console<R, W>) -> Self {
        Self {
            console,
            roster: Roster::new(),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn into_parts(self) -> (Roster, Console<R, W>) {
        (self.roster, self.console)
    }

    /// Run until the exit option is chosen or input ends
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("Grade analyzer session started");

        loop {
            self.console.say(MENU)?;
            self.console.say("-".repeat(35))?;

            let Some(line) = self.console.prompt("Enter your choice: ")? else {
                tracing::info!("Input closed, leaving grade analyzer");
                break;
            };

            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(e) => {
                    tracing::warn!("Rejected menu input '{}'", line.trim());
                    match e {
                        ClassbookError::InvalidNumber(_) => self.console.say(INVALID_MENU_INPUT)?,
                        other => self.console.say(other.to_string())?,
                    }
                    continue;
                }
            };

            tracing::debug!("Menu choice: {:?}", choice);
            match choice {
                MenuChoice::AddStudent => self.add_student()?,
                MenuChoice::AddGrades => self.add_grades()?,
                MenuChoice::Report => self.show_report()?,
                MenuChoice::TopPerformer => self.show_top_performer()?,
                MenuChoice::Exit => {
                    self.console
                        .say("Thank you for using Student Grade Analyzer. Goodbye!")?;
                    break;
                }
            }
        }

        tracing::info!("Grade analyzer session ended with {} students", self.roster.len());
        Ok(())
    }

    fn add_student(&mut self) -> Result<()> {
        let Some(name) = self.console.prompt("Please enter student's name: ")? else {
            return Ok(());
        };

        match self.roster.add_student(&name) {
            Ok(student) => {
                let message = format!("Student '{}' added successfully!", student.name());
                self.console.say(message)
            }
            Err(e) if e.is_recoverable() => self.console.say(e.to_string()),
            Err(e) => Err(e),
        }
    }

    fn add_grades(&mut self) -> Result<()> {
        let Some(name) = self.console.prompt("Please enter student's name: ")? else {
            return Ok(());
        };

        let mut entry = match self.roster.begin_grade_entry(&name) {
            Ok(entry) => entry,
            Err(e) if e.is_recoverable() => return self.console.say(e.to_string()),
            Err(e) => return Err(e),
        };

        self.console.say(format!(
            "Student '{}' found. Enter grades ({}-{}). Type 'done' to finish.",
            entry.student_name(),
            GRADE_MIN,
            GRADE_MAX
        ))?;

        while !entry.is_finished() {
            let Some(token) = self.console.prompt("Please enter grade: ")? else {
                entry.finish();
                break;
            };

            match entry.feed(&token) {
                GradeEntryOutcome::Added(grade) => {
                    self.console.say(format!("Grade {} added successfully!", grade))?
                }
                GradeEntryOutcome::Rejected(ClassbookError::InvalidNumber(_)) => {
                    self.console.say(INVALID_GRADE_INPUT)?
                }
                GradeEntryOutcome::Rejected(e) => self.console.say(e.to_string())?,
                GradeEntryOutcome::Finished => self.console.say("Grade entry completed.")?,
                GradeEntryOutcome::Ignored => {}
            }
        }
        Ok(())
    }

    fn show_report(&mut self) -> Result<()> {
        self.console.say("\n--- Student Report ---")?;
        match self.roster.report() {
            Ok(report) => self.console.say(report.to_string()),
            Err(e) if e.is_recoverable() => self.console.say(e.to_string()),
            Err(e) => Err(e),
        }
    }

    fn show_top_performer(&mut self) -> Result<()> {
        match self.roster.top_performer() {
            Ok(top) => self.console.say(top.to_string()),
            Err(e) if e.is_recoverable() => self.console.say(e.to_string()),
            Err(e) => Err(e),
        }
    }
}

/// Prompts for name, birth year and hobbies, then prints a profile card
pub struct ProfileSession<R, W> {
    console: Console<R, W>,
    reference_year: i32,
}

impl<R: BufRead, W: Write> ProfileSession<R, W> {
    pub fn new(console: Console<R, W>, reference_year: i32) -> Self {
        Self {
            console,
            reference_year,
        }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Run the questionnaire; `None` if input ends before a birth year is known
    pub fn run(&mut self) -> Result<Option<Profile>> {
        tracing::info!("Profile session started (reference year {})", self.reference_year);
        self.console
            .say("Hello! Please enter a little information about yourself")?;

        let Some(name) = self.console.prompt("Enter your full name: ")? else {
            return Ok(None);
        };

        let birth_year = loop {
            let Some(line) = self.console.prompt("Enter your year of birth: ")? else {
                return Ok(None);
            };
            match profile::parse_birth_year(&line, self.reference_year) {
                Ok(year) => break year,
                Err(e) => {
                    tracing::warn!("Rejected birth year input '{}'", line.trim());
                    self.console.say(e.to_string())?;
                }
            }
        };

        let mut hobbies = Vec::new();
        while let Some(line) = self
            .console
            .prompt("Enter a favorite hobby or type 'stop' to finish: ")?
        {
            if profile::is_stop_token(&line) {
                break;
            }
            let hobby = line.trim();
            if !hobby.is_empty() {
                hobbies.push(hobby.to_string());
            }
        }

        let profile = Profile::new(&name, birth_year, self.reference_year, hobbies)?;
        tracing::debug!("Built profile: age {}, stage {}", profile.age, profile.stage);
        self.console.say(profile.to_string())?;
        Ok(Some(profile))
    }
}
