//! In-memory student roster
//!
//! Students are kept in insertion order and looked up by exact (trimmed)
//! name with a linear scan. Grades are only ever appended.

use std::fmt;
use std::str::FromStr;

use crate::error::{ClassbookError, Result};

pub mod entry;

pub use entry::{GradeEntry, GradeEntryOutcome, GradeEntryState};

/// Lowest accepted grade
pub const GRADE_MIN: i64 = 0;
/// Highest accepted grade
pub const GRADE_MAX: i64 = 100;

/// A single grade, always within `GRADE_MIN..=GRADE_MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Grade(u8);

impl Grade {
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Grade {
    type Error = ClassbookError;

    fn try_from(value: i64) -> Result<Self> {
        if (GRADE_MIN..=GRADE_MAX).contains(&value) {
            Ok(Grade(value as u8))
        } else {
            Err(ClassbookError::OutOfRange(value))
        }
    }
}

impl FromStr for Grade {
    type Err = ClassbookError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| ClassbookError::invalid_number(trimmed))?;
        Grade::try_from(value)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A student and the grades recorded for them so far
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    name: String,
    grades: Vec<Grade>,
}

impl Student {
    fn new(name: String) -> Self {
        Self {
            name,
            grades: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    /// Arithmetic mean of the recorded grades, `None` when there are none
    pub fn average(&self) -> Option<f64> {
        if self.grades.is_empty() {
            return None;
        }
        let sum: u32 = self.grades.iter().map(|g| u32::from(g.value())).sum();
        Some(f64::from(sum) / self.grades.len() as f64)
    }
}

/// Per-student line of a report
#[derive(Debug, Clone, PartialEq)]
pub struct StudentAverage {
    pub name: String,
    pub average: Option<f64>,
}

/// Report over the whole roster
///
/// Aggregates only consider students with at least one grade. The overall
/// average is the mean of per-student averages, not a pooled mean of every
/// grade.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterReport {
    pub entries: Vec<StudentAverage>,
    pub max_average: f64,
    pub min_average: f64,
    pub overall_average: f64,
}

impl fmt::Display for RosterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            match entry.average {
                Some(average) => {
                    writeln!(f, "{}'s average grade is {:.1}.", entry.name, average)?
                }
                None => writeln!(f, "{}'s average grade is N/A.", entry.name)?,
            }
        }
        writeln!(f, "---")?;
        writeln!(f, "Max Average: {:.1}", self.max_average)?;
        writeln!(f, "Min Average: {:.1}", self.min_average)?;
        write!(f, "Overall Average: {:.1}", self.overall_average)
    }
}

/// Student with the highest average
#[derive(Debug, Clone, PartialEq)]
pub struct TopPerformer {
    pub name: String,
    pub average: f64,
}

impl fmt::Display for TopPerformer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Top performer: {} with average grade: {:.1}",
            self.name, self.average
        )
    }
}

/// Ordered collection of students with unique names
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Find a student by exact name; surrounding whitespace is ignored
    pub fn get(&self, name: &str) -> Option<&Student> {
        self.position(name).map(|idx| &self.students[idx])
    }

    fn position(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.students.iter().position(|s| s.name == name)
    }

    /// Add a student with no grades
    pub fn add_student(&mut self, name: &str) -> Result<&Student> {
        let name = name.trim();
        if self.position(name).is_some() {
            tracing::warn!("Rejected duplicate student name: {}", name);
            return Err(ClassbookError::DuplicateName(name.to_string()));
        }

        self.students.push(Student::new(name.to_string()));
        tracing::debug!("Added student '{}' ({} on roster)", name, self.students.len());
        Ok(&self.students[self.students.len() - 1])
    }

    /// Append a grade to an existing student
    pub fn add_grade(&mut self, name: &str, grade: Grade) -> Result<()> {
        let idx = self
            .position(name)
            .ok_or_else(|| ClassbookError::NotFound(name.trim().to_string()))?;

        let student = &mut self.students[idx];
        student.grades.push(grade);
        tracing::debug!(
            "Added grade {} for '{}' ({} grades)",
            grade,
            student.name,
            student.grades.len()
        );
        Ok(())
    }

    /// Open a grade entry for an existing student
    pub fn begin_grade_entry(&mut self, name: &str) -> Result<GradeEntry<'_>> {
        let name = name.trim();
        if self.position(name).is_none() {
            return Err(ClassbookError::NotFound(name.to_string()));
        }
        Ok(GradeEntry::new(self, name.to_string()))
    }

    /// Averages for every student plus max, min and overall average
    pub fn report(&self) -> Result<RosterReport> {
        let entries: Vec<StudentAverage> = self
            .students
            .iter()
            .map(|s| StudentAverage {
                name: s.name.clone(),
                average: s.average(),
            })
            .collect();

        let averages: Vec<f64> = entries.iter().filter_map(|e| e.average).collect();
        if averages.is_empty() {
            return Err(ClassbookError::EmptyAggregate);
        }

        let max_average = averages.iter().copied().fold(f64::MIN, f64::max);
        let min_average = averages.iter().copied().fold(f64::MAX, f64::min);
        let overall_average = averages.iter().sum::<f64>() / averages.len() as f64;

        Ok(RosterReport {
            entries,
            max_average,
            min_average,
            overall_average,
        })
    }

    /// Student with the highest average; ties go to the earliest added
    pub fn top_performer(&self) -> Result<TopPerformer> {
        let mut best: Option<(&Student, f64)> = None;
        for student in &self.students {
            let Some(average) = student.average() else {
                continue;
            };
            match best {
                Some((_, best_average)) if average <= best_average => {}
                _ => best = Some((student, average)),
            }
        }

        best.map(|(student, average)| TopPerformer {
            name: student.name.clone(),
            average,
        })
        .ok_or(ClassbookError::EmptyAggregate)
    }
}
