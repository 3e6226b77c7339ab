use super::{Grade, Roster};
use crate::error::ClassbookError;

/// Token that ends grade entry, matched case-insensitively
pub const DONE_TOKEN: &str = "done";

/// Grade entry state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeEntryState {
    /// Waiting for a grade or the done token
    AwaitingGradeOrDone,
    /// Done token received, further tokens are ignored
    Finished,
}

/// Result of feeding one token to a grade entry
#[derive(Debug)]
pub enum GradeEntryOutcome {
    /// Grade appended to the student
    Added(Grade),
    /// Token rejected, nothing appended
    Rejected(ClassbookError),
    /// Done token received
    Finished,
    /// Entry already finished
    Ignored,
}

/// Grade entry for one student, fed one input token at a time
pub struct GradeEntry<'a> {
    roster: &'a mut Roster,
    name: String,
    state: GradeEntryState,
}

impl<'a> GradeEntry<'a> {
    pub(super) fn new(roster: &'a mut Roster, name: String) -> Self {
        tracing::debug!("Grade entry opened for '{}'", name);
        Self {
            roster,
            name,
            state: GradeEntryState::AwaitingGradeOrDone,
        }
    }

    pub fn student_name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> GradeEntryState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == GradeEntryState::Finished
    }

    /// Process one line of input
    pub fn feed(&mut self, token: &str) -> GradeEntryOutcome {
        if self.is_finished() {
            return GradeEntryOutcome::Ignored;
        }

        let token = token.trim();
        if token.eq_ignore_ascii_case(DONE_TOKEN) {
            self.finish();
            return GradeEntryOutcome::Finished;
        }

        let grade = match token.parse::<Grade>() {
            Ok(grade) => grade,
            Err(e) => {
                tracing::warn!("Rejected grade input '{}' for '{}': {}", token, self.name, e);
                return GradeEntryOutcome::Rejected(e);
            }
        };

        match self.roster.add_grade(&self.name, grade) {
            Ok(()) => GradeEntryOutcome::Added(grade),
            Err(e) => GradeEntryOutcome::Rejected(e),
        }
    }

    /// End entry without a done token, e.g. when input runs out
    pub fn finish(&mut self) {
        if !self.is_finished() {
            tracing::debug!("Grade entry finished for '{}'", self.name);
            self.state = GradeEntryState::Finished;
        }
    }
}
