use std::io::Cursor;

use classbook::console::Console;
use classbook::roster::{Grade, GradeEntryOutcome, Roster};
use classbook::session::GradeSession;
use classbook::ClassbookError;

fn grade(value: i64) -> Grade {
    Grade::try_from(value).unwrap()
}

#[test]
fn test_duplicate_name_keeps_single_entry() {
    let mut roster = Roster::new();
    assert!(roster.add_student("Grace").is_ok());

    let second = roster.add_student("  Grace\t");
    assert!(matches!(second, Err(ClassbookError::DuplicateName(_))));
    assert_eq!(roster.len(), 1);
}

#[test]
fn test_add_grade_to_unknown_student_leaves_roster_untouched() {
    let mut roster = Roster::new();
    roster.add_student("Grace").unwrap();
    roster.add_grade("Grace", grade(64)).unwrap();
    let before = roster.students().to_vec();

    assert!(roster.add_grade("Alan", grade(99)).is_err());
    assert!(roster.begin_grade_entry("Alan").is_err());
    assert_eq!(roster.students(), before.as_slice());
}

#[test]
fn test_report_average_matches_arithmetic_mean() {
    let sequences: [&[i64]; 4] = [&[100], &[0, 100], &[67, 68, 70], &[1, 2, 2, 2, 2, 2]];

    for grades in sequences {
        let mut roster = Roster::new();
        roster.add_student("S").unwrap();
        for g in grades {
            roster.add_grade("S", grade(*g)).unwrap();
        }

        let expected = grades.iter().sum::<i64>() as f64 / grades.len() as f64;
        let report = roster.report().unwrap();
        let average = report.entries[0].average.unwrap();
        assert_eq!(format!("{:.1}", average), format!("{:.1}", expected));
    }
}

#[test]
fn test_top_performer_example() {
    let mut roster = Roster::new();
    roster.add_student("A").unwrap();
    roster.add_student("B").unwrap();
    roster.add_grade("A", grade(90)).unwrap();
    roster.add_grade("A", grade(80)).unwrap();
    roster.add_grade("B", grade(70)).unwrap();

    let top = roster.top_performer().unwrap();
    assert_eq!(top.name, "A");
    assert_eq!(format!("{:.1}", top.average), "85.0");
}

#[test]
fn test_report_with_no_grades() {
    let mut roster = Roster::new();
    roster.add_student("A").unwrap();
    roster.add_student("B").unwrap();

    let err = roster.report().unwrap_err();
    assert_eq!(err.to_string(), "No students with grades available.");
}

#[test]
fn test_grade_entry_boundaries() {
    let mut roster = Roster::new();
    roster.add_student("A").unwrap();

    {
        let mut entry = roster.begin_grade_entry("A").unwrap();
        for rejected in ["150", "-5", "abc"] {
            assert!(matches!(entry.feed(rejected), GradeEntryOutcome::Rejected(_)));
        }
        for accepted in ["100", "0"] {
            assert!(matches!(entry.feed(accepted), GradeEntryOutcome::Added(_)));
        }
        assert!(matches!(entry.feed("done"), GradeEntryOutcome::Finished));
    }

    let grades: Vec<u8> = roster.get("A").unwrap().grades().iter().map(|g| g.value()).collect();
    assert_eq!(grades, vec![100, 0]);
}

#[test]
fn test_scripted_session_transcript() {
    let script = "1\nA\n1\nB\n2\nA\n90\n80\ndone\n2\nB\n70\ndone\n4\n5\n";
    let console = Console::new(Cursor::new(script), Vec::new());
    let mut session = GradeSession::new(console);
    session.run().unwrap();

    assert_eq!(session.roster().len(), 2);

    let (_, console) = session.into_parts();
    let output = String::from_utf8(console.into_output()).unwrap();
    assert!(output.contains("Top performer: A with average grade: 85.0"));
    assert_eq!(output.matches("Grade entry completed.").count(), 2);
}
