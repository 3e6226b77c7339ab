use std::io::Cursor;

use classbook::console::Console;
use classbook::profile::{LifeStage, Profile};
use classbook::session::ProfileSession;

#[test]
fn test_life_stage_table() {
    let cases = [
        (0, LifeStage::Child),
        (12, LifeStage::Child),
        (13, LifeStage::Teenager),
        (19, LifeStage::Teenager),
        (20, LifeStage::Adult),
        (-1, LifeStage::Unknown),
    ];
    for (age, stage) in cases {
        assert_eq!(LifeStage::from_age(age), stage, "age {}", age);
    }
}

#[test]
fn test_profile_age_from_reference_year() {
    let profile = Profile::new("Alan", 2013, 2025, Vec::new()).unwrap();
    assert_eq!(profile.age, 12);
    assert_eq!(profile.stage, LifeStage::Child);
}

#[test]
fn test_profile_session_without_hobbies() {
    let console = Console::new(Cursor::new("Alan Turing\n1912\nstop\n"), Vec::new());
    let mut session = ProfileSession::new(console, 2025);

    let profile = session.run().unwrap().unwrap();
    assert_eq!(profile.age, 113);
    assert!(profile.hobbies.is_empty());

    let output = String::from_utf8(session.into_console().into_output()).unwrap();
    assert!(output.contains("Life stage: Adult"));
    assert!(output.contains("You didn't mention any hobbies."));
}

#[test]
fn test_profile_session_hobbies_end_with_input() {
    let console = Console::new(Cursor::new("Alan\n1990\nrunning\n"), Vec::new());
    let mut session = ProfileSession::new(console, 2025);

    let profile = session.run().unwrap().unwrap();
    assert_eq!(profile.hobbies, vec!["running"]);
}
