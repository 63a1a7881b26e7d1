//! End-to-end review moderation through the public app surface.

use campadmin::app::{App, StatusLevel};
use campadmin::config::Config;
use campadmin::core::Action;
use campadmin::modules::review_dialog::{Acknowledgment, DialogEvent};
use campadmin::modules::tiles::TileKind;
use campadmin::store::FixtureStore;

#[test]
fn test_approve_tent_review() {
    let store = FixtureStore::builtin().unwrap();
    let mut app = App::new(&store, Config::default());

    assert_eq!(app.handle_dialog(DialogEvent::SelectReview("111".into())), None);
    let review = app.dialog.review().unwrap();
    assert_eq!(review.product(), "Tent");
    assert_eq!(review.stars(), 4);

    assert_eq!(
        app.handle_dialog(DialogEvent::Approve),
        Some(Acknowledgment::Approved)
    );
    assert!(!app.dialog.is_open());
    assert_eq!(app.status_text(), Some(("Tent: approved", StatusLevel::Info)));
    // Moderation never edits the fixtures.
    assert_eq!(store.reviews().len(), 3);
}

#[test]
fn test_cog_opens_dialog_for_row() {
    let store = FixtureStore::builtin().unwrap();
    let mut app = App::new(&store, Config::default());

    app.select_row(TileKind::Reviews, 1);
    let action = app.activate_selected();
    app.apply_action(action);

    assert_eq!(app.dialog.review().map(|r| r.id()), Some("222"));
    assert_eq!(app.handle_dialog(DialogEvent::Deny), Some(Acknowledgment::Denied));
    assert!(!app.dialog.is_open());
}

#[test]
fn test_reselect_replaces_open_review() {
    let store = FixtureStore::builtin().unwrap();
    let mut app = App::new(&store, Config::default());

    app.handle_dialog(DialogEvent::SelectReview("111".into()));
    app.handle_dialog(DialogEvent::SelectReview("333".into()));
    assert_eq!(app.dialog.review().map(|r| r.product()), Some("Stove"));

    assert_eq!(app.handle_dialog(DialogEvent::Dismiss), None);
    assert!(!app.dialog.is_open());
}

#[test]
fn test_decisions_while_closed_are_ignored() {
    let store = FixtureStore::builtin().unwrap();
    let mut app = App::new(&store, Config::default());

    assert_eq!(app.handle_dialog(DialogEvent::Approve), None);
    assert_eq!(app.handle_dialog(DialogEvent::Deny), None);
    assert_eq!(app.handle_dialog(DialogEvent::Dismiss), None);
    assert!(!app.dialog.is_open());
    assert!(app.status.is_none());
}

#[test]
fn test_command_line_drives_dialog() {
    let store = FixtureStore::builtin().unwrap();
    let mut app = App::new(&store, Config::default());

    app.enter_command();
    app.command.input = "review 222".to_string();
    app.apply_command();
    assert_eq!(app.dialog.review().map(|r| r.id()), Some("222"));

    app.enter_command();
    app.command.input = "deny".to_string();
    app.apply_command();
    assert!(!app.dialog.is_open());
    assert_eq!(app.status_text().map(|s| s.0), Some("Hiking Shoes: denied"));
}

#[test]
fn test_export_writes_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let store = FixtureStore::builtin().unwrap();
    let config = Config {
        export_dir: Some(dir.path().to_path_buf()),
        ..Config::default()
    };
    let mut app = App::new(&store, config);

    app.apply_action(Action::Export);

    let (_, level) = app.status_text().unwrap();
    assert_eq!(level, StatusLevel::Info);
    let mut names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names.len(), 4);
    assert!(names[0].starts_with("categories-") && names[0].ends_with(".csv"));
    assert!(names[1].starts_with("regions-") && names[1].ends_with(".json"));
    assert!(names[2].starts_with("reviews-") && names[2].ends_with(".json"));
    assert!(names[3].starts_with("sales-") && names[3].ends_with(".csv"));
}
