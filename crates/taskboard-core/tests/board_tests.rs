use std::collections::BTreeMap;

use jiff::{SignedDuration, Timestamp};
use taskboard_core::{
    generator::GenerationResponse,
    ingest, BoardState, BoardStore, Clock, Column, Command, DragCoordinator, ManualClock,
};

fn create_test_store() -> (ManualClock, BoardStore<ManualClock>) {
    let clock = ManualClock::new(Timestamp::from_second(1_700_000_000).unwrap());
    (clock.clone(), BoardStore::with_clock(clock))
}

#[test]
fn test_generate_drag_and_reset_workflow() {
    let (clock, mut store) = create_test_store();

    // Ingest a generator response the way a finished request does
    let response = GenerationResponse {
        selected_roles: vec!["Backend".to_string()],
        role_tasks: BTreeMap::from([(
            "Backend".to_string(),
            vec!["Set up DB".to_string(), "Add auth".to_string()],
        )]),
    };
    let project = ingest::build_project("Todo service".to_string(), response, clock.now());
    assert!(project.tasks.iter().all(|t| t.status == Column::Todo));
    store.dispatch(Command::SetProject(project));

    let first = store.state().columns.get(Column::Todo)[0].id.clone();
    let second = store.state().columns.get(Column::Todo)[1].id.clone();
    assert_ne!(first, second);

    // Drag the first card onto the done column
    let mut drag = DragCoordinator::new();
    drag.start(store.state(), &first).unwrap();
    clock.advance(SignedDuration::from_secs(3));
    let command = drag.end(store.state(), Some("done")).expect("move command");
    store.dispatch(command);

    let state = store.state();
    assert_eq!(state.columns.get(Column::Todo)[0].id, second);
    assert_eq!(state.columns.get(Column::Done)[0].id, first);
    let done = &state.columns.get(Column::Done)[0];
    assert_eq!(done.status, Column::Done);
    assert!(done.updated_at > done.created_at);

    // A gesture released outside any column produces nothing
    drag.start(store.state(), &second).unwrap();
    assert!(drag.end(store.state(), None).is_none());
    assert!(drag.active().is_none());

    store.dispatch(Command::ResetProject);
    assert_eq!(*store.state(), BoardState::initial());
}

#[test]
fn test_state_serializes_with_camel_case_columns() {
    let (clock, mut store) = create_test_store();
    let response = GenerationResponse {
        selected_roles: vec!["QA".to_string()],
        role_tasks: BTreeMap::from([("QA".to_string(), vec!["Write test plan".to_string()])]),
    };
    store.dispatch(Command::SetProject(ingest::build_project(
        "App".to_string(),
        response,
        clock.now(),
    )));
    store.dispatch(Command::MoveTask {
        task_id: "qa-0".to_string(),
        from: Column::Todo,
        to: Column::CodeReview,
    });

    let value = serde_json::to_value(store.state()).unwrap();
    assert_eq!(value["columns"]["codeReview"][0]["status"], "codeReview");
    assert_eq!(value["currentProject"]["selectedRoles"][0], "QA");
    assert!(value["columns"]["codeReview"][0]["createdAt"].is_string());
    assert_eq!(value["loading"], false);
}
