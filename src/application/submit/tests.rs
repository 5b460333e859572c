//! Submit Use Case Tests

use std::path::{Path, PathBuf};

use serde_json::{json, Map, Value};

use super::*;
use crate::application::test_support::{
    CountingRepair, MemoryFs, RecordingSink, ScriptedServer, UnreachableServer,
};
use crate::domain::entities::SubmissionState;
use crate::domain::ports::RunEvent;
use crate::domain::value_objects::{FilenameFragment, RetryPolicy};
use crate::error::CardsmithError;

const CODE: &str = "import { Card } from 'https://cardstack.com/base/card-api';\n\
export class TodoList extends Card {\n  static displayName = 'Todo';\n}\n";

fn attributes() -> Map<String, Value> {
    match json!({"title": "Homework"}) {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}

fn fragment() -> FilenameFragment {
    FilenameFragment::parse("todo_list").unwrap()
}

fn request<'a>(
    fragment: &'a FilenameFragment,
    attributes: &'a Map<String, Value>,
    run_dir: Option<&'a Path>,
) -> SubmitRequest<'a> {
    SubmitRequest {
        fragment,
        description: "a todo list",
        code: CODE,
        attributes,
        run_dir,
    }
}

#[test]
fn accepted_on_first_post() {
    let fs = MemoryFs::default();
    let server = ScriptedServer::always(201, r#"{"data":{"id":"http://localhost:4202/Card/1"}}"#);
    let repair = CountingRepair::default();
    let (frag, attrs) = (fragment(), attributes());
    let use_case = SubmitUseCase::new(&server, &fs, "demo-cards");

    let outcome = use_case.execute(&request(&frag, &attrs, None), &repair).unwrap();

    assert!(outcome.accepted);
    assert_eq!(outcome.attempts, 1);
    assert_eq!(repair.calls.get(), 0);
    assert_eq!(
        outcome.states,
        vec![
            SubmissionState::Built,
            SubmissionState::Submitted,
            SubmissionState::Accepted
        ]
    );
    assert_eq!(
        outcome.resource_id().as_deref(),
        Some("http://localhost:4202/Card/1")
    );
    assert_eq!(fs.content("demo-cards/todo_list.gts").as_deref(), Some(CODE));
    assert_eq!(*fs.syncs.borrow(), vec![PathBuf::from("demo-cards/todo_list.gts")]);
}

#[test]
fn document_uses_fragment_and_extracted_name() {
    let fs = MemoryFs::default();
    let server = ScriptedServer::always(201, "{}");
    let (frag, attrs) = (fragment(), attributes());

    SubmitUseCase::new(&server, &fs, "demo-cards")
        .execute(&request(&frag, &attrs, None), &CountingRepair::default())
        .unwrap();

    let posts = server.posts.borrow();
    assert_eq!(posts[0].module(), "http://localhost:4202/todo_list");
    assert_eq!(posts[0].component_name(), "TodoList");
    assert_eq!(posts[0].data.attributes["title"], "Homework");
}

#[test]
fn reject_then_accept_makes_one_fix_and_two_posts() {
    let fs = MemoryFs::default();
    let server = ScriptedServer::new(&[(500, "Unexpected token (3:4)"), (201, "{}")]);
    let repair = CountingRepair::default();
    let (frag, attrs) = (fragment(), attributes());
    let use_case = SubmitUseCase::new(&server, &fs, "demo-cards");

    let outcome = use_case.execute(&request(&frag, &attrs, None), &repair).unwrap();

    assert!(outcome.accepted);
    assert_eq!(server.post_count(), 2);
    assert_eq!(repair.calls.get(), 1);
    assert_eq!(outcome.fix_count(), 1);
    assert_eq!(*repair.errors.borrow(), vec!["Unexpected token (3:4)".to_string()]);
    assert_eq!(outcome.final_code, "export class Fixed1 extends Card {}");
    assert_eq!(
        fs.content("demo-cards/todo_list.gts").as_deref(),
        Some("export class Fixed1 extends Card {}")
    );
    assert_eq!(fs.syncs.borrow().len(), 2);
    assert_eq!(
        outcome.states,
        vec![
            SubmissionState::Built,
            SubmissionState::Submitted,
            SubmissionState::Rejected,
            SubmissionState::Fixed,
            SubmissionState::Resubmitted,
            SubmissionState::Accepted,
        ]
    );
}

#[test]
fn resubmits_the_same_document() {
    let fs = MemoryFs::default();
    let server = ScriptedServer::new(&[(500, "err"), (201, "{}")]);
    let (frag, attrs) = (fragment(), attributes());

    SubmitUseCase::new(&server, &fs, "demo-cards")
        .execute(&request(&frag, &attrs, None), &CountingRepair::default())
        .unwrap();

    let posts = server.posts.borrow();
    assert_eq!(posts[0], posts[1]);
}

#[test]
fn reject_always_stops_after_policy_bound() {
    let fs = MemoryFs::default();
    let server = ScriptedServer::always(500, "still broken");
    let repair = CountingRepair::default();
    let (frag, attrs) = (fragment(), attributes());
    let use_case = SubmitUseCase::new(&server, &fs, "demo-cards");

    let outcome = use_case.execute(&request(&frag, &attrs, None), &repair).unwrap();

    assert!(!outcome.accepted);
    assert_eq!(server.post_count(), 2);
    assert_eq!(repair.calls.get(), 1);
    assert_eq!(outcome.response.body, "still broken");
    assert_eq!(outcome.final_state(), Some(SubmissionState::Rejected));
    assert!(outcome.resource_id().is_none());
}

#[test]
fn larger_policy_allows_more_repairs() {
    let fs = MemoryFs::default();
    let server = ScriptedServer::always(500, "nope");
    let repair = CountingRepair::default();
    let (frag, attrs) = (fragment(), attributes());
    let use_case = SubmitUseCase::new(&server, &fs, "demo-cards").with_policy(RetryPolicy::new(4, 0));

    let outcome = use_case.execute(&request(&frag, &attrs, None), &repair).unwrap();

    assert_eq!(server.post_count(), 4);
    assert_eq!(repair.calls.get(), 3);
    assert_eq!(outcome.attempts, 4);
}

#[test]
fn no_retry_policy_never_repairs() {
    let fs = MemoryFs::default();
    let server = ScriptedServer::always(500, "nope");
    let repair = CountingRepair::default();
    let (frag, attrs) = (fragment(), attributes());
    let use_case = SubmitUseCase::new(&server, &fs, "demo-cards").with_policy(RetryPolicy::no_retry());

    let outcome = use_case.execute(&request(&frag, &attrs, None), &repair).unwrap();

    assert!(!outcome.accepted);
    assert_eq!(server.post_count(), 1);
    assert_eq!(repair.calls.get(), 0);
}

#[test]
fn success_status_is_configurable() {
    let fs = MemoryFs::default();
    let server = ScriptedServer::always(200, "{}");
    let (frag, attrs) = (fragment(), attributes());

    let default_outcome = SubmitUseCase::new(&server, &fs, "demo-cards")
        .with_policy(RetryPolicy::no_retry())
        .execute(&request(&frag, &attrs, None), &CountingRepair::default())
        .unwrap();
    assert!(!default_outcome.accepted);

    let outcome = SubmitUseCase::new(&server, &fs, "demo-cards")
        .with_success_status(200)
        .execute(&request(&frag, &attrs, None), &CountingRepair::default())
        .unwrap();
    assert!(outcome.accepted);
}

#[test]
fn repaired_revisions_are_numbered() {
    let fs = MemoryFs::default();
    let server = ScriptedServer::new(&[(500, "a"), (500, "b"), (201, "{}")]);
    let (frag, attrs) = (fragment(), attributes());
    let run_dir = PathBuf::from("runs/todo_list-1");
    let use_case = SubmitUseCase::new(&server, &fs, "demo-cards").with_policy(RetryPolicy::new(3, 0));

    let outcome = use_case
        .execute(
            &request(&frag, &attrs, Some(&run_dir)),
            &CountingRepair::default(),
        )
        .unwrap();

    assert_eq!(
        outcome.revisions,
        vec![run_dir.join("v2.gts"), run_dir.join("v3.gts")]
    );
    assert_eq!(
        fs.content(run_dir.join("v3.gts")).as_deref(),
        Some("export class Fixed2 extends Card {}")
    );
}

#[test]
fn run_folder_gets_document_and_final_response() {
    let fs = MemoryFs::default();
    let server = ScriptedServer::always(500, "Error: cannot find module");
    let (frag, attrs) = (fragment(), attributes());
    let run_dir = PathBuf::from("runs/todo_list-1");

    SubmitUseCase::new(&server, &fs, "demo-cards")
        .execute(
            &request(&frag, &attrs, Some(&run_dir)),
            &CountingRepair::default(),
        )
        .unwrap();

    let saved: Value =
        serde_json::from_str(&fs.content(run_dir.join(SUBMISSION_FILE)).unwrap()).unwrap();
    assert_eq!(saved["data"]["type"], "card");
    assert_eq!(saved["data"]["meta"]["adoptsFrom"]["name"], "TodoList");
    assert_eq!(
        fs.content(run_dir.join(RESPONSE_FILE)).as_deref(),
        Some("Error: cannot find module")
    );
}

#[test]
fn events_report_each_post() {
    let fs = MemoryFs::default();
    let server = ScriptedServer::new(&[(422, "bad"), (201, "{}")]);
    let sink = RecordingSink::new();
    let (frag, attrs) = (fragment(), attributes());

    SubmitUseCase::new(&server, &fs, "demo-cards")
        .execute_with_events(
            &request(&frag, &attrs, None),
            &CountingRepair::default(),
            sink.clone(),
        )
        .unwrap();

    let submitted: Vec<(u32, u16, bool)> = sink
        .events()
        .into_iter()
        .filter_map(|e| match e {
            RunEvent::Submitted {
                attempt,
                status,
                accepted,
            } => Some((attempt, status, accepted)),
            _ => None,
        })
        .collect();
    assert_eq!(submitted, vec![(1, 422, false), (2, 201, true)]);
}

#[test]
fn missing_export_fails_before_posting() {
    let fs = MemoryFs::default();
    let server = ScriptedServer::always(201, "{}");
    let (frag, attrs) = (fragment(), attributes());
    let req = SubmitRequest {
        code: "const x = 1;",
        ..request(&frag, &attrs, None)
    };

    let err = SubmitUseCase::new(&server, &fs, "demo-cards")
        .execute(&req, &CountingRepair::default())
        .unwrap_err();

    assert!(matches!(err, CardsmithError::NoExport));
    assert_eq!(server.post_count(), 0);
}

#[test]
fn transport_failure_is_an_error_not_a_rejection() {
    let fs = MemoryFs::default();
    let repair = CountingRepair::default();
    let (frag, attrs) = (fragment(), attributes());

    let err = SubmitUseCase::new(UnreachableServer, &fs, "demo-cards")
        .execute(&request(&frag, &attrs, None), &repair)
        .unwrap_err();

    assert!(matches!(err, CardsmithError::Submission { .. }));
    assert_eq!(repair.calls.get(), 0);
}
