//! EffectRunner round trips: one request intent in, one tagged result
//! intent out on the event channel.

mod common;

use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use common::{spawn_server, user};
use roster::client::DirectoryClient;
use roster::ui::effects::{EffectRunner, OpKind};
use roster::ui::events::AppEvent;
use roster::ui::users::UsersIntent;

fn recv_result(rx: &mpsc::Receiver<AppEvent>) -> (OpKind, u64, UsersIntent) {
    match rx.recv_timeout(Duration::from_secs(5)).expect("effect result") {
        AppEvent::EffectResult {
            kind,
            generation,
            intent,
        } => (kind, generation, intent),
        _ => panic!("expected an effect result"),
    }
}

#[test]
fn fetch_delivers_the_list_as_a_tagged_result() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let (addr, _handle, _dir) = runtime.block_on(spawn_server(&[user("1", "Ada")]));

    let (tx, rx) = mpsc::channel();
    let client = Arc::new(DirectoryClient::new(format!("http://{addr}")));
    let mut runner = EffectRunner::new(client, runtime.handle().clone(), tx);

    runner.dispatch(&UsersIntent::Fetch);

    let (kind, generation, intent) = recv_result(&rx);
    assert_eq!(kind, OpKind::Fetch);
    assert!(runner.accepts(kind, generation));
    match intent {
        UsersIntent::Fetched(list) => assert_eq!(list.len(), 1),
        other => panic!("expected Fetched, got {other:?}"),
    }
}

#[test]
fn not_found_update_comes_back_as_a_failure() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let (addr, _handle, _dir) = runtime.block_on(spawn_server(&[]));

    let (tx, rx) = mpsc::channel();
    let client = Arc::new(DirectoryClient::new(format!("http://{addr}")));
    let mut runner = EffectRunner::new(client, runtime.handle().clone(), tx);

    runner.dispatch(&UsersIntent::Update {
        id: "99".to_string(),
        patch: Default::default(),
    });

    let (kind, _generation, intent) = recv_result(&rx);
    assert_eq!(kind, OpKind::Update);
    match intent {
        UsersIntent::Failed(message) => assert_eq!(message, "user 99 not found"),
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[test]
fn unreachable_server_surfaces_the_transport_message() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (tx, rx) = mpsc::channel();
    let client = Arc::new(DirectoryClient::new(format!("http://{addr}")));
    let mut runner = EffectRunner::new(client, runtime.handle().clone(), tx);

    runner.dispatch(&UsersIntent::Fetch);

    let (_, _, intent) = recv_result(&rx);
    match intent {
        UsersIntent::Failed(message) => assert!(message.starts_with("Request failed:")),
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[test]
fn a_superseded_fetch_is_rejected_by_the_runner() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let (addr, _handle, _dir) = runtime.block_on(spawn_server(&[]));

    let (tx, rx) = mpsc::channel();
    let client = Arc::new(DirectoryClient::new(format!("http://{addr}")));
    let mut runner = EffectRunner::new(client, runtime.handle().clone(), tx);

    runner.dispatch(&UsersIntent::Fetch);
    runner.dispatch(&UsersIntent::Fetch);

    // Both tasks complete; only the second generation may be applied.
    let (kind_a, gen_a, _) = recv_result(&rx);
    let (kind_b, gen_b, _) = recv_result(&rx);
    assert_eq!(kind_a, OpKind::Fetch);
    assert_eq!(kind_b, OpKind::Fetch);

    let accepted: Vec<bool> = [gen_a, gen_b]
        .iter()
        .map(|g| runner.accepts(OpKind::Fetch, *g))
        .collect();
    assert_eq!(accepted.iter().filter(|a| **a).count(), 1);
    assert!(runner.accepts(OpKind::Fetch, gen_a.max(gen_b)));
}
