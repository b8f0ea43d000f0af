// SPDX-License-Identifier: MPL-2.0
use std::sync::{Arc, Mutex};
use std::time::Duration;

use feedback_engine::config::Config;
use feedback_engine::input::{bind_debounced_input, ValueResolver};
use feedback_engine::notifications::{Dispatcher, Severity, ShowOptions};
use tokio::time::sleep;

/// A search field wired the way the UI kit wires it: resolver routes
/// keystrokes into a debounced binding, and the settled query drives a
/// notification through the shared dispatcher.
#[tokio::test(start_paused = true)]
async fn typing_burst_settles_once_and_raises_a_toast() {
    let dispatcher = Dispatcher::new(&Config::default());
    let settled = Arc::new(Mutex::new(Vec::new()));

    let search = {
        let dispatcher = dispatcher.clone();
        let settled = Arc::clone(&settled);
        bind_debounced_input(Duration::from_millis(300), move |query| {
            settled.lock().unwrap().push(query.to_string());
            dispatcher.show(
                format!("Searching for \"{query}\""),
                ShowOptions::new().auto_hide(Duration::from_millis(100)),
            );
        })
    };

    let mut resolver = ValueResolver::uncontrolled("", {
        let search = search.clone();
        move |value| search.update(value)
    });

    resolver.handle_edit("r");
    sleep(Duration::from_millis(50)).await;
    resolver.handle_edit("ru");
    sleep(Duration::from_millis(50)).await;
    resolver.handle_edit("rust");

    sleep(Duration::from_millis(350)).await;

    // One settled emission, one toast.
    assert_eq!(*settled.lock().unwrap(), vec!["rust".to_string()]);
    let toasts = dispatcher.snapshot();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].message(), "Searching for \"rust\"");

    // The toast auto-dismisses on its own timer.
    sleep(Duration::from_millis(150)).await;
    assert!(dispatcher.snapshot().is_empty());
    assert_eq!(settled.lock().unwrap().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn clearing_a_field_flushes_without_waiting_out_the_window() {
    let settled = Arc::new(Mutex::new(Vec::new()));
    let input = {
        let settled = Arc::clone(&settled);
        bind_debounced_input(Duration::from_millis(300), move |value| {
            settled.lock().unwrap().push(value.to_string());
        })
    };

    input.update("draft text");
    sleep(Duration::from_millis(100)).await;

    // "Clear" action: empty the value and flush immediately.
    input.update("");
    input.flush();
    assert_eq!(*settled.lock().unwrap(), vec![String::new()]);

    sleep(Duration::from_millis(400)).await;
    assert_eq!(settled.lock().unwrap().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn unmounting_a_screen_tears_down_its_bindings_and_toasts() {
    let dispatcher = Dispatcher::new(&Config::default());
    let settled = Arc::new(Mutex::new(Vec::new()));

    let input = {
        let settled = Arc::clone(&settled);
        bind_debounced_input(Duration::from_millis(300), move |value| {
            settled.lock().unwrap().push(value.to_string());
        })
    };
    input.update("half-typed");

    let id = dispatcher.show("Upload in progress", ShowOptions::new().persistent());

    // Screen unmounts: binding torn down, its pending emission dies with
    // it; the toast is dismissed explicitly.
    input.teardown();
    dispatcher.hide(id);

    sleep(Duration::from_secs(1)).await;
    assert!(settled.lock().unwrap().is_empty());
    assert!(dispatcher.snapshot().is_empty());
}

#[tokio::test(start_paused = true)]
async fn capped_product_config_promotes_in_arrival_order() {
    let config = Config {
        max_visible: Some(2),
        ..Config::default()
    };
    let dispatcher = Dispatcher::new(&config);
    let mut rx = dispatcher.subscribe().expect("first subscriber");

    let first = dispatcher.show("one", ShowOptions::new().persistent());
    dispatcher.show("two", ShowOptions::new().persistent());
    dispatcher.show("three", ShowOptions::new().persistent());

    let visible: Vec<String> = rx
        .borrow_and_update()
        .iter()
        .map(|n| n.message().to_string())
        .collect();
    assert_eq!(visible, vec!["one".to_string(), "two".to_string()]);

    dispatcher.hide(first);
    let visible: Vec<String> = rx
        .borrow_and_update()
        .iter()
        .map(|n| n.message().to_string())
        .collect();
    assert_eq!(visible, vec!["two".to_string(), "three".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn severities_flow_through_to_the_presentation_snapshot() {
    let dispatcher = Dispatcher::new(&Config::default());

    dispatcher.show("fyi", ShowOptions::new().persistent());
    dispatcher.show(
        "saved",
        ShowOptions::new().severity(Severity::Success).persistent(),
    );
    dispatcher.show(
        "disk almost full",
        ShowOptions::new().severity(Severity::Warning).persistent(),
    );
    dispatcher.show(
        "upload failed",
        ShowOptions::new().severity(Severity::Error).persistent(),
    );

    let severities: Vec<Severity> = dispatcher.snapshot().iter().map(|n| n.severity()).collect();
    assert_eq!(
        severities,
        vec![
            Severity::Info,
            Severity::Success,
            Severity::Warning,
            Severity::Error
        ]
    );
}
