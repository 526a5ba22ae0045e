mod common;

use chart_form_wasm::domain::ChartRequest;
use common::{FakeView, ScriptedBackend, chart, controller};
use futures::executor::block_on;

#[test]
fn initialize_fills_current_date_and_time() {
    let ctrl = controller(ScriptedBackend::answering(vec![chart("AAAA")]), FakeView::default());
    let _ = block_on(ctrl.initialize());

    assert_eq!(*ctrl.view().date.borrow(), "2024-03-07");
    assert_eq!(*ctrl.view().time.borrow(), "14:30");
}

#[test]
fn initialize_sends_exactly_one_request_with_defaults() {
    let ctrl = controller(ScriptedBackend::answering(vec![chart("AAAA")]), FakeView::default());
    let image = block_on(ctrl.initialize()).unwrap();

    assert_eq!(ctrl.backend().request_count(), 1);
    assert_eq!(
        ctrl.backend().requests.borrow()[0],
        ChartRequest { year: 2024, month: 3, day: 7, hour: 14, minute: 30 }
    );
    assert_eq!(image.base64(), "AAAA");
}

#[test]
fn initialize_overwrites_previous_field_values() {
    let view = FakeView::with_input("1990-01-01", "00:00");
    let ctrl = controller(ScriptedBackend::answering(vec![chart("AAAA")]), view);
    let _ = block_on(ctrl.initialize());

    assert_eq!(*ctrl.view().date.borrow(), "2024-03-07");
    assert_eq!(ctrl.backend().requests.borrow()[0].year, 2024);
}
