//! Editor integration tests
//!
//! Drives a standalone form through edits, Accept, Reset and close requests.

use lamco_param_editor::{
    Guard, ParameterError, ParameterForm, ParameterItem, ParameterSet, PendingAction, Resolution,
    Value, WidgetInput,
};
use proptest::prelude::*;

fn plot_settings() -> ParameterSet {
    ParameterSet::new()
        .with("autoscale", ParameterItem::checkbox("autoscale", true))
        .with(
            "color",
            ParameterItem::choice("color", "", ["", "red", "green", "blue"]).unwrap(),
        )
        .with("points", ParameterItem::index("points", 5, 1, 10).unwrap())
        .with("title", ParameterItem::text("title", "scan"))
}

#[test]
fn test_untouched_checkbox_keeps_value() {
    let form = ParameterForm::new(
        ParameterSet::new().with("autoscale", ParameterItem::checkbox("autoscale", true)),
    );
    assert!(!form.is_dirty());
    assert_eq!(form.values()["autoscale"], Value::Bool(true));
}

#[test]
fn test_accepted_choice_is_committed() {
    let mut form = ParameterForm::new(plot_settings());

    assert!(form
        .edit("color", WidgetInput::Selected("green".into()))
        .unwrap());
    assert!(form.is_dirty());
    // not committed yet
    assert_eq!(form.values()["color"], Value::Text(String::new()));

    form.accept();
    assert_eq!(form.values()["color"], Value::Text("green".into()));
    assert!(!form.is_dirty());
}

#[test]
fn test_reset_is_idempotent() {
    let mut form = ParameterForm::new(plot_settings());
    form.edit("points", WidgetInput::Stepped(3)).unwrap();
    form.edit("title", WidgetInput::Typed("other".into())).unwrap();

    form.reset();
    let once = form.live_values();
    form.reset();
    assert_eq!(form.live_values(), once);
    assert_eq!(once, form.values());
    assert!(!form.is_dirty());
}

#[test]
fn test_accept_matches_live_state() {
    let mut form = ParameterForm::new(plot_settings());
    form.edit("autoscale", WidgetInput::Toggled(false)).unwrap();
    form.edit("points", WidgetInput::Typed("9".into())).unwrap();
    let live = form.live_values();

    form.accept();
    assert_eq!(form.values(), live);
    assert!(form.changed_values().is_empty());
}

#[test]
fn test_close_waits_for_resolution() {
    let mut form = ParameterForm::new(plot_settings());
    form.edit("title", WidgetInput::Typed("draft".into())).unwrap();

    assert_eq!(form.request_close(), Guard::Blocked);
    assert_eq!(form.pending(), Some(&PendingAction::Close));

    assert_eq!(form.dismiss_confirmation(), Some(PendingAction::Close));
    assert!(form.is_dirty());

    assert_eq!(form.request_close(), Guard::Blocked);
    assert_eq!(form.resolve(Resolution::Reset), Some(PendingAction::Close));
    assert_eq!(form.values()["title"], Value::Text("scan".into()));
    assert_eq!(form.request_close(), Guard::Proceed);
}

#[test]
fn test_into_parameters_returns_committed_set() {
    let mut form = ParameterForm::new(plot_settings());
    form.edit("points", WidgetInput::Stepped(-2)).unwrap();
    form.accept();
    let parameters = form.into_parameters();
    assert_eq!(parameters.get("points").unwrap().value(), &Value::Int(3));
}

#[test]
fn test_invalid_items_are_rejected() {
    assert_eq!(
        ParameterItem::index("n", 12, 0, 9),
        Err(ParameterError::AboveMaximum { value: 12, hi: 9 })
    );
    assert!(matches!(
        ParameterItem::choice("c", "purple", ["red", "green"]),
        Err(ParameterError::NotAChoice { .. })
    ));
}

proptest! {
    #[test]
    fn prop_index_bounds_are_inclusive(lo in -1000i64..1000, span in 0i64..1000, offset in 1i64..100) {
        let hi = lo + span;
        prop_assert!(ParameterItem::index("n", lo, lo, hi).is_ok());
        prop_assert!(ParameterItem::index("n", hi, lo, hi).is_ok());
        prop_assert!(ParameterItem::index("n", lo - offset, lo, hi).is_err());
        prop_assert!(ParameterItem::index("n", hi + offset, lo, hi).is_err());
    }

    #[test]
    fn prop_spin_box_stays_in_bounds(steps in proptest::collection::vec(-20i64..20, 0..30)) {
        let mut form = ParameterForm::new(
            ParameterSet::new().with("n", ParameterItem::index("n", 5, 1, 10).unwrap()),
        );
        for step in steps {
            form.edit("n", WidgetInput::Stepped(step)).unwrap();
            let value = form.live_values()["n"].as_int().unwrap();
            prop_assert!((1..=10).contains(&value));
        }
    }
}
