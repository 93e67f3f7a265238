//! Tree integration tests
//!
//! Navigation between leaves while edits are pending.

use lamco_param_editor::{
    Hierarchy, Navigation, NodePath, ParameterItem, ParameterSet, ParameterTree, PendingAction,
    Resolution, Value, WidgetInput,
};

/// `{"a": {"x": item1}, "b": {"y": item2}}`
fn two_leaves() -> Hierarchy {
    Hierarchy::new()
        .with_leaf(
            "a",
            ParameterSet::new().with("x", ParameterItem::index("x", 1, 0, 9).unwrap()),
        )
        .with_leaf(
            "b",
            ParameterSet::new().with("y", ParameterItem::text("y", "unchanged")),
        )
}

#[test]
fn test_navigation_blocked_until_resolved() {
    let a = NodePath::from(["a"]);
    let b = NodePath::from(["b"]);
    let mut tree = ParameterTree::new(two_leaves());

    assert_eq!(tree.select(&a).unwrap(), Navigation::Bound);
    tree.edit("x", WidgetInput::Stepped(4)).unwrap();
    assert!(tree.is_dirty());

    assert_eq!(tree.select(&b).unwrap(), Navigation::Blocked);
    assert_eq!(tree.selected(), Some(&a));
    assert_eq!(tree.pending(), Some(&PendingAction::Navigate(b.clone())));

    // keep editing: still on "a", still dirty
    tree.dismiss_confirmation();
    assert_eq!(tree.selected(), Some(&a));
    assert!(tree.is_dirty());
    assert_eq!(tree.select(&b).unwrap(), Navigation::Blocked);
    assert_eq!(tree.selected(), Some(&a));
}

#[test]
fn test_accept_then_navigate() {
    let a = NodePath::from(["a"]);
    let b = NodePath::from(["b"]);
    let mut tree = ParameterTree::new(two_leaves());

    tree.select(&a).unwrap();
    tree.edit("x", WidgetInput::Stepped(4)).unwrap();
    assert_eq!(tree.select(&b).unwrap(), Navigation::Blocked);

    tree.accept();
    assert_eq!(tree.selected(), Some(&b));
    assert_eq!(tree.select(&b).unwrap(), Navigation::Unchanged);
    assert!(!tree.is_dirty());

    let values = tree.values();
    assert_eq!(values.leaf(&a).unwrap()["x"], Value::Int(5));
    assert_eq!(values.leaf(&b).unwrap()["y"], Value::Text("unchanged".into()));
}

#[test]
fn test_resolving_blocked_navigation_completes_it() {
    let a = NodePath::from(["a"]);
    let b = NodePath::from(["b"]);
    let mut tree = ParameterTree::new(two_leaves());

    tree.select(&a).unwrap();
    tree.edit("x", WidgetInput::Typed("7".into())).unwrap();
    tree.select(&b).unwrap();

    assert_eq!(
        tree.resolve(Resolution::Accept),
        Some(PendingAction::Navigate(b.clone()))
    );
    assert_eq!(tree.selected(), Some(&b));
    assert_eq!(tree.editor().live_values()["y"], Value::Text("unchanged".into()));
}

#[test]
fn test_values_exclude_unaccepted_edits() {
    let a = NodePath::from(["a"]);
    let mut tree = ParameterTree::new(two_leaves());

    tree.select(&a).unwrap();
    tree.edit("x", WidgetInput::Stepped(2)).unwrap();

    assert_eq!(tree.values().leaf(&a).unwrap()["x"], Value::Int(1));
    assert_eq!(tree.live_values().unwrap()["x"], Value::Int(3));
}

#[test]
fn test_values_mirror_nested_hierarchy() {
    let hierarchy = lamco_param_editor::sampler::sample_hierarchy();
    let tree = ParameterTree::new(hierarchy);
    let values = tree.values();

    let plotting = values.leaf(&NodePath::from(["UI", "plotting"])).unwrap();
    assert_eq!(plotting["autoplot"], Value::Bool(true));
    assert_eq!(
        plotting.keys().collect::<Vec<_>>(),
        ["autoplot", "autoselect", "colors"]
    );
    assert!(values.leaf(&NodePath::from(["tiled"])).is_none());
}

#[test]
fn test_rows_follow_selection_and_collapse() {
    let mut tree = ParameterTree::new(lamco_param_editor::sampler::sample_hierarchy());
    let ui = NodePath::from(["UI"]);

    assert_eq!(tree.rows().len(), 4);
    assert_eq!(tree.select(&ui).unwrap(), Navigation::Unchanged);
    assert_eq!(tree.rows().len(), 3);
    assert!(tree.selected().is_none());
}

#[test]
fn test_bound_parameters_follow_selection() {
    let a = NodePath::from(["a"]);
    let b = NodePath::from(["b"]);
    let mut tree = ParameterTree::new(two_leaves().with_leaf("empty", ParameterSet::new()));
    assert!(tree.bound_parameters().is_none());

    tree.select(&a).unwrap();
    tree.edit("x", WidgetInput::Stepped(1)).unwrap();
    tree.select(&b).unwrap();
    assert!(tree.bound_parameters().unwrap().get("x").is_some());

    tree.resolve(Resolution::Reset);
    assert!(tree.bound_parameters().unwrap().get("y").is_some());

    tree.select(&NodePath::from(["empty"])).unwrap();
    assert!(tree.bound_parameters().unwrap().is_empty());
}

#[test]
fn test_unparsed_spin_text_blocks_navigation() {
    let a = NodePath::from(["a"]);
    let b = NodePath::from(["b"]);
    let mut tree = ParameterTree::new(two_leaves());

    tree.select(&a).unwrap();
    tree.edit("x", WidgetInput::Typed("x1".into())).unwrap();
    assert!(tree.is_dirty());
    assert_eq!(tree.select(&b).unwrap(), Navigation::Blocked);

    tree.resolve(Resolution::Reset);
    assert_eq!(tree.selected(), Some(&b));
    assert_eq!(tree.values().leaf(&a).unwrap()["x"], Value::Int(1));
}
