//! Integration tests for hullview-overlay
//!
//! These tests build views from hull documents the way the viewer does and
//! drive them with label events.

use hullview_core::{BoundingCube, Error, HullData, Point3f, TriangleSoup};
use hullview_io::parse_hull_str;
use hullview_overlay::*;
use std::sync::Arc;

/// Unit tetrahedron with its four outward-facing hull facets
fn tetrahedron() -> HullData {
    parse_hull_str(
        r#"{"Cloud":[[0,0,0],[1,0,0],[0,1,0],[0,0,1]],
            "Index":[[0,2,1],[0,1,3],[0,3,2],[1,2,3]]}"#,
    )
    .unwrap()
}

#[test]
fn test_tetrahedron_hull_survives_double_toggle() {
    let hull = tetrahedron();
    let mut view = View::new(SceneGraph::new());
    let layer = HullLayer::from_hull(hull, FacetStyle::hull());
    view.register("hull", layer).unwrap();
    assert_eq!(view.scene().triangle_count(), 4);

    view.toggle("hull").unwrap();
    assert_eq!(view.scene().triangle_count(), 0);
    view.toggle("hull").unwrap();
    assert_eq!(view.scene().triangle_count(), 4);
    assert_eq!(view.scene().len(), 4);
}

#[test]
fn test_scene_presence_tracks_visibility() {
    let mut view = ViewBuilder::new().hull(tetrahedron()).build().unwrap();
    let sender = view.sender();

    for label in ["hull", "points", "hull", "points", "points"] {
        sender.send(label);
        view.process_events().unwrap();

        for layer in view.layers() {
            assert_eq!(layer.is_visible(), layer.renderable().is_attached(), "{}", layer.label());
        }
    }

    assert_eq!(view.is_visible("points"), Some(false));
    assert_eq!(view.is_visible("hull"), Some(true));
    assert_eq!(view.scene().scatter_count(), 0);
    assert_eq!(view.scene().triangle_count(), 4);
}

#[test]
fn test_unknown_label_leaves_visibility_unchanged() {
    let mut view = ViewBuilder::new().hull(tetrahedron()).build().unwrap();
    view.toggle("points").unwrap();
    let before: Vec<bool> = view.layers().map(|l| l.is_visible()).collect();

    let err = view.toggle("missing").unwrap_err();
    assert!(matches!(err, Error::UnknownLabel(_)));
    assert_eq!(err.kind(), "UnknownLabelError");

    let after: Vec<bool> = view.layers().map(|l| l.is_visible()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_axis_limits_follow_last_added_layer() {
    let mesh = TriangleSoup::from_triangles(vec![[
        Point3f::new(2.0, 2.0, 2.0),
        Point3f::new(3.0, 2.0, 2.0),
        Point3f::new(2.0, 5.0, 2.0),
    ]]);
    let mut view = ViewBuilder::new().hull(tetrahedron()).mesh(mesh).build().unwrap();
    assert_eq!(view.scene().axis_limits(), Some(BoundingCube::new(2.0, 5.0)));

    view.toggle(HULL_LABEL).unwrap();
    view.toggle(HULL_LABEL).unwrap();
    assert_eq!(view.scene().axis_limits(), Some(BoundingCube::new(0.0, 1.0)));
}

#[test]
fn test_duplicate_registration_is_rejected() {
    let hull = tetrahedron();
    let cloud = Arc::new(hull.cloud.clone());
    let mut view = View::new(SceneGraph::new());
    view.register("a", PointCloudLayer::new(cloud.clone(), PointStyle::default())).unwrap();

    let err = view
        .register("a", PointCloudLayer::new(cloud, PointStyle::default()))
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateLabel(_)));
    assert_eq!(view.scene().scatter_count(), 1);
}
