use crate::http::tests::test_server;
use crate::map::consts::FALLBACK_CENTER;
use crate::map::models::{CoordinateField, CoordinatePair, CoordinateTarget, LatLng};
use crate::plots::handlers::responses::{PlotViewResponse, PlotViewResponseError};
use crate::plots::message_types::{
    self, ClientSentSocketMessage, ServerSentSocketMessage, SetViewPayload, ViewStatePayload,
};
use crate::plots::sync::ViewSynchronizer;
use crate::storage::interface::{CoordinatePairRepo, PlotRepo, PlotSocketsRepo};
use crate::storage::plots::HashMapPlotsStorage;
use serde_json::{json, Value};

#[test]
fn test_view_synchronizer_pushes_on_first_center() {
    let mut synchronizer = ViewSynchronizer::default();

    assert!(synchronizer.on_center_changed(FALLBACK_CENTER));
}

#[test]
fn test_view_synchronizer_suppresses_unchanged_center() {
    let mut synchronizer = ViewSynchronizer::default();
    let center = LatLng {
        lat: 37.3825,
        lng: -96.14485,
    };

    assert!(synchronizer.on_center_changed(center));
    // Same value, not same object: no redundant viewport write.
    assert!(!synchronizer.on_center_changed(center));
    assert!(!synchronizer.on_center_changed(LatLng {
        lat: 37.3825,
        lng: -96.14485,
    }));
}

#[test]
fn test_view_synchronizer_pushes_on_changed_center() {
    let mut synchronizer = ViewSynchronizer::default();
    let center = LatLng {
        lat: 37.3825,
        lng: -96.14485,
    };

    assert!(synchronizer.on_center_changed(center));
    assert!(synchronizer.on_center_changed(LatLng {
        lat: 0.0,
        lng: 0.0,
    }));
    assert!(synchronizer.on_center_changed(center));
}

#[test]
fn test_view_state_with_default_pair_shows_everything() {
    let pair = CoordinatePair::default();

    let view_state = ViewStatePayload::new(&pair);

    assert!(view_state.both_valid);
    assert_eq!(view_state.first_marker, Some(pair.first));
    assert_eq!(view_state.second_marker, Some(pair.second));
    assert_eq!(view_state.line, Some([pair.first, pair.second]));
    assert!((view_state.center.lat - 37.3825).abs() < 1e-9);
    assert!((view_state.center.lng - -96.14485).abs() < 1e-9);
}

#[test]
fn test_view_state_with_one_malformed_coordinate() {
    let mut pair = CoordinatePair::default();
    pair.set_field(CoordinateTarget::First, CoordinateField::Lat, "abc");

    let view_state = ViewStatePayload::new(&pair);

    assert!(!view_state.both_valid);
    assert_eq!(view_state.first_marker, None);
    // The second marker survives on its own.
    assert_eq!(view_state.second_marker, Some(pair.second));
    assert_eq!(view_state.line, None);
    assert_eq!(view_state.center, FALLBACK_CENTER);
}

#[test]
fn test_view_state_with_both_coordinates_malformed() {
    let mut pair = CoordinatePair::default();
    pair.set_field(CoordinateTarget::First, CoordinateField::Lat, "abc");
    pair.set_field(CoordinateTarget::Second, CoordinateField::Lng, "");

    let view_state = ViewStatePayload::new(&pair);

    assert!(!view_state.both_valid);
    assert_eq!(view_state.first_marker, None);
    assert_eq!(view_state.second_marker, None);
    assert_eq!(view_state.line, None);
    assert_eq!(view_state.center, FALLBACK_CENTER);
}

#[test]
fn test_field_edit_message_deserializes() {
    let raw_message =
        r#"{"type":"FieldEdited","payload":{"target":"first","field":"lat","rawText":"40.7128"}}"#;

    let message: ClientSentSocketMessage = serde_json::from_str(raw_message).unwrap();

    let ClientSentSocketMessage::FieldEdited { payload, .. } = message else {
        panic!("Expected a `FieldEdited` message.");
    };
    assert_eq!(payload.raw_text, "40.7128");
}

#[test]
fn test_set_view_message_serializes_with_animation_suppressed() {
    let message = ServerSentSocketMessage::SetView {
        r#type: message_types::SetView,
        payload: SetViewPayload {
            center: FALLBACK_CENTER,
            animate: false,
        },
    };

    let raw_message = serde_json::to_value(&message).unwrap();

    assert_eq!(
        raw_message,
        json!({
            "type": "SetView",
            "payload": {
                "center": { "lat": 40.7128, "lng": -74.0060 },
                "animate": false,
            },
        })
    );
}

#[tokio::test]
async fn test_plots_storage_creates_independent_plots() {
    let storage = HashMapPlotsStorage::default();

    let first_plot_id = storage.create().await;
    let second_plot_id = storage.create().await;

    assert_ne!(first_plot_id, second_plot_id);
    assert!(storage.exists(&first_plot_id).await);
    assert!(!storage.exists("noSuchId0").await);

    storage
        .set_field(
            &first_plot_id,
            CoordinateTarget::First,
            CoordinateField::Lat,
            "1.5",
        )
        .await;

    assert_eq!(storage.pair(&first_plot_id).await.first.lat, 1.5);
    assert_eq!(storage.pair(&second_plot_id).await.first.lat, 40.7128);
}

#[tokio::test]
async fn test_plots_storage_tracks_attached_sockets() {
    let storage = HashMapPlotsStorage::default();
    let plot_id = storage.create().await;

    storage.attach_socket(&plot_id, 7).await;
    storage.attach_socket(&plot_id, 8).await;
    assert_eq!(storage.socket_ids(&plot_id).await, vec![7, 8]);

    storage.detach_socket(&plot_id, 7).await;
    assert_eq!(storage.socket_ids(&plot_id).await, vec![8]);
}

#[tokio::test]
async fn test_plots_storage_records_pushed_centers() {
    let storage = HashMapPlotsStorage::default();
    let plot_id = storage.create().await;

    assert!(storage.record_pushed_center(&plot_id, FALLBACK_CENTER).await);
    assert!(!storage.record_pushed_center(&plot_id, FALLBACK_CENTER).await);
    let other_center = LatLng { lat: 0.0, lng: 0.0 };
    assert!(storage.record_pushed_center(&plot_id, other_center).await);
}

#[tokio::test]
async fn test_create_and_view_plot() {
    let server = test_server();

    let create_response = server.post("/plots").await;
    create_response.assert_status_ok();
    let created: Value = create_response.json();
    let plot_id = created["plotId"].as_str().unwrap().to_owned();

    let view_response = server.get(&format!("/plots/{plot_id}/view")).await;

    view_response.assert_status_ok();
    view_response.assert_json(&PlotViewResponse {
        error: false,
        error_code: None,
        view: Some(ViewStatePayload::new(&CoordinatePair::default())),
    });
}

#[tokio::test]
async fn test_malformed_edit_hides_marker_and_line() {
    let server = test_server();
    let created: Value = server.post("/plots").await.json();
    let plot_id = created["plotId"].as_str().unwrap().to_owned();

    let edit_response = server
        .post(&format!("/plots/{plot_id}/field"))
        .json(&json!({ "target": "first", "field": "lat", "rawText": "abc" }))
        .await;

    edit_response.assert_status_ok();
    let mut expected_pair = CoordinatePair::default();
    expected_pair.set_field(CoordinateTarget::First, CoordinateField::Lat, "abc");
    edit_response.assert_json(&PlotViewResponse {
        error: false,
        error_code: None,
        view: Some(ViewStatePayload::new(&expected_pair)),
    });
}

#[tokio::test]
async fn test_correcting_an_edit_restores_the_midpoint() {
    let server = test_server();
    let created: Value = server.post("/plots").await.json();
    let plot_id = created["plotId"].as_str().unwrap().to_owned();

    server
        .post(&format!("/plots/{plot_id}/field"))
        .json(&json!({ "target": "first", "field": "lat", "rawText": "abc" }))
        .await;
    let corrected_response = server
        .post(&format!("/plots/{plot_id}/field"))
        .json(&json!({ "target": "first", "field": "lat", "rawText": "40.7128" }))
        .await;

    corrected_response.assert_status_ok();
    corrected_response.assert_json(&PlotViewResponse {
        error: false,
        error_code: None,
        view: Some(ViewStatePayload::new(&CoordinatePair::default())),
    });
}

#[tokio::test]
async fn test_viewing_an_unknown_plot_fails_gracefully() {
    let server = test_server();

    let response = server.get("/plots/noSuchId0/view").await;

    response.assert_status_ok();
    response.assert_json(&PlotViewResponse {
        error: true,
        error_code: Some(PlotViewResponseError::PlotNotFound),
        view: None,
    });
}

#[tokio::test]
async fn test_editing_an_unknown_plot_fails_gracefully() {
    let server = test_server();

    let response = server
        .post("/plots/noSuchId0/field")
        .json(&json!({ "target": "second", "field": "lng", "rawText": "1.0" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&PlotViewResponse {
        error: true,
        error_code: Some(PlotViewResponseError::PlotNotFound),
        view: None,
    });
}

#[tokio::test]
async fn test_created_plot_ids_are_well_formed() {
    let server = test_server();

    let create_response = server.post("/plots").await;

    create_response.assert_status_ok();
    let created: Value = create_response.json();
    let plot_id = created["plotId"].as_str().unwrap();
    assert_eq!(plot_id.len(), 8);
    assert!(plot_id.chars().all(|symbol| symbol.is_ascii_alphanumeric()));
}
