use crate::map;
use crate::map::models::{CoordinateField, CoordinatePair, CoordinateTarget, LatLng, Validity};
use serde::{Deserialize, Serialize};
use serde_unit_struct::{Deserialize_unit_struct, Serialize_unit_struct};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ClientSentSocketMessage {
    FieldEdited {
        #[allow(dead_code)]
        // This field is actually being pattern-matched on. Same for other variants.
        r#type: FieldEdited,
        payload: FieldEditPayload,
    },
    Ping {
        #[allow(dead_code)]
        r#type: Ping,
    },
}

#[macro_export]
macro_rules! name_of {
    ($name:ident) => {{
        let _ = &$name;
        stringify!($name)
    }};
}

impl ClientSentSocketMessage {
    pub fn message_type_as_string(&self) -> String {
        match self {
            ClientSentSocketMessage::FieldEdited { .. } => name_of!(FieldEdited),
            ClientSentSocketMessage::Ping { .. } => name_of!(Ping),
        }
        .to_string()
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ServerSentSocketMessage {
    ViewState {
        r#type: ViewState,
        payload: ViewStatePayload,
    },
    SetView {
        r#type: SetView,
        payload: SetViewPayload,
    },
    Pong {
        r#type: Pong,
    },
}

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct FieldEdited;

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct ViewState;

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct SetView;

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct Ping;

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct Pong;

/// One typed field edit, constructed at the input's binding site.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldEditPayload {
    pub target: CoordinateTarget,
    pub field: CoordinateField,
    pub raw_text: String,
}

/// The view model the page renders from. Conditional inclusion is decided
/// here, server-side: a marker is present iff its coordinate is valid, the
/// line iff both are.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewStatePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_marker: Option<LatLng>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_marker: Option<LatLng>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<[LatLng; 2]>,
    pub center: LatLng,
    pub both_valid: bool,
    pub validity: Validity,
}

impl ViewStatePayload {
    pub fn new(pair: &CoordinatePair) -> Self {
        let derived = map::derive_center(pair);
        Self {
            first_marker: pair.first.is_valid().then_some(pair.first),
            second_marker: pair.second.is_valid().then_some(pair.second),
            line: derived.both_valid.then_some([pair.first, pair.second]),
            center: derived.center,
            both_valid: derived.both_valid,
            validity: pair.validity(),
        }
    }
}

/// Tells the page to move the viewport. Zoom is deliberately absent: the
/// collaborator owns it, and the page reuses its current zoom level.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetViewPayload {
    pub center: LatLng,
    pub animate: bool,
}
