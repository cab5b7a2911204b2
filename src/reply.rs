//! Reply datagrams received from the bulb.

use serde_json::Value;

use crate::errors::Error;
use crate::types::{Brightness, Scene};

/// The pilot fields of a `getPilot` result this adapter reads.
///
/// Every field is optional; bulbs omit whatever does not apply to their
/// current mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PilotState {
    pub state: Option<bool>,
    pub scene: Option<i64>,
    pub dimming: Option<i64>,
}

impl PilotState {
    /// A missing `state` reads as off.
    pub fn emitting(&self) -> bool {
        self.state.unwrap_or(false)
    }

    /// The active scene id, falling back to warm white when the bulb omits it.
    pub fn scene_or_warm_white(&self) -> i64 {
        self.scene.unwrap_or(Scene::WarmWhite.id())
    }

    /// The reported brightness, dropped if outside 0-100.
    pub fn brightness(&self) -> Option<Brightness> {
        self.dimming.and_then(Brightness::create)
    }
}

/// A decoded reply. The raw JSON is kept so it can be surfaced verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    raw: Value,
}

impl Reply {
    /// Decodes a UTF-8 JSON datagram.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let text = String::from_utf8(bytes.to_vec()).map_err(Error::Utf8Decode)?;
        let raw = serde_json::from_str(&text).map_err(Error::JsonLoad)?;
        Ok(Reply { raw })
    }

    pub fn from_value(raw: Value) -> Self {
        Reply { raw }
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// The `result` object, if present and non-empty.
    pub fn result(&self) -> Option<&serde_json::Map<String, Value>> {
        self.raw
            .get("result")
            .and_then(Value::as_object)
            .filter(|result| !result.is_empty())
    }

    /// Decodes the `result` object into pilot fields. Fields of the wrong type
    /// are treated as missing.
    pub fn pilot(&self) -> Option<PilotState> {
        let result = self.result()?;
        Some(PilotState {
            state: result.get("state").and_then(Value::as_bool),
            scene: result
                .get("sceneId")
                .and_then(Value::as_i64),
            dimming: result.get("dimming").and_then(Value::as_i64),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_get_pilot_reply() {
        let bytes = br#"{"method":"getPilot","env":"pro","result":{"mac":"a8bb50aabbcc","rssi":-55,"state":true,"sceneId":12,"dimming":40}}"#;
        let reply = Reply::from_bytes(bytes).unwrap();
        let pilot = reply.pilot().unwrap();
        assert!(pilot.emitting());
        assert_eq!(pilot.scene, Some(12));
        assert_eq!(pilot.brightness().unwrap().value(), 40);
        assert_eq!(reply.raw()["result"]["mac"], "a8bb50aabbcc");
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let reply = Reply::from_value(json!({"result": {"rssi": -60}}));
        let pilot = reply.pilot().unwrap();
        assert!(!pilot.emitting());
        assert_eq!(pilot.scene_or_warm_white(), 11);
        assert!(pilot.brightness().is_none());
    }

    #[test]
    fn test_large_and_negative_scene_ids_are_kept() {
        let reply = Reply::from_value(json!({"result": {"state": true, "sceneId": 70000}}));
        assert_eq!(reply.pilot().unwrap().scene_or_warm_white(), 70000);
        let reply = Reply::from_value(json!({"result": {"state": true, "sceneId": -1}}));
        assert_eq!(reply.pilot().unwrap().scene_or_warm_white(), -1);
    }

    #[test]
    fn test_empty_or_absent_result() {
        assert!(Reply::from_value(json!({"result": {}})).pilot().is_none());
        assert!(Reply::from_value(json!({"method": "setState"})).pilot().is_none());
        assert!(Reply::from_value(json!({"result": true})).pilot().is_none());
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(matches!(
            Reply::from_bytes(b"not json"),
            Err(Error::JsonLoad(_))
        ));
        assert!(matches!(
            Reply::from_bytes(&[0xff, 0xfe]),
            Err(Error::Utf8Decode(_))
        ));
    }
}
