//! Request datagrams sent to the bulb.

use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::types::{Brightness, Scene};

/// The bulb methods this adapter speaks.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    #[serde(rename = "getPilot")]
    GetPilot,
    #[serde(rename = "setState")]
    SetState,
    #[serde(rename = "setPilot")]
    SetPilot,
}

/// Method parameters. Unset fields are left off the wire.
#[serde_with::skip_serializing_none]
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Params {
    pub(crate) state: Option<bool>,
    #[serde(rename = "sceneId")]
    pub(crate) scene: Option<i64>,
    pub(crate) dimming: Option<u8>,
}

impl Params {
    pub fn state(&self) -> Option<bool> {
        self.state
    }

    pub fn scene(&self) -> Option<i64> {
        self.scene
    }

    pub fn dimming(&self) -> Option<u8> {
        self.dimming
    }
}

/// A one-shot request to the bulb.
///
/// # Examples
///
/// ```
/// use wiz_bulb_tools::{Brightness, Request, Scene};
///
/// let request = Request::set_pilot(Scene::Daylight.id(), Brightness::create(30).unwrap());
/// assert_eq!(
///     request.to_bytes().unwrap(),
///     br#"{"id":1,"method":"setPilot","params":{"sceneId":12,"dimming":30}}"#
/// );
/// ```
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Request {
    pub(crate) id: Option<u32>,
    pub(crate) method: Method,
    pub(crate) params: Params,
}

impl Request {
    const COMMAND_ID: u32 = 1;

    /// Status query. Sent without an id and with empty params.
    pub fn get_pilot() -> Self {
        Request {
            id: None,
            method: Method::GetPilot,
            params: Params::default(),
        }
    }

    /// Power change.
    pub fn set_state(on: bool) -> Self {
        Request {
            id: Some(Self::COMMAND_ID),
            method: Method::SetState,
            params: Params {
                state: Some(on),
                ..Params::default()
            },
        }
    }

    /// Scene and brightness change. The scene id is passed through verbatim so
    /// that a scene read back from the bulb can be written back unchanged.
    pub fn set_pilot(scene_id: i64, brightness: Brightness) -> Self {
        Request {
            id: Some(Self::COMMAND_ID),
            method: Method::SetPilot,
            params: Params {
                scene: Some(scene_id),
                dimming: Some(brightness.value),
                ..Params::default()
            },
        }
    }

    /// Selects one of the modelled preset scenes.
    pub fn scene(scene: Scene, brightness: Brightness) -> Self {
        Self::set_pilot(scene.id(), brightness)
    }

    pub fn id(&self) -> Option<u32> {
        self.id
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Encodes the request as a UTF-8 JSON datagram.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        serde_json::to_vec(self).map_err(Error::JsonDump)
    }
}
