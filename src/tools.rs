//! Tool catalog and dispatch for intent-driven callers.
//!
//! Every tool returns a single descriptive string. Successful actions start
//! with `✅`, failures with `❌`, and each message names the configured bulb
//! endpoint.

use std::str::FromStr;

use serde::Serialize;
use serde_json::{Value, json};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::bulb::Bulb;
use crate::config::DeviceEndpoint;
use crate::errors::Error;
use crate::reply::Reply;
use crate::transport::{Transport, UdpTransport};
use crate::types::{Brightness, Scene};

type Result<T> = std::result::Result<T, Error>;

/// The callable tools, named as callers see them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, IntoStaticStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Tool {
    TurnOffBulb,
    SetWarmWhite,
    SetDaylight,
    GetBulbStatus,
    AdjustBrightness,
    GetBulbInfo,
}

impl Tool {
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Natural-language description used by callers for intent matching.
    pub fn description(&self) -> &'static str {
        match self {
            Tool::TurnOffBulb => {
                "Turn off the light/lamp/bulb. Use this when user asks to turn off the light, \
                 switch off the lamp, or turn off the bulb. This will completely turn off the \
                 smart light bulb."
            }
            Tool::SetWarmWhite => {
                "Set the light/lamp/bulb to warm white color. Use this when user asks for warm \
                 light, cozy lighting, or warm white. Default brightness is 100% (full \
                 brightness) unless user specifically asks for different brightness."
            }
            Tool::SetDaylight => {
                "Set the light/lamp/bulb to daylight/white color. Use this when user asks for \
                 bright light, daylight, white light, or natural lighting. Default brightness is \
                 100% (full brightness) unless user specifically asks for different brightness."
            }
            Tool::GetBulbStatus => {
                "Get the current status of the light/lamp/bulb. Use this to check if the light \
                 is on/off, current brightness, and color mode. This is useful when user asks \
                 about the current state of the light."
            }
            Tool::AdjustBrightness => {
                "Adjust the brightness of the light/lamp/bulb while maintaining the current color \
                 scene. Use this when user asks for brightness changes like 'make it dimmer', \
                 'less bright', 'brighter', 'set to 50%', etc. This function automatically \
                 checks the current scene and maintains it while adjusting brightness."
            }
            Tool::GetBulbInfo => {
                "Get information about the configured light/lamp/bulb. Use this when user asks \
                 about the light setup or configuration."
            }
        }
    }

    /// JSON Schema of the tool's arguments.
    pub fn input_schema(&self) -> Value {
        match self {
            Tool::SetWarmWhite | Tool::SetDaylight => json!({
                "type": "object",
                "properties": {
                    "dimming": {
                        "type": "integer",
                        "minimum": 0,
                        "maximum": 100,
                        "default": 100,
                        "description": "Brightness level (0-100). Only use values other than 100 \
                            if user specifically asks for different brightness like 'make it \
                            dimmer', 'less bright', 'brighter', etc."
                    }
                }
            }),
            Tool::AdjustBrightness => json!({
                "type": "object",
                "properties": {
                    "brightness_percent": {
                        "type": "integer",
                        "minimum": 0,
                        "maximum": 100,
                        "description": "Brightness level (0-100). Use this value directly as \
                            requested by user."
                    }
                },
                "required": ["brightness_percent"]
            }),
            Tool::TurnOffBulb | Tool::GetBulbStatus | Tool::GetBulbInfo => json!({
                "type": "object",
                "properties": {}
            }),
        }
    }

    pub fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: self.name(),
            description: self.description(),
            input_schema: self.input_schema(),
        }
    }

    /// All tools in catalog order.
    pub fn catalog() -> Vec<ToolSpec> {
        Tool::iter().map(|tool| tool.spec()).collect()
    }
}

/// A catalog entry as handed to the invocation framework.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

/// Runs tools against one bulb and renders their outcomes.
///
/// # Example
///
/// ```
/// use wiz_bulb_tools::{DeviceEndpoint, ToolBox};
///
/// let tools = ToolBox::new(DeviceEndpoint::default());
/// assert!(tools.get_bulb_info().contains("Port: 38899"));
/// ```
#[derive(Debug, Clone)]
pub struct ToolBox<T = UdpTransport> {
    bulb: Bulb<T>,
}

impl ToolBox<UdpTransport> {
    pub fn new(endpoint: DeviceEndpoint) -> Self {
        ToolBox {
            bulb: Bulb::new(endpoint),
        }
    }
}

impl<T: Transport> ToolBox<T> {
    pub fn with_bulb(bulb: Bulb<T>) -> Self {
        ToolBox { bulb }
    }

    pub fn bulb(&self) -> &Bulb<T> {
        &self.bulb
    }

    /// Resolves `name` and runs it with loosely typed JSON `arguments`.
    pub async fn call(&self, name: &str, arguments: &Value) -> String {
        match Tool::from_str(name) {
            Ok(tool) => self.invoke(tool, arguments).await,
            Err(_) => self.failure(&Error::UnknownTool(name.to_string())),
        }
    }

    pub async fn invoke(&self, tool: Tool, arguments: &Value) -> String {
        match tool {
            Tool::TurnOffBulb => self.turn_off_bulb().await,
            Tool::SetWarmWhite => match int_argument(arguments, "dimming", Some(100)) {
                Ok(dimming) => self.set_warm_white(dimming).await,
                Err(e) => self.failure(&e),
            },
            Tool::SetDaylight => match int_argument(arguments, "dimming", Some(100)) {
                Ok(dimming) => self.set_daylight(dimming).await,
                Err(e) => self.failure(&e),
            },
            Tool::GetBulbStatus => self.get_bulb_status().await,
            Tool::AdjustBrightness => match int_argument(arguments, "brightness_percent", None) {
                Ok(percent) => self.adjust_brightness(percent).await,
                Err(e) => self.failure(&e),
            },
            Tool::GetBulbInfo => self.get_bulb_info(),
        }
    }

    pub async fn turn_off_bulb(&self) -> String {
        match self.bulb.turn_off().await {
            Ok(()) => self.success("Light turned off successfully"),
            Err(e) => self.failure_or(&e, "Failed to turn off light"),
        }
    }

    pub async fn set_warm_white(&self, dimming: i64) -> String {
        self.set_scene(Scene::WarmWhite, dimming).await
    }

    pub async fn set_daylight(&self, dimming: i64) -> String {
        self.set_scene(Scene::Daylight, dimming).await
    }

    pub async fn get_bulb_status(&self) -> String {
        match self.bulb.get_status().await {
            Ok(reply) => self.success(&describe_status(&reply)),
            Err(e) => self.failure_or(&e, "Failed to get light status"),
        }
    }

    pub async fn adjust_brightness(&self, percent: i64) -> String {
        match self.bulb.adjust_brightness(percent).await {
            Ok(scene) => self.success(&format!(
                "Light brightness adjusted to {}% while maintaining {} color",
                percent,
                Scene::name_of(scene)
            )),
            Err(e) => self.failure_or(&e, "Failed to adjust brightness"),
        }
    }

    /// Reports the configured endpoint. Never touches the network.
    pub fn get_bulb_info(&self) -> String {
        let endpoint = self.bulb.endpoint();
        format!(
            "🔍 Light Configuration:\n- IP Address: {}\n- Port: {}\n- Available commands: {}",
            endpoint.ip(),
            endpoint.port(),
            Bulb::<T>::CAPABILITIES.join(", ")
        )
    }

    async fn set_scene(&self, scene: Scene, dimming: i64) -> String {
        let label = scene.to_string().to_lowercase();
        match self.bulb.set_scene(scene, dimming).await {
            Ok(brightness) => self.success(&format!(
                "Light set to {} {}",
                label,
                brightness_phrase(brightness)
            )),
            Err(e) => self.failure_or(&e, &format!("Failed to set light to {}", label)),
        }
    }

    fn success(&self, message: &str) -> String {
        format!("✅ {} (IP: {})", message, self.bulb.endpoint())
    }

    /// Renders `e`, using `fallback` when the bulb simply did not answer.
    fn failure_or(&self, e: &Error, fallback: &str) -> String {
        match e {
            Error::NoReply => format!("❌ {} (IP: {})", fallback, self.bulb.endpoint()),
            _ => self.failure(e),
        }
    }

    fn failure(&self, e: &Error) -> String {
        let message = match e {
            Error::InvalidBrightness(_) => "Brightness value must be between 0 and 100".to_string(),
            Error::DeviceOff => "Light is currently off. Please turn it on first.".to_string(),
            Error::StatusUnavailable => {
                "Could not retrieve light status to adjust brightness".to_string()
            }
            Error::NoReply => "No reply from light".to_string(),
            Error::UnknownTool(name) => format!("Unknown tool {}", name),
            Error::InvalidArgument { name, reason } => format!("Argument {} {}", name, reason),
            other => other.to_string(),
        };
        format!("❌ {} (IP: {})", message, self.bulb.endpoint())
    }
}

fn brightness_phrase(brightness: Brightness) -> String {
    if brightness.is_full() {
        "at full brightness".to_string()
    } else {
        format!("at {}% brightness", brightness.value())
    }
}

fn describe_status(reply: &Reply) -> String {
    let raw = serde_json::to_string(reply.raw()).unwrap_or_else(|_| "{}".to_string());
    let Some(pilot) = reply.pilot() else {
        return format!("Light status\n- Raw reply: {}", raw);
    };

    let power = match pilot.state {
        Some(true) => "ON",
        Some(false) => "OFF",
        None => "not reported",
    };
    let scene = pilot.scene.map_or_else(
        || "not reported".to_string(),
        |id| format!("{} ({})", Scene::name_of(id), id),
    );
    let brightness = pilot
        .brightness()
        .map_or_else(|| "not reported".to_string(), |b| format!("{}%", b.value()));

    format!(
        "Light status\n- Power: {}\n- Scene: {}\n- Brightness: {}\n- Raw reply: {}",
        power, scene, brightness, raw
    )
}

/// Reads an integer argument, accepting integral floats and numeric strings.
/// Integers too large for `i64` saturate so range checks still reject them.
fn int_argument(arguments: &Value, name: &str, default: Option<i64>) -> Result<i64> {
    match arguments.get(name) {
        None | Some(Value::Null) => {
            default.ok_or_else(|| Error::invalid_argument(name, "is required"))
        }
        Some(value) => {
            as_integer(value).ok_or_else(|| Error::invalid_argument(name, "must be an integer"))
        }
    }
}

fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            // float to int casts saturate
            n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)
        }),
        Value::String(s) => s
            .trim()
            .parse::<i128>()
            .ok()
            .map(|v| v.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64),
        _ => None,
    }
}
