//! # wiz_bulb_tools
//!
//! Intent-level tools for a single Philips Wiz smart bulb, spoken over UDP.
//!
//! The crate turns a handful of high-level actions (turn off, pick a preset
//! scene, change brightness, read status, describe configuration) into short
//! request/response exchanges with one bulb, and renders each outcome as a
//! human-readable string for an external tool-invocation framework.
//!
//! ## Quick Start
//!
//! ```ignore
//! use serde_json::json;
//! use wiz_bulb_tools::{DeviceEndpoint, ToolBox};
//!
//! async fn dim() -> Result<(), wiz_bulb_tools::Error> {
//!     let tools = ToolBox::new(DeviceEndpoint::from_env()?);
//!     let outcome = tools
//!         .call("adjust_brightness", &json!({"brightness_percent": 40}))
//!         .await;
//!     println!("{outcome}");
//!     Ok(())
//! }
//! ```
//!
//! ## Tools
//!
//! - `turn_off_bulb`: sends `setState` off
//! - `set_warm_white` / `set_daylight`: selects scene 11 or 12 at a brightness
//! - `get_bulb_status`: reads the pilot with `getPilot`
//! - `adjust_brightness`: reads the pilot, then writes the new brightness with
//!   the current scene so the color is kept
//! - `get_bulb_info`: reports the configured endpoint without touching the
//!   network
//!
//! ## Communication
//!
//! Every exchange opens a fresh UDP socket, sends one JSON datagram, and waits
//! up to one second for one reply. A missing, failed, or undecodable reply is
//! reported as "no reply"; nothing is retried.
//!
//! ## Configuration
//!
//! - `WIZ_BULB_IP` (default `192.168.0.148`)
//! - `WIZ_BULB_PORT` (default `38899`)

mod bulb;
mod config;
mod errors;
mod reply;
mod request;
mod tools;
mod transport;
mod types;

// Re-export public API
pub use bulb::Bulb;
pub use config::DeviceEndpoint;
pub use errors::Error;
pub use reply::{PilotState, Reply};
pub use request::{Method, Params, Request};
pub use tools::{Tool, ToolBox, ToolSpec};
pub use transport::{Transport, UdpTransport};
pub use types::{Brightness, Scene};
