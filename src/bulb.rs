//! Command adapter for a single bulb.

use log::debug;

use crate::config::DeviceEndpoint;
use crate::errors::Error;
use crate::reply::Reply;
use crate::request::Request;
use crate::transport::{Transport, UdpTransport};
use crate::types::{Brightness, Scene};

type Result<T> = std::result::Result<T, Error>;

/// The Wiz bulb at a fixed endpoint.
///
/// A `Bulb` holds nothing but its endpoint and transport, so every call is
/// independent of the ones before it. Each operation performs at most two
/// exchanges, one after the other.
///
/// # Example
///
/// ```
/// use std::net::Ipv4Addr;
/// use wiz_bulb_tools::{Bulb, DeviceEndpoint};
///
/// let bulb = Bulb::new(DeviceEndpoint::new(Ipv4Addr::new(192, 168, 1, 100), 38899));
/// assert_eq!(bulb.endpoint().to_string(), "192.168.1.100:38899");
/// ```
#[derive(Debug, Clone)]
pub struct Bulb<T = UdpTransport> {
    endpoint: DeviceEndpoint,
    transport: T,
}

impl Bulb<UdpTransport> {
    pub fn new(endpoint: DeviceEndpoint) -> Self {
        Bulb {
            endpoint,
            transport: UdpTransport::new(endpoint),
        }
    }
}

impl<T: Transport> Bulb<T> {
    /// Human-readable list of what the adapter can do.
    pub const CAPABILITIES: [&'static str; 4] =
        ["turn off", "warm white", "daylight", "check status"];

    pub fn with_transport(endpoint: DeviceEndpoint, transport: T) -> Self {
        Bulb {
            endpoint,
            transport,
        }
    }

    pub fn endpoint(&self) -> DeviceEndpoint {
        self.endpoint
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends `setState` off. Any reply counts as success.
    pub async fn turn_off(&self) -> Result<()> {
        self.send_command(&Request::set_state(false)).await?;
        Ok(())
    }

    /// Selects `scene` at `dimming` percent.
    ///
    /// Out-of-range brightness is rejected before anything is sent.
    pub async fn set_scene(&self, scene: Scene, dimming: i64) -> Result<Brightness> {
        let brightness = Brightness::try_from(dimming)?;
        self.send_command(&Request::scene(scene, brightness)).await?;
        Ok(brightness)
    }

    pub async fn set_warm_white(&self, dimming: i64) -> Result<Brightness> {
        self.set_scene(Scene::WarmWhite, dimming).await
    }

    pub async fn set_daylight(&self, dimming: i64) -> Result<Brightness> {
        self.set_scene(Scene::Daylight, dimming).await
    }

    /// Queries the bulb for its current pilot (live network call).
    pub async fn get_status(&self) -> Result<Reply> {
        self.send_command(&Request::get_pilot()).await
    }

    /// Changes brightness while keeping the active scene.
    ///
    /// Reads the pilot first and writes back its scene id with the new
    /// brightness. A missing scene id is taken as warm white. Refuses to act
    /// on a bulb that reports itself off. Returns the scene id written.
    pub async fn adjust_brightness(&self, percent: i64) -> Result<i64> {
        let brightness = Brightness::try_from(percent)?;

        let pilot = self
            .transport
            .exchange(&Request::get_pilot())
            .await
            .and_then(|reply| reply.pilot())
            .ok_or(Error::StatusUnavailable)?;

        if !pilot.emitting() {
            return Err(Error::DeviceOff);
        }

        let scene = pilot.scene_or_warm_white();
        debug!(
            "keeping scene {} ({}) at {}%",
            scene,
            Scene::name_of(scene),
            brightness.value()
        );
        self.send_command(&Request::set_pilot(scene, brightness))
            .await?;
        Ok(scene)
    }

    async fn send_command(&self, request: &Request) -> Result<Reply> {
        self.transport
            .exchange(request)
            .await
            .ok_or(Error::NoReply)
    }
}
