//! Device endpoint configuration.

use std::fmt;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use serde::{Deserialize, Serialize};

use crate::errors::Error;

type Result<T> = std::result::Result<T, Error>;

/// The address and port of the one bulb this process talks to.
///
/// Resolved once at startup and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use std::net::Ipv4Addr;
/// use wiz_bulb_tools::DeviceEndpoint;
///
/// let endpoint = DeviceEndpoint::new(Ipv4Addr::new(10, 0, 0, 7), 38899);
/// assert_eq!(endpoint.to_string(), "10.0.0.7:38899");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceEndpoint {
    ip: Ipv4Addr,
    port: u16,
}

impl Default for DeviceEndpoint {
    fn default() -> Self {
        DeviceEndpoint {
            ip: Self::DEFAULT_IP,
            port: Self::DEFAULT_PORT,
        }
    }
}

impl DeviceEndpoint {
    pub const IP_VAR: &'static str = "WIZ_BULB_IP";
    pub const PORT_VAR: &'static str = "WIZ_BULB_PORT";
    pub const DEFAULT_IP: Ipv4Addr = Ipv4Addr::new(192, 168, 0, 148);
    pub const DEFAULT_PORT: u16 = 38899;

    pub fn new(ip: Ipv4Addr, port: u16) -> Self {
        DeviceEndpoint { ip, port }
    }

    pub fn ip(&self) -> Ipv4Addr {
        self.ip
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::V4(SocketAddrV4::new(self.ip, self.port))
    }

    /// Reads `WIZ_BULB_IP` and `WIZ_BULB_PORT` from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the endpoint through an arbitrary key lookup.
    ///
    /// Unset keys fall back to the defaults; set but unparseable keys are an
    /// error.
    ///
    /// # Examples
    ///
    /// ```
    /// use wiz_bulb_tools::DeviceEndpoint;
    ///
    /// let endpoint = DeviceEndpoint::from_lookup(|key| match key {
    ///     "WIZ_BULB_PORT" => Some("40000".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(endpoint.ip(), DeviceEndpoint::DEFAULT_IP);
    /// assert_eq!(endpoint.port(), 40000);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let ip = match lookup(Self::IP_VAR) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| Error::invalid_config(Self::IP_VAR, &raw))?,
            None => Self::DEFAULT_IP,
        };
        let port = match lookup(Self::PORT_VAR) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| Error::invalid_config(Self::PORT_VAR, &raw))?,
            None => Self::DEFAULT_PORT,
        };
        Ok(DeviceEndpoint { ip, port })
    }
}

impl fmt::Display for DeviceEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.ip, self.port)
    }
}
