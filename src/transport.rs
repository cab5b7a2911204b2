//! Single-datagram UDP exchange with the bulb.

use std::future::Future;
use std::time::Duration;

use log::{debug, warn};
use tokio::net::UdpSocket;

use crate::config::DeviceEndpoint;
use crate::errors::Error;
use crate::reply::Reply;
use crate::request::Request;

type Result<T> = std::result::Result<T, Error>;

/// Something that can carry one request to the bulb and bring back at most
/// one reply.
///
/// `None` means "no usable reply": the bulb stayed quiet, the send failed, or
/// the answer could not be decoded. Callers cannot and need not tell these
/// apart.
pub trait Transport: Send + Sync {
    fn exchange(&self, request: &Request) -> impl Future<Output = Option<Reply>> + Send;
}

/// UDP transport. Opens a fresh socket per exchange and never retries.
#[derive(Debug, Clone)]
pub struct UdpTransport {
    endpoint: DeviceEndpoint,
    timeout: Duration,
}

impl UdpTransport {
    const TIMEOUT_MS: u64 = 1000;
    const RECV_BUFFER: usize = 1024;

    pub fn new(endpoint: DeviceEndpoint) -> Self {
        Self::with_timeout(endpoint, Duration::from_millis(Self::TIMEOUT_MS))
    }

    /// Same as [`UdpTransport::new`] with a custom receive deadline.
    pub fn with_timeout(endpoint: DeviceEndpoint, timeout: Duration) -> Self {
        UdpTransport { endpoint, timeout }
    }

    pub fn endpoint(&self) -> DeviceEndpoint {
        self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn send_udp(&self, request: &Request) -> Result<Reply> {
        let msg = request.to_bytes()?;

        let socket = UdpSocket::bind("0.0.0.0:0")
            .await
            .map_err(|e| Error::socket("bind", e))?;

        socket
            .send_to(&msg, self.endpoint.socket_addr())
            .await
            .map_err(|e| Error::socket("send", e))?;

        let mut buffer = [0u8; Self::RECV_BUFFER];
        let (bytes, _) = tokio::time::timeout(self.timeout, socket.recv_from(&mut buffer))
            .await
            .map_err(|_| Error::Timeout(self.timeout.as_millis() as u64))?
            .map_err(|e| Error::socket("receive", e))?;

        Reply::from_bytes(&buffer[..bytes])
    }
}

impl Transport for UdpTransport {
    async fn exchange(&self, request: &Request) -> Option<Reply> {
        debug!("UDP request to {}: {:?}", self.endpoint, request);
        match self.send_udp(request).await {
            Ok(reply) => {
                debug!("UDP response: {:?}", reply.raw());
                Some(reply)
            }
            Err(e) if e.is_timeout() => {
                debug!("no reply from {}: {}", self.endpoint, e);
                None
            }
            Err(e) => {
                warn!("exchange with {} failed: {}", self.endpoint, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Brightness, Scene};
    use serde_json::{Value, json};
    use std::net::{Ipv4Addr, SocketAddr};

    async fn fake_bulb() -> (UdpSocket, DeviceEndpoint) {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let port = socket.local_addr().unwrap().port();
        (socket, DeviceEndpoint::new(Ipv4Addr::LOCALHOST, port))
    }

    async fn answer_once(socket: &UdpSocket, reply: &[u8]) -> Value {
        let mut buffer = [0u8; 1024];
        let (n, from): (usize, SocketAddr) = socket.recv_from(&mut buffer).await.unwrap();
        socket.send_to(reply, from).await.unwrap();
        serde_json::from_slice(&buffer[..n]).unwrap()
    }

    #[tokio::test]
    async fn test_exchange_returns_decoded_reply() {
        let (bulb, endpoint) = fake_bulb().await;
        let transport = UdpTransport::new(endpoint);

        let server = tokio::spawn(async move {
            answer_once(
                &bulb,
                br#"{"method":"getPilot","env":"pro","result":{"state":true,"sceneId":12,"dimming":55}}"#,
            )
            .await
        });

        let reply = transport.exchange(&Request::get_pilot()).await.unwrap();
        let seen = server.await.unwrap();

        assert_eq!(seen, json!({"method": "getPilot", "params": {}}));
        let pilot = reply.pilot().unwrap();
        assert_eq!(pilot.scene, Some(12));
        assert_eq!(pilot.brightness(), Brightness::create(55));
    }

    #[tokio::test]
    async fn test_exchange_sends_set_pilot() {
        let (bulb, endpoint) = fake_bulb().await;
        let transport = UdpTransport::new(endpoint);

        let server = tokio::spawn(async move {
            answer_once(&bulb, br#"{"method":"setPilot","env":"pro","result":{"success":true}}"#)
                .await
        });

        let request = Request::scene(Scene::Daylight, Brightness::create(30).unwrap());
        assert!(transport.exchange(&request).await.is_some());
        assert_eq!(
            server.await.unwrap(),
            json!({"id": 1, "method": "setPilot", "params": {"sceneId": 12, "dimming": 30}})
        );
    }

    #[tokio::test]
    async fn test_silent_bulb_is_no_reply() {
        let (_bulb, endpoint) = fake_bulb().await;
        let transport = UdpTransport::with_timeout(endpoint, Duration::from_millis(50));

        assert!(transport.exchange(&Request::set_state(false)).await.is_none());
    }

    #[tokio::test]
    async fn test_garbage_reply_is_no_reply() {
        let (bulb, endpoint) = fake_bulb().await;
        let transport = UdpTransport::new(endpoint);

        let server = tokio::spawn(async move { answer_once(&bulb, b"\xffgarbage").await });

        assert!(transport.exchange(&Request::get_pilot()).await.is_none());
        server.await.unwrap();
    }

    #[test]
    fn test_default_timeout() {
        let transport = UdpTransport::new(DeviceEndpoint::default());
        assert_eq!(transport.timeout(), Duration::from_secs(1));
        assert_eq!(transport.endpoint(), DeviceEndpoint::default());
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use serde_json::Value;

    use super::Transport;
    use crate::reply::Reply;
    use crate::request::Request;

    /// Records every request and answers from a script. An exhausted script
    /// behaves like a silent bulb.
    #[derive(Default)]
    pub(crate) struct ScriptedTransport {
        replies: Mutex<VecDeque<Option<Reply>>>,
        sent: Mutex<Vec<Request>>,
    }

    impl ScriptedTransport {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn reply(self, raw: Value) -> Self {
            self.replies
                .lock()
                .unwrap()
                .push_back(Some(Reply::from_value(raw)));
            self
        }

        pub(crate) fn silence(self) -> Self {
            self.replies.lock().unwrap().push_back(None);
            self
        }

        pub(crate) fn sent(&self) -> Vec<Request> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl Transport for ScriptedTransport {
        async fn exchange(&self, request: &Request) -> Option<Reply> {
            self.sent.lock().unwrap().push(request.clone());
            self.replies.lock().unwrap().pop_front().flatten()
        }
    }
}
