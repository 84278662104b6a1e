use std::fmt;
use std::io::ErrorKind;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;
use tokio::net::{TcpStream, UdpSocket};
use tokio::time::timeout;
use tracing::debug;

/// Upper bound on a single port probe.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// How long a UDP probe listens for an ICMP rejection before calling the port open.
const UDP_SETTLE: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Tcp,
    Udp,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tcp => f.write_str("TCP"),
            Self::Udp => f.write_str("UDP"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortSpec {
    pub protocol: Protocol,
    pub port: u16,
    pub purpose: &'static str,
}

impl fmt::Display for PortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.protocol, self.port)
    }
}

const PNODE_PORTS: [PortSpec; 3] = [
    PortSpec { protocol: Protocol::Udp, port: 5000, purpose: "pNode communication" },
    PortSpec { protocol: Protocol::Tcp, port: 3000, purpose: "Xandminer Web GUI" },
    PortSpec { protocol: Protocol::Tcp, port: 4000, purpose: "Xandminerd service" },
];

const VNODE_PORTS: [PortSpec; 3] = [
    PortSpec { protocol: Protocol::Tcp, port: 8000, purpose: "Validator RPC port" },
    PortSpec { protocol: Protocol::Tcp, port: 8001, purpose: "Validator P2P port" },
    PortSpec { protocol: Protocol::Tcp, port: 8002, purpose: "Validator metrics port" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    PNode,
    VNode,
}

impl NodeKind {
    /// Ports required for this node kind, in report order.
    pub fn ports(self) -> &'static [PortSpec] {
        match self {
            Self::PNode => &PNODE_PORTS,
            Self::VNode => &VNODE_PORTS,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PNode => f.write_str("pNode"),
            Self::VNode => f.write_str("vNode"),
        }
    }
}

/// Outcome of probing one port. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortStatus {
    pub spec: PortSpec,
    pub open: bool,
    pub message: String,
}

/// Parse a dotted-quad IPv4 address: four decimal octets of 1-3 digits, each 0-255.
pub fn parse_ipv4(input: &str) -> Option<Ipv4Addr> {
    let mut octets = [0u8; 4];
    let mut parts = input.split('.');
    for octet in octets.iter_mut() {
        let part = parts.next()?;
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *octet = part.parse::<u8>().ok()?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(Ipv4Addr::from(octets))
}

pub fn validate_ip(input: &str) -> bool {
    parse_ipv4(input).is_some()
}

/// Connectivity test for a single port. Never fails: every failure mode
/// resolves to `(false, message)`.
#[async_trait]
pub trait PortProbe: Send + Sync {
    async fn check_port(&self, ip: Ipv4Addr, port: u16, protocol: Protocol) -> (bool, String);
}

/// Probes with real sockets: TCP connect, or UDP send then listen for a rejection.
pub struct SocketProbe {
    timeout: Duration,
}

impl SocketProbe {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    async fn probe_udp(addr: SocketAddr, settle: Duration) -> std::io::Result<bool> {
        let socket = UdpSocket::bind(("0.0.0.0", 0)).await?;
        socket.connect(addr).await?;
        socket.send(b"\0").await?;

        let mut buf = [0u8; 64];
        match timeout(settle, socket.recv(&mut buf)).await {
            // ICMP port unreachable surfaces as a refused connection on the next recv
            Ok(Err(e)) if e.kind() == ErrorKind::ConnectionRefused => Ok(false),
            Ok(Err(e)) => Err(e),
            Ok(Ok(_)) | Err(_) => Ok(true),
        }
    }
}

impl Default for SocketProbe {
    fn default() -> Self {
        Self::new(PROBE_TIMEOUT)
    }
}

#[async_trait]
impl PortProbe for SocketProbe {
    async fn check_port(&self, ip: Ipv4Addr, port: u16, protocol: Protocol) -> (bool, String) {
        let addr = SocketAddr::from((ip, port));

        let outcome = match protocol {
            Protocol::Tcp => match timeout(self.timeout, TcpStream::connect(addr)).await {
                Ok(Ok(_)) => Ok(true),
                Ok(Err(e)) if e.kind() == ErrorKind::ConnectionRefused => Ok(false),
                Ok(Err(e)) => Err(e),
                Err(_elapsed) => Ok(false),
            },
            Protocol::Udp => {
                let settle = UDP_SETTLE.min(self.timeout / 2);
                match timeout(self.timeout, Self::probe_udp(addr, settle)).await {
                    Ok(result) => result,
                    Err(_elapsed) => Ok(false),
                }
            }
        };

        debug!(%ip, port, %protocol, ?outcome, "port probed");

        match outcome {
            Ok(true) => (true, format!("✅ {} {} is OPEN on {}", protocol, port, ip)),
            Ok(false) => (false, format!("❌ {} {} is CLOSED on {}", protocol, port, ip)),
            Err(e) => (
                false,
                format!("❌ Error checking {} {} on {}: {}", protocol, port, ip, e),
            ),
        }
    }
}

pub struct PortChecker {
    probe: Arc<dyn PortProbe>,
}

impl PortChecker {
    pub fn new(probe: Arc<dyn PortProbe>) -> Self {
        Self { probe }
    }

    /// Probe every required port for `kind`. Probes run concurrently; results
    /// come back in the fixed port-list order.
    pub async fn check_all(&self, ip: Ipv4Addr, kind: NodeKind) -> Vec<PortStatus> {
        let probes = kind.ports().iter().map(|spec| async move {
            let (open, message) = self.probe.check_port(ip, spec.port, spec.protocol).await;
            PortStatus {
                spec: *spec,
                open,
                message,
            }
        });
        join_all(probes).await
    }
}

/// Render probe results as a report with a summary count and verdict.
pub fn format_report(ip: Ipv4Addr, results: &[PortStatus], kind: NodeKind) -> String {
    let mut out = format!("**Port Check Results for {} ({})**\n\n", ip, kind);
    for status in results {
        out.push_str(&status.message);
        out.push('\n');
    }

    let open = results.iter().filter(|s| s.open).count();
    let total = results.len();
    out.push_str(&format!(
        "\n**Summary:** {}/{} required ports are open\n",
        open, total
    ));

    if open == total {
        out.push_str(&format!(
            "🎉 **All ports are open! Your {} should work properly.**",
            kind
        ));
    } else if open > 0 {
        out.push_str("⚠️ **Some ports are closed. Check your firewall settings.**");
    } else {
        out.push_str("🚫 **No required ports are open. Please check your server configuration.**");
    }
    out
}
