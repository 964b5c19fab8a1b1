use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

use crate::types::{Route, RouterName};
use super::{ip_for, Direction, LayerError, LayerKind, Trace, TransportPdu};

/// Network-layer unit: addressing and TTL around a transport unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Datagram {
    pub source_ip: Ipv4Addr,
    pub dest_ip: Ipv4Addr,
    pub ttl: u32,
    pub route: Vec<RouterName>,
    pub payload: TransportPdu,
}

/// Network layer: synthetic IP addressing, hop-count TTL and per-hop forwarding
#[derive(Debug, Clone)]
pub struct NetworkLayer {
    own_ip: Ipv4Addr,
}

impl NetworkLayer {
    /// Network layer of the router named `own`
    pub fn new(own: &RouterName) -> Self {
        Self { own_ip: ip_for(own) }
    }

    /// TTL a datagram starts with on `route`: its hop count, at least 1
    pub fn initial_ttl(route: &Route) -> u32 {
        u32::try_from(route.hop_count()).unwrap_or(u32::MAX).max(1)
    }

    pub fn send(&self, payload: TransportPdu, route: &Route, trace: &mut Trace) -> Result<Datagram, LayerError> {
        let destination = route.destination().ok_or(LayerError::EmptyRoute)?;
        let datagram = Datagram {
            source_ip: self.own_ip,
            dest_ip: ip_for(destination),
            ttl: Self::initial_ttl(route),
            route: route.path.clone(),
            payload,
        };
        trace.record(
            LayerKind::Network,
            Direction::Send,
            format!("IP {} -> {}, TTL = {}", datagram.source_ip, datagram.dest_ip, datagram.ttl),
        );
        for hop in &datagram.route {
            trace.record(LayerKind::Network, Direction::Send, format!("Forwarding via {}", hop));
        }
        Ok(datagram)
    }

    /// Verify the destination address and decrement the TTL once.
    /// Returns the transport unit together with the remaining TTL.
    pub fn receive(&self, datagram: Datagram, trace: &mut Trace) -> Result<(TransportPdu, u32), LayerError> {
        if datagram.dest_ip != self.own_ip {
            return Err(LayerError::IpMismatch {
                expected: self.own_ip.to_string(),
                actual: datagram.dest_ip.to_string(),
            });
        }
        let ttl = datagram.ttl.saturating_sub(1);
        trace.record(LayerKind::Network, Direction::Receive, format!("TTL now {}, delivered to {}", ttl, self.own_ip));
        Ok((datagram.payload, ttl))
    }
}
