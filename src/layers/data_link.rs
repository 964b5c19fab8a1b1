use serde::{Deserialize, Serialize};

use crate::types::RouterName;
use super::{mac_for, Datagram, Direction, LayerError, LayerKind, MacAddress, Trace};

/// Data-link unit: MAC addressing and a frame check sequence around a datagram
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub source_mac: MacAddress,
    pub dest_mac: MacAddress,
    pub fcs: u32,
    pub payload: Datagram,
}

/// Data-link layer of a single router
#[derive(Debug, Clone)]
pub struct DataLinkLayer {
    own_mac: MacAddress,
}

impl DataLinkLayer {
    pub fn new(own: &RouterName) -> Self {
        Self { own_mac: mac_for(own) }
    }

    /// CRC-32 of the serialized datagram
    pub fn checksum(datagram: &Datagram) -> Result<u32, LayerError> {
        let bytes = serde_json::to_vec(datagram)?;
        Ok(crc32fast::hash(&bytes))
    }

    pub fn send(&self, datagram: Datagram, dest: &RouterName, trace: &mut Trace) -> Result<Frame, LayerError> {
        let frame = Frame {
            source_mac: self.own_mac,
            dest_mac: mac_for(dest),
            fcs: Self::checksum(&datagram)?,
            payload: datagram,
        };
        trace.record(
            LayerKind::DataLink,
            Direction::Send,
            format!("MAC {} -> {}, FCS {:08x}", frame.source_mac, frame.dest_mac, frame.fcs),
        );
        Ok(frame)
    }

    pub fn receive(&self, frame: Frame, trace: &mut Trace) -> Result<Datagram, LayerError> {
        if frame.dest_mac != self.own_mac {
            return Err(LayerError::MacMismatch {
                expected: self.own_mac.to_string(),
                actual: frame.dest_mac.to_string(),
            });
        }
        let actual = Self::checksum(&frame.payload)?;
        if actual != frame.fcs {
            return Err(LayerError::FrameCheckFailed { expected: frame.fcs, actual });
        }
        trace.record(LayerKind::DataLink, Direction::Receive, format!("MAC {} verified, FCS ok", self.own_mac));
        Ok(frame.payload)
    }
}
