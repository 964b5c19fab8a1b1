use serde::{Deserialize, Serialize};

use super::{Direction, LayerError, LayerKind, Trace};

/// Transport-layer unit: the encrypted payload cut into fixed-size segments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportPdu {
    pub source_port: u16,
    pub dest_port: u16,
    pub segments: Vec<String>,
}

impl TransportPdu {
    pub fn number_of_segments(&self) -> usize {
        self.segments.len()
    }
}

/// Transport layer: segmentation and reassembly
#[derive(Debug, Clone)]
pub struct TransportLayer {
    segment_size: usize,
    source_port: u16,
    dest_port: u16,
}

impl TransportLayer {
    pub fn new(segment_size: usize, source_port: u16, dest_port: u16) -> Result<Self, LayerError> {
        if segment_size == 0 {
            return Err(LayerError::InvalidSegmentSize(segment_size));
        }
        Ok(Self { segment_size, source_port, dest_port })
    }

    /// Split `data` into chunks of at most `segment_size` characters
    pub fn segment(&self, data: &str) -> Vec<String> {
        let chars: Vec<char> = data.chars().collect();
        chars.chunks(self.segment_size).map(|chunk| chunk.iter().collect()).collect()
    }

    pub fn reassemble(&self, segments: &[String]) -> String {
        segments.concat()
    }

    pub fn send(&self, data: &str, trace: &mut Trace) -> TransportPdu {
        let segments = self.segment(data);
        trace.record(
            LayerKind::Transport,
            Direction::Send,
            format!(
                "Segmented data into {} parts of at most {} characters, port {} -> {}",
                segments.len(),
                self.segment_size,
                self.source_port,
                self.dest_port
            ),
        );
        TransportPdu { source_port: self.source_port, dest_port: self.dest_port, segments }
    }

    pub fn receive(&self, pdu: TransportPdu, trace: &mut Trace) -> String {
        let data = self.reassemble(&pdu.segments);
        trace.record(
            LayerKind::Transport,
            Direction::Receive,
            format!("Reassembled {} segments", pdu.number_of_segments()),
        );
        data
    }
}
