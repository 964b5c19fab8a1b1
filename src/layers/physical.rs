use super::{Direction, Frame, LayerError, LayerKind, Trace};

/// Physical layer: frames become a byte stream and back
#[derive(Debug, Clone, Default)]
pub struct PhysicalLayer;

impl PhysicalLayer {
    pub fn new() -> Self {
        Self
    }

    pub fn send(&self, frame: &Frame, trace: &mut Trace) -> Result<Vec<u8>, LayerError> {
        let bits = serde_json::to_vec(frame)?;
        trace.record(LayerKind::Physical, Direction::Send, format!("{} bits transmitted", bits.len() * 8));
        Ok(bits)
    }

    pub fn receive(&self, bits: &[u8], trace: &mut Trace) -> Result<Frame, LayerError> {
        let frame = serde_json::from_slice(bits)?;
        trace.record(
            LayerKind::Physical,
            Direction::Receive,
            format!("{} bits received and decoded", bits.len() * 8),
        );
        Ok(frame)
    }
}
