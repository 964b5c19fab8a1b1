use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

use crate::types::{Route, RouterName};
use crate::utils::logging;
use super::{
    ApplicationLayer, DataLinkLayer, LayerError, MacAddress, NetworkLayer, PhysicalLayer, PipelineConfig, Trace,
    TraceEntry, TransportLayer,
};

/// What the sending side put on the wire, as reported to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderData {
    pub number_of_segments: usize,
    pub segments: Vec<String>,
    pub source_port: u16,
    pub dest_port: u16,
    pub source_ip: Ipv4Addr,
    pub dest_ip: Ipv4Addr,
    /// TTL the datagram left the sender with
    pub ttl: u32,
    pub source_mac: MacAddress,
    pub dest_mac: MacAddress,
    pub fcs: u32,
}

/// Output of the sending stack
#[derive(Debug, Clone)]
pub struct Transmission {
    pub bits: Vec<u8>,
    pub encoded_message: String,
    pub sender_data: SenderData,
}

/// Output of the receiving stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub message: String,
    pub ttl: u32,
}

/// Result of simulating one message along a route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransmissionRecord {
    pub path: Vec<RouterName>,
    pub distance: u64,
    #[serde(rename = "encodedMessage")]
    pub encoded_message: String,
    pub received_message: String,
    /// Same value as `received_message`
    pub message: String,
    pub sender_data: SenderData,
    /// TTL after the receiver's decrement
    pub ttl: u32,
    pub layer_logs: Vec<TraceEntry>,
}

/// The five sending layers of one router, addressed towards `dest`
pub struct SenderStack {
    app: ApplicationLayer,
    transport: TransportLayer,
    network: NetworkLayer,
    data_link: DataLinkLayer,
    physical: PhysicalLayer,
    dest: RouterName,
}

impl SenderStack {
    pub fn new(config: &PipelineConfig, source: &RouterName, dest: &RouterName) -> Result<Self, LayerError> {
        Ok(Self {
            app: ApplicationLayer::new(config.cipher_key),
            transport: TransportLayer::new(config.segment_size, config.source_port, config.dest_port)?,
            network: NetworkLayer::new(source),
            data_link: DataLinkLayer::new(source),
            physical: PhysicalLayer::new(),
            dest: dest.clone(),
        })
    }

    pub fn send(&self, message: &str, route: &Route, trace: &mut Trace) -> Result<Transmission, LayerError> {
        let encoded_message = self.app.send(message, trace);
        let pdu = self.transport.send(&encoded_message, trace);
        let datagram = self.network.send(pdu, route, trace)?;
        let frame = self.data_link.send(datagram, &self.dest, trace)?;
        let bits = self.physical.send(&frame, trace)?;

        let sender_data = SenderData {
            number_of_segments: frame.payload.payload.number_of_segments(),
            segments: frame.payload.payload.segments.clone(),
            source_port: frame.payload.payload.source_port,
            dest_port: frame.payload.payload.dest_port,
            source_ip: frame.payload.source_ip,
            dest_ip: frame.payload.dest_ip,
            ttl: frame.payload.ttl,
            source_mac: frame.source_mac,
            dest_mac: frame.dest_mac,
            fcs: frame.fcs,
        };
        Ok(Transmission { bits, encoded_message, sender_data })
    }
}

/// The five receiving layers of one router
pub struct ReceiverStack {
    app: ApplicationLayer,
    transport: TransportLayer,
    network: NetworkLayer,
    data_link: DataLinkLayer,
    physical: PhysicalLayer,
}

impl ReceiverStack {
    pub fn new(config: &PipelineConfig, own: &RouterName) -> Result<Self, LayerError> {
        Ok(Self {
            app: ApplicationLayer::new(config.cipher_key),
            transport: TransportLayer::new(config.segment_size, config.source_port, config.dest_port)?,
            network: NetworkLayer::new(own),
            data_link: DataLinkLayer::new(own),
            physical: PhysicalLayer::new(),
        })
    }

    pub fn receive(&self, bits: &[u8], trace: &mut Trace) -> Result<Delivery, LayerError> {
        let frame = self.physical.receive(bits, trace)?;
        let datagram = self.data_link.receive(frame, trace)?;
        let (pdu, ttl) = self.network.receive(datagram, trace)?;
        let encoded = self.transport.receive(pdu, trace);
        let message = self.app.receive(&encoded, trace);
        Ok(Delivery { message, ttl })
    }
}

/// Send `message` from the first to the last router of `route` through both stacks
pub fn run_pipeline(config: &PipelineConfig, route: &Route, message: &str) -> Result<TransmissionRecord, LayerError> {
    config.validate()?;
    let source = route.source().ok_or(LayerError::EmptyRoute)?;
    let dest = route.destination().ok_or(LayerError::EmptyRoute)?;

    let sender = SenderStack::new(config, source, dest)?;
    let receiver = ReceiverStack::new(config, dest)?;

    let mut trace = Trace::new();
    let transmission = sender.send(message, route, &mut trace)?;
    let delivery = receiver.receive(&transmission.bits, &mut trace)?;
    logging::log(
        "PIPELINE",
        &format!("Delivered {} -> {} over {} hops, TTL {}", source, dest, route.hop_count(), delivery.ttl),
    );

    Ok(TransmissionRecord {
        path: route.path.clone(),
        distance: route.distance,
        encoded_message: transmission.encoded_message,
        received_message: delivery.message.clone(),
        message: delivery.message,
        sender_data: transmission.sender_data,
        ttl: delivery.ttl,
        layer_logs: trace.into_entries(),
    })
}
