use crate::types::RouterName;

/// Number of characters carried by one transport-layer segment
pub const SEGMENT_SIZE: usize = 5;

/// Rotation applied by the application-layer cipher
pub const CIPHER_KEY: u8 = 3;

/// Transport-layer port of the sending application
pub const SOURCE_PORT: u16 = 1234;

/// Transport-layer port of the receiving application
pub const DEST_PORT: u16 = 80;

/// Message reported when no directed path connects two routers
pub const PATH_NOT_FOUND: &str = "Path not found.";

/// Name of the default sending router
pub fn sender() -> RouterName {
    RouterName("Sender".to_string())
}

/// Name of the default receiving router
pub fn receiver() -> RouterName {
    RouterName("Receiver".to_string())
}
