#![allow(dead_code)]

// Shell defaults

/// Characters per transport segment used by the shell
pub const SEGMENT_SIZE: usize = netsim::types::constants::SEGMENT_SIZE;

/// Rotation used by the shell's application-layer cipher
pub const CIPHER_KEY: u8 = netsim::types::constants::CIPHER_KEY;

/// Whether the shell creates the Sender and Receiver routers at startup
pub const BOOTSTRAP_DEFAULT_ROUTERS: bool = true;

/// Whether JSON replies are pretty-printed
pub const PRETTY_OUTPUT: bool = true;

// Dummy main function to satisfy Rust compiler for bin directory
#[allow(dead_code)]
fn main() {}
