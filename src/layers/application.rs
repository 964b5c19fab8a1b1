use super::{Direction, LayerKind, Trace};

/// First printable ASCII character
const PRINTABLE_FIRST: u8 = b' ';
/// Number of printable ASCII characters (' ' through '~')
const PRINTABLE_LEN: u8 = 95;

/// Application layer: a rotation cipher over printable ASCII.
/// Characters outside that range pass through untouched, so the transform is a bijection on strings.
#[derive(Debug, Clone)]
pub struct ApplicationLayer {
    key: u8,
}

impl ApplicationLayer {
    pub fn new(key: u8) -> Self {
        Self { key: key % PRINTABLE_LEN }
    }

    pub fn encrypt(&self, text: &str) -> String {
        text.chars().map(|c| rotate(c, self.key)).collect()
    }

    pub fn decrypt(&self, text: &str) -> String {
        let inverse = (PRINTABLE_LEN - self.key) % PRINTABLE_LEN;
        text.chars().map(|c| rotate(c, inverse)).collect()
    }

    pub fn send(&self, message: &str, trace: &mut Trace) -> String {
        let encrypted = self.encrypt(message);
        trace.record(
            LayerKind::Application,
            Direction::Send,
            format!("Encrypted {} characters: {}", message.chars().count(), encrypted),
        );
        encrypted
    }

    pub fn receive(&self, payload: &str, trace: &mut Trace) -> String {
        let decrypted = self.decrypt(payload);
        trace.record(LayerKind::Application, Direction::Receive, format!("Decrypted message: {}", decrypted));
        decrypted
    }
}

fn rotate(c: char, shift: u8) -> char {
    if !(' '..='~').contains(&c) {
        return c;
    }
    let offset = c as u8 - PRINTABLE_FIRST;
    char::from(PRINTABLE_FIRST + (offset + shift) % PRINTABLE_LEN)
}
