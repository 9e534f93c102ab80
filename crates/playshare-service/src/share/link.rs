//! Share identifier generation.

use rand::Rng;

/// URL-safe alphabet; 64 symbols, 6 bits of entropy per character.
const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Default identifier length (60 bits of entropy).
pub const DEFAULT_ID_LENGTH: usize = 10;

/// Generates unguessable share identifiers.
#[derive(Debug, Clone)]
pub struct LinkService {
    id_length: usize,
}

impl LinkService {
    /// Creates a link service producing identifiers of `id_length` characters.
    pub fn new(id_length: usize) -> Self {
        Self {
            id_length: id_length.max(1),
        }
    }

    /// Generates a random identifier from the thread-local CSPRNG.
    pub fn generate_id(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..self.id_length)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

impl Default for LinkService {
    fn default() -> Self {
        Self::new(DEFAULT_ID_LENGTH)
    }
}
