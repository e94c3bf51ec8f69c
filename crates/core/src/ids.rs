//! Record id and site join-code generation.
//!
//! Ids are opaque; uniqueness within a collection is best-effort. Site codes
//! are short, human-shareable, and only probabilistically unique.

use rand::Rng;

/// Number of characters in a site join code.
pub const SITE_CODE_LENGTH: usize = 5;

/// Alphabet site codes are drawn from.
pub const SITE_CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a site join code from the given random source.
pub fn generate_site_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..SITE_CODE_LENGTH)
        .map(|_| char::from(SITE_CODE_ALPHABET[rng.random_range(0..SITE_CODE_ALPHABET.len())]))
        .collect()
}

/// Source of fresh record ids and site codes.
pub trait IdSource: Send + Sync {
    /// A new opaque record id.
    fn record_id(&self) -> String;

    /// A new site join code.
    fn site_code(&self) -> String;
}

/// Production id source: UUID v4 record ids and thread-rng site codes.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn record_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }

    fn site_code(&self) -> String {
        generate_site_code(&mut rand::rng())
    }
}
