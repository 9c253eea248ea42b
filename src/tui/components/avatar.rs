//! # Author Badge
//!
//! The remote UI keys avatar images on the author's user id (posts) or
//! email address (comments). A terminal cannot show those images, but the
//! point of an avatar is a stable visual identity per author, so the same
//! keys map to a stable glyph and accent color instead.
//!
//! Purely presentational; not part of the data contract.

use std::hash::{DefaultHasher, Hash, Hasher};

use ratatui::style::Color;

const PALETTE: [Color; 8] = [
    Color::Cyan,
    Color::Green,
    Color::Yellow,
    Color::Magenta,
    Color::Blue,
    Color::Red,
    Color::LightCyan,
    Color::LightMagenta,
];

const GLYPHS: [&str; 4] = ["●", "◆", "■", "▲"];

/// Stable accent color for an author key (a user id or an email).
pub fn author_color(key: &str) -> Color {
    PALETTE[(key_hash(key) % PALETTE.len() as u64) as usize]
}

/// Stable badge glyph for an author key.
pub fn author_glyph(key: &str) -> &'static str {
    // Shifted so glyph and color don't always co-vary.
    GLYPHS[((key_hash(key) >> 8) % GLYPHS.len() as u64) as usize]
}

fn key_hash(key: &str) -> u64 {
    // DefaultHasher::new() is seed-stable, so badges survive restarts.
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}
