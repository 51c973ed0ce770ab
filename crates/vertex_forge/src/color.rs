//! Hit-color codec and display palettes.
//!
//! Every point gets a unique "hit color" so a picking pass can render the scene
//! with flat ID colors, read a pixel back, and decode it into the object that
//! was under the cursor. [`encode`] and [`decode`] form a bijection between
//! 24-bit object IDs and RGB byte triples.
use crate::error::{Error, Result};

/// Number of distinct IDs representable as an RGB triple.
pub const ID_SPACE: u32 = 1 << 24;

/// Non-negative object identifier in `[0, 2^24)`.
pub type ObjectId = u32;

/// RGB byte triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels scaled to `[0, 1]` with an opaque alpha.
    pub fn to_rgba_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

/// Encodes an object ID as an RGB triple, most significant byte in red.
pub fn encode(id: ObjectId) -> Result<Rgb> {
    if id >= ID_SPACE {
        return Err(Error::IdOverflow { id: id as u64 });
    }
    Ok(Rgb::new((id >> 16) as u8, (id >> 8) as u8, id as u8))
}

/// Inverse of [`encode`].
pub fn decode(rgb: Rgb) -> ObjectId {
    ((rgb.r as u32) << 16) | ((rgb.g as u32) << 8) | rgb.b as u32
}

/// Decodes an RGBA pixel read back from the picking target. Alpha is ignored.
pub fn decode_pixel(pixel: [u8; 4]) -> ObjectId {
    decode(Rgb::new(pixel[0], pixel[1], pixel[2]))
}

/// Ordered, immutable set of display colors sampled when assigning point colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette<'a> {
    entries: &'a [[u8; 3]],
}

impl<'a> Palette<'a> {
    pub const fn new(entries: &'a [[u8; 3]]) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, slot: usize) -> Option<Rgb> {
        self.entries.get(slot).copied().map(Rgb::from)
    }

    pub fn entries(&self) -> &'a [[u8; 3]] {
        self.entries
    }
}

const DEFAULT_ENTRIES: [[u8; 3]; 8] = [
    [0x3f, 0x88, 0xc5],
    [0xe9, 0x4f, 0x37],
    [0x44, 0xbb, 0xa4],
    [0xf6, 0xae, 0x2d],
    [0x8e, 0x6c, 0x8a],
    [0x39, 0x3e, 0x41],
    [0x9b, 0xc5, 0x3d],
    [0xd6, 0x6b, 0xa0],
];

/// Process-wide default palette.
pub const DEFAULT_PALETTE: Palette<'static> = Palette::new(&DEFAULT_ENTRIES);
