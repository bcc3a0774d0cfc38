//! RGBA colors for sparks.

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SparkColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SparkColor {
    pub const WHITE: SparkColor = SparkColor::rgba(255, 255, 255, 255);
    pub const BLACK: SparkColor = SparkColor::rgba(0, 0, 0, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Darken each RGB channel by `amount`, clamped at zero and rounded up.
    /// Alpha is left as is.
    pub fn faded(self, amount: f32) -> Self {
        let fade = |c: u8| (c as f32 - amount).max(0.0).ceil() as u8;
        Self {
            r: fade(self.r),
            g: fade(self.g),
            b: fade(self.b),
            a: self.a,
        }
    }

    pub fn is_black(&self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }

    /// Channels normalized to 0.0-1.0.
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

impl From<[u8; 4]> for SparkColor {
    fn from(c: [u8; 4]) -> Self {
        Self::rgba(c[0], c[1], c[2], c[3])
    }
}

impl From<(u8, u8, u8, u8)> for SparkColor {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::rgba(r, g, b, a)
    }
}
