use std::fmt;

/// A packed RGBA8888 colour: red in the most significant byte, alpha in the
/// least significant.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Rgba(pub u32);

impl Rgba {
    /// Fully transparent black. Points inside the set get this colour.
    pub const TRANSPARENT: Self = Self(0);
    /// Opaque bright green, used by the axis overlay.
    pub const AXIS_MARKER: Self = Self(0x00FF_00FF);

    #[must_use]
    pub const fn from_channels(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(u32::from_be_bytes([r, g, b, a]))
    }

    #[must_use]
    pub const fn r(self) -> u8 {
        self.0.to_be_bytes()[0]
    }

    #[must_use]
    pub const fn g(self) -> u8 {
        self.0.to_be_bytes()[1]
    }

    #[must_use]
    pub const fn b(self) -> u8 {
        self.0.to_be_bytes()[2]
    }

    #[must_use]
    pub const fn a(self) -> u8 {
        self.0.to_be_bytes()[3]
    }

    #[must_use]
    pub const fn to_rgba8(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    #[must_use]
    pub const fn to_rgb8(self) -> [u8; 3] {
        let [r, g, b, _] = self.0.to_be_bytes();
        [r, g, b]
    }
}

impl From<u32> for Rgba {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Lowercase hex without leading zeros, the same text the colour dialog
/// pre-fills its field with.
impl fmt::LowerHex for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}
