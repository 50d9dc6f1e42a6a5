//! Color value type and palette handling.

/// 8-bit RGB triple as sent to a panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Multiply every channel by `intensity`, truncating toward zero.
    ///
    /// `intensity` is expected in \[0, 1\]; values outside that range saturate
    /// at the channel bounds.
    pub fn scaled(self, intensity: f32) -> Self {
        let scale = |c: u8| (c as f32 * intensity) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

/// Largest palette a layout of `panel_count` panels can drive.
///
/// Each palette entry owns one band tracker, so the palette is capped two
/// below the panel count (and at zero for tiny layouts).
pub fn max_palette_len(panel_count: usize) -> usize {
    panel_count.saturating_sub(2)
}

/// Keep only the first `max_palette_len(panel_count)` colors.
///
/// Returns the usable slice; the second value is true when anything was cut.
pub fn clamp_palette(colors: &[Rgb], panel_count: usize) -> (&[Rgb], bool) {
    let max = max_palette_len(panel_count);
    if colors.len() > max {
        (&colors[..max], true)
    } else {
        (colors, false)
    }
}
