//! Count -> colour mapping.
//!
//! Colours are stored ABGR (little-endian `0xAABBGGRR` -> bytes `[R,G,B,A]`)
//! so the render buffer can be copied straight into canvas `ImageData`.

use crate::core::SandpileError;

pub const PALETTE_SIZE: usize = 4;

/// Colours of the reference page: white, blue, coral, grey.
pub const DEFAULT_PALETTE: [&str; PALETTE_SIZE] = ["#fff", "#2C93E8", "#F56C4E", "#838690"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: [u32; PALETTE_SIZE],
}

impl Palette {
    pub fn from_css(entries: &[String]) -> Result<Self, SandpileError> {
        if entries.len() != PALETTE_SIZE {
            return Err(SandpileError::InvalidConfig(format!(
                "palette needs exactly {} colours, got {}",
                PALETTE_SIZE,
                entries.len()
            )));
        }
        let mut colors = [0u32; PALETTE_SIZE];
        for (slot, css) in colors.iter_mut().zip(entries) {
            *slot = parse_css_hex(css)?;
        }
        Ok(Self { colors })
    }

    /// `palette[count mod 4]`
    #[inline]
    pub fn color_of(&self, count: u8) -> u32 {
        self.colors[(count as usize) % PALETTE_SIZE]
    }

    pub fn colors(&self) -> &[u32; PALETTE_SIZE] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        let mut colors = [0u32; PALETTE_SIZE];
        for (slot, css) in colors.iter_mut().zip(DEFAULT_PALETTE) {
            // Literal table above, always well formed.
            *slot = parse_css_hex(css).unwrap_or(0xFF000000);
        }
        Self { colors }
    }
}

/// Parse `#rgb` / `#rrggbb` into opaque ABGR.
pub fn parse_css_hex(css: &str) -> Result<u32, SandpileError> {
    let bad = || SandpileError::InvalidConfig(format!("bad colour: {:?}", css));
    let hex = css.strip_prefix('#').ok_or_else(bad)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(bad());
    }

    let (r, g, b) = match hex.len() {
        3 => {
            let v = u32::from_str_radix(hex, 16).map_err(|_| bad())?;
            // #abc -> #aabbcc
            let r = (v >> 8) & 0xF;
            let g = (v >> 4) & 0xF;
            let b = v & 0xF;
            (r * 17, g * 17, b * 17)
        }
        6 => {
            let v = u32::from_str_radix(hex, 16).map_err(|_| bad())?;
            ((v >> 16) & 0xFF, (v >> 8) & 0xFF, v & 0xFF)
        }
        _ => return Err(bad()),
    };

    Ok(0xFF00_0000 | (b << 16) | (g << 8) | r)
}
