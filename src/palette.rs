use anyhow::{bail, Context};
use tiles_core::Rgb;

// Built-in palettes. Entry order matters: color i drives band i.
pub const AURORA: &[[u8; 3]] = &[
    [0, 255, 128],
    [0, 128, 255],
    [128, 0, 255],
    [255, 0, 160],
    [255, 200, 0],
    [0, 255, 255],
];
pub const FIRE: &[[u8; 3]] = &[
    [255, 40, 0],
    [255, 120, 0],
    [255, 200, 0],
    [255, 255, 120],
    [180, 0, 0],
];
pub const OCEAN: &[[u8; 3]] = &[
    [0, 60, 255],
    [0, 160, 255],
    [0, 255, 200],
    [40, 255, 120],
    [0, 30, 120],
];
pub const MONO: &[[u8; 3]] = &[[255, 255, 255]];

pub const PRESET_NAMES: &[&str] = &["aurora", "fire", "ocean", "mono"];

pub fn preset(name: &str) -> Option<Vec<Rgb>> {
    let colors = match name.to_ascii_lowercase().as_str() {
        "aurora" => AURORA,
        "fire" => FIRE,
        "ocean" => OCEAN,
        "mono" => MONO,
        _ => return None,
    };
    Some(colors.iter().copied().map(Rgb::from).collect())
}

/// Parse a comma-separated list of `#rrggbb` colors (the `#` is optional).
pub fn parse_palette(list: &str) -> anyhow::Result<Vec<Rgb>> {
    let colors = list
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_hex)
        .collect::<anyhow::Result<Vec<_>>>()?;
    if colors.is_empty() {
        bail!("palette {list:?} has no colors");
    }
    Ok(colors)
}

/// A preset name, or failing that a color list.
pub fn resolve(arg: &str) -> anyhow::Result<Vec<Rgb>> {
    match preset(arg) {
        Some(colors) => Ok(colors),
        None => parse_palette(arg).with_context(|| {
            format!("unknown palette {arg:?}; expected one of {PRESET_NAMES:?} or #rrggbb,...")
        }),
    }
}

fn parse_hex(s: &str) -> anyhow::Result<Rgb> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.is_ascii() {
        bail!("color {s:?} is not in #rrggbb form");
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).with_context(|| format!("bad hex in color {s:?}"))
    };
    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}
