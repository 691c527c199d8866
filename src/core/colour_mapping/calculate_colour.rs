//! The yellow → teal → blue transition ramp.
//!
//! The parameter `t` is split at [`HALF_POINT`]. Each half is rescaled to
//! `s` in `[0, 1]` and drives its own linear ramp:
//!
//! | half            | r               | g                   | b                     |
//! |-----------------|-----------------|---------------------|-----------------------|
//! | `t < 0.5`       | `255 * (1 - s)` | `255 * (1 - s / 2)` | `128 * s`             |
//! | `t >= 0.5`      | `0`             | `127 * (1 - s)`     | `128 * (1 + s / 2)`   |
//!
//! Channels are rounded half away from zero. At `t = 0.5` the second ramp
//! wins and gives `g = 127`, one below the first ramp's limit of `128`.

use crate::core::data::colour::Colour;

pub const HALF_POINT: f64 = 0.5;

/// Rounded channel values before they are narrowed to bytes.
///
/// Inside `[0, 1]` every channel lies in `[0, 255]`; outside it the values
/// follow the ramps and may leave that range.
#[must_use]
pub fn calculate_channels(t: f64) -> [f64; 3] {
    if t < HALF_POINT {
        let s = t * 2.0;

        [
            (255.0 * (1.0 - s)).round(),
            (255.0 * (1.0 - s / 2.0)).round(),
            (128.0 * s).round(),
        ]
    } else {
        let s = (t - HALF_POINT) * 2.0;

        [
            0.0,
            (127.0 * (1.0 - s)).round(),
            (128.0 * (1.0 + s / 2.0)).round(),
        ]
    }
}

/// Maps `t` to its colour on the transition.
///
/// Total over `f64`: channels that fall outside `[0, 255]` for `t` outside
/// `[0, 1]` saturate at the nearest bound, and `NaN` maps to `0`.
#[must_use]
pub fn calculate_colour(t: f64) -> Colour {
    let [r, g, b] = calculate_channels(t);

    Colour {
        r: saturate_channel(r),
        g: saturate_channel(g),
        b: saturate_channel(b),
    }
}

fn saturate_channel(value: f64) -> u8 {
    // NaN survives clamp; the cast maps it to 0.
    value.clamp(0.0, 255.0) as u8
}
