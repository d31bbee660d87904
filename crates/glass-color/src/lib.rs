// SPDX-License-Identifier: MIT
//
// glass-color — color primitives for the Frosted Glass theme generator.
//
// RGB is the canonical at-rest form. Two textual encodings show up at the
// boundary (decimal triples like "106, 116, 211" and hex like "#6A74D3"),
// and HLS exists only as the working space for tonal palette generation.

pub mod color;
pub mod hls;

pub use color::{ParseColorError, Rgb};
pub use hls::Hls;
