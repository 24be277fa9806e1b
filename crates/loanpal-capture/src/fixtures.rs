// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Shared test fixtures.

use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};
use loanpal_core::types::{FileSource, PickedFile};

/// A real JPEG of a few kilobytes (noisy gradient, so it doesn't compress away).
pub fn sample_jpeg() -> Vec<u8> {
    let img = RgbImage::from_fn(96, 64, |x, y| {
        let noise = (x.wrapping_mul(7919) ^ y.wrapping_mul(104_729)) % 97;
        Rgb([(x * 2) as u8, (y * 3) as u8, noise as u8])
    });
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Jpeg).expect("encode jpeg");
    out.into_inner()
}

/// A camera-style pick whose bytes are already in memory.
pub fn picked_bytes(bytes: Vec<u8>) -> PickedFile {
    PickedFile::from_camera(bytes)
}
