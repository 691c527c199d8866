//! Pixel format conversion between the RGB raster and RGBA surfaces.

pub const OPAQUE_ALPHA: u8 = 255;

/// Copies packed RGB pixels into an RGBA destination, forcing alpha to
/// [`OPAQUE_ALPHA`].
///
/// # Panics
/// Panics if `src` is not a whole number of RGB pixels or if `dst` does not
/// hold exactly one RGBA pixel per source pixel.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) {
    assert!(
        src.len() % 3 == 0,
        "src length {} is not a multiple of 3",
        src.len()
    );
    let expected_dst_len = (src.len() / 3) * 4;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    for (rgb, rgba) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        rgba[..3].copy_from_slice(rgb);
        rgba[3] = OPAQUE_ALPHA;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_rgb_to_rgba_gradient_endpoints() {
        let src = vec![
            255, 255, 0, // t = 0
            0, 127, 128, // t = 0.5
            0, 0, 192, // t = 1
        ];
        let mut dst = vec![0; 12];

        copy_rgb_to_rgba(&src, &mut dst);

        assert_eq!(dst, vec![255, 255, 0, 255, 0, 127, 128, 255, 0, 0, 192, 255]);
    }

    #[test]
    fn test_copy_rgb_to_rgba_overwrites_existing_alpha() {
        let src = vec![1, 2, 3];
        let mut dst = vec![9, 9, 9, 0];

        copy_rgb_to_rgba(&src, &mut dst);

        assert_eq!(dst, vec![1, 2, 3, 255]);
    }

    #[test]
    fn test_copy_rgb_to_rgba_empty_buffers() {
        let mut dst: Vec<u8> = vec![];

        copy_rgb_to_rgba(&[], &mut dst);

        assert!(dst.is_empty());
    }

    #[test]
    #[should_panic(expected = "does not match expected")]
    fn test_copy_rgb_to_rgba_rejects_short_destination() {
        let mut dst = vec![0; 4];

        copy_rgb_to_rgba(&[1, 2, 3, 4, 5, 6], &mut dst);
    }
}
