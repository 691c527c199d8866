use std::error::Error;
use std::fmt;
use crate::core::data::point::Point;

/// Narrowest strip that can be sampled: column positions are `i / (width - 1)`.
pub const MIN_GRADIENT_WIDTH: i32 = 2;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    InvalidSize { width: i32, height: i32 },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "pixel rect must be at least {} pixels wide and 1 pixel tall: {}x{}",
                    MIN_GRADIENT_WIDTH, width, height
                )
            }
        }
    }
}

impl Error for PixelRectError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    top_left: Point,
    bottom_right: Point,
}

impl PixelRect {
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Self, PixelRectError> {
        let dx = (bottom_right.x as i64) - (top_left.x as i64);
        let dy = (bottom_right.y as i64) - (top_left.y as i64);

        let width  = (dx + if dx >= 0 { 1 } else { -1 }) as i32;
        let height = (dy + if dy >= 0 { 1 } else { -1 }) as i32;

        if width < MIN_GRADIENT_WIDTH || height < 1 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// Builds a rect anchored at the origin.
    pub fn with_size(width: u32, height: u32) -> Result<Self, PixelRectError> {
        let as_i32 = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);
        let (width, height) = (as_i32(width), as_i32(height));

        if width < MIN_GRADIENT_WIDTH || height < 1 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Self::new(
            Point { x: 0, y: 0 },
            Point {
                x: width - 1,
                y: height - 1,
            },
        )
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        (self.bottom_right.x - self.top_left.x + 1) as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        (self.bottom_right.y - self.top_left.y + 1) as u32
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.top_left.x <= point.x
            && self.top_left.y <= point.y
            && self.bottom_right.x >= point.x
            && self.bottom_right.y >= point.y
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_rect_new_valid() {
        let top_left = Point { x: 0, y: 0 };
        let bottom_right = Point { x: 399, y: 399 };

        let rect = PixelRect::new(top_left, bottom_right).unwrap();

        assert_eq!(rect.top_left(), top_left);
        assert_eq!(rect.bottom_right(), bottom_right);
        assert_eq!(rect.width(), 400);
        assert_eq!(rect.height(), 400);
    }

    #[test]
    fn test_pixel_rect_dimensions_with_offset() {
        let rect = PixelRect::new(
            Point { x: -10, y: -20 },
            Point { x: 110, y: 80 },
        ).unwrap();

        assert_eq!(rect.width(), 121);
        assert_eq!(rect.height(), 101);
        assert_eq!(rect.size(), 12221);
    }

    #[test]
    fn test_pixel_rect_dimensions_must_be_positive() {
        let negative_width = PixelRect::new(
            Point { x: 0, y: 0 },
            Point { x: -100, y: 10 },
        );

        let negative_height = PixelRect::new(
            Point { x: 0, y: 0 },
            Point { x: 100, y: -10 },
        );

        assert_eq!(negative_width, Err(PixelRectError::InvalidSize { width: -101, height: 11 }));
        assert_eq!(negative_height, Err(PixelRectError::InvalidSize { width: 101, height: -11 }));
    }

    #[test]
    fn test_single_column_is_rejected() {
        let one_pixel_wide = PixelRect::new(
            Point { x: 0, y: 0 },
            Point { x: 0, y: 10 },
        );

        assert_eq!(one_pixel_wide, Err(PixelRectError::InvalidSize { width: 1, height: 11 }));
    }

    #[test]
    fn test_single_row_strip_is_allowed() {
        let strip = PixelRect::new(
            Point { x: 0, y: 0 },
            Point { x: 9, y: 0 },
        ).unwrap();

        assert_eq!(strip.width(), 10);
        assert_eq!(strip.height(), 1);
    }

    #[test]
    fn test_with_size_anchors_at_origin() {
        let rect = PixelRect::with_size(3, 2).unwrap();

        assert_eq!(rect.top_left(), Point { x: 0, y: 0 });
        assert_eq!(rect.bottom_right(), Point { x: 2, y: 1 });
    }

    #[test]
    fn test_with_size_rejects_degenerate_sizes() {
        assert_eq!(PixelRect::with_size(1, 400), Err(PixelRectError::InvalidSize { width: 1, height: 400 }));
        assert_eq!(PixelRect::with_size(0, 400), Err(PixelRectError::InvalidSize { width: 0, height: 400 }));
        assert_eq!(PixelRect::with_size(400, 0), Err(PixelRectError::InvalidSize { width: 400, height: 0 }));
    }

    #[test]
    fn test_invalid_size_message() {
        let err = PixelRectError::InvalidSize { width: 1, height: 5 };

        assert_eq!(
            err.to_string(),
            "pixel rect must be at least 2 pixels wide and 1 pixel tall: 1x5"
        );
    }

    #[test]
    fn test_pixel_rect_contains_point() {
        let rect = PixelRect::new(
            Point { x: -50, y: -50 },
            Point { x: 100, y: 100 },
        ).unwrap();

        assert!(rect.contains_point(Point { x: 50, y: 50 }));
        assert!(rect.contains_point(Point { x: -50, y: -50 }));
        assert!(rect.contains_point(Point { x: 100, y: 100 }));
        assert!(!rect.contains_point(Point { x: 101, y: 50 }));
        assert!(!rect.contains_point(Point { x: -51, y: 50 }));
    }
}
