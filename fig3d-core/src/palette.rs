/// Cyclic color table and the face-to-color assignment policy
use std::collections::VecDeque;

use crate::error::FigureError;

/// An RGB color with channels in `[0, 1]`
pub type Rgb = [f32; 3];

pub const RED: Rgb = [1.0, 0.0, 0.0];
pub const GREEN: Rgb = [0.0, 1.0, 0.0];
pub const BLUE: Rgb = [0.0, 0.0, 1.0];
pub const YELLOW: Rgb = [1.0, 1.0, 0.0];
pub const MAGENTA: Rgb = [1.0, 0.0, 1.0];
pub const CYAN: Rgb = [0.0, 1.0, 1.0];

/// The stock six-entry table
pub const DEFAULT_COLORS: [Rgb; 6] = [RED, GREEN, BLUE, YELLOW, MAGENTA, CYAN];

/// Ordered color table whose starting offset can be rotated.
///
/// Rotation is deliberate, order-dependent state: every figure built after a
/// `rotate` call sees the new ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
    colors: VecDeque<Rgb>,
}

impl ColorPalette {
    pub fn new(colors: impl IntoIterator<Item = Rgb>) -> Result<Self, FigureError> {
        let colors: VecDeque<Rgb> = colors.into_iter().collect();
        if colors.is_empty() {
            return Err(FigureError::InvalidColorCount {
                count: 0,
                palette_len: 0,
            });
        }
        Ok(Self { colors })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index` from the current offset, wrapping around the table
    pub fn color(&self, index: usize) -> Rgb {
        self.colors[index % self.colors.len()]
    }

    /// Color for triangle `triangle` when cycling over `color_count` entries
    pub fn face_color(&self, triangle: usize, color_count: usize) -> Result<Rgb, FigureError> {
        self.check_color_count(color_count)?;
        Ok(self.colors[triangle % color_count])
    }

    /// Per-vertex colors for `triangle_count` triangles, one flat color per face.
    pub fn face_colors(
        &self,
        triangle_count: usize,
        color_count: usize,
    ) -> Result<Vec<Rgb>, FigureError> {
        self.check_color_count(color_count)?;

        let mut colors = Vec::with_capacity(triangle_count * 3);
        for triangle in 0..triangle_count {
            let color = self.colors[triangle % color_count];
            colors.extend_from_slice(&[color, color, color]);
        }
        Ok(colors)
    }

    /// Move the last `steps` entries to the front, so lookups start
    /// `steps` slots earlier in the table
    pub fn rotate(&mut self, steps: usize) {
        let steps = steps % self.colors.len();
        self.colors.rotate_right(steps);
        log::trace!("palette rotated by {}", steps);
    }

    fn check_color_count(&self, color_count: usize) -> Result<(), FigureError> {
        if color_count == 0 || color_count > self.colors.len() {
            return Err(FigureError::InvalidColorCount {
                count: color_count,
                palette_len: self.colors.len(),
            });
        }
        Ok(())
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            colors: VecDeque::from(DEFAULT_COLORS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = ColorPalette::default();
        assert_eq!(palette.len(), 6);
        assert_eq!(palette.color(0), RED);
        assert_eq!(palette.color(5), CYAN);
        assert_eq!(palette.color(6), RED);
    }

    #[test]
    fn test_face_color_cycles_modulo_count() {
        let palette = ColorPalette::default();
        for k in 1..=palette.len() {
            for i in 0..20 {
                assert_eq!(palette.face_color(i, k).unwrap(), palette.color(i % k));
            }
        }
    }

    #[test]
    fn test_face_colors_repeat_per_vertex() {
        let palette = ColorPalette::default();
        let colors = palette.face_colors(5, 2).unwrap();
        assert_eq!(colors.len(), 15);
        assert_eq!(&colors[0..3], &[RED, RED, RED]);
        assert_eq!(&colors[3..6], &[GREEN, GREEN, GREEN]);
        assert_eq!(&colors[6..9], &[RED, RED, RED]);
    }

    #[test]
    fn test_rotate_moves_back_to_front() {
        let mut palette = ColorPalette::default();
        palette.rotate(1);
        assert_eq!(palette.color(0), CYAN);
        assert_eq!(palette.color(1), RED);

        palette.rotate(2);
        assert_eq!(palette.color(0), YELLOW);
        assert_eq!(palette.color(3), RED);
    }

    #[test]
    fn test_rotated_slot_is_outside_leading_run() {
        // one step back brings in the entry a five-color fan never reaches
        let stock = ColorPalette::default();
        let mut palette = stock.clone();
        palette.rotate(1);
        assert!((0..5).all(|i| stock.color(i) != palette.color(0)));
    }

    #[test]
    fn test_rotate_full_turn_is_identity() {
        let mut palette = ColorPalette::default();
        palette.rotate(6);
        assert_eq!(palette, ColorPalette::default());
    }

    #[test]
    fn test_empty_palette_rejected() {
        assert!(ColorPalette::new(Vec::<Rgb>::new()).is_err());
        let custom = ColorPalette::new([RED, BLUE]).unwrap();
        assert_eq!(custom.len(), 2);
    }

    #[test]
    fn test_invalid_color_count() {
        let palette = ColorPalette::default();
        assert!(palette.face_colors(3, 0).is_err());
        assert!(matches!(
            palette.face_color(0, 7),
            Err(FigureError::InvalidColorCount {
                count: 7,
                palette_len: 6
            })
        ));
    }
}
