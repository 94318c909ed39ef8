//! PNG rendering of solved walls
//!
//! Every cell is drawn as four triangles meeting in its center, one per side,
//! in the color of that side. `#rrggbb` colors are painted as written; other
//! tokens get colors from a fixed palette in sorted token order, so the same
//! wall always renders the same way.

use image::{ImageBuffer, Rgba, RgbaImage};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use crate::io::configuration::{MAX_CELL_SIZE, MIN_CELL_SIZE};
use crate::io::error::{Result, TilingError, invalid_parameter};
use crate::spatial::grid::Wall;
use crate::spatial::tiles::{Color, Direction};

const BORDER: Rgba<u8> = Rgba([40, 40, 40, 255]);

// Paint for symbolic color tokens, reused cyclically
const SYMBOL_PAINT: [[u8; 3]; 8] = [
    [230, 159, 0],
    [86, 180, 233],
    [0, 158, 115],
    [240, 228, 66],
    [0, 114, 178],
    [213, 94, 0],
    [204, 121, 167],
    [153, 153, 153],
];

/// Mapping from color tokens to paint
#[derive(Clone, Debug, Default)]
pub struct Paint {
    symbols: HashMap<String, [u8; 3]>,
}

impl Paint {
    /// Assign paint to every symbolic token used by a wall
    pub fn for_wall(wall: &Wall) -> Self {
        let tokens: BTreeSet<&str> = wall
            .placements()
            .flat_map(|placement| placement.tile.colors().iter())
            .filter(|color| color.hex_rgb().is_none())
            .map(Color::as_str)
            .collect();

        let symbols = tokens
            .into_iter()
            .zip(SYMBOL_PAINT.iter().cycle())
            .map(|(token, &rgb)| (token.to_owned(), rgb))
            .collect();

        Self { symbols }
    }

    /// Pixel color for a token
    pub fn rgba(&self, color: &Color) -> Rgba<u8> {
        let [r, g, b] = color
            .hex_rgb()
            .or_else(|| self.symbols.get(color.as_str()).copied())
            .unwrap_or([0, 0, 0]);
        Rgba([r, g, b, 255])
    }
}

// Side of the cell whose triangle contains the pixel at (x, y). Works on
// doubled coordinates so the pixel centers stay integral.
const fn triangle(x: u32, y: u32, cell_size: u32) -> Direction {
    let a = 2 * x + 1;
    let b = 2 * y + 1;
    let span = 2 * cell_size;

    if b < a && a + b < span {
        Direction::Up
    } else if b > a && a + b > span {
        Direction::Down
    } else if a < b && a + b < span {
        Direction::Left
    } else {
        Direction::Right
    }
}

/// Render a wall with `cell_size` pixels per cell side
///
/// # Errors
///
/// Returns an error if `cell_size` is outside `MIN_CELL_SIZE..=MAX_CELL_SIZE`
/// or the image would not fit in `u32` dimensions
pub fn render_wall(wall: &Wall, cell_size: u32) -> Result<RgbaImage> {
    if !(MIN_CELL_SIZE..=MAX_CELL_SIZE).contains(&cell_size) {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &format!("must be between {MIN_CELL_SIZE} and {MAX_CELL_SIZE} pixels"),
        ));
    }

    let dimension = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(cell_size))
            .ok_or_else(|| invalid_parameter("cell_size", &cell_size, &"image is too large"))
    };
    let width = dimension(wall.width())?;
    let height = dimension(wall.height())?;

    let paint = Paint::for_wall(wall);
    let mut img: RgbaImage = ImageBuffer::new(width, height);

    for placement in wall.placements() {
        let origin_x = placement.column as u32 * cell_size;
        let origin_y = placement.row as u32 * cell_size;
        let sides = Direction::ALL.map(|direction| paint.rgba(placement.tile.color(direction)));

        for y in 0..cell_size {
            for x in 0..cell_size {
                let on_edge = x == 0 || y == 0 || x + 1 == cell_size || y + 1 == cell_size;
                let pixel = if on_edge {
                    BORDER
                } else {
                    sides
                        .get(triangle(x, y, cell_size).index())
                        .copied()
                        .unwrap_or(BORDER)
                };
                img.put_pixel(origin_x + x, origin_y + y, pixel);
            }
        }
    }

    Ok(img)
}

/// Render a wall and save it as PNG, creating parent directories
///
/// # Errors
///
/// Returns an error if rendering fails, the parent directory cannot be
/// created or the image cannot be written
pub fn export_wall_as_png(wall: &Wall, cell_size: u32, output_path: &Path) -> Result<()> {
    let img = render_wall(wall, cell_size)?;

    if let Some(parent) = output_path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| TilingError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| TilingError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
