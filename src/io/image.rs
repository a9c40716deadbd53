//! PNG rendering of collapse events as flat-colored cell blocks

use image::{ImageBuffer, Rgba};
use std::path::Path;

use crate::algorithm::solver::RenderSink;
use crate::io::error::{Result, SolverError};
use crate::tiles::set::TileVariant;

/// Background fill behind cells that never collapsed
const BACKGROUND: Rgba<u8> = Rgba([51, 51, 51, 255]);

/// Base colors cycled by catalog entry
const PALETTE: [[u8; 3]; 8] = [
    [236, 239, 244],
    [191, 97, 106],
    [163, 190, 140],
    [129, 161, 193],
    [235, 203, 139],
    [180, 142, 173],
    [208, 135, 112],
    [136, 192, 208],
];

/// Render sink painting one flat-colored block per collapsed cell
///
/// Color follows the variant's catalog entry, darkened one notch per
/// quarter turn so rotations stay distinguishable without tile artwork.
pub struct PngRenderSink {
    image: ImageBuffer<Rgba<u8>, Vec<u8>>,
    cell_size: u32,
}

impl PngRenderSink {
    /// Allocate a canvas for a `rows` x `cols` grid of `cell_size` blocks
    pub fn new(rows: usize, cols: usize, cell_size: u32) -> Self {
        let width = (cols as u32 * cell_size).max(1);
        let height = (rows as u32 * cell_size).max(1);
        Self {
            image: ImageBuffer::from_pixel(width, height, BACKGROUND),
            cell_size,
        }
    }

    fn color_for(variant: &TileVariant) -> Rgba<u8> {
        let base = PALETTE
            .get(variant.catalog_index % PALETTE.len())
            .copied()
            .unwrap_or([255, 255, 255]);
        let fade = 0.12f64.mul_add(-f64::from(variant.rotation), 1.0);
        let shade = |channel: u8| (f64::from(channel) * fade) as u8;
        Rgba([shade(base[0]), shade(base[1]), shade(base[2]), 255])
    }

    /// Write the canvas as a PNG, creating parent directories first
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the
    /// image cannot be saved.
    pub fn save(&self, output_path: &Path) -> Result<()> {
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| SolverError::FileSystem {
                    path: parent.to_path_buf(),
                    operation: "create directory",
                    source: e,
                })?;
            }
        }

        self.image
            .save(output_path)
            .map_err(|e| SolverError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })
    }
}

impl RenderSink for PngRenderSink {
    fn render(&mut self, variant: &TileVariant, row: usize, col: usize) {
        let color = Self::color_for(variant);
        let x0 = col as u32 * self.cell_size;
        let y0 = row as u32 * self.cell_size;

        for dy in 0..self.cell_size {
            for dx in 0..self.cell_size {
                let x = x0 + dx;
                let y = y0 + dy;
                if x < self.image.width() && y < self.image.height() {
                    self.image.put_pixel(x, y, color);
                }
            }
        }
    }
}
