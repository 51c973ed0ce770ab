//! CPU stand-in for the GPU backend: rasterizes [`DrawBatch`]es into a PNG.
use std::path::Path;

use anyhow::{anyhow, bail, Context};
use glam::Vec2;
use image::{Rgba, RgbaImage};
use tracing::info;
use tracing_subscriber::EnvFilter;
use vertex_forge::buffers::{DrawBatch, Primitive, COLOR_ARITY, POSITION_ARITY};

/// Installs a `fmt` subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Orthographic canvas mapping a centered world rectangle onto an image, y up.
pub struct Canvas {
    image: RgbaImage,
    domain_extent: Vec2,
}

impl Canvas {
    pub fn new(size_px: (u32, u32), domain_extent: Vec2, background: [u8; 3]) -> Self {
        let [r, g, b] = background;
        Self {
            image: RgbaImage::from_pixel(size_px.0, size_px.1, Rgba([r, g, b, 255])),
            domain_extent,
        }
    }

    pub fn draw(&mut self, batch: &DrawBatch<'_>) -> anyhow::Result<()> {
        let positions = batch
            .attribute("position")
            .ok_or_else(|| anyhow!("batch has no position buffer"))?;
        let colors = batch
            .attribute("color")
            .ok_or_else(|| anyhow!("batch has no color buffer"))?;
        if positions.item_size != POSITION_ARITY || colors.item_size != COLOR_ARITY {
            bail!("unexpected item sizes");
        }
        if colors.num_items() < batch.vertex_count || positions.num_items() < batch.vertex_count {
            bail!("buffers shorter than vertex count {}", batch.vertex_count);
        }

        match batch.primitive {
            Primitive::Points => {
                let sizes = batch
                    .attribute("size")
                    .ok_or_else(|| anyhow!("point batch has no size buffer"))?;
                for i in 0..batch.vertex_count {
                    let p = self.to_pixel(vertex(positions.data, i));
                    let size = sizes.data.get(i).copied().unwrap_or(1.0);
                    self.fill_square(p, size.max(1.0), color(colors.data, i));
                }
            }
            Primitive::Triangles => {
                for t in 0..batch.vertex_count / 3 {
                    let idx = [3 * t, 3 * t + 1, 3 * t + 2];
                    let pts = idx.map(|i| self.to_pixel(vertex(positions.data, i)));
                    let cols = idx.map(|i| color(colors.data, i));
                    self.fill_triangle(pts, cols);
                }
            }
        }
        Ok(())
    }

    /// RGBA at pixel `(x, y)`, as a picking read-back would see it.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x < self.image.width() && y < self.image.height() {
            Some(self.image.get_pixel(x, y).0)
        } else {
            None
        }
    }

    /// Pixel coordinates of a world position.
    pub fn to_pixel(&self, world: Vec2) -> Vec2 {
        let size = Vec2::new(self.image.width() as f32, self.image.height() as f32);
        let half = self.domain_extent / 2.0;
        Vec2::new(
            (world.x + half.x) / self.domain_extent.x * size.x,
            (half.y - world.y) / self.domain_extent.y * size.y,
        )
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        self.image
            .save(path)
            .with_context(|| format!("writing {}", path.display()))?;
        info!("Wrote {}", path.display());
        Ok(())
    }

    fn fill_square(&mut self, center: Vec2, size: f32, rgba: [u8; 4]) {
        let half = size / 2.0;
        let (x0, y0, x1, y1) = self.clip(center - half, center + half);
        for y in y0..y1 {
            for x in x0..x1 {
                self.image.put_pixel(x, y, Rgba(rgba));
            }
        }
    }

    fn fill_triangle(&mut self, p: [Vec2; 3], c: [[u8; 4]; 3]) {
        let area = (p[1] - p[0]).perp_dot(p[2] - p[0]);
        if area == 0.0 {
            return;
        }
        let min = p[0].min(p[1]).min(p[2]);
        let max = p[0].max(p[1]).max(p[2]);
        let (x0, y0, x1, y1) = self.clip(min, max + 1.0);

        for y in y0..y1 {
            for x in x0..x1 {
                let q = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let w0 = (p[2] - p[1]).perp_dot(q - p[1]) / area;
                let w1 = (p[0] - p[2]).perp_dot(q - p[2]) / area;
                let w2 = 1.0 - w0 - w1;
                if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                    continue;
                }
                let mix = |k: usize| {
                    (c[0][k] as f32 * w0 + c[1][k] as f32 * w1 + c[2][k] as f32 * w2).round() as u8
                };
                self.image.put_pixel(x, y, Rgba([mix(0), mix(1), mix(2), mix(3)]));
            }
        }
    }

    fn clip(&self, min: Vec2, max: Vec2) -> (u32, u32, u32, u32) {
        let w = self.image.width() as f32;
        let h = self.image.height() as f32;
        (
            min.x.clamp(0.0, w) as u32,
            min.y.clamp(0.0, h) as u32,
            max.x.clamp(0.0, w) as u32,
            max.y.clamp(0.0, h) as u32,
        )
    }
}

fn vertex(data: &[f32], i: usize) -> Vec2 {
    Vec2::new(data[i * POSITION_ARITY], data[i * POSITION_ARITY + 1])
}

fn color(data: &[f32], i: usize) -> [u8; 4] {
    let c = &data[i * COLOR_ARITY..(i + 1) * COLOR_ARITY];
    [c[0], c[1], c[2], c[3]].map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
}
