/// Truecolor rasterizer for terminal rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use fig3d_core::{project_to_screen, Mesh, Renderer, Rgb, Triangle};
use nalgebra::Matrix4;
use std::convert::Infallible;
use std::io::Write;

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f32 = 0.5;

const FILLED: char = '█';

/// Renderer that rasterizes figures into a grid of colored terminal cells
pub struct TerminalRenderer {
    width: usize,
    height: usize,
    depth_buffer: Vec<f32>,
    color_buffer: Vec<Option<Rgb>>,
    view_projection: Matrix4<f32>,
    triangles_drawn: usize,
}

impl TerminalRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            depth_buffer: vec![f32::INFINITY; size],
            color_buffer: vec![None; size],
            view_projection: Matrix4::identity(),
            triangles_drawn: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Resize the cell grid, discarding its contents
    pub fn resize(&mut self, width: usize, height: usize) {
        *self = Self::new(width, height);
    }

    pub fn clear(&mut self) {
        self.depth_buffer.fill(f32::INFINITY);
        self.color_buffer.fill(None);
        self.triangles_drawn = 0;
    }

    /// Color of the cell at `(x, y)`, `None` when nothing covers it
    pub fn cell(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.color_buffer[y * self.width + x]
    }

    /// Triangles rasterized since the last clear
    pub fn triangles_drawn(&self) -> usize {
        self.triangles_drawn
    }

    fn render_triangle(&mut self, triangle: &Triangle, mvp: &Matrix4<f32>) {
        let mut corners = [(0.0, 0.0, 0.0, [0.0; 3]); 3];
        for (corner, vertex) in corners.iter_mut().zip(&triangle.vertices) {
            match project_to_screen(
                &vertex.position,
                mvp,
                self.width as u32,
                self.height as u32,
            ) {
                Some((x, y, z)) => *corner = (x, y, z, vertex.color),
                None => return, // Triangle is clipped
            }
        }

        self.rasterize_triangle(&corners);
        self.triangles_drawn += 1;
    }

    fn rasterize_triangle(&mut self, corners: &[(f32, f32, f32, Rgb); 3]) {
        let [v0, v1, v2] = *corners;

        // Bounding box
        let min_x = v0.0.min(v1.0).min(v2.0).floor() as i32;
        let max_x = v0.0.max(v1.0).max(v2.0).ceil() as i32;
        let min_y = v0.1.min(v1.1).min(v2.1).floor() as i32;
        let max_y = v0.1.max(v1.1).max(v2.1).ceil() as i32;

        // Clip to screen bounds
        let min_x = min_x.max(0);
        let max_x = max_x.min(self.width as i32 - 1);
        let min_y = min_y.max(0);
        let max_y = max_y.min(self.height as i32 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;

                let Some((w0, w1, w2)) =
                    barycentric((v0.0, v0.1), (v1.0, v1.1), (v2.0, v2.1), (px, py))
                else {
                    continue;
                };
                if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                    continue;
                }

                let depth = w0 * v0.2 + w1 * v1.2 + w2 * v2.2;
                let idx = y as usize * self.width + x as usize;
                if depth < self.depth_buffer[idx] {
                    self.depth_buffer[idx] = depth;
                    self.color_buffer[idx] = Some(blend(&[(w0, v0.3), (w1, v1.3), (w2, v2.3)]));
                }
            }
        }
    }

    /// Write the cell grid to `writer`, one terminal row per grid row
    pub fn present<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let mut current: Option<Color> = None;
        for y in 0..self.height {
            for x in 0..self.width {
                match self.color_buffer[y * self.width + x] {
                    Some(rgb) => {
                        let color = to_terminal_color(rgb);
                        if current != Some(color) {
                            writer.queue(SetForegroundColor(color))?;
                            current = Some(color);
                        }
                        writer.queue(Print(FILLED))?;
                    }
                    None => {
                        writer.queue(Print(' '))?;
                    }
                }
            }
            if y + 1 < self.height {
                writer.queue(Print("\r\n"))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl Renderer for TerminalRenderer {
    type Error = Infallible;

    fn aspect(&self) -> f32 {
        self.width as f32 * CELL_ASPECT / self.height.max(1) as f32
    }

    fn begin_frame(&mut self, view_projection: &Matrix4<f32>) -> Result<(), Infallible> {
        self.clear();
        self.view_projection = *view_projection;
        Ok(())
    }

    fn draw_mesh(&mut self, mesh: &Mesh, model: &Matrix4<f32>) -> Result<(), Infallible> {
        let mvp = self.view_projection * model;
        for triangle in mesh.triangles() {
            self.render_triangle(&triangle, &mvp);
        }
        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), Infallible> {
        log::trace!("frame rasterized {} triangles", self.triangles_drawn);
        Ok(())
    }
}

/// Weighted sum of corner colors
fn blend(weights: &[(f32, Rgb); 3]) -> Rgb {
    let mut out = [0.0; 3];
    for (weight, color) in weights {
        for (channel, value) in out.iter_mut().zip(color) {
            *channel += weight * value;
        }
    }
    out.map(|c: f32| c.clamp(0.0, 1.0))
}

fn to_terminal_color(rgb: Rgb) -> Color {
    let [r, g, b] = rgb.map(|c| (c * 255.0).round() as u8);
    Color::Rgb { r, g, b }
}

/// Calculate barycentric coordinates for a point in a triangle
fn barycentric(
    v0: (f32, f32),
    v1: (f32, f32),
    v2: (f32, f32),
    p: (f32, f32),
) -> Option<(f32, f32, f32)> {
    let denom = (v1.1 - v2.1) * (v0.0 - v2.0) + (v2.0 - v1.0) * (v0.1 - v2.1);

    if denom.abs() < 1e-6 {
        return None;
    }

    let w0 = ((v1.1 - v2.1) * (p.0 - v2.0) + (v2.0 - v1.0) * (p.1 - v2.1)) / denom;
    let w1 = ((v2.1 - v0.1) * (p.0 - v2.0) + (v0.0 - v2.0) * (p.1 - v2.1)) / denom;
    let w2 = 1.0 - w0 - w1;

    Some((w0, w1, w2))
}
