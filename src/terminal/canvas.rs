use crate::color::{ColorStop, Rgb, sample_gradient};
use crate::surface::{DrawCommand, Glow, Point, Surface};

// Peak opacity of a glow halo right at the shape's edge.
const GLOW_STRENGTH: f32 = 0.35;

/// Text queued for the encoder; terminal text can't live in the pixel grid.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayText {
    pub origin: Point,
    pub color: Rgb,
    pub text: String,
}

/// Software rasterizer behind the terminal host. One pixel is half a
/// terminal cell, so a `cols x rows` terminal is `cols x rows * 2` pixels.
pub struct PixelCanvas {
    width: usize,
    height: usize,
    pixels: Vec<(f32, f32, f32)>,
    glow_scale: f32,
    overlay: Vec<OverlayText>,
}

impl PixelCanvas {
    pub fn new(width: usize, height: usize, glow_scale: f32) -> Self {
        Self {
            width,
            height,
            pixels: vec![(0.0, 0.0, 0.0); width * height],
            glow_scale,
            overlay: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.pixels = vec![(0.0, 0.0, 0.0); width * height];
        self.overlay.clear();
    }

    /// Drops overlay text left over from the previous frame.
    pub fn begin_frame(&mut self) {
        self.overlay.clear();
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        let (r, g, b) = self.pixels[y * self.width + x];
        let to_u8 = |v: f32| v.round().clamp(0.0, 255.0) as u8;
        Rgb::new(to_u8(r), to_u8(g), to_u8(b))
    }

    pub fn overlay(&self) -> &[OverlayText] {
        &self.overlay
    }

    #[inline]
    fn blend(&mut self, x: usize, y: usize, color: Rgb, alpha: f32) {
        if alpha <= 0.0 {
            return;
        }
        let a = alpha.min(1.0);
        let px = &mut self.pixels[y * self.width + x];
        px.0 += (color.r as f32 - px.0) * a;
        px.1 += (color.g as f32 - px.1) * a;
        px.2 += (color.b as f32 - px.2) * a;
    }

    /// Pixel rows and columns whose centers can fall within `reach` of `center`.
    fn bounds(
        &self,
        center: Point,
        reach: f32,
    ) -> (std::ops::Range<usize>, std::ops::Range<usize>) {
        let clamp_to = |v: f32, max: usize| v.max(0.0).min(max as f32) as usize;
        let xs = clamp_to((center.x - reach).floor(), self.width)
            ..clamp_to((center.x + reach).ceil() + 1.0, self.width);
        let ys = clamp_to((center.y - reach).floor(), self.height)
            ..clamp_to((center.y + reach).ceil() + 1.0, self.height);
        (xs, ys)
    }

    fn fill_radial(&mut self, center: Point, inner: f32, outer: f32, stops: &[ColorStop]) {
        let span = outer - inner;
        for y in 0..self.height {
            for x in 0..self.width {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                let dist = (dx * dx + dy * dy).sqrt();
                let t = if span > 0.0 { (dist - inner) / span } else { 1.0 };
                let color = sample_gradient(stops, t.clamp(0.0, 1.0));
                self.blend(x, y, color.rgb, color.alpha);
            }
        }
    }

    fn glow_sigma(&self, glow: Option<Glow>) -> f32 {
        glow.map_or(0.0, |g| g.blur / 2.0 * self.glow_scale)
    }

    fn fill_circle(
        &mut self,
        center: Point,
        radius: f32,
        color: Rgb,
        alpha: f32,
        glow: Option<Glow>,
    ) {
        let sigma = self.glow_sigma(glow);
        let (xs, ys) = self.bounds(center, radius + sigma * 3.0 + 0.5);

        for y in ys {
            for x in xs.clone() {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                let dist = (dx * dx + dy * dy).sqrt();

                if let Some(glow) = glow
                    && sigma > 0.0
                {
                    let halo = halo(dist - radius, sigma);
                    self.blend(x, y, glow.color, halo * alpha);
                }

                let coverage = (radius + 0.5 - dist).clamp(0.0, 1.0);
                self.blend(x, y, color, coverage * alpha);
            }
        }
    }

    fn stroke_line(
        &mut self,
        from: Point,
        to: Point,
        width: f32,
        stops: &[ColorStop; 2],
        alpha: f32,
        glow: Option<Glow>,
    ) {
        let (sx, sy) = (to.x - from.x, to.y - from.y);
        let len2 = sx * sx + sy * sy;
        let half = width / 2.0;
        let sigma = self.glow_sigma(glow);

        let mid = Point::new((from.x + to.x) / 2.0, (from.y + to.y) / 2.0);
        let (xs, ys) = self.bounds(mid, len2.sqrt() / 2.0 + half + sigma * 3.0 + 0.5);

        for y in ys {
            for x in xs.clone() {
                let px = x as f32 + 0.5 - from.x;
                let py = y as f32 + 0.5 - from.y;
                let t = if len2 > 0.0 {
                    ((px * sx + py * sy) / len2).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let (ex, ey) = (px - sx * t, py - sy * t);
                let dist = (ex * ex + ey * ey).sqrt();
                let color = sample_gradient(stops, t);

                // The halo follows the stroke's own fade along its length.
                if let Some(glow) = glow
                    && sigma > 0.0
                {
                    let halo = halo(dist - half, sigma);
                    self.blend(x, y, glow.color, halo * color.alpha * alpha);
                }

                let coverage = (half + 0.5 - dist).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.blend(x, y, color.rgb, coverage * color.alpha * alpha);
                }
            }
        }
    }
}

/// Gaussian glow opacity at `outside` pixels past a shape's edge.
fn halo(outside: f32, sigma: f32) -> f32 {
    let outside = outside.max(0.0);
    GLOW_STRENGTH * (-(outside * outside) / (2.0 * sigma * sigma)).exp()
}

impl Surface for PixelCanvas {
    fn size(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }

    fn draw(&mut self, command: DrawCommand) {
        match command {
            DrawCommand::FillRadial {
                center,
                inner_radius,
                outer_radius,
                stops,
            } => self.fill_radial(center, inner_radius, outer_radius, stops),
            DrawCommand::FillCircle {
                center,
                radius,
                color,
                alpha,
                glow,
            } => self.fill_circle(center, radius, color, alpha, glow),
            DrawCommand::StrokeLine {
                from,
                to,
                width,
                start,
                end,
                alpha,
                glow,
            } => {
                let stops = [
                    ColorStop {
                        offset: 0.0,
                        color: start,
                    },
                    ColorStop {
                        offset: 1.0,
                        color: end,
                    },
                ];
                self.stroke_line(from, to, width, &stops, alpha, glow)
            }
            DrawCommand::Text {
                origin,
                color,
                text,
            } => self.overlay.push(OverlayText {
                origin,
                color,
                text,
            }),
        }
    }
}
