//! Procedural texture factory.
//!
//! Every surface in the manor is painted at session build time; nothing is
//! loaded from disk except the optional resident portrait. Painters rasterize
//! into [`image::RgbaImage`] buffers sized by the active tier's texture
//! scale, so a Low-tier session pays a quarter of the pixels everywhere.
//!
//! Grain, stains, and cracks are intentionally unseeded: every visit to the
//! manor wears slightly differently. Structural marks (borders, lettering,
//! progress dots) are always painted after the grain, so their pixels come
//! out identical across renders at the same scale.

pub mod font;

mod boards;
mod screens;
mod walls;

use gloam_logic::color::Rgb8;
use gloam_logic::content::ArchiveEntry;
use image::{Rgba, RgbaImage};

/// Accent used when a content accent string fails to parse.
pub const FALLBACK_ACCENT: Rgb8 = Rgb8::new(0xc4, 0x98, 0x50);

/// Paints every manor surface at a fixed resolution scale.
#[derive(Debug, Clone, Copy)]
pub struct TextureFactory {
    scale: f32,
}

impl TextureFactory {
    /// Degenerate scales are clamped rather than refused; a 1x1 texture is
    /// still a texture.
    pub fn new(scale: f32) -> Self {
        let scale = if scale.is_finite() { scale } else { 1.0 };
        Self { scale: scale.clamp(0.05, 4.0) }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    fn dims(&self, base_w: u32, base_h: u32) -> (u32, u32) {
        let w = (base_w as f32 * self.scale).round().max(1.0) as u32;
        let h = (base_h as f32 * self.scale).round().max(1.0) as u32;
        (w, h)
    }

    /// Hall wallpaper: violet-black stripes, old stains, a little blood.
    pub fn wallpaper(&self) -> RgbaImage {
        let (w, h) = self.dims(1024, 1024);
        walls::wallpaper(w, h)
    }

    /// Bump sheet shared by rough interior surfaces.
    pub fn rough_bump(&self, base_gray: u8, speck_max: u8) -> RgbaImage {
        let (w, h) = self.dims(512, 512);
        walls::rough_bump(w, h, base_gray, speck_max)
    }

    /// Hall floorboards, laid along z.
    pub fn planks(&self) -> RgbaImage {
        let (w, h) = self.dims(1024, 1024);
        walls::planks(w, h)
    }

    /// Stair tread cap.
    pub fn tread(&self) -> RgbaImage {
        let (w, h) = self.dims(256, 64);
        walls::tread(w, h)
    }

    /// Exterior brick, albedo plus bump.
    pub fn brick(&self) -> (RgbaImage, RgbaImage) {
        let (w, h) = self.dims(512, 512);
        walls::brick(w, h)
    }

    /// Rough vertical boarding for shutters and fencing.
    pub fn boards(&self, tone: &str) -> RgbaImage {
        let (w, h) = self.dims(512, 512);
        walls::boards(w, h, parse_accent(tone))
    }

    /// Flagstone paving for the yard path.
    pub fn stone(&self) -> RgbaImage {
        let (w, h) = self.dims(512, 512);
        walls::stone(w, h)
    }

    /// Poured concrete for the archive chamber.
    pub fn concrete(&self, tint: u8) -> RgbaImage {
        let (w, h) = self.dims(1024, 1024);
        walls::concrete(w, h, tint)
    }

    /// Near-black checker tiling for the archive floor.
    pub fn tiles(&self) -> RgbaImage {
        let (w, h) = self.dims(1024, 1024);
        walls::tiles(w, h)
    }

    /// Riveted machine-bay panelling for the vault.
    pub fn metal_panel(&self) -> RgbaImage {
        let (w, h) = self.dims(1024, 1024);
        walls::metal_panel(w, h)
    }

    /// Open floor grating for the vault.
    pub fn grate(&self) -> RgbaImage {
        let (w, h) = self.dims(256, 256);
        walls::grate(w, h)
    }

    /// Interior door leaf tinted toward the room accent.
    pub fn door_leaf(&self, accent: &str) -> RgbaImage {
        let (w, h) = self.dims(512, 1024);
        boards::door_leaf(w, h, parse_accent(accent))
    }

    /// Front door with the painted invitation.
    pub fn front_door(&self, name: &str, line_a: &str, line_b: &str) -> RgbaImage {
        let (w, h) = self.dims(512, 1024);
        boards::front_door(w, h, name, line_a, line_b)
    }

    /// Doorway name board.
    pub fn sign_board(&self, label: &str, accent: &str) -> RgbaImage {
        let (w, h) = self.dims(1024, 320);
        boards::sign_board(w, h, label, parse_accent(accent))
    }

    /// Wall plaque with a title and free lines, used by the library.
    pub fn plaque(&self, title: &str, lines: &[String], accent: &str) -> RgbaImage {
        let (w, h) = self.dims(1024, 512);
        boards::plaque(w, h, title, lines, parse_accent(accent))
    }

    /// Framed gallery poster.
    pub fn poster(&self, name: &str, caption: &str, accent: &str) -> RgbaImage {
        let (w, h) = self.dims(512, 768);
        boards::poster(w, h, name, caption, parse_accent(accent))
    }

    /// Parlor rug for the gallery and library floors.
    pub fn rug(&self, accent: &str) -> RgbaImage {
        let (w, h) = self.dims(512, 512);
        boards::rug(w, h, parse_accent(accent))
    }

    /// One archive record slide.
    pub fn slide(&self, entry: &ArchiveEntry, accent: &str, index: usize, total: usize) -> RgbaImage {
        let (w, h) = self.dims(1024, 640);
        screens::slide(w, h, entry, parse_accent(accent), index, total)
    }

    /// One vault record as a hologram pane.
    pub fn hologram(&self, entry: &ArchiveEntry, accent: &str, index: usize, total: usize) -> RgbaImage {
        let (w, h) = self.dims(1024, 640);
        screens::hologram(w, h, entry, parse_accent(accent), index, total)
    }

    /// Silhouette shown until (or instead of) the real portrait.
    pub fn portrait_placeholder(&self) -> RgbaImage {
        let (w, h) = self.dims(512, 640);
        screens::portrait_placeholder(w, h)
    }

    /// Apparition for the exterior window.
    pub fn ghost(&self) -> RgbaImage {
        let (w, h) = self.dims(512, 512);
        screens::ghost(w, h)
    }
}

impl Default for TextureFactory {
    fn default() -> Self {
        Self::new(1.0)
    }
}

fn parse_accent(s: &str) -> Rgb8 {
    match Rgb8::parse(s) {
        Some(c) => c,
        None => {
            log::debug!("accent {:?} did not parse, using manor gold", s);
            FALLBACK_ACCENT
        }
    }
}

// ── painter helpers ──────────────────────────────────────────────────

pub(crate) fn opaque(c: Rgb8) -> Rgba<u8> {
    Rgba([c.r, c.g, c.b, 255])
}

/// Source-over blend of one pixel. Out-of-bounds writes are dropped.
pub(crate) fn blend(img: &mut RgbaImage, x: i64, y: i64, c: Rgb8, a: f32) {
    if x < 0 || y < 0 || x >= img.width() as i64 || y >= img.height() as i64 {
        return;
    }
    let a = a.clamp(0.0, 1.0);
    let p = img.get_pixel_mut(x as u32, y as u32);
    let da = p.0[3] as f32 / 255.0;
    let out_a = a + da * (1.0 - a);
    if out_a <= f32::EPSILON {
        *p = Rgba([0, 0, 0, 0]);
        return;
    }
    let src = [c.r, c.g, c.b];
    for i in 0..3 {
        let s = src[i] as f32 / 255.0;
        let d = p.0[i] as f32 / 255.0;
        p.0[i] = (((s * a + d * da * (1.0 - a)) / out_a) * 255.0).round() as u8;
    }
    p.0[3] = (out_a * 255.0).round() as u8;
}

/// Axis-aligned filled rectangle in pixel space, clamped to the image.
pub(crate) fn rect(img: &mut RgbaImage, x0: f32, y0: f32, x1: f32, y1: f32, c: Rgb8, a: f32) {
    let xa = x0.floor().max(0.0) as i64;
    let ya = y0.floor().max(0.0) as i64;
    let xb = (x1.ceil() as i64).min(img.width() as i64);
    let yb = (y1.ceil() as i64).min(img.height() as i64);
    for y in ya..yb {
        for x in xa..xb {
            blend(img, x, y, c, a);
        }
    }
}

/// Rectangle outline drawn as four filled bands of `t` pixels, inward.
pub(crate) fn stroke_rect(img: &mut RgbaImage, x0: f32, y0: f32, x1: f32, y1: f32, t: f32, c: Rgb8, a: f32) {
    rect(img, x0, y0, x1, y0 + t, c, a);
    rect(img, x0, y1 - t, x1, y1, c, a);
    rect(img, x0, y0 + t, x0 + t, y1 - t, c, a);
    rect(img, x1 - t, y0 + t, x1, y1 - t, c, a);
}

/// Vertical gradient over the whole image. Stops are (t, color) with t
/// ascending in 0..=1.
pub(crate) fn vgradient(img: &mut RgbaImage, stops: &[(f32, Rgb8)]) {
    let h = img.height();
    for y in 0..h {
        let t = if h > 1 { y as f32 / (h - 1) as f32 } else { 0.0 };
        let c = gradient_at(stops, t);
        for x in 0..img.width() {
            img.put_pixel(x, y, opaque(c));
        }
    }
}

/// Horizontal gradient over the whole image.
pub(crate) fn hgradient(img: &mut RgbaImage, stops: &[(f32, Rgb8)]) {
    let w = img.width();
    for x in 0..w {
        let t = if w > 1 { x as f32 / (w - 1) as f32 } else { 0.0 };
        let c = gradient_at(stops, t);
        for y in 0..img.height() {
            img.put_pixel(x, y, opaque(c));
        }
    }
}

pub(crate) fn gradient_at(stops: &[(f32, Rgb8)], t: f32) -> Rgb8 {
    match stops.first() {
        Some(first) => {
            if t <= first.0 {
                return first.1;
            }
            for pair in stops.windows(2) {
                let (t0, c0) = pair[0];
                let (t1, c1) = pair[1];
                if t <= t1 {
                    let span = (t1 - t0).max(1e-6);
                    return c0.mix(c1, (t - t0) / span);
                }
            }
            stops[stops.len() - 1].1
        }
        None => Rgb8::new(0, 0, 0),
    }
}

/// Filled axis-aligned ellipse.
pub(crate) fn ellipse(img: &mut RgbaImage, cx: f32, cy: f32, rx: f32, ry: f32, c: Rgb8, a: f32) {
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    let x0 = (cx - rx).floor() as i64;
    let x1 = (cx + rx).ceil() as i64;
    let y0 = (cy - ry).floor() as i64;
    let y1 = (cy + ry).ceil() as i64;
    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = (x as f32 + 0.5 - cx) / rx;
            let dy = (y as f32 + 0.5 - cy) / ry;
            if dx * dx + dy * dy <= 1.0 {
                blend(img, x, y, c, a);
            }
        }
    }
}

/// Radial falloff disc: alpha `a0` at the center fading to zero at `r`.
pub(crate) fn glow(img: &mut RgbaImage, cx: f32, cy: f32, r: f32, c: Rgb8, a0: f32) {
    if r <= 0.0 {
        return;
    }
    let x0 = (cx - r).floor() as i64;
    let x1 = (cx + r).ceil() as i64;
    let y0 = (cy - r).floor() as i64;
    let y1 = (cy + r).ceil() as i64;
    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let d = (dx * dx + dy * dy).sqrt() / r;
            if d < 1.0 {
                blend(img, x, y, c, a0 * (1.0 - d));
            }
        }
    }
}

/// Jagged stroked polyline, stamped as `width`-sized dabs along each
/// segment. Good enough for cracks and drips.
pub(crate) fn polyline(img: &mut RgbaImage, pts: &[(f32, f32)], width: f32, c: Rgb8, a: f32) {
    let half = (width * 0.5).max(0.5);
    for pair in pts.windows(2) {
        let (ax, ay) = pair[0];
        let (bx, by) = pair[1];
        let len = ((bx - ax).powi(2) + (by - ay).powi(2)).sqrt();
        let steps = (len / half).ceil().max(1.0) as u32;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let x = ax + (bx - ax) * t;
            let y = ay + (by - ay) * t;
            rect(img, x - half, y - half, x + half, y + half, c, a);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloam_logic::content::ManorContent;

    fn exact_pixels(img: &RgbaImage, c: Rgb8) -> Vec<(u32, u32)> {
        let target = opaque(c);
        let mut out = Vec::new();
        for (x, y, p) in img.enumerate_pixels() {
            if *p == target {
                out.push((x, y));
            }
        }
        out
    }

    #[test]
    fn test_scale_drives_dimensions() {
        let full = TextureFactory::new(1.0);
        let quarter = TextureFactory::new(0.25);
        assert_eq!(full.wallpaper().dimensions(), (1024, 1024));
        assert_eq!(quarter.wallpaper().dimensions(), (256, 256));
        assert_eq!(quarter.sign_board("HALL", "#44aaee").dimensions(), (256, 80));
    }

    #[test]
    fn test_degenerate_scale_clamps() {
        let f = TextureFactory::new(0.0);
        let img = f.tread();
        assert!(img.width() >= 1 && img.height() >= 1);
        assert!(TextureFactory::new(f32::NAN).scale() > 0.0);
    }

    #[test]
    fn test_sign_structure_is_deterministic_across_renders() {
        let f = TextureFactory::new(0.5);
        let accent = Rgb8::parse("#44aaee").unwrap();
        let a = f.sign_board("ARCHIVE", "#44aaee");
        let b = f.sign_board("ARCHIVE", "#44aaee");
        let pa = exact_pixels(&a, accent);
        let pb = exact_pixels(&b, accent);
        assert!(!pa.is_empty());
        assert_eq!(pa, pb);
    }

    #[test]
    fn test_sign_grain_differs_between_renders() {
        let f = TextureFactory::new(0.5);
        let a = f.sign_board("ARCHIVE", "#44aaee");
        let b = f.sign_board("ARCHIVE", "#44aaee");
        assert_ne!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_slide_heading_is_deterministic_across_renders() {
        let f = TextureFactory::new(0.5);
        let content = ManorContent::default();
        let entry = &content.archive[0];
        let white = Rgb8::new(255, 255, 255);
        let a = f.slide(entry, "#44aaee", 0, content.archive.len());
        let b = f.slide(entry, "#44aaee", 0, content.archive.len());
        let pa = exact_pixels(&a, white);
        assert!(!pa.is_empty());
        assert_eq!(pa, exact_pixels(&b, white));
    }

    #[test]
    fn test_bad_accent_falls_back_to_gold() {
        let f = TextureFactory::new(0.25);
        let img = f.sign_board("VAULT", "not-a-color");
        assert!(!exact_pixels(&img, FALLBACK_ACCENT).is_empty());
    }

    #[test]
    fn test_brick_pair_shares_dimensions() {
        let f = TextureFactory::new(0.25);
        let (map, bump) = f.brick();
        assert_eq!(map.dimensions(), bump.dimensions());
    }

    #[test]
    fn test_gradient_at_clamps_and_interpolates() {
        let stops = [(0.0, Rgb8::new(0, 0, 0)), (1.0, Rgb8::new(200, 100, 50))];
        assert_eq!(gradient_at(&stops, -1.0), Rgb8::new(0, 0, 0));
        assert_eq!(gradient_at(&stops, 2.0), Rgb8::new(200, 100, 50));
        let mid = gradient_at(&stops, 0.5);
        assert!(mid.r > 80 && mid.r < 120);
    }
}
