//! Projection-screen painters: archive slides, the vault hologram, the
//! resident portrait fallback, and the window apparition.

use gloam_logic::color::Rgb8;
use gloam_logic::content::ArchiveEntry;
use gloam_logic::wrap::{self, COLUMN_BUDGET, DETAIL_BUDGET};
use image::RgbaImage;
use rand::Rng;

use super::font::{self, Align};
use super::{blend, ellipse, glow, opaque, polyline, rect, stroke_rect, vgradient};

const WHITE: Rgb8 = Rgb8::new(255, 255, 255);
const BLACK: Rgb8 = Rgb8::new(0, 0, 0);
const PALE_BLUE: Rgb8 = Rgb8::new(200, 210, 230);

/// One archive record, laid out like a filed report: header band,
/// wrapped heading, years, wrapped body, progress dots.
pub(super) fn slide(w: u32, h: u32, entry: &ArchiveEntry, accent: Rgb8, index: usize, total: usize) -> RgbaImage {
    let mut img = RgbaImage::new(w, h);
    vgradient(
        &mut img,
        &[
            (0.0, Rgb8::new(0x02, 0x05, 0x08)),
            (0.5, accent.scaled(0.22)),
            (1.0, Rgb8::new(0x02, 0x04, 0x08)),
        ],
    );

    let mut rng = rand::thread_rng();
    let fw = w as f32;
    let fh = h as f32;
    let u = fw / 1024.0;
    let vu = fh / 640.0;

    let speck = (w * h / 900).max(32);
    for _ in 0..speck {
        let x = rng.gen_range(0..w) as i64;
        let y = rng.gen_range(0..h) as i64;
        blend(&mut img, x, y, BLACK, rng.gen::<f32>() * 0.05);
    }

    let grid = 60.0 * u;
    let mut gx = grid;
    while gx < fw {
        rect(&mut img, gx, 0.0, gx + 1.0, fh, accent, 0.07);
        gx += grid;
    }
    let mut gy = grid;
    while gy < fh {
        rect(&mut img, 0.0, gy, fw, gy + 1.0, accent, 0.07);
        gy += grid;
    }

    // Header band
    let band = 48.0 * vu;
    rect(&mut img, 0.0, 0.0, fw, band, accent, 0.09);
    rect(&mut img, 0.0, band, fw, band + (1.5 * vu).max(1.0), accent, 0.27);
    let hsize = 16.0 * vu;
    font::draw_text(&mut img, "ARCHIVE RECORD", 28.0 * u, 16.0 * vu, hsize, opaque(accent.scaled(0.62)), Align::Left);
    let page = format!("{} / {}", index + 1, total.max(1));
    let px = fw - 28.0 * u - font::measure(&page, hsize);
    font::draw_text(&mut img, &page, px, 16.0 * vu, hsize, opaque(accent.scaled(0.62)), Align::Left);

    // Heading, wrapped against the wide budget
    let lx = 64.0 * u;
    let head_size = 58.0 * vu;
    let mut y = 120.0 * vu;
    let head_lines = wrap::wrap_words(&entry.heading, DETAIL_BUDGET * u, |s| font::measure(s, head_size));
    for line in &head_lines {
        font::draw_text(&mut img, line, lx, y, head_size, opaque(WHITE), Align::Left);
        y += 68.0 * vu;
    }

    rect(&mut img, lx, y + 6.0 * vu, lx + 260.0 * u, y + 6.0 * vu + (1.5 * vu).max(1.0), accent, 0.33);
    y += 22.0 * vu;
    font::draw_text(&mut img, &entry.years, lx, y, 22.0 * vu, opaque(accent.scaled(0.8)), Align::Left);
    y += 48.0 * vu;

    // Body against the narrower budget
    let body_size = 18.0 * vu;
    let body_lines = wrap::wrap_words(&entry.body, COLUMN_BUDGET * u, |s| font::measure(s, body_size));
    for line in &body_lines {
        if y + body_size > fh * 0.88 {
            break;
        }
        font::draw_text(&mut img, line, lx, y, body_size, opaque(PALE_BLUE), Align::Left);
        y += 30.0 * vu;
    }

    // Progress dots
    if total > 0 {
        let spacing = 24.0 * u;
        let cy = fh * 0.93;
        let start = fw * 0.5 - spacing * (total as f32 - 1.0) * 0.5;
        for i in 0..total {
            let cx = start + spacing * i as f32;
            if i == index {
                ellipse(&mut img, cx, cy, 6.0 * u, 6.0 * u, accent, 1.0);
            } else {
                ellipse(&mut img, cx, cy, 4.5 * u, 4.5 * u, Rgb8::new(90, 100, 110), 0.5);
            }
        }
    }
    img
}

/// One vault record as a hologram pane: hex lattice, scan lines,
/// bracketed corners, a segmented progress bar.
pub(super) fn hologram(w: u32, h: u32, entry: &ArchiveEntry, accent: Rgb8, index: usize, total: usize) -> RgbaImage {
    let mut img = RgbaImage::new(w, h);
    vgradient(
        &mut img,
        &[
            (0.0, Rgb8::new(0x01, 0x04, 0x0a)),
            (0.55, accent.scaled(0.16)),
            (1.0, Rgb8::new(0x01, 0x03, 0x08)),
        ],
    );

    let fw = w as f32;
    let fh = h as f32;
    let u = fw / 1024.0;
    let vu = fh / 640.0;

    // Hex lattice
    let r = 26.0 * u;
    let dy = r * 1.5;
    let dx = r * 3.0_f32.sqrt();
    let mut row = 0;
    let mut hy = 0.0;
    while hy < fh + r {
        let off = if row % 2 == 0 { 0.0 } else { dx * 0.5 };
        let mut hx = off;
        while hx < fw + r {
            let pts: Vec<(f32, f32)> = (0..7)
                .map(|i| {
                    let a = (i as f32 * 60.0 + 30.0).to_radians();
                    (hx + a.cos() * r, hy + a.sin() * r)
                })
                .collect();
            polyline(&mut img, &pts, 1.0, accent, 0.05);
            hx += dx;
        }
        hy += dy;
        row += 1;
    }

    // Scan lines
    let mut sy = 0.0;
    while sy < fh {
        rect(&mut img, 0.0, sy, fw, sy + 1.0, BLACK, 0.12);
        sy += 4.0 * vu;
    }

    // Header band
    let band = 52.0 * vu;
    rect(&mut img, 0.0, 0.0, fw, band, accent, 0.1);
    rect(&mut img, 0.0, band, fw, band + (2.0 * vu).max(1.0), accent, 0.5);
    let hsize = 17.0 * vu;
    font::draw_text(&mut img, "SERVICE RECORD", 30.0 * u, 17.0 * vu, hsize, opaque(accent), Align::Left);
    let page = format!("{:02} / {:02}", index + 1, total.max(1));
    let px = fw - 30.0 * u - font::measure(&page, hsize);
    font::draw_text(&mut img, &page, px, 17.0 * vu, hsize, opaque(accent), Align::Left);

    // Corner brackets
    let bl = 22.0 * u;
    for (cx, cy, sx, sy) in [
        (10.0 * u, band + 12.0 * vu, 1.0, 1.0),
        (fw - 10.0 * u, band + 12.0 * vu, -1.0, 1.0),
        (10.0 * u, fh - 10.0 * vu, 1.0, -1.0),
        (fw - 10.0 * u, fh - 10.0 * vu, -1.0, -1.0),
    ] {
        polyline(
            &mut img,
            &[(cx, cy + sy * bl), (cx, cy), (cx + sx * bl, cy)],
            (3.0 * u).max(1.0),
            accent,
            0.9,
        );
    }

    let lx = 70.0 * u;
    let head_size = 52.0 * vu;
    let mut y = 130.0 * vu;
    let head_lines = wrap::wrap_words(&entry.heading, DETAIL_BUDGET * u, |s| font::measure(s, head_size));
    for line in &head_lines {
        font::draw_text(&mut img, line, lx, y, head_size, opaque(Rgb8::new(220, 240, 255)), Align::Left);
        y += 62.0 * vu;
    }

    font::draw_text(&mut img, &entry.years, lx, y + 6.0 * vu, 22.0 * vu, opaque(accent), Align::Left);
    y += 52.0 * vu;

    let body_size = 18.0 * vu;
    let body_lines = wrap::wrap_words(&entry.body, COLUMN_BUDGET * u, |s| font::measure(s, body_size));
    for line in &body_lines {
        if y + body_size > fh * 0.86 {
            break;
        }
        font::draw_text(&mut img, line, lx, y, body_size, opaque(PALE_BLUE), Align::Left);
        y += 30.0 * vu;
    }

    // Segmented progress bar
    if total > 0 {
        let seg_w = 46.0 * u;
        let gap = 10.0 * u;
        let by = fh * 0.92;
        let start = fw * 0.5 - (seg_w + gap) * total as f32 * 0.5 + gap * 0.5;
        for i in 0..total {
            let x = start + (seg_w + gap) * i as f32;
            let a = if i == index { 0.95 } else { 0.25 };
            rect(&mut img, x, by, x + seg_w, by + 5.0 * vu, accent, a);
        }
    }
    img
}

/// Silhouette card shown while the real portrait loads, or forever if
/// it never arrives.
pub(super) fn portrait_placeholder(w: u32, h: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(w, h, opaque(Rgb8::new(0x0a, 0x07, 0x06)));
    let fw = w as f32;
    let fh = h as f32;
    let u = fw / 512.0;
    let vu = fh / 640.0;

    // Heavy corner vignette
    let (cx, cy) = (fw * 0.5, fh * 0.5);
    let max_d = (cx * cx + cy * cy).sqrt();
    for y in 0..h {
        for x in 0..w {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let d = (dx * dx + dy * dy).sqrt() / max_d;
            if d > 0.35 {
                let a = ((d - 0.35) / 0.65).min(1.0).powi(2) * 0.98;
                blend(&mut img, x as i64, y as i64, BLACK, a);
            }
        }
    }

    let shade = Rgb8::new(0x1a, 0x10, 0x06);
    ellipse(&mut img, 256.0 * u, 155.0 * vu, 68.0 * u, 82.0 * vu, shade, 1.0);
    rect(&mut img, 228.0 * u, 222.0 * vu, 284.0 * u, 266.0 * vu, shade, 1.0);
    ellipse(&mut img, 256.0 * u, 300.0 * vu, 110.0 * u, 60.0 * vu, shade, 1.0);

    stroke_rect(&mut img, 6.0 * u, 6.0 * vu, fw - 6.0 * u, fh - 6.0 * vu, (3.0 * u).max(1.0), Rgb8::new(0x6a, 0x5a, 0x30), 0.4);
    img
}

/// The thing in the window. Purple glow, a pale figure, two dark eyes.
pub(super) fn ghost(w: u32, h: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(w, h, opaque(Rgb8::new(0x06, 0x02, 0x0f)));
    let fw = w as f32;
    let fh = h as f32;
    let u = fw / 512.0;
    let vu = fh / 512.0;
    let (cx, cy) = (fw * 0.5, fh * 0.5);

    glow(&mut img, cx, cy, 256.0 * u, Rgb8::new(100, 60, 200), 0.55);
    glow(&mut img, cx, cy, 128.0 * u, Rgb8::new(100, 60, 200), 0.5);

    let robe = Rgb8::new(230, 220, 255);
    ellipse(&mut img, 256.0 * u, 180.0 * vu, 50.0 * u, 65.0 * vu, robe, 0.8);

    // Body: quadratic flanks from the shoulders down, fading out
    let y0 = 240.0 * vu;
    let y1 = 500.0 * vu;
    let rows = (y1 - y0) as u32;
    for i in 0..rows {
        let t = i as f32 / rows.max(2).saturating_sub(1) as f32;
        let omt = 1.0 - t;
        let left = (omt * omt * 206.0 + 2.0 * t * omt * 180.0 + t * t * 210.0) * u;
        let right = (omt * omt * 306.0 + 2.0 * t * omt * 332.0 + t * t * 302.0) * u;
        let a = 0.7 * (1.0 - t);
        rect(&mut img, left, y0 + i as f32, right, y0 + i as f32 + 1.0, robe, a);
    }

    let eye = Rgb8::new(0x02, 0x00, 0x05);
    ellipse(&mut img, 235.0 * u, 175.0 * vu, 10.0 * u, 16.0 * vu, eye, 1.0);
    ellipse(&mut img, 277.0 * u, 175.0 * vu, 10.0 * u, 16.0 * vu, eye, 1.0);
    img
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> ArchiveEntry {
        ArchiveEntry {
            heading: "Doctorate of Applied Hauntology".to_string(),
            years: "1887 - 1891".to_string(),
            body: "Research into load-bearing apparitions and the long-term care of houses that refuse to stay empty."
                .to_string(),
        }
    }

    #[test]
    fn test_slide_active_dot_is_accented() {
        let accent = Rgb8::new(0x44, 0xaa, 0xee);
        let img = slide(512, 320, &entry(), accent, 1, 3);
        let target = opaque(accent);
        assert!(img.pixels().any(|p| *p == target));
    }

    #[test]
    fn test_slide_body_wraps_to_multiple_lines() {
        let img = slide(512, 320, &entry(), Rgb8::new(0x44, 0xaa, 0xee), 0, 1);
        // Pale body pixels should land on more than one text row
        let pale = opaque(PALE_BLUE);
        let mut rows: Vec<u32> = img
            .enumerate_pixels()
            .filter(|(_, _, p)| **p == pale)
            .map(|(_, y, _)| y)
            .collect();
        rows.sort_unstable();
        rows.dedup();
        assert!(rows.len() > 9, "expected at least two wrapped body rows, got {} pixel rows", rows.len());
    }

    #[test]
    fn test_hologram_corners_carry_brackets() {
        let accent = Rgb8::new(0x44, 0xaa, 0xee);
        let img = hologram(512, 320, &entry(), accent, 0, 2);
        // Bracket stroke near the top-left corner reads close to full accent
        let hit = (0..40).any(|y| (0..40).any(|x| img.get_pixel(x, y + 26).0[2] > 180));
        assert!(hit);
    }

    #[test]
    fn test_hologram_marks_active_segment() {
        let accent = Rgb8::new(0x20, 0xff, 0x80);
        let img = hologram(512, 320, &entry(), accent, 1, 2);
        let active = img.get_pixel(265, 295).0[1];
        let idle = img.get_pixel(240, 295).0[1];
        assert!(active > idle);
    }

    #[test]
    fn test_portrait_has_dark_corners_and_lit_center() {
        let img = portrait_placeholder(128, 160);
        // (4,4) sits deep in the vignette but clear of the frame stroke,
        // which lands on rows/columns 1-2 at this scale.
        let corner = img.get_pixel(4, 4);
        let center = img.get_pixel(64, 40);
        assert!(corner.0[0] < 6, "corner not vignetted: {:?}", corner);
        assert!(center.0[0] > corner.0[0]);
    }

    #[test]
    fn test_ghost_eyes_darker_than_face() {
        let img = ghost(256, 256);
        let eye = img.get_pixel((235.0 * 0.5) as u32, (175.0 * 0.5) as u32);
        let brow = img.get_pixel(128, (150.0 * 0.5) as u32);
        assert!(eye.0[0] < brow.0[0]);
    }
}
