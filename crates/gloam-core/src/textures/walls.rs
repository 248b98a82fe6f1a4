//! Wall, floor, and masonry painters.

use gloam_logic::color::Rgb8;
use image::RgbaImage;
use rand::Rng;

use super::{blend, ellipse, glow, hgradient, opaque, polyline, rect, stroke_rect};

/// Hall wallpaper. Violet stripes over near-black, flecked and stained,
/// with a skirting band at the bottom.
pub(super) fn wallpaper(w: u32, h: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(w, h, opaque(Rgb8::new(0x07, 0x04, 0x10)));
    let mut rng = rand::thread_rng();
    let fw = w as f32;
    let fh = h as f32;
    let u = fw / 1024.0;

    let step = (56.0 * u).max(2.0);
    let stripe_w = (28.0 * u).max(1.0);
    let mut x = 0.0;
    while x < fw {
        rect(&mut img, x, 0.0, x + stripe_w, fh, Rgb8::new(22, 8, 36), 0.3);
        x += step;
    }

    // Faded damask blotches
    for _ in 0..48 {
        let bx = rng.gen::<f32>() * fw;
        let by = rng.gen::<f32>() * fh;
        let r = (3.0 + rng.gen::<f32>() * 5.0) * u;
        ellipse(&mut img, bx, by, r, r * 1.3, Rgb8::new(30, 10, 50), 0.3);
    }

    // Something dried here a long time ago
    for _ in 0..9 {
        let bx = rng.gen::<f32>() * fw;
        let by = rng.gen::<f32>() * fh * 0.8;
        let a = 0.25 + rng.gen::<f32>() * 0.35;
        ellipse(&mut img, bx, by, 4.0 * u, 3.0 * u, Rgb8::new(88, 0, 0), a);
        let drip = (10.0 + rng.gen::<f32>() * 50.0) * u;
        let sway = (rng.gen::<f32>() - 0.5) * 6.0 * u;
        polyline(
            &mut img,
            &[(bx, by), (bx + sway, by + drip * 0.5), (bx, by + drip)],
            (2.5 + rng.gen::<f32>() * 2.0) * u,
            Rgb8::new(70, 0, 0),
            a * 0.9,
        );
    }

    let speck = (w * h / 480).max(64);
    for _ in 0..speck {
        let x = rng.gen_range(0..w) as i64;
        let y = rng.gen_range(0..h) as i64;
        blend(&mut img, x, y, Rgb8::new(0, 0, 0), rng.gen::<f32>() * 0.08);
    }

    // Skirting lines
    let lw = (1.5 * u).max(1.0);
    rect(&mut img, 0.0, fh * 0.86, fw, fh * 0.86 + lw, Rgb8::new(0, 0, 0), 0.75);
    rect(&mut img, 0.0, fh * 0.95, fw, fh * 0.95 + lw, Rgb8::new(0, 0, 0), 0.75);
    img
}

/// Gray bump sheet with random specks. White reads as raised.
pub(super) fn rough_bump(w: u32, h: u32, base_gray: u8, speck_max: u8) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(w, h, opaque(Rgb8::new(base_gray, base_gray, base_gray)));
    let mut rng = rand::thread_rng();
    let count = (w * h / 96).max(32);
    for _ in 0..count {
        let v = rng.gen_range(0..=speck_max);
        let c = Rgb8::new(v, v, v);
        let x = rng.gen_range(0..w) as f32;
        let y = rng.gen_range(0..h) as f32;
        rect(&mut img, x, y, x + 2.0, y + 2.0, c, 1.0);
    }
    img
}

/// Hall floorboards running along the texture's y axis.
pub(super) fn planks(w: u32, h: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(w, h, opaque(Rgb8::new(0x06, 0x03, 0x01)));
    let mut rng = rand::thread_rng();
    let fw = w as f32;
    let fh = h as f32;
    let u = fw / 1024.0;
    let pw = fw / 8.0;
    let inset = (2.0 * u).max(1.0);

    let mut x = 0.0;
    while x < fw {
        let v = 0.6 + rng.gen::<f32>() * 0.5;
        let tone = Rgb8::new((18.0 * v) as u8, (9.0 * v) as u8, (4.0 * v) as u8);
        rect(&mut img, x + inset, 0.0, x + pw - inset, fh, tone, 1.0);

        for _ in 0..12 {
            let gx = x + inset + rng.gen::<f32>() * (pw - inset * 2.0);
            let gy = rng.gen::<f32>() * fh;
            let glen = (40.0 + rng.gen::<f32>() * 160.0) * u;
            polyline(
                &mut img,
                &[(gx, gy), (gx + (rng.gen::<f32>() - 0.5) * 4.0 * u, gy + glen)],
                1.0,
                Rgb8::new(0, 0, 0),
                rng.gen::<f32>() * 0.08,
            );
        }

        rect(&mut img, x, 0.0, x + (3.0 * u).max(1.0), fh, Rgb8::new(0, 0, 0), 1.0);
        x += pw;
    }

    // Old dark stains where things were set down
    for _ in 0..2 {
        let cx = rng.gen::<f32>() * fw;
        let cy = rng.gen::<f32>() * fh;
        glow(&mut img, cx, cy, 270.0 * u, Rgb8::new(0, 0, 0), 0.6);
    }
    img
}

/// Stair tread cap, grained along its length.
pub(super) fn tread(w: u32, h: u32) -> RgbaImage {
    let mut img = RgbaImage::new(w, h);
    hgradient(
        &mut img,
        &[
            (0.0, Rgb8::new(0x1e, 0x12, 0x08)),
            (0.5, Rgb8::new(0x2e, 0x1c, 0x0e)),
            (1.0, Rgb8::new(0x12, 0x0c, 0x04)),
        ],
    );
    let mut rng = rand::thread_rng();
    let fh = h as f32;
    for _ in 0..16 {
        let y = rng.gen::<f32>() * fh;
        rect(&mut img, 0.0, y, w as f32, y + 1.0, Rgb8::new(0, 0, 0), rng.gen::<f32>() * 0.09);
    }
    img
}

/// Vertical boarding, tinted by `tone`. Used for window shutters and
/// the yard fence.
pub(super) fn boards(w: u32, h: u32, tone: Rgb8) -> RgbaImage {
    let base = tone.scaled(0.4);
    let mut img = RgbaImage::from_pixel(w, h, opaque(base));
    let mut rng = rand::thread_rng();
    let fw = w as f32;
    let fh = h as f32;
    let u = fw / 512.0;
    let bw = fw / 6.0;
    let inset = (2.0 * u).max(1.0);

    let mut x = 0.0;
    while x < fw {
        let v = 0.7 + rng.gen::<f32>() * 0.5;
        rect(&mut img, x + inset, 0.0, x + bw - inset, fh, tone.scaled(0.4 * v), 1.0);
        for _ in 0..10 {
            let gx = x + inset + rng.gen::<f32>() * (bw - inset * 2.0).max(1.0);
            let gy = rng.gen::<f32>() * fh * 0.7;
            polyline(
                &mut img,
                &[(gx, gy), (gx + (rng.gen::<f32>() - 0.5) * 3.0 * u, gy + fh * 0.3 * rng.gen::<f32>())],
                1.0,
                Rgb8::new(0, 0, 0),
                rng.gen::<f32>() * 0.12,
            );
        }
        rect(&mut img, x, 0.0, x + (3.0 * u).max(1.0), fh, Rgb8::new(0, 0, 0), 0.8);
        // Nail heads top and bottom
        for ny in [fh * 0.06, fh * 0.94] {
            ellipse(&mut img, x + bw * 0.5, ny, 2.5 * u, 2.5 * u, Rgb8::new(0x0a, 0x0a, 0x0c), 0.9);
        }
        x += bw;
    }
    img
}

/// Flagstones: an offset grid of gray-violet slabs with jittered tones
/// and deep mortar gaps.
pub(super) fn stone(w: u32, h: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(w, h, opaque(Rgb8::new(0x05, 0x03, 0x0a)));
    let mut rng = rand::thread_rng();
    let fw = w as f32;
    let fh = h as f32;
    let u = fw / 512.0;
    let sw = fw / 5.0;
    let sh = fh / 6.0;
    let gap = (5.0 * u).max(1.0);

    let rows = (fh / sh).ceil() as i32 + 1;
    let cols = (fw / sw).ceil() as i32 + 1;
    for row in 0..rows {
        let off = if row % 2 == 0 { 0.0 } else { sw * 0.5 };
        for col in -1..cols {
            let x = col as f32 * sw + off;
            let y = row as f32 * sh;
            let v = 0.5 + rng.gen::<f32>() * 0.6;
            let tone = Rgb8::new((40.0 * v) as u8, (36.0 * v) as u8, (52.0 * v) as u8);
            rect(&mut img, x + gap, y + gap, x + sw - gap, y + sh - gap, tone, 1.0);
            rect(
                &mut img,
                x + gap,
                y + gap,
                x + sw - gap,
                y + sh - gap,
                Rgb8::new(5, 2, 10),
                rng.gen::<f32>() * 0.4,
            );
        }
    }

    for _ in 0..6 {
        let mut cx = rng.gen::<f32>() * fw;
        let mut cy = rng.gen::<f32>() * fh;
        let mut pts = vec![(cx, cy)];
        for _ in 0..4 {
            cx += (rng.gen::<f32>() - 0.5) * 90.0 * u;
            cy += (rng.gen::<f32>() - 0.3) * 90.0 * u;
            pts.push((cx, cy));
        }
        polyline(&mut img, &pts, (2.0 * u).max(1.0), Rgb8::new(3, 1, 6), 0.8);
    }
    img
}

/// Exterior brick in the manor's bruised violet, with a matching bump
/// sheet. Bump bricks are random grays with dark bevels; cracks carve
/// both sheets together.
pub(super) fn brick(w: u32, h: u32) -> (RgbaImage, RgbaImage) {
    let mut map = RgbaImage::from_pixel(w, h, opaque(Rgb8::new(0x11, 0x08, 0x22)));
    let mut bump = RgbaImage::from_pixel(w, h, opaque(Rgb8::new(0x11, 0x11, 0x11)));
    let mut rng = rand::thread_rng();
    let fw = w as f32;
    let fh = h as f32;
    let u = fw / 1024.0;
    let bw = 100.0 * u;
    let bh = 45.0 * (fh / 1024.0);
    let inset = (2.0 * u).max(1.0);
    let bevel = (4.0 * u).max(1.0);

    let rows = (fh / bh).ceil() as i32 + 1;
    let cols = (fw / bw).ceil() as i32 + 1;
    for row in 0..rows {
        let off = if row % 2 == 0 { 0.0 } else { bw * 0.5 };
        for col in -1..cols {
            let x = col as f32 * bw + off;
            let y = row as f32 * bh;
            let s = 0.6 + rng.gen::<f32>() * 0.4;
            let tone = Rgb8::new((45.0 * s) as u8, (20.0 * s) as u8, (65.0 * s) as u8);
            rect(&mut map, x + inset, y + inset, x + bw - inset, y + bh - inset, tone, 1.0);
            rect(
                &mut map,
                x + inset,
                y + inset,
                x + bw - inset,
                y + bh - inset,
                Rgb8::new(5, 2, 10),
                rng.gen::<f32>() * 0.6,
            );

            let bs = rng.gen_range(100..200u8);
            rect(
                &mut bump,
                x + inset,
                y + inset,
                x + bw - inset,
                y + bh - inset,
                Rgb8::new(bs, bs, bs),
                1.0,
            );
            stroke_rect(
                &mut bump,
                x + bevel,
                y + bevel,
                x + bw - bevel,
                y + bh - bevel,
                bevel,
                Rgb8::new(0x22, 0x22, 0x22),
                1.0,
            );
        }
    }

    let crack_w = (3.0 * u).max(1.0);
    for _ in 0..8 {
        let mut cx = rng.gen::<f32>() * fw;
        let mut cy = rng.gen::<f32>() * fh;
        let mut pts = vec![(cx, cy)];
        for _ in 0..5 {
            cx += (rng.gen::<f32>() - 0.5) * 150.0 * u;
            cy += (rng.gen::<f32>() - 0.2) * 150.0 * u;
            pts.push((cx, cy));
        }
        polyline(&mut map, &pts, crack_w, Rgb8::new(5, 2, 10), 0.9);
        polyline(&mut bump, &pts, crack_w, Rgb8::new(0, 0, 0), 1.0);
    }

    (map, bump)
}

/// Poured concrete for the archive chamber. `tint` lifts the base a
/// few shades so facing walls can differ.
pub(super) fn concrete(w: u32, h: u32, tint: u8) -> RgbaImage {
    let l = 18 + tint.min(12) * 3;
    let mut img = RgbaImage::from_pixel(w, h, opaque(Rgb8::new(l, l, l + 4)));
    let mut rng = rand::thread_rng();
    let fw = w as f32;
    let fh = h as f32;
    let u = fw / 1024.0;

    let grains = (w * h / 52).max(256);
    for _ in 0..grains {
        let x = rng.gen_range(0..w) as i64;
        let y = rng.gen_range(0..h) as i64;
        if rng.gen::<f32>() < 0.5 {
            blend(&mut img, x, y, Rgb8::new(255, 255, 255), rng.gen::<f32>() * 0.05);
        } else {
            blend(&mut img, x, y, Rgb8::new(0, 0, 0), rng.gen::<f32>() * 0.07);
        }
    }

    // Pour lines, each with a pale lip just below
    let step = 96.0 * (fh / 1024.0);
    let mut y = step;
    while y < fh {
        rect(&mut img, 0.0, y, fw, y + (1.5 * u).max(1.0), Rgb8::new(0, 0, 0), 0.25);
        rect(&mut img, 0.0, y + 3.0 * u, fw, y + 4.0 * u, Rgb8::new(255, 255, 255), 0.02);
        y += step;
    }

    // Formwork seams
    let mut x = 256.0 * u;
    while x < fw {
        rect(&mut img, x, 0.0, x + (1.0 * u).max(1.0), fh, Rgb8::new(0, 0, 0), 0.18);
        x += 256.0 * u;
    }
    img
}

/// Institutional floor tiles: a near-black checker with grout lines.
pub(super) fn tiles(w: u32, h: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(w, h, opaque(Rgb8::new(0x09, 0x08, 0x08)));
    let mut rng = rand::thread_rng();
    let fw = w as f32;
    let fh = h as f32;
    let u = fw / 1024.0;
    let tile = 128.0 * u;

    let cols = (fw / tile).ceil() as i32;
    let rows = (fh / tile).ceil() as i32;
    for row in 0..rows {
        for col in 0..cols {
            let tone = if (row + col) % 2 == 0 {
                Rgb8::new(10, 10, 12)
            } else {
                Rgb8::new(7, 7, 9)
            };
            let x = col as f32 * tile;
            let y = row as f32 * tile;
            rect(&mut img, x, y, x + tile, y + tile, tone, 1.0);
            // Scuffing
            rect(&mut img, x, y, x + tile, y + tile, Rgb8::new(0, 0, 0), rng.gen::<f32>() * 0.15);
        }
    }

    let gw = (2.0 * u).max(1.0);
    let mut x = 0.0;
    while x < fw {
        rect(&mut img, x, 0.0, x + gw, fh, Rgb8::new(0, 0, 0), 0.7);
        x += tile;
    }
    let mut y = 0.0;
    while y < fh {
        rect(&mut img, 0.0, y, fw, y + gw, Rgb8::new(0, 0, 0), 0.7);
        y += tile;
    }
    img
}

/// Brushed machine-bay panelling, riveted along the seams.
pub(super) fn metal_panel(w: u32, h: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(w, h, opaque(Rgb8::new(0x0c, 0x0d, 0x10)));
    let mut rng = rand::thread_rng();
    let fw = w as f32;
    let fh = h as f32;
    let u = fw / 1024.0;

    // One faint brushing pass per row
    let mut y = 0.0;
    while y < fh {
        let tone = if rng.gen::<f32>() < 0.5 { Rgb8::new(255, 255, 255) } else { Rgb8::new(0, 0, 0) };
        rect(&mut img, 0.0, y, fw, y + 1.0, tone, rng.gen::<f32>() * 0.04);
        y += 1.0;
    }

    let seam = 128.0 * u;
    let seam_w = (2.0 * u).max(1.0);
    let mut x = seam;
    while x < fw {
        rect(&mut img, x, 0.0, x + seam_w, fh, Rgb8::new(0, 0, 0), 0.55);
        // Rivets march down both sides of the seam
        let mut ry = 32.0 * u;
        while ry < fh {
            for rx in [x - 10.0 * u, x + 10.0 * u] {
                ellipse(&mut img, rx, ry, 3.0 * u, 3.0 * u, Rgb8::new(0x2a, 0x2e, 0x36), 0.9);
                ellipse(&mut img, rx - u, ry - u, 1.2 * u, 1.2 * u, Rgb8::new(0x48, 0x4e, 0x58), 0.8);
            }
            ry += 64.0 * u;
        }
        x += seam;
    }
    img
}

/// Open floor grating over a void; cell lips catch the console light.
pub(super) fn grate(w: u32, h: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(w, h, opaque(Rgb8::new(0x03, 0x05, 0x08)));
    let fw = w as f32;
    let fh = h as f32;
    let u = fw / 256.0;
    let cell = 32.0 * u;
    let bar = (3.0 * u).max(1.0);

    let cols = (fw / cell).ceil() as i32;
    let rows = (fh / cell).ceil() as i32;
    for row in 0..rows {
        for col in 0..cols {
            let x = col as f32 * cell;
            let y = row as f32 * cell;
            rect(&mut img, x + bar, y + bar, x + cell - bar, y + cell - bar, Rgb8::new(10, 14, 22), 0.9);
            rect(&mut img, x + bar, y + bar, x + cell - bar, y + bar + (1.0 * u).max(1.0), Rgb8::new(0, 180, 255), 0.07);
        }
    }

    let mut x = 0.0;
    while x < fw {
        rect(&mut img, x, 0.0, x + bar, fh, Rgb8::new(0, 0, 0), 1.0);
        x += cell;
    }
    let mut y = 0.0;
    while y < fh {
        rect(&mut img, 0.0, y, fw, y + bar, Rgb8::new(0, 0, 0), 1.0);
        y += cell;
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallpaper_keeps_dark_palette() {
        let img = wallpaper(128, 128);
        let bright = img.pixels().filter(|p| p.0[0] > 120 && p.0[1] > 120).count();
        assert_eq!(bright, 0);
    }

    #[test]
    fn test_planks_have_opaque_separators() {
        let img = planks(256, 256);
        // First separator column is pure black regardless of grain
        for y in 0..256 {
            let p = img.get_pixel(0, y);
            assert_eq!((p.0[0], p.0[1], p.0[2]), (0, 0, 0));
        }
    }

    #[test]
    fn test_brick_bump_is_grayscale() {
        let (_, bump) = brick(128, 128);
        for p in bump.pixels() {
            assert_eq!(p.0[0], p.0[1]);
            assert_eq!(p.0[1], p.0[2]);
        }
    }

    #[test]
    fn test_boards_tint_follows_tone() {
        let warm = boards(128, 128, Rgb8::new(200, 120, 40));
        let warm_px = warm.get_pixel(12, 64);
        assert!(warm_px.0[0] > warm_px.0[2]);
    }

    #[test]
    fn test_stone_slabs_stay_muted() {
        let img = stone(128, 128);
        assert!(img.pixels().all(|p| p.0[0] < 80 && p.0[1] < 80));
    }

    #[test]
    fn test_rough_bump_matches_base_gray() {
        let img = rough_bump(64, 64, 0x66, 80);
        let base = img.pixels().filter(|p| p.0[0] == 0x66).count();
        assert!(base > 64 * 64 / 2);
    }

    #[test]
    fn test_concrete_tint_lifts_base() {
        let dark: u64 = concrete(64, 64, 0).pixels().map(|p| p.0[0] as u64).sum();
        let pale: u64 = concrete(64, 64, 8).pixels().map(|p| p.0[0] as u64).sum();
        assert!(pale > dark);
    }

    #[test]
    fn test_tiles_checker_alternates() {
        let img = tiles(256, 256);
        // Adjacent cell centers land on opposite checker tones
        let a = img.get_pixel(16, 16).0[2];
        let b = img.get_pixel(48, 16).0[2];
        assert!(a > b);
    }

    #[test]
    fn test_metal_panel_stays_dark() {
        let img = metal_panel(128, 128);
        assert!(img.pixels().all(|p| p.0[0] < 0x60));
    }

    #[test]
    fn test_grate_bars_are_black() {
        let img = grate(256, 256);
        let p = img.get_pixel(0, 0);
        assert_eq!((p.0[0], p.0[1], p.0[2]), (0, 0, 0));
    }
}
