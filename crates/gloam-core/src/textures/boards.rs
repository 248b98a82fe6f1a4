//! Painted boards: door leaves, doorway signs, plaques, posters.

use gloam_logic::color::Rgb8;
use image::RgbaImage;
use rand::Rng;

use super::font::{self, Align};
use super::{blend, ellipse, gradient_at, glow, hgradient, opaque, polyline, rect, stroke_rect, vgradient};

const WHITE: Rgb8 = Rgb8::new(255, 255, 255);
const BLACK: Rgb8 = Rgb8::new(0, 0, 0);
const PALE_GOLD: Rgb8 = Rgb8::new(255, 240, 200);

/// Vertical gradient restricted to a sub-rectangle.
fn region_vgradient(img: &mut RgbaImage, x0: f32, y0: f32, x1: f32, y1: f32, stops: &[(f32, Rgb8)]) {
    let rows = (y1 - y0).max(1.0) as u32;
    for i in 0..rows {
        let t = i as f32 / rows.max(2).saturating_sub(1) as f32;
        let y = y0 + i as f32;
        rect(img, x0, y, x1, y + 1.0, gradient_at(stops, t), 1.0);
    }
}

/// Interior door leaf, tinted toward the destination room's accent.
/// Two recessed panels and a brass knob on the right edge.
pub(super) fn door_leaf(w: u32, h: u32, accent: Rgb8) -> RgbaImage {
    let mut img = RgbaImage::new(w, h);
    let base = Rgb8::new(0x09, 0x06, 0x03);
    let hue = accent.scaled(0.35);
    vgradient(&mut img, &[(0.0, base), (0.45, hue), (1.0, base)]);

    let mut rng = rand::thread_rng();
    let fw = w as f32;
    let fh = h as f32;
    let u = fw / 512.0;
    let vu = fh / 1024.0;

    let mut y = 0.0;
    while y < fh {
        rect(&mut img, 0.0, y, fw, y + 1.0, BLACK, 0.04 + rng.gen::<f32>() * 0.06);
        y += 6.0 * vu.max(0.5);
    }

    for (py0, py1) in [(90.0, 420.0), (500.0, 930.0)] {
        let (x0, y0) = (64.0 * u, py0 * vu);
        let (x1, y1) = (448.0 * u, py1 * vu);
        stroke_rect(&mut img, x0, y0, x1, y1, (10.0 * u).max(1.0), BLACK, 0.72);
        stroke_rect(&mut img, x0 + 5.0 * u, y0 + 5.0 * vu, x1 - 5.0 * u, y1 - 5.0 * vu, (3.0 * u).max(1.0), WHITE, 0.055);
        let rows = (y1 - y0 - 10.0 * vu).max(1.0) as u32;
        for i in 0..rows {
            let t = i as f32 / rows.max(2).saturating_sub(1) as f32;
            let ry = y0 + 5.0 * vu + i as f32;
            rect(&mut img, x0 + 5.0 * u, ry, x1 - 5.0 * u, ry + 1.0, WHITE, 0.04 * (1.0 - t));
            rect(&mut img, x0 + 5.0 * u, ry, x1 - 5.0 * u, ry + 1.0, BLACK, 0.12 * t);
        }
    }

    // Brass knob
    let (kx, ky, kr) = (430.0 * u, 512.0 * vu, 20.0 * u);
    ellipse(&mut img, kx, ky, kr, kr, Rgb8::new(0x7a, 0x50, 0x10), 1.0);
    glow(&mut img, kx - kr * 0.3, ky - kr * 0.3, kr * 0.8, Rgb8::new(0xd4, 0xa8, 0x40), 0.9);

    for _ in 0..6 {
        let sx = rng.gen::<f32>() * fw;
        let sy = rng.gen::<f32>() * fh;
        let ex = sx + (rng.gen::<f32>() - 0.5) * 60.0 * u;
        let ey = sy + (rng.gen::<f32>() - 0.5) * 24.0 * vu;
        polyline(&mut img, &[(sx, sy), (ex, ey)], 1.0, BLACK, 0.2 + rng.gen::<f32>() * 0.2);
    }
    img
}

/// Front door of the manor: bruised violet boards, two panels, and the
/// invitation painted across the lower one.
pub(super) fn front_door(w: u32, h: u32, name: &str, line_a: &str, line_b: &str) -> RgbaImage {
    let mut img = RgbaImage::new(w, h);
    hgradient(
        &mut img,
        &[
            (0.0, Rgb8::new(0x33, 0x15, 0x44)),
            (0.5, Rgb8::new(0x4a, 0x22, 0x60)),
            (1.0, Rgb8::new(0x33, 0x15, 0x44)),
        ],
    );

    let mut rng = rand::thread_rng();
    let fw = w as f32;
    let fh = h as f32;
    let u = fw / 512.0;
    let vu = fh / 1024.0;

    let grain = Rgb8::new(10, 5, 20);
    let mut y = 0.0;
    while y < fh {
        let wob = (y * 0.05 / vu.max(0.01)).sin() * 10.0 * vu;
        let wob2 = (y * 0.05 / vu.max(0.01) + 2.0).sin() * 10.0 * vu;
        polyline(&mut img, &[(0.0, y + wob), (fw, y + wob2)], 1.0, grain, 0.1 + rng.gen::<f32>() * 0.1);
        y += 3.0 * vu.max(0.5);
    }

    // Glass cutout above, kick panel below
    rect(&mut img, 64.0 * u, 64.0 * vu, 448.0 * u, 414.0 * vu, BLACK, 0.5);
    rect(&mut img, 64.0 * u, 480.0 * vu, 448.0 * u, 960.0 * vu, BLACK, 0.5);
    rect(&mut img, 84.0 * u, 500.0 * vu, 428.0 * u, 940.0 * vu, WHITE, 0.05);

    let cx = fw * 0.5;
    let shadow = 2.0 * u;
    for (txt, size, baseline) in [(name, 44.0, 630.0), (line_a, 22.0, 690.0), (line_b, 22.0, 730.0)] {
        let size = size * vu * 2.0;
        let top = baseline * vu - size;
        font::draw_text(&mut img, txt, cx + shadow, top + shadow, size, opaque(BLACK), Align::Center);
        font::draw_text(&mut img, txt, cx, top, size, opaque(WHITE), Align::Center);
    }
    img
}

/// Doorway name board: glowing accent border, big serif-ish label,
/// nail heads in the corners.
pub(super) fn sign_board(w: u32, h: u32, label: &str, accent: Rgb8) -> RgbaImage {
    let mut img = RgbaImage::new(w, h);
    vgradient(&mut img, &[(0.0, Rgb8::new(0x0e, 0x06, 0x08)), (1.0, Rgb8::new(0x06, 0x03, 0x05))]);

    let mut rng = rand::thread_rng();
    let fw = w as f32;
    let fh = h as f32;
    let u = fw / 1024.0;

    for _ in 0..60 {
        let y = rng.gen::<f32>() * fh;
        rect(&mut img, 0.0, y, fw, y + 1.0, BLACK, rng.gen::<f32>() * 0.07);
    }

    // Halo first, then the crisp border over it
    stroke_rect(&mut img, 3.0 * u, 3.0 * u, fw - 3.0 * u, fh - 3.0 * u, (11.0 * u).max(1.0), accent, 0.18);
    stroke_rect(&mut img, 6.0 * u, 6.0 * u, fw - 6.0 * u, fh - 6.0 * u, (5.0 * u).max(1.0), accent, 1.0);
    stroke_rect(&mut img, 16.0 * u, 16.0 * u, fw - 16.0 * u, fh - 16.0 * u, (2.0 * u).max(1.0), accent, 0.27);

    let size = fh * 0.44;
    let top = fh * 0.17;
    font::draw_text(&mut img, label, fw * 0.5 + 3.0 * u, top + 3.0 * u, size, opaque(BLACK), Align::Center);
    font::draw_text(&mut img, label, fw * 0.5, top, size, opaque(accent), Align::Center);

    let nail = accent.scaled(0.8);
    for (nx, ny) in [(28.0, 28.0), (fw / u - 28.0, 28.0), (28.0, fh / u - 28.0), (fw / u - 28.0, fh / u - 28.0)] {
        ellipse(&mut img, nx * u, ny * u, 6.0 * u, 6.0 * u, nail, 0.9);
    }
    img
}

/// Library plaque: banner title over listed lines. Lines past the body
/// region are dropped rather than shrunk.
pub(super) fn plaque(w: u32, h: u32, title: &str, lines: &[String], accent: Rgb8) -> RgbaImage {
    let mut img = RgbaImage::new(w, h);
    vgradient(
        &mut img,
        &[
            (0.0, Rgb8::new(0x11, 0x0e, 0x08)),
            (0.5, Rgb8::new(0x1e, 0x18, 0x08)),
            (1.0, Rgb8::new(0x11, 0x0e, 0x08)),
        ],
    );

    let mut rng = rand::thread_rng();
    let fw = w as f32;
    let fh = h as f32;
    let u = fw / 1024.0;
    let speck = (w * h / 700).max(32);
    for _ in 0..speck {
        let x = rng.gen_range(0..w) as i64;
        let y = rng.gen_range(0..h) as i64;
        blend(&mut img, x, y, BLACK, rng.gen::<f32>() * 0.08);
    }

    stroke_rect(&mut img, 12.0 * u, 12.0 * u, fw - 12.0 * u, fh - 12.0 * u, (3.0 * u).max(1.0), accent, 0.5);

    font::draw_text(&mut img, title, fw * 0.5, fh * 0.07, fh * 0.12, opaque(Rgb8::new(0xe8, 0xd0, 0x80)), Align::Center);

    let size = fh * 0.055;
    let step = fh * 0.085;
    let mut y = fh * 0.28;
    for line in lines {
        if y + size > fh * 0.95 {
            break;
        }
        rect(&mut img, fw * 0.06, y + size * 0.35, fw * 0.075, y + size * 0.65, accent, 0.9);
        font::draw_text(&mut img, line, fw * 0.09, y, size, opaque(PALE_GOLD), Align::Left);
        y += step;
    }
    img
}

/// Gallery poster: an abstract accent-toned wash behind a thin white
/// frame, titled below.
pub(super) fn poster(w: u32, h: u32, name: &str, caption: &str, accent: Rgb8) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(w, h, opaque(Rgb8::new(0x0a, 0x07, 0x08)));
    let mut rng = rand::thread_rng();
    let fw = w as f32;
    let fh = h as f32;
    let u = fw / 512.0;

    let (ax0, ay0, ax1, ay1) = (fw * 0.08, fh * 0.06, fw * 0.92, fh * 0.62);
    region_vgradient(
        &mut img,
        ax0,
        ay0,
        ax1,
        ay1,
        &[(0.0, accent), (0.4, accent.scaled(1.4)), (1.0, accent.scaled(0.6))],
    );
    for _ in 0..40 {
        let gy = ay0 + rng.gen::<f32>() * (ay1 - ay0);
        rect(&mut img, ax0, gy, ax1, gy + 1.0 + rng.gen::<f32>(), BLACK, 0.05 + rng.gen::<f32>() * 0.08);
    }
    stroke_rect(&mut img, ax0 + 4.0 * u, ay0 + 4.0 * u, ax1 - 4.0 * u, ay1 - 4.0 * u, (3.0 * u).max(1.0), WHITE, 0.15);

    font::draw_text(&mut img, name, fw * 0.5, fh * 0.68, fh * 0.042, opaque(PALE_GOLD), Align::Center);

    let size = fh * 0.026;
    let budget = fw * 0.84;
    let lines = gloam_logic::wrap::wrap_words(caption, budget, |s| font::measure(s, size));
    let mut y = fh * 0.76;
    for line in &lines {
        if y + size > fh * 0.97 {
            break;
        }
        font::draw_text(&mut img, line, fw * 0.5, y, size, opaque(accent), Align::Center);
        y += size * 1.6;
    }
    img
}

/// Threadbare parlor rug: banded border, diamond lattice field, worn
/// patches where feet have been.
pub(super) fn rug(w: u32, h: u32, accent: Rgb8) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(w, h, opaque(Rgb8::new(0x1a, 0x08, 0x0a)));
    let mut rng = rand::thread_rng();
    let fw = w as f32;
    let fh = h as f32;
    let u = fw / 512.0;

    stroke_rect(&mut img, 8.0 * u, 8.0 * u, fw - 8.0 * u, fh - 8.0 * u, (6.0 * u).max(1.0), accent.scaled(0.5), 0.8);
    stroke_rect(&mut img, 26.0 * u, 26.0 * u, fw - 26.0 * u, fh - 26.0 * u, (2.0 * u).max(1.0), accent.scaled(0.3), 0.7);

    let step = 64.0 * u;
    let r = 18.0 * u;
    let mut cy = step;
    while cy < fh - step * 0.5 {
        let mut cx = step;
        while cx < fw - step * 0.5 {
            polyline(
                &mut img,
                &[(cx, cy - r), (cx + r, cy), (cx, cy + r), (cx - r, cy), (cx, cy - r)],
                (1.5 * u).max(1.0),
                accent.scaled(0.4),
                0.5,
            );
            ellipse(&mut img, cx, cy, 3.0 * u, 3.0 * u, accent.scaled(0.55), 0.6);
            cx += step;
        }
        cy += step;
    }

    for _ in 0..5 {
        let x = rng.gen::<f32>() * fw;
        let y = rng.gen::<f32>() * fh;
        glow(&mut img, x, y, 90.0 * u, BLACK, 0.35);
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_border_is_pure_accent() {
        let accent = Rgb8::new(0x44, 0xaa, 0xee);
        let img = sign_board(512, 160, "HALL", accent);
        // Mid-top pixel of the 5px border band
        let p = img.get_pixel(256, 4);
        assert_eq!((p.0[0], p.0[1], p.0[2]), (accent.r, accent.g, accent.b));
    }

    #[test]
    fn test_front_door_paints_name() {
        let img = front_door(256, 512, "E. BLACKWOOD", "IS INSIDE.", "KNOCK.");
        let white = img.pixels().filter(|p| p.0 == [255, 255, 255, 255]).count();
        assert!(white > 50);
    }

    #[test]
    fn test_plaque_drops_overflowing_lines() {
        let accent = Rgb8::new(0x88, 0xee, 0x44);
        let lines: Vec<String> = (0..40).map(|i| format!("LINE {}", i)).collect();
        let img = plaque(256, 128, "LIBRARY", &lines, accent);
        assert_eq!(img.dimensions(), (256, 128));
    }

    #[test]
    fn test_rug_border_brighter_than_field() {
        let img = rug(256, 256, Rgb8::new(0xaa, 0x66, 0x22));
        // The shadow blotches are unseeded and only ever darken, so
        // compare the brightest border-band pixel against the brightest
        // pixel of a field patch clear of the lattice and both strokes.
        let border = (10u32..246).map(|x| img.get_pixel(x, 5).0[0]).max().unwrap();
        let img = &img;
        let field = (106u32..118)
            .flat_map(|y| (106u32..118).map(move |x| img.get_pixel(x, y).0[0]))
            .max()
            .unwrap();
        assert!(border > field, "border {border} not brighter than field {field}");
    }

    #[test]
    fn test_poster_wash_tracks_accent() {
        let red = poster(128, 192, "STUDY", "a small study", Rgb8::new(200, 30, 30));
        let center = red.get_pixel(64, 40);
        assert!(center.0[0] > center.0[2]);
    }
}
