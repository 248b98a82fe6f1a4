//! External asset loading with a deadline.
//!
//! The only real asset in the manor is the hall portrait, and it is
//! optional. The decode runs on a helper thread while the caller waits
//! with `recv_timeout`; a miss of any kind (absent file, undecodable
//! bytes, too slow) substitutes the procedural placeholder so session
//! construction never stalls on disk.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use image::RgbaImage;

use crate::textures::TextureFactory;

/// Why a portrait load produced no image.
#[derive(Debug)]
pub enum AssetError {
    Image(image::ImageError),
    /// The loader did not answer before the deadline.
    Deadline(Duration),
    /// The loader thread died without sending a result.
    Gone,
}

impl From<image::ImageError> for AssetError {
    fn from(e: image::ImageError) -> Self {
        AssetError::Image(e)
    }
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::Image(e) => write!(f, "image error: {}", e),
            AssetError::Deadline(d) => write!(f, "no portrait within {:?}", d),
            AssetError::Gone => write!(f, "portrait loader quit without a result"),
        }
    }
}

impl std::error::Error for AssetError {}

/// Start decoding `path` on a helper thread. The receiver yields at most
/// one result; drop it to abandon the load.
pub fn spawn_portrait_load(path: PathBuf) -> mpsc::Receiver<Result<RgbaImage, AssetError>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let result = load_rgba(&path);
        let _ = tx.send(result);
    });
    rx
}

fn load_rgba(path: &Path) -> Result<RgbaImage, AssetError> {
    let img = image::open(path)?;
    Ok(img.to_rgba8())
}

/// Wait out the deadline for a pending load.
pub fn await_portrait(
    rx: &mpsc::Receiver<Result<RgbaImage, AssetError>>,
    deadline: Duration,
) -> Result<RgbaImage, AssetError> {
    match rx.recv_timeout(deadline) {
        Ok(result) => result,
        Err(mpsc::RecvTimeoutError::Timeout) => Err(AssetError::Deadline(deadline)),
        Err(mpsc::RecvTimeoutError::Disconnected) => Err(AssetError::Gone),
    }
}

/// Portrait for the hall frame: the configured file when it loads in
/// time, the procedural placeholder otherwise.
pub fn portrait_or_placeholder(
    path: Option<&Path>,
    deadline: Duration,
    factory: &TextureFactory,
) -> RgbaImage {
    let path = match path {
        Some(path) => path,
        None => return factory.portrait_placeholder(),
    };
    let rx = spawn_portrait_load(path.to_path_buf());
    match await_portrait(&rx, deadline) {
        Ok(img) => img,
        Err(err) => {
            log::info!("portrait fallback for {}: {}", path.display(), err);
            factory.portrait_placeholder()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reports_image_error() {
        let rx = spawn_portrait_load(PathBuf::from("/nonexistent/portrait.png"));
        let result = await_portrait(&rx, Duration::from_secs(5));
        assert!(matches!(result, Err(AssetError::Image(_))));
    }

    #[test]
    fn test_deadline_when_nothing_answers() {
        let (_tx, rx) = mpsc::channel::<Result<RgbaImage, AssetError>>();
        let result = await_portrait(&rx, Duration::from_millis(10));
        assert!(matches!(result, Err(AssetError::Deadline(_))));
    }

    #[test]
    fn test_dropped_loader_reports_gone() {
        let (tx, rx) = mpsc::channel::<Result<RgbaImage, AssetError>>();
        drop(tx);
        let result = await_portrait(&rx, Duration::from_secs(1));
        assert!(matches!(result, Err(AssetError::Gone)));
    }

    #[test]
    fn test_real_file_round_trips() {
        let path = std::env::temp_dir().join("gloam_portrait_test.png");
        RgbaImage::new(8, 12).save(&path).unwrap();
        let rx = spawn_portrait_load(path.clone());
        let img = await_portrait(&rx, Duration::from_secs(5)).unwrap();
        assert_eq!((img.width(), img.height()), (8, 12));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_fallback_substitutes_placeholder() {
        let factory = TextureFactory::new(0.25);
        let placeholder = factory.portrait_placeholder();
        let got = portrait_or_placeholder(
            Some(Path::new("/nonexistent/portrait.png")),
            Duration::from_secs(5),
            &factory,
        );
        assert_eq!((got.width(), got.height()), (placeholder.width(), placeholder.height()));
        let none = portrait_or_placeholder(None, Duration::from_millis(1), &factory);
        assert_eq!(none.width(), placeholder.width());
    }
}
