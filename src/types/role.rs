//! Roles of the images inside a preset directory.

use std::path::Path;

/// File name of the distinguished background image.
pub const BACKGROUND_FILENAME: &str = "g1.png";

/// File name of the auto-maintained shade image.
pub const SHADE_FILENAME: &str = "black.png";

/// Extensions recognised as images (compared case-insensitively).
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// What an image in a preset directory is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageRole {
    /// Base layer of every composite.
    Background,
    /// Blend target for the opacity effect. Never shown or exported.
    Shade,
    /// Composited on top of the processed background.
    Overlay,
}

impl ImageRole {
    /// Classify a file by name, or `None` if it is not an image.
    pub fn of(path: &Path) -> Option<Self> {
        let filename = path.file_name()?.to_str()?.to_ascii_lowercase();

        if filename == BACKGROUND_FILENAME {
            Some(Self::Background)
        } else if filename == SHADE_FILENAME {
            Some(Self::Shade)
        } else if is_image_file(path) {
            Some(Self::Overlay)
        } else {
            None
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Shade => "shade",
            Self::Overlay => "overlay",
        }
    }
}

/// Check whether a path has a recognised image extension.
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&e.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_of() {
        assert_eq!(ImageRole::of(Path::new("g1.png")), Some(ImageRole::Background));
        assert_eq!(ImageRole::of(Path::new("G1.PNG")), Some(ImageRole::Background));
        assert_eq!(ImageRole::of(Path::new("black.png")), Some(ImageRole::Shade));
        assert_eq!(ImageRole::of(Path::new("dir/Black.png")), Some(ImageRole::Shade));
        assert_eq!(ImageRole::of(Path::new("logo.png")), Some(ImageRole::Overlay));
        assert_eq!(ImageRole::of(Path::new("photo.JPEG")), Some(ImageRole::Overlay));
        assert_eq!(ImageRole::of(Path::new("g1.jpg")), Some(ImageRole::Overlay));
        assert_eq!(ImageRole::of(Path::new("notes.txt")), None);
        assert_eq!(ImageRole::of(Path::new("noext")), None);
    }

    #[test]
    fn test_is_image_file() {
        assert!(is_image_file(Path::new("a.png")));
        assert!(is_image_file(Path::new("a.Jpg")));
        assert!(!is_image_file(Path::new("a.gif")));
        assert!(!is_image_file(Path::new("a")));
    }
}
