//! Image formats and their file extensions.

/// Extension used when the content type is absent or unrecognized.
pub const DEFAULT_EXTENSION: &str = "jpg";

/// Image formats a thumbnail download may arrive in.
///
/// The `Display` form is the file extension.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::IntoStaticStr,
    strum::Display,
)]
pub enum ImageFormat {
    /// JPEG
    #[strum(serialize = "jpg")]
    Jpeg,
    /// PNG
    #[strum(serialize = "png")]
    Png,
    /// GIF
    #[strum(serialize = "gif")]
    Gif,
    /// WebP
    #[strum(serialize = "webp")]
    Webp,
    /// Windows bitmap
    #[strum(serialize = "bmp")]
    Bmp,
    /// SVG
    #[strum(serialize = "svg")]
    Svg,
    /// TIFF
    #[strum(serialize = "tif")]
    Tiff,
    /// Windows icon
    #[strum(serialize = "ico")]
    Ico,
    /// AVIF
    #[strum(serialize = "avif")]
    Avif,
    /// HEIC
    #[strum(serialize = "heic")]
    Heic,
}

impl ImageFormat {
    /// Look up a format from a `Content-Type` value.
    ///
    /// Parameters such as `; charset=binary` are ignored, as is case.
    ///
    /// # Examples
    ///
    /// ```
    /// use kaltura_storage::ImageFormat;
    ///
    /// assert_eq!(ImageFormat::from_mime("IMAGE/PNG; charset=binary"), Some(ImageFormat::Png));
    /// assert_eq!(ImageFormat::from_mime("text/html"), None);
    /// ```
    pub fn from_mime(content_type: &str) -> Option<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "image/jpeg" | "image/jpg" | "image/pjpeg" => Some(ImageFormat::Jpeg),
            "image/png" => Some(ImageFormat::Png),
            "image/gif" => Some(ImageFormat::Gif),
            "image/webp" => Some(ImageFormat::Webp),
            "image/bmp" | "image/x-ms-bmp" => Some(ImageFormat::Bmp),
            "image/svg+xml" => Some(ImageFormat::Svg),
            "image/tiff" => Some(ImageFormat::Tiff),
            "image/x-icon" | "image/vnd.microsoft.icon" => Some(ImageFormat::Ico),
            "image/avif" => Some(ImageFormat::Avif),
            "image/heic" => Some(ImageFormat::Heic),
            _ => None,
        }
    }

    /// File extension, without the dot.
    pub fn extension(&self) -> &'static str {
        (*self).into()
    }
}

/// Extension for an optional `Content-Type` header.
///
/// An absent header gives [`DEFAULT_EXTENSION`]. So does an unrecognized
/// one, with a warning.
pub fn extension_for(content_type: Option<&str>) -> &'static str {
    match content_type {
        None => DEFAULT_EXTENSION,
        Some(mime) => match ImageFormat::from_mime(mime) {
            Some(format) => format.extension(),
            None => {
                tracing::warn!(
                    content_type = mime,
                    fallback = DEFAULT_EXTENSION,
                    "Unrecognized thumbnail content type"
                );
                DEFAULT_EXTENSION
            }
        },
    }
}
