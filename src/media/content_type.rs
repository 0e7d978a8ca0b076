//! Media kind tags and their file extensions.

/// Closed set of media kinds the save path understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Png,
    Jpeg,
    Gif,
    Heic,
    Tiff,
    Mov,
    Mp4,
}

impl MediaKind {
    /// File extension used when persisting this kind.
    pub fn extension(&self) -> &'static str {
        match self {
            MediaKind::Png => "png",
            MediaKind::Jpeg => "jpeg",
            MediaKind::Gif => "gif",
            MediaKind::Heic => "heic",
            MediaKind::Tiff => "tiff",
            MediaKind::Mov => "mov",
            MediaKind::Mp4 => "mp4",
        }
    }

    /// Raw content-type tag.
    pub fn tag(&self) -> &'static str {
        match self {
            MediaKind::Png => "image/png",
            MediaKind::Jpeg => "image/jpeg",
            MediaKind::Gif => "image/gif",
            MediaKind::Heic => "image/heic",
            MediaKind::Tiff => "image/tiff",
            MediaKind::Mov => "video/quicktime",
            MediaKind::Mp4 => "video/mp4",
        }
    }

    /// Looks a kind up by its raw tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "image/png" => Some(MediaKind::Png),
            "image/jpeg" => Some(MediaKind::Jpeg),
            "image/gif" => Some(MediaKind::Gif),
            "image/heic" => Some(MediaKind::Heic),
            "image/tiff" => Some(MediaKind::Tiff),
            "video/quicktime" => Some(MediaKind::Mov),
            "video/mp4" => Some(MediaKind::Mp4),
            _ => None,
        }
    }

    /// Looks a kind up by extension, case-insensitive.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "png" => Some(MediaKind::Png),
            "jpeg" | "jpg" => Some(MediaKind::Jpeg),
            "gif" => Some(MediaKind::Gif),
            "heic" => Some(MediaKind::Heic),
            "tiff" | "tif" => Some(MediaKind::Tiff),
            "mov" | "qt" => Some(MediaKind::Mov),
            "mp4" => Some(MediaKind::Mp4),
            _ => None,
        }
    }
}
