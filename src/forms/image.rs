// src/forms/image.rs
use base64::Engine;
use mime::Mime;

/// What a data-URL field is allowed to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    /// `image/*` only.
    Image,
    /// Any media type (verification documents may be PDFs).
    Document,
}

/// A file read client-side into a `data:` URL.
#[derive(Debug, Clone, PartialEq)]
pub struct DataUrlPayload {
    pub mime: Mime,
    pub byte_len: usize,
    /// The original URL, kept so the preview survives a re-rendered form.
    pub data_url: String,
}

impl DataUrlPayload {
    /// Empty input means "nothing attached" and yields `Ok(None)`.
    pub fn parse(raw: &str, kind: PayloadKind, max_bytes: usize) -> Result<Option<Self>, String> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }

        let rest = raw
            .strip_prefix("data:")
            .ok_or_else(|| "Unsupported file upload".to_string())?;
        let (meta, data) = rest
            .split_once(',')
            .ok_or_else(|| "Unsupported file upload".to_string())?;
        let media_type = meta
            .strip_suffix(";base64")
            .ok_or_else(|| "File must be base64 encoded".to_string())?;

        let mime: Mime = media_type
            .parse()
            .map_err(|_| format!("Unrecognised file type: {media_type}"))?;
        if kind == PayloadKind::Image && mime.type_() != mime::IMAGE {
            return Err("Please upload an image file".to_string());
        }

        let bytes = base64::engine::general_purpose::STANDARD
            .decode(data)
            .map_err(|_| "File data is corrupt".to_string())?;
        if bytes.is_empty() {
            return Err("File is empty".to_string());
        }
        if bytes.len() > max_bytes {
            return Err(format!(
                "File is too large (max {} MB)",
                max_bytes / (1024 * 1024)
            ));
        }

        Ok(Some(Self {
            mime,
            byte_len: bytes.len(),
            data_url: raw.to_string(),
        }))
    }
}
