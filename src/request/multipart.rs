//! Multipart form parts with content-type inference.

use bytes::Bytes;

/// Fallback when neither magic bytes nor the extension identify the payload.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// One named part of a multipart form body.
///
/// The effective content type is resolved lazily at dispatch time:
/// an explicit type wins, then magic-byte sniffing, then the file-name
/// extension, and finally `application/octet-stream`.
#[derive(Debug, Clone)]
pub struct Part {
    pub(crate) name: String,
    pub(crate) file_name: Option<String>,
    pub(crate) content_type: Option<String>,
    pub(crate) data: Bytes,
}

impl Part {
    /// A part carrying raw bytes under the given form-field name.
    pub fn bytes(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Part {
            name: name.into(),
            file_name: None,
            content_type: None,
            data: data.into(),
        }
    }

    /// A part carrying UTF-8 text (`text/plain`).
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Part {
            name: name.into(),
            file_name: None,
            content_type: Some("text/plain".to_string()),
            data: Bytes::from(text.into().into_bytes()),
        }
    }

    /// A part carrying a JSON document (`application/json`).
    pub fn json(name: impl Into<String>, json: &serde_json::Value) -> Self {
        Part {
            name: name.into(),
            file_name: None,
            content_type: Some("application/json".to_string()),
            data: Bytes::from(json.to_string().into_bytes()),
        }
    }

    /// Attach a file name, used for extension-based type inference and the
    /// `filename` field of the part headers.
    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Pin the content type explicitly, bypassing inference.
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolve the content type this part will be sent with.
    pub fn effective_content_type(&self) -> String {
        match &self.content_type {
            Some(explicit) => explicit.clone(),
            None => sniff_media_type(&self.data, self.file_name.as_deref()),
        }
    }
}

/// Infer a media type from payload bytes and an optional file name.
///
/// Magic bytes win over the extension; unrecognized input resolves to
/// `application/octet-stream`.
pub fn sniff_media_type(data: &[u8], file_name: Option<&str>) -> String {
    if let Some(kind) = infer::get(data) {
        return kind.mime_type().to_string();
    }
    file_name
        .and_then(media_type_from_extension)
        .unwrap_or(OCTET_STREAM)
        .to_string()
}

/// Media type from a file-name extension.
///
/// Covers the payload kinds the platform endpoints accept; anything else
/// falls back to the generic binary type at the call site.
pub fn media_type_from_extension(file_name: &str) -> Option<&'static str> {
    let ext = file_name.rsplit('.').next()?.to_ascii_lowercase();
    let media_type = match ext.as_str() {
        "wav" => "audio/wav",
        "flac" => "audio/flac",
        "ogg" | "opus" => "audio/ogg",
        "mp3" => "audio/mpeg",
        "l16" | "raw" => "audio/l16",
        "json" => "application/json",
        "txt" => "text/plain",
        "html" | "htm" => "text/html",
        "csv" => "text/csv",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "zip" => "application/zip",
        _ => return None,
    };
    Some(media_type)
}
