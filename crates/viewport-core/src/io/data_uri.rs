use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{Result, ViewportError};

/// A parsed `data:` URI carrying base64 payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataUri {
    pub mime: String,
    pub data: Vec<u8>,
}

impl DataUri {
    pub fn new(mime: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            data,
        }
    }

    /// Parse `data:<mime>[;params];base64,<payload>`.
    pub fn parse(uri: &str) -> Result<Self> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| ViewportError::InvalidDataUri("missing 'data:' scheme".into()))?;
        let (meta, payload) = rest
            .split_once(',')
            .ok_or_else(|| ViewportError::InvalidDataUri("missing ',' separator".into()))?;

        let mut params = meta.split(';');
        let mime = params.next().unwrap_or_default().to_string();
        if !params.any(|p| p.eq_ignore_ascii_case("base64")) {
            return Err(ViewportError::InvalidDataUri(
                "only base64 payloads are supported".into(),
            ));
        }

        let data = STANDARD
            .decode(payload.trim())
            .map_err(|e| ViewportError::InvalidDataUri(e.to_string()))?;
        Ok(Self { mime, data })
    }
}

impl std::fmt::Display for DataUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "data:{};base64,{}", self.mime, STANDARD.encode(&self.data))
    }
}
