//! Turning command line arguments into engine input.
//!
//! Media files are never opened: only the file name and length from the
//! filesystem metadata reach the engine.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::analysis::{ContentInput, MediaKind};
use crate::error::{InputError, Result};

/// Read text from the positional argument, a file, or `stdin`, in that order.
pub fn text_input<R: Read>(text: Option<String>, file: Option<&Path>, mut stdin: R) -> Result<ContentInput> {
    let text = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(ContentInput::Text(text))
}

/// Describe the media file at `path`.
///
/// The MIME type comes from `mime` when given, otherwise it is guessed from
/// the extension. Unknown extensions yield an empty MIME type.
pub fn media_input(path: &Path, mime: Option<&str>, kind: MediaKind) -> Result<ContentInput> {
    let metadata = fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(InputError::NotAFile {
            path: path.display().to_string(),
        }
        .into());
    }

    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mime_type = match mime {
        Some(mime) => mime.trim().to_string(),
        None => mime_guess::from_path(path)
            .first()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_default(),
    };

    tracing::debug!(
        filename = %filename,
        byte_size = metadata.len(),
        mime_type = %mime_type,
        kind = %kind,
        "Collected media metadata"
    );

    Ok(ContentInput::Media {
        filename,
        byte_size: metadata.len(),
        mime_type,
        kind,
    })
}
