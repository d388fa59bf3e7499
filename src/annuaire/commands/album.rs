use std::path::Path;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::platform::ImageEncoder;
use crate::store::Directory;

pub fn add_photo(directory: &mut Directory, url: String, caption: String) -> Result<CmdResult> {
    let photo = directory.add_photo(url, caption);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Photo ajoutée : {}",
        photo.caption
    )));
    Ok(result)
}

/// Full upload flow: embed the file through the encoder, then store it.
/// A missing caption falls back to the file's name.
pub fn upload(
    directory: &mut Directory,
    encoder: &dyn ImageEncoder,
    path: &Path,
    caption: Option<String>,
) -> Result<CmdResult> {
    let url = encoder.encode(path)?;
    let caption = caption.filter(|c| !c.trim().is_empty()).unwrap_or_else(|| {
        path.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("photo")
            .to_string()
    });
    add_photo(directory, url, caption)
}

pub fn list(directory: &Directory) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_photos(directory.photos().to_vec()))
}
