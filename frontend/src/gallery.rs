//! Prediction gallery model.
//!
//! The gallery is the ordered, append-only list behind the `#predictions`
//! container. Every entry gets a stable [`EntryId`] so deletion removes
//! exactly one entry regardless of what else was appended or removed since.

use std::rc::Rc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::types::{MaskPrediction, PredictionResult, RenderError};

/// Stable identifier of a rendered entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

/// One mask sub-panel of an entry.
#[derive(Clone, Debug, PartialEq)]
pub struct MaskPanel {
    /// `data:` URL of the mask overlay
    pub image_src: String,
    /// Producing model
    pub model_name: String,
}

/// One rendered prediction: original image, filename and its masks.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryEntry {
    pub id: EntryId,
    pub filename: String,
    /// `data:` URL of the original image
    pub image_src: String,
    pub masks: Vec<MaskPanel>,
}

impl GalleryEntry {
    fn from_result(id: EntryId, result: PredictionResult) -> Result<Self, RenderError> {
        let PredictionResult { filename, image, mask } = result;

        let image_src = image_data_url(&image).map_err(|e| RenderError::InvalidImage {
            filename: filename.clone(),
            reason: e.to_string(),
        })?;

        let masks = mask
            .into_iter()
            .map(|MaskPrediction { mask_data, model_name }| {
                match image_data_url(&mask_data) {
                    Ok(image_src) => Ok(MaskPanel { image_src, model_name }),
                    Err(e) => Err(RenderError::InvalidMask {
                        filename: filename.clone(),
                        model_name,
                        reason: e.to_string(),
                    }),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { id, filename, image_src, masks })
    }
}

/// Ordered collection of rendered predictions.
///
/// Entries are shared so the view can list them without copying image data.
#[derive(Clone, Debug, Default)]
pub struct Gallery {
    next_id: u64,
    entries: Vec<Rc<GalleryEntry>>,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Rc<GalleryEntry>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append one entry per result, in order, after existing entries.
    ///
    /// Every result is converted before anything is appended: if one is
    /// invalid the gallery is left untouched.
    pub fn append(&mut self, results: Vec<PredictionResult>) -> Result<Vec<EntryId>, RenderError> {
        let first = self.next_id;
        let new_entries = results
            .into_iter()
            .zip(first..)
            .map(|(result, id)| GalleryEntry::from_result(EntryId(id), result))
            .collect::<Result<Vec<_>, _>>()?;

        self.next_id = first + new_entries.len() as u64;
        let ids = new_entries.iter().map(|entry| entry.id).collect();
        self.entries.extend(new_entries.into_iter().map(Rc::new));
        Ok(ids)
    }

    /// Remove the entry with `id`. Returns `false` if it was already gone.
    pub fn remove(&mut self, id: EntryId) -> bool {
        match self.entries.iter().position(|entry| entry.id == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Build a `data:` URL from a base64 image payload.
///
/// The service emits MIME-wrapped base64 (a newline every 76 characters),
/// so whitespace is stripped before validating.
pub fn image_data_url(payload: &str) -> Result<String, base64::DecodeError> {
    let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = STANDARD.decode(&compact)?;
    Ok(format!("data:{};base64,{}", sniff_mime(&bytes), compact))
}

fn sniff_mime(bytes: &[u8]) -> &'static str {
    match bytes {
        [0xFF, 0xD8, 0xFF, ..] => "image/jpeg",
        [b'G', b'I', b'F', b'8', ..] => "image/gif",
        [b'B', b'M', ..] => "image/bmp",
        // PNG is what the service produces
        _ => "image/png",
    }
}
