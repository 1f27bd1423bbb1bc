use serde::{Deserialize, Serialize};

/// A locally selected contract document, held in memory for the duration
/// of one analysis cycle.
///
/// Created when the user picks a valid file, replaced wholesale on the
/// next valid selection. The declared MIME type is whatever the browser
/// reported; it may be empty or wrong, which is why intake validation
/// also accepts a matching extension (see [`crate::upload`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl SelectedFile {
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            data,
        }
    }
}
