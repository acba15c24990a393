//! Selected-chart queue for the upload phase.
//!
//! Holds metadata only; the underlying browser `File` blobs live with the
//! controller so this model stays plain data. Capacity and the image-only
//! rule are enforced here, and rejections are reported explicitly so the
//! controller can surface them instead of dropping files silently.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

/// Upper bound on selected charts per session.
pub const MAX_FILES: usize = 5;

/// Result of trying to add one file to the queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// The MIME type is not `image/*`.
    NotAnImage,
    /// The queue already holds [`MAX_FILES`] entries.
    QueueFull,
}

/// Metadata for one user-chosen chart image.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    /// File name as reported by the browser.
    pub name: String,
    /// MIME type as reported by the browser.
    pub mime: String,
    /// Size in bytes.
    pub size_bytes: f64,
    /// Object URL for the preview thumbnail, when one was created.
    pub preview_url: Option<String>,
}

impl SelectedFile {
    /// Build an entry from browser-reported metadata.
    #[must_use]
    pub fn from_meta(name: impl Into<String>, mime: impl Into<String>, size_bytes: f64) -> Self {
        Self { name: name.into(), mime: mime.into(), size_bytes, preview_url: None }
    }

    /// True for `image/*` MIME types; everything else is rejected.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

/// Ordered queue of selected charts, capacity-bounded at [`MAX_FILES`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FileQueue {
    pub entries: Vec<SelectedFile>,
}

impl FileQueue {
    /// Append a file, enforcing the image-only rule and the capacity bound.
    pub fn try_add(&mut self, file: SelectedFile) -> AddOutcome {
        if !file.is_image() {
            return AddOutcome::NotAnImage;
        }
        if self.entries.len() >= MAX_FILES {
            return AddOutcome::QueueFull;
        }
        self.entries.push(file);
        AddOutcome::Added
    }

    /// Remove the entry at `index`, shifting later entries down. Returns the
    /// removed entry so its preview URL can be revoked.
    pub fn remove(&mut self, index: usize) -> Option<SelectedFile> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_FILES
    }
}
