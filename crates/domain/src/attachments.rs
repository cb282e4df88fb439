// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::validate_inline_image;

/// Maximum number of images a single inquiry may carry.
pub const MAX_INQUIRY_IMAGES: usize = 12;

/// Images staged on the inquiry form before submission.
///
/// Batches are added all-or-nothing: a batch that would push the total past
/// [`MAX_INQUIRY_IMAGES`], or that holds a non-inline image, is rejected and
/// the staged images stay as they were.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageAttachments {
    images: Vec<String>,
}

impl ImageAttachments {
    /// Creates an empty attachment list.
    #[must_use]
    pub const fn new() -> Self {
        Self { images: Vec::new() }
    }

    /// Adds a batch of inline image URLs.
    ///
    /// # Errors
    ///
    /// Returns `ImageLimitExceeded` if the batch would exceed the limit, or
    /// `InvalidImage` if any entry is not an inline `data:image/...` URL.
    pub fn add_batch<I>(&mut self, batch: I) -> Result<(), DomainError>
    where
        I: IntoIterator<Item = String>,
    {
        let batch: Vec<String> = batch.into_iter().collect();
        let attempted: usize = self.images.len() + batch.len();
        if attempted > MAX_INQUIRY_IMAGES {
            return Err(DomainError::ImageLimitExceeded {
                limit: MAX_INQUIRY_IMAGES,
                attempted,
            });
        }
        for image in &batch {
            validate_inline_image(image)?;
        }
        self.images.extend(batch);
        Ok(())
    }

    /// Removes the image at `index`, if present.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.images.len()).then(|| self.images.remove(index))
    }

    /// Number of staged images.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns true when nothing is staged.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// How many more images fit.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        MAX_INQUIRY_IMAGES.saturating_sub(self.images.len())
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.images
    }

    /// Consumes the list, yielding the image URLs in order.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.images
    }
}
