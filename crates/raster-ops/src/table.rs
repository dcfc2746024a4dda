//! Named image store.
//!
//! [`ImageTable`] is the explicit state a command layer threads through its
//! calls: operations read images by name and write their results under a
//! new (or the same) name. Sources are never modified in place; writing to
//! an existing name replaces the stored image.
//!
//! ```rust
//! use raster_core::{Image, Pixel};
//! use raster_ops::{ImageTable, Operation};
//!
//! let mut table = ImageTable::new();
//! table.insert("koala", Image::filled(2, 2, Pixel::gray(90.0)));
//! table.apply(&Operation::Brighten(10.0), "koala", "koala-bright").unwrap();
//! assert_eq!(table.get("koala-bright").unwrap().pixel(0, 0).red(), 100.0);
//! assert!(table.get("missing").is_err());
//! ```

use crate::channels;
use crate::composite;
use crate::{OpsError, OpsResult, Operation};
use raster_core::Image;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Images keyed by name.
#[derive(Debug, Clone, Default)]
pub struct ImageTable {
    images: HashMap<String, Image>,
}

impl ImageTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `image` under `name`, returning the image it replaced.
    pub fn insert(&mut self, name: impl Into<String>, image: Image) -> Option<Image> {
        let name = name.into();
        trace!(%name, height = image.height(), width = image.width(), "insert image");
        self.images.insert(name, image)
    }

    /// Image stored under `name`.
    ///
    /// # Errors
    ///
    /// [`OpsError::UnknownImage`] if there is none.
    pub fn get(&self, name: &str) -> OpsResult<&Image> {
        self.images
            .get(name)
            .ok_or_else(|| OpsError::UnknownImage(name.to_string()))
    }

    /// Removes and returns the image stored under `name`.
    ///
    /// # Errors
    ///
    /// [`OpsError::UnknownImage`] if there is none.
    pub fn remove(&mut self, name: &str) -> OpsResult<Image> {
        self.images
            .remove(name)
            .ok_or_else(|| OpsError::UnknownImage(name.to_string()))
    }

    /// Whether `name` is stored.
    pub fn contains(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }

    /// Number of stored images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Stored names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.images.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Applies `op` to `src` and stores the result as `dst`.
    ///
    /// Nothing is stored if the operation fails.
    pub fn apply(&mut self, op: &Operation, src: &str, dst: &str) -> OpsResult<()> {
        debug!(op = op.name(), src, dst, "table apply");
        let out = op.apply(self.get(src)?)?;
        self.insert(dst, out);
        Ok(())
    }

    /// Splits `src` into single-channel images stored as `red`, `green` and
    /// `blue`.
    pub fn split_rgb(&mut self, src: &str, red: &str, green: &str, blue: &str) -> OpsResult<()> {
        debug!(src, red, green, blue, "table split_rgb");
        let (r, g, b) = channels::split_rgb(self.get(src)?).into_parts();
        self.insert(red, r);
        self.insert(green, g);
        self.insert(blue, b);
        Ok(())
    }

    /// Combines the channels of `red`, `green` and `blue` into `dst`.
    pub fn combine_rgb(&mut self, red: &str, green: &str, blue: &str, dst: &str) -> OpsResult<()> {
        debug!(red, green, blue, dst, "table combine_rgb");
        let out = channels::combine_rgb(self.get(red)?, self.get(green)?, self.get(blue)?)?;
        self.insert(dst, out);
        Ok(())
    }

    /// Stores a split-view preview of `op` on `src` as `dst`.
    pub fn split_view(&mut self, op: &Operation, src: &str, dst: &str, percentage: f32) -> OpsResult<()> {
        debug!(op = op.name(), src, dst, percentage, "table split_view");
        let out = composite::split_view(self.get(src)?, op, percentage)?;
        self.insert(dst, out);
        Ok(())
    }
}
