//! Container-metadata collaborator boundary
//!
//! Listing the named embedded resources of a host binary is a capability this
//! crate depends on but does not implement. Any metadata reader that can
//! produce `(name, is_embedded, bytes)` triples plugs in through
//! [`ResourceContainer`]; the scanner and pipeline never look past that trait.

use std::path::Path;

use crate::error::Result;

/// One named resource as listed by a container reader.
///
/// Bytes are owned copies: the reader's own buffers may not outlive the scan,
/// so implementations hand out data by value.
#[derive(Debug, Clone)]
pub struct RawResource {
    /// Resource name as stored in the container.
    pub name: String,
    /// Whether the resource data is embedded in the container itself.
    pub is_embedded: bool,
    /// Raw resource bytes.
    pub bytes: Vec<u8>,
}

impl RawResource {
    /// Create an embedded resource.
    #[must_use]
    pub fn embedded(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            is_embedded: true,
            bytes,
        }
    }

    /// Create a linked (non-embedded) resource.
    #[must_use]
    pub fn linked(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_embedded: false,
            bytes: Vec::new(),
        }
    }
}

/// A loaded container that can list its named embedded resources.
pub trait ResourceContainer {
    /// List the container's resources in their stored order.
    fn resources(&self) -> Result<Vec<RawResource>>;
}

/// Opens container files on behalf of the extraction pipeline.
///
/// The pipeline consults [`supports`](ContainerOpener::supports) when
/// classifying batch inputs; anything the opener declines is recorded as
/// unsupported rather than failing the batch.
pub trait ContainerOpener {
    /// Whether this opener recognizes the given path as a container.
    fn supports(&self, path: &Path) -> bool;

    /// Open the container and return a reader for its resources.
    fn open(&self, path: &Path) -> Result<Box<dyn ResourceContainer>>;
}

/// An in-memory container, used by embedding applications and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryContainer {
    resources: Vec<RawResource>,
}

impl MemoryContainer {
    #[must_use]
    pub fn new(resources: Vec<RawResource>) -> Self {
        Self { resources }
    }

    /// Append a resource, preserving insertion order.
    pub fn push(&mut self, resource: RawResource) {
        self.resources.push(resource);
    }
}

impl ResourceContainer for MemoryContainer {
    fn resources(&self) -> Result<Vec<RawResource>> {
        Ok(self.resources.clone())
    }
}

/// An opener that recognizes nothing.
///
/// Default for the shipped binary: standalone `.compressed` payloads are
/// handled natively by the pipeline, while container inputs require the
/// embedding application to wire in a real metadata reader.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoContainerSupport;

impl ContainerOpener for NoContainerSupport {
    fn supports(&self, _path: &Path) -> bool {
        false
    }

    fn open(&self, path: &Path) -> Result<Box<dyn ResourceContainer>> {
        Err(crate::error::Error::UnsupportedInput {
            path: path.to_path_buf(),
        })
    }
}
