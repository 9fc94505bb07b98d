#![doc = include_str!("../README.md")]

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod format;
mod reader;
mod tree;
mod writer;

#[cfg(test)]
mod testing;

// -----------------------------------------------------------------------------
// Exports

pub use format::TreeFormat;
pub use reader::TreeReader;
pub use tree::XmlTree;
pub use writer::TreeWriter;

// -----------------------------------------------------------------------------
// TreeArchive

use sa_archive::archive::{ReadOptions, WriteOptions};
use sa_archive::{ArchiveError, Class, Diagnostics, SchemaVersion, TypeRegistry};

/// The result of reading a document.
#[derive(Debug)]
pub struct Loaded {
    /// The version declared by the document.
    pub version: SchemaVersion,
    /// The valid top-level objects, in document order.
    pub objects: Vec<Box<dyn Class>>,
    pub diagnostics: Diagnostics,
}

/// Reads and writes XML documents of the classes in a [`TypeRegistry`].
///
/// # Examples
///
/// ```
/// use sa_archive::TypeRegistry;
/// use sa_xml::TreeArchive;
///
/// let registry = TypeRegistry::new();
/// let archive = TreeArchive::new(&registry);
///
/// let xml = br#"<seiscomp xmlns="http://geofon.gfz-potsdam.de/ns/seiscomp3-schema/0.11" version="0.11"/>"#;
/// let loaded = archive.load(xml).unwrap();
/// assert!(loaded.objects.is_empty());
///
/// let bytes = archive.dump(&mut []).unwrap();
/// assert!(String::from_utf8(bytes).unwrap().contains(r#"version="0.11""#));
/// ```
#[derive(Clone, Copy)]
pub struct TreeArchive<'r> {
    registry: &'r TypeRegistry,
    read: ReadOptions,
    write: WriteOptions,
    format: TreeFormat,
}

impl<'r> TreeArchive<'r> {
    /// Create an archive with default options.
    #[inline]
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self {
            registry,
            read: ReadOptions::new(),
            write: WriteOptions::new(),
            format: TreeFormat::new(),
        }
    }

    #[inline]
    pub fn with_read_options(mut self, options: ReadOptions) -> Self {
        self.read = options;
        self
    }

    #[inline]
    pub fn with_write_options(mut self, options: WriteOptions) -> Self {
        self.write = options;
        self
    }

    #[inline]
    pub fn with_format(mut self, format: TreeFormat) -> Self {
        self.format = format;
        self
    }

    #[inline]
    pub fn registry(&self) -> &'r TypeRegistry {
        self.registry
    }

    #[inline]
    pub fn read_options(&self) -> &ReadOptions {
        &self.read
    }

    /// Parse `bytes` and negotiate the schema version.
    ///
    /// Fails on malformed input and unsupported versions.
    #[inline]
    pub fn parse<'input>(&self, bytes: &'input [u8]) -> Result<XmlTree<'input>, ArchiveError> {
        XmlTree::parse(bytes, &self.format)
    }

    /// Construct the top-level objects of a parsed tree.
    pub fn construct(&self, tree: &XmlTree<'_>) -> Loaded {
        let mut reader = TreeReader::new(self.registry, self.read, tree, &self.format);
        let objects = reader.read_objects();
        Loaded {
            version: tree.version(),
            objects,
            diagnostics: reader.into_diagnostics(),
        }
    }

    /// [`parse`](Self::parse) and [`construct`](Self::construct) in one go.
    pub fn load(&self, bytes: &[u8]) -> Result<Loaded, ArchiveError> {
        let tree = self.parse(bytes)?;
        Ok(self.construct(&tree))
    }

    /// Write `objects` as the top-level elements of a document.
    pub fn dump(&self, objects: &mut [&mut dyn Class]) -> Result<Vec<u8>, ArchiveError> {
        TreeWriter::new(self.registry, self.write, self.format).write(objects)
    }
}
