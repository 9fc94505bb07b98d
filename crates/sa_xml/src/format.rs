use sa_archive::SchemaVersion;

// -----------------------------------------------------------------------------
// TreeFormat

/// The XML-specific shape of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeFormat {
    /// Tag of the root element.
    pub root_tag: &'static str,
    /// Namespace URI without the trailing version.
    pub namespace_root: &'static str,
    /// Spaces per nesting level of written documents.
    pub indent: usize,
}

impl Default for TreeFormat {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TreeFormat {
    pub const SEISCOMP_ROOT: &'static str = "seiscomp";
    pub const SEISCOMP_NAMESPACE: &'static str =
        "http://geofon.gfz-potsdam.de/ns/seiscomp3-schema/";

    #[inline]
    pub const fn new() -> Self {
        Self {
            root_tag: Self::SEISCOMP_ROOT,
            namespace_root: Self::SEISCOMP_NAMESPACE,
            indent: 2,
        }
    }

    #[inline]
    pub const fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// The namespace URI of `version`.
    pub fn namespace(&self, version: SchemaVersion) -> String {
        format!("{}{}", self.namespace_root, version)
    }
}
