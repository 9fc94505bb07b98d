use roxmltree::{Document, Node};
use sa_archive::{ArchiveError, SchemaVersion};

use crate::TreeFormat;

// -----------------------------------------------------------------------------
// XmlTree

/// A parsed document whose schema version has been accepted.
pub struct XmlTree<'input> {
    document: Document<'input>,
    version: SchemaVersion,
}

impl<'input> XmlTree<'input> {
    /// Parse `bytes` as UTF-8 XML and negotiate the schema version.
    pub fn parse(bytes: &'input [u8], format: &TreeFormat) -> Result<Self, ArchiveError> {
        let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
        let text = core::str::from_utf8(bytes)
            .map_err(|err| ArchiveError::MalformedInput(err.to_string()))?;
        let document =
            Document::parse(text).map_err(|err| ArchiveError::MalformedInput(err.to_string()))?;
        let version = negotiate(document.root_element(), format)?;
        Ok(Self { document, version })
    }

    #[inline]
    pub fn version(&self) -> SchemaVersion {
        self.version
    }

    /// The root element.
    #[inline]
    pub fn root(&self) -> Node<'_, 'input> {
        self.document.root_element()
    }
}

/// Read the schema version from the `version` attribute of the root, or
/// else from the last segment of its namespace URI.
fn negotiate(root: Node<'_, '_>, format: &TreeFormat) -> Result<SchemaVersion, ArchiveError> {
    let tag = root.tag_name().name();
    if tag != format.root_tag {
        return Err(ArchiveError::MalformedInput(format!(
            "expected root element `{}`, found `{tag}`",
            format.root_tag
        )));
    }

    let declared = root.attribute("version").map(str::trim);
    let namespaced = root
        .tag_name()
        .namespace()
        .and_then(|ns| ns.trim_end_matches('/').rsplit_once('/'))
        .map(|(_, version)| version);

    let text = match (declared, namespaced) {
        (Some(declared), Some(namespaced)) => {
            if declared != namespaced {
                log::warn!(
                    "version attribute {declared} disagrees with namespace version {namespaced}, using {declared}"
                );
            }
            declared
        }
        (Some(declared), None) => declared,
        (None, Some(namespaced)) => namespaced,
        (None, None) => {
            return Err(ArchiveError::VersionUnsupported {
                found: "none".to_string(),
            });
        }
    };

    let version = text
        .parse::<SchemaVersion>()
        .map_err(|_| ArchiveError::VersionUnsupported {
            found: text.to_string(),
        })?;
    if !version.is_readable() {
        return Err(ArchiveError::VersionUnsupported {
            found: version.to_string(),
        });
    }
    if version.is_newer_than_current() {
        log::warn!(
            "document version {version} is newer than {}, unknown content is skipped",
            SchemaVersion::CURRENT
        );
    } else {
        log::info!("reading document version {version}");
    }
    Ok(version)
}

// -----------------------------------------------------------------------------
// Tests
