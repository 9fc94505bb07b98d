#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use sa_archive as archive;
pub use sa_datamodel as datamodel;
pub use sa_utils as utils;
pub use sa_xml as xml;

pub use sa_archive::{ArchiveError, Diagnostic, Diagnostics, SchemaVersion};
pub use sa_datamodel::{Document, dump, load};
