use alloc::borrow::Cow;

use quick_xml::Writer;
use quick_xml::escape::{escape, partial_escape};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use sa_archive::archive::{Trail, WriteOptions};
use sa_archive::value::Format;
use sa_archive::{
    Archive, ArchiveError, Class, ClassInfo, Diagnostic, Mode, Property, SchemaVersion,
    TypeRegistry, WireKind,
};

use crate::TreeFormat;

// -----------------------------------------------------------------------------
// Element

#[derive(Debug)]
struct Element {
    tag: &'static str,
    attributes: Vec<(&'static str, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    #[inline]
    const fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }
}

#[inline]
fn unbalanced() -> ArchiveError {
    ArchiveError::Write("unbalanced begin/end".to_string())
}

// -----------------------------------------------------------------------------
// TreeWriter

/// An [`Archive`] in write mode that builds an element tree and serializes it.
///
/// Every class written must be registered, including nested ones.
pub struct TreeWriter<'r> {
    registry: &'r TypeRegistry,
    options: WriteOptions,
    format: TreeFormat,
    stack: Vec<Element>,
    trail: Trail,
}

impl<'r> TreeWriter<'r> {
    pub fn new(registry: &'r TypeRegistry, options: WriteOptions, format: TreeFormat) -> Self {
        Self {
            registry,
            options,
            format,
            stack: Vec::new(),
            trail: Trail::new(format.root_tag),
        }
    }

    /// Write a document with `objects` as the top-level elements.
    pub fn write(mut self, objects: &mut [&mut dyn Class]) -> Result<Vec<u8>, ArchiveError> {
        let version = self.options.version;
        if !version.is_writable() {
            return Err(ArchiveError::VersionUnsupported {
                found: version.to_string(),
            });
        }
        log::info!("writing document version {version}");

        let mut root = Element::new(self.format.root_tag);
        root.attributes
            .push(("xmlns", self.format.namespace(version)));
        root.attributes.push(("version", version.to_string()));
        self.stack.push(root);

        for (index, object) in objects.iter_mut().enumerate() {
            let info = object.class_info();
            if !self.registry.contains(info.name()) {
                return Err(ArchiveError::UnregisteredType(info.name()));
            }
            self.stack.push(Element::new(info.name()));
            self.trail.enter_root(info, index);
            object.visit(&mut self)?;
            self.trail.leave();
            self.close()?;
        }

        let root = self.stack.pop().ok_or_else(unbalanced)?;
        if !self.stack.is_empty() {
            return Err(unbalanced());
        }
        serialize(&root, self.format.indent)
    }

    #[inline]
    fn current(&mut self) -> Result<&mut Element, ArchiveError> {
        self.stack.last_mut().ok_or_else(unbalanced)
    }

    // Move the innermost element into its parent.
    fn close(&mut self) -> Result<(), ArchiveError> {
        let element = self.stack.pop().ok_or_else(unbalanced)?;
        self.current()?.children.push(element);
        Ok(())
    }
}

impl Archive for TreeWriter<'_> {
    #[inline]
    fn mode(&self) -> Mode {
        Mode::Write
    }

    #[inline]
    fn version(&self) -> SchemaVersion {
        self.options.version
    }

    #[inline]
    fn format(&self) -> Format {
        self.options.format()
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        log::warn!("{diagnostic}");
    }

    #[inline]
    fn location(&self) -> String {
        self.trail.location()
    }

    #[inline]
    fn class(&self) -> &'static str {
        self.trail.class()
    }

    fn write_text(&mut self, prop: &'static Property, text: &str) -> Result<(), ArchiveError> {
        let current = self.current()?;
        match prop.wire() {
            WireKind::Attribute => current.attributes.push((prop.name(), text.to_string())),
            WireKind::Element => {
                let mut leaf = Element::new(prop.name());
                leaf.text = Some(text.to_string());
                current.children.push(leaf);
            }
            WireKind::Text => current.text = Some(text.to_string()),
        }
        Ok(())
    }

    fn begin(
        &mut self,
        prop: &'static Property,
        class: &'static ClassInfo,
        index: usize,
    ) -> Result<(), ArchiveError> {
        if !self.registry.contains(class.name()) {
            return Err(ArchiveError::UnregisteredType(class.name()));
        }
        self.stack.push(Element::new(prop.name()));
        self.trail.enter(prop, class, index);
        Ok(())
    }

    fn end(&mut self) -> Result<(), ArchiveError> {
        self.trail.leave();
        self.close()
    }
}

// -----------------------------------------------------------------------------
// Serialization

#[inline]
fn write_error(err: impl core::fmt::Display) -> ArchiveError {
    ArchiveError::Write(err.to_string())
}

fn serialize(root: &Element, indent: usize) -> Result<Vec<u8>, ArchiveError> {
    let mut writer = if indent == 0 {
        Writer::new(Vec::new())
    } else {
        Writer::new_with_indent(Vec::new(), b' ', indent)
    };
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(write_error)?;
    emit(&mut writer, root)?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    Ok(bytes)
}

/// Attribute values are whitespace-normalized on read, so tabs and line
/// breaks are written as character references.
fn escape_attribute(value: &str) -> Cow<'_, str> {
    let escaped = escape(value);
    if !escaped.contains(['\t', '\n', '\r']) {
        return escaped;
    }
    Cow::Owned(
        escaped
            .replace('\t', "&#9;")
            .replace('\n', "&#10;")
            .replace('\r', "&#13;"),
    )
}

/// Line ends in text are normalized to `\n` on read, so `\r` is written as a
/// character reference.
fn escape_text(text: &str) -> Cow<'_, str> {
    let escaped = partial_escape(text);
    if !escaped.contains('\r') {
        return escaped;
    }
    Cow::Owned(escaped.replace('\r', "&#13;"))
}

fn emit(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<(), ArchiveError> {
    let mut start = BytesStart::new(element.tag);
    for (name, value) in &element.attributes {
        let value = escape_attribute(value);
        // Raw bytes: the value is escaped already.
        start.push_attribute((name.as_bytes(), value.as_bytes()));
    }

    if element.text.is_none() && element.children.is_empty() {
        return writer.write_event(Event::Empty(start)).map_err(write_error);
    }

    writer.write_event(Event::Start(start)).map_err(write_error)?;
    if let Some(text) = &element.text {
        writer
            .write_event(Event::Text(BytesText::from_escaped(escape_text(text))))
            .map_err(write_error)?;
    }
    for child in &element.children {
        emit(writer, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.tag)))
        .map_err(write_error)
}

// -----------------------------------------------------------------------------
// Tests
