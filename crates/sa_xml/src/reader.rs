use roxmltree::Node;
use sa_archive::archive::{ReadOptions, Strictness, Trail};
use sa_archive::{
    Archive, Class, ClassInfo, Diagnostic, Diagnostics, Mode, Property, SchemaVersion,
    TypeRegistry, WireKind,
};
use sa_utils::hash::{FixedHashState, HashMap};

use crate::{TreeFormat, XmlTree};

// -----------------------------------------------------------------------------
// Frame

/// An entered element with its child elements grouped by tag.
///
/// The grouping is built once on entry, so the n-th child of a tag is found
/// without rescanning the siblings before it.
struct Frame<'a, 'input> {
    node: Node<'a, 'input>,
    elements: HashMap<&'input str, Vec<Node<'a, 'input>>>,
}

impl<'a, 'input> Frame<'a, 'input> {
    fn new(node: Node<'a, 'input>) -> Self {
        let mut elements: HashMap<&'input str, Vec<Node<'a, 'input>>> =
            HashMap::with_hasher(FixedHashState);
        for child in node.children().filter(Node::is_element) {
            elements.entry(child.tag_name().name()).or_default().push(child);
        }
        Self { node, elements }
    }

    #[inline]
    fn elements(&self, name: &str) -> &[Node<'a, 'input>] {
        self.elements.get(name).map_or(&[][..], Vec::as_slice)
    }
}

// -----------------------------------------------------------------------------
// TreeReader

/// An [`Archive`] in read mode over a parsed [`XmlTree`].
///
/// Attributes and child elements are matched by local name, namespaces are
/// ignored. Elements and attributes no descriptor asks for are skipped.
pub struct TreeReader<'a, 'input> {
    registry: &'a TypeRegistry,
    options: ReadOptions,
    version: SchemaVersion,
    root: Node<'a, 'input>,
    frames: Vec<Frame<'a, 'input>>,
    trail: Trail,
    valid: bool,
    diagnostics: Diagnostics,
}

impl<'a, 'input> TreeReader<'a, 'input> {
    pub fn new(
        registry: &'a TypeRegistry,
        options: ReadOptions,
        tree: &'a XmlTree<'input>,
        format: &TreeFormat,
    ) -> Self {
        Self {
            registry,
            options,
            version: tree.version(),
            root: tree.root(),
            frames: Vec::new(),
            trail: Trail::new(format.root_tag),
            valid: true,
            diagnostics: Diagnostics::new(),
        }
    }

    /// Construct every child element of the root whose tag names a registered class.
    ///
    /// Unknown tags are reported and skipped, invalid objects are dropped.
    pub fn read_objects(&mut self) -> Vec<Box<dyn Class>> {
        let root = self.root;
        let mut objects = Vec::new();

        for (index, node) in root.children().filter(Node::is_element).enumerate() {
            let tag = node.tag_name().name();
            let mut object = match self.registry.create(tag) {
                Ok(object) => object,
                Err(err) => {
                    log::debug!("{err}");
                    self.diagnostics.push(Diagnostic::UnknownType {
                        tag: tag.to_string(),
                        path: format!("{}/{tag}[{index}]", self.trail.location()),
                    });
                    continue;
                }
            };

            self.frames.push(Frame::new(node));
            self.trail.enter_root(object.class_info(), index);
            self.valid = true;
            let visited = object.visit(self);
            let location = self.trail.location();
            self.trail.leave();
            self.frames.pop();

            match visited {
                Ok(()) if self.valid => objects.push(object),
                Ok(()) => log::debug!("dropped invalid object at {location}"),
                Err(err) => log::warn!("dropped object at {location}: {err}"),
            }
        }
        objects
    }

    #[inline]
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    #[inline]
    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    #[inline]
    fn current(&self) -> Node<'a, 'input> {
        self.frames.last().map_or(self.root, |frame| frame.node)
    }

    /// The child elements of the current node named `name`, in document order.
    #[inline]
    fn children(&self, name: &str) -> &[Node<'a, 'input>] {
        self.frames.last().map_or(&[][..], |frame| frame.elements(name))
    }
}

/// The direct text children of `node`, concatenated.
fn text_of(node: Node<'_, '_>) -> String {
    node.children()
        .filter(Node::is_text)
        .filter_map(|child| child.text())
        .collect()
}

impl Archive for TreeReader<'_, '_> {
    #[inline]
    fn mode(&self) -> Mode {
        Mode::Read
    }

    #[inline]
    fn version(&self) -> SchemaVersion {
        self.version
    }

    #[inline]
    fn strictness(&self) -> Strictness {
        self.options.strictness
    }

    #[inline]
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    #[inline]
    fn location(&self) -> String {
        self.trail.location()
    }

    #[inline]
    fn class(&self) -> &'static str {
        self.trail.class()
    }

    #[inline]
    fn replace_validity(&mut self, valid: bool) -> bool {
        core::mem::replace(&mut self.valid, valid)
    }

    fn count(&self, prop: &'static Property) -> usize {
        match prop.wire() {
            WireKind::Attribute => usize::from(self.current().has_attribute(prop.name())),
            WireKind::Element => self.children(prop.name()).len(),
            WireKind::Text => usize::from(!text_of(self.current()).trim().is_empty()),
        }
    }

    fn read_text(&self, prop: &'static Property, index: usize) -> Option<String> {
        match prop.wire() {
            WireKind::Attribute if index == 0 => {
                self.current().attribute(prop.name()).map(str::to_string)
            }
            WireKind::Element => self.children(prop.name()).get(index).copied().map(text_of),
            WireKind::Text if index == 0 => {
                let text = text_of(self.current());
                let text = text.trim();
                (!text.is_empty()).then(|| text.to_string())
            }
            _ => None,
        }
    }

    fn enter(&mut self, prop: &'static Property, class: &'static ClassInfo, index: usize) -> bool {
        let Some(&child) = self.children(prop.name()).get(index) else {
            return false;
        };
        self.frames.push(Frame::new(child));
        self.trail.enter(prop, class, index);
        true
    }

    #[inline]
    fn leave(&mut self) {
        self.frames.pop();
        self.trail.leave();
    }
}

// -----------------------------------------------------------------------------
// Tests
