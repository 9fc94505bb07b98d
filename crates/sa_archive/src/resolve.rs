//! Two-phase reference resolution.
//!
//! Phase 1 walks a fully constructed object graph and records the `publicID`
//! of every public object in a [`PublicIndex`]. Phase 2 walks it again and
//! resolves every [`Reference`](crate::Reference) against that index.
//!
//! Only objects that survived construction are indexed, so a reference never
//! resolves to an object that was dropped while reading. Unresolved references
//! keep their ID and produce a `DanglingReference` diagnostic.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use sa_utils::hash::{Entry, FixedHashState, HashMap};

use crate::archive::{Archive, Mode, Trail};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::ArchiveError;
use crate::info::{ClassInfo, Property};
use crate::object::Class;
use crate::reference::Handle;
use crate::version::SchemaVersion;

// -----------------------------------------------------------------------------
// DuplicatePolicy

/// Which object an ID refers to when several objects carry it.
///
/// All objects are kept in the document either way, only the index differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DuplicatePolicy {
    /// The first object in document order.
    FirstWins,
    /// The last object in document order. A retransmitted correction
    /// follows the object it replaces.
    #[default]
    LastWins,
}

// -----------------------------------------------------------------------------
// PublicIndex

/// Document-scoped map from `publicID` to the [`Handle`] of its object.
#[derive(Debug, Clone)]
pub struct PublicIndex {
    entries: HashMap<String, Handle>,
}

impl Default for PublicIndex {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl PublicIndex {
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: HashMap::with_hasher(FixedHashState),
        }
    }

    #[inline]
    pub fn get(&self, id: &str) -> Option<&Handle> {
        self.entries.get(id)
    }

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of indexed objects of class `name`.
    pub fn count_of(&self, name: &str) -> usize {
        self.entries
            .values()
            .filter(|handle| handle.class().name() == name)
            .count()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Handle)> {
        self.entries.iter().map(|(id, handle)| (id.as_str(), handle))
    }

    /// Insert `handle` for `id` following `policy`.
    ///
    /// Returns `true` if the ID was already present.
    pub fn insert(&mut self, id: &str, handle: Handle, policy: DuplicatePolicy) -> bool {
        match self.entries.entry(id.to_string()) {
            Entry::Vacant(entry) => {
                entry.insert(handle);
                false
            }
            Entry::Occupied(mut entry) => {
                if policy == DuplicatePolicy::LastWins {
                    entry.insert(handle);
                }
                true
            }
        }
    }
}

// -----------------------------------------------------------------------------
// link

/// Run both phases over `root`, returning the filled index.
///
/// Every reference below `root` is resolved or reported as dangling.
pub fn link(
    root: &mut dyn Class,
    policy: DuplicatePolicy,
    diagnostics: &mut Diagnostics,
) -> Result<PublicIndex, ArchiveError> {
    let info = root.class_info();

    let mut indexer = Indexer::new(info, policy, diagnostics);
    root.visit(&mut indexer)?;
    let index = indexer.index;

    let mut linker = Linker::new(info, &index, diagnostics);
    root.visit(&mut linker)?;

    log::debug!(
        "linked {} public objects below `{}`",
        index.len(),
        info.name()
    );
    Ok(index)
}

// -----------------------------------------------------------------------------
// Walk state

struct Walk {
    trail: Trail,
    classes: Vec<&'static ClassInfo>,
}

impl Walk {
    fn new(root: &'static ClassInfo) -> Self {
        Self {
            trail: Trail::new(root.name()),
            classes: alloc::vec![root],
        }
    }

    fn begin(&mut self, prop: &'static Property, class: &'static ClassInfo, index: usize) {
        self.trail.enter(prop, class, index);
        self.classes.push(class);
    }

    fn end(&mut self) {
        self.trail.leave();
        self.classes.pop();
    }

    fn current(&self) -> &'static ClassInfo {
        // The root class is never popped.
        self.classes[self.classes.len() - 1]
    }
}

// -----------------------------------------------------------------------------
// Indexer

/// Phase 1: records the handle of every `publicID`.
struct Indexer<'a> {
    walk: Walk,
    policy: DuplicatePolicy,
    index: PublicIndex,
    diagnostics: &'a mut Diagnostics,
}

impl<'a> Indexer<'a> {
    fn new(
        root: &'static ClassInfo,
        policy: DuplicatePolicy,
        diagnostics: &'a mut Diagnostics,
    ) -> Self {
        Self {
            walk: Walk::new(root),
            policy,
            index: PublicIndex::new(),
            diagnostics,
        }
    }
}

impl Archive for Indexer<'_> {
    #[inline]
    fn mode(&self) -> Mode {
        Mode::Walk
    }

    #[inline]
    fn version(&self) -> SchemaVersion {
        SchemaVersion::CURRENT
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    fn location(&self) -> String {
        self.walk.trail.location()
    }

    fn class(&self) -> &'static str {
        self.walk.trail.class()
    }

    fn begin(
        &mut self,
        prop: &'static Property,
        class: &'static ClassInfo,
        index: usize,
    ) -> Result<(), ArchiveError> {
        self.walk.begin(prop, class, index);
        Ok(())
    }

    fn end(&mut self) -> Result<(), ArchiveError> {
        self.walk.end();
        Ok(())
    }

    fn public_id(&mut self, id: &str) {
        if id.is_empty() {
            return;
        }
        let handle = Handle::new(self.walk.current(), self.walk.trail.indices());
        if self.index.insert(id, handle, self.policy) {
            self.report(Diagnostic::DuplicatePublicId {
                id: id.to_string(),
                policy: self.policy,
                path: self.location(),
            });
        }
    }
}

// -----------------------------------------------------------------------------
// Linker

/// Phase 2: resolves every reference against the index.
struct Linker<'a> {
    walk: Walk,
    index: &'a PublicIndex,
    diagnostics: &'a mut Diagnostics,
}

impl<'a> Linker<'a> {
    fn new(
        root: &'static ClassInfo,
        index: &'a PublicIndex,
        diagnostics: &'a mut Diagnostics,
    ) -> Self {
        Self {
            walk: Walk::new(root),
            index,
            diagnostics,
        }
    }
}

impl Archive for Linker<'_> {
    #[inline]
    fn mode(&self) -> Mode {
        Mode::Walk
    }

    #[inline]
    fn version(&self) -> SchemaVersion {
        SchemaVersion::CURRENT
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    fn location(&self) -> String {
        self.walk.trail.location()
    }

    fn class(&self) -> &'static str {
        self.walk.trail.class()
    }

    fn begin(
        &mut self,
        prop: &'static Property,
        class: &'static ClassInfo,
        index: usize,
    ) -> Result<(), ArchiveError> {
        self.walk.begin(prop, class, index);
        Ok(())
    }

    fn end(&mut self) -> Result<(), ArchiveError> {
        self.walk.end();
        Ok(())
    }

    fn link(
        &mut self,
        prop: &'static Property,
        target: &'static ClassInfo,
        id: &str,
        handle: &mut Option<Handle>,
    ) {
        *handle = None;
        if id.is_empty() {
            return;
        }
        let found = match self.index.get(id) {
            Some(found) if found.class().is_kind_of(target.name()) => {
                *handle = Some(found.clone());
                return;
            }
            Some(found) => Some(found.class().name()),
            None => None,
        };
        self.report(Diagnostic::DanglingReference {
            class: self.class(),
            property: prop.name(),
            id: id.to_string(),
            expected: target.name(),
            found,
            path: self.location(),
        });
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticKind;
    use crate::info::ValueKind;
    use crate::object::{PUBLIC_OBJECT, visit_public_object};
    use crate::reference::{PublicId, Reference};
    use alloc::vec;

    static PICK: ClassInfo = ClassInfo::new("Pick", &[]).with_base(&PUBLIC_OBJECT);

    #[derive(Debug, Default)]
    struct Pick {
        id: PublicId,
    }

    impl Class for Pick {
        fn class_info(&self) -> &'static ClassInfo {
            &PICK
        }

        fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
            visit_public_object(&mut self.id, ar)
        }
    }

    crate::impl_object!(Pick, PICK);

    static PICK_ID: Property = Property::element("pickID", ValueKind::ReferenceId).target("Pick");
    static ORIGIN_ID: Property = Property::element("originID", ValueKind::ReferenceId).optional();
    static ARRIVAL: ClassInfo = ClassInfo::new("Arrival", &[&PICK_ID, &ORIGIN_ID]);

    #[derive(Debug, Default)]
    struct Arrival {
        pick_id: Reference<Pick>,
        origin_id: Option<Reference<Arrival>>,
    }

    impl Class for Arrival {
        fn class_info(&self) -> &'static ClassInfo {
            &ARRIVAL
        }

        fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
            ar.required(&PICK_ID, &mut self.pick_id)?;
            ar.optional(&ORIGIN_ID, &mut self.origin_id)
        }
    }

    crate::impl_object!(Arrival, ARRIVAL);

    static PICKS: Property = Property::element("pick", ValueKind::Object).list();
    static ARRIVALS: Property = Property::element("arrival", ValueKind::Object).list();
    static BAG: ClassInfo = ClassInfo::new("Bag", &[&PICKS, &ARRIVALS]);

    #[derive(Debug, Default)]
    struct Bag {
        picks: Vec<Pick>,
        arrivals: Vec<Arrival>,
    }

    impl Class for Bag {
        fn class_info(&self) -> &'static ClassInfo {
            &BAG
        }

        fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
            ar.list(&PICKS, &mut self.picks)?;
            ar.list(&ARRIVALS, &mut self.arrivals)
        }
    }

    fn pick(id: &str) -> Pick {
        Pick {
            id: PublicId::new(id),
        }
    }

    fn arrival(pick_id: &str) -> Arrival {
        Arrival {
            pick_id: Reference::new(pick_id),
            origin_id: None,
        }
    }

    #[test]
    fn resolves_and_reports_dangling() {
        let mut bag = Bag {
            picks: vec![pick("P1"), pick("P2")],
            arrivals: vec![arrival("P2"), arrival("P9")],
        };
        let mut diagnostics = Diagnostics::new();
        let index = link(&mut bag, DuplicatePolicy::LastWins, &mut diagnostics).unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("P2"), Some(&Handle::new(&PICK, vec![1])));
        assert_eq!(
            bag.arrivals[0].pick_id.handle(),
            Some(&Handle::new(&PICK, vec![1]))
        );
        assert!(!bag.arrivals[1].pick_id.is_resolved());

        assert_eq!(diagnostics.len(), 1);
        let dangling = &diagnostics.as_slice()[0];
        assert_eq!(dangling.kind(), DiagnosticKind::DanglingReference);
        assert_eq!(dangling.path(), "Bag/arrival[1]");
    }

    #[test]
    fn wrong_target_type_stays_unresolved() {
        let mut bag = Bag {
            picks: vec![pick("P1")],
            arrivals: vec![Arrival {
                pick_id: Reference::new("P1"),
                origin_id: Some(Reference::new("P1")),
            }],
        };
        let mut diagnostics = Diagnostics::new();
        link(&mut bag, DuplicatePolicy::LastWins, &mut diagnostics).unwrap();

        assert!(bag.arrivals[0].pick_id.is_resolved());
        assert!(!bag.arrivals[0].origin_id.as_ref().unwrap().is_resolved());
        assert!(matches!(
            diagnostics.as_slice(),
            [Diagnostic::DanglingReference { found: Some("Pick"), expected: "Arrival", .. }]
        ));
    }

    #[test]
    fn duplicate_policy() {
        for (policy, expected) in [
            (DuplicatePolicy::LastWins, 2_u32),
            (DuplicatePolicy::FirstWins, 0),
        ] {
            let mut bag = Bag {
                picks: vec![pick("P1"), pick("P2"), pick("P1")],
                arrivals: vec![arrival("P1")],
            };
            let mut diagnostics = Diagnostics::new();
            let index = link(&mut bag, policy, &mut diagnostics).unwrap();

            assert_eq!(bag.picks.len(), 3);
            assert_eq!(index.len(), 2);
            assert_eq!(index.get("P1").unwrap().path(), &[expected]);
            assert_eq!(
                bag.arrivals[0].pick_id.handle().unwrap().path(),
                &[expected]
            );
            assert_eq!(diagnostics.count(DiagnosticKind::DuplicatePublicId), 1);
        }
    }
}
