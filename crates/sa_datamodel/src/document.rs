//! The [`Document`]: one set of event parameters, its `publicID` index and
//! the load and dump passes.

use sa_archive::archive::{ReadOptions, WriteOptions};
use sa_archive::pass::{Pass, PassState};
use sa_archive::resolve::{DuplicatePolicy, PublicIndex, link};
use sa_archive::{ArchiveError, Class, Diagnostics, Reference, SchemaVersion};
use sa_xml::TreeArchive;

use crate::amplitude::Amplitude;
use crate::event::Event;
use crate::event_parameters::EventParameters;
use crate::focal_mechanism::FocalMechanism;
use crate::locate::Locate;
use crate::magnitude::Magnitude;
use crate::origin::{Arrival, Origin};
use crate::pick::Pick;
use crate::reading::Reading;
use crate::registry::registry;

// -----------------------------------------------------------------------------
// Document

/// A catalog document.
///
/// It owns the [`EventParameters`] and the index from `publicID` to object
/// built by the last link. References are resolved against that index, and
/// a lookup that does not succeed is `None`, never a panic.
///
/// # Examples
///
/// ```
/// use sa_datamodel::{Document, Event, EventParameters};
///
/// let mut parameters = EventParameters::new();
/// parameters.events.push(Event::new("Event/1"));
///
/// let (mut document, diagnostics) = Document::from_parameters(parameters).unwrap();
/// assert!(diagnostics.is_empty());
///
/// let bytes = document.dump().unwrap();
/// let (reloaded, _) = Document::load(&bytes).unwrap();
/// assert_eq!(reloaded.parameters(), document.parameters());
/// assert!(reloaded.find::<Event>("Event/1").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    version: SchemaVersion,
    parameters: EventParameters,
    index: PublicIndex,
    policy: DuplicatePolicy,
}

impl Default for Document {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// An empty document of the current schema version.
    #[inline]
    pub const fn new() -> Self {
        Self {
            version: SchemaVersion::CURRENT,
            parameters: EventParameters::new(),
            index: PublicIndex::new(),
            policy: DuplicatePolicy::LastWins,
        }
    }

    /// Take ownership of `parameters` and link them.
    pub fn from_parameters(
        parameters: EventParameters,
    ) -> Result<(Self, Diagnostics), ArchiveError> {
        let mut document = Self {
            parameters,
            ..Self::new()
        };
        let diagnostics = document.relink()?;
        Ok((document, diagnostics))
    }

    /// Load a document with default [`ReadOptions`].
    #[inline]
    pub fn load(bytes: &[u8]) -> Result<(Self, Diagnostics), ArchiveError> {
        Self::load_with(bytes, ReadOptions::new())
    }

    /// Load a document.
    ///
    /// Fails only if the input is malformed or of an unsupported schema
    /// version. Everything else is reported in the returned [`Diagnostics`],
    /// and the affected objects or values are left out.
    pub fn load_with(
        bytes: &[u8],
        options: ReadOptions,
    ) -> Result<(Self, Diagnostics), ArchiveError> {
        let archive = TreeArchive::new(registry()).with_read_options(options);
        let mut pass = Pass::new();

        pass.advance(PassState::Parsing);
        let tree = match archive.parse(bytes) {
            Ok(tree) => tree,
            Err(err) => {
                pass.fail();
                return Err(err);
            }
        };

        pass.advance(PassState::Constructing);
        let loaded = archive.construct(&tree);
        let mut diagnostics = loaded.diagnostics;
        let mut parameters = EventParameters::new();
        for object in loaded.objects {
            let name = object.class_info().name();
            match object.take::<EventParameters>() {
                Some(mut more) => parameters.append(&mut more),
                None => log::debug!("ignoring top-level `{name}`"),
            }
        }

        pass.advance(PassState::Resolving);
        let index = link(&mut parameters, options.duplicates, &mut diagnostics)?;
        pass.advance(PassState::Done);

        let document = Self {
            version: loaded.version,
            parameters,
            index,
            policy: options.duplicates,
        };
        Ok((document, diagnostics))
    }

    /// Write the document with default [`WriteOptions`].
    #[inline]
    pub fn dump(&mut self) -> Result<Vec<u8>, ArchiveError> {
        self.dump_with(WriteOptions::new())
    }

    /// Write the document.
    ///
    /// Takes `&mut self` because reading and writing share `visit`; the
    /// document is left unchanged.
    pub fn dump_with(&mut self, options: WriteOptions) -> Result<Vec<u8>, ArchiveError> {
        let archive = TreeArchive::new(registry()).with_write_options(options);
        let mut pass = Pass::new();

        pass.advance(PassState::Writing);
        let objects: &mut [&mut dyn Class] = &mut [&mut self.parameters];
        match archive.dump(objects) {
            Ok(bytes) => {
                pass.advance(PassState::Done);
                Ok(bytes)
            }
            Err(err) => {
                pass.fail();
                Err(err)
            }
        }
    }

    /// The schema version the document was read from.
    #[inline]
    pub const fn version(&self) -> SchemaVersion {
        self.version
    }

    #[inline]
    pub const fn parameters(&self) -> &EventParameters {
        &self.parameters
    }

    /// Mutable access to the objects.
    ///
    /// Lookups stay safe after edits, but only see new objects and IDs
    /// after a [`relink`](Self::relink).
    #[inline]
    pub fn parameters_mut(&mut self) -> &mut EventParameters {
        &mut self.parameters
    }

    #[inline]
    pub fn into_parameters(self) -> EventParameters {
        self.parameters
    }

    /// Rebuild the index and resolve every reference again.
    pub fn relink(&mut self) -> Result<Diagnostics, ArchiveError> {
        let mut diagnostics = Diagnostics::new();
        self.index = link(&mut self.parameters, self.policy, &mut diagnostics)?;
        Ok(diagnostics)
    }

    /// The `publicID` index of the last link.
    #[inline]
    pub const fn index(&self) -> &PublicIndex {
        &self.index
    }

    /// The policy used for duplicate IDs by [`relink`](Self::relink).
    #[inline]
    pub const fn duplicate_policy(&self) -> DuplicatePolicy {
        self.policy
    }
}

// -----------------------------------------------------------------------------
// Flat access

impl Document {
    #[inline]
    pub fn picks(&self) -> &[Pick] {
        &self.parameters.picks
    }

    #[inline]
    pub fn amplitudes(&self) -> &[Amplitude] {
        &self.parameters.amplitudes
    }

    #[inline]
    pub fn readings(&self) -> &[Reading] {
        &self.parameters.readings
    }

    #[inline]
    pub fn origins(&self) -> &[Origin] {
        &self.parameters.origins
    }

    #[inline]
    pub fn focal_mechanisms(&self) -> &[FocalMechanism] {
        &self.parameters.focal_mechanisms
    }

    #[inline]
    pub fn events(&self) -> &[Event] {
        &self.parameters.events
    }

    #[inline]
    pub fn pick(&self, index: usize) -> Option<&Pick> {
        self.parameters.picks.get(index)
    }

    #[inline]
    pub fn amplitude(&self, index: usize) -> Option<&Amplitude> {
        self.parameters.amplitudes.get(index)
    }

    #[inline]
    pub fn reading(&self, index: usize) -> Option<&Reading> {
        self.parameters.readings.get(index)
    }

    #[inline]
    pub fn origin(&self, index: usize) -> Option<&Origin> {
        self.parameters.origins.get(index)
    }

    #[inline]
    pub fn focal_mechanism(&self, index: usize) -> Option<&FocalMechanism> {
        self.parameters.focal_mechanisms.get(index)
    }

    #[inline]
    pub fn event(&self, index: usize) -> Option<&Event> {
        self.parameters.events.get(index)
    }
}

// -----------------------------------------------------------------------------
// Lookup

impl Document {
    /// The object of type `T` with the given `publicID`.
    ///
    /// `None` if the ID is unknown or names an object of another type.
    pub fn find<T: Locate>(&self, id: &str) -> Option<&T> {
        let handle = self.index.get(id)?;
        if handle.class().name() != T::info().name() {
            return None;
        }
        T::locate(&self.parameters, handle.path()).filter(|found| found.public_id().as_str() == id)
    }

    /// The target of `reference`.
    ///
    /// The handle stored by the last link is tried first. It is only used
    /// while the object at its path still carries the referenced ID, so
    /// after edits the lookup falls back to the index.
    pub fn resolve<T: Locate>(&self, reference: &Reference<T>) -> Option<&T> {
        let id = reference.id();
        if let Some(handle) = reference.handle()
            && handle.class().name() == T::info().name()
            && let Some(found) = T::locate(&self.parameters, handle.path())
            && found.public_id().as_str() == id
        {
            return Some(found);
        }
        self.find(id)
    }

    #[inline]
    pub fn preferred_origin(&self, event: &Event) -> Option<&Origin> {
        self.resolve(event.preferred_origin_id.as_ref()?)
    }

    #[inline]
    pub fn preferred_magnitude(&self, event: &Event) -> Option<&Magnitude> {
        self.resolve(event.preferred_magnitude_id.as_ref()?)
    }

    #[inline]
    pub fn preferred_focal_mechanism(&self, event: &Event) -> Option<&FocalMechanism> {
        self.resolve(event.preferred_focal_mechanism_id.as_ref()?)
    }

    /// The pick an arrival associates, `None` for a partial document.
    #[inline]
    pub fn arrival_pick(&self, arrival: &Arrival) -> Option<&Pick> {
        self.resolve(&arrival.pick_id)
    }

    #[inline]
    pub fn amplitude_pick(&self, amplitude: &Amplitude) -> Option<&Pick> {
        self.resolve(amplitude.pick_id.as_ref()?)
    }

    /// The picks grouped by a reading, in order.
    ///
    /// Unresolved references yield `None` so positions are preserved.
    pub fn reading_picks<'a>(
        &'a self,
        reading: &'a Reading,
    ) -> impl Iterator<Item = Option<&'a Pick>> {
        reading
            .pick_references
            .iter()
            .map(|reference| self.resolve(&reference.pick_id))
    }

    /// The amplitudes grouped by a reading, in order.
    pub fn reading_amplitudes<'a>(
        &'a self,
        reading: &'a Reading,
    ) -> impl Iterator<Item = Option<&'a Amplitude>> {
        reading
            .amplitude_references
            .iter()
            .map(|reference| self.resolve(&reference.amplitude_id))
    }

    /// The targets of the event's origin references, in order.
    ///
    /// Unresolved references yield `None` so positions are preserved.
    pub fn event_origins<'a>(
        &'a self,
        event: &'a Event,
    ) -> impl Iterator<Item = Option<&'a Origin>> {
        event
            .origin_references
            .iter()
            .map(|reference| self.resolve(&reference.origin_id))
    }

    /// The targets of the event's focal mechanism references, in order.
    pub fn event_focal_mechanisms<'a>(
        &'a self,
        event: &'a Event,
    ) -> impl Iterator<Item = Option<&'a FocalMechanism>> {
        event
            .focal_mechanism_references
            .iter()
            .map(|reference| self.resolve(&reference.focal_mechanism_id))
    }
}

// -----------------------------------------------------------------------------
// Shortcuts

/// [`Document::load`].
#[inline]
pub fn load(bytes: &[u8]) -> Result<(Document, Diagnostics), ArchiveError> {
    Document::load(bytes)
}

/// [`Document::dump`].
#[inline]
pub fn dump(document: &mut Document) -> Result<Vec<u8>, ArchiveError> {
    document.dump()
}

// -----------------------------------------------------------------------------
// Tests
