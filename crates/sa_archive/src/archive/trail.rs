use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use crate::info::{Cardinality, ClassInfo, Property};

// -----------------------------------------------------------------------------
// Trail

#[derive(Debug, Clone, Copy)]
struct Step {
    tag: &'static str,
    class: &'static str,
    index: usize,
    listed: bool,
}

/// The chain of objects an archive is currently inside.
///
/// Used by archive implementations for diagnostics (`location`, `class`) and
/// by the resolver to address objects (`indices`).
///
/// # Examples
///
/// ```
/// use sa_archive::archive::Trail;
/// use sa_archive::info::{ClassInfo, Property, ValueKind};
///
/// static ARRIVAL: Property = Property::element("arrival", ValueKind::Object).list();
/// static ARRIVAL_INFO: ClassInfo = ClassInfo::new("Arrival", &[]);
/// static ORIGIN_INFO: ClassInfo = ClassInfo::new("Origin", &[]);
///
/// let mut trail = Trail::new("seiscomp");
/// trail.enter_root(&ORIGIN_INFO, 0);
/// trail.enter(&ARRIVAL, &ARRIVAL_INFO, 4);
///
/// assert_eq!(trail.location(), "seiscomp/Origin[0]/arrival[4]");
/// assert_eq!(trail.class(), "Arrival");
/// assert_eq!(&*trail.indices(), &[0, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct Trail {
    root: &'static str,
    steps: Vec<Step>,
}

impl Trail {
    /// Create a trail positioned at `root`, which is also the class name
    /// reported while no object is entered.
    #[inline]
    pub const fn new(root: &'static str) -> Self {
        Self {
            root,
            steps: Vec::new(),
        }
    }

    /// Enter an object held by `prop` of the current object.
    pub fn enter(&mut self, prop: &'static Property, class: &'static ClassInfo, index: usize) {
        self.steps.push(Step {
            tag: prop.name(),
            class: class.name(),
            index,
            listed: prop.cardinality() == Cardinality::List,
        });
    }

    /// Enter a top-level object, tagged by its class name.
    pub fn enter_root(&mut self, class: &'static ClassInfo, index: usize) {
        self.steps.push(Step {
            tag: class.name(),
            class: class.name(),
            index,
            listed: true,
        });
    }

    #[inline]
    pub fn leave(&mut self) {
        self.steps.pop();
    }

    /// Number of entered objects.
    #[inline]
    pub fn depth(&self) -> usize {
        self.steps.len()
    }

    /// Class name of the innermost object.
    #[inline]
    pub fn class(&self) -> &'static str {
        self.steps.last().map_or(self.root, |step| step.class)
    }

    /// The position of every entered object within its parent.
    pub fn indices(&self) -> Box<[u32]> {
        self.steps.iter().map(|step| step.index as u32).collect()
    }

    /// Human readable location, e.g. `seiscomp/EventParameters[0]/origin[2]/quality`.
    pub fn location(&self) -> String {
        let mut out = String::from(self.root);
        for step in &self.steps {
            out.push('/');
            out.push_str(step.tag);
            if step.listed {
                let _ = write!(out, "[{}]", step.index);
            }
        }
        out
    }
}
