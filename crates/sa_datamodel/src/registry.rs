//! The process-wide [`TypeRegistry`] of the domain model.
//!
//! It is built once, on the first call to [`init`] or [`registry`], and is
//! immutable afterwards. Every thread shares the same instance.

use std::sync::OnceLock;

use sa_archive::TypeRegistry;

use crate::amplitude::Amplitude;
use crate::common::{
    Comment, CreationInfo, IntegerQuantity, RealQuantity, TimeQuantity, TimeWindow,
    WaveformStreamId,
};
use crate::event::{Event, EventDescription, FocalMechanismReference, OriginReference};
use crate::event_parameters::EventParameters;
use crate::focal_mechanism::{Axis, FocalMechanism, NodalPlane, NodalPlanes, PrincipalAxes};
use crate::magnitude::{Magnitude, StationMagnitude, StationMagnitudeContribution};
use crate::moment_tensor::{
    DataUsed, MomentTensor, MomentTensorComponentContribution, MomentTensorPhaseSetting,
    MomentTensorStationContribution, SourceTimeFunction, Tensor,
};
use crate::origin::{
    Arrival, CompositeTime, ConfidenceEllipsoid, Origin, OriginQuality, OriginUncertainty,
};
use crate::pick::Pick;
use crate::reading::{AmplitudeReference, PickReference, Reading};

static REGISTRY: OnceLock<TypeRegistry> = OnceLock::new();

/// Build the registry if this has not happened yet.
///
/// Calling it more than once is harmless. Calling it before spawning worker
/// threads keeps the construction out of the first load.
#[inline]
pub fn init() {
    registry();
}

/// The shared registry, built on first use.
pub fn registry() -> &'static TypeRegistry {
    REGISTRY.get_or_init(|| {
        let registry = build();
        log::debug!("type registry initialized with {} classes", registry.len());
        registry
    })
}

/// A fresh registry holding every class of the model.
pub fn build() -> TypeRegistry {
    let mut registry = TypeRegistry::new();

    // Values.
    registry.register::<TimeQuantity>();
    registry.register::<RealQuantity>();
    registry.register::<IntegerQuantity>();
    registry.register::<CreationInfo>();
    registry.register::<Comment>();
    registry.register::<WaveformStreamId>();
    registry.register::<TimeWindow>();
    registry.register::<PickReference>();
    registry.register::<AmplitudeReference>();
    registry.register::<CompositeTime>();
    registry.register::<Arrival>();
    registry.register::<OriginQuality>();
    registry.register::<ConfidenceEllipsoid>();
    registry.register::<OriginUncertainty>();
    registry.register::<StationMagnitudeContribution>();
    registry.register::<NodalPlane>();
    registry.register::<NodalPlanes>();
    registry.register::<Axis>();
    registry.register::<PrincipalAxes>();
    registry.register::<Tensor>();
    registry.register::<SourceTimeFunction>();
    registry.register::<DataUsed>();
    registry.register::<MomentTensorPhaseSetting>();
    registry.register::<MomentTensorComponentContribution>();
    registry.register::<EventDescription>();
    registry.register::<OriginReference>();
    registry.register::<FocalMechanismReference>();

    // Public objects.
    registry.register::<Pick>();
    registry.register::<Amplitude>();
    registry.register::<Reading>();
    registry.register::<Origin>();
    registry.register::<StationMagnitude>();
    registry.register::<Magnitude>();
    registry.register::<FocalMechanism>();
    registry.register::<MomentTensor>();
    registry.register::<MomentTensorStationContribution>();
    registry.register::<Event>();

    registry.register::<EventParameters>();
    registry
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knows_the_model() {
        let registry = registry();
        // 38 concrete classes plus `PublicObject`.
        assert_eq!(registry.len(), 39);
        assert!(registry.contains("EventParameters"));
        assert!(registry.is_type_of("PublicObject", "MomentTensorStationContribution"));
        assert!(registry.is_type_of("PublicObject", "Reading"));
        assert!(!registry.is_type_of("PublicObject", "Arrival"));
        assert!(!registry.is_type_of("PublicObject", "CompositeTime"));

        let origin = registry.create("Origin").unwrap();
        assert!(origin.is::<Origin>());
        assert!(registry.create("PublicObject").is_err());
    }

    #[test]
    fn shared_instance() {
        init();
        assert!(core::ptr::eq(registry(), registry()));
    }
}
