#![doc = include_str!("../README.md")]

// -----------------------------------------------------------------------------
// Modules

pub mod amplitude;
pub mod common;
pub mod document;
pub mod event;
pub mod event_parameters;
pub mod focal_mechanism;
pub mod locate;
pub mod magnitude;
pub mod moment_tensor;
pub mod origin;
pub mod pick;
pub mod reading;
pub mod registry;
pub mod types;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use amplitude::Amplitude;
pub use common::{
    Comment, CreationInfo, IntegerQuantity, RealQuantity, TimeQuantity, TimeWindow,
    WaveformStreamId,
};
pub use document::{Document, dump, load};
pub use event::{Event, EventDescription, FocalMechanismReference, OriginReference};
pub use event_parameters::EventParameters;
pub use focal_mechanism::{Axis, FocalMechanism, NodalPlane, NodalPlanes, PrincipalAxes};
pub use locate::Locate;
pub use magnitude::{Magnitude, StationMagnitude, StationMagnitudeContribution};
pub use moment_tensor::{
    DataUsed, MomentTensor, MomentTensorComponentContribution, MomentTensorPhaseSetting,
    MomentTensorStationContribution, SourceTimeFunction, Tensor,
};
pub use origin::{
    Arrival, CompositeTime, ConfidenceEllipsoid, Origin, OriginQuality, OriginUncertainty,
};
pub use pick::Pick;
pub use reading::{AmplitudeReference, PickReference, Reading};
pub use registry::{init, registry};
pub use types::*;

// -----------------------------------------------------------------------------
// Tests
