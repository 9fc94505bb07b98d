//! Typed access to public objects by [`Handle`](sa_archive::Handle) path.
//!
//! The resolver records every public object as its class plus the list
//! indices that lead to it from [`EventParameters`]:
//!
//! | class | path |
//! |---|---|
//! | `Pick`, `Amplitude`, `Reading`, `Origin`, `FocalMechanism`, `Event` | `[i]` |
//! | `StationMagnitude`, `Magnitude` | `[origin, i]` |
//! | `MomentTensor` | `[focalMechanism, i]` |
//! | `MomentTensorStationContribution` | `[focalMechanism, momentTensor, i]` |

use sa_archive::PublicId;
use sa_archive::object::Described;

use crate::amplitude::Amplitude;
use crate::event::Event;
use crate::event_parameters::EventParameters;
use crate::focal_mechanism::FocalMechanism;
use crate::magnitude::{Magnitude, StationMagnitude};
use crate::moment_tensor::{MomentTensor, MomentTensorStationContribution};
use crate::origin::Origin;
use crate::pick::Pick;
use crate::reading::Reading;

/// A public object that can be found below [`EventParameters`].
pub trait Locate: Described {
    fn public_id(&self) -> &PublicId;

    /// The object at `path`, or `None` if the path leads nowhere.
    fn locate<'a>(parameters: &'a EventParameters, path: &[u32]) -> Option<&'a Self>;
}

#[inline(always)]
fn at<T>(items: &[T], index: u32) -> Option<&T> {
    items.get(index as usize)
}

macro_rules! top_level {
    ($ty:ty, $field:ident) => {
        impl Locate for $ty {
            #[inline]
            fn public_id(&self) -> &PublicId {
                &self.public_id
            }

            fn locate<'a>(parameters: &'a EventParameters, path: &[u32]) -> Option<&'a Self> {
                match *path {
                    [index] => at(&parameters.$field, index),
                    _ => None,
                }
            }
        }
    };
}

top_level!(Pick, picks);
top_level!(Amplitude, amplitudes);
top_level!(Reading, readings);
top_level!(Origin, origins);
top_level!(FocalMechanism, focal_mechanisms);
top_level!(Event, events);

impl Locate for StationMagnitude {
    #[inline]
    fn public_id(&self) -> &PublicId {
        &self.public_id
    }

    fn locate<'a>(parameters: &'a EventParameters, path: &[u32]) -> Option<&'a Self> {
        match *path {
            [origin, index] => at(&at(&parameters.origins, origin)?.station_magnitudes, index),
            _ => None,
        }
    }
}

impl Locate for Magnitude {
    #[inline]
    fn public_id(&self) -> &PublicId {
        &self.public_id
    }

    fn locate<'a>(parameters: &'a EventParameters, path: &[u32]) -> Option<&'a Self> {
        match *path {
            [origin, index] => at(&at(&parameters.origins, origin)?.magnitudes, index),
            _ => None,
        }
    }
}

impl Locate for MomentTensor {
    #[inline]
    fn public_id(&self) -> &PublicId {
        &self.public_id
    }

    fn locate<'a>(parameters: &'a EventParameters, path: &[u32]) -> Option<&'a Self> {
        match *path {
            [focal_mechanism, index] => at(
                &at(&parameters.focal_mechanisms, focal_mechanism)?.moment_tensors,
                index,
            ),
            _ => None,
        }
    }
}

impl Locate for MomentTensorStationContribution {
    #[inline]
    fn public_id(&self) -> &PublicId {
        &self.public_id
    }

    fn locate<'a>(parameters: &'a EventParameters, path: &[u32]) -> Option<&'a Self> {
        match *path {
            [focal_mechanism, moment_tensor, index] => {
                let mechanism = at(&parameters.focal_mechanisms, focal_mechanism)?;
                let tensor = at(&mechanism.moment_tensors, moment_tensor)?;
                at(&tensor.station_contributions, index)
            }
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RealQuantity;

    #[test]
    fn nested_paths() {
        let mut origin = Origin::new(
            "Origin/1",
            Default::default(),
            RealQuantity::new(0.0),
            RealQuantity::new(0.0),
        );
        origin.magnitudes.push(Magnitude::new("Magnitude/1", RealQuantity::new(4.2)));

        let mut tensor = MomentTensor::new("MomentTensor/1", "Origin/1");
        tensor
            .station_contributions
            .push(MomentTensorStationContribution::new("Contribution/1", true));
        let mut mechanism = FocalMechanism::new("FocalMechanism/1");
        mechanism.moment_tensors.push(tensor);

        let mut parameters = EventParameters::new();
        parameters.origins.push(origin);
        parameters.focal_mechanisms.push(mechanism);

        let magnitude = Magnitude::locate(&parameters, &[0, 0]).unwrap();
        assert_eq!(magnitude.public_id, "Magnitude/1");
        assert!(Magnitude::locate(&parameters, &[0, 1]).is_none());
        assert!(Magnitude::locate(&parameters, &[0]).is_none());

        let contribution =
            MomentTensorStationContribution::locate(&parameters, &[0, 0, 0]).unwrap();
        assert!(contribution.active);
        assert!(Origin::locate(&parameters, &[1]).is_none());
    }
}
