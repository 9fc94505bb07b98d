//! Focal mechanisms: nodal planes, principal axes and the moment tensors
//! derived with them.

use sa_archive::object::visit_public_object;
use sa_archive::{Archive, ArchiveError, Class, ClassInfo, PublicId, Reference, impl_object};

use crate::common::{Comment, CreationInfo, RealQuantity};
use crate::moment_tensor::MomentTensor;
use crate::origin::Origin;
use crate::types::{EvaluationMode, EvaluationStatus, PreferredPlane};

// -----------------------------------------------------------------------------
// Descriptors

mod nodal_plane {
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static STRIKE: Property = Property::element("strike", ValueKind::Object);
    pub static DIP: Property = Property::element("dip", ValueKind::Object);
    pub static RAKE: Property = Property::element("rake", ValueKind::Object);

    pub static INFO: ClassInfo = ClassInfo::new("NodalPlane", &[&STRIKE, &DIP, &RAKE]);
}

mod nodal_planes {
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static NODAL_PLANE_1: Property =
        Property::element("nodalPlane1", ValueKind::Object).optional();
    pub static NODAL_PLANE_2: Property =
        Property::element("nodalPlane2", ValueKind::Object).optional();
    pub static PREFERRED_PLANE: Property =
        Property::attribute("preferredPlane", ValueKind::Enum).optional();

    pub static INFO: ClassInfo = ClassInfo::new(
        "NodalPlanes",
        &[&NODAL_PLANE_1, &NODAL_PLANE_2, &PREFERRED_PLANE],
    );
}

mod axis {
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static AZIMUTH: Property = Property::element("azimuth", ValueKind::Object);
    pub static PLUNGE: Property = Property::element("plunge", ValueKind::Object);
    pub static LENGTH: Property = Property::element("length", ValueKind::Object);

    pub static INFO: ClassInfo = ClassInfo::new("Axis", &[&AZIMUTH, &PLUNGE, &LENGTH]);
}

mod principal_axes {
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static T_AXIS: Property = Property::element("tAxis", ValueKind::Object);
    pub static P_AXIS: Property = Property::element("pAxis", ValueKind::Object);
    pub static N_AXIS: Property = Property::element("nAxis", ValueKind::Object).optional();

    pub static INFO: ClassInfo = ClassInfo::new("PrincipalAxes", &[&T_AXIS, &P_AXIS, &N_AXIS]);
}

mod focal_mechanism {
    use sa_archive::object::PUBLIC_OBJECT;
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static TRIGGERING_ORIGIN_ID: Property =
        Property::element("triggeringOriginID", ValueKind::ReferenceId)
            .optional()
            .target("Origin");
    pub static NODAL_PLANES: Property =
        Property::element("nodalPlanes", ValueKind::Object).optional();
    pub static PRINCIPAL_AXES: Property =
        Property::element("principalAxes", ValueKind::Object).optional();
    pub static AZIMUTHAL_GAP: Property =
        Property::element("azimuthalGap", ValueKind::Primitive).optional();
    pub static STATION_POLARITY_COUNT: Property =
        Property::element("stationPolarityCount", ValueKind::Primitive).optional();
    pub static MISFIT: Property = Property::element("misfit", ValueKind::Primitive).optional();
    pub static STATION_DISTRIBUTION_RATIO: Property =
        Property::element("stationDistributionRatio", ValueKind::Primitive).optional();
    pub static METHOD_ID: Property = Property::element("methodID", ValueKind::Primitive).optional();
    pub static EVALUATION_MODE: Property =
        Property::element("evaluationMode", ValueKind::Enum).optional();
    pub static EVALUATION_STATUS: Property =
        Property::element("evaluationStatus", ValueKind::Enum).optional();
    pub static CREATION_INFO: Property =
        Property::element("creationInfo", ValueKind::Object).optional();
    pub static COMMENT: Property = Property::element("comment", ValueKind::Object).list();
    pub static MOMENT_TENSOR: Property =
        Property::element("momentTensor", ValueKind::Object).list();

    pub static INFO: ClassInfo = ClassInfo::new(
        "FocalMechanism",
        &[
            &TRIGGERING_ORIGIN_ID,
            &NODAL_PLANES,
            &PRINCIPAL_AXES,
            &AZIMUTHAL_GAP,
            &STATION_POLARITY_COUNT,
            &MISFIT,
            &STATION_DISTRIBUTION_RATIO,
            &METHOD_ID,
            &EVALUATION_MODE,
            &EVALUATION_STATUS,
            &CREATION_INFO,
            &COMMENT,
            &MOMENT_TENSOR,
        ],
    )
    .with_base(&PUBLIC_OBJECT);
}

// -----------------------------------------------------------------------------
// NodalPlanes

/// A fault plane, angles in degrees.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodalPlane {
    pub strike: RealQuantity,
    pub dip: RealQuantity,
    pub rake: RealQuantity,
}

impl NodalPlane {
    #[inline]
    pub fn new(strike: f64, dip: f64, rake: f64) -> Self {
        Self {
            strike: RealQuantity::new(strike),
            dip: RealQuantity::new(dip),
            rake: RealQuantity::new(rake),
        }
    }
}

impl Class for NodalPlane {
    fn class_info(&self) -> &'static ClassInfo {
        &nodal_plane::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        use nodal_plane::*;
        ar.required(&STRIKE, &mut self.strike)?;
        ar.required(&DIP, &mut self.dip)?;
        ar.required(&RAKE, &mut self.rake)
    }
}

impl_object!(NodalPlane, nodal_plane::INFO);

/// The two nodal planes of a double couple solution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodalPlanes {
    pub nodal_plane_1: Option<NodalPlane>,
    pub nodal_plane_2: Option<NodalPlane>,
    pub preferred_plane: Option<PreferredPlane>,
}

impl NodalPlanes {
    /// The plane marked as preferred, if it is present.
    pub fn preferred(&self) -> Option<&NodalPlane> {
        match self.preferred_plane? {
            PreferredPlane::First => self.nodal_plane_1.as_ref(),
            PreferredPlane::Second => self.nodal_plane_2.as_ref(),
        }
    }
}

impl Class for NodalPlanes {
    fn class_info(&self) -> &'static ClassInfo {
        &nodal_planes::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        use nodal_planes::*;
        ar.optional(&NODAL_PLANE_1, &mut self.nodal_plane_1)?;
        ar.optional(&NODAL_PLANE_2, &mut self.nodal_plane_2)?;
        ar.optional(&PREFERRED_PLANE, &mut self.preferred_plane)
    }
}

impl_object!(NodalPlanes, nodal_planes::INFO);

// -----------------------------------------------------------------------------
// PrincipalAxes

/// A principal axis, angles in degrees.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Axis {
    pub azimuth: RealQuantity,
    pub plunge: RealQuantity,
    pub length: RealQuantity,
}

impl Class for Axis {
    fn class_info(&self) -> &'static ClassInfo {
        &axis::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        use axis::*;
        ar.required(&AZIMUTH, &mut self.azimuth)?;
        ar.required(&PLUNGE, &mut self.plunge)?;
        ar.required(&LENGTH, &mut self.length)
    }
}

impl_object!(Axis, axis::INFO);

/// Tension, pressure and null axes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrincipalAxes {
    pub t_axis: Axis,
    pub p_axis: Axis,
    pub n_axis: Option<Axis>,
}

impl Class for PrincipalAxes {
    fn class_info(&self) -> &'static ClassInfo {
        &principal_axes::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        use principal_axes::*;
        ar.required(&T_AXIS, &mut self.t_axis)?;
        ar.required(&P_AXIS, &mut self.p_axis)?;
        ar.optional(&N_AXIS, &mut self.n_axis)
    }
}

impl_object!(PrincipalAxes, principal_axes::INFO);

// -----------------------------------------------------------------------------
// FocalMechanism

/// A focal mechanism solution, owning its moment tensors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FocalMechanism {
    pub public_id: PublicId,
    pub triggering_origin_id: Option<Reference<Origin>>,
    pub nodal_planes: Option<NodalPlanes>,
    pub principal_axes: Option<PrincipalAxes>,
    pub azimuthal_gap: Option<f64>,
    pub station_polarity_count: Option<i64>,
    pub misfit: Option<f64>,
    pub station_distribution_ratio: Option<f64>,
    pub method_id: Option<String>,
    pub evaluation_mode: Option<EvaluationMode>,
    pub evaluation_status: Option<EvaluationStatus>,
    pub creation_info: Option<CreationInfo>,
    pub comments: Vec<Comment>,
    pub moment_tensors: Vec<MomentTensor>,
}

impl FocalMechanism {
    #[inline]
    pub fn new(public_id: impl Into<PublicId>) -> Self {
        Self {
            public_id: public_id.into(),
            ..Self::default()
        }
    }
}

impl Class for FocalMechanism {
    fn class_info(&self) -> &'static ClassInfo {
        &focal_mechanism::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        use focal_mechanism::*;
        visit_public_object(&mut self.public_id, ar)?;
        ar.optional(&TRIGGERING_ORIGIN_ID, &mut self.triggering_origin_id)?;
        ar.optional(&NODAL_PLANES, &mut self.nodal_planes)?;
        ar.optional(&PRINCIPAL_AXES, &mut self.principal_axes)?;
        ar.optional(&AZIMUTHAL_GAP, &mut self.azimuthal_gap)?;
        ar.optional(&STATION_POLARITY_COUNT, &mut self.station_polarity_count)?;
        ar.optional(&MISFIT, &mut self.misfit)?;
        ar.optional(
            &STATION_DISTRIBUTION_RATIO,
            &mut self.station_distribution_ratio,
        )?;
        ar.optional(&METHOD_ID, &mut self.method_id)?;
        ar.optional(&EVALUATION_MODE, &mut self.evaluation_mode)?;
        ar.optional(&EVALUATION_STATUS, &mut self.evaluation_status)?;
        ar.optional(&CREATION_INFO, &mut self.creation_info)?;
        ar.list(&COMMENT, &mut self.comments)?;
        ar.list(&MOMENT_TENSOR, &mut self.moment_tensors)
    }
}

impl_object!(FocalMechanism, focal_mechanism::INFO);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferred_plane() {
        let mut planes = NodalPlanes {
            nodal_plane_1: Some(NodalPlane::new(120.0, 40.0, 90.0)),
            nodal_plane_2: Some(NodalPlane::new(300.0, 50.0, 90.0)),
            preferred_plane: None,
        };
        assert_eq!(planes.preferred(), None);

        planes.preferred_plane = Some(PreferredPlane::Second);
        assert_eq!(
            planes.preferred().map(|plane| plane.strike.value),
            Some(300.0)
        );

        planes.nodal_plane_2 = None;
        assert_eq!(planes.preferred(), None);
    }
}
