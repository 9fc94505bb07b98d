//! Enumerations shared by the domain types.
//!
//! Unknown tokens fall back to the variant marked `#[default]`.

use sa_archive::enumeration;

enumeration! {
    pub enum EvaluationMode {
        #[default]
        Manual => "manual",
        Automatic => "automatic",
    }
}

enumeration! {
    pub enum EvaluationStatus {
        #[default]
        Preliminary => "preliminary",
        Confirmed => "confirmed",
        Reviewed => "reviewed",
        Final => "final",
        Rejected => "rejected",
        Reported => "reported",
    }
}

enumeration! {
    /// How sharp the onset of a phase is.
    pub enum PickOnset {
        Emergent => "emergent",
        Impulsive => "impulsive",
        #[default]
        Questionable => "questionable",
    }
}

enumeration! {
    /// First motion direction.
    pub enum PickPolarity {
        Positive => "positive",
        Negative => "negative",
        #[default]
        Undecidable => "undecidable",
    }
}

enumeration! {
    /// How the depth of an origin was determined.
    pub enum OriginDepthType {
        FromLocation => "from location",
        FromMomentTensorInversion => "from moment tensor inversion",
        FromModelingOfBroadBandPWaveforms => "from modeling of broad-band P waveforms",
        ConstrainedByDepthPhases => "constrained by depth phases",
        ConstrainedByDirectPhases => "constrained by direct phases",
        ConstrainedByDepthAndDirectPhases => "constrained by depth and direct phases",
        OperatorAssigned => "operator assigned",
        #[default]
        Other => "other",
    }
}

enumeration! {
    pub enum OriginType {
        #[default]
        Hypocenter => "hypocenter",
        Centroid => "centroid",
        Amplitude => "amplitude",
        Macroseismic => "macroseismic",
        RuptureStart => "rupture start",
        RuptureEnd => "rupture end",
    }
}

enumeration! {
    /// Which uncertainty description of an origin is preferred.
    pub enum OriginUncertaintyDescription {
        #[default]
        HorizontalUncertainty => "horizontal uncertainty",
        UncertaintyEllipse => "uncertainty ellipse",
        ConfidenceEllipsoid => "confidence ellipsoid",
        ProbabilityDensityFunction => "probability density function",
    }
}

enumeration! {
    pub enum EventType {
        NotExisting => "not existing",
        NotLocatable => "not locatable",
        OutsideOfNetworkInterest => "outside of network interest",
        Earthquake => "earthquake",
        InducedEarthquake => "induced earthquake",
        QuarryBlast => "quarry blast",
        Explosion => "explosion",
        ChemicalExplosion => "chemical explosion",
        NuclearExplosion => "nuclear explosion",
        Landslide => "landslide",
        Rockslide => "rockslide",
        SnowAvalanche => "snow avalanche",
        DebrisAvalanche => "debris avalanche",
        MineCollapse => "mine collapse",
        BuildingCollapse => "building collapse",
        VolcanicEruption => "volcanic eruption",
        MeteorImpact => "meteor impact",
        PlaneCrash => "plane crash",
        SonicBoom => "sonic boom",
        Duplicate => "duplicate",
        #[default]
        Other => "other",
        NotReported => "not reported",
    }
}

enumeration! {
    pub enum EventTypeCertainty {
        Known => "known",
        #[default]
        Suspected => "suspected",
    }
}

enumeration! {
    pub enum EventDescriptionType {
        FeltReport => "felt report",
        FlinnEngdahlRegion => "Flinn-Engdahl region",
        LocalTime => "local time",
        TectonicSummary => "tectonic summary",
        NearestCities => "nearest cities",
        EarthquakeName => "earthquake name",
        #[default]
        RegionName => "region name",
    }
}

enumeration! {
    /// Waveform type used by a moment tensor inversion.
    pub enum DataUsedWaveType {
        PWaves => "P waves",
        BodyWaves => "body waves",
        SurfaceWaves => "surface waves",
        MantleWaves => "mantle waves",
        Combined => "combined",
        #[default]
        Unknown => "unknown",
    }
}

enumeration! {
    pub enum SourceTimeFunctionType {
        BoxCar => "box car",
        Triangle => "triangle",
        Trapezoid => "trapezoid",
        #[default]
        Unknown => "unknown",
    }
}

enumeration! {
    pub enum MomentTensorMethod {
        #[default]
        Cmt => "CMT",
        Teleseismic => "teleseismic",
        Regional => "regional",
    }
}

enumeration! {
    pub enum MomentTensorStatus {
        StandardCmt => "standard CMT solution",
        #[default]
        QuickCmt => "quick CMT solution",
    }
}

enumeration! {
    /// Which of the two nodal planes is the fault plane.
    pub enum PreferredPlane {
        #[default]
        First => "1",
        Second => "2",
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use sa_archive::value::{Enumeration, Loss, Scalar};

    #[test]
    fn tokens_are_unique() {
        fn check<T: Enumeration + core::fmt::Debug>() {
            let tokens = T::TOKENS;
            for (i, (_, a)) in tokens.iter().enumerate() {
                for (_, b) in &tokens[i + 1..] {
                    assert_ne!(a, b);
                }
            }
        }
        check::<EvaluationMode>();
        check::<EvaluationStatus>();
        check::<PickOnset>();
        check::<PickPolarity>();
        check::<OriginDepthType>();
        check::<OriginType>();
        check::<OriginUncertaintyDescription>();
        check::<EventType>();
        check::<EventTypeCertainty>();
        check::<EventDescriptionType>();
        check::<DataUsedWaveType>();
        check::<SourceTimeFunctionType>();
        check::<MomentTensorMethod>();
        check::<MomentTensorStatus>();
        check::<PreferredPlane>();
    }

    #[test]
    fn tokens_with_spaces() {
        assert_eq!(
            EventType::from_token("outside of network interest"),
            Some(EventType::OutsideOfNetworkInterest)
        );
        assert_eq!(
            OriginDepthType::OperatorAssigned.token(),
            "operator assigned"
        );
        assert_eq!(
            EventDescriptionType::decode("Flinn-Engdahl region").unwrap().value,
            EventDescriptionType::FlinnEngdahlRegion
        );
    }

    #[test]
    fn unknown_event_type_is_other() {
        let decoded = EventType::decode("alien landing").unwrap();
        assert_eq!(decoded.value, EventType::Other);
        assert_eq!(decoded.loss, Some(Loss::UnknownToken { fallback: "other" }));
    }
}
