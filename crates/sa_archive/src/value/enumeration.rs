use crate::value::{Decoded, Loss};

// -----------------------------------------------------------------------------
// Enumeration

/// A closed set of values, each with a wire token.
///
/// Usually implemented through [`enumeration!`](crate::enumeration), which also
/// makes the type a [`Scalar`](crate::value::Scalar).
pub trait Enumeration: Copy + PartialEq + Default + 'static {
    /// Every value with its token, in declaration order.
    const TOKENS: &'static [(Self, &'static str)];

    /// The wire token of `self`.
    fn token(self) -> &'static str {
        Self::TOKENS
            .iter()
            .find(|(value, _)| *value == self)
            .map_or("", |(_, token)| *token)
    }

    /// The value of a wire token.
    fn from_token(token: &str) -> Option<Self> {
        Self::TOKENS
            .iter()
            .find(|(_, t)| *t == token)
            .map(|(value, _)| *value)
    }
}

/// Decode a token, falling back to the default value for unknown tokens.
pub fn decode_enum<T: Enumeration>(text: &str) -> Decoded<T> {
    match T::from_token(text.trim()) {
        Some(value) => Decoded::exact(value),
        None => {
            let fallback = T::default();
            Decoded::lossy(
                fallback,
                Loss::UnknownToken {
                    fallback: fallback.token(),
                },
            )
        }
    }
}

/// Define an [`Enumeration`] that is also a [`Scalar`](crate::value::Scalar).
///
/// Exactly one variant must carry `#[default]`: it is the value unknown tokens fall back to.
///
/// # Examples
///
/// ```
/// use sa_archive::enumeration;
/// use sa_archive::value::{Enumeration, Loss, Scalar};
///
/// enumeration! {
///     /// Mode of an evaluation.
///     pub enum EvaluationMode {
///         #[default]
///         Manual => "manual",
///         Automatic => "automatic",
///     }
/// }
///
/// assert_eq!(EvaluationMode::Automatic.token(), "automatic");
/// assert_eq!(EvaluationMode::from_token("manual"), Some(EvaluationMode::Manual));
///
/// let decoded = EvaluationMode::decode("guessed").unwrap();
/// assert_eq!(decoded.value, EvaluationMode::Manual);
/// assert_eq!(decoded.loss, Some(Loss::UnknownToken { fallback: "manual" }));
/// ```
#[macro_export]
macro_rules! enumeration {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $token:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $crate::value::Enumeration for $name {
            const TOKENS: &'static [(Self, &'static str)] = &[$((Self::$variant, $token)),+];
        }

        impl $crate::value::Scalar for $name {
            const KIND: $crate::info::ValueKind = $crate::info::ValueKind::Enum;

            #[inline]
            fn decode(text: &str) -> ::core::option::Option<$crate::value::Decoded<Self>> {
                ::core::option::Option::Some($crate::value::decode_enum::<Self>(text))
            }

            #[inline]
            fn encode(
                &self,
                _format: &$crate::value::Format,
                out: &mut $crate::__macro_exports::String,
            ) {
                out.push_str($crate::value::Enumeration::token(*self));
            }
        }
    };
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::value::{Enumeration, Loss, Scalar};

    crate::enumeration! {
        enum Polarity {
            Positive => "positive",
            Negative => "negative",
            #[default]
            Undecidable => "undecidable",
        }
    }

    #[test]
    fn tokens_round_trip() {
        for (value, token) in Polarity::TOKENS {
            assert_eq!(value.token(), *token);
            assert_eq!(Polarity::from_token(token), Some(*value));
        }
    }

    #[test]
    fn unknown_token_falls_back() {
        let decoded = Polarity::decode(" sideways ").unwrap();
        assert_eq!(decoded.value, Polarity::Undecidable);
        assert_eq!(
            decoded.loss,
            Some(Loss::UnknownToken {
                fallback: "undecidable"
            })
        );

        let decoded = Polarity::decode("negative").unwrap();
        assert_eq!(decoded.value, Polarity::Negative);
        assert!(decoded.loss.is_none());
    }
}
