//! Enumerated option values and the string names they are written as on the command line.
pub mod value_parser;

pub use value_parser::*;

use strum::IntoEnumIterator;

/// Safe type conversions by way of [`Option`] when a type conversion may not be possible.
///
/// This method is different from [`TryFrom`] as it returns an [`Option`] instead of a [`Result`].
/// Therefore, this method should be used in cases in which the error information is not important.
/// Instead of using a placeholder when destructuring an error from [`TryFrom`], use `MaybeFrom`
/// to handle [`None`] to be more explicit in these cases.
///
/// ```rust
/// // TryFrom
/// match SomeType::try_from(other_type) {
///     Ok(converted_value) => ...,
///     Err(_) => ...
/// }
///
/// // MaybeFrom
/// match SomeType::maybe_from(&other_type) {
///     Some(converted_value) => ...,
///     None => ...
/// }
/// ```
pub trait MaybeFrom<T: ?Sized>: Sized {
    fn maybe_from(value: &T) -> Option<Self>;
}

/// A trait describing the [`str`] literal associated with an enumerator.
pub trait Literal {
    fn literal(&self) -> &'static str;
}

/// An enumerated type whose values may be given as option values.
///
/// The enumerator set is the table derived by `strum`: [`strum_macros::EnumIter`] provides the
/// enumerators in declaration order and [`strum_macros::IntoStaticStr`] provides the name of
/// each one.
///
/// ```rust
/// #[derive(Clone, Copy, strum_macros::EnumIter, strum_macros::IntoStaticStr)]
/// #[strum(serialize_all = "lowercase")]
/// enum Venue {
///     Paper,
///     Live,
/// }
///
/// impl OptionEnum for Venue {}
///
/// assert_eq!(Venue::maybe_from("live"), Some(Venue::Live));
/// ```
pub trait OptionEnum: IntoEnumIterator + Into<&'static str> + Copy + Send + Sync + 'static {
    /// The names of all enumerators, in declaration order.
    fn names() -> Vec<&'static str> {
        Self::iter().map(Into::into).collect()
    }
}

impl<E: OptionEnum> Literal for E {
    fn literal(&self) -> &'static str {
        (*self).into()
    }
}

/// Exact, case sensitive lookup of an enumerator by name.
impl<E: OptionEnum> MaybeFrom<str> for E {
    fn maybe_from(value: &str) -> Option<E> {
        E::iter().find(|e| e.literal() == value)
    }
}
