//! Path building infrastructure for REST operations.
//!
//! Endpoint templates are `&'static str` constants with zero, one or two
//! printf-style positional placeholders:
//!
//! - `%d` and `%s` are both placeholders; either accepts any id type
//! - `%%` is a literal percent sign
//!
//! The number and type of path parameters an operation takes is fixed by its
//! [`PathParams`] tuple: `()`, `(A,)` or `(A, B)`, where each slot is either
//! `u64` (integer ids such as shop and blueprint ids) or `String` (hex ids
//! such as product and order ids). Callers pass any value implementing
//! [`PathArg`] for the slot, e.g. `ShopId`, `u64` or `i32` for an integer
//! slot and `&str` or `String` for a string slot. String arguments are
//! percent-encoded, so an id can never change the endpoint.
//!
//! # Example
//!
//! ```rust
//! use printify_api::rest::build_path;
//!
//! let path = build_path(
//!     "/v1/shops/%d/orders/%s.json",
//!     &["123".to_string(), "abc".to_string()],
//! )
//! .unwrap();
//! assert_eq!(path, "/v1/shops/123/orders/abc.json");
//! ```

use crate::clients::ConstructionError;
use crate::config::ShopId;

mod sealed {
    pub trait Sealed {}
    impl Sealed for u64 {}
    impl Sealed for String {}
    impl Sealed for () {}
    impl<A: Sealed> Sealed for (A,) {}
    impl<A: Sealed, B: Sealed> Sealed for (A, B) {}
}

/// A path parameter slot type: `u64` or `String`.
pub trait PathSlot: sealed::Sealed {}

impl PathSlot for u64 {}
impl PathSlot for String {}

/// The path parameter signature of an operation.
///
/// Implemented for `()`, `(A,)` and `(A, B)` where each element is a
/// [`PathSlot`].
pub trait PathParams: sealed::Sealed {
    /// Number of path parameters.
    const ARITY: usize;
}

impl PathParams for () {
    const ARITY: usize = 0;
}

impl<A: PathSlot> PathParams for (A,) {
    const ARITY: usize = 1;
}

impl<A: PathSlot, B: PathSlot> PathParams for (A, B) {
    const ARITY: usize = 2;
}

/// A value that can fill a path parameter slot of type `S`.
pub trait PathArg<S: PathSlot> {
    /// Renders the value as a path segment.
    fn into_segment(self) -> String;
}

macro_rules! integer_path_arg {
    ($($ty:ty),*) => {
        $(
            impl PathArg<u64> for $ty {
                fn into_segment(self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

integer_path_arg!(u8, u16, u32, u64, usize, i32, i64, ShopId);

// String ids are percent-encoded so `/`, `?` and `#` stay inside the segment.
impl PathArg<String> for &str {
    fn into_segment(self) -> String {
        urlencoding::encode(self).into_owned()
    }
}

impl PathArg<String> for String {
    fn into_segment(self) -> String {
        self.as_str().into_segment()
    }
}

impl PathArg<String> for &String {
    fn into_segment(self) -> String {
        self.as_str().into_segment()
    }
}

/// A tuple of arguments matching the path parameter signature `P`.
///
/// `(shop_id, "5d39b159e7c48c000728c89f")` satisfies `PathArgs<(u64, String)>`.
pub trait PathArgs<P: PathParams> {
    /// Renders every argument as a path segment, in order.
    fn into_segments(self) -> Vec<String>;
}

impl PathArgs<()> for () {
    fn into_segments(self) -> Vec<String> {
        Vec::new()
    }
}

impl<A: PathSlot, X: PathArg<A>> PathArgs<(A,)> for (X,) {
    fn into_segments(self) -> Vec<String> {
        vec![self.0.into_segment()]
    }
}

impl<A: PathSlot, B: PathSlot, X: PathArg<A>, Y: PathArg<B>> PathArgs<(A, B)> for (X, Y) {
    fn into_segments(self) -> Vec<String> {
        vec![self.0.into_segment(), self.1.into_segment()]
    }
}

/// Counts the placeholders in an endpoint template.
///
/// # Errors
///
/// Returns [`ConstructionError::UnsupportedPlaceholder`] for any `%`
/// directive other than `%d`, `%s` or `%%`, including a trailing `%`.
pub fn count_placeholders(template: &str) -> Result<usize, ConstructionError> {
    let mut count = 0;
    let mut chars = template.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            continue;
        }
        match chars.next() {
            Some('d' | 's') => count += 1,
            Some('%') => {}
            other => {
                return Err(ConstructionError::UnsupportedPlaceholder {
                    template: template.to_string(),
                    directive: other.unwrap_or(' '),
                })
            }
        }
    }
    Ok(count)
}

/// Builds a path from a template by substituting segments positionally.
///
/// # Errors
///
/// Returns [`ConstructionError::ArityMismatch`] when the number of
/// placeholders differs from the number of segments, and
/// [`ConstructionError::UnsupportedPlaceholder`] for an unknown directive.
///
/// # Example
///
/// ```rust
/// use printify_api::rest::build_path;
///
/// assert_eq!(build_path("/v1/shops.json", &[]).unwrap(), "/v1/shops.json");
/// assert!(build_path("/v1/shops/%d.json", &[]).is_err());
/// ```
pub fn build_path(template: &str, segments: &[String]) -> Result<String, ConstructionError> {
    let expected = count_placeholders(template)?;
    if expected != segments.len() {
        return Err(ConstructionError::ArityMismatch {
            template: template.to_string(),
            expected,
            supplied: segments.len(),
        });
    }

    let mut result = String::with_capacity(template.len() + 16);
    let mut remaining = segments.iter();
    let mut chars = template.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            result.push(c);
            continue;
        }
        // Directives were validated by count_placeholders
        match chars.next() {
            Some('%') => result.push('%'),
            _ => {
                if let Some(segment) = remaining.next() {
                    result.push_str(segment);
                }
            }
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments<P: PathParams, A: PathArgs<P>>(args: A) -> Vec<String> {
        args.into_segments()
    }

    #[test]
    fn test_arity_constants() {
        assert_eq!(<() as PathParams>::ARITY, 0);
        assert_eq!(<(u64,) as PathParams>::ARITY, 1);
        assert_eq!(<(u64, String) as PathParams>::ARITY, 2);
    }

    #[test]
    fn test_path_args_render_mixed_types() {
        let shop = ShopId::new(123).unwrap();
        assert_eq!(
            segments::<(u64, String), _>((shop, "abc")),
            vec!["123".to_string(), "abc".to_string()]
        );
        assert_eq!(segments::<(u64,), _>((42,)), vec!["42".to_string()]);
        assert_eq!(
            segments::<(String,), _>((String::from("x1"),)),
            vec!["x1".to_string()]
        );
        assert!(segments::<(), _>(()).is_empty());
    }

    #[test]
    fn test_string_args_are_percent_encoded() {
        assert_eq!(
            segments::<(u64, String), _>((1, "../../../catalog/blueprints")),
            vec!["1".to_string(), "..%2F..%2F..%2Fcatalog%2Fblueprints".to_string()]
        );
        assert_eq!(
            segments::<(String,), _>((String::from("a?b#c d"),)),
            vec!["a%3Fb%23c%20d".to_string()]
        );
        assert_eq!(
            segments::<(String,), _>((&String::from("5d39b159e7c48c000728c89f"),)),
            vec!["5d39b159e7c48c000728c89f".to_string()]
        );
    }

    #[test]
    fn test_build_path_without_placeholders() {
        assert_eq!(build_path("/v1/shops.json", &[]).unwrap(), "/v1/shops.json");
    }

    #[test]
    fn test_build_path_single_placeholder() {
        let path = build_path("/v1/catalog/blueprints/%d.json", &["5".to_string()]).unwrap();
        assert_eq!(path, "/v1/catalog/blueprints/5.json");
    }

    #[test]
    fn test_build_path_any_placeholder_accepts_any_id() {
        let ids = ["123".to_string(), "abc".to_string()];
        assert_eq!(
            build_path("/v1/shops/%d/orders/%d.json", &ids).unwrap(),
            "/v1/shops/123/orders/abc.json"
        );
        assert_eq!(
            build_path("/v1/shops/%s/orders/%s.json", &ids).unwrap(),
            "/v1/shops/123/orders/abc.json"
        );
    }

    #[test]
    fn test_build_path_literal_percent() {
        let path = build_path("/v1/100%%/%d.json", &["7".to_string()]).unwrap();
        assert_eq!(path, "/v1/100%/7.json");
    }

    #[test]
    fn test_build_path_arity_mismatch() {
        let result = build_path("/v1/shops/%d/products/%s.json", &["1".to_string()]);
        assert!(matches!(
            result,
            Err(ConstructionError::ArityMismatch {
                expected: 2,
                supplied: 1,
                ..
            })
        ));

        let result = build_path("/v1/shops.json", &["1".to_string()]);
        assert!(matches!(
            result,
            Err(ConstructionError::ArityMismatch {
                expected: 0,
                supplied: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_unsupported_placeholder() {
        assert!(matches!(
            count_placeholders("/v1/shops/%x.json"),
            Err(ConstructionError::UnsupportedPlaceholder { directive: 'x', .. })
        ));
        assert!(matches!(
            build_path("/v1/shops/%", &[]),
            Err(ConstructionError::UnsupportedPlaceholder { .. })
        ));
    }

    #[test]
    fn test_count_placeholders() {
        assert_eq!(count_placeholders("/v1/shops.json").unwrap(), 0);
        assert_eq!(count_placeholders("/v1/shops/%d/products.json").unwrap(), 1);
        assert_eq!(
            count_placeholders("/v1/shops/%d/products/%s/publish.json").unwrap(),
            2
        );
        assert_eq!(count_placeholders("/v1/%%/%d").unwrap(), 1);
    }
}
