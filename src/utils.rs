//! Shared utility types.

use ordered_float::OrderedFloat;

/// Totally ordered `f64`, for use with [`Min`](crate::combiners::Min) /
/// [`Max`](crate::combiners::Max), sorted collects, and anything else that
/// wants `Ord` over floats.
///
/// Alias of [`OrderedFloat<f64>`]; construct with `OrdF64::from(x)` and read
/// back with `.0` or `f64::from`.
///
/// ```
/// use girder::OrdF64;
///
/// let mut prices = vec![OrdF64::from(3.5), OrdF64::from(1.0), OrdF64::from(4.0)];
/// prices.sort();
/// assert_eq!(prices[0].0, 1.0);
/// ```
pub type OrdF64 = OrderedFloat<f64>;
