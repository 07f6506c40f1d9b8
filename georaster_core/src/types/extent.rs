use std::fmt::Debug;

/// A mutable axis-aligned bounding box accumulator over geographic
/// coordinates (longitude = x, latitude = y), plus a count of every
/// coordinate pair that was folded into it.
///
/// A fresh extent starts at the sentinels `x_min = y_min = f64::MAX` and
/// `x_max = y_max = f64::MIN`, so the first included point snaps all four
/// bounds to itself. After a scan with `count > 0` the invariant
/// `x_min <= x_max && y_min <= y_max` holds and both deltas are
/// non-negative. An extent with `count == 0` is degenerate and must be
/// guarded against before deriving anything from it.
///
/// # Examples
///
/// ```
/// use georaster_core::GeoExtent;
///
/// let mut extent = GeoExtent::new();
/// extent.include(3.0, -1.0);
/// extent.include(-2.0, 4.0);
/// assert_eq!(extent.as_tuple(), (-2.0, -1.0, 3.0, 4.0));
/// assert_eq!(extent.count(), 2);
/// assert_eq!(extent.d_lon(), 5.0);
/// assert_eq!(extent.d_lat(), 5.0);
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct GeoExtent {
	x_min: f64,
	y_min: f64,
	x_max: f64,
	y_max: f64,
	count: u64,
}

impl GeoExtent {
	/// Creates an empty extent at the sentinel bounds with `count == 0`.
	#[must_use]
	pub fn new() -> GeoExtent {
		GeoExtent {
			x_min: f64::MAX,
			y_min: f64::MAX,
			x_max: f64::MIN,
			y_max: f64::MIN,
			count: 0,
		}
	}

	/// Folds one coordinate pair into the extent and increments the count.
	///
	/// Inclusion is associative and commutative over the set of visited
	/// points, so the order of calls never changes the resulting bounds.
	pub fn include(&mut self, x: f64, y: f64) {
		self.x_min = self.x_min.min(x);
		self.y_min = self.y_min.min(y);
		self.x_max = self.x_max.max(x);
		self.y_max = self.y_max.max(y);
		self.count += 1;
	}

	/// Merges another extent into this one, summing the counts.
	pub fn extend(&mut self, other: &GeoExtent) {
		self.x_min = self.x_min.min(other.x_min);
		self.y_min = self.y_min.min(other.y_min);
		self.x_max = self.x_max.max(other.x_max);
		self.y_max = self.y_max.max(other.y_max);
		self.count += other.count;
	}

	#[must_use]
	pub fn x_min(&self) -> f64 {
		self.x_min
	}

	#[must_use]
	pub fn y_min(&self) -> f64 {
		self.y_min
	}

	#[must_use]
	pub fn x_max(&self) -> f64 {
		self.x_max
	}

	#[must_use]
	pub fn y_max(&self) -> f64 {
		self.y_max
	}

	/// Number of coordinate pairs folded in so far.
	#[must_use]
	pub fn count(&self) -> u64 {
		self.count
	}

	/// Width of the extent in world units. Meaningless while `is_empty()`.
	#[must_use]
	pub fn d_lon(&self) -> f64 {
		self.x_max - self.x_min
	}

	/// Height of the extent in world units. Meaningless while `is_empty()`.
	#[must_use]
	pub fn d_lat(&self) -> f64 {
		self.y_max - self.y_min
	}

	/// True if no point has been included yet.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.count == 0
	}

	/// Returns the bounds as `(x_min, y_min, x_max, y_max)`.
	#[must_use]
	pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
		(self.x_min, self.y_min, self.x_max, self.y_max)
	}
}

impl Default for GeoExtent {
	fn default() -> Self {
		GeoExtent::new()
	}
}

impl Debug for GeoExtent {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"GeoExtent({}, {}, {}, {}; count={})",
			self.x_min, self.y_min, self.x_max, self.y_max, self.count
		)
	}
}
