//! High level distributions
use crate::gennorm;
use crate::special::ln_gamma;
use ndarray::Array;
use ndarray::ArrayBase;
use ndarray::Data;
use ndarray::Dimension;
use ndarray::ShapeBuilder;
use ndarray_rand::rand_distr::Gamma;
use ndarray_rand::RandomExt;
use rand::distributions::Distribution;
use rand::Rng;
use serde::Deserialize;
use serde::Serialize;
use statrs::distribution::Continuous;
use statrs::statistics::{Max, Median, Min, Mode};
use statrs::StatsError;

/// Generalized normal distribution with location, scale and shape
///
/// The standardized variable $z = (x - \mu)/\alpha$ follows the standard
/// form of [`crate::gennorm`] with shape $\beta$.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeneralizedNormal")]
pub struct GeneralizedNormal {
	loc: f64,
	scale: f64,
	shape: f64,
}

#[derive(Deserialize)]
struct RawGeneralizedNormal {
	loc: f64,
	scale: f64,
	shape: f64,
}

impl TryFrom<RawGeneralizedNormal> for GeneralizedNormal {
	type Error = StatsError;

	fn try_from(raw: RawGeneralizedNormal) -> Result<Self, Self::Error> {
		GeneralizedNormal::new(raw.loc, raw.scale, raw.shape)
	}
}

impl GeneralizedNormal {
	/// Returns `StatsError::BadParams` unless `loc` is finite and `scale`, `shape`
	/// are finite and positive.
	pub fn new(loc: f64, scale: f64, shape: f64) -> Result<Self, StatsError> {
		let positive = |v: f64| v.is_finite() && v > 0.;
		if !loc.is_finite() || !positive(scale) || !positive(shape) {
			return Err(StatsError::BadParams);
		}
		Ok(GeneralizedNormal { loc, scale, shape })
	}

	pub fn standard(shape: f64) -> Result<Self, StatsError> {
		Self::new(0., 1., shape)
	}

	pub fn loc(&self) -> f64 {
		self.loc
	}

	pub fn scale(&self) -> f64 {
		self.scale
	}

	pub fn shape(&self) -> f64 {
		self.shape
	}

	fn standardize(&self, x: f64) -> f64 {
		(x - self.loc) / self.scale
	}

	pub fn cdf(&self, x: f64) -> f64 {
		gennorm::cdf_scalar(self.standardize(x), self.shape)
	}

	/// survival function $1 - F(x)$, evaluated by reflection around `loc`
	pub fn sf(&self, x: f64) -> f64 {
		gennorm::cdf_scalar(-self.standardize(x), self.shape)
	}

	/// `cdf(x).ln()`; loses precision in the far left tail, where the CDF is `0.5 * (1 - P)` with `P` close to 1
	pub fn ln_cdf(&self, x: f64) -> f64 {
		self.cdf(x).ln()
	}

	pub fn ln_pdf_array<S, D>(&self, x: &ArrayBase<S, D>) -> Array<f64, D>
	where
		S: Data<Elem = f64>,
		D: Dimension,
	{
		x.mapv(|x| self.ln_pdf(x))
	}

	pub fn pdf_array<S, D>(&self, x: &ArrayBase<S, D>) -> Array<f64, D>
	where
		S: Data<Elem = f64>,
		D: Dimension,
	{
		x.mapv(|x| self.pdf(x))
	}

	pub fn cdf_array<S, D>(&self, x: &ArrayBase<S, D>) -> Array<f64, D>
	where
		S: Data<Elem = f64>,
		D: Dimension,
	{
		x.mapv(|x| self.cdf(x))
	}

	/// $\sum_i \ln f(x_i)$
	pub fn log_likelihood<S, D>(&self, x: &ArrayBase<S, D>) -> f64
	where
		S: Data<Elem = f64>,
		D: Dimension,
	{
		x.fold(0., |acc, &x| acc + self.ln_pdf(x))
	}

	pub fn sample_array<Sh, R>(&self, shape: Sh, rng: &mut R) -> Array<f64, Sh::Dim>
	where
		Sh: ShapeBuilder,
		R: Rng + ?Sized,
	{
		Array::random_using(shape, self, rng)
	}
}

impl Continuous<f64, f64> for GeneralizedNormal {
	fn pdf(&self, x: f64) -> f64 {
		self.ln_pdf(x).exp()
	}

	fn ln_pdf(&self, x: f64) -> f64 {
		gennorm::logpdf_scalar(self.standardize(x), self.shape) - self.scale.ln()
	}
}

impl statrs::statistics::Distribution<f64> for GeneralizedNormal {
	fn mean(&self) -> Option<f64> {
		Some(self.loc)
	}

	/// $\alpha^2 \Gamma(3/\beta) / \Gamma(1/\beta)$
	fn variance(&self) -> Option<f64> {
		let b = self.shape;
		Some(self.scale * self.scale * (ln_gamma(3. / b) - ln_gamma(1. / b)).exp())
	}

	/// $1/\beta - \ln\left(\beta / (2\alpha\Gamma(1/\beta))\right)$
	fn entropy(&self) -> Option<f64> {
		let b = self.shape;
		Some(b.recip() - b.ln() + (2. * self.scale).ln() + ln_gamma(b.recip()))
	}

	fn skewness(&self) -> Option<f64> {
		Some(0.)
	}
}

impl Median<f64> for GeneralizedNormal {
	fn median(&self) -> f64 {
		self.loc
	}
}

impl Mode<Option<f64>> for GeneralizedNormal {
	fn mode(&self) -> Option<f64> {
		Some(self.loc)
	}
}

impl Min<f64> for GeneralizedNormal {
	fn min(&self) -> f64 {
		f64::NEG_INFINITY
	}
}

impl Max<f64> for GeneralizedNormal {
	fn max(&self) -> f64 {
		f64::INFINITY
	}
}

impl Distribution<f64> for GeneralizedNormal {
	/// $|Z|^\beta \sim \mathrm{Gamma}(1/\beta, 1)$ with a fair sign
	fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
		let magnitude = match Gamma::new(self.shape.recip(), 1.) {
			Ok(gamma) => gamma.sample(rng).powf(self.shape.recip()),
			Err(_) => f64::NAN,
		};
		let sign = if rng.gen::<bool>() { 1. } else { -1. };
		self.loc + self.scale * sign * magnitude
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;
	use ndarray::{array, Array1, Ix2};
	use rand::rngs::StdRng;
	use rand::SeedableRng;
	use statrs::distribution::Normal;
	use statrs::statistics::Distribution as _;
	use std::f64::consts::FRAC_1_SQRT_2;

	#[test]
	fn test_rejects_bad_params() {
		assert!(GeneralizedNormal::new(0., 1., 0.).is_err());
		assert!(GeneralizedNormal::new(0., -1., 2.).is_err());
		assert!(GeneralizedNormal::new(f64::NAN, 1., 2.).is_err());
		assert!(GeneralizedNormal::new(0., 1., f64::INFINITY).is_err());
		assert!(GeneralizedNormal::standard(1.5).is_ok());
	}

	#[test]
	fn test_standard_matches_gennorm() {
		let dist = GeneralizedNormal::standard(1.7).unwrap();
		for &x in &[-3., -0.5, 0., 0.8, 4.] {
			assert_eq!(dist.ln_pdf(x), gennorm::logpdf_scalar(x, 1.7));
			assert_eq!(dist.cdf(x), gennorm::cdf_scalar(x, 1.7));
		}
	}

	#[test]
	fn test_loc_scale() {
		let dist = GeneralizedNormal::new(1.5, 2., 2.).unwrap();
		// normal with sd scale / sqrt(2)
		let normal = Normal::new(1.5, 2. * FRAC_1_SQRT_2).unwrap();
		for &x in &[-2., 0., 1.5, 3., 6.] {
			assert_abs_diff_eq!(dist.pdf(x), normal.pdf(x), epsilon = 1e-10);
			assert_abs_diff_eq!(dist.sf(x), 1. - dist.cdf(x), epsilon = 1e-12);
		}
		assert_eq!(dist.cdf(1.5), 0.5);
		assert_eq!(dist.median(), 1.5);
		assert_eq!(dist.mode(), Some(1.5));
		assert_eq!(dist.min(), f64::NEG_INFINITY);
		assert_eq!(dist.max(), f64::INFINITY);
	}

	#[test]
	fn test_moments() {
		let normal_like = GeneralizedNormal::standard(2.).unwrap();
		let normal = Normal::new(0., FRAC_1_SQRT_2).unwrap();
		assert_abs_diff_eq!(normal_like.variance().unwrap(), 0.5, epsilon = 1e-12);
		assert_abs_diff_eq!(
			normal_like.entropy().unwrap(),
			normal.entropy().unwrap(),
			epsilon = 1e-12
		);
		// Laplace with scale 3
		let laplace_like = GeneralizedNormal::new(-1., 3., 1.).unwrap();
		assert_eq!(laplace_like.mean(), Some(-1.));
		assert_abs_diff_eq!(laplace_like.variance().unwrap(), 18., epsilon = 1e-10);
		assert_abs_diff_eq!(
			laplace_like.entropy().unwrap(),
			1. + (6f64).ln(),
			epsilon = 1e-12
		);
		assert_eq!(laplace_like.skewness(), Some(0.));
	}

	#[test]
	fn test_large_shape_cdf() {
		let dist = GeneralizedNormal::new(1., 2., 100.).unwrap();
		// standardized value 0.5
		assert_abs_diff_eq!(dist.cdf(2.), 0.7514, epsilon = 1e-3);
		assert_abs_diff_eq!(dist.sf(2.), 1. - 0.7514, epsilon = 1e-3);
		assert_abs_diff_eq!(dist.ln_cdf(2.), 0.7514f64.ln(), epsilon = 1e-3);
	}

	#[test]
	fn test_array_helpers() {
		let dist = GeneralizedNormal::new(0.5, 1.5, 3.).unwrap();
		let x = array![[-1., 0.], [0.5, 2.]];
		let lp = dist.ln_pdf_array(&x);
		let d = dist.pdf_array(&x);
		let c = dist.cdf_array(&x);
		assert_eq!(lp.raw_dim(), x.raw_dim());
		assert_eq!(d, lp.mapv(f64::exp));
		assert_eq!(c[[1, 0]], 0.5);
		assert_abs_diff_eq!(dist.log_likelihood(&x), lp.sum(), epsilon = 1e-12);
	}

	#[test]
	fn test_sample_moments() {
		let mut rng = StdRng::seed_from_u64(42);
		for &(shape, variance) in &[(2., 0.5), (1., 2.)] {
			let dist = GeneralizedNormal::standard(shape).unwrap();
			let samples: Array1<f64> = dist.sample_array(20_000, &mut rng);
			let mean = samples.mean().unwrap();
			let var = samples.var(0.);
			assert_abs_diff_eq!(mean, 0., epsilon = 0.05);
			assert_abs_diff_eq!(var, variance, epsilon = 0.1);
		}
	}

	#[test]
	fn test_sample_array_shape_and_loc() {
		let mut rng = StdRng::seed_from_u64(7);
		let dist = GeneralizedNormal::new(10., 0.1, 4.).unwrap();
		let samples = dist.sample_array((3, 4), &mut rng);
		let samples: Array<f64, Ix2> = samples;
		assert_eq!(samples.shape(), &[3, 4]);
		assert!(samples.iter().all(|&s| (s - 10.).abs() < 1.));
	}

	#[test]
	fn test_serde_round_trip() {
		let dist = GeneralizedNormal::new(0.25, 2., 1.5).unwrap();
		let json = serde_json::to_string(&dist).unwrap();
		let back: GeneralizedNormal = serde_json::from_str(&json).unwrap();
		assert_eq!(back, dist);
		let bad = r#"{"loc": 0.0, "scale": 1.0, "shape": -2.0}"#;
		assert!(serde_json::from_str::<GeneralizedNormal>(bad).is_err());
	}
}
