//! Generalized normal distribution in standard form
//!
//! The density with shape $p > 0$ is
//! $$f(x; p) = \frac{p}{2\Gamma(1/p)} e^{-|x|^p}$$
//! which is the Laplace distribution for $p = 1$ and a normal distribution
//! with standard deviation $1/\sqrt{2}$ for $p = 2$.
//!
//! Every function takes `x` and `p` as arrays of any dimension and numeric
//! element type. Both are broadcast against each other, promoted to their
//! common float type (see [`crate::promote`]) and evaluated element-wise.
//! The shape parameter is not validated: $p \le 0$ gives `NaN` or infinities
//! in the output, not an error. The only error is a shape mismatch.
//!
//! There is no inverse CDF (`ppf`). It needs the inverse of the regularized
//! incomplete gamma function, which [`crate::special`] does not provide.
use crate::promote::promote_args_inexact;
use crate::promote::PromoteInexact;
use crate::special::gamma_lr;
use crate::special::ln_gamma;
use crate::special::sign;
use ndarray::ArrayBase;
use ndarray::ArrayD;
use ndarray::Data;
use ndarray::Dimension;
use ndarray::ShapeError;
use ndarray::Zip;
use num::Float;

/// $\ln f(x; p) = \ln(p/2) - \ln\Gamma(1/p) - |x|^p$
pub fn logpdf_scalar<F: Float>(x: F, p: F) -> F {
    let half = (F::one() + F::one()).recip();
    (half * p).ln() - ln_gamma(p.recip()) - x.abs().powf(p)
}

/// $f(x; p) = \exp(\ln f(x; p))$
pub fn pdf_scalar<F: Float>(x: F, p: F) -> F {
    logpdf_scalar(x, p).exp()
}

/// $F(x; p) = \frac{1}{2}\left(1 + \mathrm{sign}(x) P(1/p, |x|^p)\right)$
pub fn cdf_scalar<F: Float>(x: F, p: F) -> F {
    let one = F::one();
    let half = (one + one).recip();
    half * (one + sign(x) * gamma_lr(p.recip(), x.abs().powf(p)))
}

/// log of the probability density function, element-wise
pub fn logpdf<A, B, S1, S2, D1, D2>(
    x: &ArrayBase<S1, D1>,
    p: &ArrayBase<S2, D2>,
) -> Result<ArrayD<A::Output>, ShapeError>
where
    A: PromoteInexact<B>,
    B: Copy,
    S1: Data<Elem = A>,
    S2: Data<Elem = B>,
    D1: Dimension,
    D2: Dimension,
{
    let (x, p) = promote_args_inexact(x, p)?;
    Ok(Zip::from(&x)
        .and(&p)
        .map_collect(|&x, &p| logpdf_scalar(x, p)))
}

/// probability density function, element-wise
pub fn pdf<A, B, S1, S2, D1, D2>(
    x: &ArrayBase<S1, D1>,
    p: &ArrayBase<S2, D2>,
) -> Result<ArrayD<A::Output>, ShapeError>
where
    A: PromoteInexact<B>,
    B: Copy,
    S1: Data<Elem = A>,
    S2: Data<Elem = B>,
    D1: Dimension,
    D2: Dimension,
{
    Ok(logpdf(x, p)?.mapv_into(|lp| lp.exp()))
}

/// cumulative distribution function, element-wise
pub fn cdf<A, B, S1, S2, D1, D2>(
    x: &ArrayBase<S1, D1>,
    p: &ArrayBase<S2, D2>,
) -> Result<ArrayD<A::Output>, ShapeError>
where
    A: PromoteInexact<B>,
    B: Copy,
    S1: Data<Elem = A>,
    S2: Data<Elem = B>,
    D1: Dimension,
    D2: Dimension,
{
    let (x, p) = promote_args_inexact(x, p)?;
    Ok(Zip::from(&x).and(&p).map_collect(|&x, &p| cdf_scalar(x, p)))
}
