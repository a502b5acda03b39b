//! Exact rational number arithmetic over fixed-width signed integers.
//!
//! This library provides [`Rational`], a fraction of two `i64` values kept
//! permanently in lowest terms with a non-negative denominator.
//!
//! # Features
//!
//! - **Canonical representation**: every value is normalized before any
//!   method returns, so equality and hashing are plain field comparisons
//! - **Exact ordering**: comparisons cross-multiply into `i128` instead of
//!   rounding through floating point
//! - **Tagged square roots**: [`Rational::sqrt_exact`] tells the caller
//!   whether it produced an exact rational or a floating approximation
//! - **Stream parsing with rewind**: [`read::RationalReader`] consumes
//!   comma-delimited fields and restores the cursor on any failure
//!
//! # Design Philosophy
//!
//! The compound-assignment operators (`+=`, `-=`, `*=`, `/=`) are the
//! primitive arithmetic; the pure binary operators copy one operand and
//! delegate. Intermediate cross-multiplication is *not* guarded against
//! overflow: the representation is deliberately fixed-width, and callers
//! working near `i64` limits should reach for an arbitrary-precision crate
//! instead.
//!
//! Domain errors (zero denominators, square roots of negative values,
//! malformed text) are reported through [`RationalError`] and never coerced
//! into default values. The one panicking surface is the `/` operator
//! family, which follows the standard library's integer-division convention;
//! [`Rational::checked_div`] is the propagating form.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use exact_ratio::Rational;
//!
//! let a = Rational::new(1, 2)?; // 1/2
//! let b = Rational::new(1, 3)?; // 1/3
//!
//! let sum = a + b;
//! assert_eq!(sum, Rational::new(5, 6)?);
//! assert_eq!(sum.to_string(), "5/6");
//!
//! // Normalization is immediate: 2/4 and 1/2 are the same value.
//! assert_eq!(Rational::new(2, 4)?, Rational::new(1, 2)?);
//! # Ok::<(), exact_ratio::RationalError>(())
//! ```
//!
//! ## Exact vs. Approximate Square Roots
//!
//! ```
//! use exact_ratio::{Rational, Sqrt};
//!
//! match Rational::new(4, 9)?.sqrt_exact()? {
//!     Sqrt::Exact(r) => assert_eq!(r, Rational::new(2, 3)?),
//!     Sqrt::Approximate(_) => unreachable!("4/9 is a perfect square"),
//! }
//!
//! match Rational::new(2, 1)?.sqrt_exact()? {
//!     Sqrt::Exact(_) => unreachable!("2 is not a perfect square"),
//!     Sqrt::Approximate(f) => assert!((f - 1.41421356).abs() < 1e-6),
//! }
//! # Ok::<(), exact_ratio::RationalError>(())
//! ```

pub mod error;
pub mod read;

pub use crate::error::RationalError;
pub use crate::read::RationalReader;

use core::cmp::Ordering;
use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};
use core::str::FromStr;

/// An exact fraction of two `i64` values.
///
/// # Invariants
///
/// - The denominator is never zero ([`Rational::new`] rejects it)
/// - The pair is in lowest terms: `gcd(|numer|, |denom|) == 1`, with zero
///   stored as `0/1`
/// - The denominator is positive; the numerator alone carries the sign
///
/// Because the representation is canonical, `PartialEq`, `Eq` and `Hash`
/// are derived field-wise.
///
/// # Examples
///
/// ```
/// use exact_ratio::Rational;
///
/// let r = Rational::new(6, -8)?;
/// assert_eq!(r.numer(), -3);
/// assert_eq!(r.denom(), 4);
/// # Ok::<(), exact_ratio::RationalError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: i64,
    denom: i64,
}

/// Result of [`Rational::sqrt_exact`].
///
/// The tag is part of the contract: callers can tell an exact rational
/// square root apart from a floating-point approximation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sqrt {
    /// The radicand's numerator and denominator are both perfect squares.
    Exact(Rational),
    /// No exact rational square root exists; the value is `f64::sqrt` of
    /// the fraction's floating value.
    Approximate(f64),
}

impl Rational {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create a rational from a numerator and denominator.
    ///
    /// The result is reduced to lowest terms with a positive denominator.
    /// All fallible construction funnels through here, so the invariants
    /// hold for every value the crate hands out.
    ///
    /// # Errors
    ///
    /// [`RationalError::ZeroDenominator`] if `denom == 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use exact_ratio::{Rational, RationalError};
    ///
    /// let r = Rational::new(4, 6)?;
    /// assert_eq!((r.numer(), r.denom()), (2, 3));
    ///
    /// assert!(matches!(Rational::new(1, 0), Err(RationalError::ZeroDenominator)));
    /// # Ok::<(), exact_ratio::RationalError>(())
    /// ```
    pub fn new(numer: i64, denom: i64) -> Result<Self, RationalError> {
        if denom == 0 {
            return Err(RationalError::ZeroDenominator);
        }
        Ok(Self::normalized(numer, denom))
    }

    /// Create a rational from an integer, with denominator 1.
    #[inline]
    pub const fn from_integer(n: i64) -> Self {
        Self { numer: n, denom: 1 }
    }

    /// The value 0, stored as `0/1`.
    #[inline]
    pub const fn zero() -> Self {
        Self::from_integer(0)
    }

    /// The value 1.
    #[inline]
    pub const fn one() -> Self {
        Self::from_integer(1)
    }

    /// Construct from a non-zero denominator pair and normalize.
    #[inline]
    fn normalized(numer: i64, denom: i64) -> Self {
        let mut r = Self { numer, denom };
        r.simplify();
        r
    }

    /// Reduce to lowest terms and fix the denominator's sign.
    ///
    /// `gcd(0, d) == d`, so a zero numerator collapses to `0/1`.
    fn simplify(&mut self) {
        let g = gcd(self.numer.unsigned_abs(), self.denom.unsigned_abs());
        if g != 0 {
            self.numer /= g as i64;
            self.denom /= g as i64;
        }
        if self.denom < 0 {
            self.numer = -self.numer;
            self.denom = -self.denom;
        }
    }

    // ========================================================================
    // ACCESSORS & PREDICATES
    // ========================================================================

    /// The numerator (carries the sign).
    #[inline]
    pub const fn numer(&self) -> i64 {
        self.numer
    }

    /// The denominator (always positive).
    #[inline]
    pub const fn denom(&self) -> i64 {
        self.denom
    }

    /// Check if the rational is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.numer == 0
    }

    /// Check if the rational represents an integer (denominator is 1).
    #[inline]
    pub const fn is_integer(&self) -> bool {
        self.denom == 1
    }

    /// Check if the rational is strictly positive.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.numer > 0
    }

    /// Check if the rational is strictly negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.numer < 0
    }

    /// The fraction's value as `f64`, via ordinary floating division.
    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.numer as f64 / self.denom as f64
    }

    // ========================================================================
    // BASIC OPERATIONS
    // ========================================================================

    /// The absolute value.
    ///
    /// ```
    /// use exact_ratio::Rational;
    ///
    /// assert_eq!(Rational::new(-3, 4)?.abs(), Rational::new(3, 4)?);
    /// assert_eq!(Rational::new(3, -4)?.abs(), Rational::new(3, 4)?);
    /// # Ok::<(), exact_ratio::RationalError>(())
    /// ```
    #[inline]
    pub fn abs(&self) -> Self {
        Self {
            numer: self.numer.abs(),
            denom: self.denom,
        }
    }

    /// The reciprocal `denom/numer`, as a new value.
    ///
    /// # Errors
    ///
    /// [`RationalError::ZeroDenominator`] if the value is zero, since its
    /// reciprocal would have a zero denominator.
    #[inline]
    pub fn recip(&self) -> Result<Self, RationalError> {
        Self::new(self.denom, self.numer)
    }

    /// Invert in place, swapping numerator and denominator.
    ///
    /// The mutating counterpart of [`recip`](Rational::recip); on error the
    /// value is left unchanged.
    pub fn invert(&mut self) -> Result<(), RationalError> {
        *self = self.recip()?;
        Ok(())
    }

    /// Raise to an integer power.
    ///
    /// Non-negative exponents raise numerator and denominator directly; a
    /// negative exponent raises the reciprocal to `|exp|`. Overflow is
    /// unguarded, like the rest of the arithmetic.
    ///
    /// # Errors
    ///
    /// [`RationalError::ZeroDenominator`] when a zero value is raised to a
    /// negative exponent.
    ///
    /// # Examples
    ///
    /// ```
    /// use exact_ratio::Rational;
    ///
    /// let r = Rational::new(2, 3)?;
    /// assert_eq!(r.pow(3)?, Rational::new(8, 27)?);
    /// assert_eq!(r.pow(-2)?, Rational::new(9, 4)?);
    /// assert_eq!(r.pow(0)?, Rational::one());
    /// # Ok::<(), exact_ratio::RationalError>(())
    /// ```
    pub fn pow(&self, exp: i32) -> Result<Self, RationalError> {
        let base = if exp < 0 { self.recip()? } else { *self };
        let e = exp.unsigned_abs();
        Ok(Self::normalized(base.numer.pow(e), base.denom.pow(e)))
    }

    /// Raise to a real exponent, through floating point.
    ///
    /// Always an approximation; no exactness attempt is made.
    #[inline]
    pub fn powf(&self, exp: f64) -> f64 {
        self.to_f64().powf(exp)
    }

    /// The floating-point square root of the fraction's value.
    ///
    /// # Errors
    ///
    /// [`RationalError::ComplexResult`] for negative values.
    pub fn sqrt(&self) -> Result<f64, RationalError> {
        let value = self.to_f64();
        if value < 0.0 {
            return Err(RationalError::ComplexResult);
        }
        Ok(value.sqrt())
    }

    /// The square root, exact when one exists.
    ///
    /// If numerator and denominator are each perfect squares the result is
    /// the exact [`Rational`] of their integer roots; otherwise it falls
    /// back to the approximation from [`sqrt`](Rational::sqrt). The integer
    /// roots are recovered by rounding the floating square roots (a 0.1
    /// epsilon counteracts downward rounding) and verified by squaring, so
    /// an exact tag is never wrong.
    ///
    /// # Errors
    ///
    /// [`RationalError::ComplexResult`] for negative values.
    ///
    /// # Examples
    ///
    /// ```
    /// use exact_ratio::{Rational, Sqrt};
    ///
    /// assert_eq!(
    ///     Rational::new(4, 1)?.sqrt_exact()?,
    ///     Sqrt::Exact(Rational::new(2, 1)?),
    /// );
    /// # Ok::<(), exact_ratio::RationalError>(())
    /// ```
    pub fn sqrt_exact(&self) -> Result<Sqrt, RationalError> {
        let approx = self.sqrt()?;
        let n = ((self.numer as f64).sqrt() + 0.1) as i64;
        let d = ((self.denom as f64).sqrt() + 0.1) as i64;
        if n * n == self.numer && d * d == self.denom {
            // Roots of a coprime pair are coprime, so the pair is already
            // in lowest terms.
            Ok(Sqrt::Exact(Self { numer: n, denom: d }))
        } else {
            Ok(Sqrt::Approximate(approx))
        }
    }

    /// Divide, reporting a zero divisor as an error instead of panicking.
    ///
    /// # Errors
    ///
    /// [`RationalError::DivisionByZero`] if `divisor` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use exact_ratio::{Rational, RationalError};
    ///
    /// let half = Rational::new(1, 2)?;
    /// assert_eq!(half.checked_div(&Rational::new(1, 4)?)?, Rational::from_integer(2));
    /// assert!(matches!(
    ///     half.checked_div(&Rational::zero()),
    ///     Err(RationalError::DivisionByZero),
    /// ));
    /// # Ok::<(), exact_ratio::RationalError>(())
    /// ```
    pub fn checked_div(&self, divisor: &Self) -> Result<Self, RationalError> {
        if divisor.numer == 0 {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::normalized(
            self.numer * divisor.denom,
            self.denom * divisor.numer,
        ))
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Euclidean GCD on unsigned magnitudes. `gcd(0, d) == d`.
#[inline]
fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a
}

// ============================================================================
// COMPOUND ASSIGNMENT (the primitive arithmetic)
// ============================================================================

impl AddAssign for Rational {
    /// Cross-multiplying addition, renormalized before returning.
    fn add_assign(&mut self, rhs: Self) {
        self.numer = self.numer * rhs.denom + self.denom * rhs.numer;
        self.denom *= rhs.denom;
        self.simplify();
    }
}

impl SubAssign for Rational {
    fn sub_assign(&mut self, rhs: Self) {
        self.numer = self.numer * rhs.denom - self.denom * rhs.numer;
        self.denom *= rhs.denom;
        self.simplify();
    }
}

impl MulAssign for Rational {
    fn mul_assign(&mut self, rhs: Self) {
        self.numer *= rhs.numer;
        self.denom *= rhs.denom;
        self.simplify();
    }
}

impl DivAssign for Rational {
    /// # Panics
    ///
    /// Panics if `rhs` is zero. Use [`Rational::checked_div`] to propagate
    /// the error instead.
    fn div_assign(&mut self, rhs: Self) {
        if rhs.numer == 0 {
            panic!("division by zero");
        }
        self.numer *= rhs.denom;
        self.denom *= rhs.numer;
        self.simplify();
    }
}

impl AddAssign<i64> for Rational {
    fn add_assign(&mut self, rhs: i64) {
        *self += Self::from_integer(rhs);
    }
}

impl SubAssign<i64> for Rational {
    fn sub_assign(&mut self, rhs: i64) {
        *self -= Self::from_integer(rhs);
    }
}

impl MulAssign<i64> for Rational {
    fn mul_assign(&mut self, rhs: i64) {
        *self *= Self::from_integer(rhs);
    }
}

impl DivAssign<i64> for Rational {
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn div_assign(&mut self, rhs: i64) {
        *self /= Self::from_integer(rhs);
    }
}

// ============================================================================
// BINARY OPERATORS (copy one operand, delegate to the compound form)
// ============================================================================

impl Add for Rational {
    type Output = Self;
    #[inline]
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl Add<i64> for Rational {
    type Output = Self;
    #[inline]
    fn add(mut self, rhs: i64) -> Self {
        self += rhs;
        self
    }
}

impl Add<Rational> for i64 {
    type Output = Rational;
    #[inline]
    fn add(self, rhs: Rational) -> Rational {
        Rational::from_integer(self) + rhs
    }
}

impl Sub for Rational {
    type Output = Self;
    #[inline]
    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl Sub<i64> for Rational {
    type Output = Self;
    #[inline]
    fn sub(mut self, rhs: i64) -> Self {
        self -= rhs;
        self
    }
}

impl Sub<Rational> for i64 {
    type Output = Rational;
    /// Computes `self - rhs`, not `rhs - self`.
    #[inline]
    fn sub(self, rhs: Rational) -> Rational {
        Rational::from_integer(self) - rhs
    }
}

impl Mul for Rational {
    type Output = Self;
    #[inline]
    fn mul(mut self, rhs: Self) -> Self {
        self *= rhs;
        self
    }
}

impl Mul<i64> for Rational {
    type Output = Self;
    #[inline]
    fn mul(mut self, rhs: i64) -> Self {
        self *= rhs;
        self
    }
}

impl Mul<Rational> for i64 {
    type Output = Rational;
    #[inline]
    fn mul(self, rhs: Rational) -> Rational {
        rhs * self
    }
}

impl Div for Rational {
    type Output = Self;
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    fn div(mut self, rhs: Self) -> Self {
        self /= rhs;
        self
    }
}

impl Div<i64> for Rational {
    type Output = Self;
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    fn div(mut self, rhs: i64) -> Self {
        self /= rhs;
        self
    }
}

impl Div<Rational> for i64 {
    type Output = Rational;
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    fn div(self, rhs: Rational) -> Rational {
        Rational::from_integer(self) / rhs
    }
}

impl Neg for Rational {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl Default for Rational {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for Rational {
    #[inline]
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

// ============================================================================
// COMPARISON
// ============================================================================

impl Ord for Rational {
    /// Exact ordering by cross-multiplying into `i128`.
    ///
    /// Denominators are positive, so the comparison direction is preserved,
    /// and `i64` products cannot overflow the wider type. Values a
    /// floating-point comparison would misorder (neighbors closer than an
    /// `f64` ulp) compare correctly here.
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.numer as i128 * other.denom as i128;
        let rhs = other.numer as i128 * self.denom as i128;
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================================
// FORMATTING & PARSING
// ============================================================================

impl fmt::Display for Rational {
    /// Always `numer/denom`, even for integers, so output is lossless and
    /// round-trips through [`FromStr`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

impl FromStr for Rational {
    type Err = RationalError;

    /// Parse `<numer>[/<denom>]`, denominator defaulting to 1.
    ///
    /// Surrounding whitespace is tolerated on either field.
    ///
    /// # Examples
    ///
    /// ```
    /// use exact_ratio::{Rational, RationalError};
    ///
    /// assert_eq!("3/4".parse::<Rational>()?, Rational::new(3, 4)?);
    /// assert_eq!("5".parse::<Rational>()?, Rational::from_integer(5));
    /// assert!(matches!("x/4".parse::<Rational>(), Err(RationalError::Parse(_))));
    /// # Ok::<(), exact_ratio::RationalError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (numer_text, denom_text) = match s.split_once('/') {
            Some((n, d)) => (n, d),
            None => (s, "1"),
        };
        let numer = numer_text
            .trim()
            .parse::<i64>()
            .map_err(|_| RationalError::Parse(s.trim().to_owned()))?;
        let denom = denom_text
            .trim()
            .parse::<i64>()
            .map_err(|_| RationalError::Parse(s.trim().to_owned()))?;
        Self::new(numer, denom)
    }
}
