//! Value types for the two coordinate spaces.
//!
//! Model space (`Point`, `Vector`) is the abstract plane the user reshapes, in
//! units. Device space (`ScreenPoint`, `ScreenVector`) is the pixel grid of the
//! drawing surface, with y growing downward. The two never mix implicitly; the
//! only bridge is [`crate::convert::ScreenToPointsConverter`].

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};
use std::str::FromStr;

use glam::DVec2;

use crate::errors::{ConfigError, GeometryError};

/// Vectors shorter than this are treated as zero.
pub const EPSILON: f64 = 1e-4;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl NumericError {
    /// Validate that `val` is finite and strictly positive.
    pub fn check_positive(val: f64) -> Result<f64, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else if val == 0.0 {
            Err(NumericError::Zero)
        } else if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(val)
        }
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

// ============================================================================
// Model space
// ============================================================================

/// A position in the affine plane
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn set(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }
}

/// A free vector of the model vector space
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Vector { x, y }
    }

    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// True when the vector is too short to carry a direction.
    pub fn is_zero(self) -> bool {
        self.length() < EPSILON
    }

    /// Z component of the 3D cross product of the two vectors.
    pub fn cross(self, other: Vector) -> f64 {
        self.x * other.y - self.y * other.x
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

/// Translate a point by a vector
impl Add<Vector> for Point {
    type Output = Point;
    fn add(self, rhs: Vector) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Subtract two points to get the vector between them
impl Sub<Point> for Point {
    type Output = Vector;
    fn sub(self, rhs: Point) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ============================================================================
// Device space
// ============================================================================

/// A pixel position on the drawing surface (y grows downward)
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        ScreenPoint { x, y }
    }

    pub fn set(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn as_dvec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Move this point in place by `v`.
    pub fn add_vector(&mut self, v: ScreenVector) -> &mut Self {
        self.x += v.dx;
        self.y += v.dy;
        self
    }

    pub fn distance(self, other: ScreenPoint) -> f64 {
        self.as_dvec2().distance(other.as_dvec2())
    }

    /// Squared distance, for comparisons that don't need the root.
    pub fn distance_squared(self, other: ScreenPoint) -> f64 {
        self.as_dvec2().distance_squared(other.as_dvec2())
    }
}

impl From<DVec2> for ScreenPoint {
    fn from(v: DVec2) -> Self {
        ScreenPoint::new(v.x, v.y)
    }
}

impl Add<ScreenVector> for ScreenPoint {
    type Output = ScreenPoint;
    fn add(self, rhs: ScreenVector) -> ScreenPoint {
        ScreenPoint::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

impl Sub<ScreenPoint> for ScreenPoint {
    type Output = ScreenVector;
    fn sub(self, rhs: ScreenPoint) -> ScreenVector {
        ScreenVector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A pixel displacement on the drawing surface
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScreenVector {
    pub dx: f64,
    pub dy: f64,
}

impl ScreenVector {
    pub const fn new(dx: f64, dy: f64) -> Self {
        ScreenVector { dx, dy }
    }

    pub fn as_dvec2(self) -> DVec2 {
        DVec2::new(self.dx, self.dy)
    }

    pub fn length(self) -> f64 {
        self.as_dvec2().length()
    }

    pub fn is_zero(self) -> bool {
        self.length() < EPSILON
    }

    /// Unit vector with the same direction.
    ///
    /// Fails for vectors shorter than [`EPSILON`]: they have no usable
    /// direction and reaching this with one is a caller bug.
    pub fn normalize(self) -> Result<ScreenVector, GeometryError> {
        let length = self.length();
        if length < EPSILON {
            return Err(GeometryError::ZeroDirection { length });
        }
        Ok(ScreenVector::new(self.dx / length, self.dy / length))
    }

    pub fn scale(self, lambda: f64) -> ScreenVector {
        ScreenVector::new(self.dx * lambda, self.dy * lambda)
    }

    /// Rotate by `angle_rad` (positive turns x toward y).
    pub fn rotate(self, angle_rad: f64) -> ScreenVector {
        DVec2::from_angle(angle_rad).rotate(self.as_dvec2()).into()
    }
}

impl From<DVec2> for ScreenVector {
    fn from(v: DVec2) -> Self {
        ScreenVector::new(v.x, v.y)
    }
}

impl Add for ScreenVector {
    type Output = ScreenVector;
    fn add(self, rhs: ScreenVector) -> ScreenVector {
        ScreenVector::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

impl AddAssign for ScreenVector {
    fn add_assign(&mut self, rhs: ScreenVector) {
        self.dx += rhs.dx;
        self.dy += rhs.dy;
    }
}

impl Neg for ScreenVector {
    type Output = ScreenVector;
    fn neg(self) -> ScreenVector {
        ScreenVector::new(-self.dx, -self.dy)
    }
}

/// Size of the drawing surface in pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    /// Create a viewport with validation (rejects NaN, infinite, zero, negative)
    pub fn try_new(width: f64, height: f64) -> Result<Self, ConfigError> {
        let invalid = |reason| ConfigError::InvalidViewport { width, height, reason };
        NumericError::check_positive(width).map_err(invalid)?;
        NumericError::check_positive(height).map_err(invalid)?;
        Ok(Viewport { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new(self.width / 2.0, self.height / 2.0)
    }

    /// Inclusive containment in `[0, width] x [0, height]`.
    pub fn contains(&self, p: ScreenPoint) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }
}

// ============================================================================
// Color
// ============================================================================

/// Simple color model; the surface decides how to paint it.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, u8),
    Raw(String),
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(s) | Color::Raw(s) => write!(f, "{}", s),
            Color::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            Color::Rgba(r, g, b, a) => write!(f, "#{:02x}{:02x}{:02x}{:02x}", r, g, b, a),
        }
    }
}

impl FromStr for Color {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidColor { input: s.to_string() };
        let s = s.trim();

        let Some(hex) = s.strip_prefix('#') else {
            if !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic()) {
                return Ok(Color::Named(s.to_string()));
            }
            return Err(invalid());
        };

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        // #rgb expands each digit: #abc == #aabbcc
        let nibble = |i: usize| {
            u8::from_str_radix(&hex[i..i + 1], 16)
                .map(|n| n * 17)
                .map_err(|_| invalid())
        };

        match hex.len() {
            3 => Ok(Color::Rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
            6 => Ok(Color::Rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Color::Rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(invalid()),
        }
    }
}
