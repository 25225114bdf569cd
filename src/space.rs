//! The geometric model: a vector space with a basis, the affine space over it,
//! and a coordinate system anchored at an origin.
//!
//! Points of the affine space are not enumerated anywhere; the screen is the
//! set of points, so only the operations are modelled here.

use crate::errors::GeometryError;
use crate::types::{EPSILON, Point, Vector};

/// Which of the two basis vectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasisRole {
    E1,
    E2,
}

impl BasisRole {
    pub fn other(self) -> BasisRole {
        match self {
            BasisRole::E1 => BasisRole::E2,
            BasisRole::E2 => BasisRole::E1,
        }
    }
}

/// Ordered pair of basis vectors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub e1: Vector,
    pub e2: Vector,
}

impl Default for Basis {
    fn default() -> Self {
        Basis::new(Vector::new(1.0, 0.0), Vector::new(0.0, 1.0))
    }
}

impl Basis {
    pub fn new(e1: Vector, e2: Vector) -> Self {
        Basis { e1, e2 }
    }

    pub fn get(&self, role: BasisRole) -> Vector {
        match role {
            BasisRole::E1 => self.e1,
            BasisRole::E2 => self.e2,
        }
    }

    /// True if either vector is zero or the two are (nearly) parallel.
    ///
    /// The cross product is compared relative to the vector lengths so the
    /// test does not depend on the scale of the basis.
    pub fn is_degenerate(&self) -> bool {
        if self.e1.is_zero() || self.e2.is_zero() {
            return true;
        }
        self.e1.cross(self.e2).abs() < EPSILON * self.e1.length() * self.e2.length()
    }
}

/// A 2D real vector space with a chosen basis
#[derive(Debug, Clone, Default)]
pub struct VectorSpace {
    basis: Basis,
}

impl VectorSpace {
    pub fn new(basis: Basis) -> Self {
        VectorSpace { basis }
    }

    pub fn basis(&self) -> &Basis {
        &self.basis
    }

    pub fn add(&self, v1: Vector, v2: Vector) -> Vector {
        v1 + v2
    }

    pub fn scale(&self, v: Vector, lambda: f64) -> Vector {
        v * lambda
    }
}

/// Affine space `(A, V)` over a [`VectorSpace`]
#[derive(Debug, Clone, Default)]
pub struct AffineSpace {
    vector_space: VectorSpace,
}

impl AffineSpace {
    pub fn new(vector_space: VectorSpace) -> Self {
        AffineSpace { vector_space }
    }

    pub fn basis(&self) -> &Basis {
        self.vector_space.basis()
    }

    pub fn vector_space(&self) -> &VectorSpace {
        &self.vector_space
    }

    pub fn add_vector_to_point(&self, p: Point, v: Vector) -> Point {
        p + v
    }
}

/// An affine space together with an origin point
#[derive(Debug, Clone, Default)]
pub struct CoordinateSystem {
    affine_space: AffineSpace,
    origin: Point,
}

impl CoordinateSystem {
    pub fn new(affine_space: AffineSpace, origin: Point) -> Self {
        CoordinateSystem { affine_space, origin }
    }

    /// The identity basis at `(0, 0)`.
    pub fn cartesian() -> Self {
        Self::default()
    }

    pub fn basis(&self) -> &Basis {
        self.affine_space.basis()
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn affine_space(&self) -> &AffineSpace {
        &self.affine_space
    }

    /// Vector from the model zero to `p`.
    pub fn radius_vector(&self, p: Point) -> Vector {
        Vector::new(p.x, p.y)
    }

    pub fn point_by_radius_vector(&self, v: Vector) -> Point {
        Point::new(v.x, v.y)
    }

    /// Overwrite `p` with the origin.
    ///
    /// This is the cursor reset used between grid sweeps. It does not move
    /// the coordinate system.
    pub fn move_point_at_origin(&self, p: &mut Point) {
        p.set(self.origin.x, self.origin.y);
    }

    /// Replace one basis vector, rejecting changes that leave the basis
    /// unable to span the plane.
    pub fn set_basis_vector(&mut self, role: BasisRole, v: Vector) -> Result<(), GeometryError> {
        let mut basis = *self.basis();
        match role {
            BasisRole::E1 => basis.e1 = v,
            BasisRole::E2 => basis.e2 = v,
        }
        if basis.is_degenerate() {
            return Err(GeometryError::DegenerateBasis);
        }
        self.affine_space.vector_space.basis = basis;
        Ok(())
    }
}
