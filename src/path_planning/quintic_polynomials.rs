//! Quintic polynomial boundary-value solver
//!
//! Solves for the six coefficients of
//! `p(t) = a0 + a1 t + a2 t^2 + a3 t^3 + a4 t^4 + a5 t^5`
//! matching position, velocity and acceleration at `t = 0` and `t = tf`,
//! and evaluates the polynomial with its first two derivatives.
//!
//! Ref:
//!     - PythonRobotics: https://github.com/AtsushiSakai/PythonRobotics
//!     - Takahashi, A., Hongo, T., Ninomiya, Y., & Sugimoto, G. (1989),
//!       "Local path planning and motion control for AGV in positioning"

use nalgebra::{Matrix6, Vector6};

use crate::common::{BoundaryState, RoboticsError, RoboticsResult};

/// Coefficients `a0..a5` of one scalar quintic
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuinticPolynomial {
    pub a0: f64,
    pub a1: f64,
    pub a2: f64,
    pub a3: f64,
    pub a4: f64,
    pub a5: f64,
}

impl QuinticPolynomial {
    /// Solve the boundary-value problem over `[0, tf]`.
    ///
    /// Returns `DegenerateHorizon` when `tf` is not a positive finite number.
    pub fn solve(start: BoundaryState, end: BoundaryState, tf: f64) -> RoboticsResult<Self> {
        if !(tf.is_finite() && tf > 0.0) {
            return Err(RoboticsError::DegenerateHorizon(tf));
        }

        let t2 = tf * tf;
        let t3 = t2 * tf;
        let t4 = t3 * tf;
        let t5 = t4 * tf;

        // Rows: position, velocity, acceleration at t = 0, then at t = tf
        #[rustfmt::skip]
        let a_matrix = Matrix6::from_row_slice(&[
            1., 0., 0., 0., 0., 0.,
            0., 1., 0., 0., 0., 0.,
            0., 0., 2., 0., 0., 0.,
            1., tf, t2, t3, t4, t5,
            0., 1., 2. * tf, 3. * t2, 4. * t3, 5. * t4,
            0., 0., 2., 6. * tf, 12. * t2, 20. * t3,
        ]);
        let b = Vector6::new(
            start.position,
            start.velocity,
            start.acceleration,
            end.position,
            end.velocity,
            end.acceleration,
        );

        let x = a_matrix.lu().solve(&b).ok_or_else(|| {
            RoboticsError::NumericalError(format!("quintic system is singular for tf = {}", tf))
        })?;

        Ok(Self::from_coefficients([x[0], x[1], x[2], x[3], x[4], x[5]]))
    }

    /// Convenience constructor for the scalar boundary values
    pub fn new(
        xs: f64, vxs: f64, axs: f64,
        xe: f64, vxe: f64, axe: f64,
        time: f64,
    ) -> RoboticsResult<Self> {
        Self::solve(
            BoundaryState::new(xs, vxs, axs),
            BoundaryState::new(xe, vxe, axe),
            time,
        )
    }

    pub fn from_coefficients(a: [f64; 6]) -> Self {
        QuinticPolynomial { a0: a[0], a1: a[1], a2: a[2], a3: a[3], a4: a[4], a5: a[5] }
    }

    pub fn coefficients(&self) -> [f64; 6] {
        [self.a0, self.a1, self.a2, self.a3, self.a4, self.a5]
    }

    pub fn calc_point(&self, t: f64) -> f64 {
        self.a0 + self.a1 * t + self.a2 * t.powi(2) +
        self.a3 * t.powi(3) + self.a4 * t.powi(4) + self.a5 * t.powi(5)
    }

    pub fn calc_first_derivative(&self, t: f64) -> f64 {
        self.a1 + 2.0 * self.a2 * t +
        3.0 * self.a3 * t.powi(2) + 4.0 * self.a4 * t.powi(3) + 5.0 * self.a5 * t.powi(4)
    }

    pub fn calc_second_derivative(&self, t: f64) -> f64 {
        2.0 * self.a2 + 6.0 * self.a3 * t +
        12.0 * self.a4 * t.powi(2) + 20.0 * self.a5 * t.powi(3)
    }

    /// `(position, velocity, acceleration)` at `t`. `t` is not clamped.
    pub fn evaluate(&self, t: f64) -> (f64, f64, f64) {
        (
            self.calc_point(t),
            self.calc_first_derivative(t),
            self.calc_second_derivative(t),
        )
    }
}
