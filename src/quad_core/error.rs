use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuadError {
    #[error("quadrature order must be at least 1, got {0}")]
    InvalidOrder(usize),

    #[error("Newton iteration for order {order} did not converge within {sweeps} sweeps")]
    NoConvergence { order: usize, sweeps: usize },

    #[error("invalid integration interval [{a}, {b}]")]
    InvalidInterval { a: f64, b: f64 },
}
