extern crate nalgebra as na;

use crate::quad_core::error::QuadError;
use crate::quad_core::legendre;

use std::f64::consts::PI;

const NEWTON_TOL: f64 = 1e-15;
const MAX_NEWTON_SWEEPS: usize = 100;

fn newton_step(n: f64, p_prev: f64, p_curr: f64, x: f64) -> (f64, f64) {
    let dp = (n + 1.0) * (p_prev - x * p_curr) / (1.0 - x * x);
    (p_curr / dp, dp)
}

pub fn gauss_nodes_weights(n: usize) -> Result<(na::DVector<f64>, na::DVector<f64>), QuadError> {
    if n == 0 {
        return Err(QuadError::InvalidOrder(n));
    }

    let nf = n as f64;

    //asymptotic root estimate, close enough that the Newton sweeps never need bracketing
    let guesses: Vec<f64> = (0..n)
        .map(|k| {
            let a = (3 + 4 * k) as f64 / (4.0 * nf + 2.0);
            (PI * a + 1.0 / (8.0 * nf * nf * a.tan())).cos()
        })
        .collect();
    let mut x = na::DVector::from_vec(guesses);

    let mut converged = false;
    for _ in 0..MAX_NEWTON_SWEEPS {
        let (p_prev, p_curr) = legendre::recurrence_pair(n, &x);

        let mut delta: f64 = 0.0;
        for i in 0..n {
            let (dx, _) = newton_step(nf, p_prev[i], p_curr[i], x[i]);
            x[i] -= dx;
            delta = delta.max(dx.abs());
        }

        if delta < NEWTON_TOL {
            converged = true;
            break;
        }
    }
    if !converged {
        return Err(QuadError::NoConvergence {
            order: n,
            sweeps: MAX_NEWTON_SWEEPS,
        });
    }

    let (p_prev, p_curr) = legendre::recurrence_pair(n, &x);
    let weights: Vec<f64> = (0..n)
        .map(|i| {
            let (_, dp) = newton_step(nf, p_prev[i], p_curr[i], x[i]);
            2.0 * (nf + 1.0) * (nf + 1.0) / (nf * nf * (1.0 - x[i] * x[i]) * dp * dp)
        })
        .collect();
    let w = na::DVector::from_vec(weights);

    Ok((x, w))
}

pub fn rescale_to_interval(
    a: f64,
    b: f64,
    x: &na::DVector<f64>,
    w: &na::DVector<f64>,
) -> (na::DVector<f64>, na::DVector<f64>) {
    let half_width = 0.5 * (b - a);
    let mid = 0.5 * (b + a);

    let x_scaled: Vec<f64> = x.iter().map(|&xi| half_width * xi + mid).collect();
    let w_scaled: Vec<f64> = w.iter().map(|&wi| half_width * wi).collect();

    (
        na::DVector::from_vec(x_scaled),
        na::DVector::from_vec(w_scaled),
    )
}

pub fn gauss_legendre<F>(a: f64, b: f64, n: usize, integrand: F) -> Result<f64, QuadError>
where
    F: Fn(f64) -> f64,
{
    if a >= b {
        return Err(QuadError::InvalidInterval { a, b });
    }

    let (nodes, weights) = gauss_nodes_weights(n)?;
    let (x_scaled, w_scaled) = rescale_to_interval(a, b, &nodes, &weights);

    let mut integral_value = 0.0;
    for i in 0..n {
        integral_value += w_scaled[i] * integrand(x_scaled[i]);
    }
    Ok(integral_value)
}
