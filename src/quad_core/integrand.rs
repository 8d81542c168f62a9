extern crate nalgebra as na;

//traits
pub trait Integrand {
    fn eval(&self, x: f64) -> f64;

    fn eval_nodes(&self, x: &na::DVector<f64>) -> na::DVector<f64> {
        let values: Vec<f64> = x.iter().map(|&xi| self.eval(xi)).collect();
        na::DVector::from_vec(values)
    }
}

//structs
pub struct FnIntegrand<F>
where
    F: Fn(f64) -> f64,
{
    pub f: F,
}

//implementations
impl<F> Integrand for FnIntegrand<F>
where
    F: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}

/// The fixed test integrand x^6 - x^2 sin(2x).
pub fn sextic_sine() -> FnIntegrand<fn(f64) -> f64> {
    FnIntegrand {
        f: (|x| x.powi(6) - x * x * (2.0 * x).sin()) as fn(f64) -> f64,
    }
}
