use crate::quad_core::integrand::Integrand;
use crate::quad_core::quadrature::gauss_legendre;

use csv::Writer;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::error::Error;

#[derive(Serialize)]
struct RowData {
    order: usize,
    result: f64,
    err: f64,
}

pub fn convergence_orders<I>(
    orders: &[usize],
    a: f64,
    b: f64,
    integrand: &I,
    reference_order: usize,
    csv_path: &str,
) -> Result<Vec<f64>, Box<dyn Error>>
where
    I: Integrand,
{
    println!("calculating reference solution");
    let reference = gauss_legendre(a, b, reference_order, |x| integrand.eval(x))?;

    let pb = ProgressBar::new(orders.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} (eta: {eta}) {msg}")
            .unwrap()
            .progress_chars("█░"),
    );

    let mut wtr = Writer::from_path(csv_path)?;
    let mut results = Vec::with_capacity(orders.len());

    for &order in orders {
        let result = gauss_legendre(a, b, order, |x| integrand.eval(x))?;

        let row = RowData {
            order,
            result,
            err: (result - reference).abs(),
        };
        wtr.serialize(row)?;

        results.push(result);
        pb.inc(1);
    }
    pb.finish_with_message("sweep complete");
    wtr.flush()?;

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quad_core::integrand::sextic_sine;

    fn temp_csv(name: &str) -> String {
        std::env::temp_dir()
            .join(name)
            .to_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_high_orders_agree() {
        // the listed orders have converged to at least 8 significant digits
        let integrand = sextic_sine();
        let r11 = gauss_legendre(1.0, 3.0, 11, |x| integrand.eval(x)).unwrap();
        let r12 = gauss_legendre(1.0, 3.0, 12, |x| integrand.eval(x)).unwrap();
        let r13 = gauss_legendre(1.0, 3.0, 13, |x| integrand.eval(x)).unwrap();

        assert!(((r13 - r11) / r13).abs() < 1e-8);
        assert!(((r13 - r12) / r13).abs() < 1e-8);
    }

    #[test]
    fn test_exact_for_pure_polynomial() {
        // int_1^3 x^6 dx = 2186/7, exact from order 4 on
        let result = gauss_legendre(1.0, 3.0, 4, |x| x.powi(6)).unwrap();
        assert!((result - 2186.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_sweep_errors_shrink() {
        let integrand = sextic_sine();
        let orders = [2, 3, 4, 5, 11, 12, 13];
        let csv_path = temp_csv("gauss_quad_convergence_test.csv");

        let results = convergence_orders(&orders, 1.0, 3.0, &integrand, 20, &csv_path).unwrap();
        assert_eq!(results.len(), orders.len());

        let reference = gauss_legendre(1.0, 3.0, 20, |x| integrand.eval(x)).unwrap();
        let first_err = (results[0] - reference).abs();
        let last_err = (results[results.len() - 1] - reference).abs();
        assert!(last_err < first_err);
        assert!(last_err < 1e-8);
    }
}
