use crate::convergence::convergence_orders;
use crate::quad_core::{
    integrand::{sextic_sine, Integrand},
    quadrature::{gauss_nodes_weights, rescale_to_interval},
};

use std::error::Error;

pub fn fixed_interval_demo() -> Result<(), Box<dyn Error>> {
    let a = 1.0;
    let b = 3.0;
    let orders = [2, 3, 4, 5, 11, 12, 13];

    let integrand = sextic_sine();

    for &n in orders.iter() {
        let (x, w) = gauss_nodes_weights(n)?;
        let (x_scaled, w_scaled) = rescale_to_interval(a, b, &x, &w);
        let values = integrand.eval_nodes(&x_scaled);
        let result = w_scaled.dot(&values);

        println!("Integration result with N={}, is {}", n, result);
    }

    Ok(())
}

pub fn order_sweep_demo() -> Result<(), Box<dyn Error>> {
    let a = 1.0;
    let b = 3.0;
    let orders: Vec<usize> = (2..=40).collect();
    let reference_order = 60;

    let integrand = sextic_sine();

    let csv_path = "results/convergence_orders.csv";
    std::fs::create_dir_all("results")?;

    convergence_orders(&orders, a, b, &integrand, reference_order, csv_path)?;

    Ok(())
}
