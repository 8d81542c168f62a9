pub mod convergence;
pub mod examples;
pub mod quad_core;

use examples::{fixed_interval_demo, order_sweep_demo};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fixed_interval_demo()?;
    order_sweep_demo()?;
    Ok(())
}
