//! Samples a few functions and logs the resulting points.
//!
//! Usage: `cargo run --example plot [axis] [samples]`
//!
//! `axis` (`x` or `y`, default `y`) selects the axis the parabola is reflected over, `samples`
//! (default 9) the number of points to evaluate between -2 and 2.

use anyhow::Context;
use cart::{vec2, Dimension, Function, Vector};

fn main() -> anyhow::Result<()> {
    cart::init_logger!();

    let mut args = std::env::args().skip(1);
    let axis: Dimension = args.next().as_deref().unwrap_or("y").parse()?;
    let samples: usize = match args.next() {
        Some(arg) => arg
            .parse::<usize>()
            .with_context(|| format!("invalid sample count '{arg}'"))?,
        None => 9,
    };
    anyhow::ensure!(samples >= 2, "need at least 2 samples, got {samples}");

    let parabola = Function::new(|x: f64| x * x).sub_const(1.0);
    let shifted = parabola.of(&Function::identity().add_const(0.5));
    let reflected = shifted.reflect(axis);

    let step = 4.0 / (samples - 1) as f64;
    let inputs = (0..samples).map(move |i| -2.0 + step * i as f64);

    log::info!("reflecting f(x) = (x + 0.5)^2 - 1 over the {axis} axis");
    for (before, after) in shifted.sample(inputs.clone()).zip(reflected.sample(inputs)) {
        log::info!("{before} -> {after}");
    }

    // Fit the sampled curve into a 40x10 grid of integer cells.
    let lo = vec2(-2.0, -5.0);
    let hi = vec2(2.0, 5.0);
    let mut scale = vec2(40.0, 10.0);
    scale.div_vector(hi.clone().sub_vector(&lo));
    for point in reflected.sample((0..samples).map(move |i| -2.0 + step * i as f64)) {
        let mut cell = point;
        cell.clamp(&lo, &hi).sub_vector(&lo).mul_vector(&scale);
        let cell = Vector::<u32>::convert_from(cell);
        log::debug!("{point} lands in cell {cell}");
    }

    Ok(())
}
