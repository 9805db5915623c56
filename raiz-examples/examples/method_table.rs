//! Runs one method by name and prints its iteration table.
//!
//! ```sh
//! cargo run --example method_table -- secant
//! ```
//!
//! The f-based methods solve `x^2 - 4 = 0`; fixed point iterates
//! `g(x) = cos(x)` toward the Dottie number.

use std::env;

use raiz_core::RealFn;
use raiz_solve::{Config, bisection, false_position, fixed_point, newton_raphson, secant};

fn fmt_error(approx_error: Option<f64>) -> String {
    approx_error.map_or_else(|| "-".to_string(), |e| format!("{e:.6}"))
}

fn main() {
    let method = env::args().nth(1).unwrap_or_else(|| "bisection".to_string());
    let config = Config::default();
    let f = RealFn::new(|x: f64| x * x - 4.0);

    match method.as_str() {
        "bisection" => {
            let trace = bisection::solve(&f, [0.0, 3.0], &config).unwrap();
            println!("{:>4} {:>12} {:>12} {:>12} {:>12} {:>12}", "iter", "a", "b", "xr", "f(xr)", "ea%");
            for (i, it) in trace.iter().enumerate() {
                println!(
                    "{:>4} {:>12.6} {:>12.6} {:>12.6} {:>12.6} {:>12}",
                    i + 1,
                    it.a,
                    it.b,
                    it.x_root,
                    it.f_x_root,
                    fmt_error(it.approx_error),
                );
            }
        }
        "false-position" => {
            let trace = false_position::solve(&f, [0.0, 3.0], &config).unwrap();
            println!("{:>4} {:>12} {:>12} {:>12} {:>12} {:>12}", "iter", "a", "b", "xr", "f(xr)", "ea%");
            for (i, it) in trace.iter().enumerate() {
                println!(
                    "{:>4} {:>12.6} {:>12.6} {:>12.6} {:>12.6} {:>12}",
                    i + 1,
                    it.a,
                    it.b,
                    it.x_root,
                    it.f_x_root,
                    fmt_error(it.approx_error),
                );
            }
        }
        "fixed-point" => {
            let g = RealFn::new(|x: f64| x.cos());
            let trace = fixed_point::solve(&g, 0.5, &config).unwrap();
            println!("{:>4} {:>12} {:>12} {:>12}", "iter", "x_prev", "x_new", "ea%");
            for (i, it) in trace.iter().enumerate() {
                println!(
                    "{:>4} {:>12.6} {:>12.6} {:>12}",
                    i + 1,
                    it.x_prev,
                    it.x_new,
                    fmt_error(it.approx_error),
                );
            }
        }
        "newton-raphson" => {
            let df = RealFn::new(|x: f64| 2.0 * x);
            let trace = newton_raphson::solve(&f, &df, 3.0, &config).unwrap();
            println!("{:>4} {:>12} {:>12} {:>12} {:>12}", "iter", "x_prev", "x_new", "f(x_new)", "ea%");
            for (i, it) in trace.iter().enumerate() {
                println!(
                    "{:>4} {:>12.6} {:>12.6} {:>12.6} {:>12}",
                    i + 1,
                    it.x_prev,
                    it.x_new,
                    it.f_x_new,
                    fmt_error(it.approx_error),
                );
            }
        }
        "secant" => {
            let trace = secant::solve(&f, 0.0, 3.0, &config).unwrap();
            println!("{:>4} {:>12} {:>12} {:>12} {:>12} {:>12}", "iter", "x0", "x1", "x_new", "f(x_new)", "ea%");
            for (i, it) in trace.iter().enumerate() {
                println!(
                    "{:>4} {:>12.6} {:>12.6} {:>12.6} {:>12.6} {:>12}",
                    i + 1,
                    it.x0,
                    it.x1,
                    it.x_new,
                    it.f_x_new,
                    fmt_error(it.approx_error),
                );
            }
        }
        other => {
            eprintln!("unknown method: {other}");
            eprintln!(
                "expected one of: bisection, false-position, fixed-point, newton-raphson, secant"
            );
        }
    }
}
