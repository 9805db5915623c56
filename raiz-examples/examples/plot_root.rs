//! Solves `x^2 - 4 = 0` by bisection and plots the curve with the
//! final root estimate marked.

use raiz_core::RealFn;
use raiz_plot::PlotApp;
use raiz_solve::{Config, bisection};

fn main() {
    let f = |x: f64| x * x - 4.0;

    let trace = bisection::solve(&RealFn::new(f), [0.0, 3.0], &Config::default()).unwrap();
    let root = trace.last().unwrap().x_root;
    println!("bisection found x = {root:.6} in {} iterations", trace.len());

    let samples: Vec<[f64; 2]> = (0..=300)
        .map(|i| {
            let x = 3.0 * f64::from(i) / 300.0;
            [x, f(x)]
        })
        .collect();

    let app = PlotApp::new()
        .add_series("f(x) = x^2 - 4", &samples)
        .mark_root("root", root, f(root));

    app.run("Bisection root").unwrap();
}
