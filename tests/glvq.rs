use std::sync::Arc;

use lvq::{
    activations::{ActFn, Activation},
    builder::SolverBuilder,
    solvers::{BroydenFletcherGoldfarbShanno, Jacobian, Objective, Solver, SolverOptions},
    specs::LvqSpec,
};
use ndarray::{Array1, ArrayView1, array};
use parking_lot::Mutex;

/// A one dimensional GLVQ cost with a prototype per class, the parameters are the two
/// prototypes.
struct Glvq {
    xs: Array1<f64>,
    labels: Vec<usize>,
    act_fn: ActFn,
}

impl Glvq {
    fn new(act_fn: ActFn) -> Self {
        Self {
            xs: array![-2., -1.5, -1., 1., 1.5, 2.],
            labels: vec![0, 0, 0, 1, 1, 1],
            act_fn,
        }
    }

    /// The relative distance difference of every sample, with the squared distances to
    /// its own and to the other prototype.
    fn scores(&self, w: ArrayView1<f64>) -> Vec<(f64, f64, f64)> {
        self.xs
            .iter()
            .zip(&self.labels)
            .map(|(&x, &label)| {
                let same = (x - w[label]).powi(2);
                let other = (x - w[1 - label]).powi(2);
                ((same - other) / (same + other), same, other)
            })
            .collect()
    }

    fn accuracy(&self, w: ArrayView1<f64>) -> f64 {
        let hits = self.scores(w).iter().filter(|(mu, ..)| *mu < 0.).count();
        hits as f64 / self.labels.len() as f64
    }
}

impl Objective for Glvq {
    fn cost(&self, w: ArrayView1<f64>) -> f64 {
        let mu: Array1<f64> = self.scores(w).iter().map(|(mu, ..)| *mu).collect();
        self.act_fn.value(&mu).sum()
    }

    fn gradient(&self, w: ArrayView1<f64>) -> Option<Array1<f64>> {
        let mut grad = Array1::<f64>::zeros(2);

        for ((mu, same, other), (&x, &label)) in
            self.scores(w).into_iter().zip(self.xs.iter().zip(&self.labels))
        {
            let df = self.act_fn.df(mu);
            let denom = (same + other).powi(2);

            // d same / d w = -2 (x - w), likewise for other.
            grad[label] += df * (2. * other / denom) * (-2. * (x - w[label]));
            grad[1 - label] += df * (-2. * same / denom) * (-2. * (x - w[1 - label]));
        }

        Some(grad)
    }
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn analytic_gradient_matches_cost() {
    const H: f64 = 1e-6;

    let glvq = Glvq::new(ActFn::soft_plus(2.).unwrap());
    let w = array![-0.2, 0.3];
    let grad = glvq.gradient(w.view()).unwrap();

    for i in 0..2 {
        let mut plus = w.clone();
        let mut minus = w.clone();
        plus[i] += H;
        minus[i] -= H;

        let numeric = (glvq.cost(plus.view()) - glvq.cost(minus.view())) / (2. * H);
        assert!((numeric - grad[i]).abs() < 1e-5, "{numeric} vs {}", grad[i]);
    }
}

#[test]
fn soft_plus_glvq_separates_classes() {
    init_logger();

    let spec = LvqSpec::from_json(
        r#"{
            "activation": { "soft_plus": { "beta": 2 } },
            "solver": { "bfgs": { "gtol": 1e-6 } }
        }"#,
    )
    .unwrap();

    let glvq = Glvq::new(ActFn::try_from(spec.activation).unwrap());
    // Both prototypes left of the class 0 samples, so those get misclassified.
    let initial = array![-2.5, -1.8];
    let initial_cost = glvq.cost(initial.view());

    let mut solver = SolverBuilder::new().build(&spec.solver, &glvq).unwrap();
    let solution = solver.minimize(initial.view()).unwrap();

    assert!(solution.cost < initial_cost);
    assert_eq!(glvq.accuracy(initial.view()), 0.5);
    assert_eq!(glvq.accuracy(solution.point.view()), 1.);
    assert!(solution.point[0] < 0. && solution.point[1] > 0.);
}

#[test]
fn finite_differences_follow_the_analytic_run() {
    init_logger();

    let glvq = Glvq::new(ActFn::soft_plus(1.).unwrap());
    let initial = array![-0.2, 0.3];

    let trace = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&trace);
    let options = SolverOptions::default()
        .with_max_iter(100)
        .with_callback(move |w| sink.lock().push(w.to_owned()));
    let analytic = BroydenFletcherGoldfarbShanno::new(&glvq, options)
        .minimize(initial.view())
        .unwrap();

    let options = SolverOptions::default()
        .with_max_iter(100)
        .with_jac(Jacobian::FiniteDifference);
    let estimated = BroydenFletcherGoldfarbShanno::new(&glvq, options)
        .minimize(initial.view())
        .unwrap();

    assert_eq!(trace.lock().len() as u64, analytic.iterations);
    assert_eq!(glvq.accuracy(analytic.point.view()), 1.);
    assert_eq!(glvq.accuracy(estimated.point.view()), 1.);
    assert!((analytic.cost - estimated.cost).abs() < 1e-4);
}
