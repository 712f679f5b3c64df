//! Writes synthetic `pesa.txt` and `nsga2.txt` convergence logs into the
//! working directory, for trying out the viewer without real optimizer runs.

use std::fmt::Write as _;

/// Minimal deterministic PRNG (64-bit LCG, Knuth constants).
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg {
            state: seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407),
        }
    }

    fn next_f64(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Best-so-far error per iteration: exponential decay towards a floor with
/// multiplicative jitter, clamped so the trace never increases.
fn convergence_trace(
    rng: &mut Lcg,
    iterations: usize,
    start: f64,
    floor: f64,
    tau: f64,
) -> Vec<f64> {
    let mut best = start;
    (0..iterations)
        .map(|i| {
            let jitter = 0.9 + 0.2 * rng.next_f64();
            let candidate = floor + (start - floor) * (-(i as f64) / tau).exp() * jitter;
            if candidate < best {
                best = candidate;
            }
            best
        })
        .collect()
}

fn render_log(errors: &[f64]) -> String {
    let mut out = String::new();
    for (i, err) in errors.iter().enumerate() {
        writeln!(out, "{} {:.6}", i + 1, err).expect("writing to String cannot fail");
    }
    out
}

fn main() {
    let mut rng = Lcg::new(42);

    let iterations = 200;
    // NSGA2 converges slower but reaches a lower floor, so the curves cross.
    let pesa = convergence_trace(&mut rng, iterations, 10.0, 1.8, 35.0);
    let nsga2 = convergence_trace(&mut rng, iterations, 12.0, 0.9, 55.0);

    std::fs::write("pesa.txt", render_log(&pesa)).expect("Failed to write pesa.txt");
    std::fs::write("nsga2.txt", render_log(&nsga2)).expect("Failed to write nsga2.txt");

    println!("Wrote {iterations} rows each to pesa.txt and nsga2.txt");
}
