// ---------------------------------------------------------------------------
// Series – one convergence log
// ---------------------------------------------------------------------------

/// A single convergence series: the error recorded at each iteration of one
/// optimization run. `x` and `y` are parallel and never mutated after loading.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Display label shown in the legend ("PESA", "NSGA2").
    pub label: String,
    /// Iteration axis (x).
    pub x: Vec<f64>,
    /// Error axis (y) – same length as `x`.
    pub y: Vec<f64>,
}

impl Series {
    /// Number of (iteration, error) pairs.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the series holds no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// The series as `[x, y]` pairs, in file order, for the plot.
    pub fn plot_points(&self) -> Vec<[f64; 2]> {
        self.x
            .iter()
            .zip(self.y.iter())
            .map(|(&xi, &yi)| [xi, yi])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Series {
        Series {
            label: "PESA".to_string(),
            x: vec![1.0, 2.0, 3.0],
            y: vec![10.0, 5.0, 2.0],
        }
    }

    #[test]
    fn plot_points_preserves_values_and_order() {
        let s = sample();
        assert_eq!(s.plot_points(), vec![[1.0, 10.0], [2.0, 5.0], [3.0, 2.0]]);
    }

    #[test]
    fn plot_points_does_not_mutate_the_series() {
        let s = sample();
        let before = s.clone();
        let _ = s.plot_points();
        let _ = s.plot_points();
        assert_eq!(s, before);
    }

    #[test]
    fn len_counts_pairs() {
        let s = sample();
        assert_eq!(s.len(), 3);
        assert!(!s.is_empty());
    }
}
