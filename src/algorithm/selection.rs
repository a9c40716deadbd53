//! Weighted variant selection over prefix sums
//!
//! The draw rule is "first cumulative weight strictly exceeding the draw":
//! a draw landing exactly on a prefix boundary belongs to the next
//! candidate, which keeps linear and binary search identical.

/// Prefix-sum table over the weights of a candidate list
#[derive(Clone, Debug)]
pub struct WeightTable {
    cumulative: Vec<f64>,
}

impl WeightTable {
    /// Accumulate weights in candidate order
    pub fn new(weights: &[f64]) -> Self {
        let mut cumulative = Vec::with_capacity(weights.len());
        let mut running = 0.0;
        for &weight in weights {
            running += weight;
            cumulative.push(running);
        }
        Self { cumulative }
    }

    /// Total weight of all candidates
    pub fn total(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Whether the table holds no candidates
    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// Index of the first candidate whose cumulative weight strictly
    /// exceeds `draw`
    ///
    /// `draw` is expected in `[0, total)`; a draw at or beyond the total
    /// selects the last candidate.
    pub fn pick(&self, draw: f64) -> usize {
        let index = self
            .cumulative
            .partition_point(|&cumulative| cumulative <= draw);
        index.min(self.cumulative.len().saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::WeightTable;

    #[test]
    fn single_candidate_takes_every_draw_below_its_weight() {
        let table = WeightTable::new(&[2.5]);
        assert_eq!(table.pick(0.0), 0);
        assert_eq!(table.pick(1.3), 0);
        assert_eq!(table.pick(2.499), 0);
        assert!((table.total() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn boundary_draw_belongs_to_the_next_candidate() {
        let table = WeightTable::new(&[1.0, 2.0]);
        assert_eq!(table.pick(0.999), 0);
        // Cumulative weight 1.0 does not strictly exceed a draw of 1.0
        assert_eq!(table.pick(1.0), 1);
        assert_eq!(table.pick(2.9), 1);
    }

    #[test]
    fn out_of_range_draw_clamps_to_the_last_candidate() {
        let table = WeightTable::new(&[1.0, 1.0]);
        assert_eq!(table.pick(2.0), 1);
        assert_eq!(table.pick(10.0), 1);
    }

    #[test]
    fn empty_table_reports_zero_total() {
        let table = WeightTable::new(&[]);
        assert!(table.is_empty());
        assert!(table.total().abs() < f64::EPSILON);
    }
}
