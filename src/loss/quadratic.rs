pub struct QuadraticLoss;

impl QuadraticLoss {
    /// Total loss for one sample: Σ 0.5 · (predicted - expected)².
    ///
    /// Summed over output units, not averaged; epoch aggregation divides
    /// by the sample count when a mean is wanted.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| 0.5 * (a - b) * (a - b))
            .sum()
    }

    /// Per-output gradient: predicted - expected
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| a - b)
            .collect()
    }
}
