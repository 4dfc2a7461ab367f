use std::f64::consts::E;

/// Logistic sigmoid σ(z) = 1 / (1 + e⁻ᶻ).  Maps any finite input into (0, 1).
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + E.powf(-z))
}

/// Sigmoid derivative expressed through the activation value:
/// σ'(z) = a · (1 - a) where a = σ(z).
///
/// `a` must already be an output of [`sigmoid`]; backprop only ever has
/// the stored activations in hand, not the pre-activation sums.
pub fn sigmoid_derivative(a: f64) -> f64 {
    a * (1.0 - a)
}
