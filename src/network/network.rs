use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::activation::sigmoid::{sigmoid, sigmoid_derivative};
use crate::loss::quadratic::QuadraticLoss;

/// A feedforward network with exactly one hidden layer of sigmoid units.
///
/// The instance owns all learnable parameters: two row-major weight
/// matrices and one scalar bias per layer (broadcast across that layer's
/// units). The hidden and output activation buffers are scratch state,
/// recomputed by every forward pass and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    pub(super) input_size: usize,
    pub(super) hidden_size: usize,
    pub(super) output_size: usize,
    /// Input→hidden weights; row = hidden unit, column = input feature.
    pub(super) input_weights: Vec<f64>,
    /// Hidden→output weights; row = output unit, column = hidden unit.
    pub(super) output_weights: Vec<f64>,
    pub(super) hidden_bias: f64,
    pub(super) output_bias: f64,
    #[serde(skip)]
    pub(super) hidden: Vec<f64>,
    #[serde(skip)]
    pub(super) output: Vec<f64>,
}

impl Network {
    /// Builds a network with every weight and bias drawn uniformly from
    /// [-0.5, 0.5).
    ///
    /// # Panics
    /// Panics if any dimension is zero.
    pub fn new(input_size: usize, hidden_size: usize, output_size: usize) -> Network {
        assert!(
            input_size > 0 && hidden_size > 0 && output_size > 0,
            "layer sizes must be at least 1"
        );

        let mut rng = rand::thread_rng();
        let input_weights = (0..hidden_size * input_size)
            .map(|_| rng.gen::<f64>() - 0.5)
            .collect();
        let output_weights = (0..output_size * hidden_size)
            .map(|_| rng.gen::<f64>() - 0.5)
            .collect();

        Network {
            input_size,
            hidden_size,
            output_size,
            input_weights,
            output_weights,
            hidden_bias: rng.gen::<f64>() - 0.5,
            output_bias: rng.gen::<f64>() - 0.5,
            hidden: vec![0.0; hidden_size],
            output: vec![0.0; output_size],
        }
    }

    /// Runs forward propagation only and returns the output activations.
    ///
    /// The slice borrows the internal output buffer; it reflects this call
    /// until the next forward pass on the same instance.
    pub fn predict(&mut self, input: &[f64]) -> &[f64] {
        self.forward(input);
        &self.output
    }

    /// One stochastic gradient-descent step on a single sample.
    ///
    /// Runs a forward pass, corrects every weight in place, and returns
    /// the quadratic loss of the pre-update output against `target`.
    /// Biases are not touched by the gradient step.
    pub fn train(&mut self, input: &[f64], target: &[f64], rate: f64) -> f64 {
        assert_eq!(
            target.len(),
            self.output_size,
            "target length must match the output layer"
        );
        self.forward(input);
        self.backward(input, target, rate);
        QuadraticLoss::loss(&self.output, target)
    }

    /// Number of input features.
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Number of hidden units.
    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    /// Number of output units.
    pub fn output_size(&self) -> usize {
        self.output_size
    }

    /// Forward propagation: hidden then output activations, both sigmoid.
    fn forward(&mut self, input: &[f64]) {
        assert_eq!(
            input.len(),
            self.input_size,
            "input length must match the input layer"
        );

        for i in 0..self.hidden_size {
            let mut sum = 0.0;
            for j in 0..self.input_size {
                sum += input[j] * self.input_weights[i * self.input_size + j];
            }
            self.hidden[i] = sigmoid(sum + self.hidden_bias);
        }
        for i in 0..self.output_size {
            let mut sum = 0.0;
            for j in 0..self.hidden_size {
                sum += self.hidden[j] * self.output_weights[i * self.hidden_size + j];
            }
            self.output[i] = sigmoid(sum + self.output_bias);
        }
    }

    /// Closed-form backpropagation for the single hidden layer.
    ///
    /// The hidden→output corrections happen inside the same loop that
    /// accumulates each hidden unit's error sum, so both layers see the
    /// unmodified forward-pass activations.
    fn backward(&mut self, input: &[f64], target: &[f64], rate: f64) {
        let error = QuadraticLoss::derivative(&self.output, target);

        for i in 0..self.hidden_size {
            let mut sum = 0.0;
            for j in 0..self.output_size {
                let delta = error[j] * sigmoid_derivative(self.output[j]);
                sum += delta * self.output_weights[j * self.hidden_size + i];
                self.output_weights[j * self.hidden_size + i] -= rate * delta * self.hidden[i];
            }
            for j in 0..self.input_size {
                self.input_weights[i * self.input_size + j] -=
                    rate * sum * sigmoid_derivative(self.hidden[i]) * input[j];
            }
        }
    }
}

/// Prints a row of values space-separated on one line.
/// Handy for dumping predictions next to their targets.
pub fn print_values(values: &[f64]) {
    let rendered: Vec<String> = values.iter().map(|v| format!("{v:.6}")).collect();
    println!("{}", rendered.join(" "));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predictions_stay_in_sigmoid_range() {
        let mut network = Network::new(3, 5, 2);
        let output = network.predict(&[10.0, -10.0, 0.0]);
        for &o in output {
            assert!(o > 0.0 && o < 1.0, "output {o} out of (0, 1)");
        }
    }

    #[test]
    fn predict_is_deterministic() {
        let mut network = Network::new(4, 3, 2);
        let input = [0.1, 0.9, -0.4, 0.5];
        let first = network.predict(&input).to_vec();
        let second = network.predict(&input).to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn repeated_training_lowers_loss_on_one_sample() {
        // Averaged over independent random initializations so a single
        // degenerate draw cannot flip the comparison.
        let input = [0.2, 0.8, 0.5];
        let target = [1.0, 0.0];

        let mut before = 0.0;
        let mut after = 0.0;
        for _ in 0..10 {
            let mut network = Network::new(3, 4, 2);
            before += network.train(&input, &target, 0.5);
            for _ in 0..49 {
                network.train(&input, &target, 0.5);
            }
            after += network.train(&input, &target, 0.5);
        }
        assert!(
            after < before,
            "loss did not drop: before={before} after={after}"
        );
    }

    #[test]
    fn train_reports_pre_update_loss() {
        let mut network = Network::new(2, 3, 1);
        let input = [0.4, 0.6];
        let target = [1.0];

        let predicted = network.predict(&input).to_vec();
        let expected_loss = QuadraticLoss::loss(&predicted, &target);
        let reported = network.train(&input, &target, 0.3);
        assert!((reported - expected_loss).abs() < 1e-12);
    }

    #[test]
    fn training_leaves_biases_untouched() {
        let mut network = Network::new(2, 3, 1);
        let hidden_bias = network.hidden_bias;
        let output_bias = network.output_bias;
        network.train(&[0.1, 0.2], &[0.7], 0.5);
        assert_eq!(network.hidden_bias, hidden_bias);
        assert_eq!(network.output_bias, output_bias);
    }

    #[test]
    #[should_panic(expected = "input length must match")]
    fn predict_rejects_wrong_input_width() {
        let mut network = Network::new(3, 2, 1);
        network.predict(&[1.0, 2.0]);
    }

    #[test]
    #[should_panic(expected = "layer sizes must be at least 1")]
    fn zero_dimension_is_rejected() {
        Network::new(0, 2, 1);
    }
}
