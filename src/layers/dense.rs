use serde::{Serialize, Deserialize};

use crate::{math::matrix::Matrix, activation::activation::ActivationFunction};

/// A fully-connected layer: `a = σ(x · W + b)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer{
    pub size: usize,
    /// Shape `(input_size, size)`.
    pub weights: Matrix,
    pub biases: Vec<f64>,
    pub activator: ActivationFunction
}

impl Layer {
    pub fn input_size(&self) -> usize {
        self.weights.rows
    }

    pub fn forward(&self, input: &[f64]) -> Vec<f64> {
        let mut z = self.weights.left_mul(input);
        for (v, b) in z.iter_mut().zip(&self.biases) {
            *v += b;
        }
        self.activator.apply(&mut z);
        z
    }
}
