//! FFT wrapper with windowing functions

use rustfft::{FftPlanner, num_complex::Complex};
use std::f64::consts::PI;
use std::sync::Arc;

/// Window function types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Window {
    /// Rectangular (no windowing)
    #[default]
    Rectangular,
    /// Hann window (raised cosine)
    Hann,
    /// Hamming window
    Hamming,
    /// Blackman window
    Blackman,
}

impl Window {
    /// Apply window to a buffer
    pub fn apply(&self, buffer: &mut [f64]) {
        let n = buffer.len() as f64;
        match self {
            Window::Rectangular => {}
            Window::Hann => {
                for (i, sample) in buffer.iter_mut().enumerate() {
                    *sample *= 0.5 * (1.0 - (2.0 * PI * i as f64 / n).cos());
                }
            }
            Window::Hamming => {
                for (i, sample) in buffer.iter_mut().enumerate() {
                    *sample *= 0.54 - 0.46 * (2.0 * PI * i as f64 / n).cos();
                }
            }
            Window::Blackman => {
                for (i, sample) in buffer.iter_mut().enumerate() {
                    let x = 2.0 * PI * i as f64 / n;
                    *sample *= 0.42 - 0.5 * x.cos() + 0.08 * (2.0 * x).cos();
                }
            }
        }
    }

    /// Get window coefficients
    pub fn coefficients(&self, size: usize) -> Vec<f64> {
        let mut coeffs = vec![1.0; size];
        self.apply(&mut coeffs);
        coeffs
    }

    /// Mean of the window coefficients.
    ///
    /// Dividing a windowed magnitude by this restores the amplitude of a
    /// sinusoid centred on a bin. 1.0 for [`Window::Rectangular`].
    pub fn coherent_gain(&self, size: usize) -> f64 {
        if size == 0 {
            return 1.0;
        }
        self.coefficients(size).iter().sum::<f64>() / size as f64
    }

    /// Parse a window name (`rect`, `hann`, `hamming`, `blackman`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "rect" | "rectangular" | "none" => Some(Window::Rectangular),
            "hann" | "hanning" => Some(Window::Hann),
            "hamming" => Some(Window::Hamming),
            "blackman" => Some(Window::Blackman),
            _ => None,
        }
    }
}

/// Forward FFT processor for a fixed size
pub struct Fft {
    fft: Arc<dyn rustfft::Fft<f64>>,
    size: usize,
}

impl Fft {
    /// Create a new FFT processor for the given size
    pub fn new(size: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(size);
        Self { fft, size }
    }

    /// Get FFT size
    pub fn size(&self) -> usize {
        self.size
    }

    /// Perform forward FFT on real input
    ///
    /// Input is zero-padded or truncated to the FFT size. Returns all `size`
    /// complex bins, unnormalized.
    pub fn forward(&self, input: &[f64]) -> Vec<Complex<f64>> {
        let mut buffer: Vec<Complex<f64>> =
            input.iter().map(|&x| Complex::new(x, 0.0)).collect();
        buffer.resize(self.size, Complex::new(0.0, 0.0));

        self.fft.process(&mut buffer);
        buffer
    }
}

/// Compute magnitude spectrum in dB
pub fn magnitude_db(magnitudes: &[f64]) -> Vec<f64> {
    magnitudes
        .iter()
        .map(|&mag| 20.0 * mag.max(1e-10).log10())
        .collect()
}
