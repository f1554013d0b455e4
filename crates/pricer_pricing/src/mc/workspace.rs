//! Pre-allocated workspace buffers for Monte Carlo simulation.
//!
//! - `normals`: n_paths standard normal draws, overwritten in place with terminal spots
//! - `payoffs`: n_paths payoff values

/// Pre-allocated workspace for terminal-value simulation.
///
/// Reused across pricing calls; buffers only grow.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::PathWorkspace;
///
/// let mut workspace = PathWorkspace::new(1000);
/// workspace.ensure_capacity(5000);
/// assert_eq!(workspace.size(), 5000);
/// assert_eq!(workspace.normals_mut().len(), 5000);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathWorkspace {
    normals: Vec<f64>,
    payoffs: Vec<f64>,
    size: usize,
}

impl PathWorkspace {
    /// Creates a new workspace sized for `n_paths` trials.
    pub fn new(n_paths: usize) -> Self {
        Self {
            normals: vec![0.0; n_paths],
            payoffs: vec![0.0; n_paths],
            size: n_paths,
        }
    }

    /// Sets the logical size, growing the buffers if needed.
    pub fn ensure_capacity(&mut self, n_paths: usize) {
        if n_paths > self.normals.len() {
            self.normals.resize(n_paths, 0.0);
            self.payoffs.resize(n_paths, 0.0);
        }
        self.size = n_paths;
    }

    /// Returns the logical number of paths.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the allocated capacity in paths.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.normals.len()
    }

    /// Mutable view of the draw buffer (logical size).
    #[inline]
    pub fn normals_mut(&mut self) -> &mut [f64] {
        &mut self.normals[..self.size]
    }

    /// Draw buffer and payoff buffer, both at logical size.
    #[inline]
    pub fn split_mut(&mut self) -> (&mut [f64], &mut [f64]) {
        (&mut self.normals[..self.size], &mut self.payoffs[..self.size])
    }

    /// Payoff buffer (logical size).
    #[inline]
    pub fn payoffs(&self) -> &[f64] {
        &self.payoffs[..self.size]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sizes() {
        let ws = PathWorkspace::new(100);
        assert_eq!(ws.size(), 100);
        assert_eq!(ws.capacity(), 100);
        assert_eq!(ws.payoffs().len(), 100);
    }

    #[test]
    fn test_shrinking_keeps_capacity() {
        let mut ws = PathWorkspace::new(100);
        ws.ensure_capacity(10);
        assert_eq!(ws.size(), 10);
        assert_eq!(ws.capacity(), 100);
        assert_eq!(ws.normals_mut().len(), 10);
    }

    #[test]
    fn test_growing() {
        let mut ws = PathWorkspace::default();
        ws.ensure_capacity(32);
        let (normals, payoffs) = ws.split_mut();
        assert_eq!(normals.len(), 32);
        assert_eq!(payoffs.len(), 32);
    }
}
