//! Configuration for a circuit editing session
//!
//! Tunables shared by the component store, the history manager and the
//! viewport: size limits, history depth and zoom bounds.

use crate::core::types::Size;

/// Configuration for editor behavior
///
/// Holds the limits applied to structural edits and the defaults used when
/// placing new components.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Maximum number of snapshots retained by the history manager
    pub history_limit: usize,
    /// Pixel offset applied to both axes when duplicating a component
    pub duplicate_offset: f64,
    /// Lower bound for component width and height
    pub min_component_size: f64,
    /// Upper bound for the number of inputs on a multi-input gate
    pub max_gate_inputs: usize,
    /// Smallest allowed viewport scale
    pub zoom_min: f64,
    /// Largest allowed viewport scale
    pub zoom_max: f64,
    /// Default bounding box for logic gates
    pub gate_size: Size,
    /// Default bounding box for flip-flops
    pub flipflop_size: Size,
    /// Default bounding box for input and output pins
    pub io_size: Size,
}

impl EditorConfig {
    /// Create a new editor configuration with default values
    ///
    /// Defaults keep 20 history snapshots and clamp components to 30×30
    pub fn new() -> Self {
        Self {
            history_limit: 20,
            duplicate_offset: 20.0,
            min_component_size: 30.0,
            max_gate_inputs: 8,
            zoom_min: 0.1,
            zoom_max: 5.0,
            gate_size: Size::new(60.0, 50.0),
            flipflop_size: Size::new(80.0, 80.0),
            io_size: Size::new(40.0, 40.0),
        }
    }

    /// Set the number of snapshots kept for undo/redo
    ///
    /// # Arguments
    /// * `limit` - Maximum retained snapshots, at least 1
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit.max(1);
        self
    }

    /// Set the offset used by component duplication
    pub fn with_duplicate_offset(mut self, offset: f64) -> Self {
        self.duplicate_offset = offset;
        self
    }

    /// Set the minimum component dimension
    pub fn with_min_component_size(mut self, min: f64) -> Self {
        self.min_component_size = min;
        self
    }

    /// Set the maximum number of inputs a gate may grow to
    pub fn with_max_gate_inputs(mut self, max: usize) -> Self {
        self.max_gate_inputs = max.max(2);
        self
    }

    /// Set the zoom bounds for the viewport
    ///
    /// # Note
    /// Bounds are swapped if given in the wrong order
    pub fn with_zoom_limits(mut self, min: f64, max: f64) -> Self {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.zoom_min = lo;
        self.zoom_max = hi;
        self
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EditorConfig::default();
        assert_eq!(config.history_limit, 20);
        assert_eq!(config.min_component_size, 30.0);
        assert_eq!(config.max_gate_inputs, 8);
    }

    #[test]
    fn test_config_builder() {
        let config = EditorConfig::new()
            .with_history_limit(5)
            .with_duplicate_offset(10.0)
            .with_zoom_limits(4.0, 0.5);

        assert_eq!(config.history_limit, 5);
        assert_eq!(config.duplicate_offset, 10.0);
        assert_eq!(config.zoom_min, 0.5);
        assert_eq!(config.zoom_max, 4.0);
    }

    #[test]
    fn test_history_limit_never_zero() {
        let config = EditorConfig::new().with_history_limit(0);
        assert_eq!(config.history_limit, 1);
    }
}
