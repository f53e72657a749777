//! Port anchor positions derived from a component's kind and bounding box.

use crate::core::components::{Component, ComponentKind, GateType};
use crate::core::types::{Point, PortDirection};

/// Horizontal inset of a NOT gate's single input from the left edge
pub const NOT_INPUT_INSET: f64 = 5.0;

/// Absolute logic-space position of the `index`-th port on one side of a component
///
/// Returns `None` when the component has no such port.
pub fn port_position(component: &Component, index: usize, direction: PortDirection) -> Option<Point> {
    let count = component.ports(direction).len();
    if index >= count {
        return None;
    }

    let (rel_x, rel_y) = relative_anchor(component, index, count, direction);
    Some(component.position.offset(rel_x, rel_y))
}

/// Same as [`port_position`], addressing the port by its ID
pub fn port_position_by_id(component: &Component, port_id: &str, direction: PortDirection) -> Option<Point> {
    let index = component.port_index(port_id, direction)?;
    port_position(component, index, direction)
}

fn relative_anchor(component: &Component, index: usize, count: usize, direction: PortDirection) -> (f64, f64) {
    let w = component.size.width;
    let h = component.size.height;

    match (component.kind, direction) {
        (ComponentKind::Gate(GateType::Not), PortDirection::Input) => (NOT_INPUT_INSET, h / 2.0),
        (ComponentKind::Gate(_), PortDirection::Input) => (0.0, evenly_spaced(index, count) * h),
        (ComponentKind::Gate(_), PortDirection::Output) => (w, h / 2.0),
        (ComponentKind::FlipFlop(_), PortDirection::Input) => (0.0, quarter_spaced(index, count) * h),
        (ComponentKind::FlipFlop(_), PortDirection::Output) => (w, quarter_spaced(index, count) * h),
        (ComponentKind::Output(_), _) => (0.0, h / 2.0),
        (ComponentKind::Input(_), _) => (w, h / 2.0),
    }
}

/// Fraction of the height for port `index` of `count`, spread over the whole edge
fn evenly_spaced(index: usize, count: usize) -> f64 {
    (index + 1) as f64 / (count + 1) as f64
}

/// Fraction of the height for flip-flop ports: first at ¼, last at ¾
fn quarter_spaced(index: usize, count: usize) -> f64 {
    if count <= 1 {
        return 0.5;
    }
    0.25 + 0.5 * index as f64 / (count - 1) as f64
}
