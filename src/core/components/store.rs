use crate::core::components::component::{Component, ComponentOptions};
use crate::core::components::port_specs::{port_layout, PortSpec, DEFAULT_GATE_INPUTS};
use crate::core::components::types::ComponentKind;
use crate::core::config::EditorConfig;
use crate::core::types::{ComponentId, Point, Size};
use log::debug;
use std::sync::Arc;

/// Owns the placed components of a circuit
///
/// The collection is held behind an `Arc` and replaced copy-on-write: any
/// caller still holding the `Arc` returned by [`ComponentStore::components`]
/// keeps seeing the collection as it was.
pub struct ComponentStore {
    components: Arc<Vec<Component>>,
    config: EditorConfig,
}

impl ComponentStore {
    /// Create an empty store
    pub fn new(config: EditorConfig) -> Self {
        Self {
            components: Arc::new(Vec::new()),
            config,
        }
    }

    /// Shared handle to the current collection
    pub fn components(&self) -> Arc<Vec<Component>> {
        Arc::clone(&self.components)
    }

    pub fn as_slice(&self) -> &[Component] {
        &self.components
    }

    pub fn get(&self, id: &ComponentId) -> Option<&Component> {
        self.components.iter().find(|c| &c.id == id)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Place a new component and return a copy of it
    pub fn create(&mut self, kind: ComponentKind, x: f64, y: f64, options: ComponentOptions) -> Component {
        let gate_inputs = options
            .input_count
            .map(|n| n.max(DEFAULT_GATE_INPUTS).min(self.config.max_gate_inputs.max(DEFAULT_GATE_INPUTS)));
        let layout = port_layout(kind, gate_inputs);
        let size = options
            .size
            .unwrap_or_else(|| self.default_size(kind))
            .clamped(self.config.min_component_size);
        let state = kind.default_state().map(|default| options.state.unwrap_or(default));

        let component = Component {
            id: ComponentId::generate(kind.id_prefix()),
            kind,
            position: Point::new(x, y),
            size,
            input_ports: layout.inputs,
            output_ports: layout.outputs,
            state,
            label: options.label,
        };

        debug!("Created component {} ({})", component.id, kind);
        Arc::make_mut(&mut self.components).push(component.clone());
        component
    }

    /// Remove a component
    ///
    /// Connections touching it are not cleaned up here; remove them through the
    /// connection store first.
    pub fn delete(&mut self, id: &ComponentId) -> Option<Component> {
        let index = self.index_of(id)?;
        let removed = Arc::make_mut(&mut self.components).remove(index);
        debug!("Deleted component {}", id);
        Some(removed)
    }

    /// Copy a component next to the original
    pub fn duplicate(&mut self, id: &ComponentId) -> Option<Component> {
        let source = self.get(id)?;
        let offset = self.config.duplicate_offset;
        let copy = Component {
            id: ComponentId::generate(source.kind.id_prefix()),
            position: source.position.offset(offset, offset),
            label: source.label.as_ref().map(|l| format!("{}_copy", l)),
            ..source.clone()
        };

        debug!("Duplicated component {} as {}", id, copy.id);
        Arc::make_mut(&mut self.components).push(copy.clone());
        Some(copy)
    }

    /// Append one input to a multi-input gate
    pub fn add_input_port(&mut self, id: &ComponentId) -> bool {
        let max = self.config.max_gate_inputs;
        self.update(id, |c| {
            if !c.kind.is_multi_input_gate() || c.input_ports.len() >= max {
                return false;
            }
            let next = (0..)
                .map(PortSpec::gate_input)
                .find(|p| !c.input_ports.iter().any(|existing| existing.id == p.id))
                .unwrap_or_else(|| PortSpec::gate_input(c.input_ports.len()));
            c.input_ports.push(next);
            true
        })
    }

    /// Drop the last input of a multi-input gate
    ///
    /// Gates keep at least two inputs; no component is ever left without one.
    pub fn remove_input_port(&mut self, id: &ComponentId) -> bool {
        self.update(id, |c| {
            if !c.kind.is_multi_input_gate() || c.input_ports.len() <= DEFAULT_GATE_INPUTS {
                return false;
            }
            c.input_ports.pop();
            true
        })
    }

    /// Grow or shrink a component, clamped to the configured minimum
    pub fn resize(&mut self, id: &ComponentId, delta_width: f64, delta_height: f64) -> bool {
        let min = self.config.min_component_size;
        self.update(id, |c| {
            let next = Size::new(c.size.width + delta_width, c.size.height + delta_height).clamped(min);
            if next == c.size {
                return false;
            }
            c.size = next;
            true
        })
    }

    /// Flip the state of an input or LED, returning the new state
    pub fn toggle_state(&mut self, id: &ComponentId) -> Option<bool> {
        let toggled = self.update(id, |c| {
            if !c.kind.supports_toggle() {
                return false;
            }
            c.state = Some(!c.state.unwrap_or(false));
            true
        });
        if toggled {
            self.get(id).and_then(|c| c.state)
        } else {
            None
        }
    }

    /// Set the label of a variable input or output
    pub fn rename(&mut self, id: &ComponentId, label: &str) -> bool {
        self.update(id, |c| {
            if !c.kind.supports_rename() || c.label.as_deref() == Some(label) {
                return false;
            }
            c.label = Some(label.to_string());
            true
        })
    }

    /// Move a component's top-left corner
    pub fn move_to(&mut self, id: &ComponentId, x: f64, y: f64) -> bool {
        self.update(id, |c| {
            let next = Point::new(x, y);
            if next == c.position {
                return false;
            }
            c.position = next;
            true
        })
    }

    /// Swap in a whole collection, e.g. from a history snapshot
    pub fn replace_all(&mut self, components: Arc<Vec<Component>>) {
        self.components = components;
    }

    pub fn clear(&mut self) {
        self.components = Arc::new(Vec::new());
    }

    fn default_size(&self, kind: ComponentKind) -> Size {
        match kind {
            ComponentKind::Gate(_) => self.config.gate_size,
            ComponentKind::FlipFlop(_) => self.config.flipflop_size,
            ComponentKind::Input(_) | ComponentKind::Output(_) => self.config.io_size,
        }
    }

    fn index_of(&self, id: &ComponentId) -> Option<usize> {
        self.components.iter().position(|c| &c.id == id)
    }

    /// Apply an edit to one component; `edit` returns false to leave the store untouched
    fn update<F>(&mut self, id: &ComponentId, edit: F) -> bool
    where
        F: FnOnce(&mut Component) -> bool,
    {
        let Some(index) = self.index_of(id) else {
            debug!("Ignoring edit of unknown component {}", id);
            return false;
        };

        let mut candidate = self.components[index].clone();
        if !edit(&mut candidate) {
            debug!("Edit of component {} rejected", id);
            return false;
        }
        Arc::make_mut(&mut self.components)[index] = candidate;
        true
    }
}

impl Default for ComponentStore {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
