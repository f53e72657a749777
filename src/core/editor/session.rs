use crate::core::analysis::{AnalysisReport, CircuitAnalyzer, CircuitGraph, RuleBook, ValidationResult};
use crate::core::components::{Component, ComponentKind, ComponentOptions, ComponentStore};
use crate::core::config::EditorConfig;
use crate::core::connections::{Connection, ConnectionStore};
use crate::core::editor::shortcuts::EditorShortcut;
use crate::core::geometry::{ContainerRect, Viewport};
use crate::core::history::{HistoryManager, Snapshot};
use crate::core::types::{ComponentId, ConnectionId, Point, PortRef};
use log::{debug, info};
use std::sync::Arc;

/// One editing session: component and connection stores, undo history and viewport
///
/// Every completed edit commits a history snapshot. Drags are the exception:
/// [`CircuitEditor::move_component`] only updates positions and
/// [`CircuitEditor::finish_drag`] commits once the pointer is released.
pub struct CircuitEditor {
    config: EditorConfig,
    components: ComponentStore,
    connections: ConnectionStore,
    history: HistoryManager,
    viewport: Viewport,
    rules: RuleBook,
}

impl CircuitEditor {
    /// Create an empty editor with the built-in rule book
    pub fn new(config: EditorConfig) -> Self {
        let mut editor = Self {
            components: ComponentStore::new(config.clone()),
            connections: ConnectionStore::new(),
            history: HistoryManager::new(config.history_limit),
            viewport: Viewport::new(&config),
            rules: RuleBook::with_builtin_rules(),
            config,
        };
        editor.commit();
        editor
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn components(&self) -> &[Component] {
        self.components.as_slice()
    }

    pub fn connections(&self) -> &[Connection] {
        self.connections.as_slice()
    }

    pub fn component(&self, id: &ComponentId) -> Option<&Component> {
        self.components.get(id)
    }

    pub fn connection(&self, id: &ConnectionId) -> Option<&Connection> {
        self.connections.get(id)
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn rules_mut(&mut self) -> &mut RuleBook {
        &mut self.rules
    }

    /// Port a wire drag started from, if one is in progress
    pub fn pending_connection(&self) -> Option<&PortRef> {
        self.connections.pending()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Place a component and commit
    pub fn place_component(&mut self, kind: ComponentKind, x: f64, y: f64, options: ComponentOptions) -> Component {
        let component = self.components.create(kind, x, y, options);
        self.commit();
        component
    }

    /// Delete a component together with every wire touching it
    ///
    /// Wires go first so no connection ever references a missing component.
    pub fn delete_component(&mut self, id: &ComponentId) -> bool {
        if self.components.get(id).is_none() {
            debug!("Ignoring delete of unknown component {}", id);
            return false;
        }
        self.connections.delete_connections_for(id);
        self.components.delete(id);
        self.commit();
        true
    }

    pub fn duplicate_component(&mut self, id: &ComponentId) -> Option<Component> {
        let copy = self.components.duplicate(id)?;
        self.commit();
        Some(copy)
    }

    pub fn add_input_port(&mut self, id: &ComponentId) -> bool {
        if !self.components.add_input_port(id) {
            return false;
        }
        self.connections.refresh_after_structural_change(self.components.as_slice());
        self.commit();
        true
    }

    /// Remove the last input of a gate, dropping the wire it carried
    pub fn remove_input_port(&mut self, id: &ComponentId) -> bool {
        if !self.components.remove_input_port(id) {
            return false;
        }
        self.connections.refresh_after_structural_change(self.components.as_slice());
        self.commit();
        true
    }

    pub fn resize_component(&mut self, id: &ComponentId, delta_width: f64, delta_height: f64) -> bool {
        if !self.components.resize(id, delta_width, delta_height) {
            return false;
        }
        self.connections.refresh_after_move(self.components.as_slice(), id);
        self.commit();
        true
    }

    pub fn toggle_state(&mut self, id: &ComponentId) -> Option<bool> {
        let state = self.components.toggle_state(id)?;
        self.commit();
        Some(state)
    }

    pub fn rename_component(&mut self, id: &ComponentId, label: &str) -> bool {
        if !self.components.rename(id, label) {
            return false;
        }
        self.commit();
        true
    }

    /// Move a component during a drag; nothing is committed until [`finish_drag`](Self::finish_drag)
    pub fn move_component(&mut self, id: &ComponentId, x: f64, y: f64) -> bool {
        if !self.components.move_to(id, x, y) {
            return false;
        }
        self.connections.refresh_after_move(self.components.as_slice(), id);
        true
    }

    /// Move a component so its top-left corner sits under a screen-space pointer
    pub fn drag_component_to(&mut self, id: &ComponentId, pointer: Point, container: &ContainerRect) -> bool {
        let target = self.pointer_to_logic(pointer, container);
        self.move_component(id, target.x, target.y)
    }

    /// Commit the positions reached by a drag
    pub fn finish_drag(&mut self) -> bool {
        self.commit()
    }

    /// Handle a click on a port
    ///
    /// The first click starts a wire; the second completes it, committing on
    /// success. An illegal second click just drops the pending start.
    pub fn click_port(&mut self, port: PortRef) -> Option<Connection> {
        if self.connections.pending().is_none() {
            self.connections.begin_connection(port);
            return None;
        }
        let connection = self
            .connections
            .complete_connection(self.components.as_slice(), port)?;
        self.commit();
        Some(connection)
    }

    pub fn cancel_connection(&mut self) {
        self.connections.cancel_connection();
    }

    pub fn delete_connection(&mut self, id: &ConnectionId) -> bool {
        if self.connections.delete_connection(id).is_none() {
            return false;
        }
        self.commit();
        true
    }

    /// Remove every component and wire
    pub fn clear_all(&mut self) {
        info!(
            "Clearing circuit ({} components, {} connections)",
            self.components.len(),
            self.connections.len()
        );
        self.connections.clear();
        self.components.clear();
        self.commit();
    }

    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    pub fn handle_shortcut(&mut self, shortcut: EditorShortcut) -> bool {
        match shortcut {
            EditorShortcut::Undo => self.undo(),
            EditorShortcut::Redo => self.redo(),
        }
    }

    /// Map a key press to undo/redo and run it; false if unmapped or nothing to do
    pub fn handle_key(&mut self, key: &str, ctrl: bool, shift: bool) -> bool {
        EditorShortcut::from_key(key, ctrl, shift)
            .map(|shortcut| self.handle_shortcut(shortcut))
            .unwrap_or(false)
    }

    pub fn pointer_to_logic(&self, pointer: Point, container: &ContainerRect) -> Point {
        self.viewport.to_logic(pointer, container)
    }

    pub fn to_graph(&self) -> CircuitGraph {
        CircuitAnalyzer::to_graph(self.components(), self.connections())
    }

    pub fn has_cycle(&self) -> bool {
        CircuitAnalyzer::has_cycle(&self.to_graph())
    }

    pub fn validate(&self, target_type: &str) -> ValidationResult {
        CircuitAnalyzer::validate(self.components(), self.connections(), target_type, &self.rules)
    }

    pub fn analyze(&self, target_type: &str) -> AnalysisReport {
        CircuitAnalyzer::analyze(self.components(), self.connections(), target_type, &self.rules)
    }

    pub fn export_json(&self) -> Result<String, String> {
        self.to_graph().to_json()
    }

    /// Replace the circuit with an exported graph; the import is undoable
    pub fn import_json(&mut self, json: &str) -> Result<(), String> {
        let graph = CircuitGraph::from_json(json)?;
        let (components, connections) = graph.to_circuit(&self.config)?;
        info!(
            "Imported circuit with {} components and {} connections",
            components.len(),
            connections.len()
        );
        self.connections.replace_all(Arc::new(connections));
        self.components.replace_all(Arc::new(components));
        self.commit();
        Ok(())
    }

    fn commit(&mut self) -> bool {
        self.history.commit(Snapshot::new(
            self.components.components(),
            self.connections.connections(),
        ))
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.components.replace_all(snapshot.components);
        self.connections.replace_all(snapshot.connections);
    }
}

impl Default for CircuitEditor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
