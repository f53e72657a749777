use logic_canvas::core::analysis::RuleChecker;
use logic_canvas::core::components::{FlipFlopType, GateType, InputType, OutputType};
use logic_canvas::core::geometry::{to_logic_space, to_screen_space, ContainerRect};
use logic_canvas::{
    CircuitAnalyzer, CircuitEditor, CircuitGraph, ComponentId, ComponentKind, ComponentOptions, Point,
    ValidationResult,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn place(editor: &mut CircuitEditor, kind: ComponentKind, x: f64, y: f64) -> ComponentId {
    editor.place_component(kind, x, y, ComponentOptions::new()).id
}

fn wire(editor: &mut CircuitEditor, from: &ComponentId, out: &str, to: &ComponentId, input: &str) -> bool {
    editor.click_port(from.output(out));
    editor.click_port(to.input(input)).is_some()
}

#[test]
fn test_and_gate_with_variable_input() {
    init_logging();
    let mut editor = CircuitEditor::default();

    let gate = editor.place_component(ComponentKind::Gate(GateType::And), 0.0, 0.0, ComponentOptions::new());
    assert_eq!(gate.input_ports.len(), 2);
    assert_eq!(gate.output_ports.len(), 1);

    let input = place(&mut editor, ComponentKind::Input(InputType::Variable), -100.0, 0.0);
    assert!(wire(&mut editor, &input, "out", &gate.id, "in0"));

    let graph = editor.to_graph();
    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.edges.len(), 1);
    assert_eq!(graph.edges[0].source, input);
    assert_eq!(graph.edges[0].target, gate.id);
    assert!(!CircuitAnalyzer::has_cycle(&graph));
}

#[test]
fn test_three_gate_loop_is_cyclic() {
    init_logging();
    let mut editor = CircuitEditor::default();
    let a = place(&mut editor, ComponentKind::Gate(GateType::Or), 0.0, 0.0);
    let b = place(&mut editor, ComponentKind::Gate(GateType::Or), 100.0, 0.0);
    let c = place(&mut editor, ComponentKind::Gate(GateType::Or), 200.0, 0.0);

    assert!(wire(&mut editor, &a, "out", &b, "in0"));
    assert!(wire(&mut editor, &b, "out", &c, "in0"));
    assert!(!editor.has_cycle());
    assert!(wire(&mut editor, &c, "out", &a, "in0"));
    assert!(editor.has_cycle());

    let report = editor.analyze("decoder");
    assert!(report.has_cycle);
    assert_eq!(report.stage_count, None);
    assert!(!report.validation.is_valid);
}

#[test]
fn test_cardinality_for_every_kind() {
    let mut editor = CircuitEditor::default();
    let expectations: Vec<(ComponentKind, usize, usize)> = vec![
        (ComponentKind::Gate(GateType::And), 2, 1),
        (ComponentKind::Gate(GateType::Or), 2, 1),
        (ComponentKind::Gate(GateType::Not), 1, 1),
        (ComponentKind::Gate(GateType::Nand), 2, 1),
        (ComponentKind::Gate(GateType::Nor), 2, 1),
        (ComponentKind::Gate(GateType::Xor), 2, 1),
        (ComponentKind::Gate(GateType::Xnor), 2, 1),
        (ComponentKind::FlipFlop(FlipFlopType::D), 2, 2),
        (ComponentKind::FlipFlop(FlipFlopType::Jk), 3, 2),
        (ComponentKind::FlipFlop(FlipFlopType::Sr), 3, 2),
        (ComponentKind::FlipFlop(FlipFlopType::T), 2, 2),
        (ComponentKind::Input(InputType::High), 0, 1),
        (ComponentKind::Input(InputType::Low), 0, 1),
        (ComponentKind::Input(InputType::Clock), 0, 1),
        (ComponentKind::Input(InputType::Variable), 0, 1),
        (ComponentKind::Output(OutputType::Led), 1, 0),
        (ComponentKind::Output(OutputType::Variable), 1, 0),
    ];

    for (kind, inputs, outputs) in expectations {
        let c = editor.place_component(kind, 0.0, 0.0, ComponentOptions::new());
        assert_eq!(c.input_ports.len(), inputs, "{}", kind);
        assert_eq!(c.output_ports.len(), outputs, "{}", kind);

        for _ in 0..10 {
            editor.remove_input_port(&c.id);
        }
        let remaining = editor.component(&c.id).unwrap().input_ports.len();
        assert_eq!(remaining, inputs, "{}", kind);
    }
}

#[test]
fn test_wiring_never_duplicates_or_double_drives() {
    let mut editor = CircuitEditor::default();
    let a = place(&mut editor, ComponentKind::Input(InputType::High), 0.0, 0.0);
    let b = place(&mut editor, ComponentKind::Input(InputType::Low), 0.0, 60.0);
    let gate = place(&mut editor, ComponentKind::Gate(GateType::Xnor), 100.0, 0.0);

    assert!(wire(&mut editor, &a, "out", &gate, "in0"));
    assert!(!wire(&mut editor, &a, "out", &gate, "in0"));
    assert!(!wire(&mut editor, &b, "out", &gate, "in0"));

    // Drawn from the input side
    editor.click_port(gate.input("in1"));
    let connection = editor.click_port(b.output("out")).expect("legal wire");
    assert_eq!(connection.from.component_id, b);
    assert_eq!(editor.connections().len(), 2);
}

#[test]
fn test_screen_transform_round_trip() {
    let rect = ContainerRect::new(120.0, 64.0, 1024.0, 768.0);
    for scale in [0.1, 0.5, 1.0, 2.5, 5.0] {
        let pan = Point::new(-33.0, 77.5);
        let logic = Point::new(412.25, -18.0);
        let back = to_logic_space(to_screen_space(logic, &rect, pan, scale), &rect, pan, scale);
        approx::assert_relative_eq!(back.x, logic.x, epsilon = 1e-9);
        approx::assert_relative_eq!(back.y, logic.y, epsilon = 1e-9);
    }
}

#[test]
fn test_undo_redo_sequence() {
    let mut editor = CircuitEditor::default();
    let ids: Vec<ComponentId> = (0..4)
        .map(|i| place(&mut editor, ComponentKind::Gate(GateType::And), i as f64 * 80.0, 0.0))
        .collect();

    assert!(editor.undo());
    assert_eq!(editor.components().len(), 3);
    assert!(editor.component(&ids[3]).is_none());

    assert!(editor.redo());
    assert_eq!(editor.components().len(), 4);

    editor.undo();
    place(&mut editor, ComponentKind::Gate(GateType::Or), 0.0, 200.0);
    assert!(!editor.can_redo());
    assert!(editor.component(&ids[3]).is_none());
}

#[test]
fn test_counter_validation() {
    init_logging();
    let mut editor = CircuitEditor::default();
    let clock = place(&mut editor, ComponentKind::Input(InputType::Clock), 0.0, 0.0);
    let high = place(&mut editor, ComponentKind::Input(InputType::High), 0.0, 100.0);
    let ff = place(&mut editor, ComponentKind::FlipFlop(FlipFlopType::T), 100.0, 0.0);
    let led = place(&mut editor, ComponentKind::Output(OutputType::Led), 250.0, 0.0);

    assert!(wire(&mut editor, &high, "out", &ff, "T"));
    assert!(wire(&mut editor, &ff, "Q", &led, "in"));
    let result = editor.validate("counter");
    assert!(!result.is_valid);
    assert!(result.feedback.contains("no clock"));

    assert!(wire(&mut editor, &clock, "out", &ff, "CLK"));
    let report = editor.analyze("counter");
    assert!(report.validation.is_valid, "{}", report.validation.feedback);
    assert!(!report.has_cycle);
    assert_eq!(report.stage_count, Some(3));
}

#[test]
fn test_decoder_validation() {
    let mut editor = CircuitEditor::default();
    let a = editor
        .place_component(
            ComponentKind::Input(InputType::Variable),
            0.0,
            0.0,
            ComponentOptions::new().with_label("A"),
        )
        .id;
    let not = place(&mut editor, ComponentKind::Gate(GateType::Not), 100.0, 0.0);
    let y0 = place(&mut editor, ComponentKind::Output(OutputType::Variable), 200.0, 0.0);
    let y1 = place(&mut editor, ComponentKind::Output(OutputType::Variable), 200.0, 100.0);

    assert!(wire(&mut editor, &a, "out", &not, "in0"));
    assert!(wire(&mut editor, &not, "out", &y0, "in"));
    editor.rename_component(&y1, "Y1");
    let result = editor.validate("decoder");
    assert_eq!(result.feedback, "Output 'Y1' is not connected");

    assert!(wire(&mut editor, &a, "out", &y1, "in"));
    assert!(editor.validate("decoder").is_valid);
}

#[test]
fn test_unknown_and_custom_target_types() {
    let mut editor = CircuitEditor::default();
    let result = editor.validate("multiplexer");
    assert!(!result.is_valid);
    assert_eq!(result.feedback, "No rules registered for circuit type 'multiplexer'");

    let non_empty = |graph: &CircuitGraph| {
        if graph.nodes.is_empty() {
            ValidationResult::invalid("Place at least one component")
        } else {
            ValidationResult::valid("ok")
        }
    };
    assert!(!non_empty.check(&editor.to_graph()).is_valid);
    editor
        .rules_mut()
        .register("multiplexer", Box::new(non_empty))
        .unwrap();
    assert!(editor.rules_mut().register("multiplexer", Box::new(non_empty)).is_err());

    place(&mut editor, ComponentKind::Gate(GateType::And), 0.0, 0.0);
    assert!(editor.validate("multiplexer").is_valid);
}

#[test]
fn test_exported_json_shape() {
    let mut editor = CircuitEditor::default();
    let a = place(&mut editor, ComponentKind::Input(InputType::Clock), 0.0, 0.0);
    let ff = place(&mut editor, ComponentKind::FlipFlop(FlipFlopType::Jk), 100.0, 0.0);
    assert!(wire(&mut editor, &a, "out", &ff, "CLK"));

    let value: serde_json::Value = serde_json::from_str(&editor.export_json().unwrap()).unwrap();
    assert_eq!(value["nodes"][1]["type"], "flipflop");
    assert_eq!(value["nodes"][1]["label"], "JK Flip-Flop");
    assert_eq!(value["nodes"][0]["data"]["state"], true);
    assert_eq!(value["edges"][0]["source"], a.as_str());
    assert_eq!(value["edges"][0]["targetHandle"], "CLK");
}
