//! Tests for the graph model, node factories and the mutation API.
mod common;
use common::*;
use kairo::error::LiteralError;
use kairo::prelude::*;
use kairo::types::Rotator;

fn connector_names(graph: &Graph, node: NodeId) -> (Vec<String>, Vec<String>) {
    let node = graph.node(node).unwrap();
    let inputs = node
        .inputs()
        .iter()
        .map(|id| graph.input(*id).unwrap().name().to_string())
        .collect();
    let outputs = node
        .outputs()
        .iter()
        .map(|id| graph.output(*id).unwrap().name().to_string())
        .collect();
    (inputs, outputs)
}

#[test]
fn test_call_factory_connectors() {
    let mut graph = Graph::new("Test");
    let call = graph.add_function_call(compute_health(), None).unwrap();

    let (inputs, outputs) = connector_names(&graph, call);
    assert_eq!(inputs, vec!["Run", "Target"]);
    assert_eq!(outputs, vec!["Done", "Return"]);

    let target = graph.input_named(call, pins::TARGET).unwrap();
    assert_eq!(target.connector_type(), ConnectorType::Object);
    assert_eq!(target.class(), Some(&ClassName::new("Actor")));
    assert!(matches!(graph.node(call).unwrap().kind(), NodeKind::FunctionCall(_)));
}

#[test]
fn test_pure_factory_has_no_execution_connectors() {
    let mut graph = Graph::new("Test");
    let add = graph.add_function_call(add_float(), None).unwrap();

    let (inputs, outputs) = connector_names(&graph, add);
    assert_eq!(inputs, vec!["A", "B"]);
    assert_eq!(outputs, vec!["Return"]);
    assert!(graph.node(add).unwrap().kind().is_pure());
}

#[test]
fn test_unsupported_params_are_skipped() {
    let function = FunctionDescriptor::new("Actor", "Configure")
        .with_param(ParamDescriptor::input("Names", TypeDescriptor::Array {
            inner: Box::new(TypeDescriptor::Name),
        }))
        .with_param(ParamDescriptor::input("Scale", TypeDescriptor::Float))
        .with_param(ParamDescriptor::output("Location", TypeDescriptor::structure("Vector")));

    let mut graph = Graph::new("Test");
    let call = graph.add_function_call(function, None).unwrap();

    let (inputs, outputs) = connector_names(&graph, call);
    assert_eq!(inputs, vec!["Run", "Target", "Scale"]);
    assert_eq!(outputs, vec!["Done", "Location"]);
}

#[test]
fn test_return_class_override() {
    let mut graph = Graph::new("Test");
    let call = graph
        .add_function_call(get_owner(), Some(ClassName::new("Pawn")))
        .unwrap();
    let ret = graph.output_named(call, pins::RETURN).unwrap();
    assert_eq!(ret.class(), Some(&ClassName::new("Pawn")));
    assert_eq!(ret.type_code(), "Pawn");
}

#[test]
fn test_event_and_flow_factories() {
    let mut graph = Graph::new("Test");
    let event = graph.add_event(tick()).unwrap();
    let branch = graph.add_if_else().unwrap();
    let for_loop = graph.add_for_loop().unwrap();

    assert_eq!(
        connector_names(&graph, event),
        (vec![], vec!["Done".to_string(), "DeltaTime".to_string()])
    );
    assert_eq!(
        connector_names(&graph, branch),
        (
            vec!["Run".to_string(), "Bool".to_string()],
            vec!["True".to_string(), "False".to_string()]
        )
    );
    assert_eq!(
        connector_names(&graph, for_loop),
        (
            vec!["Run".to_string(), "Count".to_string()],
            vec!["Loop".to_string(), "LoopCount".to_string(), "Then".to_string()]
        )
    );
}

#[test]
fn test_member_variable_factory() {
    let mut graph = Graph::new("Test");
    let var = graph.add_member_variable(&health()).unwrap();
    assert_eq!(
        connector_names(&graph, var),
        (vec!["Set".to_string()], vec!["Get".to_string()])
    );

    let read_only = graph.add_member_variable(&health().read_only()).unwrap();
    assert_eq!(
        connector_names(&graph, read_only),
        (vec![], vec!["Get".to_string()])
    );

    let unsupported = PropertyDescriptor::new("Tags", TypeDescriptor::Map);
    let count = graph.node_count();
    match graph.add_member_variable(&unsupported).err().unwrap() {
        GraphError::UnsupportedType { name } => assert_eq!(name, "Tags"),
        _ => panic!("Expected UnsupportedType error"),
    }
    assert_eq!(graph.node_count(), count);
}

#[test]
fn test_generated_names_and_display_names() {
    let mut graph = Graph::new("Test");
    let first = graph.add_function_call(log(), None).unwrap();
    let second = graph.add_function_call(log(), None).unwrap();
    let add = graph.add_function_call(add_float(), None).unwrap();
    let event = graph.add_event(tick()).unwrap();
    let owner = graph
        .add_member_variable(&PropertyDescriptor::new(
            "Owner",
            TypeDescriptor::object("Pawn"),
        ))
        .unwrap();

    assert_eq!(graph.node(first).unwrap().name(), "Func_1");
    assert_eq!(graph.node(second).unwrap().name(), "Func_2");
    assert_eq!(graph.node(add).unwrap().name(), "FuncPure_1");
    assert_eq!(graph.node(event).unwrap().name(), "Event_1");

    assert_eq!(graph.node(first).unwrap().display_name(), "Actor::Log");
    assert_eq!(graph.node(add).unwrap().display_name(), "+");
    assert_eq!(graph.node(event).unwrap().display_name(), "Tick");
    assert_eq!(graph.node(owner).unwrap().display_name(), "Owner (Pawn)");
    assert!(graph.node(first).unwrap().defaults_editable());
    assert!(!graph.node(owner).unwrap().defaults_editable());

    assert_eq!(graph.find_node("Func_2").map(|n| n.id()), Some(second));
}

#[test]
fn test_connect_is_bidirectional() {
    let (graph, event) = create_hello_graph();
    assert_consistent(&graph);

    let call = graph.successor(event, pins::DONE).unwrap();
    let done = graph.output_named(event, pins::DONE).unwrap();
    let run = graph.input_named(call, pins::RUN).unwrap();
    assert_eq!(done.fan_out(), &[run.id()]);
    assert_eq!(run.upstream(), Some(done.id()));
    assert_eq!(graph.connection_count(), 1);
}

#[test]
fn test_connect_type_mismatch_leaves_graph_unchanged() {
    let mut graph = Graph::new("Test");
    let event = graph.add_event(tick()).unwrap();
    let call = graph.add_function_call(log(), None).unwrap();

    let delta = graph.find_output(event, "DeltaTime").unwrap();
    let message = graph.find_input(call, "Message").unwrap();

    match graph.connect(delta, message).err().unwrap() {
        GraphError::TypeMismatch { from, to } => {
            assert_eq!(from, ConnectorType::Float);
            assert_eq!(to, ConnectorType::String);
        }
        _ => panic!("Expected TypeMismatch error"),
    }
    assert!(!graph.output(delta).unwrap().is_connected());
    assert!(!graph.input(message).unwrap().is_connected());
    assert_eq!(graph.connection_count(), 0);
}

#[test]
fn test_connect_replaces_existing_upstream() {
    let mut graph = Graph::new("Test");
    let first = graph.add_function_call(get_name(), None).unwrap();
    let second = graph.add_function_call(get_name(), None).unwrap();
    let call = graph.add_function_call(log(), None).unwrap();

    link(&mut graph, first, pins::RETURN, call, "Message");
    link(&mut graph, second, pins::RETURN, call, "Message");

    assert_consistent(&graph);
    assert!(!graph.output_named(first, pins::RETURN).unwrap().is_connected());
    assert!(graph.output_named(second, pins::RETURN).unwrap().is_connected());
    assert_eq!(graph.connection_count(), 1);
}

#[test]
fn test_data_outputs_fan_out() {
    let mut graph = Graph::new("Test");
    let name = graph.add_function_call(get_name(), None).unwrap();
    let a = graph.add_function_call(log(), None).unwrap();
    let b = graph.add_function_call(log(), None).unwrap();

    link(&mut graph, name, pins::RETURN, a, "Message");
    link(&mut graph, name, pins::RETURN, b, "Message");

    assert_consistent(&graph);
    assert_eq!(graph.output_named(name, pins::RETURN).unwrap().fan_out().len(), 2);
}

#[test]
fn test_single_execution_policy() {
    let mut graph = Graph::new("Test");
    let event = graph.add_event(tick()).unwrap();
    let a = graph.add_function_call(log(), None).unwrap();
    let b = graph.add_function_call(log(), None).unwrap();

    let done = graph.find_output(event, pins::DONE).unwrap();
    let run_a = graph.find_input(a, pins::RUN).unwrap();
    let run_b = graph.find_input(b, pins::RUN).unwrap();

    graph.connect_with(done, run_a, &SingleExecution).unwrap();
    graph.connect_with(done, run_b, &SingleExecution).unwrap();

    assert_consistent(&graph);
    assert_eq!(graph.output(done).unwrap().fan_out(), &[run_b]);
    assert!(!graph.input(run_a).unwrap().is_connected());

    // Closures work as policies too.
    let allow_all = |_: ConnectorType| true;
    graph.connect_with(done, run_a, &allow_all).unwrap();
    assert_eq!(graph.output(done).unwrap().fan_out(), &[run_b, run_a]);
}

#[test]
fn test_breaking_connections() {
    let (mut graph, event) = create_hello_graph();
    let call = graph.successor(event, pins::DONE).unwrap();
    let done = graph.find_output(event, pins::DONE).unwrap();
    let run = graph.find_input(call, pins::RUN).unwrap();

    graph.break_input(run).unwrap();
    assert_consistent(&graph);
    assert_eq!(graph.connection_count(), 0);

    // Already broken: no-op.
    graph.break_input(run).unwrap();
    graph.break_connection(done, run).unwrap();
    assert_eq!(graph.connection_count(), 0);

    graph.connect(done, run).unwrap();
    graph.break_connection(done, run).unwrap();
    assert!(!graph.input(run).unwrap().is_connected());

    graph.connect(done, run).unwrap();
    graph.break_all_connections_from(done).unwrap();
    assert!(!graph.output(done).unwrap().is_connected());
    assert_consistent(&graph);
}

#[test]
fn test_remove_node() {
    let (mut graph, event) = create_hello_graph();
    let call = graph.successor(event, pins::DONE).unwrap();
    let run = graph.find_input(call, pins::RUN).unwrap();

    let removed = graph.remove_node(call).unwrap();
    assert_eq!(removed.name(), "Func_1");
    assert_eq!(graph.node_count(), 1);
    assert!(graph.node(call).is_none());
    assert!(graph.input(run).is_none());
    assert!(!graph.output_named(event, pins::DONE).unwrap().is_connected());
    assert_consistent(&graph);

    assert_eq!(graph.remove_node(call).err().unwrap(), GraphError::NodeNotFound(call));
}

#[test]
fn test_create_connector() {
    let mut graph = Graph::new("Test");
    let call = graph.add_function_call(log(), None).unwrap();

    let extra = graph
        .create_connector(call, Direction::Output, ConnectorType::Object, "Result", None)
        .unwrap()
        .as_output()
        .unwrap();
    assert_eq!(graph.output(extra).unwrap().class(), Some(&ClassName::new("Object")));

    match graph
        .create_connector(call, Direction::Input, ConnectorType::String, "Message", None)
        .err()
        .unwrap()
    {
        GraphError::DuplicateConnector { node, direction, name } => {
            assert_eq!(node, "Func_1");
            assert_eq!(direction, Direction::Input);
            assert_eq!(name, "Message");
        }
        _ => panic!("Expected DuplicateConnector error"),
    }

    // Same name is fine on the other side.
    assert!(graph
        .create_connector(call, Direction::Output, ConnectorType::String, "Message", None)
        .is_ok());

    assert!(matches!(
        graph.create_connector(call, Direction::Input, ConnectorType::Unsupported, "X", None),
        Err(GraphError::UnsupportedType { .. })
    ));
}

#[test]
fn test_set_input_default() {
    let mut graph = Graph::new("Test");
    let call = graph.add_function_call(set_speed(), None).unwrap();
    let speed = graph.find_input(call, "Speed").unwrap();

    graph.set_input_default(speed, "12.5").unwrap();
    assert_eq!(graph.input(speed).unwrap().default_value(), &Literal::Float(12.5));

    match graph.set_input_default(speed, "fast").err().unwrap() {
        GraphError::InvalidLiteral(LiteralError::Invalid { text, .. }) => assert_eq!(text, "fast"),
        _ => panic!("Expected InvalidLiteral error"),
    }
    assert_eq!(graph.input(speed).unwrap().default_value(), &Literal::Float(12.5));
}

#[test]
fn test_rotator_default_is_stored_in_units() {
    let function = FunctionDescriptor::new("Actor", "SetRotation")
        .with_param(ParamDescriptor::input("NewRotation", TypeDescriptor::structure("Rotator")));
    let mut graph = Graph::new("Test");
    let call = graph.add_function_call(function, None).unwrap();
    set_default(&mut graph, call, "NewRotation", "0, 45");

    let input = graph.input_named(call, "NewRotation").unwrap();
    assert_eq!(
        input.default_value(),
        &Literal::Rotator(Rotator {
            pitch: 0,
            yaw: 8192,
            roll: 0
        })
    );
}
