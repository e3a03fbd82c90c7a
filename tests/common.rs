//! Common test utilities for building libraries and graphs.
use kairo::prelude::*;

#[allow(dead_code)]
pub fn tick() -> FunctionDescriptor {
    FunctionDescriptor::new("Actor", "Tick")
        .as_event()
        .with_param(ParamDescriptor::input("DeltaTime", TypeDescriptor::Float))
}

#[allow(dead_code)]
pub fn begin_play() -> FunctionDescriptor {
    FunctionDescriptor::new("Actor", "BeginPlay").as_event()
}

#[allow(dead_code)]
pub fn log() -> FunctionDescriptor {
    FunctionDescriptor::new("Actor", "Log")
        .with_param(ParamDescriptor::input("Message", TypeDescriptor::String))
}

#[allow(dead_code)]
pub fn set_speed() -> FunctionDescriptor {
    FunctionDescriptor::new("Actor", "SetSpeed")
        .with_param(ParamDescriptor::input("Speed", TypeDescriptor::Float))
}

/// Impure, returns a float.
#[allow(dead_code)]
pub fn compute_health() -> FunctionDescriptor {
    FunctionDescriptor::new("Actor", "ComputeHealth")
        .with_param(ParamDescriptor::returns(TypeDescriptor::Float))
}

#[allow(dead_code)]
pub fn get_name() -> FunctionDescriptor {
    FunctionDescriptor::new("Actor", "GetName")
        .as_pure()
        .with_param(ParamDescriptor::returns(TypeDescriptor::String))
}

#[allow(dead_code)]
pub fn is_alive() -> FunctionDescriptor {
    FunctionDescriptor::new("Actor", "IsAlive")
        .as_pure()
        .with_param(ParamDescriptor::returns(TypeDescriptor::Bool))
}

#[allow(dead_code)]
pub fn get_owner() -> FunctionDescriptor {
    FunctionDescriptor::new("Actor", "GetOwner")
        .as_pure()
        .with_param(ParamDescriptor::returns(TypeDescriptor::object("Actor")))
}

#[allow(dead_code)]
pub fn get_location() -> FunctionDescriptor {
    FunctionDescriptor::new("Actor", "GetLocation").with_param(ParamDescriptor::output(
        "Location",
        TypeDescriptor::structure("Vector"),
    ))
}

/// `A + B`, pure.
#[allow(dead_code)]
pub fn add_float() -> FunctionDescriptor {
    FunctionDescriptor::new("Math", "Add_FloatFloat")
        .as_pure()
        .as_operator()
        .with_param(ParamDescriptor::input("A", TypeDescriptor::Float))
        .with_param(ParamDescriptor::input("B", TypeDescriptor::Float))
        .with_param(ParamDescriptor::returns(TypeDescriptor::Float))
}

#[allow(dead_code)]
pub fn add_component() -> FunctionDescriptor {
    FunctionDescriptor::new("Actor", "AddComponent")
        .with_param(ParamDescriptor::input(
            "Template",
            TypeDescriptor::object("ActorComponent"),
        ))
        .with_param(ParamDescriptor::returns(TypeDescriptor::object(
            "ActorComponent",
        )))
}

#[allow(dead_code)]
pub fn health() -> PropertyDescriptor {
    PropertyDescriptor::new("Health", TypeDescriptor::Float)
}

#[allow(dead_code)]
pub fn counter() -> PropertyDescriptor {
    PropertyDescriptor::new("Counter", TypeDescriptor::Int)
}

/// A library holding every fixture above.
#[allow(dead_code)]
pub fn create_library() -> Library {
    let mut library = Library::new();
    for function in [
        tick(),
        begin_play(),
        log(),
        set_speed(),
        compute_health(),
        get_name(),
        is_alive(),
        get_owner(),
        get_location(),
        add_float(),
        add_component(),
    ] {
        library.add_function(function);
    }
    library.add_property(ClassName::new("Actor"), health());
    library.add_property(ClassName::new("Actor"), counter());
    library
}

/// Connects `from.output` to `to.input`, panicking on failure.
#[allow(dead_code)]
pub fn link(graph: &mut Graph, from: NodeId, output: &str, to: NodeId, input: &str) {
    let out = graph
        .find_output(from, output)
        .unwrap_or_else(|| panic!("missing output '{}'", output));
    let inp = graph
        .find_input(to, input)
        .unwrap_or_else(|| panic!("missing input '{}'", input));
    graph.connect(out, inp).expect("Failed to connect");
}

#[allow(dead_code)]
pub fn set_default(graph: &mut Graph, node: NodeId, input: &str, text: &str) {
    let inp = graph.find_input(node, input).expect("missing input");
    graph.set_input_default(inp, text).expect("Failed to set default");
}

/// An event with a single call to `Log("Hello")`.
#[allow(dead_code)]
pub fn create_hello_graph() -> (Graph, NodeId) {
    let mut graph = Graph::new("Hello");
    let event = graph.add_event(tick()).unwrap();
    let call = graph.add_function_call(log(), None).unwrap();
    link(&mut graph, event, pins::DONE, call, pins::RUN);
    set_default(&mut graph, call, "Message", "Hello");
    (graph, event)
}

/// Checks that both ends of every edge agree.
#[allow(dead_code)]
pub fn assert_consistent(graph: &Graph) {
    for input in graph.inputs() {
        if let Some(from) = input.upstream() {
            let output = graph.output(from).expect("dangling upstream");
            assert!(output.fan_out().contains(&input.id()));
        }
    }
    for output in graph.outputs() {
        for id in output.fan_out() {
            let input = graph.input(*id).expect("dangling fan-out");
            assert_eq!(input.upstream(), Some(output.id()));
        }
    }
}
