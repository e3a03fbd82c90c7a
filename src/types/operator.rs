/// Function-name prefixes that are rendered as infix operators.
const OPERATORS: &[(&str, &str)] = &[
    ("Add", "+"),
    ("Subtract", "-"),
    ("Multiply", "*"),
    ("Divide", "/"),
    ("Less", "<"),
    ("LessEqual", "<="),
    ("Greater", ">"),
    ("GreaterEqual", ">="),
    ("Equal", "="),
    ("EqualEqual", "=="),
    ("At", "@"),
];

/// Converts an operator function name (e.g. `Add_FloatFloat`) into its symbol (`+`).
///
/// Only the text before the first underscore is considered. Names without a
/// known prefix are returned unchanged.
pub fn operator_symbol(function_name: &str) -> &str {
    function_name
        .split_once('_')
        .and_then(|(prefix, _)| {
            OPERATORS
                .iter()
                .find(|(name, _)| *name == prefix)
                .map(|(_, symbol)| *symbol)
        })
        .unwrap_or(function_name)
}
