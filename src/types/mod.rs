//! The closed set of value types a connector can carry, and their literals.

pub mod connector_type;
pub mod literal;
pub mod operator;

pub use connector_type::*;
pub use literal::*;
pub use operator::*;
