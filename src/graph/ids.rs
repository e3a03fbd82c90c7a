use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines index newtypes into the graph's slot tables.
macro_rules! define_ids {
    ( $( ($name:ident, $label:expr) ),* $(,)? ) => {
        $(
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
            pub struct $name(u32);

            impl $name {
                pub(crate) fn from_index(index: usize) -> Self {
                    Self(index as u32)
                }

                pub fn index(self) -> usize {
                    self.0 as usize
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}#{}", $label, self.0)
                }
            }
        )*
    };
}

define_ids! {
    (NodeId, "node"),
    (InputId, "input"),
    (OutputId, "output"),
}
