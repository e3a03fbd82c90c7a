use super::ConnectorType;
use crate::error::LiteralError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A three component vector default.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// A rotation stored in fixed-point angle units (65536 per full turn).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rotator {
    pub pitch: i32,
    pub yaw: i32,
    pub roll: i32,
}

impl Rotator {
    pub const UNITS_PER_TURN: f32 = 65536.0;

    pub fn from_degrees(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self {
            pitch: Self::degrees_to_units(pitch),
            yaw: Self::degrees_to_units(yaw),
            roll: Self::degrees_to_units(roll),
        }
    }

    /// Pitch, yaw and roll in degrees.
    pub fn to_degrees(self) -> [f32; 3] {
        [
            Self::units_to_degrees(self.pitch),
            Self::units_to_degrees(self.yaw),
            Self::units_to_degrees(self.roll),
        ]
    }

    fn degrees_to_units(degrees: f32) -> i32 {
        (Self::UNITS_PER_TURN * (degrees / 360.0)).round() as i32
    }

    fn units_to_degrees(units: i32) -> f32 {
        360.0 * (units as f32 / Self::UNITS_PER_TURN)
    }
}

/// The default value an unconnected input falls back to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Bool(bool),
    Int(i32),
    Float(f32),
    Vector(Vector),
    Rotator(Rotator),
    String(String),
    /// Object inputs carry no literal; unconnected they emit `None`.
    Object,
    Execution,
}

impl Literal {
    /// The zero value for a connector type. `Unsupported` has none.
    pub fn default_for(ty: ConnectorType) -> Option<Literal> {
        let literal = match ty {
            ConnectorType::Bool => Literal::Bool(false),
            ConnectorType::Int => Literal::Int(0),
            ConnectorType::Float => Literal::Float(0.0),
            ConnectorType::Vector => Literal::Vector(Vector::default()),
            ConnectorType::Rotator => Literal::Rotator(Rotator::default()),
            ConnectorType::String => Literal::String(String::new()),
            ConnectorType::Object => Literal::Object,
            ConnectorType::Execution => Literal::Execution,
            ConnectorType::Unsupported => return None,
        };
        Some(literal)
    }

    pub fn connector_type(&self) -> ConnectorType {
        match self {
            Literal::Bool(_) => ConnectorType::Bool,
            Literal::Int(_) => ConnectorType::Int,
            Literal::Float(_) => ConnectorType::Float,
            Literal::Vector(_) => ConnectorType::Vector,
            Literal::Rotator(_) => ConnectorType::Rotator,
            Literal::String(_) => ConnectorType::String,
            Literal::Object => ConnectorType::Object,
            Literal::Execution => ConnectorType::Execution,
        }
    }

    /// Parses the textual form of a default for the given connector type.
    ///
    /// Vector and rotator components are comma separated; missing components
    /// are zero. Rotator components are read in degrees.
    pub fn parse(ty: ConnectorType, text: &str) -> Result<Literal, LiteralError> {
        let invalid = || LiteralError::Invalid {
            ty,
            text: text.to_string(),
        };

        let literal = match ty {
            ConnectorType::Bool => Literal::Bool(
                ["true", "t", "1"]
                    .iter()
                    .any(|truthy| text.trim().eq_ignore_ascii_case(truthy)),
            ),
            ConnectorType::Int => Literal::Int(parse_number(text).ok_or_else(invalid)?),
            ConnectorType::Float => Literal::Float(parse_number(text).ok_or_else(invalid)?),
            ConnectorType::Vector => {
                let [x, y, z] = parse_components(text).ok_or_else(invalid)?;
                Literal::Vector(Vector::new(x, y, z))
            }
            ConnectorType::Rotator => {
                let [pitch, yaw, roll] = parse_components(text).ok_or_else(invalid)?;
                Literal::Rotator(Rotator::from_degrees(pitch, yaw, roll))
            }
            ConnectorType::String => Literal::String(text.to_string()),
            ConnectorType::Object => Literal::Object,
            ConnectorType::Execution => Literal::Execution,
            ConnectorType::Unsupported => return Err(LiteralError::Unsupported(ty)),
        };
        Ok(literal)
    }

    /// The human-readable form, as shown by an editor.
    pub fn display_string(&self) -> String {
        match self {
            Literal::Bool(b) => (if *b { "TRUE" } else { "FALSE" }).to_string(),
            Literal::Int(i) => i.to_string(),
            Literal::Float(f) => format!("{:.4}", f),
            Literal::Vector(v) => format!("{:.4}, {:.4}, {:.4}", v.x, v.y, v.z),
            Literal::Rotator(r) => {
                let [pitch, yaw, roll] = r.to_degrees();
                format!("{:.4}, {:.4}, {:.4}", pitch, yaw, roll)
            }
            Literal::String(s) => s.clone(),
            Literal::Object | Literal::Execution => String::new(),
        }
    }

    /// The form embedded in generated source.
    pub fn code_string(&self) -> String {
        match self {
            Literal::Vector(_) => format!("vect({})", self.display_string()),
            Literal::Rotator(r) => format!("rot({},{},{})", r.pitch, r.yaw, r.roll),
            Literal::String(s) => format!("\"{}\"", s),
            Literal::Object => "None".to_string(),
            _ => self.display_string(),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_string())
    }
}

/// Empty text reads as zero, anything else must parse.
fn parse_number<T: std::str::FromStr + Default>(text: &str) -> Option<T> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(T::default());
    }
    trimmed.parse().ok()
}

fn parse_components(text: &str) -> Option<[f32; 3]> {
    let mut components = [0.0; 3];
    for (slot, piece) in components.iter_mut().zip(text.split(',')) {
        *slot = parse_number(piece)?;
    }
    Some(components)
}
