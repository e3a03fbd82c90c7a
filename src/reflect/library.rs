use super::{ClassDescriptor, ClassName, FunctionDescriptor, PropertyDescriptor};
use crate::error::DefinitionError;
use ahash::AHashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Lookup of the functions and properties a graph may reference.
pub trait Reflection {
    fn function(&self, class: &ClassName, name: &str) -> Option<&FunctionDescriptor>;
    fn property(&self, class: &ClassName, name: &str) -> Option<&PropertyDescriptor>;
}

#[derive(Debug, Clone, Default)]
struct ClassEntry {
    functions: AHashMap<String, FunctionDescriptor>,
    properties: AHashMap<String, PropertyDescriptor>,
}

#[derive(Deserialize, Serialize)]
struct LibraryFile {
    #[serde(default)]
    classes: Vec<ClassDescriptor>,
}

/// An in-memory reflection source, usually loaded from JSON.
#[derive(Debug, Clone, Default)]
pub struct Library {
    classes: AHashMap<ClassName, ClassEntry>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a library from `{"classes": [...]}`.
    ///
    /// Functions listed under a class take that class as their owner.
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        let file: LibraryFile = serde_json::from_str(json)?;
        let mut library = Library::new();
        for class in file.classes {
            library.add_class(class);
        }
        Ok(library)
    }

    pub fn add_class(&mut self, class: ClassDescriptor) {
        let name = class.name;
        for mut function in class.functions {
            function.owner = name.clone();
            self.add_function(function);
        }
        for property in class.properties {
            self.add_property(name.clone(), property);
        }
        self.classes.entry(name).or_default();
    }

    pub fn add_function(&mut self, function: FunctionDescriptor) {
        self.classes
            .entry(function.owner.clone())
            .or_default()
            .functions
            .insert(function.name.clone(), function);
    }

    pub fn add_property(&mut self, class: ClassName, property: PropertyDescriptor) {
        self.classes
            .entry(class)
            .or_default()
            .properties
            .insert(property.name.clone(), property);
    }

    pub fn class_names(&self) -> Vec<&ClassName> {
        self.classes.keys().sorted().collect()
    }

    /// Functions that may be placed as call nodes, sorted by name.
    pub fn callable_functions(&self, class: &ClassName) -> Vec<&FunctionDescriptor> {
        self.functions_where(class, |f| f.flags.callable && !f.flags.event)
    }

    /// Override points that may be placed as event nodes, sorted by name.
    pub fn events(&self, class: &ClassName) -> Vec<&FunctionDescriptor> {
        self.functions_where(class, |f| f.flags.event)
    }

    /// Editable properties that may be placed as member variable nodes.
    pub fn graph_properties(&self, class: &ClassName) -> Vec<&PropertyDescriptor> {
        self.classes
            .get(class)
            .map(|entry| {
                entry
                    .properties
                    .values()
                    .filter(|p| p.editable)
                    .sorted_by(|a, b| a.name.cmp(&b.name))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn functions_where(
        &self,
        class: &ClassName,
        predicate: impl Fn(&FunctionDescriptor) -> bool,
    ) -> Vec<&FunctionDescriptor> {
        self.classes
            .get(class)
            .map(|entry| {
                entry
                    .functions
                    .values()
                    .filter(|f| predicate(f))
                    .sorted_by(|a, b| a.name.cmp(&b.name))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Reflection for Library {
    fn function(&self, class: &ClassName, name: &str) -> Option<&FunctionDescriptor> {
        self.classes.get(class)?.functions.get(name)
    }

    fn property(&self, class: &ClassName, name: &str) -> Option<&PropertyDescriptor> {
        self.classes.get(class)?.properties.get(name)
    }
}
