//! Symbol table built during tokenization

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// What a name denotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Variable,
    Function,
}

impl SymbolKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolKind::Variable => "variable",
            SymbolKind::Function => "function",
        }
    }
}

/// Best-effort type label for a variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InferredType {
    #[default]
    Unknown,
    Integer,
    String,
}

impl InferredType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InferredType::Unknown => "unknown",
            InferredType::Integer => "integer",
            InferredType::String => "string",
        }
    }
}

impl fmt::Display for InferredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata recorded for one name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SymbolEntry {
    Variable { inferred_type: InferredType },
    Function { parameters: Vec<String> },
}

impl SymbolEntry {
    pub fn variable() -> Self {
        SymbolEntry::Variable {
            inferred_type: InferredType::Unknown,
        }
    }

    pub fn function(parameters: Vec<String>) -> Self {
        SymbolEntry::Function { parameters }
    }

    pub fn kind(&self) -> SymbolKind {
        match self {
            SymbolEntry::Variable { .. } => SymbolKind::Variable,
            SymbolEntry::Function { .. } => SymbolKind::Function,
        }
    }

    pub fn is_function(&self) -> bool {
        matches!(self, SymbolEntry::Function { .. })
    }

    /// Variable type, `None` for functions
    pub fn inferred_type(&self) -> Option<InferredType> {
        match self {
            SymbolEntry::Variable { inferred_type } => Some(*inferred_type),
            SymbolEntry::Function { .. } => None,
        }
    }

    /// Function parameters, `None` for variables
    pub fn parameters(&self) -> Option<&[String]> {
        match self {
            SymbolEntry::Function { parameters } => Some(parameters),
            SymbolEntry::Variable { .. } => None,
        }
    }

    /// Text after `Type: ` in the symbol table listing
    pub fn describe(&self) -> String {
        match self {
            SymbolEntry::Variable { inferred_type } => inferred_type.as_str().to_string(),
            SymbolEntry::Function { parameters } if parameters.is_empty() => {
                "function (with no parameters)".to_string()
            }
            SymbolEntry::Function { parameters } => {
                format!("function (with parameters: {})", parameters.join(", "))
            }
        }
    }
}

/// Mapping from identifier name to its entry
///
/// Names are case-sensitive and unique. Serialization and rendering list
/// names in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SymbolTable {
    symbols: HashMap<String, SymbolEntry>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            symbols: HashMap::new(),
        }
    }

    /// Register `name` as an untyped variable unless already present.
    /// Returns true if a new entry was created.
    pub fn register_variable(&mut self, name: &str) -> bool {
        if self.symbols.contains_key(name) {
            return false;
        }
        self.symbols.insert(name.to_string(), SymbolEntry::variable());
        true
    }

    /// Register or overwrite `name` as a function. Returns the previous entry.
    pub fn register_function(&mut self, name: &str, parameters: Vec<String>) -> Option<SymbolEntry> {
        self.symbols
            .insert(name.to_string(), SymbolEntry::function(parameters))
    }

    /// Set the type of a variable entry. Function and missing entries are left
    /// alone; returns whether the entry was updated.
    pub fn set_inferred_type(&mut self, name: &str, ty: InferredType) -> bool {
        match self.symbols.get_mut(name) {
            Some(SymbolEntry::Variable { inferred_type }) => {
                *inferred_type = ty;
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&SymbolEntry> {
        self.symbols.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    /// Type of a variable entry
    pub fn inferred_type(&self, name: &str) -> Option<InferredType> {
        self.symbols.get(name).and_then(SymbolEntry::inferred_type)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Entries sorted by name
    pub fn iter_sorted(&self) -> Vec<(&str, &SymbolEntry)> {
        let mut entries: Vec<(&str, &SymbolEntry)> = self
            .symbols
            .iter()
            .map(|(name, entry)| (name.as_str(), entry))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Listing in the `Symbol Table:` format, one line per name
    pub fn render(&self) -> String {
        let mut out = String::from("\nSymbol Table:\n");
        for (name, entry) in self.iter_sorted() {
            out.push_str(&format!("Name: {}, Type: {}\n", name, entry.describe()));
        }
        out
    }
}

impl Serialize for SymbolTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.iter_sorted();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (name, entry) in entries {
            map.serialize_entry(name, entry)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_variable_first_seen_wins() {
        let mut table = SymbolTable::new();
        assert!(table.register_variable("a"));
        assert!(table.set_inferred_type("a", InferredType::Integer));
        assert!(!table.register_variable("a"));
        assert_eq!(table.inferred_type("a"), Some(InferredType::Integer));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut table = SymbolTable::new();
        table.register_variable("Total");
        table.register_variable("total");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_function_registration_overwrites() {
        let mut table = SymbolTable::new();
        table.register_variable("Help");

        let previous = table.register_function("Help", vec![]);
        assert_eq!(previous, Some(SymbolEntry::variable()));
        assert_eq!(table.get("Help").map(SymbolEntry::kind), Some(SymbolKind::Function));

        let previous = table.register_function("Help", vec!["x".to_string()]);
        assert_eq!(previous, Some(SymbolEntry::function(vec![])));
        assert_eq!(
            table.get("Help").and_then(SymbolEntry::parameters),
            Some(&["x".to_string()][..])
        );

        // A later plain reference never downgrades a function
        assert!(!table.register_variable("Help"));
        assert!(table.get("Help").map(SymbolEntry::is_function).unwrap_or(false));
    }

    #[test]
    fn test_set_type_skips_functions() {
        let mut table = SymbolTable::new();
        table.register_function("f", vec![]);
        assert!(!table.set_inferred_type("f", InferredType::String));
        assert!(!table.set_inferred_type("missing", InferredType::String));
        assert_eq!(table.inferred_type("f"), None);
    }

    #[test]
    fn test_render_sorted() {
        let mut table = SymbolTable::new();
        table.register_variable("name");
        table.set_inferred_type("name", InferredType::String);
        table.register_function("myFunction", vec!["a".into(), "b".into()]);
        table.register_function("Help", vec![]);
        table.register_variable("c");

        assert_eq!(
            table.render(),
            "\nSymbol Table:\n\
             Name: Help, Type: function (with no parameters)\n\
             Name: c, Type: unknown\n\
             Name: myFunction, Type: function (with parameters: a, b)\n\
             Name: name, Type: string\n"
        );
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_json_shape() {
        let mut table = SymbolTable::new();
        table.register_variable("a");
        table.set_inferred_type("a", InferredType::Integer);
        table.register_function("f", vec!["x".into()]);

        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["a"]["kind"], "variable");
        assert_eq!(json["a"]["inferred_type"], "integer");
        assert_eq!(json["f"]["kind"], "function");
        assert_eq!(json["f"]["parameters"][0], "x");

        let text = serde_json::to_string(&table).unwrap();
        let back: SymbolTable = serde_json::from_str(&text).unwrap();
        assert_eq!(back, table);
    }
}
