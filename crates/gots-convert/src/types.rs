//! Type vocabulary mapping between Go and TypeScript.
//!
//! The two directions are independent tables. Numeric widths collapse to
//! `number` going to TypeScript and come back as `int`, and `time.Time`
//! maps to `string` with no way back, so the mapping is not a bijection.

use crate::ir::TypeDescriptor;
use std::collections::BTreeMap;

const GO_TO_TS: &[(&str, &str)] = &[
    ("string", "string"),
    ("int", "number"),
    ("int8", "number"),
    ("int16", "number"),
    ("int32", "number"),
    ("int64", "number"),
    ("uint", "number"),
    ("uint8", "number"),
    ("uint16", "number"),
    ("uint32", "number"),
    ("uint64", "number"),
    ("float32", "number"),
    ("float64", "number"),
    ("bool", "boolean"),
    ("time.Time", "string"),
    ("interface{}", "any"),
    ("any", "any"),
];

const TS_TO_GO: &[(&str, &str)] = &[
    ("string", "string"),
    ("number", "int"),
    ("boolean", "bool"),
    ("any", "any"),
    ("unknown", "any"),
];

/// The two lookup tables driving [`TypeMapper`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTables {
    pub go_to_ts: BTreeMap<String, String>,
    pub ts_to_go: BTreeMap<String, String>,
}

impl TypeTables {
    /// The built-in vocabulary.
    pub fn builtin() -> Self {
        Self {
            go_to_ts: owned(GO_TO_TS),
            ts_to_go: owned(TS_TO_GO),
        }
    }

    /// Tables with no entries; every type passes through as `Named`.
    pub fn empty() -> Self {
        Self {
            go_to_ts: BTreeMap::new(),
            ts_to_go: BTreeMap::new(),
        }
    }

    /// Add or override a Go -> TypeScript entry.
    pub fn with_go_to_ts(mut self, go: impl Into<String>, ts: impl Into<String>) -> Self {
        self.go_to_ts.insert(go.into(), ts.into());
        self
    }

    /// Add or override a TypeScript -> Go entry.
    pub fn with_ts_to_go(mut self, ts: impl Into<String>, go: impl Into<String>) -> Self {
        self.ts_to_go.insert(ts.into(), go.into());
        self
    }

    /// Merge `other` into these tables; entries in `other` win.
    pub fn extend(&mut self, other: TypeTables) {
        self.go_to_ts.extend(other.go_to_ts);
        self.ts_to_go.extend(other.ts_to_go);
    }
}

impl Default for TypeTables {
    fn default() -> Self {
        Self::builtin()
    }
}

fn owned(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Resolves source type names and renders descriptors in the target notation.
#[derive(Debug, Clone, Default)]
pub struct TypeMapper {
    tables: TypeTables,
}

impl TypeMapper {
    pub fn new(tables: TypeTables) -> Self {
        Self { tables }
    }

    /// Classify a bare Go type name (no `[]` or `*` prefix).
    pub fn resolve_go(&self, name: &str) -> TypeDescriptor {
        if name.starts_with("map[") {
            TypeDescriptor::MapLiteral(name.to_string())
        } else if self.tables.go_to_ts.contains_key(name) {
            TypeDescriptor::Primitive(name.to_string())
        } else {
            TypeDescriptor::Named(name.to_string())
        }
    }

    /// Classify a bare TypeScript type name (no `[]` suffix).
    pub fn resolve_ts(&self, name: &str) -> TypeDescriptor {
        if self.tables.ts_to_go.contains_key(name) {
            TypeDescriptor::Primitive(name.to_string())
        } else {
            TypeDescriptor::Named(name.to_string())
        }
    }

    /// Render a Go-sourced descriptor as a TypeScript type.
    ///
    /// Pointers do not appear in the text; callers check
    /// [`TypeDescriptor::is_nullable`] and append `| null` after the
    /// array suffix.
    pub fn to_typescript(&self, ty: &TypeDescriptor) -> String {
        match ty {
            TypeDescriptor::Primitive(name) => lookup(&self.tables.go_to_ts, name),
            TypeDescriptor::Array(inner) => format!("{}[]", self.to_typescript(inner)),
            TypeDescriptor::Optional(inner) => self.to_typescript(inner),
            TypeDescriptor::MapLiteral(raw) | TypeDescriptor::Named(raw) => raw.clone(),
        }
    }

    /// Render a TypeScript-sourced descriptor as a Go type.
    pub fn to_go(&self, ty: &TypeDescriptor) -> String {
        match ty {
            TypeDescriptor::Primitive(name) => lookup(&self.tables.ts_to_go, name),
            TypeDescriptor::Array(inner) => format!("[]{}", self.to_go(inner)),
            TypeDescriptor::Optional(inner) => format!("*{}", self.to_go(inner)),
            TypeDescriptor::MapLiteral(raw) | TypeDescriptor::Named(raw) => raw.clone(),
        }
    }
}

fn lookup(table: &BTreeMap<String, String>, name: &str) -> String {
    table
        .get(name)
        .cloned()
        .unwrap_or_else(|| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_widths_collapse() {
        let mapper = TypeMapper::default();
        for go in [
            "int", "int8", "int16", "int32", "int64", "uint", "uint8", "uint16", "uint32",
            "uint64", "float32", "float64",
        ] {
            assert_eq!(mapper.to_typescript(&mapper.resolve_go(go)), "number");
        }
        assert_eq!(mapper.to_go(&mapper.resolve_ts("number")), "int");
    }

    #[test]
    fn time_is_one_way() {
        let mapper = TypeMapper::default();
        assert_eq!(mapper.to_typescript(&mapper.resolve_go("time.Time")), "string");
        assert_eq!(mapper.to_go(&mapper.resolve_ts("string")), "string");
    }

    #[test]
    fn dynamic_types() {
        let mapper = TypeMapper::default();
        assert_eq!(mapper.to_typescript(&mapper.resolve_go("interface{}")), "any");
        assert_eq!(mapper.to_typescript(&mapper.resolve_go("any")), "any");
        assert_eq!(mapper.to_go(&mapper.resolve_ts("unknown")), "any");
        assert_eq!(mapper.to_go(&mapper.resolve_ts("any")), "any");
    }

    #[test]
    fn unknown_names_pass_through() {
        let mapper = TypeMapper::default();
        assert_eq!(mapper.resolve_go("Profile"), TypeDescriptor::named("Profile"));
        assert_eq!(
            mapper.resolve_go("map[string]bool"),
            TypeDescriptor::MapLiteral("map[string]bool".into())
        );
        assert_eq!(mapper.to_go(&mapper.resolve_ts("Customer")), "Customer");
    }

    #[test]
    fn array_wraps_before_optional() {
        let mapper = TypeMapper::default();
        let ty = TypeDescriptor::optional(TypeDescriptor::array(TypeDescriptor::primitive(
            "string",
        )));
        assert_eq!(mapper.to_go(&ty), "*[]string");

        let go = TypeDescriptor::array(TypeDescriptor::optional(TypeDescriptor::named("Item")));
        assert_eq!(mapper.to_typescript(&go), "Item[]");
        assert!(go.is_nullable());
    }

    #[test]
    fn injected_tables_extend_the_vocabulary() {
        let mut tables = TypeTables::builtin();
        tables.extend(
            TypeTables::empty()
                .with_go_to_ts("uuid.UUID", "string")
                .with_ts_to_go("Date", "time.Time"),
        );
        let mapper = TypeMapper::new(tables);

        assert_eq!(mapper.to_typescript(&mapper.resolve_go("uuid.UUID")), "string");
        assert_eq!(mapper.to_go(&mapper.resolve_ts("Date")), "time.Time");
        assert_eq!(mapper.to_typescript(&mapper.resolve_go("int")), "number");
    }

    #[test]
    fn empty_tables_treat_everything_as_named() {
        let mapper = TypeMapper::new(TypeTables::empty());
        assert_eq!(mapper.resolve_go("int"), TypeDescriptor::named("int"));
        assert_eq!(mapper.to_typescript(&mapper.resolve_go("int")), "int");
    }
}
