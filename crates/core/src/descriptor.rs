//! Type descriptors: the data-level description of a target value's shape.
//!
//! A descriptor tree is built once per distinct target type, ahead of any
//! parsing, and reused across reconstruction calls. Element, key and value
//! types of containers are first-class descriptor data — nothing is
//! inspected at parse time.

// ──────────────────────────────────────────────
// Primitive kinds
// ──────────────────────────────────────────────

/// The primitive kinds the builder has a canonical literal rule for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Char,
    Bool,
    Short,
    Int,
    Long,
    Float,
    Double,
    Str,
}

impl PrimitiveKind {
    /// Human-readable kind name for error messages.
    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveKind::Char => "Char",
            PrimitiveKind::Bool => "Bool",
            PrimitiveKind::Short => "Short",
            PrimitiveKind::Int => "Int",
            PrimitiveKind::Long => "Long",
            PrimitiveKind::Float => "Float",
            PrimitiveKind::Double => "Double",
            PrimitiveKind::Str => "Str",
        }
    }
}

// ──────────────────────────────────────────────
// Descriptors
// ──────────────────────────────────────────────

/// Describes the shape of a reconstruction target.
///
/// Immutable once built. Container kinds own their element/key/value
/// descriptors, so the whole tree for a target type is one allocation-stable
/// value the caller can keep around.
#[derive(Debug, Clone)]
pub enum TypeDescriptor {
    Primitive(PrimitiveKind),
    /// A point in time, rendered with the fixed US-locale layout
    /// `Wed Dec 15 10:30:00 +0000 2021`.
    Temporal,
    /// Fixed-size collection of one element type.
    Array(Box<TypeDescriptor>),
    /// Growable ordered collection of one element type.
    Sequence(Box<TypeDescriptor>),
    /// Key/value mapping; keys must be a primitive kind.
    Mapping(Box<TypeDescriptor>, Box<TypeDescriptor>),
    Object(ObjectShape),
}

impl TypeDescriptor {
    pub fn array(element: TypeDescriptor) -> Self {
        TypeDescriptor::Array(Box::new(element))
    }

    pub fn sequence(element: TypeDescriptor) -> Self {
        TypeDescriptor::Sequence(Box::new(element))
    }

    pub fn mapping(key: TypeDescriptor, value: TypeDescriptor) -> Self {
        TypeDescriptor::Mapping(Box::new(key), Box::new(value))
    }

    /// Kind name for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            TypeDescriptor::Primitive(kind) => kind.name(),
            TypeDescriptor::Temporal => "Temporal",
            TypeDescriptor::Array(_) => "Array",
            TypeDescriptor::Sequence(_) => "Sequence",
            TypeDescriptor::Mapping(..) => "Mapping",
            TypeDescriptor::Object(_) => "Object",
        }
    }
}

// ──────────────────────────────────────────────
// Object shapes and field slots
// ──────────────────────────────────────────────

/// A named, typed, writable location on a compound object.
#[derive(Debug, Clone)]
pub struct FieldSlot {
    pub name: String,
    pub descriptor: TypeDescriptor,
    pub writable: bool,
}

/// The Object-kind descriptor payload: rendered class name, ordered field
/// slots, and whether a fresh instance can be allocated at all.
#[derive(Debug, Clone)]
pub struct ObjectShape {
    name: String,
    constructible: bool,
    fields: Vec<FieldSlot>,
}

impl ObjectShape {
    /// Creates a shape with the given rendered class name.
    ///
    /// Types nested inside an enclosing type must render as `Outer.Inner`;
    /// Rust-style `::` separators in `name` are normalized to that dotted
    /// form.
    pub fn new(name: &str) -> Self {
        ObjectShape {
            name: name.replace("::", "."),
            constructible: true,
            fields: Vec::new(),
        }
    }

    /// Appends a writable field slot. Field order is declaration order.
    pub fn field(mut self, name: &str, descriptor: TypeDescriptor) -> Self {
        self.fields.push(FieldSlot {
            name: name.to_owned(),
            descriptor,
            writable: true,
        });
        self
    }

    /// Appends a field slot that can be named by input but never written.
    pub fn read_only_field(mut self, name: &str, descriptor: TypeDescriptor) -> Self {
        self.fields.push(FieldSlot {
            name: name.to_owned(),
            descriptor,
            writable: false,
        });
        self
    }

    /// Marks the shape as not constructible — reconstruction against it
    /// fails with an instantiation error before any field is read.
    pub fn not_constructible(mut self) -> Self {
        self.constructible = false;
        self
    }

    /// The class name exactly as the paired renderer writes it.
    pub fn rendered_name(&self) -> &str {
        &self.name
    }

    pub fn is_constructible(&self) -> bool {
        self.constructible
    }

    pub fn fields(&self) -> &[FieldSlot] {
        &self.fields
    }

    /// Position of the named slot in declaration order, if present.
    pub fn slot_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|slot| slot.name == name)
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
