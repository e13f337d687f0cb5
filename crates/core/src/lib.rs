//! restring-core: type-directed reconstruction of debug-representation text.
//!
//! Rebuilds a typed value from the text produced by a `toString`-style
//! serializer (`ClassName(field1=val1, field2=val2)`) using nothing but the
//! text and a caller-built [`TypeDescriptor`] — no schema file, no grammar
//! compilation step.
//!
//! # Public API
//!
//! Key types are re-exported at the crate root for convenience:
//!
//! - [`reconstruct()`] -- parse text against a descriptor
//! - [`render()`] -- the paired renderer producing the convention we reverse
//! - [`TypeDescriptor`] / [`ObjectShape`] / [`FieldSlot`] -- target shapes
//! - [`Value`] -- the reconstructed value tree
//! - [`ReprError`] -- the error taxonomy
//!
//! ```
//! use restring_core::{reconstruct, ObjectShape, PrimitiveKind, TypeDescriptor, Value};
//!
//! let person = TypeDescriptor::Object(
//!     ObjectShape::new("Person")
//!         .field("name", TypeDescriptor::Primitive(PrimitiveKind::Str))
//!         .field("age", TypeDescriptor::Primitive(PrimitiveKind::Int)),
//! );
//! let value = reconstruct(&person, "Person(name=kevin, age=30)").unwrap();
//! assert_eq!(value.field("age"), Some(&Value::Int(30)));
//! ```

pub mod build;
pub mod descriptor;
pub mod error;
pub mod json;
pub mod reconstruct;
pub mod render;
pub mod token;
pub mod value;

// ── Convenience re-exports ───────────────────────────────────────────

pub use build::build_value;
pub use descriptor::{FieldSlot, ObjectShape, PrimitiveKind, TypeDescriptor};
pub use error::ReprError;
pub use reconstruct::reconstruct;
pub use render::render;
pub use value::Value;
