//! Structural start records.
//!
//! A [`StartRecord`] is an ad-hoc bag of named fields whose values may be of
//! any type, written with the [`start_record!`](crate::start_record) macro.
//! Each value is classified when it is added, while its concrete type is
//! still known; problems (no fields, a repeated name, a value that is not a
//! reference) are reported when the record is formatted.

use crate::error::{FormatError, FormatResult};
use crate::reference::{
    All, IdentityReference, IndexLookup, IndexQuery, NodeReference, Reference, ReferenceSet,
    RelationshipReference,
};
use std::any::{type_name, Any};
use std::fmt;

use super::start::StartBits;

/// Argument name reported when a record has no fields
pub const START_BITS_PARAM: &str = "start_bits";

struct RecordField {
    name: String,
    /// `None` when the value's type is not renderable
    reference: Option<Reference>,
    type_name: &'static str,
}

/// Named fields of arbitrary type, in declaration order
#[derive(Default)]
pub struct StartRecord {
    fields: Vec<RecordField>,
}

impl fmt::Debug for StartRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.fields.iter().map(|field| (&field.name, field.type_name)))
            .finish()
    }
}

impl StartRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field holding anything convertible into a [`Reference`]
    pub fn reference<R: Into<Reference>>(mut self, name: impl Into<String>, value: R) -> Self {
        self.fields.push(RecordField {
            name: name.into(),
            reference: Some(value.into()),
            type_name: type_name::<R>(),
        });
        self
    }

    /// Append a field of arbitrary type.
    ///
    /// Concrete reference types, strings and plain scalars are recognized;
    /// anything else is reported as unsupported when the record is formatted.
    /// Generic values such as `Node<T>` are only recognized through
    /// [`reference`](Self::reference) or the [`start_record!`](crate::start_record)
    /// macro.
    pub fn field<T: Any>(mut self, name: impl Into<String>, value: T) -> Self {
        self.fields.push(RecordField {
            name: name.into(),
            reference: resolve_any(value),
            type_name: type_name::<T>(),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Turn the fields into start bits.
    ///
    /// Fails on an empty record, and otherwise on the first field that
    /// repeats an earlier name or holds an unsupported value.
    pub fn resolve(self) -> FormatResult<StartBits> {
        if self.fields.is_empty() {
            return Err(FormatError::InvalidArgument {
                param: START_BITS_PARAM,
            });
        }
        let mut bits = StartBits::new();
        for field in self.fields {
            if bits.get(&field.name).is_some() {
                return Err(FormatError::DuplicateBinding { name: field.name });
            }
            let reference = field
                .reference
                .ok_or_else(|| FormatError::unsupported(&field.name, field.type_name))?;
            bits.insert(field.name, reference);
        }
        Ok(bits)
    }
}

/// Build a [`StartRecord`] from `name = value` pairs.
///
/// Values that convert into a [`Reference`] (including `Node<T>` and arrays
/// of references) are taken as is; other values go through
/// [`StartRecord::field`].
///
/// ```rust
/// use strand_query::{start_record, All, NodeReference};
///
/// let record = start_record! {
///     n1 = NodeReference::new(1),
///     all = All::Nodes,
/// };
/// assert_eq!(record.len(), 2);
/// ```
#[macro_export]
macro_rules! start_record {
    () => {
        $crate::cypher::StartRecord::new()
    };
    ($($name:ident = $value:expr),+ $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::cypher::__private::{AppendAny as _, AppendReference as _};
        let record = $crate::cypher::StartRecord::new();
        $(
            let record = $crate::cypher::__private::FieldSlot::new($value)
                .append_to(record, stringify!($name));
        )+
        record
    }};
}

/// Support for [`start_record!`](crate::start_record); not public API.
///
/// `FieldSlot::append_to` resolves to [`AppendReference`] when the value
/// converts into a [`Reference`], and falls back to [`AppendAny`] through
/// auto-ref otherwise.
#[doc(hidden)]
pub mod __private {
    use super::StartRecord;
    use crate::reference::Reference;
    use std::any::Any;

    pub struct FieldSlot<T>(Option<T>);

    impl<T> FieldSlot<T> {
        pub fn new(value: T) -> Self {
            Self(Some(value))
        }
    }

    pub trait AppendReference {
        fn append_to(self, record: StartRecord, name: &'static str) -> StartRecord;
    }

    impl<T: Into<Reference>> AppendReference for FieldSlot<T> {
        fn append_to(self, record: StartRecord, name: &'static str) -> StartRecord {
            match self.0 {
                Some(value) => record.reference(name, value),
                None => record,
            }
        }
    }

    pub trait AppendAny {
        fn append_to(self, record: StartRecord, name: &'static str) -> StartRecord;
    }

    impl<T: Any> AppendAny for &mut FieldSlot<T> {
        fn append_to(self, record: StartRecord, name: &'static str) -> StartRecord {
            match self.0.take() {
                Some(value) => record.field(name, value),
                None => record,
            }
        }
    }
}

fn scalar<T: ToString>(value: T) -> Reference {
    Reference::Raw(value.to_string())
}

macro_rules! downcast_chain {
    ($slot:ident; $($ty:ty => $convert:expr),+ $(,)?) => {
        $(
            if let Some(value) = $slot.downcast_mut::<Option<$ty>>().and_then(Option::take) {
                return Some(($convert)(value));
            }
        )+
    };
}

fn resolve_any<T: Any>(value: T) -> Option<Reference> {
    let mut value = Some(value);
    let slot: &mut dyn Any = &mut value;
    downcast_chain! { slot;
        Reference => |r: Reference| r,
        NodeReference => Reference::from,
        RelationshipReference => Reference::from,
        IdentityReference => Reference::from,
        ReferenceSet => Reference::from,
        Vec<NodeReference> => Reference::from,
        Vec<RelationshipReference> => Reference::from,
        IndexLookup => Reference::from,
        IndexQuery => Reference::from,
        All => Reference::from,
        String => Reference::from,
        &'static str => Reference::from,
        bool => scalar,
        i8 => scalar,
        i16 => scalar,
        i32 => scalar,
        i64 => scalar,
        isize => scalar,
        u8 => scalar,
        u16 => scalar,
        u32 => scalar,
        u64 => scalar,
        usize => scalar,
        f32 => scalar,
        f64 => scalar,
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{EntityKind, Node};
    use serde_json::json;

    struct Unrecognized;

    #[test]
    fn test_empty_record_is_invalid_argument() {
        let err = StartRecord::new().resolve().unwrap_err();
        assert!(matches!(
            err,
            FormatError::InvalidArgument {
                param: "start_bits"
            }
        ));
    }

    #[test]
    fn test_fields_resolve_in_declaration_order() {
        let bits = start_record! {
            b = NodeReference::new(2),
            a = "raw",
            c = vec![RelationshipReference::new(1)],
        }
        .resolve()
        .unwrap();

        let names: Vec<_> = bits.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert_eq!(
            bits.get("c"),
            Some(&Reference::Set(ReferenceSet::new(
                EntityKind::Relationship,
                [1]
            )))
        );
    }

    #[test]
    fn test_scalars_resolve_as_raw_text() {
        let bits = start_record! { n = 5u32, f = false }.resolve().unwrap();
        assert_eq!(bits.get("n"), Some(&Reference::raw("5")));
        assert_eq!(bits.get("f"), Some(&Reference::raw("false")));
    }

    #[test]
    fn test_unknown_type_reports_field_and_type() {
        let err = start_record! { ok = All::Nodes, n1 = Unrecognized }
            .resolve()
            .unwrap_err();
        match err {
            FormatError::UnsupportedType { name, type_name } => {
                assert_eq!(name, "n1");
                assert!(type_name.ends_with("record::tests::Unrecognized"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_node_with_payload_resolves_to_its_identity() {
        let bits = start_record! { n1 = Node::new(json!({"name": "A"}), NodeReference::new(123)) }
            .resolve()
            .unwrap();
        assert_eq!(
            bits.get("n1"),
            Some(&Reference::Identity(IdentityReference::node(123)))
        );
    }

    #[test]
    fn test_borrowed_node_resolves() {
        let node = Node::new("payload", NodeReference::new(7));
        let bits = start_record! { n1 = &node }.resolve().unwrap();
        assert_eq!(
            bits.get("n1"),
            Some(&Reference::Identity(IdentityReference::node(7)))
        );
    }

    #[test]
    fn test_array_resolves_to_reference_set() {
        let bits = start_record! { n1 = [NodeReference::new(1), NodeReference::new(2)] }
            .resolve()
            .unwrap();
        assert_eq!(
            bits.get("n1"),
            Some(&Reference::Set(ReferenceSet::new(EntityKind::Node, [1, 2])))
        );
    }

    #[test]
    fn test_repeated_name_is_rejected() {
        let err = start_record! { n = NodeReference::new(1), m = All::Nodes, n = All::Nodes }
            .resolve()
            .unwrap_err();
        match err {
            FormatError::DuplicateBinding { name } => assert_eq!(name, "n"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_repeated_name_through_field_is_rejected() {
        let err = StartRecord::new()
            .field("n", 1i64)
            .reference("n", All::Relationships)
            .resolve()
            .unwrap_err();
        assert!(matches!(err, FormatError::DuplicateBinding { .. }));
    }

    #[test]
    fn test_field_recognizes_concrete_references() {
        let bits = StartRecord::new()
            .field("n", NodeReference::new(4))
            .field("raw", String::from("custom"))
            .resolve()
            .unwrap();
        assert_eq!(
            bits.get("n"),
            Some(&Reference::Identity(IdentityReference::node(4)))
        );
        assert_eq!(bits.get("raw"), Some(&Reference::raw("custom")));
    }

    #[test]
    fn test_debug_lists_field_types() {
        let record = start_record! { n1 = 1i64 };
        assert_eq!(format!("{:?}", record), r#"{"n1": "i64"}"#);
    }
}
