//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.
//!
//! Equality and hashing are not hand-written per type. Each value object enumerates its
//! structural fields once, in declaration order, through [`StructuralValue`]; the engine
//! functions [`structural_eq`] and [`structural_hash`] derive everything else from that
//! enumeration. The [`value_object!`] macro wires `PartialEq`/`Eq`/`Hash` on top.

use core::any::Any;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};

/// Accumulator seed for structural hashing.
const HASH_SEED: u64 = 17;

/// Accumulator multiplier for structural hashing.
///
/// Seed and multiplier are shared by every value-object type: objects of different
/// concrete types may collide on hash, and only equality distinguishes them.
const HASH_MULTIPLIER: u64 = 59;

/// A borrowed view of one structural field of a value object.
///
/// Optional fields map to [`Field::Absent`] when unset. Two absent fields compare
/// equal; an absent field never equals a present one. Absent fields contribute
/// nothing to the structural hash.
#[derive(Debug, Clone, Copy)]
pub enum Field<'a> {
    Absent,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Text(&'a str),
    Instant(DateTime<Utc>),
    /// A nested value object, compared recursively.
    Nested(&'a dyn StructuralValue),
}

impl<'a> Field<'a> {
    pub fn opt_bool(value: Option<bool>) -> Self {
        value.map_or(Field::Absent, Field::Bool)
    }

    pub fn opt_int(value: Option<i64>) -> Self {
        value.map_or(Field::Absent, Field::Int)
    }

    pub fn opt_uint(value: Option<u64>) -> Self {
        value.map_or(Field::Absent, Field::UInt)
    }

    pub fn opt_text(value: Option<&'a str>) -> Self {
        value.map_or(Field::Absent, Field::Text)
    }

    pub fn opt_instant(value: Option<DateTime<Utc>>) -> Self {
        value.map_or(Field::Absent, Field::Instant)
    }
}

/// Deterministic, declaration-ordered field enumeration for a value object.
///
/// ## Contract
///
/// - `structural_fields` must return the same fields in the same order on every
///   call for the same instance. Optional fields are reported as
///   [`Field::Absent`] rather than omitted, so the arity is fixed per type.
/// - Identity fields (entity identifiers) must **not** be enumerated; identity
///   is a separate concern from value equality.
/// - Implementing types must be immutable after construction. Mutating a field
///   after the first hash computation breaks the cached-hash contract
///   (`DomainError::InvariantViolation` territory); the engine does not detect
///   this at runtime.
pub trait StructuralValue: core::fmt::Debug {
    /// Upcast for runtime type discrimination in [`structural_eq`].
    fn as_any(&self) -> &dyn Any;

    /// The ordered structural fields of this value.
    fn structural_fields(&self) -> Vec<Field<'_>>;

    /// The instance's memoized hash cell.
    fn hash_cache(&self) -> &HashCache;
}

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. They represent
/// concepts where identity doesn't matter - only the values matter.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two value objects with same values are equal)
/// - **Entity**: Has identity (two entities with same ID are the same entity)
///
/// Example:
/// - `Money { amount_minor: 100, currency: "USD" }` is a value object
/// - `Book { id: BookId(...), name: "..." }` is an entity
pub trait ValueObject: StructuralValue + Clone + PartialEq {}

/// Write-once memoized structural hash.
///
/// Safe under concurrent read-after-construction access: the value is written at
/// most once and recomputing yields the same result, so a race to compute it
/// twice is benign. Cloning carries the cached value, which is correct because
/// value objects are immutable.
#[derive(Clone, Default)]
pub struct HashCache(OnceLock<u64>);

impl HashCache {
    pub fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Return the cached hash, computing and storing it on first use.
    pub fn get_or_compute(&self, compute: impl FnOnce() -> u64) -> u64 {
        *self.0.get_or_init(compute)
    }

    /// The cached hash, if one has been computed.
    pub fn get(&self) -> Option<u64> {
        self.0.get().copied()
    }
}

impl core::fmt::Debug for HashCache {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.get() {
            Some(hash) => write!(f, "HashCache({hash})"),
            None => write!(f, "HashCache(unset)"),
        }
    }
}

/// Structural equality over any two value objects.
///
/// `false` when the runtime types differ; otherwise every corresponding field
/// pair must be equal. Nested value objects are compared recursively.
pub fn structural_eq(a: &dyn StructuralValue, b: &dyn StructuralValue) -> bool {
    if a.as_any().type_id() != b.as_any().type_id() {
        return false;
    }

    let lhs = a.structural_fields();
    let rhs = b.structural_fields();

    // Same type implies same arity; anything else is a broken impl.
    lhs.len() == rhs.len() && lhs.iter().zip(rhs.iter()).all(|(x, y)| field_eq(x, y))
}

/// Null-safe structural equality: absent equals absent, absent never equals present.
pub fn opt_structural_eq(a: Option<&dyn StructuralValue>, b: Option<&dyn StructuralValue>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => structural_eq(a, b),
        _ => false,
    }
}

/// Structural hash of a value object, memoized per instance.
///
/// Folds every non-absent field into an accumulator:
/// `acc = acc * MULTIPLIER + field_hash`, starting from the seed, in the same
/// field order [`structural_eq`] uses. Equal values therefore hash equal.
pub fn structural_hash(value: &dyn StructuralValue) -> u64 {
    value.hash_cache().get_or_compute(|| compute_hash(value))
}

fn compute_hash(value: &dyn StructuralValue) -> u64 {
    let mut acc = HASH_SEED;
    for field in value.structural_fields() {
        if let Some(hash) = field_hash(&field) {
            acc = acc.wrapping_mul(HASH_MULTIPLIER).wrapping_add(hash);
        }
    }
    acc
}

fn field_eq(a: &Field<'_>, b: &Field<'_>) -> bool {
    match (a, b) {
        (Field::Absent, Field::Absent) => true,
        (Field::Bool(x), Field::Bool(y)) => x == y,
        (Field::Int(x), Field::Int(y)) => x == y,
        (Field::UInt(x), Field::UInt(y)) => x == y,
        (Field::Text(x), Field::Text(y)) => x == y,
        (Field::Instant(x), Field::Instant(y)) => x == y,
        (Field::Nested(x), Field::Nested(y)) => structural_eq(*x, *y),
        _ => false,
    }
}

fn field_hash(field: &Field<'_>) -> Option<u64> {
    match field {
        Field::Absent => None,
        Field::Bool(v) => Some(u64::from(*v)),
        Field::Int(v) => Some(*v as u64),
        Field::UInt(v) => Some(*v),
        Field::Text(v) => Some(fold_bytes(v.as_bytes())),
        Field::Instant(v) => Some(v.timestamp_micros() as u64),
        Field::Nested(v) => Some(structural_hash(*v)),
    }
}

fn fold_bytes(bytes: &[u8]) -> u64 {
    bytes.iter().fold(HASH_SEED, |acc, byte| {
        acc.wrapping_mul(HASH_MULTIPLIER)
            .wrapping_add(u64::from(*byte))
    })
}

/// Derive `PartialEq`, `Eq` and `Hash` for a value object from its
/// [`StructuralValue`] implementation.
#[macro_export]
macro_rules! value_object {
    ($t:ty) => {
        impl ::core::cmp::PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                $crate::value_object::structural_eq(self, other)
            }
        }

        impl ::core::cmp::Eq for $t {}

        impl ::core::hash::Hash for $t {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                state.write_u64($crate::value_object::structural_hash(self));
            }
        }

        impl $crate::value_object::ValueObject for $t {}
    };
}
