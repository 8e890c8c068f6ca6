//! Newtype IDs for type-safe record references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different record collections.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `u64` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_u64()`
/// - `From<u64>` and `Into<u64>` implementations
///
/// # Example
///
/// ```rust
/// # use bizboard_core::define_id;
/// define_id!(InvoiceId);
/// define_id!(ClientId);
///
/// let invoice_id = InvoiceId::new(1);
/// let client_id = ClientId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: InvoiceId = client_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Create a new ID from a u64 value.
            #[must_use]
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Get the underlying u64 value.
            #[must_use]
            pub const fn as_u64(&self) -> u64 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(RevenueId);
define_id!(ExpenseId);
define_id!(AppointmentId);
define_id!(SubscriptionId);

/// Strictly monotonic identifier source for one collection.
///
/// Values start at 1 and are never handed out twice, regardless of how many
/// records are created within the same clock tick.
#[derive(Debug, Clone, Default)]
pub struct IdSequence {
    last: u64,
}

impl IdSequence {
    /// Create a sequence whose first issued value is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Issue the next identifier value.
    ///
    /// Saturates at `u64::MAX`; a session never gets anywhere near it.
    pub const fn issue(&mut self) -> u64 {
        self.last = self.last.saturating_add(1);
        self.last
    }

    /// Record that `value` is already in use so it is never issued.
    pub fn observe(&mut self, value: u64) {
        self.last = self.last.max(value);
    }

    /// The most recently issued or observed value (0 if none).
    #[must_use]
    pub const fn last(&self) -> u64 {
        self.last
    }
}
