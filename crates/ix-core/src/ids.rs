//! Strongly typed identifier wrappers.
//!
//! Vehicle numbers are assigned from 1, so unlike slot indices they are never
//! used directly as `Vec` offsets.  The inner integer is `pub` so report code
//! can print the raw sequence number.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The raw sequence number.
            #[inline(always)]
            pub fn get(self) -> $inner {
                self.0
            }

            /// The identifier that follows `self`.
            #[inline(always)]
            pub fn next(self) -> $name {
                $name(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "#{}", self.0)
            }
        }
    };
}

typed_id! {
    /// Sequence number of a vehicle.  The first vehicle of a run is `VehicleId(1)`.
    pub struct VehicleId(u32);
}

impl VehicleId {
    /// The number handed to the first vehicle of every run.
    pub const FIRST: VehicleId = VehicleId(1);
}
