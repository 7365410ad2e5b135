//! Leveled assertions. Cheap invariants are checked at the simple level in every build; the more
//! expensive consistency checks of the domain representations only run when the level is raised
//! through `cfg(test)` or the `debug-checks` feature.
#![allow(non_upper_case_globals)]

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const munchkin_assert_LEVEL_DEFINITION: u8 = munchkin_assert_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const munchkin_assert_LEVEL_DEFINITION: u8 = munchkin_assert_EXTREME;

pub const munchkin_assert_SIMPLE: u8 = 1;
pub const munchkin_assert_MODERATE: u8 = 2;
pub const munchkin_assert_ADVANCED: u8 = 3;
pub const munchkin_assert_EXTREME: u8 = 4;

#[macro_export]
#[doc(hidden)]
macro_rules! print_munchkin_assert_warning_message {
    () => {
        if $crate::asserts::munchkin_assert_LEVEL_DEFINITION
            >= $crate::asserts::munchkin_assert_MODERATE
        {
            log::warn!("Potential performance degradation: the Munchkin assert level is set to {}, meaning many debug asserts are active which may result in performance degradation.", $crate::asserts::munchkin_assert_LEVEL_DEFINITION);
        };
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! munchkin_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::munchkin_assert_LEVEL_DEFINITION >= $crate::asserts::munchkin_assert_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! munchkin_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::munchkin_assert_LEVEL_DEFINITION >= $crate::asserts::munchkin_assert_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! munchkin_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::munchkin_assert_LEVEL_DEFINITION >= $crate::asserts::munchkin_assert_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! munchkin_assert_extreme {
    ($($arg:tt)*) => {
        if $crate::asserts::munchkin_assert_LEVEL_DEFINITION >= $crate::asserts::munchkin_assert_EXTREME {
            assert!($($arg)*);
        }
    };
}
