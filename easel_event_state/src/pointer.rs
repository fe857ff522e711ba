// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer button state shared by pointer events.

bitflags::bitflags! {
    /// Bitmask of buttons held down during a pointer event.
    ///
    /// Bit assignments match the W3C Pointer Events `buttons` field, so input
    /// sources fed by browser events can pass the mask through unchanged via
    /// [`PointerButtons::from_bits_truncate`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PointerButtons: u8 {
        /// Primary button (usually the left button).
        const PRIMARY   = 0b0000_0001;
        /// Secondary button (usually the right button).
        const SECONDARY = 0b0000_0010;
        /// Auxiliary button (usually the middle or wheel button).
        const AUXILIARY = 0b0000_0100;
        /// Fourth button (usually "browser back").
        const BACK      = 0b0000_1000;
        /// Fifth button (usually "browser forward").
        const FORWARD   = 0b0001_0000;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_values_match_the_buttons_field() {
        assert_eq!(PointerButtons::PRIMARY.bits(), 1);
        assert_eq!(PointerButtons::SECONDARY.bits(), 2);
        assert_eq!(PointerButtons::AUXILIARY.bits(), 4);
        assert_eq!(PointerButtons::BACK.bits(), 8);
        assert_eq!(PointerButtons::FORWARD.bits(), 16);
    }

    #[test]
    fn default_is_no_buttons() {
        assert_eq!(PointerButtons::default(), PointerButtons::empty());
    }

    #[test]
    fn chords_are_distinct_from_single_buttons() {
        let chord = PointerButtons::PRIMARY | PointerButtons::SECONDARY;
        assert_ne!(chord, PointerButtons::PRIMARY);
        assert!(chord.contains(PointerButtons::PRIMARY));
    }

    #[test]
    fn from_bits_truncate_drops_unknown_bits() {
        let buttons = PointerButtons::from_bits_truncate(0b1110_0001);
        assert_eq!(buttons, PointerButtons::PRIMARY);
    }
}
