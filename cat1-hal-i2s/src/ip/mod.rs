//! # Audio IP blocks
//!
//! CAT1 devices carry exactly one of two audio IP blocks. They expose
//! different interrupt cause registers:
//!
//! | Block | Cause type | Interrupt registers |
//! |-------|------------|---------------------|
//! | [`AudioSs`] | [`AudioSsCause`] | one, shared by both directions |
//! | [`Tdm`] | [`TdmCause`] | one per direction, selected by [`Direction`] |
//!
//! Each block also carries the word/channel length and clock divider limits
//! the engine validates against.
//!
//! [`Direction`]: crate::Direction

use core::{fmt::Debug, ops::RangeInclusive};

use bitflags::Flags;

pub use self::{audioss::AudioSsCause, tdm::TdmCause};
use crate::private::Sealed;

mod audioss;
mod tdm;

/// An audio IP block.
///
/// Implemented by the zero-sized [`AudioSs`] and [`Tdm`] markers.
pub trait IpBlock: Sealed + Sized + 'static {
    /// Interrupt cause bits as read from the block's interrupt registers.
    type Cause: Flags<Bits = u32> + Copy + Debug + PartialEq;

    /// Selects the interrupt register a cause mask belongs to.
    ///
    /// `()` on blocks with a single interrupt register.
    type Register: Copy + Debug + PartialEq;

    /// Human readable block name, used in log output.
    const NAME: &'static str;

    /// Every interrupt register the block exposes.
    const INTERRUPT_REGISTERS: &'static [Self::Register];

    /// Supported word lengths, in bits.
    const WORD_LENGTHS: &'static [u8];

    /// Supported SCLK divider values.
    const SCLK_DIVIDER: RangeInclusive<u16>;

    /// Returns `true` if `channel_length` bits can be used as a channel slot.
    fn is_valid_channel_length(channel_length: u8) -> bool;

    /// Returns `true` if the block can frame `word_length` bit words into
    /// `channel_length` bit channels.
    fn is_valid_format(word_length: u8, channel_length: u8) -> bool {
        Self::WORD_LENGTHS.contains(&word_length)
            && Self::is_valid_channel_length(channel_length)
            && channel_length >= word_length
    }
}

/// The dedicated audio subsystem block.
///
/// A single interrupt register reports causes of both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AudioSs;

/// The TDM block.
///
/// Transmit and receive units have separate interrupt registers with the same
/// bit layout. The FIFO full/empty level interrupts do not exist on this
/// block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tdm;

impl Sealed for AudioSs {}
impl Sealed for Tdm {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;

    #[test]
    fn audioss_formats() {
        assert!(AudioSs::is_valid_format(16, 16));
        assert!(AudioSs::is_valid_format(24, 32));
        assert!(AudioSs::is_valid_format(18, 20));

        // Channel narrower than the word.
        assert!(!AudioSs::is_valid_format(32, 24));
        // 10 bit words are a TDM only feature.
        assert!(!AudioSs::is_valid_format(10, 16));
        // Channels are restricted to the word length set.
        assert!(!AudioSs::is_valid_format(16, 17));
    }

    #[test]
    fn tdm_formats() {
        assert!(Tdm::is_valid_format(10, 16));
        assert!(Tdm::is_valid_format(14, 14));
        assert!(Tdm::is_valid_format(16, 17));
        assert!(Tdm::is_valid_format(32, 32));

        assert!(!Tdm::is_valid_format(11, 16));
        assert!(!Tdm::is_valid_format(24, 20));
        assert!(!Tdm::is_valid_format(32, 33));
        assert!(!Tdm::is_valid_format(8, 7));
    }

    #[test]
    fn divider_ranges() {
        assert_eq!(AudioSs::SCLK_DIVIDER, 1..=64);
        assert_eq!(Tdm::SCLK_DIVIDER, 2..=256);
    }

    #[test]
    fn interrupt_registers() {
        assert_eq!(AudioSs::INTERRUPT_REGISTERS, &[()]);
        assert_eq!(Tdm::INTERRUPT_REGISTERS, &[Direction::Tx, Direction::Rx]);
    }
}
