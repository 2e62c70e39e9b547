use core::ops::RangeInclusive;

use super::{AudioSs, IpBlock};

bitflags::bitflags! {
    /// Interrupt causes of the AudioSS `INTR` register.
    ///
    /// Transmit causes occupy the low half-word, receive causes the high one.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AudioSsCause: u32 {
        /// Fewer entries in the TX FIFO than the trigger level.
        const TX_TRIGGER   = 1 << 0;
        /// TX FIFO is not full.
        const TX_NOT_FULL  = 1 << 1;
        /// TX FIFO is empty.
        const TX_EMPTY     = 1 << 4;
        /// Write to a full TX FIFO.
        const TX_OVERFLOW  = 1 << 5;
        /// Interface read from an empty TX FIFO.
        const TX_UNDERFLOW = 1 << 6;
        /// TX watchdog expired.
        const TX_WD        = 1 << 8;
        /// More entries in the RX FIFO than the trigger level.
        const RX_TRIGGER   = 1 << 16;
        /// RX FIFO is not empty.
        const RX_NOT_EMPTY = 1 << 18;
        /// RX FIFO is full.
        const RX_FULL      = 1 << 19;
        /// Interface write to a full RX FIFO.
        const RX_OVERFLOW  = 1 << 21;
        /// Read from an empty RX FIFO.
        const RX_UNDERFLOW = 1 << 22;
        /// RX watchdog expired.
        const RX_WD        = 1 << 24;
    }
}

impl IpBlock for AudioSs {
    type Cause = AudioSsCause;
    type Register = ();

    const NAME: &'static str = "AudioSS";
    const INTERRUPT_REGISTERS: &'static [()] = &[()];
    const WORD_LENGTHS: &'static [u8] = &[8, 16, 18, 20, 24, 32];
    const SCLK_DIVIDER: RangeInclusive<u16> = 1..=64;

    fn is_valid_channel_length(channel_length: u8) -> bool {
        Self::WORD_LENGTHS.contains(&channel_length)
    }
}
