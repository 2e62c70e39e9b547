use core::ops::RangeInclusive;

use super::{IpBlock, Tdm};
use crate::Direction;

bitflags::bitflags! {
    /// Interrupt causes of the TDM `TX_STRUCT.INTR` and `RX_STRUCT.INTR`
    /// registers.
    ///
    /// Both registers share one layout, so `TX_*` and `RX_*` constants alias
    /// the same bits. A mask is only meaningful together with the
    /// [`Direction`] of the register it was read from.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TdmCause: u32 {
        /// Fewer entries in the TX FIFO than the trigger level.
        const TX_FIFO_TRIGGER   = 1 << 0;
        /// Write to a full TX FIFO.
        const TX_FIFO_OVERFLOW  = 1 << 1;
        /// Interface read from an empty TX FIFO.
        const TX_FIFO_UNDERFLOW = 1 << 2;
        /// TX interface ran out of data mid-frame.
        const TX_IF_UNDERFLOW   = 1 << 8;

        /// More entries in the RX FIFO than the trigger level.
        const RX_FIFO_TRIGGER   = 1 << 0;
        /// Interface write to a full RX FIFO.
        const RX_FIFO_OVERFLOW  = 1 << 1;
        /// Read from an empty RX FIFO.
        const RX_FIFO_UNDERFLOW = 1 << 2;
        /// RX interface could not store a received word.
        const RX_IF_OVERFLOW    = 1 << 8;
    }
}

impl IpBlock for Tdm {
    type Cause = TdmCause;
    type Register = Direction;

    const NAME: &'static str = "TDM";
    const INTERRUPT_REGISTERS: &'static [Direction] = &[Direction::Tx, Direction::Rx];
    const WORD_LENGTHS: &'static [u8] = &[8, 10, 12, 14, 16, 18, 20, 24, 32];
    const SCLK_DIVIDER: RangeInclusive<u16> = 2..=256;

    fn is_valid_channel_length(channel_length: u8) -> bool {
        (8..=32).contains(&channel_length)
    }
}
