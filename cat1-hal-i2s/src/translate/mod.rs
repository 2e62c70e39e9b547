//! # Event ⇄ interrupt cause translation
//!
//! ## Overview
//!
//! The engine works in terms of the raw interrupt cause bits of the IP block,
//! application code in terms of [`I2sEvent`]s. This module maps between the
//! two:
//!
//! - event → cause when the application subscribes to events, to find the
//!   interrupts that need to be unmasked,
//! - cause → event when an interrupt fires, to build the event set handed to
//!   the user callback.
//!
//! Each IP block has fixed one-to-one tables. The TDM block has one table per
//! direction and no entry for the FIFO full/empty level events, which are
//! dropped on the way to the hardware and never produced on the way back.
//! Neither direction ever fails; bits without a counterpart are ignored.
//!
//! | Event | AudioSS cause | TDM cause |
//! |-------|---------------|-----------|
//! | `TxNotFull` | `TX_NOT_FULL` | - |
//! | `TxHalfEmpty` | `TX_TRIGGER` | `TX_FIFO_TRIGGER` (TX) |
//! | `TxEmpty` | `TX_EMPTY` | - |
//! | `TxOverflow` | `TX_OVERFLOW` | `TX_FIFO_OVERFLOW` (TX) |
//! | `TxUnderflow` | `TX_UNDERFLOW` | `TX_FIFO_UNDERFLOW` (TX) |
//! | `RxNotEmpty` | `RX_NOT_EMPTY` | - |
//! | `RxHalfFull` | `RX_TRIGGER` | `RX_FIFO_TRIGGER` (RX) |
//! | `RxFull` | `RX_FULL` | - |
//! | `RxOverflow` | `RX_OVERFLOW` | `RX_FIFO_OVERFLOW` (RX) |
//! | `RxUnderflow` | `RX_UNDERFLOW` | `RX_FIFO_UNDERFLOW` (RX) |

use bitflags::Flags;
use enumset::EnumSet;

pub use self::{audioss::AUDIOSS_I2S_INTERFACE, tdm::TDM_I2S_INTERFACE};
use crate::{audioss::AudioSsInterface, i2s::Error, ip::IpBlock, I2sEvent};

mod audioss;
mod tdm;

/// One row of a translation table.
pub type Mapping<C> = (I2sEvent, C);

/// I2S event vocabulary of an IP block.
pub trait I2sTranslation: IpBlock {
    /// Hardware events this block has no interrupt cause for.
    ///
    /// Requesting them is allowed; they are silently dropped.
    const UNSUPPORTED_EVENTS: EnumSet<I2sEvent>;

    /// The translation table of `register`.
    fn table(register: Self::Register) -> &'static [Mapping<Self::Cause>];

    /// The capability table handed to the engine.
    fn interface() -> &'static AudioSsInterface<Self, I2sEvent, Error>;

    /// Events that can be produced from `register`.
    fn supported_events(register: Self::Register) -> EnumSet<I2sEvent> {
        Self::table(register).iter().map(|(event, _)| *event).collect()
    }

    /// Converts a cause mask read from `register` to the events it reports.
    fn convert_interrupt_cause(cause: Self::Cause, register: Self::Register) -> EnumSet<I2sEvent> {
        cause_to_events(Self::table(register), cause)
    }

    /// Converts `events` to the causes that need to be enabled in `register`.
    fn convert_event(events: EnumSet<I2sEvent>, register: Self::Register) -> Self::Cause {
        events_to_cause(Self::table(register), events)
    }
}

fn cause_to_events<C>(table: &[Mapping<C>], cause: C) -> EnumSet<I2sEvent>
where
    C: Flags + Copy,
{
    table
        .iter()
        .filter(|(_, bit)| cause.contains(*bit))
        .map(|(event, _)| *event)
        .collect()
}

fn events_to_cause<C>(table: &[Mapping<C>], events: EnumSet<I2sEvent>) -> C
where
    C: Flags + Copy,
{
    let mut cause = C::empty();
    for (event, bit) in table {
        if events.contains(*event) {
            cause.insert(*bit);
        }
    }
    cause
}
