use enumset::{enum_set, EnumSet};

use super::{I2sTranslation, Mapping};
use crate::{
    audioss::AudioSsInterface,
    event::invoke_callback,
    i2s::Error,
    ip::{Tdm, TdmCause},
    Direction,
    I2sEvent,
};

// The FIFO level interrupts (TxNotFull, TxEmpty, RxNotEmpty, RxFull) do not
// exist on this block and have no row in either table.
static TX_TABLE: [Mapping<TdmCause>; 3] = [
    (I2sEvent::TxHalfEmpty, TdmCause::TX_FIFO_TRIGGER),
    (I2sEvent::TxOverflow, TdmCause::TX_FIFO_OVERFLOW),
    (I2sEvent::TxUnderflow, TdmCause::TX_FIFO_UNDERFLOW),
];

static RX_TABLE: [Mapping<TdmCause>; 3] = [
    (I2sEvent::RxHalfFull, TdmCause::RX_FIFO_TRIGGER),
    (I2sEvent::RxOverflow, TdmCause::RX_FIFO_OVERFLOW),
    (I2sEvent::RxUnderflow, TdmCause::RX_FIFO_UNDERFLOW),
];

/// I2S capability table for engines driving the TDM block.
pub static TDM_I2S_INTERFACE: AudioSsInterface<Tdm, I2sEvent, Error> = AudioSsInterface {
    convert_interrupt_cause: <Tdm as I2sTranslation>::convert_interrupt_cause,
    convert_to_pdl: <Tdm as I2sTranslation>::convert_event,
    invoke_user_callback: invoke_callback,
    event_mask_empty: enum_set!(I2sEvent::TxEmpty),
    event_mask_half_empty: enum_set!(I2sEvent::TxHalfEmpty),
    event_mask_full: enum_set!(I2sEvent::RxFull),
    event_mask_half_full: enum_set!(I2sEvent::RxHalfFull),
    event_rx_complete: enum_set!(I2sEvent::AsyncRxComplete),
    event_tx_complete: enum_set!(I2sEvent::AsyncTxComplete),
    err_invalid_pin: Error::InvalidPin,
    err_invalid_arg: Error::InvalidArgument,
    err_clock: Error::Clock,
};

impl I2sTranslation for Tdm {
    const UNSUPPORTED_EVENTS: EnumSet<I2sEvent> = enum_set!(
        I2sEvent::TxNotFull | I2sEvent::TxEmpty | I2sEvent::RxNotEmpty | I2sEvent::RxFull
    );

    fn table(register: Direction) -> &'static [Mapping<TdmCause>] {
        match register {
            Direction::Tx => &TX_TABLE,
            Direction::Rx => &RX_TABLE,
        }
    }

    fn interface() -> &'static AudioSsInterface<Self, I2sEvent, Error> {
        &TDM_I2S_INTERFACE
    }
}
