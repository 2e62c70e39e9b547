use enumset::{enum_set, EnumSet};

use super::{I2sTranslation, Mapping};
use crate::{
    audioss::AudioSsInterface,
    event::invoke_callback,
    i2s::Error,
    ip::{AudioSs, AudioSsCause},
    I2sEvent,
};

static TABLE: [Mapping<AudioSsCause>; 10] = [
    (I2sEvent::TxNotFull, AudioSsCause::TX_NOT_FULL),
    (I2sEvent::TxHalfEmpty, AudioSsCause::TX_TRIGGER),
    (I2sEvent::TxEmpty, AudioSsCause::TX_EMPTY),
    (I2sEvent::TxOverflow, AudioSsCause::TX_OVERFLOW),
    (I2sEvent::TxUnderflow, AudioSsCause::TX_UNDERFLOW),
    (I2sEvent::RxNotEmpty, AudioSsCause::RX_NOT_EMPTY),
    (I2sEvent::RxHalfFull, AudioSsCause::RX_TRIGGER),
    (I2sEvent::RxFull, AudioSsCause::RX_FULL),
    (I2sEvent::RxOverflow, AudioSsCause::RX_OVERFLOW),
    (I2sEvent::RxUnderflow, AudioSsCause::RX_UNDERFLOW),
];

/// I2S capability table for engines driving the AudioSS block.
pub static AUDIOSS_I2S_INTERFACE: AudioSsInterface<AudioSs, I2sEvent, Error> = AudioSsInterface {
    convert_interrupt_cause: <AudioSs as I2sTranslation>::convert_interrupt_cause,
    convert_to_pdl: <AudioSs as I2sTranslation>::convert_event,
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

impl I2sTranslation for AudioSs {
    const UNSUPPORTED_EVENTS: EnumSet<I2sEvent> = EnumSet::empty();

    fn table(_register: ()) -> &'static [Mapping<AudioSsCause>] {
        &TABLE
    }

    fn interface() -> &'static AudioSsInterface<Self, I2sEvent, Error> {
        &AUDIOSS_I2S_INTERFACE
    }
}
