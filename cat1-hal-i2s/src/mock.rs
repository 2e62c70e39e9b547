//! In-memory audio subsystem engine for host tests.

extern crate std;

use std::collections::VecDeque;

use bitflags::Flags;
use enumset::EnumSet;

use crate::{
    audioss::{AudioSsConfig, AudioSsInterface, AudioSsPins, AudioSubsystem},
    event::{CallbackData, I2sEvent},
    i2s::Error,
    ip::IpBlock,
    Direction,
};

pub(crate) type MockPin = u8;

/// A pin no signal can be routed to.
pub(crate) const INVALID_PIN: MockPin = 0xff;

/// Words each FIFO can hold.
pub(crate) const FIFO_DEPTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MockClock(pub u8);

pub(crate) struct MockEngine<Ip: IpBlock> {
    pub tx_pins: Option<AudioSsPins<MockPin>>,
    pub rx_pins: Option<AudioSsPins<MockPin>>,
    pub mclk: Option<MockPin>,
    pub config: AudioSsConfig,
    pub clock: Option<MockClock>,
    pub interface: &'static AudioSsInterface<Ip, I2sEvent, Error>,
    pub enabled_events: EnumSet<I2sEvent>,
    pub intr_priority: Option<u8>,
    pub tx_started: bool,
    pub rx_started: bool,
    pub tx_fifo: VecDeque<u32>,
    pub rx_fifo: VecDeque<u32>,
    callback: CallbackData<I2sEvent>,
}

impl<Ip: IpBlock> MockEngine<Ip> {
    fn check_clock(
        interface: &AudioSsInterface<Ip, I2sEvent, Error>,
        config: &AudioSsConfig,
        mclk: Option<MockPin>,
        sample_rate_hz: u32,
    ) -> Result<(), Error> {
        if sample_rate_hz == 0 {
            return Err(interface.err_clock);
        }

        if mclk.is_some() {
            let sclk_hz =
                sample_rate_hz * u32::from(config.channel_length) * u32::from(config.num_channels);
            let divider = config.mclk_hz / sclk_hz;
            let in_range = u16::try_from(divider)
                .map(|divider| Ip::SCLK_DIVIDER.contains(&divider))
                .unwrap_or(false);
            if !in_range || config.mclk_hz % sclk_hz != 0 {
                return Err(interface.err_clock);
            }
        }

        Ok(())
    }

    /// Interrupt causes currently unmasked in `register`.
    pub fn enabled_causes(&self, register: Ip::Register) -> Ip::Cause {
        (self.interface.convert_to_pdl)(self.enabled_events, register)
    }

    /// Runs the interrupt handler for a raw cause mask pending in `register`.
    pub fn raise(&self, register: Ip::Register, pending: Ip::Cause) {
        let cause = pending.intersection(self.enabled_causes(register));
        let events = (self.interface.convert_interrupt_cause)(cause, register);

        if !events.is_empty() {
            (self.interface.invoke_user_callback)(&self.callback, events);
        }
    }

    /// Shifts every queued word out and reports the transfer as complete.
    pub fn transmit_all(&mut self) {
        self.tx_fifo.clear();

        let done = self.interface.event_tx_complete;
        if self.enabled_events.is_superset(done) {
            (self.interface.invoke_user_callback)(&self.callback, done);
        }
    }

    /// Shifts `words` in and reports the transfer as complete.
    pub fn receive(&mut self, words: &[u32]) {
        let room = FIFO_DEPTH - self.rx_fifo.len();
        self.rx_fifo.extend(words.iter().take(room));

        let done = self.interface.event_rx_complete;
        if self.enabled_events.is_superset(done) {
            (self.interface.invoke_user_callback)(&self.callback, done);
        }
    }

    fn pins(&self, direction: Direction) -> Option<AudioSsPins<MockPin>> {
        match direction {
            Direction::Tx => self.tx_pins,
            Direction::Rx => self.rx_pins,
        }
    }
}

impl<Ip: IpBlock> AudioSubsystem<I2sEvent, Error> for MockEngine<Ip> {
    type Ip = Ip;
    type Pin = MockPin;
    type Clock = MockClock;

    fn init(
        tx_pins: Option<AudioSsPins<MockPin>>,
        rx_pins: Option<AudioSsPins<MockPin>>,
        mclk: Option<MockPin>,
        config: &AudioSsConfig,
        clock: Option<MockClock>,
        interface: &'static AudioSsInterface<Ip, I2sEvent, Error>,
    ) -> Result<Self, Error> {
        let pins = tx_pins
            .iter()
            .chain(rx_pins.iter())
            .flat_map(|pins| [pins.sck, pins.ws, pins.data]);
        if pins.chain(mclk).any(|pin| pin == INVALID_PIN) {
            return Err(interface.err_invalid_pin);
        }

        if tx_pins.is_none() && rx_pins.is_none() {
            return Err(interface.err_invalid_arg);
        }

        if !Ip::is_valid_format(config.word_length, config.channel_length) {
            return Err(interface.err_invalid_arg);
        }

        Self::check_clock(interface, config, mclk, config.sample_rate_hz)?;

        Ok(Self {
            tx_pins,
            rx_pins,
            mclk,
            config: *config,
            clock,
            interface,
            enabled_events: EnumSet::empty(),
            intr_priority: None,
            tx_started: false,
            rx_started: false,
            tx_fifo: VecDeque::new(),
            rx_fifo: VecDeque::new(),
            callback: CallbackData::new(),
        })
    }

    fn callback_data(&self) -> &CallbackData<I2sEvent> {
        &self.callback
    }

    fn set_sample_rate(&mut self, sample_rate_hz: u32) -> Result<(), Error> {
        Self::check_clock(self.interface, &self.config, self.mclk, sample_rate_hz)?;
        self.config.sample_rate_hz = sample_rate_hz;
        Ok(())
    }

    fn enable_event(&mut self, event: EnumSet<I2sEvent>, intr_priority: u8, enable: bool) {
        if enable {
            self.enabled_events |= event;
        } else {
            self.enabled_events -= event;
        }
        self.intr_priority = Some(intr_priority);
    }

    fn start(&mut self, direction: Direction) -> Result<(), Error> {
        if self.pins(direction).is_none() {
            return Err(self.interface.err_invalid_arg);
        }

        match direction {
            Direction::Tx => self.tx_started = true,
            Direction::Rx => self.rx_started = true,
        }
        Ok(())
    }

    fn stop(&mut self, direction: Direction) -> Result<(), Error> {
        match direction {
            Direction::Tx => self.tx_started = false,
            Direction::Rx => self.rx_started = false,
        }
        Ok(())
    }

    fn clear(&mut self, direction: Direction) -> Result<(), Error> {
        match direction {
            Direction::Tx => self.tx_fifo.clear(),
            Direction::Rx => self.rx_fifo.clear(),
        }
        Ok(())
    }

    fn is_enabled(&self, direction: Direction) -> bool {
        match direction {
            Direction::Tx => self.tx_started,
            Direction::Rx => self.rx_started,
        }
    }

    fn is_busy(&self, direction: Direction) -> bool {
        match direction {
            Direction::Tx => self.tx_started && !self.tx_fifo.is_empty(),
            Direction::Rx => self.rx_started && !self.rx_fifo.is_empty(),
        }
    }

    fn read(&mut self, data: &mut [u32]) -> Result<usize, Error> {
        let count = data.len().min(self.rx_fifo.len());
        for (slot, word) in data.iter_mut().zip(self.rx_fifo.drain(..count)) {
            *slot = word;
        }
        Ok(count)
    }

    fn write(&mut self, data: &[u32]) -> Result<usize, Error> {
        if self.tx_pins.is_none() {
            return Err(self.interface.err_invalid_arg);
        }

        let count = data.len().min(FIFO_DEPTH - self.tx_fifo.len());
        self.tx_fifo.extend(&data[..count]);
        Ok(count)
    }
}
