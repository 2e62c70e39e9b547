//! # I2S driver
//!
//! ## Overview
//!
//! [`I2s`] is a thin front end over an [`AudioSubsystem`] engine. It builds
//! the engine configuration for the I2S format (two channels, both active,
//! full width word select), forwards the runtime operations and owns the
//! registration of the user callback.
//!
//! ## Configuration
//!
//! | Field | Default |
//! |-------|---------|
//! | `is_tx_slave` | `false` |
//! | `is_rx_slave` | `false` |
//! | `mclk_hz` | `0` (no MCLK input) |
//! | `channel_length` | 16 |
//! | `word_length` | 16 |
//! | `sample_rate_hz` | 44100 |
//!
//! Values are not checked here. The engine validates them against the limits
//! of its IP block (see [`IpBlock`]) and reports [`Error`]s.

use core::ffi::c_void;

use enumset::EnumSet;

use crate::{
    audioss::{AudioSsConfig, AudioSsPins, AudioSubsystem},
    event::{I2sEvent, I2sEventCallback},
    ip::IpBlock,
    translate::I2sTranslation,
    Direction,
};

/// I2S channels per frame.
const NUM_CHANNELS: u8 = 2;

/// Both channels of the frame carry data.
const CHANNEL_MASK: u32 = 0b11;

/// I2S Error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// A pin cannot be used for the signal it was passed as.
    InvalidPin,
    /// A configuration value is outside of what the peripheral supports.
    InvalidArgument,
    /// The sample rate cannot be derived from the clock source.
    Clock,
}

impl core::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidPin => write!(f, "The pin is not valid for the requested I2S signal"),
            Error::InvalidArgument => write!(f, "Invalid I2S configuration argument"),
            Error::Clock => write!(
                f,
                "The requested sample rate cannot be derived from the clock source"
            ),
        }
    }
}

/// Pins of one I2S direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pins<P> {
    /// Serial clock (BCLK).
    pub sck: P,
    /// Word select (LRCLK).
    pub ws: P,
    /// Serial data, DOUT for transmit and DIN for receive.
    pub data: P,
}

impl<P> Pins<P> {
    /// Groups the three signals of one direction.
    pub const fn new(sck: P, ws: P, data: P) -> Self {
        Self { sck, ws, data }
    }
}

impl<P> From<Pins<P>> for AudioSsPins<P> {
    fn from(pins: Pins<P>) -> Self {
        AudioSsPins {
            sck: pins.sck,
            ws: pins.ws,
            data: pins.data,
        }
    }
}

/// I2S peripheral configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub struct Config {
    is_tx_slave: bool,
    is_rx_slave: bool,
    mclk_hz: u32,
    channel_length: u8,
    word_length: u8,
    sample_rate_hz: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            is_tx_slave: false,
            is_rx_slave: false,
            mclk_hz: 0,
            channel_length: 16,
            word_length: 16,
            sample_rate_hz: 44100,
        }
    }
}

impl Config {
    /// Assign the given value to the `is_tx_slave` field.
    #[must_use]
    pub fn with_tx_slave(mut self, is_tx_slave: bool) -> Self {
        self.is_tx_slave = is_tx_slave;
        self
    }

    /// Assign the given value to the `is_rx_slave` field.
    #[must_use]
    pub fn with_rx_slave(mut self, is_rx_slave: bool) -> Self {
        self.is_rx_slave = is_rx_slave;
        self
    }

    /// Assign the given value to the `mclk_hz` field.
    ///
    /// Only meaningful when an MCLK pin is passed to [`I2s::new`].
    #[must_use]
    pub fn with_mclk_hz(mut self, mclk_hz: u32) -> Self {
        self.mclk_hz = mclk_hz;
        self
    }

    /// Assign the given value to the `channel_length` field.
    #[must_use]
    pub fn with_channel_length(mut self, channel_length: u8) -> Self {
        self.channel_length = channel_length;
        self
    }

    /// Assign the given value to the `word_length` field.
    #[must_use]
    pub fn with_word_length(mut self, word_length: u8) -> Self {
        self.word_length = word_length;
        self
    }

    /// Assign the given value to the `sample_rate_hz` field.
    #[must_use]
    pub fn with_sample_rate_hz(mut self, sample_rate_hz: u32) -> Self {
        self.sample_rate_hz = sample_rate_hz;
        self
    }

    /// The transmitter is clocked by an external master.
    pub fn is_tx_slave(&self) -> bool {
        self.is_tx_slave
    }

    /// The receiver is clocked by an external master.
    pub fn is_rx_slave(&self) -> bool {
        self.is_rx_slave
    }

    /// Frequency of the MCLK input.
    pub fn mclk_hz(&self) -> u32 {
        self.mclk_hz
    }

    /// Bits per channel slot.
    pub fn channel_length(&self) -> u8 {
        self.channel_length
    }

    /// Bits per sample word.
    pub fn word_length(&self) -> u8 {
        self.word_length
    }

    /// Frame rate, in Hz.
    pub fn sample_rate_hz(&self) -> u32 {
        self.sample_rate_hz
    }

    fn to_audioss(self) -> AudioSsConfig {
        AudioSsConfig {
            is_tx_slave: self.is_tx_slave,
            is_rx_slave: self.is_rx_slave,
            mclk_hz: self.mclk_hz,
            channel_length: self.channel_length,
            word_length: self.word_length,
            sample_rate_hz: self.sample_rate_hz,
            num_channels: NUM_CHANNELS,
            channel_mask: CHANNEL_MASK,
            tx_ws_full: true,
            rx_ws_full: true,
            is_i2s: true,
        }
    }
}

/// I2S driver on top of the engine `D`.
pub struct I2s<D> {
    engine: D,
}

impl<D> I2s<D>
where
    D: AudioSubsystem<I2sEvent, Error>,
    D::Ip: I2sTranslation,
{
    /// Claims the peripheral and configures it for I2S.
    ///
    /// A direction without pins is left unused. `mclk` selects an external
    /// master clock input running at [`Config::mclk_hz`]; `clock` hands a
    /// pre-allocated clock source to the engine.
    pub fn new(
        tx_pins: Option<Pins<D::Pin>>,
        rx_pins: Option<Pins<D::Pin>>,
        mclk: Option<D::Pin>,
        config: &Config,
        clock: Option<D::Clock>,
    ) -> Result<Self, Error> {
        let converted = config.to_audioss();

        debug!(
            "I2S init on {}: tx={} rx={} mclk={} sample_rate={}Hz word={} channel={}",
            D::Ip::NAME,
            tx_pins.is_some(),
            rx_pins.is_some(),
            mclk.is_some(),
            converted.sample_rate_hz,
            converted.word_length,
            converted.channel_length,
        );

        let engine = D::init(
            tx_pins.map(AudioSsPins::from),
            rx_pins.map(AudioSsPins::from),
            mclk,
            &converted,
            clock,
            D::Ip::interface(),
        )
        .inspect_err(|_e| warn!("I2S init failed: {:?}", _e))?;

        Ok(Self { engine })
    }

    /// Installs `callback` with its context, replacing the previous pair.
    ///
    /// Passing `None` removes the current callback. The callback is called
    /// from interrupt context with `arg` and the events that fired; only
    /// events enabled with [`I2s::enable_event`] are reported.
    pub fn register_callback(&self, callback: Option<I2sEventCallback>, arg: *mut c_void) {
        let data = self.engine.callback_data();
        match callback {
            Some(callback) => data.set(callback, arg),
            None => data.clear(),
        }
        trace!("I2S callback registered: {}", callback.is_some());
    }

    /// Dispatches an interrupt cause mask read from `register`.
    ///
    /// Meant to be called by the engine's interrupt handler. Causes without an
    /// event are dropped; nothing is called if no event remains or no callback
    /// is registered.
    pub fn handle_interrupt(
        &self,
        cause: <D::Ip as IpBlock>::Cause,
        register: <D::Ip as IpBlock>::Register,
    ) {
        let interface = D::Ip::interface();
        let events = (interface.convert_interrupt_cause)(cause, register);

        if !events.is_empty() {
            (interface.invoke_user_callback)(self.engine.callback_data(), events);
        }
    }

    /// Changes the sample rate.
    pub fn set_sample_rate(&mut self, sample_rate_hz: u32) -> Result<(), Error> {
        self.engine.set_sample_rate(sample_rate_hz)
    }

    /// Enables or disables reporting of `event` at interrupt priority
    /// `intr_priority`.
    ///
    /// Events the IP block cannot raise are accepted and never reported.
    pub fn enable_event(&mut self, event: EnumSet<I2sEvent>, intr_priority: u8, enable: bool) {
        let unsupported = event & <D::Ip as I2sTranslation>::UNSUPPORTED_EVENTS;
        if enable && !unsupported.is_empty() {
            debug!(
                "I2S events {:#x} not available on {}",
                unsupported.as_u32(),
                D::Ip::NAME
            );
        }

        self.engine.enable_event(event, intr_priority, enable);
    }

    /// Starts transmitting.
    pub fn start_tx(&mut self) -> Result<(), Error> {
        self.engine.start(Direction::Tx)
    }

    /// Stops transmitting.
    pub fn stop_tx(&mut self) -> Result<(), Error> {
        self.engine.stop(Direction::Tx)
    }

    /// Drops the content of the transmit FIFO.
    pub fn clear_tx(&mut self) -> Result<(), Error> {
        self.engine.clear(Direction::Tx)
    }

    /// Starts receiving.
    pub fn start_rx(&mut self) -> Result<(), Error> {
        self.engine.start(Direction::Rx)
    }

    /// Stops receiving.
    pub fn stop_rx(&mut self) -> Result<(), Error> {
        self.engine.stop(Direction::Rx)
    }

    /// Drops the content of the receive FIFO.
    pub fn clear_rx(&mut self) -> Result<(), Error> {
        self.engine.clear(Direction::Rx)
    }

    /// Returns `true` if the transmitter is started.
    pub fn is_tx_enabled(&self) -> bool {
        self.engine.is_enabled(Direction::Tx)
    }

    /// Returns `true` if the transmitter still has data to send.
    pub fn is_tx_busy(&self) -> bool {
        self.engine.is_busy(Direction::Tx)
    }

    /// Returns `true` if the receiver is started.
    pub fn is_rx_enabled(&self) -> bool {
        self.engine.is_enabled(Direction::Rx)
    }

    /// Returns `true` if the receiver is in the middle of a transfer.
    pub fn is_rx_busy(&self) -> bool {
        self.engine.is_busy(Direction::Rx)
    }

    /// Reads up to `data.len()` received words, returns how many were read.
    pub fn read(&mut self, data: &mut [u32]) -> Result<usize, Error> {
        self.engine.read(data)
    }

    /// Queues up to `data.len()` words for transmission, returns how many
    /// were accepted.
    pub fn write(&mut self, data: &[u32]) -> Result<usize, Error> {
        self.engine.write(data)
    }

    /// The underlying engine.
    pub fn engine(&self) -> &D {
        &self.engine
    }

    /// The underlying engine, mutably.
    pub fn engine_mut(&mut self) -> &mut D {
        &mut self.engine
    }
}
