//! # Audio subsystem engine interface
//!
//! ## Overview
//!
//! The I2S and TDM drivers of CAT1 devices share one engine which programs
//! clocks, routes pins, manages the FIFOs and services the peripheral
//! interrupt. A driver personality plugs into that engine with:
//!
//! - an [`AudioSsConfig`] and optional [`AudioSsPins`] per direction, consumed
//!   once by [`AudioSubsystem::init`],
//! - an [`AudioSsInterface`] capability table that tells the engine how to
//!   speak the personality's event vocabulary and which error values to
//!   report.
//!
//! This crate does not implement an engine. It is provided by the platform
//! support crate of the target device.

use enumset::{EnumSet, EnumSetType};

use crate::{event::CallbackData, ip::IpBlock, Direction};

/// Serial clock, word select and data pins of one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AudioSsPins<P> {
    /// Serial clock.
    pub sck: P,
    /// Word select.
    pub ws: P,
    /// Serial data.
    pub data: P,
}

/// Engine level configuration of the peripheral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AudioSsConfig {
    /// Transmitter is clocked by an external master.
    pub is_tx_slave: bool,
    /// Receiver is clocked by an external master.
    pub is_rx_slave: bool,
    /// Frequency of the MCLK input, `0` if none is used.
    pub mclk_hz: u32,
    /// Number of bits in each channel slot.
    pub channel_length: u8,
    /// Number of bits in each sample word.
    pub word_length: u8,
    /// Frame rate, in Hz.
    pub sample_rate_hz: u32,
    /// Number of channels per frame.
    pub num_channels: u8,
    /// Active channels, bit `n` set for channel `n`.
    pub channel_mask: u32,
    /// Transmit word select pulse spans a full channel.
    pub tx_ws_full: bool,
    /// Receive word select pulse spans a full channel.
    pub rx_ws_full: bool,
    /// Frame in I2S format rather than TDM.
    pub is_i2s: bool,
}

/// Capability table of a driver personality.
///
/// `Ip` is the IP block the engine drives, `Ev` the personality's event type
/// and `E` its error type. The engine never interprets events beyond the
/// masks provided here.
pub struct AudioSsInterface<Ip: IpBlock, Ev: EnumSetType, E> {
    /// Converts interrupt causes read from a register to events.
    pub convert_interrupt_cause: fn(Ip::Cause, Ip::Register) -> EnumSet<Ev>,
    /// Converts events to the interrupt causes to enable in a register.
    pub convert_to_pdl: fn(EnumSet<Ev>, Ip::Register) -> Ip::Cause,
    /// Calls the user callback stored in the peripheral's callback slot.
    pub invoke_user_callback: fn(&CallbackData<Ev>, EnumSet<Ev>),
    /// Transmit FIFO empty.
    pub event_mask_empty: EnumSet<Ev>,
    /// Transmit FIFO half empty.
    pub event_mask_half_empty: EnumSet<Ev>,
    /// Receive FIFO full.
    pub event_mask_full: EnumSet<Ev>,
    /// Receive FIFO half full.
    pub event_mask_half_full: EnumSet<Ev>,
    /// Asynchronous receive finished.
    pub event_rx_complete: EnumSet<Ev>,
    /// Asynchronous transmit finished.
    pub event_tx_complete: EnumSet<Ev>,
    /// A pin cannot be routed to the requested signal.
    pub err_invalid_pin: E,
    /// A configuration value is out of range.
    pub err_invalid_arg: E,
    /// The requested clocking cannot be realized.
    pub err_clock: E,
}

impl<Ip: IpBlock, Ev: EnumSetType, E: Copy> Clone for AudioSsInterface<Ip, Ev, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Ip: IpBlock, Ev: EnumSetType, E: Copy> Copy for AudioSsInterface<Ip, Ev, E> {}

/// The shared audio subsystem engine.
///
/// Implementations own the peripheral, its interrupt and the callback slot.
/// From the interrupt handler they are expected to read the pending causes of
/// each of [`IpBlock::INTERRUPT_REGISTERS`], convert them with
/// [`AudioSsInterface::convert_interrupt_cause`] and pass non-empty results to
/// [`AudioSsInterface::invoke_user_callback`] together with
/// [`AudioSubsystem::callback_data`].
pub trait AudioSubsystem<Ev: EnumSetType, E: Copy>: Sized {
    /// IP block driven by this engine.
    type Ip: IpBlock;
    /// GPIO identifier.
    type Pin: Copy;
    /// Clock source handle.
    type Clock;

    /// Claims and configures the peripheral.
    ///
    /// `clock` is an optional pre-allocated clock source; the engine allocates
    /// one itself when `None` is passed and `mclk` is not used. All validation
    /// happens here, failures are reported with the errors from `interface`.
    fn init(
        tx_pins: Option<AudioSsPins<Self::Pin>>,
        rx_pins: Option<AudioSsPins<Self::Pin>>,
        mclk: Option<Self::Pin>,
        config: &AudioSsConfig,
        clock: Option<Self::Clock>,
        interface: &'static AudioSsInterface<Self::Ip, Ev, E>,
    ) -> Result<Self, E>;

    /// The callback slot dispatched into from the interrupt handler.
    fn callback_data(&self) -> &CallbackData<Ev>;

    /// Reconfigures the clock dividers for a new frame rate.
    fn set_sample_rate(&mut self, sample_rate_hz: u32) -> Result<(), E>;

    /// Enables or disables the interrupts backing `event`.
    fn enable_event(&mut self, event: EnumSet<Ev>, intr_priority: u8, enable: bool);

    /// Starts the unit of `direction`.
    fn start(&mut self, direction: Direction) -> Result<(), E>;

    /// Stops the unit of `direction`.
    fn stop(&mut self, direction: Direction) -> Result<(), E>;

    /// Drops everything held in the FIFO of `direction`.
    fn clear(&mut self, direction: Direction) -> Result<(), E>;

    /// Returns `true` if the unit of `direction` is started.
    fn is_enabled(&self, direction: Direction) -> bool;

    /// Returns `true` if the unit of `direction` has data in flight.
    fn is_busy(&self, direction: Direction) -> bool;

    /// Reads received words without blocking, returns how many were read.
    fn read(&mut self, data: &mut [u32]) -> Result<usize, E>;

    /// Queues words for transmission without blocking, returns how many were
    /// accepted.
    fn write(&mut self, data: &[u32]) -> Result<usize, E>;
}
