//! # Inter-IC Sound (I2S) for CAT1 devices
//!
//! ## Overview
//!
//! CAT1 devices carry one of two mutually exclusive audio IP blocks: the
//! dedicated audio subsystem (AudioSS) or the TDM block. Both are driven by a
//! shared audio subsystem engine which owns clock setup, pin muxing, FIFO
//! management and interrupt wiring. This crate is the I2S personality on top of
//! that engine.
//!
//! It provides:
//! - a hardware-agnostic event vocabulary, [`I2sEvent`],
//! - the translation between that vocabulary and the interrupt cause bits of
//!   each IP block (see [`translate`]),
//! - the callback slot the engine dispatches into from interrupt context,
//! - the [`I2s`] driver which assembles the I2S specific configuration and
//!   hands it to the engine.
//!
//! The IP block is picked by the engine: an [`audioss::AudioSubsystem`]
//! implementation names it through its `Ip` associated type, and the matching
//! translation tables are used from then on.
//!
//! ## Example
//!
//! ```rust,ignore
//! use cat1_hal_i2s::{Config, I2s, I2sEvent, Pins};
//!
//! let config = Config::default()
//!     .with_sample_rate_hz(48_000)
//!     .with_word_length(24)
//!     .with_channel_length(32);
//!
//! let mut i2s: I2s<Engine> = I2s::new(
//!     Some(Pins::new(P5_1, P5_2, P5_3)),
//!     None,
//!     None,
//!     &config,
//!     None,
//! )?;
//!
//! i2s.register_callback(Some(on_i2s_event), core::ptr::null_mut());
//! i2s.enable_event(I2sEvent::TxHalfEmpty | I2sEvent::TxUnderflow, 3, true);
//! i2s.start_tx()?;
//! ```
//!
//! ## Feature Flags
#![doc = document_features::document_features!()]
#![deny(missing_docs, rust_2018_idioms)]
#![no_std]

// MUST be the first module
mod fmt;

pub mod audioss;
pub mod event;
pub mod i2s;
pub mod ip;
pub mod translate;

#[cfg(test)]
mod mock;

pub use self::{
    event::{CallbackData, I2sEvent, I2sEventCallback},
    i2s::{Config, Error, I2s, Pins},
    ip::{AudioSs, IpBlock, Tdm},
    translate::I2sTranslation,
};

/// Transfer direction of an I2S unit.
///
/// On the TDM block each direction has its own interrupt registers, so cause
/// masks read from it are always qualified by the direction they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Transmit unit.
    Tx,
    /// Receive unit.
    Rx,
}

mod private {
    pub trait Sealed {}
}
