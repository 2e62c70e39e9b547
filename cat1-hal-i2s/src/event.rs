//! # I2S events and the user callback slot

use core::{cell::Cell, ffi::c_void};

use critical_section::Mutex;
use enumset::{EnumSet, EnumSetType};

/// Events reported by the I2S driver.
///
/// Events are independent flags; any subset may be requested through
/// [`I2s::enable_event`](crate::I2s::enable_event) and several may be reported
/// by a single interrupt. The discriminant is the bit position in the `u32`
/// representation of an `EnumSet<I2sEvent>`.
///
/// Not every IP block can raise every event, see
/// [`I2sTranslation::UNSUPPORTED_EVENTS`](crate::I2sTranslation::UNSUPPORTED_EVENTS).
#[derive(Debug, EnumSetType)]
#[enumset(repr = "u32")]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2sEvent {
    /// TX HW Buffer is not full.
    TxNotFull         = 0,
    /// TX HW Buffer is half empty.
    TxHalfEmpty       = 1,
    /// TX HW Buffer is empty.
    TxEmpty           = 2,
    /// Attempt to write when TX HW Buffer is full.
    TxOverflow        = 3,
    /// Interface ready to transfer data but TX HW Buffer is empty.
    TxUnderflow       = 4,
    /// RX HW Buffer is not empty.
    RxNotEmpty        = 5,
    /// RX HW Buffer is half full.
    RxHalfFull        = 6,
    /// RX HW Buffer is full.
    RxFull            = 7,
    /// Attempt to write when RX HW Buffer is full.
    RxOverflow        = 8,
    /// Attempt to read when RX HW Buffer is empty.
    RxUnderflow       = 9,
    /// Pending async transmit is complete.
    ///
    /// Raised by the engine's transfer logic, never by a hardware cause.
    AsyncTxComplete   = 10,
    /// Pending async receive is complete.
    ///
    /// Raised by the engine's transfer logic, never by a hardware cause.
    AsyncRxComplete   = 11,
}

/// Signature of a user event handler.
///
/// The first argument is the opaque context registered alongside the handler.
/// Handlers run in interrupt context.
pub type I2sEventCallback = fn(arg: *mut c_void, event: EnumSet<I2sEvent>);

/// Opaque user context. Never dereferenced by this crate.
#[derive(Clone, Copy)]
struct CallbackArg(*mut c_void);

// The pointer is only ever handed back to the callback it was registered with.
unsafe impl Send for CallbackArg {}

struct Callback<Ev: EnumSetType> {
    func: fn(*mut c_void, EnumSet<Ev>),
    arg: CallbackArg,
}

impl<Ev: EnumSetType> Clone for Callback<Ev> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Ev: EnumSetType> Copy for Callback<Ev> {}

/// A single callback/context pair, shared between thread mode and the
/// interrupt handler of one peripheral instance.
///
/// The pair is only ever read or written as a whole inside a critical section,
/// so an interrupt never observes a handler paired with another handler's
/// context.
pub struct CallbackData<Ev: EnumSetType> {
    inner: Mutex<Cell<Option<Callback<Ev>>>>,
}

impl<Ev: EnumSetType> CallbackData<Ev> {
    /// Creates an empty slot.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(None)),
        }
    }

    /// Installs `func` with its context, replacing any previous pair.
    pub fn set(&self, func: fn(*mut c_void, EnumSet<Ev>), arg: *mut c_void) {
        self.replace(Some(Callback {
            func,
            arg: CallbackArg(arg),
        }));
    }

    /// Removes the registered pair. Later dispatches become no-ops.
    pub fn clear(&self) {
        self.replace(None);
    }

    /// Returns `true` if a handler is currently installed.
    pub fn is_set(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow(cs).get().is_some())
    }

    /// Calls the registered handler with `event` and its context.
    ///
    /// Does nothing if no handler is installed. The handler itself runs
    /// outside of the critical section.
    pub fn invoke(&self, event: EnumSet<Ev>) {
        let callback = critical_section::with(|cs| self.inner.borrow(cs).get());

        if let Some(Callback { func, arg }) = callback {
            func(arg.0, event);
        }
    }

    fn replace(&self, callback: Option<Callback<Ev>>) {
        critical_section::with(|cs| self.inner.borrow(cs).set(callback));
    }
}

impl<Ev: EnumSetType> Default for CallbackData<Ev> {
    fn default() -> Self {
        Self::new()
    }
}

/// Dispatches `event` to the handler stored in `data`.
///
/// This is the `invoke_user_callback` entry of the I2S capability tables.
pub(crate) fn invoke_callback(data: &CallbackData<I2sEvent>, event: EnumSet<I2sEvent>) {
    trace!("I2S event {:#x}", event.as_u32());
    data.invoke(event);
}
