//! Typed serial port parameters.
//!
//! The active interface section stores serial settings as strings exactly
//! as the user entered them. The dispatcher translates those strings into
//! the typed values below before handing them to a backend. Translation
//! never fails: each setting has a defined fallback, matching the fixed
//! candidate lists offered by the configuration dialog.

use std::time::Duration;

/// Serial data bit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataBits {
    /// 5 data bits.
    Five,
    /// 6 data bits.
    Six,
    /// 7 data bits.
    Seven,
    /// 8 data bits (default).
    #[default]
    Eight,
}

impl DataBits {
    /// Translate a stored setting string, falling back to
    /// [`Eight`](DataBits::Eight) for anything unrecognized.
    pub fn from_setting(s: &str) -> Self {
        match s {
            "5" => DataBits::Five,
            "6" => DataBits::Six,
            "7" => DataBits::Seven,
            _ => DataBits::Eight,
        }
    }
}

/// Serial parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Parity {
    /// No parity (default).
    #[default]
    None,
    /// Even parity.
    Even,
    /// Odd parity.
    Odd,
}

impl Parity {
    /// Translate a stored setting string, falling back to
    /// [`None`](Parity::None) for anything unrecognized.
    pub fn from_setting(s: &str) -> Self {
        match s {
            "EVEN" => Parity::Even,
            "ODD" => Parity::Odd,
            _ => Parity::None,
        }
    }
}

/// Serial stop bit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StopBits {
    /// 1 stop bit (default).
    #[default]
    One,
    /// 1.5 stop bits.
    OnePointFive,
    /// 2 stop bits.
    Two,
}

impl StopBits {
    /// Translate a stored setting string, falling back to
    /// [`One`](StopBits::One) for anything unrecognized.
    pub fn from_setting(s: &str) -> Self {
        match s {
            "1.5" => StopBits::OnePointFive,
            "2" => StopBits::Two,
            _ => StopBits::One,
        }
    }
}

/// Complete serial port configuration handed to a backend's
/// `configure_port`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialParams {
    /// Port path (e.g. `/dev/ttyUSB0` or `COM3`).
    pub port: String,
    /// Baud rate.
    pub baud: u32,
    /// Data bit count.
    pub data_bits: DataBits,
    /// Parity.
    pub parity: Parity,
    /// Stop bit count.
    pub stop_bits: StopBits,
    /// How long the backend should wait for a response before giving up.
    pub read_timeout: Duration,
}
