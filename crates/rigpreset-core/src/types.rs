//! Core types used throughout rigpreset.
//!
//! These types give the preset records and the dispatcher a typed view over
//! the strings held in the section store: operating modes, CTCSS tone
//! configuration, and the closed registry of supported rig models.

use std::fmt;
use std::str::FromStr;

/// Operating mode of a VFO.
///
/// Covers the standard analog modes plus the data sub-modes used by
/// sound-card digital software. [`Unknown`](OperatingMode::Unknown) is the
/// state of a memory preset whose mode has never been assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OperatingMode {
    /// Mode not yet assigned.
    #[default]
    Unknown,
    /// Lower sideband voice.
    LSB,
    /// Upper sideband voice.
    USB,
    /// CW (morse), upper sideband offset.
    CW,
    /// CW reverse (lower sideband offset).
    CWR,
    /// Amplitude modulation.
    AM,
    /// Frequency modulation.
    FM,
    /// Radio teletype (FSK), upper sideband.
    RTTY,
    /// Radio teletype (FSK), reverse / lower sideband.
    RTTYR,
    /// Data mode using lower sideband.
    DataLSB,
    /// Data mode using upper sideband (AFSK, sound-card digital).
    DataUSB,
    /// Data mode using FM.
    DataFM,
}

impl fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OperatingMode::Unknown => "UNKNOWN",
            OperatingMode::LSB => "LSB",
            OperatingMode::USB => "USB",
            OperatingMode::CW => "CW",
            OperatingMode::CWR => "CWR",
            OperatingMode::AM => "AM",
            OperatingMode::FM => "FM",
            OperatingMode::RTTY => "RTTY",
            OperatingMode::RTTYR => "RTTYR",
            OperatingMode::DataLSB => "DATA-LSB",
            OperatingMode::DataUSB => "DATA-USB",
            OperatingMode::DataFM => "DATA-FM",
        };
        write!(f, "{s}")
    }
}

/// Error returned when a string cannot be parsed into an [`OperatingMode`]
/// or [`CtcssMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModeError(String);

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown mode: {}", self.0)
    }
}

impl std::error::Error for ParseModeError {}

impl FromStr for OperatingMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "UNKNOWN" => Ok(OperatingMode::Unknown),
            "LSB" => Ok(OperatingMode::LSB),
            "USB" => Ok(OperatingMode::USB),
            "CW" => Ok(OperatingMode::CW),
            "CWR" => Ok(OperatingMode::CWR),
            "AM" => Ok(OperatingMode::AM),
            "FM" => Ok(OperatingMode::FM),
            "RTTY" => Ok(OperatingMode::RTTY),
            "RTTYR" => Ok(OperatingMode::RTTYR),
            "DATA-LSB" | "DATALSB" => Ok(OperatingMode::DataLSB),
            "DATA-USB" | "DATAUSB" => Ok(OperatingMode::DataUSB),
            "DATA-FM" | "DATAFM" => Ok(OperatingMode::DataFM),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// CTCSS tone configuration for a memory channel.
///
/// `Enc` transmits a sub-audible tone; `Dec` additionally requires the tone
/// on receive (tone squelch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CtcssMode {
    /// No CTCSS tone.
    #[default]
    Off,
    /// Encode: transmit the tone.
    Enc,
    /// Decode: transmit the tone and require it on receive.
    Dec,
}

impl fmt::Display for CtcssMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CtcssMode::Off => "OFF",
            CtcssMode::Enc => "ENC",
            CtcssMode::Dec => "DEC",
        };
        write!(f, "{s}")
    }
}

impl FromStr for CtcssMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "OFF" => Ok(CtcssMode::Off),
            "ENC" => Ok(CtcssMode::Enc),
            "DEC" => Ok(CtcssMode::Dec),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// A supported transceiver model.
///
/// This is the closed registry the dispatcher resolves the stored rig name
/// against. Adding support for a new rig means adding a variant here and a
/// backend implementation in the surrounding system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RigModel {
    /// Yaesu FT-817 portable (binary 5-byte CAT).
    Ft817,
    /// Yaesu FT-991 (text CAT).
    Ft991,
    /// Icom IC-7000 (CI-V).
    Ic7000,
}

impl RigModel {
    /// All models in the registry, in display order.
    pub const ALL: [RigModel; 3] = [RigModel::Ft817, RigModel::Ft991, RigModel::Ic7000];

    /// The display/storage name of this model (e.g. `"FT-817"`).
    pub fn name(&self) -> &'static str {
        match self {
            RigModel::Ft817 => "FT-817",
            RigModel::Ft991 => "FT-991",
            RigModel::Ic7000 => "IC-7000",
        }
    }
}

impl fmt::Display for RigModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when a string does not name a supported [`RigModel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRigModelError(String);

impl fmt::Display for ParseRigModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown rig model: '{}'. Expected: FT-817, FT-991, IC-7000",
            self.0
        )
    }
}

impl std::error::Error for ParseRigModelError {}

impl FromStr for RigModel {
    type Err = ParseRigModelError;

    // Rig names are matched case-sensitively: the stored value is always
    // written from the registry's own display names.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        RigModel::ALL
            .iter()
            .find(|m| m.name() == s)
            .copied()
            .ok_or_else(|| ParseRigModelError(s.to_string()))
    }
}
