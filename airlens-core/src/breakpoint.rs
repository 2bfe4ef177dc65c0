//! EPA breakpoint tables and sub-index normalization
//!
//! ## Background
//!
//! The EPA maps a pollutant concentration onto a unitless 0-500 sub-index
//! by piecewise-linear interpolation over published breakpoint bands:
//!
//! ```text
//! I = I_lo + (C - C_lo) / (C_hi - C_lo) * (I_hi - I_lo)
//!
//! Where:
//! - C        = measured concentration
//! - C_lo..C_hi = concentration band containing C
//! - I_lo..I_hi = index band for that concentration band
//! ```
//!
//! Tables exist for the six pollutants that carry a composite weight:
//! PM2.5, PM10, O3, NO2, SO2, and CO. Each table covers five bands up to
//! index 300. Concentrations are in the fixed unit for the pollutant
//! (µg/m³, ppb, or ppm - see [`crate::pollutant::Pollutant::unit`]);
//! callers must not rescale.
//!
//! ## Out-of-table policy
//!
//! A concentration above the last band yields sub-index **0**, not a clamp
//! to the maximum index. This mirrors the behavior of the system this
//! engine replaces and is load-bearing for output parity; the `log`
//! feature emits a warning when it happens so operators can spot it.

use crate::pollutant::Pollutant;

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

/// One breakpoint band: a concentration range and its index range.
///
/// Invariant: `conc_lo <= conc_hi` and `index_lo <= index_hi`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Lower concentration bound (inclusive)
    pub conc_lo: f32,
    /// Upper concentration bound (inclusive)
    pub conc_hi: f32,
    /// Index value at `conc_lo`
    pub index_lo: f32,
    /// Index value at `conc_hi`
    pub index_hi: f32,
}

impl Segment {
    /// Construct a band.
    pub const fn new(conc_lo: f32, conc_hi: f32, index_lo: f32, index_hi: f32) -> Self {
        Self {
            conc_lo,
            conc_hi,
            index_lo,
            index_hi,
        }
    }

    /// Whether `value` falls inside this band (bounds inclusive).
    pub fn contains(&self, value: f32) -> bool {
        value >= self.conc_lo && value <= self.conc_hi
    }

    /// Linear interpolation of the index at `value`, which must be inside
    /// the band.
    fn interpolate(&self, value: f32) -> f32 {
        let span = self.conc_hi - self.conc_lo;
        if span <= 0.0 {
            // Degenerate band, take the lower index
            return self.index_lo;
        }
        self.index_lo + (value - self.conc_lo) / span * (self.index_hi - self.index_lo)
    }
}

/// Ordered, non-overlapping breakpoint bands for one pollutant.
///
/// Bands are tried in order; the first one containing the input wins.
#[derive(Debug, Clone, Copy)]
pub struct BreakpointTable {
    segments: &'static [Segment],
}

impl BreakpointTable {
    /// Wrap a static band list.
    pub const fn new(segments: &'static [Segment]) -> Self {
        Self { segments }
    }

    /// The bands, in lookup order.
    pub const fn segments(&self) -> &'static [Segment] {
        self.segments
    }

    /// Interpolated sub-index for `value`, or `None` when `value` is
    /// outside every band.
    pub fn lookup(&self, value: f32) -> Option<f32> {
        self.segments
            .iter()
            .find(|seg| seg.contains(value))
            .map(|seg| seg.interpolate(value))
    }
}

/// PM2.5 bands, µg/m³
const PM25_SEGMENTS: [Segment; 5] = [
    Segment::new(0.0, 12.0, 0.0, 50.0),
    Segment::new(12.1, 35.4, 51.0, 100.0),
    Segment::new(35.5, 55.4, 101.0, 150.0),
    Segment::new(55.5, 150.4, 151.0, 200.0),
    Segment::new(150.5, 250.4, 201.0, 300.0),
];

/// PM10 bands, µg/m³
const PM10_SEGMENTS: [Segment; 5] = [
    Segment::new(0.0, 54.0, 0.0, 50.0),
    Segment::new(55.0, 154.0, 51.0, 100.0),
    Segment::new(155.0, 254.0, 101.0, 150.0),
    Segment::new(255.0, 354.0, 151.0, 200.0),
    Segment::new(355.0, 424.0, 201.0, 300.0),
];

/// Ozone bands, ppb
const O3_SEGMENTS: [Segment; 5] = [
    Segment::new(0.0, 54.0, 0.0, 50.0),
    Segment::new(55.0, 70.0, 51.0, 100.0),
    Segment::new(71.0, 85.0, 101.0, 150.0),
    Segment::new(86.0, 105.0, 151.0, 200.0),
    Segment::new(106.0, 200.0, 201.0, 300.0),
];

/// NO2 bands, ppb
const NO2_SEGMENTS: [Segment; 5] = [
    Segment::new(0.0, 53.0, 0.0, 50.0),
    Segment::new(54.0, 100.0, 51.0, 100.0),
    Segment::new(101.0, 360.0, 101.0, 150.0),
    Segment::new(361.0, 649.0, 151.0, 200.0),
    Segment::new(650.0, 1249.0, 201.0, 300.0),
];

/// SO2 bands, ppb
const SO2_SEGMENTS: [Segment; 5] = [
    Segment::new(0.0, 35.0, 0.0, 50.0),
    Segment::new(36.0, 75.0, 51.0, 100.0),
    Segment::new(76.0, 185.0, 101.0, 150.0),
    Segment::new(186.0, 304.0, 151.0, 200.0),
    Segment::new(305.0, 604.0, 201.0, 300.0),
];

/// CO bands, ppm
const CO_SEGMENTS: [Segment; 5] = [
    Segment::new(0.0, 4.4, 0.0, 50.0),
    Segment::new(4.5, 9.4, 51.0, 100.0),
    Segment::new(9.5, 12.4, 101.0, 150.0),
    Segment::new(12.5, 15.4, 151.0, 200.0),
    Segment::new(15.5, 30.4, 201.0, 300.0),
];

/// PM2.5 table, µg/m³
pub const PM25_TABLE: BreakpointTable = BreakpointTable::new(&PM25_SEGMENTS);
/// PM10 table, µg/m³
pub const PM10_TABLE: BreakpointTable = BreakpointTable::new(&PM10_SEGMENTS);
/// Ozone table, ppb
pub const O3_TABLE: BreakpointTable = BreakpointTable::new(&O3_SEGMENTS);
/// NO2 table, ppb
pub const NO2_TABLE: BreakpointTable = BreakpointTable::new(&NO2_SEGMENTS);
/// SO2 table, ppb
pub const SO2_TABLE: BreakpointTable = BreakpointTable::new(&SO2_SEGMENTS);
/// CO table, ppm
pub const CO_TABLE: BreakpointTable = BreakpointTable::new(&CO_SEGMENTS);

/// Breakpoint table for a pollutant, if one is defined.
pub const fn table_for(pollutant: Pollutant) -> Option<&'static BreakpointTable> {
    match pollutant {
        Pollutant::Pm25 => Some(&PM25_TABLE),
        Pollutant::Pm10 => Some(&PM10_TABLE),
        Pollutant::O3 => Some(&O3_TABLE),
        Pollutant::No2 => Some(&NO2_TABLE),
        Pollutant::So2 => Some(&SO2_TABLE),
        Pollutant::Co => Some(&CO_TABLE),
        _ => None,
    }
}

/// Normalize a raw concentration to a 0-500 sub-index.
///
/// Pollutants without a breakpoint table pass through unchanged.
/// Concentrations above the table saturate to 0 (see module docs).
/// Pure; never panics for finite input. Negative input is the caller's
/// responsibility to reject ([`crate::validate::validate_reading`]).
pub fn sub_index(pollutant: Pollutant, value: f32) -> f32 {
    let Some(table) = table_for(pollutant) else {
        return value;
    };

    match table.lookup(value) {
        Some(index) => index,
        None => {
            log_warn!(
                "{} = {} {} outside breakpoint table, sub-index saturated to 0",
                pollutant.name(),
                value,
                pollutant.unit()
            );
            0.0
        }
    }
}
