//! Pollutant vocabulary and the fixed-slot reading container
//!
//! Readings arrive as key/value pairs from forms, geolocation mocks, or
//! stored dataset rows. The vocabulary is closed: ten pollutant species
//! plus six meteorological channels. Representing a reading as one slot
//! per key keeps lookups O(1) and the whole container `Copy`, so readings
//! can be passed around and compared without allocation.
//!
//! Units are fixed per key and match the breakpoint tables in
//! [`crate::breakpoint`]. Callers must not rescale: a PM2.5 value is
//! always µg/m³, ozone is always ppb, CO is always ppm.

use core::fmt;

/// Measurement keys understood by the scoring core.
///
/// The discriminant doubles as the slot index in [`Reading`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Pollutant {
    /// Fine particulate matter, aerodynamic diameter < 2.5 µm
    Pm25 = 0,
    /// Coarse particulate matter, aerodynamic diameter < 10 µm
    Pm10 = 1,
    /// Nitric oxide
    No = 2,
    /// Nitrogen dioxide
    No2 = 3,
    /// Total nitrogen oxides
    Nox = 4,
    /// Ammonia
    Nh3 = 5,
    /// Sulfur dioxide
    So2 = 6,
    /// Carbon monoxide
    Co = 7,
    /// Ground-level ozone
    O3 = 8,
    /// Benzene
    Benzene = 9,
    /// Relative humidity
    Humidity = 10,
    /// Wind speed
    WindSpeed = 11,
    /// Wind direction
    WindDirection = 12,
    /// Solar radiation
    SolarRadiation = 13,
    /// Rainfall
    Rainfall = 14,
    /// Air temperature
    Temperature = 15,
}

impl Pollutant {
    /// Number of keys in the vocabulary.
    pub const COUNT: usize = 16;

    /// All keys, in slot order.
    pub const ALL: [Pollutant; Self::COUNT] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::No,
        Pollutant::No2,
        Pollutant::Nox,
        Pollutant::Nh3,
        Pollutant::So2,
        Pollutant::Co,
        Pollutant::O3,
        Pollutant::Benzene,
        Pollutant::Humidity,
        Pollutant::WindSpeed,
        Pollutant::WindDirection,
        Pollutant::SolarRadiation,
        Pollutant::Rainfall,
        Pollutant::Temperature,
    ];

    /// Stable lowercase name, as used in wire formats and form field ids.
    pub const fn name(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "pm25",
            Pollutant::Pm10 => "pm10",
            Pollutant::No => "no",
            Pollutant::No2 => "no2",
            Pollutant::Nox => "nox",
            Pollutant::Nh3 => "nh3",
            Pollutant::So2 => "so2",
            Pollutant::Co => "co",
            Pollutant::O3 => "o3",
            Pollutant::Benzene => "benzene",
            Pollutant::Humidity => "humidity",
            Pollutant::WindSpeed => "wind_speed",
            Pollutant::WindDirection => "wind_direction",
            Pollutant::SolarRadiation => "solar_radiation",
            Pollutant::Rainfall => "rainfall",
            Pollutant::Temperature => "temperature",
        }
    }

    /// Fixed unit of measurement for this key.
    pub const fn unit(&self) -> &'static str {
        match self {
            Pollutant::Pm25 | Pollutant::Pm10 | Pollutant::Benzene => "µg/m³",
            Pollutant::No
            | Pollutant::No2
            | Pollutant::Nox
            | Pollutant::Nh3
            | Pollutant::So2
            | Pollutant::O3 => "ppb",
            Pollutant::Co => "ppm",
            Pollutant::Humidity => "%",
            Pollutant::WindSpeed => "m/s",
            Pollutant::WindDirection => "°",
            Pollutant::SolarRadiation => "W/m²",
            Pollutant::Rainfall => "mm",
            Pollutant::Temperature => "°C",
        }
    }

    /// Parse a key from its stable name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.name() == name)
    }

    /// Slot index in a [`Reading`].
    pub(crate) const fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single observation: concentration per pollutant key.
///
/// Absent keys are `None`, never zero - the scorer and the similarity
/// ranker both distinguish "not measured" from "measured as zero".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reading {
    values: [Option<f32>; Pollutant::COUNT],
}

impl Reading {
    /// Create an empty reading.
    pub const fn new() -> Self {
        Self {
            values: [None; Pollutant::COUNT],
        }
    }

    /// Build a reading from key/value pairs. Later pairs overwrite earlier
    /// ones for the same key.
    pub fn from_pairs(pairs: &[(Pollutant, f32)]) -> Self {
        let mut reading = Self::new();
        for &(pollutant, value) in pairs {
            reading.set(pollutant, value);
        }
        reading
    }

    /// Set a value in place.
    pub fn set(&mut self, pollutant: Pollutant, value: f32) -> &mut Self {
        self.values[pollutant.slot()] = Some(value);
        self
    }

    /// Builder-style setter.
    pub fn with(mut self, pollutant: Pollutant, value: f32) -> Self {
        self.set(pollutant, value);
        self
    }

    /// Get a value, if present.
    pub fn get(&self, pollutant: Pollutant) -> Option<f32> {
        self.values[pollutant.slot()]
    }

    /// Whether a key is present.
    pub fn contains(&self, pollutant: Pollutant) -> bool {
        self.values[pollutant.slot()].is_some()
    }

    /// Remove a key, returning the previous value.
    pub fn remove(&mut self, pollutant: Pollutant) -> Option<f32> {
        self.values[pollutant.slot()].take()
    }

    /// Number of present keys.
    pub fn len(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// Whether no key is present.
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(|v| v.is_none())
    }

    /// Iterate over present key/value pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Pollutant, f32)> + '_ {
        Pollutant::ALL
            .iter()
            .filter_map(move |&p| self.get(p).map(|v| (p, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_roundtrip() {
        for pollutant in Pollutant::ALL {
            assert_eq!(Pollutant::from_name(pollutant.name()), Some(pollutant));
        }
        assert_eq!(Pollutant::from_name("lead"), None);
    }

    #[test]
    fn units_are_fixed() {
        assert_eq!(Pollutant::Pm25.unit(), "µg/m³");
        assert_eq!(Pollutant::O3.unit(), "ppb");
        assert_eq!(Pollutant::Co.unit(), "ppm");
    }

    #[test]
    fn set_get_remove() {
        let mut reading = Reading::new();
        assert!(reading.is_empty());

        reading.set(Pollutant::Pm25, 12.5);
        assert_eq!(reading.get(Pollutant::Pm25), Some(12.5));
        assert_eq!(reading.len(), 1);

        assert_eq!(reading.remove(Pollutant::Pm25), Some(12.5));
        assert!(reading.is_empty());
    }

    #[test]
    fn zero_is_present() {
        let reading = Reading::new().with(Pollutant::So2, 0.0);
        assert!(reading.contains(Pollutant::So2));
        assert!(!reading.contains(Pollutant::No2));
    }

    #[test]
    fn iter_skips_absent_keys() {
        let reading = Reading::new()
            .with(Pollutant::Pm25, 10.0)
            .with(Pollutant::Temperature, 21.5);

        let pairs: heapless::Vec<(Pollutant, f32), 4> = reading.iter().collect();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], (Pollutant::Pm25, 10.0));
        assert_eq!(pairs[1], (Pollutant::Temperature, 21.5));
    }
}
