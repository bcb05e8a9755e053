//! Catalog of named factory output layouts
//!
//! Switching modes always writes a complete entry; entries are never
//! mutated in place. Fine-tuned (calibrated) configurations no longer
//! match any entry byte-for-byte and identify as custom.

use crate::channel::{ChannelDescriptor, ChannelFunction};
use crate::codec::{self, CHANNEL_COUNT};
use crate::error::ConfigError;
use bytes::Bytes;

/// A named, complete six-channel layout
#[derive(Debug, Clone)]
pub struct OutputConfiguration {
    pub name: &'static str,
    pub description: &'static str,
    pub channels: [ChannelDescriptor; CHANNEL_COUNT],
}

impl OutputConfiguration {
    /// Canonical wire encoding of this layout
    #[must_use]
    pub fn encoded(&self) -> Bytes {
        codec::encode_exact(&self.channels)
    }
}

// Names are unique within the catalog
impl PartialEq for OutputConfiguration {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for OutputConfiguration {}

/// Result of matching a raw buffer against the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identified<'a> {
    Known(&'a OutputConfiguration),
    /// No byte-exact catalog match
    Custom,
}

/// The closed set of factory layouts, constructed once and read-only
/// for the process lifetime
#[derive(Debug)]
pub struct Catalog {
    entries: Vec<OutputConfiguration>,
}

impl Catalog {
    /// Build the standard LD6 catalog
    #[must_use]
    pub fn standard() -> Self {
        use ChannelFunction::{Blue, CoolWhite, Green, Red, WarmWhite};

        // Canonical chromaticities of the LD6 reference LEDs
        let cw = |ep| ChannelDescriptor::color(ep, CoolWhite, 0.3127, 0.3290);
        let ww = |ep| ChannelDescriptor::color(ep, WarmWhite, 0.4578, 0.4101);
        let red = |ep| ChannelDescriptor::color(ep, Red, 0.7006, 0.2993);
        let green = |ep| ChannelDescriptor::color(ep, Green, 0.1547, 0.8059);
        let blue = |ep| ChannelDescriptor::color(ep, Blue, 0.1440, 0.0297);
        let mono = ChannelDescriptor::mono;
        let off = ChannelDescriptor::unused;

        let entries = vec![
            OutputConfiguration {
                name: "1x_cct",
                description: "One tunable-white light on channels 1-2",
                channels: [cw(1), ww(1), off(), off(), off(), off()],
            },
            OutputConfiguration {
                name: "2x_cct",
                description: "Two tunable-white lights on channels 1-2 and 3-4",
                channels: [cw(1), ww(1), cw(2), ww(2), off(), off()],
            },
            OutputConfiguration {
                name: "3x_cct",
                description: "Three tunable-white lights on channel pairs",
                channels: [cw(1), ww(1), cw(2), ww(2), cw(3), ww(3)],
            },
            OutputConfiguration {
                name: "1x_rgb",
                description: "One color light on channels 1-3",
                channels: [red(1), green(1), blue(1), off(), off(), off()],
            },
            OutputConfiguration {
                name: "2x_rgb",
                description: "Two color lights on channels 1-3 and 4-6",
                channels: [red(1), green(1), blue(1), red(2), green(2), blue(2)],
            },
            OutputConfiguration {
                name: "1x_rgbw",
                description: "One color light with a separate white channel",
                channels: [red(1), green(1), blue(1), mono(1), off(), off()],
            },
            OutputConfiguration {
                name: "1x_rgb_1x_cct",
                description: "One color light and one tunable-white light",
                channels: [red(1), green(1), blue(1), cw(2), ww(2), off()],
            },
            OutputConfiguration {
                name: "6x_mono",
                description: "Six independent single-color dimmers",
                channels: [mono(1), mono(2), mono(3), mono(4), mono(5), mono(6)],
            },
        ];

        Self { entries }
    }

    /// All entries in definition order
    #[must_use]
    pub fn entries(&self) -> &[OutputConfiguration] {
        &self.entries
    }

    /// Look up an entry by mode name
    ///
    /// # Errors
    /// Returns [`ConfigError::UnknownMode`] listing every valid name
    /// when `name` is not in the catalog.
    pub fn get(&self, name: &str) -> Result<&OutputConfiguration, ConfigError> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| ConfigError::UnknownMode {
                name: name.to_string(),
                valid: self
                    .entries
                    .iter()
                    .map(|e| e.name)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }

    /// Match a raw buffer against the catalog, byte-exact, in
    /// definition order
    #[must_use]
    pub fn identify(&self, buffer: &[u8]) -> Identified<'_> {
        self.entries
            .iter()
            .find(|e| e.encoded().as_ref() == buffer)
            .map_or(Identified::Custom, Identified::Known)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_known_mode() {
        let catalog = Catalog::standard();
        let config = catalog.get("2x_cct").unwrap();
        assert_eq!(config.channels[2].endpoint, 2);
        assert_eq!(config.channels[2].function, ChannelFunction::CoolWhite);
    }

    #[test]
    fn test_unknown_mode_lists_all_names() {
        let catalog = Catalog::standard();
        let err = catalog.get("nonexistent_mode").unwrap_err();
        let message = err.to_string();
        for entry in catalog.entries() {
            assert!(
                message.contains(entry.name),
                "error message missing {}",
                entry.name
            );
        }
    }

    #[test]
    fn test_identify_every_entry() {
        let catalog = Catalog::standard();
        for config in catalog.entries() {
            match catalog.identify(&config.encoded()) {
                Identified::Known(found) => assert_eq!(found.name, config.name),
                Identified::Custom => panic!("{} did not identify", config.name),
            }
        }
    }

    #[test]
    fn test_identify_byte_flip_is_custom() {
        let catalog = Catalog::standard();
        let mut buf = catalog.get("1x_rgb").unwrap().encoded().to_vec();
        // Nudge one flux byte, as a calibration write would
        buf[6] = 0x80;
        assert_eq!(catalog.identify(&buf), Identified::Custom);
    }

    #[test]
    fn test_identify_wrong_length_is_custom() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.identify(&crate::codec::HEADER), Identified::Custom);
    }
}
