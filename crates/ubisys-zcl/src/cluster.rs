//! ZCL cluster and attribute identifiers

/// ubisys manufacturer code, qualifies manufacturer-specific attributes
pub const MANUFACTURER_CODE: u16 = 0x10F2;

/// Cluster IDs referenced by the converters
pub mod id {
    // General clusters
    pub const ON_OFF: u16 = 0x0006;
    pub const LEVEL_CONTROL: u16 = 0x0008;

    // Lighting
    pub const COLOR_CONTROL: u16 = 0x0300;

    // Closures
    pub const WINDOW_COVERING: u16 = 0x0102;

    // Smart Energy
    pub const METERING: u16 = 0x0702;
    pub const ELECTRICAL_MEASUREMENT: u16 = 0x0B04;

    // Manufacturer-specific ubisys Device Setup cluster
    pub const DEVICE_SETUP: u16 = 0xFC00;
}

/// Device Setup cluster attributes (manufacturer-qualified)
pub mod device_setup_attrs {
    pub const INPUT_CONFIGURATIONS: u16 = 0x0000;
    pub const INPUT_ACTIONS: u16 = 0x0001;
    pub const OUTPUT_CONFIGURATIONS: u16 = 0x0002;
}

/// Window Covering cluster attributes
pub mod window_covering_attrs {
    pub const CURRENT_POSITION_LIFT_PERCENTAGE: u16 = 0x0008;
    pub const CURRENT_POSITION_TILT_PERCENTAGE: u16 = 0x0009;
}

/// Metering cluster attributes
pub mod metering_attrs {
    pub const CURRENT_SUMM_DELIVERED: u16 = 0x0000;
    pub const DIVISOR: u16 = 0x0302;
    pub const INSTANTANEOUS_DEMAND: u16 = 0x0400;
}

/// Electrical Measurement cluster attributes
pub mod electrical_attrs {
    pub const ACTIVE_POWER: u16 = 0x050B;
    pub const RMS_VOLTAGE: u16 = 0x0505;
    pub const RMS_CURRENT: u16 = 0x0508;
}
