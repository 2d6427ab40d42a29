//! Configuration primitives for the ADXL345 driver.

use crate::registers::{
    ActivityControl,
    BandwidthRate,
    DataFormat,
    FifoControl,
    InterruptEnable,
    InterruptMap,
    PowerControl,
    TapAxes,
};

/// User-facing configuration for the ADXL345 sensor.
///
/// Holds one value per writable register, declared in bring-up order. The
/// device writes these values verbatim during initialization; a default
/// configuration leaves every register at its all-zero field image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Tap detection threshold (62.5 mg/LSB).
    pub tap_threshold: u8,
    /// X-axis offset adjustment (15.6 mg/LSB, two's complement).
    pub offset_x: u8,
    /// Y-axis offset adjustment (15.6 mg/LSB, two's complement).
    pub offset_y: u8,
    /// Z-axis offset adjustment (15.6 mg/LSB, two's complement).
    pub offset_z: u8,
    /// Maximum tap duration (625 µs/LSB).
    pub tap_duration: u8,
    /// Delay before the double tap window opens (1.25 ms/LSB).
    pub tap_latency: u8,
    /// Double tap detection window (1.25 ms/LSB).
    pub tap_window: u8,
    /// Activity detection threshold (62.5 mg/LSB).
    pub activity_threshold: u8,
    /// Inactivity detection threshold (62.5 mg/LSB).
    pub inactivity_threshold: u8,
    /// Time below the inactivity threshold before reporting (1 s/LSB).
    pub inactivity_time: u8,
    /// Activity/inactivity detection control.
    pub activity_control: ActivityControl,
    /// Free-fall detection threshold (62.5 mg/LSB).
    pub freefall_threshold: u8,
    /// Minimum free-fall duration (5 ms/LSB).
    pub freefall_time: u8,
    /// Tap detection axis participation.
    pub tap_axes: TapAxes,
    /// Output data rate and power mode.
    pub bandwidth_rate: BandwidthRate,
    /// Power and sleep control.
    pub power_control: PowerControl,
    /// Interrupt enable mask.
    pub interrupt_enable: InterruptEnable,
    /// Interrupt pin routing.
    pub interrupt_map: InterruptMap,
    /// Data representation and measurement range.
    pub data_format: DataFormat,
    /// FIFO operating mode and watermark.
    pub fifo_control: FifoControl,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Returns the scale factor in g per least-significant bit.
    ///
    /// Derived solely from the configured measurement range.
    pub fn scale_factor(&self) -> f32 {
        self.data_format.range().scale_g_per_lsb()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tap_threshold: 0,
            offset_x: 0,
            offset_y: 0,
            offset_z: 0,
            tap_duration: 0,
            tap_latency: 0,
            tap_window: 0,
            activity_threshold: 0,
            inactivity_threshold: 0,
            inactivity_time: 0,
            activity_control: ActivityControl::new(),
            freefall_threshold: 0,
            freefall_time: 0,
            tap_axes: TapAxes::new(),
            bandwidth_rate: BandwidthRate::new(),
            power_control: PowerControl::new(),
            interrupt_enable: InterruptEnable::new(),
            interrupt_map: InterruptMap::new(),
            data_format: DataFormat::new(),
            fifo_control: FifoControl::new(),
        }
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Sets the tap detection threshold.
    pub fn tap_threshold(mut self, threshold: u8) -> Self {
        self.config.tap_threshold = threshold;
        self
    }

    /// Sets the per-axis offset adjustments.
    pub fn offsets(mut self, x: u8, y: u8, z: u8) -> Self {
        self.config.offset_x = x;
        self.config.offset_y = y;
        self.config.offset_z = z;
        self
    }

    /// Sets the maximum tap duration.
    pub fn tap_duration(mut self, duration: u8) -> Self {
        self.config.tap_duration = duration;
        self
    }

    /// Sets the double tap latency.
    pub fn tap_latency(mut self, latency: u8) -> Self {
        self.config.tap_latency = latency;
        self
    }

    /// Sets the double tap detection window.
    pub fn tap_window(mut self, window: u8) -> Self {
        self.config.tap_window = window;
        self
    }

    /// Sets the activity detection threshold.
    pub fn activity_threshold(mut self, threshold: u8) -> Self {
        self.config.activity_threshold = threshold;
        self
    }

    /// Sets the inactivity detection threshold.
    pub fn inactivity_threshold(mut self, threshold: u8) -> Self {
        self.config.inactivity_threshold = threshold;
        self
    }

    /// Sets the inactivity qualification time.
    pub fn inactivity_time(mut self, time: u8) -> Self {
        self.config.inactivity_time = time;
        self
    }

    /// Sets the activity/inactivity detection control register value.
    pub fn activity_control(mut self, control: ActivityControl) -> Self {
        self.config.activity_control = control;
        self
    }

    /// Sets the free-fall detection threshold.
    pub fn freefall_threshold(mut self, threshold: u8) -> Self {
        self.config.freefall_threshold = threshold;
        self
    }

    /// Sets the minimum free-fall duration.
    pub fn freefall_time(mut self, time: u8) -> Self {
        self.config.freefall_time = time;
        self
    }

    /// Sets the tap detection axis participation register value.
    pub fn tap_axes(mut self, axes: TapAxes) -> Self {
        self.config.tap_axes = axes;
        self
    }

    /// Sets the output data rate and power mode register value.
    pub fn bandwidth_rate(mut self, bandwidth_rate: BandwidthRate) -> Self {
        self.config.bandwidth_rate = bandwidth_rate;
        self
    }

    /// Sets the power control register value.
    pub fn power_control(mut self, power_control: PowerControl) -> Self {
        self.config.power_control = power_control;
        self
    }

    /// Sets the interrupt enable mask register value.
    pub fn interrupt_enable(mut self, interrupt_enable: InterruptEnable) -> Self {
        self.config.interrupt_enable = interrupt_enable;
        self
    }

    /// Sets the interrupt pin routing register value.
    pub fn interrupt_map(mut self, interrupt_map: InterruptMap) -> Self {
        self.config.interrupt_map = interrupt_map;
        self
    }

    /// Sets the data format register value.
    pub fn data_format(mut self, data_format: DataFormat) -> Self {
        self.config.data_format = data_format;
        self
    }

    /// Sets the FIFO control register value.
    pub fn fifo_control(mut self, fifo_control: FifoControl) -> Self {
        self.config.fifo_control = fifo_control;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
