pub mod error;
pub mod sensor;

use core::fmt::Write;

use embedded_hal::blocking::delay::DelayMs;
use error::{DHTError, Result};
use sensor::SensorHandle;

pub mod prelude {
    #[cfg(feature = "dht-sensor")]
    pub use super::sensor::Dht11Handle;
    pub use super::{
        sensor::SensorHandle, Reading, SensorLoop, MIN_SAMPLE_INTERVAL_MS, SAMPLE_INTERVAL_MS,
    };
}

/// The DHT11 cannot be sampled more often than once a second.
pub const MIN_SAMPLE_INTERVAL_MS: u16 = 1_000;

/// Default pause between samples, a margin above the sensor's minimum.
pub const SAMPLE_INTERVAL_MS: u16 = 2_000;

const READ_ERROR_LINE: &str = "ERROR: Failed to read from DHT11 sensor!";

/// One humidity/temperature sample.
///
/// Valid fields hold relative humidity in [0, 100] percent and a finite
/// temperature in degrees Celsius; a failed field holds the `f32::NAN`
/// sentinel. Constructed fresh each cycle and never kept across cycles.
#[derive(Default, Clone, Copy, Debug)]
pub struct Reading {
    pub humidity: f32,
    pub temperature: f32,
}

impl Reading {
    /// Both fields carry the failure sentinel.
    pub const fn invalid() -> Self {
        Self {
            humidity: f32::NAN,
            temperature: f32::NAN,
        }
    }

    /// A reading is only usable when neither field is the sentinel.
    pub fn is_valid(&self) -> bool {
        !self.humidity.is_nan() && !self.temperature.is_nan()
    }
}

/// The sampling loop around one humidity/temperature sensor
#[derive(Copy, Clone, Debug)]
pub struct SensorLoop<S, D, W> {
    sensor: S,
    delay: D,
    console: W,
    interval_ms: u16,
}

impl<S, D, W> SensorLoop<S, D, W>
where
    S: SensorHandle,
    D: DelayMs<u16>,
    W: Write,
{
    /// Takes exclusive ownership of the sensor handle, the delay provider and
    /// the console for the rest of the program's life.
    pub fn new(sensor: S, delay: D, console: W) -> Self {
        Self {
            sensor,
            delay,
            console,
            interval_ms: SAMPLE_INTERVAL_MS,
        }
    }

    /// Change the pause between samples, clamped to the sensor's minimum
    pub fn set_interval_ms(&mut self, interval_ms: u16) {
        self.interval_ms = interval_ms.max(MIN_SAMPLE_INTERVAL_MS);
    }

    /// Change the pause between samples, clamped to the sensor's minimum
    pub fn with_interval_ms(mut self, interval_ms: u16) -> Self {
        self.set_interval_ms(interval_ms);
        self
    }

    pub fn interval_ms(&self) -> u16 {
        self.interval_ms
    }

    /// Print the startup banner. Wiring details are the caller's to report.
    pub fn start(&mut self) -> Result<()> {
        write!(self.console, "\r\nDHT11 Humidity & Temperature Sensor\r\n")?;
        write!(self.console, "===================================\r\n")?;
        write!(self.console, "Starting measurements...\r\n\r\n")?;
        Ok(())
    }

    /// Run one sampling cycle: wait out the interval, read both fields, then
    /// print either the reading or the failure line.
    ///
    /// A failed read is reported and swallowed; the next cycle retries with a
    /// fresh read. Only a console write failure propagates.
    pub fn cycle(&mut self) -> Result<Option<Reading>> {
        self.delay.delay_ms(self.interval_ms);

        match self.sample() {
            Ok(reading) => {
                write!(
                    self.console,
                    "Humidity: {:.2}% | Temperature: {:.2}°C\r\n",
                    reading.humidity, reading.temperature
                )?;
                Ok(Some(reading))
            }
            Err(_) => {
                write!(self.console, "{}\r\n", READ_ERROR_LINE)?;
                Ok(None)
            }
        }
    }

    /// Sample until reset. Returns only if the console gives out.
    pub fn run(&mut self) -> Result<()> {
        self.start()?;
        loop {
            self.cycle()?;
        }
    }

    fn sample(&mut self) -> Result<Reading> {
        let reading = self.sensor.read();
        if !reading.is_valid() {
            return Err(DHTError::ReadFailure);
        }
        Ok(reading)
    }
}
