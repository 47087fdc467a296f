use dht_sensor::DhtReading;
use embedded_hal::blocking::delay::{DelayMs, DelayUs};
use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::sensor::SensorHandle;
use crate::Reading;

/// Exclusive handle to a DHT11 on one open-drain data pin.
///
/// The wire protocol itself is the `dht-sensor` crate's business; this handle
/// only owns the line and folds protocol failures into the sentinel. One wire
/// transaction carries both fields, so the frame is held for the companion
/// accessor and a humidity/temperature pair costs a single bus read.
pub struct Dht11Handle<P, D> {
    pin: P,
    delay: D,
    pending: Option<Reading>,
}

impl<P, D, E> Dht11Handle<P, D>
where
    P: InputPin<Error = E> + OutputPin<Error = E>,
    D: DelayMs<u8> + DelayUs<u8>,
{
    /// Takes ownership of the data pin and the delay used for protocol
    /// timing. The line must idle high, so use an open-drain pin with a
    /// pull-up resistor.
    pub fn new(pin: P, delay: D) -> Self {
        Self {
            pin,
            delay,
            pending: None,
        }
    }

    fn acquire(&mut self) -> Reading {
        if let Some(frame) = self.pending.take() {
            return frame;
        }

        match dht_sensor::dht11::Reading::read(&mut self.delay, &mut self.pin) {
            Ok(frame) => {
                let reading = Reading {
                    humidity: f32::from(frame.relative_humidity),
                    temperature: f32::from(frame.temperature),
                };
                self.pending = Some(reading);
                reading
            }
            // Timeouts, checksum mismatches and pin faults all look the same
            // from the loop: a reading that never happened.
            Err(_) => Reading::invalid(),
        }
    }
}

impl<P, D, E> SensorHandle for Dht11Handle<P, D>
where
    P: InputPin<Error = E> + OutputPin<Error = E>,
    D: DelayMs<u8> + DelayUs<u8>,
{
    fn read_humidity(&mut self) -> f32 {
        self.acquire().humidity
    }

    fn read_temperature(&mut self) -> f32 {
        self.acquire().temperature
    }
}
