use crate::Reading;

#[cfg(feature = "dht-sensor")]
mod dht11;
#[cfg(feature = "dht-sensor")]
pub use dht11::Dht11Handle;

/// The software side of the single-wire link to the physical sensor.
///
/// Each accessor is a blocking call bounded by the wire protocol's own timeout
/// and returns either a measurement or the `f32::NAN` sentinel when the sensor
/// did not answer with usable data.
pub trait SensorHandle {
    /// Relative humidity in percent, `f32::NAN` on a failed read.
    fn read_humidity(&mut self) -> f32;

    /// Temperature in degrees Celsius, `f32::NAN` on a failed read.
    fn read_temperature(&mut self) -> f32;

    /// Read both fields and pair them up.
    fn read(&mut self) -> Reading {
        Reading {
            humidity: self.read_humidity(),
            temperature: self.read_temperature(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::SensorHandle;

    struct Fixed;

    impl SensorHandle for Fixed {
        fn read_humidity(&mut self) -> f32 {
            61.0
        }

        fn read_temperature(&mut self) -> f32 {
            19.25
        }
    }

    #[test]
    fn read_pairs_both_fields() {
        let mut sensor = Fixed;
        let reading = sensor.read();

        assert_eq!(reading.humidity, 61.0);
        assert_eq!(reading.temperature, 19.25);
        assert!(reading.is_valid());
    }
}
