#![no_std]
#![no_main]

use dht11_monitor::prelude::*;
use esp_backtrace as _;
use esp_hal::delay::Delay;
use esp_hal::gpio::{Io, Level, OutputOpenDrain, Pull};
use esp_hal::prelude::*;
use esp_println::Printer;
use log::{error, info};

#[entry]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();
    let peripherals = esp_hal::init({
        let mut config = esp_hal::Config::default();
        config.cpu_clock = CpuClock::max();
        config
    });

    info!("Initializing DHT11 on GPIO 26");
    let io = Io::new(peripherals.GPIO, peripherals.IO_MUX);
    // The DHT11 data line idles high; drive it open drain with the
    // external pull-up doing the rest.
    let pin = OutputOpenDrain::new(io.pins.gpio26, Level::High, Pull::None);
    let sensor = Dht11Handle::new(pin, Delay::new());

    let mut monitor = SensorLoop::new(sensor, Delay::new(), Printer);
    if monitor.run().is_err() {
        error!("Console write failed");
    }
    loop {}
}
