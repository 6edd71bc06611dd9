#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Blocking, `no_std` driver for the Melexis MLX90255-BC linear optical
//! array.
//!
//! The MLX90255 puts 128 light-sensitive pixels behind a three-wire
//! interface: a start/shift input (SI), a clock (CLK), and an analog output
//! (AO) that presents one pixel per clock. There is no register map and no
//! acknowledgment channel; the whole protocol is pulse sequencing. This
//! crate drives it through `embedded-hal` 1.0 traits, with helpers for:
//!
//! - Running the 133-clock power-up train that brings the internal shift
//!   register into a known state
//! - Reading frames with the double-pass technique the part requires,
//!   because AO lags the shift register by one complete scan
//! - Adjusting the CLK rate at runtime, clamped to the part's 500 kHz limit
//! - Sampling AO through a minimal [`AdcReader`] seam, so any platform ADC
//!   (or a test fake) can be plugged in
//!
//! ```no_run
//! use embedded_hal::{delay::DelayNs, digital::OutputPin};
//! use mlx90255::{AdcReader, Error, Frame, Mlx90255, PIXEL_COUNT};
//!
//! fn example<SI, CLK, ADC, PE, D>(si: SI, clk: CLK, adc: ADC, delay: D) -> Result<Frame, Error<PE, ADC::Error>>
//! where
//!   SI: OutputPin<Error = PE>,
//!   CLK: OutputPin<Error = PE>,
//!   ADC: AdcReader,
//!   D: DelayNs,
//! {
//!   let mut sensor = Mlx90255::new(si, clk, adc, delay);
//!   sensor.init()?;
//!
//!   let mut frame: Frame = [0; PIXEL_COUNT];
//!   sensor.read_frame(&mut frame)?;
//!   Ok(frame)
//! }
//! ```
mod adc;
mod defs;
mod frame;
mod init;
mod pulse;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

pub use adc::AdcReader;
pub use defs::{MAX_CLOCK_HZ, PIXEL_COUNT};
pub use frame::Frame;

/// Errors that can occur while clocking the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<PE, AE> {
  /// Driving SI or CLK failed with the underlying pin error.
  Pin(PE),
  /// Sampling the analog output failed with the underlying converter error.
  Adc(AE),
}

/// Protocol driver for the MLX90255 linear optical array.
///
/// Owns the two output lines, the ADC channel that samples AO, and the delay
/// source that paces CLK, so one driver instance is the sole user of all
/// three for its lifetime. Every operation is blocking, runs on the calling
/// thread, and emits a fixed number of clock edges; worst-case latency
/// follows directly from the configured clock period. `&mut self` on each
/// operation keeps the pulse trains serialized; a train interrupted halfway
/// would leave the sensor's shift register misaligned for the next call.
///
/// The sensor itself never reports status. Out-of-range clock requests are
/// clamped rather than rejected, matching the part's reference driver, and a
/// malformed pulse train is undetectable on the host side; the only
/// observable failures are errors from the injected pin and ADC types.
pub struct Mlx90255<SI, CLK, ADC, D> {
  si: SI,
  clk: CLK,
  adc: ADC,
  delay: D,
  half_period_ns: u32,
}

impl<SI, CLK, ADC, D, PE> Mlx90255<SI, CLK, ADC, D>
where
  SI: OutputPin<Error = PE>,
  CLK: OutputPin<Error = PE>,
  ADC: AdcReader,
  D: DelayNs,
{
  /// Create a driver at the default 500 kHz clock.
  ///
  /// Drives the idle levels the sensor expects ahead of the first start
  /// condition: SI low, CLK high. SI may only be high across a rising CLK
  /// edge during a start condition.
  pub fn new(si: SI, clk: CLK, adc: ADC, delay: D) -> Self {
    let mut this = Self { si, clk, adc, delay, half_period_ns: defs::DEFAULT_HALF_PERIOD_NS };
    let _ = this.si.set_low();
    let _ = this.clk.set_high();
    this
  }

  /// Create a driver with an initial CLK frequency in Hz.
  ///
  /// Out-of-range frequencies fall back to 500 kHz, the same rule
  /// [`set_clock_speed`](Self::set_clock_speed) applies.
  pub fn with_clock_speed(si: SI, clk: CLK, adc: ADC, delay: D, hz: f32) -> Self {
    let mut this = Self::new(si, clk, adc, delay);
    this.set_clock_speed(hz);
    this
  }

  /// Change the CLK frequency at runtime.
  ///
  /// Requests above the part's 500 kHz limit, at zero, or negative are
  /// clamped to 500 kHz rather than rejected; with no feedback channel from
  /// the sensor there is nothing actionable an error could report. The new
  /// period applies from the next clock transition, never mid-pulse. Half
  /// periods round down to whole nanoseconds.
  pub fn set_clock_speed(&mut self, hz: f32) {
    self.half_period_ns = half_period_ns(hz);
  }
}

/// Half of one CLK cycle in nanoseconds for a requested frequency, clamping
/// out-of-range requests (including NaN) to the 500 kHz maximum.
fn half_period_ns(hz: f32) -> u32 {
  if hz > 0.0 && hz <= defs::MAX_CLOCK_HZ {
    (0.5e9 / hz) as u32
  } else {
    defs::DEFAULT_HALF_PERIOD_NS
  }
}

#[cfg(test)]
mod tests {
  use embedded_hal_mock::eh1::delay::NoopDelay;

  use super::*;
  use crate::adc::RampAdc;
  use crate::pulse::fakes::SinkPin;

  fn sensor() -> Mlx90255<SinkPin, SinkPin, RampAdc, NoopDelay> {
    Mlx90255::new(SinkPin, SinkPin, RampAdc::default(), NoopDelay)
  }

  #[test]
  fn default_clock_is_500khz() {
    assert_eq!(sensor().half_period_ns, 1_000);
  }

  #[test]
  fn clock_speed_in_range_sets_half_period() {
    let mut sensor = sensor();

    sensor.set_clock_speed(500_000.0);
    assert_eq!(sensor.half_period_ns, 1_000);

    sensor.set_clock_speed(250_000.0);
    assert_eq!(sensor.half_period_ns, 2_000);

    sensor.set_clock_speed(1.0);
    assert_eq!(sensor.half_period_ns, 500_000_000);
  }

  #[test]
  fn clock_speed_out_of_range_clamps_to_default() {
    let mut sensor = sensor();

    for hz in [0.0, -5.0, 500_001.0, f32::NAN] {
      sensor.set_clock_speed(2_000.0);
      assert_eq!(sensor.half_period_ns, 250_000);

      sensor.set_clock_speed(hz);
      assert_eq!(sensor.half_period_ns, 1_000);
    }
  }

  #[test]
  fn with_clock_speed_applies_same_clamp() {
    let sensor = Mlx90255::with_clock_speed(SinkPin, SinkPin, RampAdc::default(), NoopDelay, 100_000.0);
    assert_eq!(sensor.half_period_ns, 5_000);

    let sensor = Mlx90255::with_clock_speed(SinkPin, SinkPin, RampAdc::default(), NoopDelay, 600_000.0);
    assert_eq!(sensor.half_period_ns, 1_000);
  }
}
