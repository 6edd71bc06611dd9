use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::adc::AdcReader;
use crate::defs::{PIPELINE_CLOCKS, PIXEL_COUNT, SAMPLE_SETTLE_US, SCAN_CLOCKS, TRAILING_CLOCKS};
use crate::{Error, Mlx90255};

/// One frame of pixel intensities, left to right in the sensor's shift
/// direction. Fixed at 128 slots so an under-sized buffer cannot be passed.
pub type Frame = [u16; PIXEL_COUNT];

impl<SI, CLK, ADC, D, PE> Mlx90255<SI, CLK, ADC, D>
where
  SI: OutputPin<Error = PE>,
  CLK: OutputPin<Error = PE>,
  ADC: AdcReader,
  D: DelayNs,
{
  /// Read one frame of 128 pixel intensities into `frame`.
  ///
  /// AO always carries the scan *before* the one the shift register is
  /// clocking, so a frame takes two passes:
  ///
  /// 1. A prime pass shifts the stale scan out while the pixels integrate
  ///    the one we want. Nothing is sampled.
  /// 2. After a short sample-and-hold settle, a readout pass clocks the now
  ///    current scan out and samples AO once per pixel clock.
  ///
  /// Each pass is one start condition plus 132 clocks, 133 rising edges in
  /// all: the latched start, one pipeline dummy, the 128 pixels, two
  /// trailing dummies, and a final clock that resets the shift register for
  /// the next call. Trading the extra scan for correctness roughly doubles
  /// the per-frame latency; sampling during the first pass would return the
  /// previous frame's charge.
  ///
  /// Read frames back to back: a pixel integrates from the moment it is
  /// shifted out until the next scan reaches it, so idle gaps between calls
  /// push the samples toward saturation. That is an electrical property of
  /// the part, not something the driver can correct.
  pub fn read_frame(&mut self, frame: &mut Frame) -> Result<(), Error<PE, ADC::Error>> {
    // Prime pass: discard the stale scan. The start edge is clock 1 of 133.
    self.start_pulse()?;
    for _ in 1..SCAN_CLOCKS {
      self.clock_pulse()?;
    }
    self.delay.delay_us(SAMPLE_SETTLE_US);

    // Readout pass: same clocking, but AO now carries the scan integrated
    // during the prime pass.
    self.start_pulse()?;
    for _ in 0..PIPELINE_CLOCKS {
      self.clock_pulse()?;
    }
    for sample in frame.iter_mut() {
      self.clock_pulse()?;
      *sample = self.adc.read().map_err(Error::Adc)?;
    }
    for _ in 0..TRAILING_CLOCKS {
      self.clock_pulse()?;
    }
    // The 133rd clock leaves the shift register reset for the next start.
    self.clock_pulse()
  }
}
