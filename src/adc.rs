//! Analog input seam.
//!
//! `embedded-hal` 1.0 ships no ADC abstraction, so the driver declares the
//! narrow capability it needs and lets the platform adapt its converter.

/// One-shot reading of the sensor's analog output (AO).
///
/// Conversion resolution is the platform's concern; the reference wiring
/// samples at 16 bits, where the lowest few bits are usually noise. The
/// driver treats the returned value as an opaque intensity.
pub trait AdcReader {
  /// Error reported by the underlying converter.
  type Error;

  /// Sample AO once and return the raw conversion result.
  fn read(&mut self) -> Result<u16, Self::Error>;
}

/// Test ADC that replays `step * i` for the `i`-th sample of each frame and
/// counts every conversion it performs.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RampAdc {
  pub(crate) calls: usize,
  pub(crate) step: u16,
}

#[cfg(test)]
impl AdcReader for RampAdc {
  type Error = core::convert::Infallible;

  fn read(&mut self) -> Result<u16, Self::Error> {
    let index = (self.calls % crate::defs::PIXEL_COUNT) as u16;
    self.calls += 1;
    Ok(index.wrapping_mul(self.step))
  }
}
