use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::adc::AdcReader;
use crate::{Error, Mlx90255};

impl<SI, CLK, ADC, D, PE> Mlx90255<SI, CLK, ADC, D>
where
  SI: OutputPin<Error = PE>,
  CLK: OutputPin<Error = PE>,
  ADC: AdcReader,
  D: DelayNs,
{
  /// One full CLK cycle: low for half a period, then high for half a period.
  ///
  /// The shift register advances on the rising edge. Callers that sample AO
  /// do so after the trailing half period, once the output has settled.
  pub(crate) fn clock_pulse(&mut self) -> Result<(), Error<PE, ADC::Error>> {
    self.clk.set_low().map_err(Error::Pin)?;
    self.delay.delay_ns(self.half_period_ns);
    self.clk.set_high().map_err(Error::Pin)?;
    self.delay.delay_ns(self.half_period_ns);
    Ok(())
  }

  /// Clock a start condition into the shift register.
  ///
  /// SI must be high before CLK rises and back low before the next rising
  /// edge; the edge that latches SI is the first clock of the scan.
  pub(crate) fn start_pulse(&mut self) -> Result<(), Error<PE, ADC::Error>> {
    self.clk.set_low().map_err(Error::Pin)?;
    self.si.set_high().map_err(Error::Pin)?;
    self.delay.delay_ns(self.half_period_ns);
    self.clk.set_high().map_err(Error::Pin)?;
    self.delay.delay_ns(self.half_period_ns);
    self.si.set_low().map_err(Error::Pin)?;
    Ok(())
  }
}
