use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::adc::AdcReader;
use crate::defs::SCAN_CLOCKS;
use crate::{Error, Mlx90255};

impl<SI, CLK, ADC, D, PE> Mlx90255<SI, CLK, ADC, D>
where
  SI: OutputPin<Error = PE>,
  CLK: OutputPin<Error = PE>,
  ADC: AdcReader,
  D: DelayNs,
{
  /// Initialize the sensor after power-up.
  ///
  /// The first integration after power-up starts from an undefined shift
  /// register, so the datasheet asks for a start condition followed by 133
  /// clocks before the first real read (pg. 5, footnote 0). Open loop: the
  /// sensor never acknowledges, and the only failure mode is a pin error
  /// from the HAL.
  ///
  /// Call once before [`read_frame`](Self::read_frame); frames read earlier
  /// carry undefined data.
  pub fn init(&mut self) -> Result<(), Error<PE, ADC::Error>> {
    self.start_pulse()?;
    for _ in 0..SCAN_CLOCKS {
      self.clock_pulse()?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use embedded_hal_mock::eh1::delay::NoopDelay;
  use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction as PinTransaction};

  use crate::adc::RampAdc;
  use crate::defs::SCAN_CLOCKS;
  use crate::pulse::fakes::{clock_cycles, start_toggle};
  use crate::Mlx90255;

  #[test]
  fn init_emits_full_setup_train() {
    // Construction idles SI low and CLK high; the train itself is one start
    // condition plus 133 plain clocks, 134 rising edges in all, and SI
    // toggles high then low exactly once.
    let mut si_seq = vec![PinTransaction::set(State::Low)];
    si_seq.extend(start_toggle());

    let mut clk_seq = vec![PinTransaction::set(State::High)];
    clk_seq.extend(clock_cycles(SCAN_CLOCKS + 1));

    let mut si = PinMock::new(&si_seq);
    let mut clk = PinMock::new(&clk_seq);

    let mut sensor = Mlx90255::new(si.clone(), clk.clone(), RampAdc::default(), NoopDelay);
    sensor.init().unwrap();

    si.done();
    clk.done();
  }
}
