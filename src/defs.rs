/******************************************************************************
 * Refer to MLX90255-BC datasheet for more information, available here:       *
 * - https://www.melexis.com/en/documents/documentation/datasheets/           *
 * ========================================================================== *
 *                MLX90255 - Shift register & timing constants                *
*******************************************************************************/

/// Number of light-sensitive pixels on the array.
pub const PIXEL_COUNT: usize = 128;

/// Rising CLK edges in one full scan of the internal shift register: the 128
/// pixel positions plus 5 overhead bits (pg. 5, footnote 0). The edge that
/// latches the start condition counts as the first of the 133.
pub(crate) const SCAN_CLOCKS: usize = 133;

/// Clocks between a start condition and the first valid pixel on AO. The
/// analog output trails the shift position by one clock.
pub(crate) const PIPELINE_CLOCKS: usize = 1;

/// Dummy clocks after the last pixel, before the reset clock.
pub(crate) const TRAILING_CLOCKS: usize = 2;

/// Maximum CLK frequency the part supports; also the default.
pub const MAX_CLOCK_HZ: f32 = 500_000.0;

/// Half of one CLK cycle at the maximum clock, in nanoseconds.
pub(crate) const DEFAULT_HALF_PERIOD_NS: u32 = 1_000;

/// Settle time for the sample-and-hold stage between the two read passes.
pub(crate) const SAMPLE_SETTLE_US: u32 = 10;
