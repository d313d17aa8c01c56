//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{CoreError, TickmapFacade, ARITHMETIC_OVERFLOW, INVALID_TICK_SPACING, TICKMAP_BITS, TICK_INDEX_NOT_ALIGNED, TICK_INDEX_OUT_OF_BOUNDS, TICK_LIMIT};

/// Get the tickmap bit position of a tick index.
///
/// # Parameters
/// - `tick_index` - A tick index, which must be a multiple of `tick_spacing`
/// - `tick_spacing` - The tick spacing of the pool
///
/// # Returns
/// - `usize`: The bit position in the tickmap
pub fn tick_index_to_position(tick_index: i32, tick_spacing: u16) -> Result<usize, CoreError> {
    if tick_spacing == 0 {
        return Err(INVALID_TICK_SPACING);
    }
    let tick_spacing = tick_spacing as i32;
    if tick_index % tick_spacing != 0 {
        return Err(TICK_INDEX_NOT_ALIGNED);
    }
    let position = tick_index / tick_spacing + TICK_LIMIT;
    if position < 0 || position as usize >= TICKMAP_BITS {
        return Err(TICK_INDEX_OUT_OF_BOUNDS);
    }
    Ok(position as usize)
}

fn position_to_tick_index(position: i32, tick_spacing: i32) -> Result<i32, CoreError> {
    (position - TICK_LIMIT).checked_mul(tick_spacing).ok_or(ARITHMETIC_OVERFLOW)
}

impl TickmapFacade {
    fn bit(&self, position: usize) -> bool {
        self.bitmap[position / 8] & (1 << (position % 8)) != 0
    }

    pub fn is_initialized(&self, tick_index: i32, tick_spacing: u16) -> Result<bool, CoreError> {
        Ok(self.bit(tick_index_to_position(tick_index, tick_spacing)?))
    }

    pub fn set_initialized(&mut self, tick_index: i32, tick_spacing: u16, initialized: bool) -> Result<(), CoreError> {
        let position = tick_index_to_position(tick_index, tick_spacing)?;
        let mask = 1u8 << (position % 8);
        if initialized {
            self.bitmap[position / 8] |= mask;
        } else {
            self.bitmap[position / 8] &= !mask;
        }
        Ok(())
    }

    /// Collects up to `limit` initialized ticks a swap would cross, nearest first.
    ///
    /// An x-to-y swap moves the price down and visits ticks at or below `current_tick_index`.
    /// A y-to-x swap visits ticks strictly above it.
    pub fn ticks_for_swap(&self, current_tick_index: i32, tick_spacing: u16, x_to_y: bool, limit: usize) -> Result<Vec<i32>, CoreError> {
        if tick_spacing == 0 {
            return Err(INVALID_TICK_SPACING);
        }
        let spacing = tick_spacing as i32;
        let base = current_tick_index.div_euclid(spacing) + TICK_LIMIT;
        let last = TICKMAP_BITS as i32 - 1;
        let mut ticks = Vec::with_capacity(limit.min(64));

        if x_to_y {
            let mut position = base.min(last);
            while position >= 0 && ticks.len() < limit {
                let index = position as usize;
                if index % 8 == 7 && self.bitmap[index / 8] == 0 {
                    position -= 8;
                    continue;
                }
                if self.bit(index) {
                    ticks.push(position_to_tick_index(position, spacing)?);
                }
                position -= 1;
            }
        } else {
            let mut position = (base + 1).max(0);
            while position <= last && ticks.len() < limit {
                let index = position as usize;
                if index % 8 == 0 && self.bitmap[index / 8] == 0 {
                    position += 8;
                    continue;
                }
                if self.bit(index) {
                    ticks.push(position_to_tick_index(position, spacing)?);
                }
                position += 1;
            }
        }

        Ok(ticks)
    }

    /// The nearest initialized tick in the swap direction, if any.
    pub fn next_initialized_tick(&self, current_tick_index: i32, tick_spacing: u16, x_to_y: bool) -> Result<Option<i32>, CoreError> {
        Ok(self.ticks_for_swap(current_tick_index, tick_spacing, x_to_y, 1)?.first().copied())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::{MAX_TICK_INDEX, MIN_TICK_INDEX};

    fn tickmap_with(ticks: &[i32], tick_spacing: u16) -> TickmapFacade {
        let mut tickmap = TickmapFacade::default();
        for tick in ticks {
            tickmap.set_initialized(*tick, tick_spacing, true).unwrap();
        }
        tickmap
    }

    #[rstest]
    #[case(0, 1, 44_364)]
    #[case(-44_364, 1, 0)]
    #[case(50, 10, 44_369)]
    #[case(44_362, 1, 88_726)]
    fn test_tick_index_to_position(#[case] tick_index: i32, #[case] tick_spacing: u16, #[case] expected: usize) {
        assert_eq!(tick_index_to_position(tick_index, tick_spacing), Ok(expected));
    }

    #[test]
    fn test_tick_index_to_position_errors() {
        assert_eq!(tick_index_to_position(5, 0), Err(INVALID_TICK_SPACING));
        assert_eq!(tick_index_to_position(15, 10), Err(TICK_INDEX_NOT_ALIGNED));
        assert_eq!(tick_index_to_position(-44_365, 1), Err(TICK_INDEX_OUT_OF_BOUNDS));
        assert_eq!(tick_index_to_position(MIN_TICK_INDEX, 1), Err(TICK_INDEX_OUT_OF_BOUNDS));
    }

    #[test]
    fn test_bit_layout_is_lsb_first() {
        let tickmap = tickmap_with(&[0], 1);
        assert_eq!(tickmap.bitmap[44_364 / 8], 1 << (44_364 % 8));
        assert!(tickmap.is_initialized(0, 1).unwrap());
        assert!(!tickmap.is_initialized(1, 1).unwrap());
    }

    #[test]
    fn test_ticks_for_swap_x_to_y_includes_current() {
        let tickmap = tickmap_with(&[-300, -100, 0, 100, 200], 10);
        assert_eq!(tickmap.ticks_for_swap(0, 10, true, 10).unwrap(), vec![0, -100, -300]);
        assert_eq!(tickmap.ticks_for_swap(-5, 10, true, 10).unwrap(), vec![-100, -300]);
        assert_eq!(tickmap.ticks_for_swap(150, 10, true, 2).unwrap(), vec![100, 0]);
    }

    #[test]
    fn test_ticks_for_swap_y_to_x_excludes_current() {
        let tickmap = tickmap_with(&[-300, -100, 0, 100, 200], 10);
        assert_eq!(tickmap.ticks_for_swap(0, 10, false, 10).unwrap(), vec![100, 200]);
        assert_eq!(tickmap.ticks_for_swap(-5, 10, false, 10).unwrap(), vec![0, 100, 200]);
        assert_eq!(tickmap.ticks_for_swap(-400, 10, false, 1).unwrap(), vec![-300]);
    }

    #[test]
    fn test_ticks_for_swap_reaches_map_edges() {
        let tickmap = tickmap_with(&[-44_364, 44_362], 1);
        assert_eq!(tickmap.ticks_for_swap(0, 1, true, 5).unwrap(), vec![-44_364]);
        assert_eq!(tickmap.ticks_for_swap(0, 1, false, 5).unwrap(), vec![44_362]);
        assert_eq!(tickmap.ticks_for_swap(MAX_TICK_INDEX, 1, true, 5).unwrap(), vec![44_362, -44_364]);
    }

    #[test]
    fn test_ticks_for_swap_overflowing_tick_index() {
        let mut tickmap = TickmapFacade::default();
        let top = TICKMAP_BITS - 1;
        tickmap.bitmap[top / 8] |= 1 << (top % 8);
        assert_eq!(tickmap.ticks_for_swap(0, 60_000, false, 5), Err(ARITHMETIC_OVERFLOW));
        assert_eq!(tickmap.ticks_for_swap(0, 60_000, true, 5), Ok(vec![]));
    }

    #[test]
    fn test_next_initialized_tick() {
        let tickmap = tickmap_with(&[-20, 40], 2);
        assert_eq!(tickmap.next_initialized_tick(0, 2, true).unwrap(), Some(-20));
        assert_eq!(tickmap.next_initialized_tick(0, 2, false).unwrap(), Some(40));
        assert_eq!(tickmap.next_initialized_tick(40, 2, false).unwrap(), None);
        assert_eq!(TickmapFacade::default().next_initialized_tick(0, 2, true), Ok(None));
    }
}
