use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{
    FULL_ROTATIONS, JITTER_FRACTION, MIN_SPIN_ENTRANTS, REDUCED_MOTION_SPIN_DURATION_MS,
    SPIN_DURATION_MS,
};
use crate::error::WheelError;
use crate::roster::Roster;
use crate::wheel_geometry::normalize_degrees;

/// Tunables for the spin animation target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelConfig {
    /// Whole turns added before the landing offset. Visual only.
    pub full_rotations: u32,
    /// Width of the jitter band as a fraction of one slice.
    pub jitter_fraction: f64,
    /// Delay before the winner is revealed.
    pub spin_duration_ms: u32,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            full_rotations: FULL_ROTATIONS,
            jitter_fraction: JITTER_FRACTION,
            spin_duration_ms: SPIN_DURATION_MS,
        }
    }
}

impl WheelConfig {
    /// Short, single-turn spin for users who asked for less motion.
    pub fn reduced_motion() -> Self {
        Self {
            full_rotations: 1,
            spin_duration_ms: REDUCED_MOTION_SPIN_DURATION_MS,
            ..Self::default()
        }
    }

    /// Picks a winner uniformly from the roster and computes where the wheel
    /// must stop so the pointer rests on it.
    pub fn spin<R: Rng>(&self, roster: &Roster, rng: &mut R) -> Result<SpinResult, WheelError> {
        ensure_spinnable(roster)?;
        let n = roster.count();
        let winner_index = rng.gen_range(0..n);
        let jitter = rng.gen::<f64>() * self.jitter_band(n);
        let result = self.land_on(roster, winner_index, jitter)?;
        log::info!(
            "Spin picked {:?} (index {} of {}), target rotation {:.2}",
            result.winner_entrant,
            result.winner_index,
            n,
            result.target_rotation
        );
        Ok(result)
    }

    /// Deterministic half of [`spin`](Self::spin): target rotation for a known
    /// winner and jitter draw. `jitter` is clamped into the jitter band and
    /// `winner_index` must be a roster position.
    pub fn land_on(
        &self,
        roster: &Roster,
        winner_index: usize,
        jitter: f64,
    ) -> Result<SpinResult, WheelError> {
        ensure_spinnable(roster)?;
        let n = roster.count();
        let winner_entrant = roster
            .get(winner_index)
            .ok_or(WheelError::UnknownEntrant {
                index: winner_index,
                count: n,
            })?
            .to_string();

        let slice_angle = slice_angle(n);
        let band = self.jitter_band(n);
        let jitter = if jitter.is_finite() { jitter.clamp(0.0, band) } else { 0.0 };
        let segment_center = winner_index as f64 * slice_angle + slice_angle / 2.0;

        // The jitter band is centred on the segment so the resting angle
        // stays inside the winner's slice for any draw.
        let offset = jitter - band / 2.0;
        let target_rotation =
            self.full_rotations as f64 * 360.0 + (360.0 - segment_center) + offset;

        Ok(SpinResult {
            winner_index,
            winner_entrant,
            target_rotation,
            jitter,
        })
    }

    fn jitter_band(&self, n: usize) -> f64 {
        slice_angle(n) * self.jitter_fraction.clamp(0.0, 1.0)
    }
}

/// Outcome of one spin. Rotation is absolute, as if the wheel started at 0°.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinResult {
    pub winner_index: usize,
    pub winner_entrant: String,
    pub target_rotation: f64,
    /// Raw jitter draw, `0 <= jitter < jitter_fraction * slice_angle`.
    pub jitter: f64,
}

impl SpinResult {
    pub fn resting_angle(&self) -> f64 {
        normalize_degrees(self.target_rotation)
    }
}

/// Spin bookkeeping for the presentation layer. The selector itself is
/// stateless; this is what keeps a second spin from starting mid-reveal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WheelSpinState {
    pub is_spinning: bool,
    /// Current wheel transform in degrees, carried across spins.
    pub rotation: f64,
    pub last_result: Option<SpinResult>,
}

impl WheelSpinState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_spin(&self, roster: &Roster) -> bool {
        !self.is_spinning && roster.count() >= MIN_SPIN_ENTRANTS
    }

    /// Records a pending spin and returns the rotation to animate to.
    pub fn start_spin(&mut self, result: &SpinResult) -> f64 {
        self.is_spinning = true;
        self.last_result = None;
        self.rotation = continue_rotation(self.rotation, result.target_rotation);
        self.rotation
    }

    pub fn complete_spin(&mut self, result: SpinResult) {
        self.is_spinning = false;
        self.last_result = Some(result);
    }
}

pub fn slice_angle(n: usize) -> f64 {
    360.0 / n as f64
}

fn ensure_spinnable(roster: &Roster) -> Result<(), WheelError> {
    let count = roster.count();
    if count < MIN_SPIN_ENTRANTS {
        return Err(WheelError::InsufficientEntrants { count });
    }
    Ok(())
}

/// Continues from the wheel's current transform so the next animation keeps
/// turning forward. The result is congruent to `target` mod 360 and never
/// less than `previous`.
pub fn continue_rotation(previous: f64, target: f64) -> f64 {
    let base = (previous / 360.0).ceil() * 360.0;
    base + target
}

/// Index of the slice under the fixed top pointer after the wheel has been
/// rotated clockwise by `rotation` degrees.
pub fn winner_at_rotation(rotation: f64, n: usize) -> Option<usize> {
    if n == 0 {
        return None;
    }
    let pointed = normalize_degrees(360.0 - normalize_degrees(rotation));
    let index = (pointed / slice_angle(n)).floor() as usize;
    Some(index.min(n - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn roster_of(n: usize) -> Roster {
        Roster::from_names((0..n).map(|i| format!("p{}", i)))
    }

    #[test]
    fn test_spin_requires_two_entrants() {
        let config = WheelConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        for n in 0..2 {
            assert_eq!(
                config.spin(&roster_of(n), &mut rng),
                Err(WheelError::InsufficientEntrants { count: n })
            );
        }
        assert!(config.land_on(&roster_of(1), 0, 0.0).is_err());
    }

    #[test]
    fn test_land_on_rejects_index_past_end() {
        let config = WheelConfig::default();
        assert_eq!(
            config.land_on(&roster_of(5), 7, 0.0),
            Err(WheelError::UnknownEntrant { index: 7, count: 5 })
        );
        assert_eq!(
            config.land_on(&roster_of(5), 5, 0.0),
            Err(WheelError::UnknownEntrant { index: 5, count: 5 })
        );
    }

    #[test]
    fn test_forced_winner_three_entrants() {
        let config = WheelConfig::default();
        let roster = Roster::from_names(["Ana", "Bo", "Cy"]);
        for jitter in [0.0, 10.0, 48.0, 95.9] {
            let result = config.land_on(&roster, 1, jitter).unwrap();
            assert_eq!(result.winner_entrant, "Bo");
            let resting = result.resting_angle();
            // 360 - 180 centre, shifted by the centred jitter
            let raw = resting - 180.0 + 48.0;
            assert!((0.0..96.0).contains(&raw), "raw jitter {}", raw);
            assert!((raw - result.jitter).abs() < 1e-9);
            assert_eq!(winner_at_rotation(result.target_rotation, 3), Some(1));
        }
    }

    #[test]
    fn test_full_rotations_do_not_change_resting_angle() {
        let roster = roster_of(5);
        let many = WheelConfig::default().land_on(&roster, 3, 12.0).unwrap();
        let one = WheelConfig::reduced_motion().land_on(&roster, 3, 12.0).unwrap();
        assert!((many.resting_angle() - one.resting_angle()).abs() < 1e-9);
        assert!(many.target_rotation >= 3600.0);
    }

    #[test]
    fn test_resting_angle_lands_on_winner() {
        let config = WheelConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        for n in 2..=20 {
            let roster = roster_of(n);
            let band = slice_angle(n) * JITTER_FRACTION;
            for winner in 0..n {
                for jitter in [0.0, band * 0.25, band * 0.5, band * 0.999] {
                    let result = config.land_on(&roster, winner, jitter).unwrap();
                    assert_eq!(winner_at_rotation(result.target_rotation, n), Some(winner));
                }
            }
            for _ in 0..200 {
                let result = config.spin(&roster, &mut rng).unwrap();
                assert!(result.jitter >= 0.0 && result.jitter < band);
                assert_eq!(
                    winner_at_rotation(result.target_rotation, n),
                    Some(result.winner_index)
                );
            }
        }
    }

    #[test]
    fn test_winner_distribution_is_uniform() {
        let config = WheelConfig::default();
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let n = 6;
        let spins = 60_000;
        let roster = roster_of(n);
        let mut counts = vec![0usize; n];
        for _ in 0..spins {
            counts[config.spin(&roster, &mut rng).unwrap().winner_index] += 1;
        }
        let expected = spins as f64 / n as f64;
        let chi_square: f64 = counts
            .iter()
            .map(|&c| {
                let d = c as f64 - expected;
                d * d / expected
            })
            .sum();
        // 5 degrees of freedom, p = 0.001
        assert!(chi_square < 20.52, "chi-square {} counts {:?}", chi_square, counts);
    }

    #[test]
    fn test_continue_rotation_moves_forward() {
        assert_eq!(continue_rotation(0.0, 3780.0), 3780.0);
        let next = continue_rotation(3780.0, 3700.0);
        assert!(next > 3780.0);
        assert!((normalize_degrees(next) - normalize_degrees(3700.0)).abs() < 1e-9);
        assert_eq!(continue_rotation(720.0, 100.0), 820.0);
    }

    #[test]
    fn test_spin_state_blocks_double_spin() {
        let roster = roster_of(3);
        let mut state = WheelSpinState::new();
        assert!(state.can_spin(&roster));
        assert!(!state.can_spin(&roster_of(1)));

        let result = WheelConfig::default().land_on(&roster, 0, 0.0).unwrap();
        let rotation = state.start_spin(&result);
        assert_eq!(rotation, result.target_rotation);
        assert!(!state.can_spin(&roster));

        state.complete_spin(result.clone());
        assert!(state.can_spin(&roster));
        assert_eq!(state.last_result, Some(result));
    }

    #[test]
    fn test_winner_at_rotation_unrotated() {
        assert_eq!(winner_at_rotation(0.0, 4), Some(0));
        assert_eq!(winner_at_rotation(10.0, 4), Some(3));
        assert_eq!(winner_at_rotation(0.0, 0), None);
    }
}
