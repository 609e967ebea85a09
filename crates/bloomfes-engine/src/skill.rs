use models::{
    CellValues, ScaledVerdict, SkillComparison, SkillLevelProfile, SkillPair, Verdict, Winner,
};

/// Skill curves, integer mode. Both half-division terms use floor
/// division before clamping against the level's max constants.
///
/// after  = min(after_base  + rank / 2,   after_max)
/// before = min(before_base + target / 2, before_max)
pub fn evaluate_integer(profile: &SkillLevelProfile, rank: u32, target: u32) -> SkillPair {
    let after = (profile.after_base + rank / 2).min(profile.after_max);
    let before = (profile.before_base + target / 2).min(profile.before_max);
    SkillPair {
        after: f64::from(after),
        before: f64::from(before),
    }
}

/// Skill curves, fractional mode. Same formula with real division; the
/// clamp still uses the integer max constants.
pub fn evaluate_fractional(profile: &SkillLevelProfile, rank: u32, target: u32) -> SkillPair {
    let after =
        (f64::from(profile.after_base) + f64::from(rank) / 2.0).min(f64::from(profile.after_max));
    let before = (f64::from(profile.before_base) + f64::from(target) / 2.0)
        .min(f64::from(profile.before_max));
    SkillPair { after, before }
}

/// Winner by strict comparison (equal values draw), plus the highest
/// value and the signed difference (`before - after`).
pub fn analyze(pair: SkillPair) -> Verdict {
    let winner = if pair.after > pair.before {
        Winner::After
    } else if pair.before > pair.after {
        Winner::Before
    } else {
        Winner::Draw
    };
    Verdict {
        winner,
        highest: pair.after.max(pair.before),
        difference: pair.before - pair.after,
    }
}

fn comparison(pair: SkillPair, multiplier: Option<f64>) -> SkillComparison {
    let verdict = analyze(pair);
    let scaled = multiplier.map(|m| ScaledVerdict {
        highest: verdict.highest * m,
        difference: verdict.difference * m,
    });
    SkillComparison {
        after: pair.after,
        before: pair.before,
        winner: verdict.winner,
        highest: verdict.highest,
        difference: verdict.difference,
        scaled,
    }
}

/// Evaluate one (rank, target) pair in both numeric modes. The
/// fractional verdict is recomputed from the fractional values, never
/// reused from the integer side; flooring can flip the winner.
pub fn compare(
    profile: &SkillLevelProfile,
    rank: u32,
    target: u32,
    multiplier: Option<f64>,
) -> CellValues {
    CellValues {
        integer: comparison(evaluate_integer(profile, rank, target), multiplier),
        fractional: comparison(evaluate_fractional(profile, rank, target), multiplier),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::SkillLevelTable;

    fn level_1() -> SkillLevelProfile {
        SkillLevelTable::bloomfes_defaults().profile(1).unwrap()
    }

    #[test]
    fn integer_mode_known_example() {
        // Level 1, rank 50, target 100.
        let pair = evaluate_integer(&level_1(), 50, 100);
        assert_eq!(pair.after, 115.0);
        assert_eq!(pair.before, 110.0);

        let verdict = analyze(pair);
        assert_eq!(verdict.winner, Winner::After);
        assert_eq!(verdict.highest, 115.0);
        assert_eq!(verdict.difference, -5.0);
    }

    #[test]
    fn results_clamp_to_max_constants() {
        let table = SkillLevelTable::bloomfes_defaults();
        for level in table.levels() {
            let profile = table.profile(level).unwrap();
            for rank in [0u32, 1, 49, 50, 99, 100, 1_000, u32::MAX / 4] {
                for target in [0u32, 1, 10, 119, 120, 140, 10_000] {
                    let int = evaluate_integer(&profile, rank, target);
                    assert!(int.after <= f64::from(profile.after_max));
                    assert!(int.before <= f64::from(profile.before_max));

                    let frac = evaluate_fractional(&profile, rank, target);
                    assert!(frac.after <= f64::from(profile.after_max));
                    assert!(frac.before <= f64::from(profile.before_max));
                }
            }
        }
    }

    #[test]
    fn fractional_mode_keeps_halves() {
        let pair = evaluate_fractional(&level_1(), 51, 101);
        assert_eq!(pair.after, 115.5);
        assert_eq!(pair.before, 110.5);
    }

    #[test]
    fn flooring_can_change_the_winner() {
        let profile = level_1();

        // integer: 90 + 0 = 90 vs 60 + 30 = 90 -> draw
        let int = analyze(evaluate_integer(&profile, 1, 60));
        assert_eq!(int.winner, Winner::Draw);

        // fractional: 90.5 vs 90.0 -> after wins
        let frac = analyze(evaluate_fractional(&profile, 1, 60));
        assert_eq!(frac.winner, Winner::After);
    }

    #[test]
    fn analyze_is_consistent_with_inputs() {
        for after in 0..60u32 {
            for before in 0..60u32 {
                let pair = SkillPair {
                    after: f64::from(after),
                    before: f64::from(before),
                };
                let v = analyze(pair);
                match v.winner {
                    Winner::After => assert!(pair.after > pair.before),
                    Winner::Before => assert!(pair.before > pair.after),
                    Winner::Draw => assert_eq!(pair.after, pair.before),
                }
                assert_eq!(v.highest, pair.after.max(pair.before));
                assert_eq!(v.difference, pair.before - pair.after);
            }
        }
    }

    #[test]
    fn multiplier_scales_alongside_base_values() {
        let cell = compare(&level_1(), 50, 100, Some(10.0));
        let int = cell.integer;
        assert_eq!(int.highest, 115.0);
        assert_eq!(int.difference, -5.0);

        let scaled = int.scaled.unwrap();
        assert_eq!(scaled.highest, 1150.0);
        assert_eq!(scaled.difference, -50.0);

        let unscaled = compare(&level_1(), 50, 100, None);
        assert!(unscaled.integer.scaled.is_none());
    }
}
