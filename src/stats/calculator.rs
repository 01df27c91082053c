//! Derived baseball ratios computed from raw counting statistics.
//!
//! Every function is pure. A zero denominator yields `0.0` instead of `NaN`
//! or infinity, since small samples (no at-bats, no innings) are normal.
//! Results are not rounded.

/// Divides, returning `0.0` when the denominator is zero.
#[inline]
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Expected winning fraction from runs scored and allowed,
/// `rs² / (rs² + ra²)`. Returns `0.0` when both are zero.
pub fn pythagorean_expectation(runs_scored: u32, runs_allowed: u32) -> f64 {
    let rs = f64::from(runs_scored).powi(2);
    let ra = f64::from(runs_allowed).powi(2);
    ratio(rs, rs + ra)
}

/// Expected (wins, losses) over `games` from the Pythagorean expectation.
/// Wins are rounded to the nearest whole game; losses take the remainder.
pub fn pythagorean_record(runs_scored: u32, runs_allowed: u32, games: u32) -> (u32, u32) {
    if games == 0 || (runs_scored == 0 && runs_allowed == 0) {
        return (0, 0);
    }
    let expectation = pythagorean_expectation(runs_scored, runs_allowed);
    let wins = (expectation * f64::from(games)).round() as u32;
    let wins = wins.min(games);
    (wins, games - wins)
}

pub fn batting_average(hits: u32, at_bats: u32) -> f64 {
    ratio(f64::from(hits), f64::from(at_bats))
}

/// `(H + BB + HBP) / (AB + BB + HBP + SF)`
pub fn on_base_percentage(
    hits: u32,
    walks: u32,
    hit_by_pitch: u32,
    at_bats: u32,
    sac_flies: u32,
) -> f64 {
    let on_base = f64::from(hits) + f64::from(walks) + f64::from(hit_by_pitch);
    let chances =
        f64::from(at_bats) + f64::from(walks) + f64::from(hit_by_pitch) + f64::from(sac_flies);
    ratio(on_base, chances)
}

/// Total bases; `hits` includes extra-base hits, so singles count once.
pub fn total_bases(hits: u32, doubles: u32, triples: u32, home_runs: u32) -> u64 {
    u64::from(hits) + u64::from(doubles) + 2 * u64::from(triples) + 3 * u64::from(home_runs)
}

pub fn slugging_percentage(total_bases: u64, at_bats: u32) -> f64 {
    ratio(total_bases as f64, f64::from(at_bats))
}

pub fn ops(on_base_percentage: f64, slugging_percentage: f64) -> f64 {
    on_base_percentage + slugging_percentage
}

pub fn innings_from_outs(outs: u32) -> f64 {
    f64::from(outs) / 3.0
}

/// Reads innings in baseball notation, where the digit after the dot counts
/// outs: `"123.2"` is 123⅔ innings. Unparseable input reads as zero.
pub fn parse_innings_pitched(innings: &str) -> f64 {
    let innings = innings.trim();
    let (whole, thirds) = innings.split_once('.').unwrap_or((innings, "0"));
    let whole = whole.parse::<u32>().unwrap_or(0);
    let thirds = thirds.parse::<u32>().unwrap_or(0).min(2);
    f64::from(whole) + f64::from(thirds) / 3.0
}

/// `9 × ER / IP`
pub fn era(earned_runs: u32, innings_pitched: f64) -> f64 {
    per_nine(earned_runs, innings_pitched)
}

/// `(BB + H) / IP`
pub fn whip(walks: u32, hits: u32, innings_pitched: f64) -> f64 {
    ratio(f64::from(walks) + f64::from(hits), innings_pitched)
}

/// Any count scaled to nine innings.
pub fn per_nine(count: u32, innings_pitched: f64) -> f64 {
    ratio(9.0 * f64::from(count), innings_pitched)
}

pub fn strikeout_walk_ratio(strikeouts: u32, walks: u32) -> f64 {
    ratio(f64::from(strikeouts), f64::from(walks))
}

pub fn strike_percentage(strikes: u32, pitches: u32) -> f64 {
    ratio(f64::from(strikes), f64::from(pitches))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_pythagorean_expectation_known_values() {
        assert_close(pythagorean_expectation(815, 668), 815.0_f64.powi(2) / (815.0_f64.powi(2) + 668.0_f64.powi(2)));
        assert_close(pythagorean_expectation(700, 700), 0.5);
        assert_close(pythagorean_expectation(0, 0), 0.0);
        assert_close(pythagorean_expectation(0, 10), 0.0);
        assert_close(pythagorean_expectation(10, 0), 1.0);
    }

    #[test]
    fn test_pythagorean_expectation_range_and_monotonicity() {
        for runs_allowed in [0u32, 1, 50, 500, 900] {
            let mut previous = -1.0;
            for runs_scored in (0u32..=1000).step_by(25) {
                let value = pythagorean_expectation(runs_scored, runs_allowed);
                assert!((0.0..=1.0).contains(&value));
                if runs_allowed > 0 {
                    assert!(value > previous, "not increasing at {runs_scored}/{runs_allowed}");
                }
                previous = value;
            }
        }
        for runs in [1u32, 13, 640, 901] {
            assert_close(pythagorean_expectation(runs, runs), 0.5);
        }
    }

    #[test]
    fn test_pythagorean_record() {
        assert_eq!(pythagorean_record(700, 700, 162), (81, 81));
        let (wins, losses) = pythagorean_record(815, 668, 162);
        assert_eq!(wins + losses, 162);
        assert_eq!(wins, 97);
        assert_eq!(pythagorean_record(0, 0, 162), (0, 0));
        assert_eq!(pythagorean_record(500, 400, 0), (0, 0));
        assert_eq!(pythagorean_record(0, 30, 10), (0, 10));
    }

    #[test]
    fn test_batting_ratios() {
        assert_close(batting_average(197, 599), 197.0 / 599.0);
        // 2024 Judge-like line
        let obp = on_base_percentage(180, 133, 9, 559, 3);
        assert_close(obp, 322.0 / 704.0);
        let tb = total_bases(180, 36, 1, 58);
        assert_eq!(tb, 180 + 36 + 2 + 174);
        let slg = slugging_percentage(tb, 559);
        assert_close(slg, 392.0 / 559.0);
        assert_close(ops(obp, slg), obp + slg);
    }

    #[test]
    fn test_total_bases_on_huge_counts() {
        let max = u32::MAX;
        let tb = total_bases(max, max, max, max);
        assert_eq!(tb, 7 * u64::from(max));
        assert!(slugging_percentage(tb, max) > 0.0);
    }

    #[test]
    fn test_batting_average_in_unit_range() {
        for at_bats in [1u32, 3, 100, 650] {
            for hits in [0, at_bats / 3, at_bats] {
                let avg = batting_average(hits, at_bats);
                assert!((0.0..=1.0).contains(&avg));
                assert_close(avg, f64::from(hits) / f64::from(at_bats));
            }
        }
    }

    #[test]
    fn test_zero_denominators_yield_zero() {
        assert_eq!(batting_average(0, 0), 0.0);
        assert_eq!(on_base_percentage(0, 0, 0, 0, 0), 0.0);
        assert_eq!(slugging_percentage(0, 0), 0.0);
        assert_eq!(ops(0.0, 0.0), 0.0);
        assert_eq!(era(5, 0.0), 0.0);
        assert_eq!(whip(3, 4, 0.0), 0.0);
        assert_eq!(per_nine(7, 0.0), 0.0);
        assert_eq!(strikeout_walk_ratio(10, 0), 0.0);
        assert_eq!(strike_percentage(0, 0), 0.0);
    }

    #[test]
    fn test_innings_notation() {
        assert_close(parse_innings_pitched("123.2"), 123.0 + 2.0 / 3.0);
        assert_close(parse_innings_pitched("7.1"), 7.0 + 1.0 / 3.0);
        assert_close(parse_innings_pitched("200"), 200.0);
        assert_close(parse_innings_pitched("0.0"), 0.0);
        assert_close(parse_innings_pitched("-.--"), 0.0);
        assert_close(innings_from_outs(577), 577.0 / 3.0);
        assert_close(innings_from_outs(371), parse_innings_pitched("123.2"));
    }

    #[test]
    fn test_pitching_ratios() {
        let ip = innings_from_outs(577);
        assert_close(era(60, ip), 9.0 * 60.0 / ip);
        assert_close(whip(45, 140, ip), 185.0 / ip);
        assert_close(per_nine(225, ip), 9.0 * 225.0 / ip);
        assert_close(strikeout_walk_ratio(225, 45), 5.0);
        assert_close(strike_percentage(2000, 3100), 2000.0 / 3100.0);
    }
}
