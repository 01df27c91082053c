use chrono::{Datelike, Local};

use crate::constants::season::FIRST_SEASON;

/// Current calendar year on the server's local clock.
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Season to query for a requested season, read from the clock at request time.
pub fn resolve_season(requested: Option<i32>) -> i32 {
    resolve_season_with_current_year(requested, current_year())
}

/// Omitted seasons, seasons in the future and seasons at or before 1876
/// resolve to `current_year`; anything else is used as given.
pub fn resolve_season_with_current_year(requested: Option<i32>, current_year: i32) -> i32 {
    match requested {
        Some(season) if season > FIRST_SEASON && season <= current_year => season,
        _ => current_year,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_omitted_season_is_current_year() {
        assert_eq!(resolve_season_with_current_year(None, 2026), 2026);
        assert_eq!(resolve_season(None), current_year());
    }

    #[test]
    fn test_valid_seasons_pass_through() {
        assert_eq!(resolve_season_with_current_year(Some(2024), 2026), 2024);
        assert_eq!(resolve_season_with_current_year(Some(1877), 2026), 1877);
        assert_eq!(resolve_season_with_current_year(Some(2026), 2026), 2026);
    }

    #[test]
    fn test_out_of_range_seasons_fall_back() {
        assert_eq!(resolve_season_with_current_year(Some(2027), 2026), 2026);
        assert_eq!(resolve_season_with_current_year(Some(1876), 2026), 2026);
        assert_eq!(resolve_season_with_current_year(Some(-3), 2026), 2026);
        assert_eq!(resolve_season_with_current_year(Some(0), 2026), 2026);
    }
}
