use crate::api::models::Hero;

/// Combined pro pick+ban count above which a hero counts as validated by
/// professional play.
pub const PRO_PRESENCE_THRESHOLD: u64 = 50;

// Most recent pub pick count must beat the prior one by more than 10%.
const TREND_GROWTH_FACTOR: f64 = 1.10;

/// Public-match win rate as a percentage in [0, 100]. Heroes with no
/// recorded picks rate 0, never NaN.
pub fn global_win_rate(hero: &Hero) -> f64 {
    if hero.pub_pick == 0 {
        0.0
    } else {
        hero.pub_win as f64 / hero.pub_pick as f64 * 100.0
    }
}

/// Whether combined pro pick+ban presence clears the threshold.
pub fn is_currently_strong(hero: &Hero) -> bool {
    hero.pro_pick + hero.pro_ban > PRO_PRESENCE_THRESHOLD
}

/// One-step momentum on the pub pick trend series: true when the newest
/// point beats the prior one by more than 10%. No smoothing.
pub fn is_trending(hero: &Hero) -> bool {
    let trend = &hero.pub_pick_trend;
    if trend.len() < 2 {
        return false;
    }

    let latest = trend[trend.len() - 1] as f64;
    let previous = trend[trend.len() - 2] as f64;
    latest > previous * TREND_GROWTH_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_rate_guards_zero_picks() {
        let hero = Hero::default();
        assert_eq!(global_win_rate(&hero), 0.0);
    }

    #[test]
    fn win_rate_is_a_percentage() {
        let hero = Hero {
            pub_pick: 200,
            pub_win: 110,
            ..Default::default()
        };
        assert!((global_win_rate(&hero) - 55.0).abs() < 1e-9);
    }

    #[test]
    fn pro_presence_threshold_is_strict() {
        let at_threshold = Hero {
            pro_pick: 30,
            pro_ban: 20,
            ..Default::default()
        };
        assert!(!is_currently_strong(&at_threshold));

        let above = Hero {
            pro_pick: 30,
            pro_ban: 21,
            ..Default::default()
        };
        assert!(is_currently_strong(&above));
    }

    #[test]
    fn short_trend_series_is_not_trending() {
        assert!(!is_trending(&Hero::default()));
        assert!(!is_trending(&Hero {
            pub_pick_trend: vec![500],
            ..Default::default()
        }));
    }

    #[test]
    fn trending_needs_more_than_ten_percent_growth() {
        let flat = Hero {
            pub_pick_trend: vec![100, 110],
            ..Default::default()
        };
        assert!(!is_trending(&flat));

        let rising = Hero {
            pub_pick_trend: vec![80, 100, 115],
            ..Default::default()
        };
        assert!(is_trending(&rising));
    }
}
