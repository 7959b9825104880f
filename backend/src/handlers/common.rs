use chrono_tz::Tz;

use crate::utils::time;

/// Falls back to the current year in the configured zone.
pub fn resolve_year(year: Option<i32>, tz: &Tz) -> i32 {
    year.unwrap_or_else(|| time::current_year(tz))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_year_wins() {
        assert_eq!(resolve_year(Some(2019), &chrono_tz::Asia::Jakarta), 2019);
    }

    #[test]
    fn missing_year_uses_current_year() {
        let tz = chrono_tz::Asia::Jakarta;
        let before = time::current_year(&tz);
        let year = resolve_year(None, &tz);
        let after = time::current_year(&tz);
        assert!(year == before || year == after);
    }
}
