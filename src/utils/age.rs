use js_sys::Date;

/// Age in whole years on `today` (year, month 1-12, day), given an ISO
/// `YYYY-MM-DD` birth date. Returns None for an unparseable date.
pub fn age_on(birth_date: &str, today: (i32, u32, u32)) -> Option<i32> {
    let mut parts = birth_date.split('-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.trim().parse().ok()?;

    let (today_year, today_month, today_day) = today;
    let mut age = today_year - year;
    // Birthday not reached yet this year
    if (today_month, today_day) < (month, day) {
        age -= 1;
    }
    Some(age)
}

/// Age in whole years as of the browser clock.
pub fn calc_age(birth_date: &str) -> Option<i32> {
    let now = Date::new_0();
    age_on(
        birth_date,
        (now.get_full_year() as i32, now.get_month() + 1, now.get_date()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn birthday_already_passed() {
        assert_eq!(age_on("2000-01-15", (2018, 6, 1)), Some(18));
    }

    #[test]
    fn birthday_not_reached_yet() {
        // Turns 18 tomorrow: still 17 today.
        assert_eq!(age_on("2000-06-02", (2018, 6, 1)), Some(17));
    }

    #[test]
    fn birthday_today_counts() {
        assert_eq!(age_on("2000-06-01", (2018, 6, 1)), Some(18));
    }

    #[test]
    fn invalid_date_is_none() {
        assert_eq!(age_on("not-a-date", (2018, 6, 1)), None);
        assert_eq!(age_on("2000", (2018, 6, 1)), None);
    }
}
