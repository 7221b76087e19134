use crate::domain::optional::OptionalValue;
use std::collections::BTreeMap;

pub fn team_score(scores: &[i32]) -> i32 {
    let mut team_score = 0;
    for &score in scores {
        if score > 50 {
            team_score += 3;
        } else {
            team_score += 1;
        }
    }
    team_score
}

pub fn score_decoration(team_score: i32) -> &'static str {
    if team_score > 10 {
        "🎉"
    } else {
        ""
    }
}

/// 有名字就打招呼，沒有就維持原本的 greeting
pub fn greeting(optional_name: OptionalValue<&str>) -> String {
    optional_name
        .if_some(|name| format!("Hello, {}", name))
        .unwrap_or_else(|| "Hello!".to_string())
}

pub fn informal_greeting(nickname: OptionalValue<&str>, full_name: &str) -> String {
    format!("Hi {}", nickname.unwrap_or(full_name))
}

pub fn describe_vegetable(vegetable: &str) -> String {
    match vegetable {
        "celery" => "Add some raisins and make ants on a log.".to_string(),
        "cucumber" | "watercress" => "That would make a good tea sandwich.".to_string(),
        x if x.ends_with("pepper") => format!("Is it a spicy {}?", x),
        _ => "Everything tastes good in soup.".to_string(),
    }
}

pub fn interesting_numbers() -> BTreeMap<&'static str, Vec<i32>> {
    BTreeMap::from([
        ("Prime", vec![2, 3, 5, 7, 11, 13]),
        ("Fibonacci", vec![1, 1, 2, 3, 5, 8]),
        ("Square", vec![1, 4, 9, 16, 25]),
    ])
}

/// 回傳最大值與其所屬的種類
pub fn largest_interesting(numbers: &BTreeMap<&'static str, Vec<i32>>) -> OptionalValue<(&'static str, i32)> {
    let mut largest: OptionalValue<(&'static str, i32)> = OptionalValue::none();
    for (&kind, values) in numbers {
        for &number in values {
            let beats = largest.as_ref().match_with(|&(_, best)| number > best, || true);
            if beats {
                largest = OptionalValue::some((kind, number));
            }
        }
    }
    largest
}

/// `start` 必須為正數，否則永遠到不了 `limit`；溢位時同樣回傳 None
pub fn double_until(start: i32, limit: i32) -> OptionalValue<i32> {
    if start <= 0 {
        return OptionalValue::none();
    }
    let mut n = start;
    while n < limit {
        match n.checked_mul(2) {
            Some(doubled) => n = doubled,
            None => return OptionalValue::none(),
        }
    }
    OptionalValue::some(n)
}

/// 至少執行一次的迴圈，前置條件同 `double_until`
pub fn double_at_least_once(start: i32, limit: i32) -> OptionalValue<i32> {
    if start <= 0 {
        return OptionalValue::none();
    }
    let mut m = start;
    loop {
        match m.checked_mul(2) {
            Some(doubled) => m = doubled,
            None => return OptionalValue::none(),
        }
        if m >= limit {
            break;
        }
    }
    OptionalValue::some(m)
}

pub fn sum_range(upper: i32) -> i32 {
    (0..upper).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_score() {
        let score = team_score(&[75, 43, 103, 87, 12]);
        assert_eq!(score, 11);
        assert_eq!(score_decoration(score), "🎉");
        assert_eq!(score_decoration(3), "");
    }

    #[test]
    fn test_greetings() {
        assert_eq!(greeting(OptionalValue::some("John Appleseed")), "Hello, John Appleseed");
        assert_eq!(greeting(OptionalValue::none()), "Hello!");
        assert_eq!(informal_greeting(OptionalValue::none(), "John Appleseed"), "Hi John Appleseed");
        assert_eq!(informal_greeting(OptionalValue::some("Johnny"), "John Appleseed"), "Hi Johnny");
    }

    #[test]
    fn test_describe_vegetable() {
        assert_eq!(describe_vegetable("red pepper"), "Is it a spicy red pepper?");
        assert_eq!(describe_vegetable("celery"), "Add some raisins and make ants on a log.");
        assert_eq!(describe_vegetable("watercress"), "That would make a good tea sandwich.");
        assert_eq!(describe_vegetable("kale"), "Everything tastes good in soup.");
    }

    #[test]
    fn test_largest_interesting() {
        assert_eq!(
            largest_interesting(&interesting_numbers()),
            OptionalValue::some(("Square", 25))
        );
        assert!(largest_interesting(&BTreeMap::new()).is_none());
    }

    #[test]
    fn test_loops() {
        assert_eq!(double_until(2, 100), OptionalValue::some(128));
        assert_eq!(double_at_least_once(2, 100), OptionalValue::some(128));
        // 條件一開始就不成立時，repeat 仍會執行一次
        assert_eq!(double_until(200, 100), OptionalValue::some(200));
        assert_eq!(double_at_least_once(200, 100), OptionalValue::some(400));
        assert_eq!(sum_range(4), 6);
    }

    #[test]
    fn test_doubling_rejects_non_positive_start_and_overflow() {
        assert!(double_until(0, 100).is_none());
        assert!(double_at_least_once(0, 100).is_none());
        assert!(double_until(-3, 100).is_none());
        assert!(double_at_least_once(-3, 100).is_none());
        assert!(double_until(1, i32::MAX).is_none());
        assert!(double_at_least_once(i32::MAX / 2 + 1, i32::MAX).is_none());
        assert_eq!(double_until(5, 5), OptionalValue::some(5));
    }
}
