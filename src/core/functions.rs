pub fn greet(person: &str, day: &str) -> String {
    format!("Hello {}, today is {}.", person, day)
}

pub fn greet_on(person: &str, day: &str) -> String {
    format!("Hello, {}, today is {}.", person, day)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub min: i32,
    pub max: i32,
    pub sum: i32,
}

/// 空序列沒有最小值與最大值
pub fn calculate_statistics(scores: &[i32]) -> Option<Statistics> {
    let (&first, _) = scores.split_first()?;
    let mut stats = Statistics {
        min: first,
        max: first,
        sum: 0,
    };

    for &score in scores {
        if score > stats.max {
            stats.max = score;
        } else if score < stats.min {
            stats.min = score;
        }
        stats.sum += score;
    }

    Some(stats)
}

pub fn return_fifteen() -> i32 {
    let mut y = 10;
    let mut add = || y += 5;
    add();
    y
}

pub fn make_increment() -> impl Fn(i32) -> i32 {
    fn add_one(number: i32) -> i32 {
        1 + number
    }
    add_one
}

pub fn has_any_matches(list: &[i32], condition: impl Fn(i32) -> bool) -> bool {
    list.iter().any(|&item| condition(item))
}

pub fn less_than_ten(number: i32) -> bool {
    number < 10
}

pub fn triple_all(numbers: &[i32]) -> Vec<i32> {
    numbers.iter().map(|number| 3 * number).collect()
}

pub fn sorted_descending(numbers: &[i32]) -> Vec<i32> {
    let mut sorted = numbers.to_vec();
    sorted.sort_by(|a, b| b.cmp(a));
    sorted
}
