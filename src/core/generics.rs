pub fn make_array<Item: Clone>(item: Item, number_of_times: usize) -> Vec<Item> {
    let mut result = Vec::with_capacity(number_of_times);
    for _ in 0..number_of_times {
        result.push(item.clone());
    }
    result
}

pub fn any_common_elements<T, U>(lhs: T, rhs: U) -> bool
where
    T: IntoIterator,
    U: IntoIterator<Item = T::Item> + Clone,
    T::Item: PartialEq,
{
    for lhs_item in lhs {
        for rhs_item in rhs.clone() {
            if lhs_item == rhs_item {
                return true;
            }
        }
    }
    false
}

/// 兩邊共有的元素，依左邊的順序
pub fn common_elements<T>(lhs: &[T], rhs: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    lhs.iter().filter(|item| rhs.contains(item)).cloned().collect()
}
