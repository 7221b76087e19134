use std::collections::BTreeMap;

pub fn width_label(label: &str, width: u32) -> String {
    label.to_string() + &width.to_string()
}

pub fn apple_summary(apples: u32) -> String {
    format!("I have {} apples.", apples)
}

pub fn fruit_summary(apples: u32, oranges: u32) -> String {
    format!("I have {} pieces of fruit.", apples + oranges)
}

/// 多行字串，共同的縮排已移除
pub fn quotation(apples: u32, oranges: u32) -> String {
    format!(
        "Even though there's whitespace to the left,\n\
         the actual lines aren't indented.\n    \
         Except for this line.\n\
         Double quotes (\") can appear without being escaped.\n\
         \n\
         I still have {} pieces of fruit.",
        apples + oranges
    )
}

pub fn fruits() -> Vec<String> {
    let mut fruits: Vec<String> = ["strawberries", "limes", "tangerines"]
        .into_iter()
        .map(String::from)
        .collect();
    fruits[1] = "grapes".to_string();
    fruits.push("blueberries".to_string());
    fruits
}

pub fn occupations() -> BTreeMap<String, String> {
    let mut occupations = BTreeMap::from([
        ("Malcolm".to_string(), "Captain".to_string()),
        ("Kaylee".to_string(), "Mechanic".to_string()),
    ]);
    occupations.insert("Jayne".to_string(), "Public Relations".to_string());
    occupations
}
