use crate::common::enums::WeightUnit;

/// Format a weight with one decimal and its unit
pub fn format_weight(value: f64, unit: WeightUnit) -> String {
    format!("{:.1} {}", value, unit)
}

/// Parse free-form weight input, only digits, dot and minus survive
pub fn parse_weight_input(input: &str) -> Option<f64> {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Extract every number occurring in a text, in order
pub fn extract_numbers(text: &str) -> Vec<f64> {
    let mut numbers = Vec::new();
    let mut token = String::new();
    let mut seen_dot = false;

    // trailing space flushes the last token
    for c in text.chars().chain(std::iter::once(' ')) {
        if c.is_ascii_digit() {
            token.push(c);
        } else if c == '.' && !token.is_empty() && !seen_dot {
            token.push(c);
            seen_dot = true;
        } else {
            if let Ok(v) = token.parse::<f64>() {
                numbers.push(v);
            }
            token.clear();
            seen_dot = false;
        }
    }
    numbers
}

/// First number mentioned in a text, e.g. a scale reading transcript
pub fn detect_weight(text: &str) -> Option<f64> {
    extract_numbers(text).into_iter().next()
}
