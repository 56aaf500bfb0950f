/// Card text folded onto one line for log output.
pub fn card_label(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
