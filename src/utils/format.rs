// src/utils/format.rs

// Render a 0-100 weight as a fixed-width text progress bar
pub fn progress_bar(weight: u8, width: usize) -> String {
    let filled = (usize::from(weight.min(100)) * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

// Describe a character count without revealing content
pub fn describe_secret(secret: &str) -> String {
    match secret.chars().count() {
        0 => "empty".to_string(),
        1 => "1 character".to_string(),
        n => format!("{} characters", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(progress_bar(0, 4), "░░░░");
        assert_eq!(progress_bar(50, 4), "██░░");
        assert_eq!(progress_bar(100, 4), "████");
        assert_eq!(progress_bar(255, 4), "████");
        assert_eq!(progress_bar(25, 20).chars().count(), 20);
    }

    #[test]
    fn secret_description_hides_content() {
        assert_eq!(describe_secret(""), "empty");
        assert_eq!(describe_secret("x"), "1 character");
        assert_eq!(describe_secret("hunter2"), "7 characters");
    }
}
