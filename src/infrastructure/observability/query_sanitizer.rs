const MAX_VISIBLE_CHARS: usize = 80;

/// Shortens user queries for logging and masks anything that looks like a
/// phone number or email address.
pub fn sanitize_query(query: &str) -> String {
    let trimmed = query.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = trimmed.chars().count();
    let visible = if total > MAX_VISIBLE_CHARS {
        let head: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", head, total)
    } else {
        trimmed.to_string()
    };

    redact_contact_details(&visible)
}

fn redact_contact_details(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let digits = word.chars().filter(char::is_ascii_digit).count();
            if word.contains('@') && word.contains('.') {
                "[EMAIL]"
            } else if digits >= 7 {
                "[PHONE]"
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
