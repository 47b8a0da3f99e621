//! Booking confirmation code generation.

use rand::Rng;

const CODE_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates an 8-character confirmation code formatted as `XXXX-XXXX`.
///
/// The last four characters derive from the current timestamp in base 36,
/// which keeps codes generated in the same process distinct even when the
/// random prefix collides.
pub fn generate_confirmation_code() -> String {
    let mut rng = rand::thread_rng();

    let mut code: String = (0..4)
        .map(|_| CODE_CHARS[rng.gen_range(0..CODE_CHARS.len())] as char)
        .collect();

    let timestamp = chrono::Utc::now().timestamp_millis();
    let suffix = to_base36(timestamp);
    let tail = &suffix[suffix.len().saturating_sub(4)..];
    code.push_str(tail);

    format!("{}-{}", &code[..4], &code[4..])
}

fn to_base36(mut value: i64) -> String {
    if value <= 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(CODE_CHARS[((value % 36) + 26) as usize % 36]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_format() {
        let code = generate_confirmation_code();
        assert_eq!(code.len(), 9);
        let (head, tail) = code.split_once('-').unwrap();
        assert_eq!(head.len(), 4);
        assert_eq!(tail.len(), 4);
        assert!(code
            .chars()
            .all(|c| c == '-' || c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_codes_are_distinct() {
        let a = generate_confirmation_code();
        let b = generate_confirmation_code();
        // Random prefix makes collisions vanishingly unlikely.
        assert_ne!(a, b);
    }
}
