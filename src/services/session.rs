use chrono::Utc;
use uuid::Uuid;

use crate::models::{Title, WatchSession};

/// Number of characters in a session code
pub const CODE_LENGTH: usize = 8;

const CODE_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Placeholder participant list shown while nobody has joined
const INITIAL_PARTICIPANTS: [&str; 2] = ["You", "Waiting for friends..."];

/// Generates a cosmetic watch-together code
///
/// Eight uppercase alphanumeric characters taken from the random bits of a
/// v4 UUID. Codes are not registered anywhere and may collide.
pub fn generate_code() -> String {
    let mut bits = Uuid::new_v4().as_u128();
    let base = CODE_ALPHABET.len() as u128;

    (0..CODE_LENGTH)
        .map(|_| {
            let digit = (bits % base) as usize;
            bits /= base;
            CODE_ALPHABET[digit] as char
        })
        .collect()
}

/// Opens a mock session for a title with a shareable link
pub fn create_session(title: &Title, share_base_url: &str) -> WatchSession {
    let code = generate_code();
    let share_url = format!("{}/{}", share_base_url.trim_end_matches('/'), code);

    tracing::info!(title_id = %title.id, code = %code, "Watch-together session created");

    WatchSession {
        code,
        share_url,
        title_id: title.id.clone(),
        participants: INITIAL_PARTICIPANTS.iter().map(|p| p.to_string()).collect(),
        created_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::title;
    use crate::models::Medium;

    #[test]
    fn test_code_shape() {
        for _ in 0..100 {
            let code = generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_codes_vary() {
        let codes: std::collections::HashSet<String> = (0..20).map(|_| generate_code()).collect();
        assert!(codes.len() > 1);
    }

    #[test]
    fn test_session_share_url() {
        let title = title("19", Medium::Film, &["Sci-Fi"]);
        let session = create_session(&title, "https://watchwith.ai/session/");

        assert_eq!(session.title_id, title.id);
        assert_eq!(
            session.share_url,
            format!("https://watchwith.ai/session/{}", session.code)
        );
        assert_eq!(session.participants, vec!["You", "Waiting for friends..."]);
    }
}
