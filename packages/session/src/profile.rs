//! User registration.
//!
//! Registration is nickname-only: the backend identifies users by a
//! client-generated UUID, so there is no authentication flow here.

use thiserror::Error;
use ulat_ph_moderation::ProfanityDictionary;
use uuid::Uuid;

/// A registered user: generated ID plus validated nickname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    /// Client-generated user ID sent with every backend call.
    pub id: Uuid,
    /// Display nickname, trimmed.
    pub nickname: String,
}

/// Reasons a registration attempt is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Nickname was empty or whitespace-only.
    #[error("nickname is empty")]
    EmptyNickname,

    /// Nickname failed the profanity gate.
    #[error("nickname contains profanity")]
    ProfaneNickname,
}

/// Validates a nickname and creates a profile with a fresh v4 UUID.
///
/// # Errors
///
/// Returns an error if the trimmed nickname is empty or contains
/// profanity.
pub fn register(
    nickname: &str,
    dictionary: &ProfanityDictionary,
) -> Result<UserProfile, RegistrationError> {
    let trimmed = nickname.trim();
    if trimmed.is_empty() {
        return Err(RegistrationError::EmptyNickname);
    }
    if dictionary.check(trimmed) {
        return Err(RegistrationError::ProfaneNickname);
    }

    Ok(UserProfile {
        id: Uuid::new_v4(),
        nickname: trimmed.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_a_trimmed_nickname() {
        let dict = ProfanityDictionary::build();
        let profile = register("  Juan  ", &dict).unwrap();
        assert_eq!(profile.nickname, "Juan");
    }

    #[test]
    fn generated_ids_are_unique() {
        let dict = ProfanityDictionary::build();
        let a = register("Juan", &dict).unwrap();
        let b = register("Juan", &dict).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn rejects_empty_nicknames() {
        let dict = ProfanityDictionary::build();
        assert_eq!(register("", &dict), Err(RegistrationError::EmptyNickname));
        assert_eq!(
            register("   ", &dict),
            Err(RegistrationError::EmptyNickname)
        );
    }

    #[test]
    fn rejects_profane_nicknames() {
        let dict = ProfanityDictionary::build();
        assert_eq!(
            register("g4go", &dict),
            Err(RegistrationError::ProfaneNickname)
        );
    }
}
