//! Meeting roles.
//!
//! Roles serialize as `snake_case`. Deserialization also accepts the tags
//! written by the first version of the roster app (`Microfono`, `Plataforma`,
//! `Acomodador`, ...), so old profile stores keep loading.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// A duty a person can be scheduled for at a meeting.
///
/// The declaration order is the order in which default generation fills the
/// slots of a meeting, and `Ord` follows it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[serde(alias = "Microfono", alias = "Micrófono", alias = "Microphone")]
    Microphone,
    #[serde(alias = "Audio")]
    Audio,
    #[serde(alias = "Video")]
    Video,
    #[serde(alias = "Plataforma", alias = "Platform")]
    Platform,
    #[serde(alias = "Acomodador", alias = "Usher")]
    Usher,
}

impl Role {
    /// Every role, in slot-filling order.
    pub const ALL: [Self; 5] = [
        Self::Microphone,
        Self::Audio,
        Self::Video,
        Self::Platform,
        Self::Usher,
    ];

    /// The role whose assignee is checked by the age-pairing rule.
    ///
    /// Only Audio and Video are paired; every other role returns `None`.
    #[must_use]
    pub const fn paired(self) -> Option<Self> {
        match self {
            Self::Audio => Some(Self::Video),
            Self::Video => Some(Self::Audio),
            Self::Microphone | Self::Platform | Self::Usher => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Microphone => "microphone",
            Self::Audio => "audio",
            Self::Video => "video",
            Self::Platform => "platform",
            Self::Usher => "usher",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    /// Case-insensitive; accepts the same legacy tags as deserialization.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "microphone" | "microfono" | "micrófono" | "mic" => Ok(Self::Microphone),
            "audio" => Ok(Self::Audio),
            "video" => Ok(Self::Video),
            "platform" | "plataforma" => Ok(Self::Platform),
            "usher" | "acomodador" => Ok(Self::Usher),
            other => Err(CoreError::Validation(format!(
                "unknown role '{other}' (expected one of: microphone, audio, video, platform, usher)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn all_is_in_declaration_order() {
        let mut sorted = Role::ALL;
        sorted.sort();
        assert_eq!(sorted, Role::ALL);
    }

    #[test]
    fn only_audio_and_video_are_paired() {
        assert_eq!(Role::Audio.paired(), Some(Role::Video));
        assert_eq!(Role::Video.paired(), Some(Role::Audio));
        assert_eq!(Role::Microphone.paired(), None);
        assert_eq!(Role::Platform.paired(), None);
        assert_eq!(Role::Usher.paired(), None);
    }

    #[rstest]
    #[case("\"Microfono\"", Role::Microphone)]
    #[case("\"Audio\"", Role::Audio)]
    #[case("\"Video\"", Role::Video)]
    #[case("\"Plataforma\"", Role::Platform)]
    #[case("\"Acomodador\"", Role::Usher)]
    #[case("\"usher\"", Role::Usher)]
    fn deserializes_legacy_and_current_tags(#[case] json: &str, #[case] expected: Role) {
        let role: Role = serde_json::from_str(json).unwrap();
        assert_eq!(role, expected);
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Role::Microphone).unwrap(),
            "\"microphone\""
        );
    }

    #[rstest]
    #[case("Microphone", Role::Microphone)]
    #[case(" plataforma ", Role::Platform)]
    #[case("USHER", Role::Usher)]
    fn parses_from_str(#[case] input: &str, #[case] expected: Role) {
        assert_eq!(input.parse::<Role>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_role() {
        let err = "drums".parse::<Role>().unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }
}
