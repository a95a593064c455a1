//! Status Mapper — translates internal verification statuses into the
//! public-facing verdict shown to uploaders.

use serde::{Deserialize, Serialize};

use super::VerificationStatus;

/// Public verdict label. Deliberately softer than the internal vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublicVerdict {
    Fair,
    Pending,
    Unfair,
}

/// The public-facing status block returned to API consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicStatus {
    pub status: PublicVerdict,
    pub emoji: String,
    pub message: String,
}

impl PublicStatus {
    fn new(status: PublicVerdict, emoji: &str, message: &str) -> Self {
        Self {
            status,
            emoji: emoji.to_string(),
            message: message.to_string(),
        }
    }
}

/// Maps an internal verification status to its public counterpart.
pub fn map_to_public_status(status: VerificationStatus) -> PublicStatus {
    match status {
        VerificationStatus::Verified => {
            PublicStatus::new(PublicVerdict::Fair, "🟢", "Verified = Fair")
        }
        VerificationStatus::Biased => {
            PublicStatus::new(PublicVerdict::Unfair, "🔴", "Biased = Unfair")
        }
        VerificationStatus::UnderReview => {
            PublicStatus::new(PublicVerdict::Pending, "🟡", "Under Review = Pending")
        }
    }
}

/// Maps a stored status label. Unknown labels degrade to the pending status
/// rather than erroring, so stale records stay readable.
pub fn public_status_for_label(label: &str) -> PublicStatus {
    match label {
        "verified" => map_to_public_status(VerificationStatus::Verified),
        "biased" => map_to_public_status(VerificationStatus::Biased),
        _ => map_to_public_status(VerificationStatus::UnderReview),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_internal_status_has_a_distinct_public_verdict() {
        let fair = map_to_public_status(VerificationStatus::Verified);
        let pending = map_to_public_status(VerificationStatus::UnderReview);
        let unfair = map_to_public_status(VerificationStatus::Biased);

        assert_eq!(fair.status, PublicVerdict::Fair);
        assert_eq!(fair.message, "Verified = Fair");
        assert_eq!(pending.status, PublicVerdict::Pending);
        assert_eq!(pending.message, "Under Review = Pending");
        assert_eq!(unfair.status, PublicVerdict::Unfair);
        assert_eq!(unfair.message, "Biased = Unfair");
    }

    #[test]
    fn test_label_round_trips_through_internal_status() {
        for status in [
            VerificationStatus::Verified,
            VerificationStatus::UnderReview,
            VerificationStatus::Biased,
        ] {
            assert_eq!(
                public_status_for_label(status.label()),
                map_to_public_status(status)
            );
        }
    }

    #[test]
    fn test_unknown_label_defaults_to_pending() {
        assert_eq!(
            public_status_for_label("corrupted").status,
            PublicVerdict::Pending
        );
    }
}
