//! Session entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::registrant::RegistrantId;

/// The single active session.
///
/// The service keeps at most one session at a time, mirroring the
/// one-browser-one-user model it stands in for. Logging in replaces any
/// previous session wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    registrant_id: RegistrantId,
    established_at: DateTime<Utc>,
}

impl Session {
    /// Establish a session for a registrant
    pub fn new(registrant_id: RegistrantId) -> Self {
        Self {
            registrant_id,
            established_at: Utc::now(),
        }
    }

    pub fn registrant_id(&self) -> &RegistrantId {
        &self.registrant_id
    }

    pub fn established_at(&self) -> DateTime<Utc> {
        self.established_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_round_trip() {
        let session = Session::new(RegistrantId::generate());

        let json = serde_json::to_string(&session).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, session);
    }
}
