/**
 * Mock Sessions
 *
 * There are no sessions. Every login receives `MOCK_TOKEN`, and every caller
 * of `/api/auth/me` is told it is `MOCK_IDENTITY`, token or not.
 */

use crate::shared::blog::{EntityId, Role, MOCK_USER_ID};

/// Token returned by every login
pub const MOCK_TOKEN: &str = "fake-jwt-token-123";

/// Identity reported by `/api/auth/me`
pub const MOCK_IDENTITY: (EntityId, Role) = (MOCK_USER_ID, Role::Admin);

/// Issue a token. Always the same one.
pub fn create_token() -> String {
    MOCK_TOKEN.to_string()
}
