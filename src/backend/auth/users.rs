/**
 * Account Creation
 *
 * Registered users all share the username `user` and the `author` role.
 * Emails are not checked for duplicates.
 */

use crate::backend::store::BlogStore;
use crate::shared::blog::{EntityId, Role, User};

/// Username given to every registered account
pub const DEFAULT_USERNAME: &str = "user";

/// Role given to every registered account
pub const DEFAULT_ROLE: Role = Role::Author;

/// Append a new account and return its id.
///
/// SECURITY: `password` is stored verbatim.
pub fn create_user(store: &mut BlogStore, email: String, password: String) -> EntityId {
    store.users.insert(User {
        id: 0,
        username: DEFAULT_USERNAME.to_string(),
        email,
        password,
        role: DEFAULT_ROLE,
        bio: String::new(),
    })
}
