//! Access predicates. Each is a pure (principal, resource) -> bool check;
//! handlers decide which combination gates an operation and map a denial
//! to `AppError::Forbidden`.

use crate::domain::models::auth::CurrentUser;
use crate::domain::models::user::Role;

pub fn is_business(user: &CurrentUser) -> bool {
    user.role == Role::Business
}

pub fn is_customer(user: &CurrentUser) -> bool {
    user.role == Role::Customer
}

pub fn is_owner(user: &CurrentUser, owner_id: &str) -> bool {
    user.id == owner_id
}

pub fn is_staff(user: &CurrentUser) -> bool {
    user.is_staff
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(role: Role, is_staff: bool) -> CurrentUser {
        CurrentUser {
            id: "user-1".to_string(),
            role,
            is_staff,
        }
    }

    #[test]
    fn role_gates_are_mutually_exclusive() {
        let business = principal(Role::Business, false);
        let customer = principal(Role::Customer, false);

        assert!(is_business(&business));
        assert!(!is_customer(&business));
        assert!(is_customer(&customer));
        assert!(!is_business(&customer));
    }

    #[test]
    fn ownership_matches_on_id_only() {
        let user = principal(Role::Business, false);
        assert!(is_owner(&user, "user-1"));
        assert!(!is_owner(&user, "user-2"));
    }

    #[test]
    fn staff_is_orthogonal_to_role() {
        assert!(is_staff(&principal(Role::Customer, true)));
        assert!(!is_staff(&principal(Role::Business, false)));
    }
}
