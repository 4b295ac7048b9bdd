pub mod ssr;

pub mod helpers {
    use crate::types::SessionUser;

    pub fn member_user() -> SessionUser {
        SessionUser {
            id: "user-1".into(),
            email: Some("ada@example.com".into()),
            full_name: Some("Ada Lovelace".into()),
            avatar_url: None,
            role: Some("member".into()),
            last_sign_in_at: None,
        }
    }

    pub fn admin_user() -> SessionUser {
        SessionUser {
            id: "user-2".into(),
            email: Some("grace@example.com".into()),
            full_name: Some("Grace Hopper".into()),
            avatar_url: None,
            role: Some("admin".into()),
            last_sign_in_at: None,
        }
    }
}
