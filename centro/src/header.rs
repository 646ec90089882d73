//! Auth header projection: session state in, link nodes out.

use crate::session::SessionStore;

pub const LANDING_PAGE: &str = "/Pokemon.html";
pub const REGISTER_PAGE: &str = "/cadastro.html";
pub const LOGIN_PAGE: &str = "/login.html";

/// What the header shows, decided once per page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthView {
    LoggedIn { trainer_id: String },
    LoggedOut {
        register_active: bool,
        login_active: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    Logout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderNode {
    Label(String),
    Link {
        label: String,
        href: String,
        active: bool,
    },
    Action {
        label: String,
        action: HeaderAction,
    },
}

/// Pure read-then-render projection. A session change after this call is
/// only picked up on the next page load.
pub fn build_auth_view(session: Option<&str>, current_path: &str) -> AuthView {
    match session {
        Some(id) => AuthView::LoggedIn {
            trainer_id: id.to_string(),
        },
        None => AuthView::LoggedOut {
            register_active: current_path.contains("cadastro"),
            login_active: current_path.contains("login"),
        },
    }
}

pub fn build_header_nodes(view: &AuthView) -> Vec<HeaderNode> {
    match view {
        AuthView::LoggedIn { trainer_id } => vec![
            HeaderNode::Label(format!("ID: {trainer_id}")),
            HeaderNode::Action {
                label: "Sair".to_string(),
                action: HeaderAction::Logout,
            },
        ],
        AuthView::LoggedOut {
            register_active,
            login_active,
        } => vec![
            HeaderNode::Link {
                label: "Cadastro".to_string(),
                href: REGISTER_PAGE.to_string(),
                active: *register_active,
            },
            HeaderNode::Link {
                label: "Login".to_string(),
                href: LOGIN_PAGE.to_string(),
                active: *login_active,
            },
        ],
    }
}

/// Asks for confirmation first; declining leaves the stored identifier
/// untouched and skips navigation. A clear failure is logged and
/// navigation still proceeds, since the user asked to leave.
pub fn logout(
    store: &SessionStore,
    confirm: impl FnOnce() -> bool,
    navigate: impl FnOnce(&str),
) {
    if !confirm() {
        return;
    }
    if let Err(err) = store.clear() {
        log::warn!("failed to clear session: {err}");
    }
    navigate(LANDING_PAGE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_session_renders_id_label_and_logout_action() {
        let view = build_auth_view(Some("42"), "/Pokemon.html");
        let nodes = build_header_nodes(&view);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0], HeaderNode::Label("ID: 42".to_string()));
        assert_eq!(
            nodes[1],
            HeaderNode::Action {
                label: "Sair".to_string(),
                action: HeaderAction::Logout,
            }
        );
    }

    #[test]
    fn absent_session_renders_register_and_login_links() {
        let view = build_auth_view(None, "/Pokemon.html");
        let nodes = build_header_nodes(&view);
        assert_eq!(
            nodes,
            vec![
                HeaderNode::Link {
                    label: "Cadastro".to_string(),
                    href: REGISTER_PAGE.to_string(),
                    active: false,
                },
                HeaderNode::Link {
                    label: "Login".to_string(),
                    href: LOGIN_PAGE.to_string(),
                    active: false,
                },
            ]
        );
    }

    #[test]
    fn current_path_marks_the_matching_link_active() {
        let view = build_auth_view(None, "/login.html");
        assert_eq!(
            view,
            AuthView::LoggedOut {
                register_active: false,
                login_active: true,
            }
        );

        let view = build_auth_view(None, "/cadastro.html");
        assert_eq!(
            view,
            AuthView::LoggedOut {
                register_active: true,
                login_active: false,
            }
        );
    }
}
