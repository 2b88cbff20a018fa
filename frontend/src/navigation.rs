/// Pages hosted outside this single-page app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExternalRoute {
    SignIn,
    SignUp,
    Generate,
}

impl ExternalRoute {
    pub fn path(self) -> &'static str {
        match self {
            ExternalRoute::SignIn => "/sign-in",
            ExternalRoute::SignUp => "/sign-up",
            ExternalRoute::Generate => "/generate",
        }
    }
}

/// Full-page navigation to `route`.
pub fn navigate(route: ExternalRoute) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(route.path()) {
            log::debug!("Navigation to {} failed: {:?}", route.path(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_map_to_static_paths() {
        assert_eq!(ExternalRoute::SignIn.path(), "/sign-in");
        assert_eq!(ExternalRoute::SignUp.path(), "/sign-up");
        assert_eq!(ExternalRoute::Generate.path(), "/generate");
    }
}
