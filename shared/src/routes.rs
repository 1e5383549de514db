//! Top-level pages and their URL hash fragments.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    About,
    Contact,
    Privacy,
    Terms,
    Login,
    Register,
    Dashboard,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::Home,
        Page::About,
        Page::Contact,
        Page::Privacy,
        Page::Terms,
        Page::Login,
        Page::Register,
        Page::Dashboard,
    ];

    /// Pages linked from the marketing header
    pub const PUBLIC_NAV: [Page; 4] = [Page::Home, Page::About, Page::Contact, Page::Privacy];

    pub fn hash(&self) -> &'static str {
        match self {
            Page::Home => "#/",
            Page::About => "#/about",
            Page::Contact => "#/contact",
            Page::Privacy => "#/privacy",
            Page::Terms => "#/terms",
            Page::Login => "#/login",
            Page::Register => "#/register",
            Page::Dashboard => "#/dashboard",
        }
    }

    /// Parse `location.hash`; anything unrecognised lands on Home
    pub fn from_hash(hash: &str) -> Page {
        let path = hash.trim_start_matches('#').trim_start_matches('/');
        let path = path.split(['?', '/']).next().unwrap_or_default();
        match path {
            "about" => Page::About,
            "contact" => Page::Contact,
            "privacy" => Page::Privacy,
            "terms" => Page::Terms,
            "login" => Page::Login,
            "register" => Page::Register,
            "dashboard" => Page::Dashboard,
            _ => Page::Home,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Contact => "Contact",
            Page::Privacy => "Privacy",
            Page::Terms => "Terms",
            Page::Login => "Sign in",
            Page::Register => "Create account",
            Page::Dashboard => "Dashboard",
        }
    }

    pub fn requires_auth(&self) -> bool {
        matches!(self, Page::Dashboard)
    }

    /// Where to actually go when `self` is requested
    pub fn resolve(self, is_authenticated: bool) -> Page {
        match self {
            page if page.requires_auth() && !is_authenticated => Page::Login,
            Page::Login | Page::Register if is_authenticated => Page::Dashboard,
            page => page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_roundtrip() {
        for page in Page::ALL {
            assert_eq!(Page::from_hash(page.hash()), page);
        }
    }

    #[test]
    fn test_from_hash_lenient() {
        assert_eq!(Page::from_hash(""), Page::Home);
        assert_eq!(Page::from_hash("#"), Page::Home);
        assert_eq!(Page::from_hash("#/nowhere"), Page::Home);
        assert_eq!(Page::from_hash("#/about?ref=footer"), Page::About);
        assert_eq!(Page::from_hash("#/dashboard/wallets"), Page::Dashboard);
    }

    #[test]
    fn test_resolve_guards_dashboard() {
        assert_eq!(Page::Dashboard.resolve(false), Page::Login);
        assert_eq!(Page::Dashboard.resolve(true), Page::Dashboard);
        assert_eq!(Page::Login.resolve(true), Page::Dashboard);
        assert_eq!(Page::Register.resolve(false), Page::Register);
        assert_eq!(Page::Terms.resolve(false), Page::Terms);
    }
}
