//! Pages, `#!/view` fragments, landing redirects and navigation entries.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::entities::StoredCredentials;

const FRAGMENT_MARK: &str = "#!/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Root,
    Index,
    Dashboard,
    Admin,
}

impl Page {
    pub fn file(&self) -> &'static str {
        match self {
            Page::Root => "/",
            Page::Index => "index.html",
            Page::Dashboard => "dashboard.html",
            Page::Admin => "admin.html",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub page: Page,
    pub view: Option<String>,
}

impl Route {
    pub fn new(page: Page, view: Option<&str>) -> Self {
        Self {
            page,
            view: view.filter(|v| !v.is_empty()).map(str::to_string),
        }
    }

    pub fn login() -> Self {
        Self::new(Page::Index, None)
    }

    pub fn dashboard() -> Self {
        Self::new(Page::Dashboard, Some("all_jobs"))
    }

    pub fn admin() -> Self {
        Self::new(Page::Admin, Some("get_services"))
    }

    pub fn view(&self) -> Option<&str> {
        self.view.as_deref()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.page.file())?;
        if let Some(view) = &self.view {
            write!(f, "{FRAGMENT_MARK}{view}")?;
        }
        Ok(())
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (path, view) = match s.split_once('#') {
            Some((path, fragment)) => {
                let view = fragment.trim_start_matches('!').trim_start_matches('/');
                (path, view.split('/').next())
            }
            None => (s, None),
        };

        let page = match path.trim_start_matches('/') {
            "" => Page::Root,
            "index.html" => Page::Index,
            "dashboard.html" => Page::Dashboard,
            "admin.html" => Page::Admin,
            other => return Err(format!("unknown page: {other}")),
        };
        Ok(Route::new(page, view))
    }
}

/// Where `/` sends a visitor, by stored role.
pub fn landing_route(credentials: Option<&StoredCredentials>) -> Route {
    match credentials {
        Some(c) if c.is_admin => Route::admin(),
        Some(_) => Route::dashboard(),
        None => Route::login(),
    }
}

/// `Ok` when `page` may be shown for these credentials, otherwise the
/// route to redirect to.
pub fn guard(page: Page, credentials: Option<&StoredCredentials>) -> Result<(), Route> {
    let allowed = match page {
        Page::Root => false,
        Page::Index => true,
        Page::Dashboard => credentials.is_some_and(|c| !c.is_admin),
        Page::Admin => credentials.is_some_and(|c| c.is_admin),
    };
    if allowed {
        Ok(())
    } else {
        Err(landing_route(credentials))
    }
}

/// One clickable entry of a leftbar, header or account menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub name: &'static str,
    pub icon: &'static str,
}

pub const DASHBOARD_LEFTBAR: &[NavEntry] = &[
    NavEntry {
        name: "all_jobs",
        icon: "fas fa-list-ol",
    },
    NavEntry {
        name: "create_job",
        icon: "fas fa-plus",
    },
];

pub const ADMIN_LEFTBAR: &[NavEntry] = &[
    NavEntry {
        name: "register_user",
        icon: "fas fa-user-plus",
    },
    NavEntry {
        name: "create_service",
        icon: "fas fa-plus",
    },
    NavEntry {
        name: "get_services",
        icon: "fas fa-list-ol",
    },
];

pub const HEADER_ENTRIES: &[NavEntry] = &[NavEntry {
    name: "dashboard",
    icon: "",
}];

pub const ACCOUNT_MENU: &[NavEntry] = &[
    NavEntry {
        name: "change_password",
        icon: "fas fa-redo",
    },
    NavEntry {
        name: "logout",
        icon: "fas fa-sign-out-alt",
    },
];

/// Active flag per entry: exactly the entry named by `view`, if any.
pub fn active_entries(entries: &[NavEntry], view: Option<&str>) -> BTreeMap<String, bool> {
    entries
        .iter()
        .map(|e| (e.name.to_string(), Some(e.name) == view))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(is_admin: bool) -> StoredCredentials {
        StoredCredentials {
            token: "t".to_string(),
            is_admin,
        }
    }

    #[test]
    fn test_parse_and_display() {
        let route: Route = "/dashboard.html#!/all_jobs".parse().unwrap();
        assert_eq!(route.page, Page::Dashboard);
        assert_eq!(route.view(), Some("all_jobs"));
        assert_eq!(route.to_string(), "dashboard.html#!/all_jobs");

        let root: Route = "/".parse().unwrap();
        assert_eq!(root.page, Page::Root);
        assert_eq!(root.view(), None);

        assert_eq!("index.html".parse::<Route>().unwrap(), Route::login());
        assert!("other.html".parse::<Route>().is_err());
    }

    #[test]
    fn test_landing_route_by_role() {
        assert_eq!(
            landing_route(Some(&creds(true))).to_string(),
            "admin.html#!/get_services"
        );
        assert_eq!(
            landing_route(Some(&creds(false))).to_string(),
            "dashboard.html#!/all_jobs"
        );
        assert_eq!(landing_route(None).to_string(), "index.html");
    }

    #[test]
    fn test_guards() {
        assert!(guard(Page::Dashboard, Some(&creds(false))).is_ok());
        assert_eq!(guard(Page::Dashboard, None), Err(Route::login()));
        assert_eq!(guard(Page::Dashboard, Some(&creds(true))), Err(Route::admin()));
        assert_eq!(guard(Page::Admin, Some(&creds(false))), Err(Route::dashboard()));
        assert!(guard(Page::Index, None).is_ok());
        assert_eq!(guard(Page::Root, Some(&creds(true))), Err(Route::admin()));
    }

    #[test]
    fn test_active_entries() {
        let active = active_entries(DASHBOARD_LEFTBAR, Some("create_job"));
        assert_eq!(active["create_job"], true);
        assert_eq!(active["all_jobs"], false);

        let none = active_entries(ADMIN_LEFTBAR, None);
        assert!(none.values().all(|a| !a));
    }
}
