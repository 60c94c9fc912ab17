use crate::profile::Role;

/// Route constants shared by the guard, the pipeline's expiry redirect, and
/// navigation consumers.
pub mod routes {
    pub const LOGIN: &str = "/";
    pub const ADMIN_DASHBOARD: &str = "/admin/dashboard";
    pub const MODERATOR_DASHBOARD: &str = "/moderator/dashboard";
    pub const USER_DASHBOARD: &str = "/user/dashboard";
}

/// Role → default landing route. This is the consumer-visible contract the
/// guard uses when a signed-in user hits a subtree outside their role.
pub fn dashboard_route(role: Role) -> &'static str {
    match role {
        Role::Admin => routes::ADMIN_DASHBOARD,
        Role::Moderator => routes::MODERATOR_DASHBOARD,
        Role::User => routes::USER_DASHBOARD,
    }
}

/// One sidebar capability: a stable id, a display label, and the route it
/// navigates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub route: &'static str,
}

/// Resolves the ordered capability list a role may see. Every list begins
/// with that role's dashboard entry.
pub fn nav_items(role: Role) -> Vec<NavItem> {
    let dashboard = NavItem {
        id: "dashboard",
        label: "Dashboard",
        route: dashboard_route(role),
    };

    match role {
        Role::Admin => vec![
            dashboard,
            NavItem {
                id: "users",
                label: "User Management",
                route: "/admin/users",
            },
            NavItem {
                id: "projects",
                label: "All Projects",
                route: "/admin/projects",
            },
            NavItem {
                id: "analytics",
                label: "System Analytics",
                route: "/admin/analytics",
            },
        ],
        Role::Moderator => vec![
            dashboard,
            NavItem {
                id: "projects",
                label: "My Projects",
                route: "/moderator/projects",
            },
            NavItem {
                id: "tasks",
                label: "Task Management",
                route: "/moderator/tasks",
            },
            NavItem {
                id: "analytics",
                label: "Project Analytics",
                route: "/moderator/analytics",
            },
        ],
        Role::User => vec![
            dashboard,
            NavItem {
                id: "tasks",
                label: "My Tasks",
                route: "/user/tasks",
            },
        ],
    }
}
