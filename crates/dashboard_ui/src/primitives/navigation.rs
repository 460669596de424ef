use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One sidebar navigation entry.
pub struct NavLink {
    /// Visible label.
    pub label: &'static str,
    /// Target path.
    pub href: &'static str,
}

const DASHBOARD_LINKS: &[NavLink] = &[
    NavLink {
        label: "Overview",
        href: "/dashboard",
    },
    NavLink {
        label: "Analytics",
        href: "/dashboard/analytics",
    },
    NavLink {
        label: "Reports",
        href: "/dashboard/reports",
    },
    NavLink {
        label: "Settings",
        href: "/dashboard/settings",
    },
];

const ADMIN_LINKS: &[NavLink] = &[
    NavLink {
        label: "Admin Home",
        href: "/admin",
    },
    NavLink {
        label: "Users",
        href: "/admin/users",
    },
    NavLink {
        label: "Roles",
        href: "/admin/roles",
    },
    NavLink {
        label: "Audit Log",
        href: "/admin/audit",
    },
    NavLink {
        label: "Back to Dashboard",
        href: "/dashboard",
    },
];

/// Links rendered by the sidebar for `variant`.
pub fn nav_links(variant: SidebarVariant) -> &'static [NavLink] {
    match variant {
        SidebarVariant::Default => DASHBOARD_LINKS,
        SidebarVariant::Admin => ADMIN_LINKS,
    }
}

pub(crate) fn sidebar_class(config: &ShellConfig) -> String {
    merge_classes([
        Some("fixed inset-y-0 left-0 z-30 flex h-screen flex-col gap-1 border-r bg-background p-4"),
        Some(config.sidebar_width.as_str()),
    ])
}

#[component]
/// Fixed navigation sidebar.
pub fn NavSidebar(#[prop(optional, into)] variant: SidebarVariant) -> impl IntoView {
    let config = use_shell_config();
    let aria_label = match variant {
        SidebarVariant::Default => "Dashboard navigation",
        SidebarVariant::Admin => "Admin navigation",
    };

    view! {
        <nav
            class=sidebar_class(&config)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="sidebar"
            data-ui-variant=variant.token()
        >
            {nav_links(variant)
                .iter()
                .map(|link| {
                    view! {
                        <a
                            href=link.href
                            class="rounded-md px-3 py-2 text-sm font-medium hover:bg-accent hover:text-accent-foreground"
                            data-ui-kind="sidebar-link"
                        >
                            {link.label}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}
