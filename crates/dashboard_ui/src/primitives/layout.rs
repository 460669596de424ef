use serde::{Deserialize, Serialize};

use super::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Shared layout-shell metrics.
///
/// `sidebar_width` and `content_offset` must describe the same length so the
/// content region starts where the fixed sidebar ends.
pub struct ShellConfig {
    /// Width class applied to the fixed sidebar.
    pub sidebar_width: String,
    /// Left-offset class applied to the content region.
    pub content_offset: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            sidebar_width: "w-64".to_string(),
            content_offset: "pl-64".to_string(),
        }
    }
}

/// Installs `config` for every shell rendered below the current owner.
pub fn provide_shell_config(config: ShellConfig) {
    provide_context(config);
}

/// Reads the nearest [`ShellConfig`], falling back to the defaults.
pub fn use_shell_config() -> ShellConfig {
    use_context::<ShellConfig>().unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Layout shells exposed by the crate.
pub enum ShellKind {
    /// Administration area.
    Admin,
    /// Main dashboard area.
    Dashboard,
}

impl ShellKind {
    /// Sidebar variant rendered by this shell.
    pub fn sidebar_variant(self) -> SidebarVariant {
        match self {
            Self::Admin => SidebarVariant::Admin,
            Self::Dashboard => SidebarVariant::Default,
        }
    }
}

pub(crate) fn content_class(config: &ShellConfig) -> String {
    merge_classes([Some("min-h-screen"), Some(config.content_offset.as_str())])
}

#[component]
/// Fixed sidebar plus a content region offset by the sidebar width.
pub fn LayoutShell(
    #[prop(optional, into)] sidebar: SidebarVariant,
    children: Children,
) -> impl IntoView {
    let config = use_shell_config();

    view! {
        <div
            class="min-h-screen bg-background"
            data-ui-primitive="true"
            data-ui-kind="layout-shell"
            data-ui-variant=sidebar.token()
        >
            <NavSidebar variant=sidebar />
            <main class=content_class(&config) data-ui-kind="layout-content">
                {children()}
            </main>
        </div>
    }
}

#[component]
/// Administration layout.
pub fn AdminLayout(children: Children) -> impl IntoView {
    view! {
        <LayoutShell sidebar=ShellKind::Admin.sidebar_variant()>
            {children()}
        </LayoutShell>
    }
}

#[component]
/// Dashboard layout.
pub fn DashboardLayout(children: Children) -> impl IntoView {
    view! {
        <LayoutShell sidebar=ShellKind::Dashboard.sidebar_variant()>
            {children()}
        </LayoutShell>
    }
}
