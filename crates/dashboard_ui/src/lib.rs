//! Shared UI primitive library for the dashboard and admin areas.
//!
//! The crate owns the styled Leptos primitives (`Badge`, `Button`,
//! `Skeleton`), the variant lookup tables behind them, the utility-class merge
//! used to combine base, variant, and caller classes, and the layout shells
//! that pair a fixed navigation sidebar with an offset content region. Rendered
//! elements carry the stable `data-ui-*` DOM contract.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod class_merge;
mod primitives;

pub use class_merge::{merge_classes, AsClass};
pub use primitives::{
    badge_class, button_class, nav_links, provide_shell_config, skeleton_class,
    use_shell_config, AdminLayout, Badge, BadgeVariant, Button, ButtonSize, ButtonSlot,
    ButtonVariant, DashboardLayout, LayoutShell, NavLink, NavSidebar, ShellConfig, ShellKind,
    SidebarVariant, Skeleton, VariantError,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        cn, AdminLayout, Badge, BadgeVariant, Button, ButtonSize, ButtonSlot, ButtonVariant,
        DashboardLayout, LayoutShell, NavSidebar, ShellConfig, SidebarVariant, Skeleton,
    };
}
