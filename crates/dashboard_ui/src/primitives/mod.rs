//! Shared styled primitives, navigation, and layout shells.

use std::str::FromStr;

use leptos::ev::MouseEvent;
use leptos::logging;
use leptos::*;
use thiserror::Error;

use crate::merge_classes;

mod controls;
mod data_display;
mod layout;
mod navigation;

pub use controls::{button_class, Button, ButtonSlot};
pub use data_display::{badge_class, skeleton_class, Badge, Skeleton};
pub use layout::{
    provide_shell_config, use_shell_config, AdminLayout, DashboardLayout, LayoutShell,
    ShellConfig, ShellKind,
};
pub use navigation::{nav_links, NavLink, NavSidebar};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Strict variant parsing failure.
pub enum VariantError {
    /// The token does not name any variant of `kind`.
    #[error("unknown {kind} variant `{token}`")]
    Unknown {
        /// Variant family, e.g. `badge`.
        kind: &'static str,
        /// Rejected token.
        token: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Badge style variants.
pub enum BadgeVariant {
    /// Primary filled badge.
    Default,
    /// Muted filled badge.
    Secondary,
    /// Destructive/error badge.
    Destructive,
    /// Bordered badge without fill.
    Outline,
}

impl Default for BadgeVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl BadgeVariant {
    /// Every badge variant, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Default,
        Self::Secondary,
        Self::Destructive,
        Self::Outline,
    ];

    pub(crate) const BASE: &'static str = "inline-flex items-center rounded-md border px-2.5 py-0.5 text-xs font-semibold transition-colors focus:outline-none focus:ring-2 focus:ring-ring focus:ring-offset-2";

    /// Stable DOM token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
        }
    }

    /// Variant-specific classes.
    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => {
                "border-transparent bg-primary text-primary-foreground shadow hover:bg-primary/80"
            }
            Self::Secondary => {
                "border-transparent bg-secondary text-secondary-foreground hover:bg-secondary/80"
            }
            Self::Destructive => {
                "border-transparent bg-destructive text-destructive-foreground shadow hover:bg-destructive/80"
            }
            Self::Outline => "text-foreground",
        }
    }

    /// Lenient parse; unknown tokens fall back to the default variant.
    pub fn from_token(token: &str) -> Self {
        lenient(token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Button style variants.
pub enum ButtonVariant {
    /// Primary filled action.
    Default,
    /// Destructive action.
    Destructive,
    /// Bordered action on the page background.
    Outline,
    /// Muted filled action.
    Secondary,
    /// Transparent action that fills on hover.
    Ghost,
    /// Text link styled action.
    Link,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl ButtonVariant {
    /// Every button variant, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Default,
        Self::Destructive,
        Self::Outline,
        Self::Secondary,
        Self::Ghost,
        Self::Link,
    ];

    pub(crate) const BASE: &'static str = "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium transition-colors focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring disabled:pointer-events-none disabled:opacity-50 [&_svg]:pointer-events-none [&_svg]:size-4 [&_svg]:shrink-0";

    /// Stable DOM token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
            Self::Link => "link",
        }
    }

    /// Variant-specific classes.
    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-primary text-primary-foreground shadow hover:bg-primary/90",
            Self::Destructive => {
                "bg-destructive text-destructive-foreground shadow-sm hover:bg-destructive/90"
            }
            Self::Outline => {
                "border border-input bg-background shadow-sm hover:bg-accent hover:text-accent-foreground"
            }
            Self::Secondary => {
                "bg-secondary text-secondary-foreground shadow-sm hover:bg-secondary/80"
            }
            Self::Ghost => "hover:bg-accent hover:text-accent-foreground",
            Self::Link => "text-primary underline-offset-4 hover:underline",
        }
    }

    /// Lenient parse; unknown tokens fall back to the default variant.
    pub fn from_token(token: &str) -> Self {
        lenient(token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Button sizing variants.
pub enum ButtonSize {
    /// Standard height and padding.
    Default,
    /// Dense button.
    Sm,
    /// Large button.
    Lg,
    /// Square icon-only button.
    Icon,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Default
    }
}

impl ButtonSize {
    /// Every button size, in declaration order.
    pub const ALL: [Self; 4] = [Self::Default, Self::Sm, Self::Lg, Self::Icon];

    /// Stable DOM token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Sm => "sm",
            Self::Lg => "lg",
            Self::Icon => "icon",
        }
    }

    /// Size-specific classes.
    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "h-9 px-4 py-2",
            Self::Sm => "h-8 rounded-md px-3 text-xs",
            Self::Lg => "h-10 rounded-md px-8",
            Self::Icon => "h-9 w-9",
        }
    }

    /// Lenient parse; unknown tokens fall back to the default size.
    pub fn from_token(token: &str) -> Self {
        lenient(token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Navigation sidebar variants.
pub enum SidebarVariant {
    /// Dashboard navigation.
    Default,
    /// Administration navigation.
    Admin,
}

impl Default for SidebarVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl SidebarVariant {
    /// Every sidebar variant, in declaration order.
    pub const ALL: [Self; 2] = [Self::Default, Self::Admin];

    /// Stable DOM token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Admin => "admin",
        }
    }

    /// Lenient parse; unknown tokens fall back to the default variant.
    pub fn from_token(token: &str) -> Self {
        lenient(token)
    }
}

/// Maps a family of token enums onto the shared parsing behavior.
trait VariantToken: Sized + Copy + Default + 'static {
    const KIND: &'static str;

    fn all() -> &'static [Self];

    fn token(self) -> &'static str;
}

macro_rules! impl_variant_token {
    ($($ty:ty => $kind:literal),* $(,)?) => {
        $(
            impl VariantToken for $ty {
                const KIND: &'static str = $kind;

                fn all() -> &'static [Self] {
                    &<$ty>::ALL
                }

                fn token(self) -> &'static str {
                    <$ty>::token(self)
                }
            }

            impl FromStr for $ty {
                type Err = VariantError;

                fn from_str(token: &str) -> Result<Self, Self::Err> {
                    strict(token)
                }
            }

            impl From<&str> for $ty {
                fn from(token: &str) -> Self {
                    <$ty>::from_token(token)
                }
            }

            impl From<String> for $ty {
                fn from(token: String) -> Self {
                    <$ty>::from_token(&token)
                }
            }
        )*
    };
}

impl_variant_token! {
    BadgeVariant => "badge",
    ButtonVariant => "button",
    ButtonSize => "button size",
    SidebarVariant => "sidebar",
}

fn strict<T: VariantToken>(token: &str) -> Result<T, VariantError> {
    let normalized = token.trim();
    T::all()
        .iter()
        .copied()
        .find(|variant| variant.token().eq_ignore_ascii_case(normalized))
        .ok_or_else(|| VariantError::Unknown {
            kind: T::KIND,
            token: token.to_string(),
        })
}

fn lenient<T: VariantToken>(token: &str) -> T {
    if token.trim().is_empty() {
        return T::default();
    }
    strict(token).unwrap_or_else(|err: VariantError| {
        logging::debug_warn!("{err}; using `{}` {} styling", T::default().token(), T::KIND);
        T::default()
    })
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(all(test, feature = "ssr"))]
pub(crate) fn render_html(view: impl FnOnce() -> View) -> String {
    let runtime = create_runtime();
    let html = view().render_to_string().to_string();
    runtime.dispose();
    html
}

/// Returns the opening tag of the first `<tag` element in `html`.
#[cfg(all(test, feature = "ssr"))]
pub(crate) fn opening_tag<'a>(html: &'a str, tag: &str) -> &'a str {
    let needle = format!("<{tag}");
    let start = html.find(&needle).unwrap_or_else(|| panic!("no <{tag}> in {html}"));
    let end = html[start..].find('>').map_or(html.len(), |offset| start + offset + 1);
    &html[start..end]
}
