use super::*;

const SKELETON_BASE: &str = "animate-pulse rounded-md bg-muted";

/// Merges the badge base and variant classes with caller overrides.
pub fn badge_class(variant: BadgeVariant, class: Option<&str>) -> String {
    merge_classes([Some(BadgeVariant::BASE), Some(variant.classes()), class])
}

/// Merges the skeleton base classes with caller overrides.
pub fn skeleton_class(class: Option<&str>) -> String {
    merge_classes([Some(SKELETON_BASE), class])
}

#[component]
/// Inline status badge.
pub fn Badge(
    #[prop(optional, into)] variant: BadgeVariant,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=badge_class(variant, class.as_deref())
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-variant=variant.token()
            {..attrs}
        >
            {children()}
        </span>
    }
}

#[component]
/// Loading placeholder block. Size it through `class`.
pub fn Skeleton(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    view! {
        <div
            class=skeleton_class(class.as_deref())
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="skeleton"
            {..attrs}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens(class: &str) -> Vec<&str> {
        class.split_whitespace().collect()
    }

    #[test]
    fn every_badge_variant_keeps_base_and_variant_classes() {
        for variant in BadgeVariant::ALL {
            let class = badge_class(variant, None);
            let class = tokens(&class);
            for expected in BadgeVariant::BASE
                .split_whitespace()
                .chain(variant.classes().split_whitespace())
            {
                assert!(class.contains(&expected), "{variant:?} lost {expected}");
            }
        }
    }

    #[test]
    fn unknown_badge_variant_matches_default_output() {
        assert_eq!(
            badge_class(BadgeVariant::from("glitter"), None),
            badge_class(BadgeVariant::Default, None)
        );
        assert_eq!(
            badge_class(BadgeVariant::from(""), None),
            badge_class(BadgeVariant::default(), None)
        );
    }

    #[test]
    fn badge_overrides_replace_conflicting_classes() {
        let class = badge_class(BadgeVariant::Secondary, Some("bg-amber-100 px-3 rounded-full"));
        let class = tokens(&class);
        assert!(class.contains(&"bg-amber-100"));
        assert!(class.contains(&"px-3"));
        assert!(class.contains(&"rounded-full"));
        assert!(!class.contains(&"bg-secondary"));
        assert!(!class.contains(&"px-2.5"));
        assert!(!class.contains(&"rounded-md"));
        assert!(class.contains(&"text-secondary-foreground"));
    }

    #[test]
    fn outline_badge_has_no_fill() {
        let class = badge_class(BadgeVariant::Outline, None);
        assert!(!class.contains("bg-"));
        assert!(tokens(&class).contains(&"text-foreground"));
    }

    #[test]
    fn skeleton_merges_overrides() {
        assert_eq!(skeleton_class(None), "animate-pulse rounded-md bg-muted");
        assert_eq!(
            skeleton_class(Some("h-4 w-[250px] rounded-full")),
            "animate-pulse bg-muted h-4 w-[250px] rounded-full"
        );
        assert_eq!(skeleton_class(Some("")), skeleton_class(None));
    }
}
