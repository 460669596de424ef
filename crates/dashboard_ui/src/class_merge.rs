//! Utility-class merging with conflict resolution.
//!
//! Class strings are merged left to right. When a later utility sets the same
//! CSS property as an earlier one (same modifiers, same importance), the earlier
//! utility is dropped. Shorthands also drop their longhands, so `p-4` removes an
//! earlier `px-2`. Class names that are not recognized as utilities are kept
//! verbatim and only deduplicated.

/// Anything that can contribute a class string to [`merge_classes`].
pub trait AsClass {
    /// Returns the class string, or `None` when there is nothing to contribute.
    fn as_class(&self) -> Option<&str>;
}

impl AsClass for str {
    fn as_class(&self) -> Option<&str> {
        Some(self)
    }
}

impl AsClass for String {
    fn as_class(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: AsClass> AsClass for Option<T> {
    fn as_class(&self) -> Option<&str> {
        self.as_ref().and_then(AsClass::as_class)
    }
}

impl<T: AsClass + ?Sized> AsClass for &T {
    fn as_class(&self) -> Option<&str> {
        (**self).as_class()
    }
}

/// Merges any mix of `&str`, `String`, and `Option<_>` class arguments.
///
/// ```
/// use dashboard_ui::cn;
///
/// let extra: Option<&str> = Some("px-6");
/// assert_eq!(cn!("px-2 py-1", extra), "py-1 px-6");
/// ```
#[macro_export]
macro_rules! cn {
    ($($class:expr),* $(,)?) => {
        $crate::merge_classes([$($crate::AsClass::as_class(&$class)),*])
    };
}

/// Merges class strings, letting later conflicting utilities win.
pub fn merge_classes<'a, I>(inputs: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut kept: Vec<(&'a str, Option<ConflictKey<'a>>)> = Vec::new();

    for token in inputs
        .into_iter()
        .flatten()
        .flat_map(str::split_whitespace)
    {
        let key = ConflictKey::parse(token);
        kept.retain(|(earlier, earlier_key)| match (&key, earlier_key) {
            (Some(key), Some(earlier_key)) => !key.overrides(earlier_key),
            _ => *earlier != token,
        });
        kept.push((token, key));
    }

    kept.iter()
        .map(|(token, _)| *token)
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ConflictKey<'a> {
    modifiers: Vec<&'a str>,
    important: bool,
    group: &'static str,
}

impl<'a> ConflictKey<'a> {
    fn parse(token: &'a str) -> Option<Self> {
        let (modifiers, utility) = split_modifiers(token);
        let (utility, important) = strip_important(utility);
        let utility = utility.strip_prefix('-').unwrap_or(utility);
        utility_group(utility).map(|group| Self {
            modifiers: normalize_modifiers(modifiers),
            important,
            group,
        })
    }

    fn overrides(&self, earlier: &Self) -> bool {
        self.modifiers == earlier.modifiers
            && self.important == earlier.important
            && (self.group == earlier.group || longhands(self.group).contains(&earlier.group))
    }
}

/// Orders modifiers so `hover:md:` and `md:hover:` compare equal. Arbitrary
/// `[...]` variants depend on their position and stay where they are; only the
/// runs between them are sorted.
fn normalize_modifiers(modifiers: &str) -> Vec<&str> {
    let mut normalized = Vec::new();
    let mut run: Vec<&str> = Vec::new();
    for modifier in split_outside_brackets(modifiers) {
        if modifier.starts_with('[') {
            run.sort_unstable();
            normalized.append(&mut run);
            normalized.push(modifier);
        } else {
            run.push(modifier);
        }
    }
    run.sort_unstable();
    normalized.append(&mut run);
    normalized
}

fn split_outside_brackets(modifiers: &str) -> Vec<&str> {
    if modifiers.is_empty() {
        return Vec::new();
    }
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (index, ch) in modifiers.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                parts.push(&modifiers[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    parts.push(&modifiers[start..]);
    parts
}

/// Splits `hover:md:bg-x` into (`hover:md`, `bg-x`), ignoring colons inside
/// arbitrary `[...]` segments.
fn split_modifiers(token: &str) -> (&str, &str) {
    let mut depth = 0usize;
    let mut split_at = None;
    for (index, ch) in token.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => split_at = Some(index),
            _ => {}
        }
    }
    match split_at {
        Some(index) => (&token[..index], &token[index + 1..]),
        None => ("", token),
    }
}

fn strip_important(utility: &str) -> (&str, bool) {
    if let Some(rest) = utility.strip_prefix('!') {
        (rest, true)
    } else if let Some(rest) = utility.strip_suffix('!') {
        (rest, true)
    } else {
        (utility, false)
    }
}

const KEYWORD_GROUPS: &[(&str, &str)] = &[
    ("block", "display"),
    ("inline-block", "display"),
    ("inline", "display"),
    ("flex", "display"),
    ("inline-flex", "display"),
    ("grid", "display"),
    ("inline-grid", "display"),
    ("table", "display"),
    ("contents", "display"),
    ("flow-root", "display"),
    ("list-item", "display"),
    ("hidden", "display"),
    ("static", "position"),
    ("fixed", "position"),
    ("absolute", "position"),
    ("relative", "position"),
    ("sticky", "position"),
    ("visible", "visibility"),
    ("invisible", "visibility"),
    ("collapse", "visibility"),
    ("sr-only", "screen-reader"),
    ("not-sr-only", "screen-reader"),
    ("italic", "font-style"),
    ("not-italic", "font-style"),
    ("uppercase", "text-transform"),
    ("lowercase", "text-transform"),
    ("capitalize", "text-transform"),
    ("normal-case", "text-transform"),
    ("underline", "text-decoration"),
    ("overline", "text-decoration"),
    ("line-through", "text-decoration"),
    ("no-underline", "text-decoration"),
    ("truncate", "text-overflow"),
    ("text-ellipsis", "text-overflow"),
    ("text-clip", "text-overflow"),
    ("grow", "flex-grow"),
    ("shrink", "flex-shrink"),
    ("transition", "transition"),
    ("border", "border-w"),
    ("rounded", "rounded"),
    ("shadow", "shadow"),
    ("ring", "ring-w"),
    ("ring-inset", "ring-inset"),
    ("outline", "outline-style"),
    ("outline-none", "outline-style"),
    ("outline-dashed", "outline-style"),
    ("outline-dotted", "outline-style"),
    ("outline-double", "outline-style"),
];

// Longer prefixes first: `gap-x` must win over `gap`.
const PREFIX_GROUPS: &[(&str, &str)] = &[
    ("px", "px"),
    ("py", "py"),
    ("pt", "pt"),
    ("pr", "pr"),
    ("pb", "pb"),
    ("pl", "pl"),
    ("ps", "ps"),
    ("pe", "pe"),
    ("p", "p"),
    ("mx", "mx"),
    ("my", "my"),
    ("mt", "mt"),
    ("mr", "mr"),
    ("mb", "mb"),
    ("ml", "ml"),
    ("ms", "ms"),
    ("me", "me"),
    ("m", "m"),
    ("space-x", "space-x"),
    ("space-y", "space-y"),
    ("gap-x", "gap-x"),
    ("gap-y", "gap-y"),
    ("gap", "gap"),
    ("inset-x", "inset-x"),
    ("inset-y", "inset-y"),
    ("inset", "inset"),
    ("top", "top"),
    ("right", "right"),
    ("bottom", "bottom"),
    ("left", "left"),
    ("min-w", "min-w"),
    ("min-h", "min-h"),
    ("max-w", "max-w"),
    ("max-h", "max-h"),
    ("size", "size"),
    ("w", "w"),
    ("h", "h"),
    ("z", "z"),
    ("opacity", "opacity"),
    ("leading", "leading"),
    ("tracking", "tracking"),
    ("items", "align-items"),
    ("justify-items", "justify-items"),
    ("justify-self", "justify-self"),
    ("justify", "justify-content"),
    ("self", "align-self"),
    ("place-items", "place-items"),
    ("cursor", "cursor"),
    ("pointer-events", "pointer-events"),
    ("select", "user-select"),
    ("whitespace", "whitespace"),
    ("break", "word-break"),
    ("overflow-x", "overflow-x"),
    ("overflow-y", "overflow-y"),
    ("overflow", "overflow"),
    ("animate", "animate"),
    ("transition", "transition"),
    ("duration", "duration"),
    ("ease", "ease"),
    ("delay", "delay"),
    ("fill", "fill"),
    ("stroke", "stroke"),
    ("underline-offset", "underline-offset"),
    ("decoration", "decoration-color"),
    ("order", "order"),
    ("basis", "flex-basis"),
    ("grow", "flex-grow"),
    ("shrink", "flex-shrink"),
    ("col-span", "col-span"),
    ("row-span", "row-span"),
    ("grid-cols", "grid-cols"),
    ("grid-rows", "grid-rows"),
    ("aspect", "aspect"),
    ("object", "object-fit"),
];

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGNS: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const TEXT_WRAPS: &[&str] = &["wrap", "nowrap", "balance", "pretty"];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const SHADOW_SIZES: &[&str] = &["sm", "md", "lg", "xl", "2xl", "inner", "none"];

fn utility_group(utility: &str) -> Option<&'static str> {
    if let Some((_, group)) = KEYWORD_GROUPS.iter().find(|(name, _)| *name == utility) {
        return Some(group);
    }

    if let Some(value) = utility.strip_prefix("text-") {
        return Some(if FONT_SIZES.contains(&value) || is_arbitrary_length(value) {
            "font-size"
        } else if TEXT_ALIGNS.contains(&value) {
            "text-align"
        } else if TEXT_WRAPS.contains(&value) {
            "text-wrap"
        } else if value.starts_with("opacity-") {
            "text-opacity"
        } else {
            "text-color"
        });
    }
    if let Some(value) = utility.strip_prefix("font-") {
        return Some(if FONT_WEIGHTS.contains(&value) {
            "font-weight"
        } else {
            "font-family"
        });
    }
    if let Some(value) = utility.strip_prefix("flex-") {
        return Some(match value {
            "row" | "row-reverse" | "col" | "col-reverse" => "flex-direction",
            "wrap" | "wrap-reverse" | "nowrap" => "flex-wrap",
            _ => "flex",
        });
    }
    if let Some(value) = utility.strip_prefix("bg-") {
        return Some(background_group(value));
    }
    if let Some(value) = utility.strip_prefix("border-") {
        return Some(border_group(value));
    }
    if let Some(value) = utility.strip_prefix("rounded-") {
        return Some(rounded_group(value));
    }
    if let Some(value) = utility.strip_prefix("shadow-") {
        return Some(if SHADOW_SIZES.contains(&value) {
            "shadow"
        } else {
            "shadow-color"
        });
    }
    if let Some(value) = utility.strip_prefix("ring-offset-") {
        return Some(if is_width(value) {
            "ring-offset-w"
        } else {
            "ring-offset-color"
        });
    }
    if let Some(value) = utility.strip_prefix("ring-") {
        return Some(if is_width(value) { "ring-w" } else { "ring-color" });
    }
    if utility.starts_with("outline-offset-") {
        return Some("outline-offset");
    }
    if let Some(value) = utility.strip_prefix("outline-") {
        return Some(if is_width(value) {
            "outline-w"
        } else {
            "outline-color"
        });
    }

    PREFIX_GROUPS.iter().find_map(|(prefix, group)| {
        let matches = utility
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('-') && rest.len() > 1);
        matches.then_some(*group)
    })
}

fn background_group(value: &str) -> &'static str {
    match value {
        "auto" | "cover" | "contain" => "bg-size",
        "fixed" | "local" | "scroll" => "bg-attachment",
        "repeat" | "no-repeat" | "repeat-x" | "repeat-y" | "repeat-round" | "repeat-space" => {
            "bg-repeat"
        }
        "bottom" | "center" | "left" | "left-bottom" | "left-top" | "right" | "right-bottom"
        | "right-top" | "top" => "bg-position",
        "none" => "bg-image",
        _ if value.starts_with("clip-") => "bg-clip",
        _ if value.starts_with("origin-") => "bg-origin",
        _ if value.starts_with("opacity-") => "bg-opacity",
        _ if value.starts_with("blend-") => "bg-blend",
        _ if value.starts_with("gradient-")
            || value.starts_with("[url(")
            || value.starts_with("[image:")
            || value.starts_with("[linear-gradient(")
            || value.starts_with("[radial-gradient(") =>
        {
            "bg-image"
        }
        _ if value.starts_with("[length:")
            || value.starts_with("[size:") =>
        {
            "bg-size"
        }
        _ if value.starts_with("[position:") => "bg-position",
        _ => "bg-color",
    }
}

fn border_group(value: &str) -> &'static str {
    if BORDER_STYLES.contains(&value) {
        return "border-style";
    }
    match value {
        "collapse" | "separate" => return "border-collapse",
        _ if value.starts_with("spacing") => return "border-spacing",
        _ if value.starts_with("opacity-") => return "border-opacity",
        _ => {}
    }
    if is_width(value) {
        return "border-w";
    }
    let (side, rest) = match value.split_once('-') {
        Some((side, rest)) => (side, Some(rest)),
        None => (value, None),
    };
    let side_group = match side {
        "x" => Some(("border-w-x", "border-color-x")),
        "y" => Some(("border-w-y", "border-color-y")),
        "t" => Some(("border-w-t", "border-color-t")),
        "r" => Some(("border-w-r", "border-color-r")),
        "b" => Some(("border-w-b", "border-color-b")),
        "l" => Some(("border-w-l", "border-color-l")),
        "s" => Some(("border-w-s", "border-color-s")),
        "e" => Some(("border-w-e", "border-color-e")),
        _ => None,
    };
    match (side_group, rest) {
        (Some((width, _)), None) => width,
        (Some((width, _)), Some(rest)) if is_width(rest) => width,
        (Some((_, color)), Some(_)) => color,
        (None, _) => "border-color",
    }
}

fn rounded_group(value: &str) -> &'static str {
    let side = value.split_once('-').map_or(value, |(side, _)| side);
    match side {
        "t" => "rounded-t",
        "r" => "rounded-r",
        "b" => "rounded-b",
        "l" => "rounded-l",
        "s" => "rounded-s",
        "e" => "rounded-e",
        "tl" => "rounded-tl",
        "tr" => "rounded-tr",
        "br" => "rounded-br",
        "bl" => "rounded-bl",
        "ss" => "rounded-ss",
        "se" => "rounded-se",
        "es" => "rounded-es",
        "ee" => "rounded-ee",
        _ => "rounded",
    }
}

fn is_width(value: &str) -> bool {
    (!value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit())) || is_arbitrary_length(value)
}

fn is_arbitrary_length(value: &str) -> bool {
    value
        .strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
        .is_some_and(|inner| {
            inner.starts_with("length:")
                || ["px", "rem", "em", "%", "vh", "vw"]
                    .iter()
                    .any(|unit| inner.ends_with(unit))
        })
}

/// Groups a shorthand utility clears in addition to its own.
fn longhands(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "pt", "pr", "pb", "pl", "ps", "pe"],
        "px" => &["pl", "pr", "ps", "pe"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "mt", "mr", "mb", "ml", "ms", "me"],
        "mx" => &["ml", "mr", "ms", "me"],
        "my" => &["mt", "mb"],
        "gap" => &["gap-x", "gap-y"],
        "inset" => &["inset-x", "inset-y", "top", "right", "bottom", "left"],
        "inset-x" => &["left", "right"],
        "inset-y" => &["top", "bottom"],
        "size" => &["w", "h"],
        "overflow" => &["overflow-x", "overflow-y"],
        "rounded" => &[
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-s",
            "rounded-e",
            "rounded-tl",
            "rounded-tr",
            "rounded-br",
            "rounded-bl",
            "rounded-ss",
            "rounded-se",
            "rounded-es",
            "rounded-ee",
        ],
        "rounded-t" => &["rounded-tl", "rounded-tr"],
        "rounded-r" => &["rounded-tr", "rounded-br"],
        "rounded-b" => &["rounded-br", "rounded-bl"],
        "rounded-l" => &["rounded-tl", "rounded-bl"],
        "border-w" => &[
            "border-w-x",
            "border-w-y",
            "border-w-t",
            "border-w-r",
            "border-w-b",
            "border-w-l",
            "border-w-s",
            "border-w-e",
        ],
        "border-w-x" => &["border-w-l", "border-w-r"],
        "border-w-y" => &["border-w-t", "border-w-b"],
        "border-color" => &[
            "border-color-x",
            "border-color-y",
            "border-color-t",
            "border-color-r",
            "border-color-b",
            "border-color-l",
            "border-color-s",
            "border-color-e",
        ],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn merge(inputs: &[&str]) -> String {
        merge_classes(inputs.iter().copied().map(Some))
    }

    #[test]
    fn later_utility_replaces_earlier_in_same_group() {
        assert_eq!(merge(&["px-2 py-1 bg-red-500", "bg-blue-500"]), "px-2 py-1 bg-blue-500");
        assert_eq!(merge(&["h-9", "h-10"]), "h-10");
    }

    #[test]
    fn shorthand_clears_longhands_but_not_the_reverse() {
        assert_eq!(merge(&["px-2 pt-1", "p-4"]), "p-4");
        assert_eq!(merge(&["p-4", "px-2"]), "p-4 px-2");
        assert_eq!(merge(&["w-4 h-4", "size-6"]), "size-6");
        assert_eq!(merge(&["rounded-t-lg", "rounded-md"]), "rounded-md");
    }

    #[test]
    fn modifiers_and_importance_scope_conflicts() {
        assert_eq!(
            merge(&["bg-primary hover:bg-primary/90", "bg-secondary"]),
            "hover:bg-primary/90 bg-secondary"
        );
        assert_eq!(merge(&["hover:bg-a", "hover:bg-b"]), "hover:bg-b");
        assert_eq!(merge(&["!p-2", "p-4"]), "!p-2 p-4");
        assert_eq!(
            merge(&["[&_svg]:size-4", "[&_svg]:size-5"]),
            "[&_svg]:size-5"
        );
    }

    #[test]
    fn text_splits_size_alignment_and_color() {
        assert_eq!(
            merge(&["text-sm text-left text-primary-foreground", "text-xs"]),
            "text-left text-primary-foreground text-xs"
        );
        assert_eq!(merge(&["text-primary", "text-foreground"]), "text-foreground");
    }

    #[test]
    fn border_width_and_color_are_independent() {
        assert_eq!(
            merge(&["border border-transparent", "border-input"]),
            "border border-input"
        );
        assert_eq!(merge(&["border-r", "border-2"]), "border-2");
        assert_eq!(merge(&["border-dashed", "border-solid"]), "border-solid");
    }

    #[test]
    fn background_properties_do_not_replace_background_color() {
        assert_eq!(
            merge(&["bg-primary text-primary-foreground", "bg-cover text-nowrap"]),
            "bg-primary text-primary-foreground bg-cover text-nowrap"
        );
        for utility in [
            "bg-center",
            "bg-no-repeat",
            "bg-fixed",
            "bg-clip-text",
            "bg-gradient-to-r",
            "bg-[url(/hero.png)]",
            "bg-opacity-50",
            "bg-none",
        ] {
            let merged = merge(&["bg-primary", utility]);
            assert_eq!(merged, format!("bg-primary {utility}"), "{utility} dropped bg-primary");
        }
        assert_eq!(merge(&["bg-cover", "bg-contain"]), "bg-contain");
        assert_eq!(merge(&["bg-top", "bg-center"]), "bg-center");
        assert_eq!(merge(&["bg-gradient-to-r", "bg-none"]), "bg-none");
    }

    #[test]
    fn text_wrap_and_opacity_do_not_replace_text_color() {
        for utility in ["text-wrap", "text-nowrap", "text-balance", "text-pretty", "text-opacity-75"] {
            let merged = merge(&["text-primary-foreground", utility]);
            assert_eq!(
                merged,
                format!("text-primary-foreground {utility}"),
                "{utility} dropped text-primary-foreground"
            );
        }
        assert_eq!(merge(&["text-wrap", "text-balance"]), "text-balance");
    }

    #[test]
    fn border_collapse_does_not_replace_border_color() {
        assert_eq!(
            merge(&["border border-input", "border-collapse"]),
            "border border-input border-collapse"
        );
        assert_eq!(merge(&["border-input", "border-spacing-2"]), "border-input border-spacing-2");
        assert_eq!(merge(&["border-collapse", "border-separate"]), "border-separate");
    }

    #[test]
    fn modifier_order_does_not_matter() {
        assert_eq!(merge(&["hover:md:bg-a", "md:hover:bg-b"]), "md:hover:bg-b");
        assert_eq!(
            merge(&["dark:focus:text-red-500", "focus:dark:text-blue-500"]),
            "focus:dark:text-blue-500"
        );
        assert_eq!(
            merge(&["[&>*]:hover:p-2", "hover:[&>*]:p-4"]),
            "[&>*]:hover:p-2 hover:[&>*]:p-4"
        );
    }

    #[test]
    fn display_and_position_keywords_conflict() {
        assert_eq!(merge(&["inline-flex relative", "hidden fixed"]), "hidden fixed");
    }

    #[test]
    fn negative_values_share_the_positive_group() {
        assert_eq!(merge(&["mt-2", "-mt-1"]), "-mt-1");
    }

    #[test]
    fn unknown_classes_are_kept_and_deduplicated() {
        assert_eq!(
            merge(&["ui-button custom", "ui-button px-2"]),
            "custom ui-button px-2"
        );
    }

    #[test]
    fn ignores_empty_and_missing_inputs() {
        assert_eq!(merge_classes([None, Some("  "), Some(" a  b "), None]), "a b");
        assert_eq!(merge_classes(std::iter::empty::<Option<&str>>()), "");
    }

    #[test]
    fn cn_accepts_mixed_argument_types() {
        let owned = String::from("py-2");
        let missing: Option<String> = None;
        let extra = Some("px-6");
        assert_eq!(cn!("px-2", owned, missing, extra), "py-2 px-6");
    }
}
