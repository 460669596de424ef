use super::*;

/// Merges the button base, variant, and size classes with caller overrides.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, class: Option<&str>) -> String {
    merge_classes([
        Some(ButtonVariant::BASE),
        Some(variant.classes()),
        Some(size.classes()),
        class,
    ])
}

#[derive(Clone)]
/// Resolved button props handed to an `as_child` renderer.
///
/// The renderer owns the element, so it must apply `class`, spread `attrs`,
/// and wire `disabled` and [`ButtonSlot::click`] itself.
pub struct ButtonSlot {
    /// Fully merged class string.
    pub class: String,
    /// Resolved variant.
    pub variant: ButtonVariant,
    /// Resolved size.
    pub size: ButtonSize,
    /// Disabled state, still reactive.
    pub disabled: MaybeSignal<bool>,
    /// Pass-through attributes given to the button.
    pub attrs: Vec<(&'static str, Attribute)>,
    /// Click handler given to the button.
    pub on_click: Option<Callback<MouseEvent>>,
}

impl ButtonSlot {
    /// Click listener that forwards to `on_click` unless the slot is disabled.
    pub fn click(&self) -> impl Fn(MouseEvent) + 'static {
        let disabled = self.disabled.clone();
        let on_click = self.on_click.clone();
        move |ev| {
            if disabled.get_untracked() {
                ev.prevent_default();
                return;
            }
            if let Some(on_click) = on_click.as_ref() {
                on_click.call(ev);
            }
        }
    }
}

#[component]
/// Shared button primitive with variant and size tokens.
///
/// When `as_child` is supplied the button renders through it instead of a
/// native `<button>`, so links and other interactive elements can share the
/// button styling. The renderer receives every prop in a [`ButtonSlot`];
/// `children` is ignored in that case.
pub fn Button(
    #[prop(optional, into)] variant: ButtonVariant,
    #[prop(optional, into)] size: ButtonSize,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] as_child: Option<Callback<ButtonSlot, View>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let class = button_class(variant, size, class.as_deref());

    if let Some(as_child) = as_child {
        return as_child.call(ButtonSlot {
            class,
            variant,
            size,
            disabled,
            attrs,
            on_click,
        });
    }

    view! {
        <button
            type="button"
            class=class
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            {..attrs}
        >
            {children.map(|children| children())}
        </button>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens(class: &str) -> Vec<&str> {
        class.split_whitespace().collect()
    }

    #[test]
    fn every_variant_and_size_keeps_base_and_lookup_classes() {
        for variant in ButtonVariant::ALL {
            for size in ButtonSize::ALL {
                let class = button_class(variant, size, None);
                let class = tokens(&class);
                for expected in ["inline-flex", "items-center", "font-medium", "transition-colors"] {
                    assert!(class.contains(&expected), "{variant:?}/{size:?} lost {expected}");
                }
                for expected in variant.classes().split_whitespace() {
                    assert!(class.contains(&expected), "{variant:?} lost {expected}");
                }
                for expected in size.classes().split_whitespace() {
                    assert!(class.contains(&expected), "{size:?} lost {expected}");
                }
            }
        }
    }

    #[test]
    fn size_overrides_conflicting_base_classes() {
        let class = button_class(ButtonVariant::Default, ButtonSize::Sm, None);
        let class = tokens(&class);
        assert!(class.contains(&"text-xs"));
        assert!(!class.contains(&"text-sm"));
        assert_eq!(class.iter().filter(|token| **token == "rounded-md").count(), 1);
    }

    #[test]
    fn unknown_variant_matches_default_output() {
        assert_eq!(
            button_class(
                ButtonVariant::from("shiny"),
                ButtonSize::from("huge"),
                None
            ),
            button_class(ButtonVariant::default(), ButtonSize::default(), None)
        );
    }

    #[test]
    fn caller_classes_win_over_variant_and_size() {
        let class = button_class(
            ButtonVariant::Default,
            ButtonSize::Default,
            Some("bg-emerald-600 h-12 w-full"),
        );
        let class = tokens(&class);
        assert!(class.contains(&"bg-emerald-600"));
        assert!(class.contains(&"h-12"));
        assert!(class.contains(&"w-full"));
        assert!(!class.contains(&"bg-primary"));
        assert!(!class.contains(&"h-9"));
        assert!(class.contains(&"hover:bg-primary/90"));
        assert_eq!(class.last(), Some(&"w-full"));
    }

    #[test]
    fn outline_variant_keeps_border_width_and_color() {
        let class = button_class(ButtonVariant::Outline, ButtonSize::Icon, None);
        let class = tokens(&class);
        assert!(class.contains(&"border"));
        assert!(class.contains(&"border-input"));
        assert!(class.contains(&"w-9"));
    }
}
