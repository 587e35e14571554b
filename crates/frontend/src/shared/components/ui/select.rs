use leptos::prelude::*;

/// Single-choice select with a programmatic label
///
/// The displayed value is driven by `value`; the control never keeps its own
/// copy, so external updates to `value` are reflected immediately.
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
    /// ID for the select element, pairs it with the label
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Accessible name announced by screen readers
    #[prop(optional, into)]
    aria_label: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class=move || format!("form__select {}", additional_class())
                aria-label=move || aria_label.get()
                disabled=disabled
                prop:value=move || value.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <For
                    each=move || keyed_options(options.get())
                    key=|(key, _)| key.clone()
                    children=move |((_, val), label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

/// Pair each option with a key that stays unique when values repeat
fn keyed_options(options: Vec<(String, String)>) -> Vec<((usize, String), String)> {
    options
        .into_iter()
        .enumerate()
        .map(|(index, (val, label))| ((index, val), label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keyed_options_unique_for_repeated_values() {
        let options = vec![
            (String::new(), "Unnamed".to_string()),
            ("m1".to_string(), "Alpha".to_string()),
            (String::new(), "Unnamed".to_string()),
        ];
        let keyed = keyed_options(options);

        let keys: HashSet<_> = keyed.iter().map(|(key, _)| key.clone()).collect();
        assert_eq!(keys.len(), 3);
        assert_eq!(keyed[1], ((1, "m1".to_string()), "Alpha".to_string()));
    }
}
