//! Recipe Form Component
//!
//! Add/edit form bound to the draft.

use leptos::*;
use recipe_book::view::{form_title, submit_label};
use recipe_book::{Action, FormField};

use crate::state::UiState;

/// Add/edit recipe form
#[component]
pub fn RecipeForm() -> impl IntoView {
    let state = use_context::<UiState>().expect("UiState not found");

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state.submit();
    };

    view! {
        <div class="bg-gray-800 rounded-lg p-6 border border-gray-700">
            <h2 class="text-2xl font-semibold mb-4">
                {move || state.recipes.with(|s| form_title(&s.mode))}
            </h2>

            <form on:submit=on_submit class="space-y-3">
                {FormField::all()
                    .iter()
                    .copied()
                    .map(|field| view! { <FormInput field=field /> })
                    .collect_view()}

                <button
                    type="submit"
                    class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-3
                           font-semibold transition-colors"
                >
                    {move || state.recipes.with(|s| submit_label(&s.mode))}
                </button>
            </form>
        </div>
    }
}

/// HTML input type for a form field
fn input_type(field: FormField) -> &'static str {
    match field {
        FormField::Rating => "number",
        _ => "text",
    }
}

#[component]
fn FormInput(field: FormField) -> impl IntoView {
    let state = use_context::<UiState>().expect("UiState not found");

    view! {
        <label class="block">
            <span class="block text-sm text-gray-400 mb-1">{field.label()}</span>
            <input
                type=input_type(field)
                name=field.key()
                prop:value=move || state.recipes.with(|s| s.draft.get(field))
                on:input=move |ev| state.dispatch(Action::Edit(field, event_target_value(&ev)))
                class="w-full bg-gray-700 rounded-lg px-4 py-2 text-white
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_rating_is_numeric() {
        assert_eq!(input_type(FormField::Rating), "number");
        assert_eq!(input_type(FormField::Ingredients), "text");
    }
}
