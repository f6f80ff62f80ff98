use std::sync::OnceLock;

use dialoguer::theme::SimpleTheme;
use dialoguer::{Confirm, Input, InputValidator, MultiSelect, Select};

static THEME: OnceLock<SimpleTheme> = OnceLock::new();

pub(crate) fn select<T: ToString + Clone>(prompt: impl Into<String>, items: &[T]) -> T {
    let theme = THEME.get_or_init(|| SimpleTheme);
    let index = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .unwrap();
    items[index].clone()
}

pub(crate) fn multi_select<T: ToString + Clone>(
    prompt: impl Into<String>,
    items: &[T],
    defaults: &[bool],
) -> Vec<T> {
    let theme = THEME.get_or_init(|| SimpleTheme);
    MultiSelect::with_theme(theme)
        .with_prompt(prompt)
        .items(items)
        .defaults(defaults)
        .interact()
        .unwrap()
        .into_iter()
        .map(|index| items[index].clone())
        .collect()
}

pub(crate) fn confirm(prompt: impl Into<String>, default: bool) -> bool {
    let theme = THEME.get_or_init(|| SimpleTheme);
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .unwrap()
}

pub(crate) fn input<V>(prompt: impl Into<String>, validator: V) -> String
where
    V: InputValidator<String> + 'static,
    V::Err: ToString,
{
    let theme = THEME.get_or_init(|| SimpleTheme);
    Input::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(validator)
        .interact_text()
        .unwrap()
}
