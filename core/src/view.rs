//! Plain-text rendering of a `QueryForm`.

use std::fmt;

use crate::form::QueryForm;

pub const TITLE: &str = "FASTAPI Query Frontend";
pub const PLACEHOLDER: &str = "Enter your query";

/// Draw the form as it should appear to the user right now.
pub fn render(form: &QueryForm) -> String {
    FormView(form).to_string()
}

struct FormView<'a>(&'a QueryForm);

impl fmt::Display for FormView<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let form = self.0;
        writeln!(out, "{TITLE}")?;
        writeln!(out, "{}", "=".repeat(TITLE.len()))?;

        if form.query().is_empty() {
            writeln!(out, "> ({PLACEHOLDER})")?;
        } else {
            writeln!(out, "> {}", form.query())?;
        }

        if form.can_submit() {
            writeln!(out, "[ Send ]")?;
        } else {
            writeln!(out, "[ Sending... ] (disabled)")?;
        }

        writeln!(out)?;
        writeln!(out, "Response")?;
        writeln!(out, "{}", form.response())
    }
}
