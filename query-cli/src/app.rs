//! Terminal host for the query form.
//!
//! Each input line is an input event followed by a submit event. The form is
//! drawn once with the pending state and once after the reply arrives.

use std::io::{BufRead, Write};

use anyhow::Result;
use query_core::{render, Api, QueryForm, QueryResponse, SubmitOutcome, Transport};

/// Run the interactive loop until `input` reaches EOF.
pub fn run_interactive<T, R, W>(api: &Api<T>, input: R, mut output: W) -> Result<QueryForm>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    let mut form = QueryForm::new();
    write!(output, "{}", render(&form))?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        form.set_query(line);

        let Some(request) = form.begin_submit() else {
            continue;
        };
        write!(output, "\n{}", render(&form))?;
        output.flush()?;

        let outcome = api
            .post::<QueryResponse, _>(query_core::QUERY_PATH, &request)
            .map(|res| res.data);
        form.finish(outcome);

        write!(output, "\n{}", render(&form))?;
        output.flush()?;
    }

    tracing::debug!("input closed");
    Ok(form)
}

/// Submit `query` once and write only the response text.
///
/// Returns `false` when the request failed.
pub fn run_once<T, W>(api: &Api<T>, query: &str, mut output: W) -> Result<bool>
where
    T: Transport,
    W: Write,
{
    let mut form = QueryForm::new();
    form.set_query(query);
    let outcome = form.submit(api);
    writeln!(output, "{}", form.response())?;
    output.flush()?;
    Ok(outcome == SubmitOutcome::Succeeded)
}
