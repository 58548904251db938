//! Report handler.

use log::debug;

use crate::{
    console::Console,
    display::rows_to_text,
    error::Result,
    export::print_and_maybe_save,
    input::read_id,
    reports::{Report, Subject},
    session::Session,
};

fn subject_prompt(subject: Subject) -> &'static str {
    match subject {
        Subject::Salesman => "Salesman ID: ",
        Subject::Customer => "Customer ID: ",
    }
}

/// Collects the report parameter if there is one, runs the report and
/// prints (and optionally saves) the result. Returns the rendered text.
pub fn handle_report<C: Console>(session: &mut Session<C>, report: Report) -> Result<String> {
    let subject_id = match report.subject() {
        Some(subject) => Some(read_id(&mut session.console, subject_prompt(subject))?),
        None => None,
    };

    debug!("Running report {report:?} for {subject_id:?}");
    let rows = session.store.run_report(report, subject_id)?;
    let text = rows_to_text(&rows, Some(&report.title(subject_id)));

    print_and_maybe_save(&mut session.console, &session.exporter, text)
}
