//! Print the OpenAPI document as pretty JSON on stdout.

use std::io::{self, Write};
use std::process::ExitCode;

use user_directory::ApiDoc;
use utoipa::OpenApi;

fn main() -> ExitCode {
    let rendered = match ApiDoc::openapi().to_pretty_json() {
        Ok(json) => json,
        Err(err) => {
            let _ = writeln!(io::stderr(), "failed to render OpenAPI document: {err}");
            return ExitCode::FAILURE;
        }
    };

    match writeln!(io::stdout().lock(), "{rendered}") {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = writeln!(io::stderr(), "failed to write OpenAPI document: {err}");
            ExitCode::FAILURE
        }
    }
}
