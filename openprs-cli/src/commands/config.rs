//! Config command - show the resolved options without contacting GitHub

use openprs_core::Options;

use super::ListArgs;

/// Print the resolved configuration
pub fn show(args: &ListArgs) {
    let options = Options::load_with_overrides(args.token.clone(), args.organization.clone());
    print!("{}", render(args, options));
}

/// Describe the configuration as it would be used by a run
fn render(args: &ListArgs, options: openprs_core::Result<Options>) -> String {
    let mut out = String::new();
    out.push_str("openprs Configuration\n");
    out.push_str("=====================\n\n");

    match options {
        Ok(options) => {
            out.push_str(&format!("  organization: {}\n", options.organization));
            out.push_str(&format!("  token: {}\n", options.redacted_token()));
        }
        Err(e) => {
            out.push_str(&format!("  options: invalid ({})\n", e));
        }
    }

    out.push_str(&format!("  endpoint: {}\n", args.endpoint));
    out
}
