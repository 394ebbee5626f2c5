use super::result::GenerationResult;

pub const TITLE: &str = "Everything Will Be Okay";

/// PURE FUNCTION: Lays a generation result out as plain text for a terminal.
pub fn render_text(result: &GenerationResult) -> String {
    let mut out = String::new();

    out.push_str(TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(TITLE.len()));
    out.push_str("\n\n");

    out.push_str(&result.main_message);
    out.push_str("\n\n");

    out.push_str("Possible Reasons:\n");
    for reason in &result.reasons {
        out.push_str(&format!("  • {}\n", reason));
    }

    if let Some(quote) = &result.quote {
        out.push('\n');
        out.push_str(&format!("  ❝ {} ❞\n", quote.original));
        out.push_str(&format!("    {}\n", quote.translation));
    }

    if !result.tips.is_empty() {
        out.push_str("\nWhat You Can Do:\n");
        for tip in &result.tips {
            out.push_str(&format!("  - {}\n", tip));
        }
    }

    out
}
