//! `{{name}}` placeholder substitution for translated templates.

/// Replace every `{{key}}` in `template` with its value.
///
/// The template is scanned once, so substituted values are never searched
/// for further placeholders. Unknown placeholders are left as they are.
pub fn resolve_placeholder_string(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("}}") else {
            rest = &rest[open..];
            break;
        };

        let key = &after_open[..close];
        match args.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[open..open + 2 + close + 2]),
        }
        rest = &after_open[close + 2..];
    }

    out.push_str(rest);
    out
}
