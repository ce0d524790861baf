//! Prompt rendering and placeholder substitution.
//!
//! Both operations are infallible apart from errors reported by the sink
//! being written to.

use std::io::{self, Write};

use crate::loggable::Arg;
use crate::severity::Severity;

/// Marker replaced with the severity's display string in a prompt.
pub const SEVERITY_MARKER: &str = "{sev}";

/// Render `prompt` for `sev`.
///
/// Prompts shorter than [`SEVERITY_MARKER`] are returned untouched. Otherwise
/// only the first `{sev}` is replaced.
pub fn render_prompt(sev: Severity, prompt: &str) -> String {
    if prompt.len() < SEVERITY_MARKER.len() {
        return prompt.to_string();
    }

    prompt.replacen(SEVERITY_MARKER, sev.display_str(), 1)
}

/// Write `template` to `out`, filling each `format_char` with the next argument.
///
/// Substitution walks the template once, left to right. When the arguments
/// run out the rest of the template is written verbatim, including any
/// placeholders still in it. When the placeholders run out the remaining
/// arguments are never rendered. Rendered argument text is not rescanned.
pub fn write_substituted<W: Write + ?Sized>(
    out: &mut W,
    template: &str,
    format_char: char,
    args: &[Arg<'_>],
) -> io::Result<()> {
    let mut buffer = template;

    for arg in args {
        match buffer.find(format_char) {
            Some(pos) => {
                out.write_all(buffer[..pos].as_bytes())?;
                write!(out, "{}", arg)?;
                buffer = &buffer[pos + format_char.len_utf8()..];
            }
            None => break,
        }
    }

    out.write_all(buffer.as_bytes())
}

/// In-memory form of [`write_substituted`].
pub fn format_message(template: &str, format_char: char, args: &[Arg<'_>]) -> String {
    let mut out = Vec::with_capacity(template.len());
    // Writing into a Vec cannot fail
    let _ = write_substituted(&mut out, template, format_char, args);
    String::from_utf8_lossy(&out).into_owned()
}

/// Template with one placeholder per value, separated by single spaces.
pub fn value_template(count: usize, format_char: char) -> String {
    let mut template = String::with_capacity(count * 2);
    for i in 0..count {
        if i > 0 {
            template.push(' ');
        }
        template.push(format_char);
    }
    template
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loggable::Loggable;

    struct Tagged(&'static str);

    impl Loggable for Tagged {
        fn to_log_string(&self) -> String {
            format!("[{}]", self.0)
        }
    }

    #[test]
    fn test_prompt_substitution() {
        assert_eq!(
            render_prompt(Severity::Info, " * tiny ({sev}) | "),
            " * tiny (\x1b[34mINFO\x1b[0m) | "
        );
        assert_eq!(render_prompt(Severity::Trace, "{sev}"), "TRACE");
    }

    #[test]
    fn test_short_prompt_unchanged() {
        for sev in Severity::ALL {
            assert_eq!(render_prompt(sev, ""), "");
            assert_eq!(render_prompt(sev, "{sev"), "{sev");
            assert_eq!(render_prompt(sev, "> "), "> ");
        }
    }

    #[test]
    fn test_prompt_first_marker_only() {
        assert_eq!(
            render_prompt(Severity::Trace, "{sev} {sev}: "),
            "TRACE {sev}: "
        );
    }

    #[test]
    fn test_prompt_without_marker() {
        assert_eq!(render_prompt(Severity::Fatal, "app | "), "app | ");
    }

    #[test]
    fn test_substitutes_in_order() {
        let out = format_message(
            "@, @, @",
            '@',
            &[Arg::from(&42), Arg::from(&"'WOW!'"), Arg::from(&false)],
        );
        assert_eq!(out, "42, 'WOW!', false");
    }

    #[test]
    fn test_fewer_args_than_placeholders() {
        assert_eq!(format_message("@ @", '@', &[Arg::from(&1)]), "1 @");
        assert_eq!(format_message("a@b@c@d", '@', &[Arg::from(&1), Arg::from(&2)]), "a1b2c@d");
    }

    #[test]
    fn test_more_args_than_placeholders() {
        assert_eq!(
            format_message("x=@ done", '@', &[Arg::from(&1), Arg::from(&2), Arg::from(&3)]),
            "x=1 done"
        );
    }

    #[test]
    fn test_no_args_prints_template() {
        assert_eq!(format_message("@ and @", '@', &[]), "@ and @");
        assert_eq!(format_message("", '@', &[]), "");
    }

    #[test]
    fn test_no_placeholders_ignores_args() {
        for count in 0..4 {
            let values: Vec<i32> = (0..count).collect();
            let args: Vec<Arg<'_>> = values.iter().map(Arg::from).collect();
            assert_eq!(format_message("Hello, World!", '@', &args), "Hello, World!");
        }
    }

    #[test]
    fn test_rendered_text_not_rescanned() {
        assert_eq!(
            format_message("@ @", '@', &[Arg::from(&"a@b"), Arg::from(&"c")]),
            "a@b c"
        );
    }

    #[test]
    fn test_custom_and_multibyte_format_char() {
        assert_eq!(format_message("%-%", '%', &[Arg::from(&1), Arg::from(&2)]), "1-2");
        assert_eq!(format_message("é→§←", '§', &[Arg::from(&"ok")]), "é→ok←");
    }

    #[test]
    fn test_loggable_argument() {
        let tag = Tagged("internal");
        assert_eq!(
            format_message("Test value: @", '@', &[Arg::loggable(&tag)]),
            "Test value: [internal]"
        );
    }

    #[test]
    fn test_value_template() {
        assert_eq!(value_template(1, '@'), "@");
        assert_eq!(value_template(3, '@'), "@ @ @");
        assert_eq!(value_template(2, '#'), "# #");
    }
}
