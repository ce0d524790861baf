use tiny_logger::{tl_fatal, tl_info, tl_value, tl_warning, Loggable, Options};

/// Prompt printed before every line
const PROMPT: &str = " * tiny ({sev}) | ";

struct TestLoggable;

impl Loggable for TestLoggable {
    fn to_log_string(&self) -> String {
        "\x1b[35m[This is a my internal value]\x1b[0m".to_string()
    }
}

fn main() {
    tiny_logger::initialise(Options::with_prompt(PROMPT));

    tl_info!("Hello, World!");

    // Anything implementing Display can fill a placeholder
    tl_warning!("@, @, @", 42, "'WOW!'", false);

    // Bare values, no prompt
    tl_value!(123.456);

    let test = TestLoggable;
    tl_fatal!("Test value: @", test);
}
