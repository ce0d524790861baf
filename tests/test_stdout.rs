use std::env;
use std::process::Command;

use tiny_logger::{
    tl_error, tl_fatal, tl_info, tl_log, tl_trace, tl_value, tl_warning, Arg, Loggable, Options,
    Severity,
};

/// Set in the child process that performs the actual logging
const CHILD_ENV: &str = "TINY_LOGGER_STDOUT_CHILD";

struct TestLoggable;

impl Loggable for TestLoggable {
    fn to_log_string(&self) -> String {
        "\x1b[35m[This is a my internal value]\x1b[0m".to_string()
    }
}

fn emit_lines() {
    let test = TestLoggable;

    // Before initialisation: no prompt, default placeholder
    tl_info!("default @", "options");

    tiny_logger::initialise(Options::with_prompt(" * tiny ({sev}) | "));

    tl_info!("Hello, World!");
    tl_warning!("@, @, @", 42, "'WOW!'", false);
    tl_value!(123.456);
    tl_fatal!("Test value: @", test);
    tl_error!("more args than slots: @", 1, 2, 3);
    tl_trace!("more slots than args: @ @ @", 1,);
    tl_log!(Severity::Info, "explicit @", "severity");
    tl_value!(1, "two", 3.5, test);

    tiny_logger::log(Severity::Error, "plain @ call", &[Arg::from(&"function")]);
    tiny_logger::log_value(Arg::from(&"bare"), &[Arg::loggable(&test)]);
}

/// Every stdout form writes exactly one line per call, in call order
#[test]
fn test_stdout_lines() {
    if env::var_os(CHILD_ENV).is_some() {
        emit_lines();
        return;
    }

    let exe = env::current_exe().unwrap();
    let output = Command::new(exe)
        .args(["test_stdout_lines", "--exact", "--test-threads=1", "--nocapture"])
        .env(CHILD_ENV, "1")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = [
        "default options",
        " * tiny (\x1b[34mINFO\x1b[0m) | Hello, World!",
        " * tiny (\x1b[33mWARNING\x1b[0m) | 42, 'WOW!', false",
        "123.456",
        " * tiny (\x1b[1;31mFATAL\x1b[0m) | Test value: \x1b[35m[This is a my internal value]\x1b[0m",
        " * tiny (\x1b[31mERROR\x1b[0m) | more args than slots: 1",
        " * tiny (TRACE) | more slots than args: 1 @ @",
        " * tiny (\x1b[34mINFO\x1b[0m) | explicit severity",
        "1 two 3.5 \x1b[35m[This is a my internal value]\x1b[0m",
        " * tiny (\x1b[31mERROR\x1b[0m) | plain function call",
        "bare \x1b[35m[This is a my internal value]\x1b[0m",
    ];

    // The test harness may print its own text ahead of the first line, so
    // each line is located by its trailing newline and checked for order.
    let mut from = 0;
    for line in expected {
        let needle = format!("{}\n", line);
        let pos = stdout[from..]
            .find(&needle)
            .unwrap_or_else(|| panic!("missing line {:?} in {:?}", line, stdout));
        from += pos + needle.len();
    }
}
