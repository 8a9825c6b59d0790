use recdef::mach::{Runtime, Tokens};

/// Runs `source` on a fresh runtime and returns everything written,
/// including prompts and the status line.
pub fn exec(source: &str, input: &str) -> String {
    let mut runtime = Runtime::default();
    exec_on(&mut runtime, source, input)
}

#[allow(dead_code)]
pub fn exec_on(runtime: &mut Runtime, source: &str, input: &str) -> String {
    let mut input = Tokens::new(input.as_bytes());
    let mut output: Vec<u8> = vec![];
    let _ = runtime.run(source, &mut input, &mut output);
    String::from_utf8(output).unwrap()
}

/// Program output with the success line removed. Panics if the run failed.
#[allow(dead_code)]
pub fn exec_ok(source: &str, input: &str) -> String {
    let s = exec(source, input);
    match s.strip_suffix("PROGRAM ENDED SUCCESSFULLY.\n") {
        Some(out) => out.to_string(),
        None => panic!("program failed:\n{}", s),
    }
}
