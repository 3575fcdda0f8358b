use jsre::js_vm::{Deadline, NoInterrupt};
use jsre::{EngineOption, Interrupt, JsResult, JsValue, RegExp};
use std::env;
use std::io::{self, BufRead};
use std::time::Duration;

const VERSION: &str = "jsre 0.3 (JavaScript RegExp subset)";
const COPYRIGHT: &str = "Copyright (C) 2026 CppCXY";

fn print_usage() {
    eprintln!("usage: jsre [options] pattern [subject ...]");
    eprintln!("Subjects are read line by line from stdin when none are given.");
    eprintln!("Available options are:");
    eprintln!("  -i        ignore case (adds flag 'i')");
    eprintln!("  -g        global (adds flag 'g')");
    eprintln!("  -f flags  use 'flags' as the flags string");
    eprintln!("  -t        print test() results instead of match arrays");
    eprintln!("  -a        with 'g': print every match of each subject");
    eprintln!("  -d n      limit matcher recursion depth to 'n'");
    eprintln!("  -T ms     give up on a subject after 'ms' milliseconds");
    eprintln!("  -j        print match arrays as JSON");
    eprintln!("  -v        show version information");
    eprintln!("  --        stop handling options");
}

fn print_version() {
    println!("{}", VERSION);
    println!("{}", COPYRIGHT);
}

#[derive(Debug, Default, PartialEq)]
struct Options {
    flags: String,
    test_only: bool,
    all_matches: bool,
    max_depth: Option<usize>,
    timeout_ms: Option<u64>,
    json: bool,
    show_version: bool,
    pattern: Option<String>,
    subjects: Vec<String>,
}

fn option_value<'a>(args: &'a [String], i: &mut usize, name: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("'{}' needs argument", name))
}

/// Parse everything after the program name.
fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut opts = Options::default();
    let mut i = 0;
    let mut stop_options = false;

    while i < args.len() {
        let arg = &args[i];

        if !stop_options && arg.starts_with('-') && arg.len() > 1 {
            match arg.as_str() {
                "-i" => opts.flags.push('i'),
                "-g" => opts.flags.push('g'),
                "-f" => {
                    opts.flags = option_value(args, &mut i, "-f")?.to_string();
                }
                "-t" => opts.test_only = true,
                "-a" => opts.all_matches = true,
                "-d" => {
                    let v = option_value(args, &mut i, "-d")?;
                    let depth = v
                        .parse::<usize>()
                        .map_err(|_| format!("bad depth '{}'", v))?;
                    opts.max_depth = Some(depth);
                }
                "-T" => {
                    let v = option_value(args, &mut i, "-T")?;
                    let ms = v
                        .parse::<u64>()
                        .map_err(|_| format!("bad timeout '{}'", v))?;
                    opts.timeout_ms = Some(ms);
                }
                "-j" => opts.json = true,
                "-v" => opts.show_version = true,
                "--" => stop_options = true,
                _ => return Err(format!("unrecognized option '{}'", arg)),
            }
        } else {
            // first operand is the pattern, the rest are subjects
            opts.pattern = Some(arg.clone());
            opts.subjects.extend(args[i + 1..].iter().cloned());
            break;
        }
        i += 1;
    }

    Ok(opts)
}

fn format_value(value: &JsValue, json: bool) -> Result<String, String> {
    if json {
        #[cfg(feature = "serde")]
        return jsre::serde::js_to_json_string(value, false);
        #[cfg(not(feature = "serde"))]
        return Err("built without JSON support".to_string());
    }
    Ok(format!("{:?}", value))
}

fn run_subject<I: Interrupt>(
    re: &mut RegExp,
    opts: &Options,
    subject: &str,
    interrupt: I,
) -> JsResult<Vec<JsValue>> {
    let mut out = Vec::new();
    if opts.test_only {
        out.push(JsValue::boolean(re.test_with(subject, &interrupt)?));
    } else if opts.all_matches && re.is_global() {
        for m in re.match_all(subject, &interrupt)? {
            out.push(m.to_js_value());
        }
    } else {
        let v = match re.exec_with(subject, &interrupt)? {
            Some(m) => m.to_js_value(),
            None => JsValue::null(),
        };
        out.push(v);
    }
    Ok(out)
}

fn process(re: &mut RegExp, opts: &Options, subject: &str) -> Result<(), String> {
    let results = match opts.timeout_ms {
        Some(ms) => run_subject(re, opts, subject, Deadline::after(Duration::from_millis(ms))),
        None => run_subject(re, opts, subject, NoInterrupt),
    }
    .map_err(|e| e.to_string())?;

    for v in &results {
        println!("{}", format_value(v, opts.json)?);
    }
    Ok(())
}

fn main() {
    env_logger::init();
    std::process::exit(jsre_main());
}

fn jsre_main() -> i32 {
    let args: Vec<String> = env::args().skip(1).collect();
    let opts = match parse_args(&args) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("jsre: {}", e);
            print_usage();
            return 1;
        }
    };

    if opts.show_version {
        print_version();
        if opts.pattern.is_none() {
            return 0;
        }
    }

    let Some(pattern) = &opts.pattern else {
        print_usage();
        return 1;
    };

    let flags = (!opts.flags.is_empty()).then_some(opts.flags.as_str());
    let mut option = EngineOption::default();
    if let Some(depth) = opts.max_depth {
        option = option.with_max_match_depth(depth);
    }
    let mut re = RegExp::new(pattern, flags).with_option(option);
    log::debug!("compiled /{}/{}", re.source(), re.flags().unwrap_or(""));

    if !opts.subjects.is_empty() {
        for subject in &opts.subjects {
            if let Err(e) = process(&mut re, &opts, subject) {
                eprintln!("jsre: {}", e);
                return 1;
            }
        }
        return 0;
    }

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("jsre: error reading stdin: {}", e);
                return 1;
            }
        };
        if let Err(e) = process(&mut re, &opts, &line) {
            eprintln!("jsre: {}", e);
            return 1;
        }
    }
    0
}
