extern crate argparse;
extern crate html2doc;
use argparse::{ArgumentParser, StoreOption, StoreTrue};
use html2doc::{config, EventCollector, HtmlFragmentRenderer};
use std::io;
use std::io::Write;

fn translate<R>(input: R, events: bool, lenient: bool) -> html2doc::Result<String>
where
    R: io::Read,
{
    let conf = if lenient {
        config::lenient()
    } else {
        config::strict()
    };
    if events {
        let collector = conf.translate_read(input, EventCollector::new())?;
        let mut result = String::new();
        let mut depth = 0usize;
        for event in collector.into_events() {
            if event.is_end() {
                depth = depth.saturating_sub(1);
            }
            result.push_str(&"  ".repeat(depth));
            result.push_str(&format!("{:?}\n", event));
            if event.is_start() {
                depth += 1;
            }
        }
        Ok(result)
    } else {
        let renderer = conf.translate_read(input, HtmlFragmentRenderer::default())?;
        let mut result = renderer.into_string();
        result.push('\n');
        Ok(result)
    }
}

fn main() {
    env_logger::init();

    let mut infile: Option<String> = None;
    let mut outfile: Option<String> = None;
    let mut events = false;
    let mut lenient = false;

    {
        let mut ap = ArgumentParser::new();
        ap.refer(&mut infile).add_argument(
            "infile",
            StoreOption,
            "Input HTML file (default is standard input)",
        );
        ap.refer(&mut outfile).add_option(
            &["-o", "--output"],
            StoreOption,
            "Output file (default is standard output)",
        );
        ap.refer(&mut events).add_option(
            &["-e", "--events"],
            StoreTrue,
            "Print the structural events instead of an HTML fragment",
        );
        ap.refer(&mut lenient).add_option(
            &["-l", "--lenient"],
            StoreTrue,
            "Repair badly nested markup instead of failing",
        );
        ap.parse_args_or_exit();
    }

    let result = match infile {
        None => translate(io::stdin(), events, lenient),
        Some(name) => {
            let file = std::fs::File::open(name).expect("Tried to open file");
            translate(file, events, lenient)
        }
    };
    let data = match result {
        Ok(data) => data,
        Err(e) => {
            log::error!("Translation failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    match outfile {
        None => {
            print!("{}", data);
        }
        Some(name) => {
            let mut file = std::fs::File::create(name).expect("Tried to create file");
            write!(file, "{}", data).unwrap();
        }
    };
}
